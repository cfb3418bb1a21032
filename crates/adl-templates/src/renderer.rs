//! Handlebars rendering and output path placeholders.

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext as HbRenderContext,
    RenderErrorReason,
};
use serde::Serialize;

use crate::error::{Result, TemplateError};

/// Placeholders in output paths that expand to `metadata.name`.
const PATH_PLACEHOLDERS: [&str; 5] = ["{{.Name}}", "{{ .Name }}", "{{name}}", "{{ name }}", "{name}"];

/// Renders template bodies against a JSON context.
///
/// Output is never HTML-escaped and missing values render as empty strings.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_helper("snake_case", Box::new(snake_case_helper));
        handlebars.register_helper("pascal_case", Box::new(pascal_case_helper));
        handlebars.register_helper("camel_case", Box::new(camel_case_helper));
        handlebars.register_helper("kebab_case", Box::new(kebab_case_helper));
        handlebars.register_helper("upper", Box::new(upper_helper));
        handlebars.register_helper("json", Box::new(json_helper));
        handlebars.register_helper("json_pretty", Box::new(json_pretty_helper));

        Self { handlebars }
    }

    /// Render `body`; `key` only labels errors.
    pub fn render<T: Serialize>(&self, key: &str, body: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(body, data)
            .map_err(|e| TemplateError::Render {
                key: key.to_string(),
                message: e.to_string(),
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitute name placeholders in an output path.
pub fn render_path(path: &str, name: &str) -> String {
    PATH_PLACEHOLDERS
        .iter()
        .fold(path.to_string(), |path, placeholder| path.replace(placeholder, name))
}

fn str_param<'a>(h: &'a Helper) -> &'a str {
    h.param(0).and_then(|v| v.value().as_str()).unwrap_or("")
}

fn snake_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HbRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&to_snake_case(str_param(h)))?;
    Ok(())
}

fn pascal_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HbRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&to_pascal_case(str_param(h)))?;
    Ok(())
}

fn camel_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HbRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&to_camel_case(str_param(h)))?;
    Ok(())
}

fn kebab_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HbRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&to_kebab_case(str_param(h)))?;
    Ok(())
}

fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HbRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&str_param(h).to_uppercase())?;
    Ok(())
}

fn json_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HbRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).map(|v| v.value().clone()).unwrap_or_default();
    let json =
        serde_json::to_string(&value).map_err(|e| RenderErrorReason::Other(e.to_string()))?;
    out.write(&json)?;
    Ok(())
}

fn json_pretty_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut HbRenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).map(|v| v.value().clone()).unwrap_or_default();
    let json = serde_json::to_string_pretty(&value)
        .map_err(|e| RenderErrorReason::Other(e.to_string()))?;
    out.write(&json)?;
    Ok(())
}

/// Split an identifier into lowercase words on separators and camel humps.
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

fn to_snake_case(s: &str) -> String {
    words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}
