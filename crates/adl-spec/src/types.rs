//! Document model types.
//!
//! Field names follow the camelCase keys used in `agent.yaml`. Sections that
//! the validator must be able to report as missing are modelled as `Option`
//! or defaulted, so that an incomplete document still deserializes and the
//! validator, not serde, decides what is wrong with it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecError};
use crate::validation::Violation;

/// Required value of `apiVersion`.
pub const API_VERSION: &str = "adl.dev/v1";

/// Required value of `kind`.
pub const KIND: &str = "Agent";

/// Root ADL document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: AgentSpec,
}

/// Agent identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Slug used for package names and output path placeholders.
    pub name: String,
    pub description: String,
    /// Semver string.
    pub version: String,
}

/// The `spec` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSpec {
    #[serde(default)]
    pub capabilities: Option<Capabilities>,
    #[serde(default)]
    pub agent: Option<AgentConfig>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub language: Option<LanguageConfig>,
    #[serde(default)]
    pub deployment: Option<DeploymentConfig>,
    #[serde(default)]
    pub sandbox: Option<SandboxConfig>,
    #[serde(default)]
    pub scm: Option<ScmConfig>,
    #[serde(default)]
    pub hooks: Option<HooksConfig>,
}

/// A2A capability flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Capabilities {
    pub streaming: bool,
    pub push_notifications: bool,
    pub state_transition_history: bool,
}

/// LLM backing the agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentConfig {
    pub provider: Option<Provider>,
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Openai,
    Anthropic,
    Azure,
    Ollama,
    Deepseek,
    Google,
    Mistral,
    Groq,
}

/// A skill exposed by the agent. Each skill produces one tool source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// JSON-schema fragment describing the tool input.
    pub schema: Option<serde_json::Value>,
}

/// HTTP server settings of the generated agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Signed and wider than `u16` so that any integer reaches the range check.
    pub port: i64,
    pub debug: bool,
}

/// Target language block. Exactly one member must be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub go: Option<GoConfig>,
    pub typescript: Option<TypeScriptConfig>,
    pub rust: Option<RustConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoConfig {
    pub module: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeScriptConfig {
    pub package_name: String,
    pub node_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RustConfig {
    pub package_name: String,
    pub version: String,
    pub edition: String,
}

impl LanguageConfig {
    /// Languages whose block is present, in declaration order.
    pub fn populated(&self) -> Vec<Language> {
        let mut found = Vec::new();
        if self.go.is_some() {
            found.push(Language::Go);
        }
        if self.typescript.is_some() {
            found.push(Language::TypeScript);
        }
        if self.rust.is_some() {
            found.push(Language::Rust);
        }
        found
    }
}

/// Resolved target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    TypeScript,
    Rust,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::Go, Language::TypeScript, Language::Rust];

    /// Directory name used under `languages/` and in language-qualified keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::TypeScript => "typescript",
            Self::Rust => "rust",
        }
    }

    /// Extension of generated source files.
    pub fn source_extension(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::TypeScript => "ts",
            Self::Rust => "rs",
        }
    }

    /// Directory holding per-skill tool files.
    pub fn tools_dir(&self) -> &'static str {
        match self {
            Self::Go => "tools",
            Self::TypeScript | Self::Rust => "src/tools",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    #[serde(rename = "type", default)]
    pub deployment_type: Option<DeploymentType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentType {
    Kubernetes,
    #[serde(alias = "cloud-run")]
    CloudRun,
}

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kubernetes => "kubernetes",
            Self::CloudRun => "cloudrun",
        }
    }
}

/// Development sandboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub flox: Option<SandboxToggle>,
    pub devcontainer: Option<SandboxToggle>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxToggle {
    pub enabled: bool,
}

/// Source control settings. The provider is free text so that unknown
/// providers parse and can fall back at generation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScmConfig {
    pub provider: String,
    pub url: Option<String>,
}

/// Commands run after generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    pub post: Vec<String>,
}

impl Document {
    /// Resolve the single target language.
    pub fn language(&self) -> Result<Language> {
        let Some(config) = &self.spec.language else {
            return Err(SpecError::Validation(Violation::new(
                "spec.language",
                "spec.language is required",
            )));
        };

        match config.populated().as_slice() {
            [language] => Ok(*language),
            found => Err(SpecError::Validation(Violation::language_count(found))),
        }
    }

    pub fn deployment_type(&self) -> Option<DeploymentType> {
        self.spec
            .deployment
            .as_ref()
            .and_then(|d| d.deployment_type)
    }

    pub fn flox_enabled(&self) -> bool {
        self.spec
            .sandbox
            .as_ref()
            .and_then(|s| s.flox)
            .map(|t| t.enabled)
            .unwrap_or(false)
    }

    pub fn devcontainer_enabled(&self) -> bool {
        self.spec
            .sandbox
            .as_ref()
            .and_then(|s| s.devcontainer)
            .map(|t| t.enabled)
            .unwrap_or(false)
    }

    /// Apply a `--deployment` override.
    pub fn set_deployment_type(&mut self, deployment_type: DeploymentType) {
        self.spec
            .deployment
            .get_or_insert_with(DeploymentConfig::default)
            .deployment_type = Some(deployment_type);
    }

    /// Apply a `--flox` override.
    pub fn enable_flox(&mut self) {
        self.spec
            .sandbox
            .get_or_insert_with(SandboxConfig::default)
            .flox = Some(SandboxToggle { enabled: true });
    }

    /// Apply a `--devcontainer` override.
    pub fn enable_devcontainer(&mut self) {
        self.spec
            .sandbox
            .get_or_insert_with(SandboxConfig::default)
            .devcontainer = Some(SandboxToggle { enabled: true });
    }

    /// Find a skill by its `name`.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.spec.skills.iter().find(|s| s.name == name)
    }

    /// Post-generation hook commands, empty when none are declared.
    pub fn post_hooks(&self) -> &[String] {
        self.spec
            .hooks
            .as_ref()
            .map(|h| h.post.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGENT_YAML: &str = r#"
apiVersion: adl.dev/v1
kind: Agent
metadata:
  name: weather-agent
  description: Reports the weather
  version: 0.1.0
spec:
  capabilities:
    streaming: true
    pushNotifications: false
  agent:
    provider: openai
    model: gpt-4o
    systemPrompt: You are a weather assistant.
    maxTokens: 4096
    temperature: 0.7
  skills:
    - id: get-weather
      name: get_weather
      description: Get the current weather
      tags: [weather]
      schema:
        type: object
        properties:
          location:
            type: string
        required: [location]
  server:
    port: 8080
  language:
    go:
      module: github.com/example/weather-agent
      version: "1.24"
  sandbox:
    flox:
      enabled: true
  scm:
    provider: github
    url: https://github.com/example/weather-agent
  hooks:
    post:
      - go fmt ./...
"#;

    fn parse(yaml: &str) -> Document {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_parse_full_document() {
        let doc = parse(AGENT_YAML);

        assert_eq!(doc.api_version, API_VERSION);
        assert_eq!(doc.kind, KIND);
        assert_eq!(doc.metadata.name, "weather-agent");

        let caps = doc.spec.capabilities.unwrap();
        assert!(caps.streaming);
        assert!(!caps.push_notifications);
        assert!(!caps.state_transition_history);

        let agent = doc.spec.agent.as_ref().unwrap();
        assert_eq!(agent.provider, Some(Provider::Openai));
        assert_eq!(agent.max_tokens, Some(4096));

        assert_eq!(doc.spec.skills.len(), 1);
        let schema = doc.spec.skills[0].schema.as_ref().unwrap();
        assert_eq!(schema["properties"]["location"]["type"], "string");

        assert_eq!(doc.spec.server.port, 8080);
        assert_eq!(doc.post_hooks(), ["go fmt ./..."]);
    }

    #[test]
    fn test_language_resolution() {
        let doc = parse(AGENT_YAML);
        assert_eq!(doc.language().unwrap(), Language::Go);
    }

    #[test]
    fn test_language_missing_is_error_not_panic() {
        let mut doc = parse(AGENT_YAML);
        doc.spec.language = None;

        let err = doc.language().unwrap_err();
        assert!(err.to_string().contains("spec.language is required"));
    }

    #[test]
    fn test_two_languages_is_error() {
        let mut doc = parse(AGENT_YAML);
        doc.spec.language.as_mut().unwrap().rust = Some(RustConfig::default());

        assert!(matches!(doc.language(), Err(SpecError::Validation(_))));
    }

    #[test]
    fn test_sandbox_and_deployment_accessors() {
        let mut doc = parse(AGENT_YAML);
        assert!(doc.flox_enabled());
        assert!(!doc.devcontainer_enabled());
        assert_eq!(doc.deployment_type(), None);

        doc.set_deployment_type(DeploymentType::Kubernetes);
        doc.enable_devcontainer();

        assert_eq!(doc.deployment_type(), Some(DeploymentType::Kubernetes));
        assert!(doc.devcontainer_enabled());
        assert!(doc.flox_enabled());
    }

    #[test]
    fn test_deployment_type_names() {
        let d: DeploymentConfig = serde_yaml::from_str("type: kubernetes").unwrap();
        assert_eq!(d.deployment_type, Some(DeploymentType::Kubernetes));

        let d: DeploymentConfig = serde_yaml::from_str("type: cloudrun").unwrap();
        assert_eq!(d.deployment_type, Some(DeploymentType::CloudRun));
    }

    #[test]
    fn test_language_helpers() {
        assert_eq!(Language::Go.tools_dir(), "tools");
        assert_eq!(Language::Rust.tools_dir(), "src/tools");
        assert_eq!(Language::TypeScript.source_extension(), "ts");
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let doc = parse(AGENT_YAML);
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["apiVersion"], API_VERSION);
        assert_eq!(json["spec"]["capabilities"]["pushNotifications"], false);
        assert_eq!(json["spec"]["agent"]["systemPrompt"], "You are a weather assistant.");
        assert_eq!(json["spec"]["language"]["go"]["module"], "github.com/example/weather-agent");
    }

    #[test]
    fn test_skill_lookup_by_name() {
        let doc = parse(AGENT_YAML);
        assert!(doc.skill("get_weather").is_some());
        assert!(doc.skill("get-weather").is_none());
    }
}
