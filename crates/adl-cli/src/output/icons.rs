//! Status markers, with an ASCII fallback for terminals without unicode.

use std::env;

use adl_generator::FileStatus;

#[derive(Debug, Clone, Copy)]
struct Icon {
    unicode: &'static str,
    ascii: &'static str,
}

const CHECK: Icon = Icon { unicode: "✓", ascii: "[ok]" };
const CROSS: Icon = Icon { unicode: "✗", ascii: "[err]" };
const WARNING: Icon = Icon { unicode: "⚠", ascii: "[warn]" };
const INFO: Icon = Icon { unicode: "ℹ", ascii: "[info]" };
const PLUS: Icon = Icon { unicode: "+", ascii: "+" };
const TILDE: Icon = Icon { unicode: "~", ascii: "~" };
const SKIP: Icon = Icon { unicode: "·", ascii: "-" };
const LOCK: Icon = Icon { unicode: "⊘", ascii: "!" };

#[derive(Debug, Clone, Copy)]
pub struct IconContext {
    unicode: bool,
}

impl IconContext {
    pub fn new() -> Self {
        Self::with_unicode(detect_unicode_support())
    }

    pub fn with_unicode(unicode: bool) -> Self {
        Self { unicode }
    }

    fn pick(&self, icon: Icon) -> &'static str {
        if self.unicode {
            icon.unicode
        } else {
            icon.ascii
        }
    }

    pub fn check(&self) -> &'static str {
        self.pick(CHECK)
    }

    pub fn cross(&self) -> &'static str {
        self.pick(CROSS)
    }

    pub fn warning(&self) -> &'static str {
        self.pick(WARNING)
    }

    pub fn info(&self) -> &'static str {
        self.pick(INFO)
    }

    /// Marker for a file outcome.
    pub fn status(&self, status: FileStatus) -> &'static str {
        self.pick(match status {
            FileStatus::Created => PLUS,
            FileStatus::Overwritten => TILDE,
            FileStatus::SkippedExisting => SKIP,
            FileStatus::Ignored => LOCK,
        })
    }
}

impl Default for IconContext {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_unicode_support() -> bool {
    env::var("TERM").map(|t| !t.contains("linux")).unwrap_or(true)
        && env::var("LANG")
            .map(|l| l.to_uppercase().contains("UTF"))
            .unwrap_or(true)
}
