//! Framework-agnostic statement templates.
//!
//! A template is a string with `${...}` placeholders. Substitution is
//! textual; unresolved placeholders collapse to the empty string. Every
//! rendered fragment is validated by parsing it with the real grammar
//! before it is allowed anywhere near the target buffer, which doubles as
//! the escaping check: a binding value that would break statement syntax
//! fails the fragment parse instead of producing garbage edits.

pub mod keys;

use logweave_core::errors::RenderError;

use crate::parser::{fragment_is_valid, FragmentKind};
use crate::profiles::Profile;

/// The placeholder vocabulary templates may use.
pub const PLACEHOLDER_NAMES: &[&str] = &[
    "logger",
    "enclosing_type",
    "enclosing_method",
    "message",
    "message_user",
    "variables",
    "return_value",
    "exception",
    "delimiter",
    "delimiter_msg",
];

/// Values substituted into a template's placeholders.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    pub logger: Option<String>,
    pub enclosing_type: Option<String>,
    pub enclosing_method: Option<String>,
    pub message: Option<String>,
    pub message_user: Option<String>,
    pub variables: Option<String>,
    pub return_value: Option<String>,
    pub exception: Option<String>,
    pub delimiter: Option<String>,
    pub delimiter_msg: Option<String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logger(mut self, v: impl Into<String>) -> Self {
        self.logger = Some(v.into());
        self
    }

    pub fn enclosing_type(mut self, v: impl Into<String>) -> Self {
        self.enclosing_type = Some(v.into());
        self
    }

    pub fn enclosing_method(mut self, v: impl Into<String>) -> Self {
        self.enclosing_method = Some(v.into());
        self
    }

    pub fn message(mut self, v: impl Into<String>) -> Self {
        self.message = Some(v.into());
        self
    }

    pub fn message_user(mut self, v: impl Into<String>) -> Self {
        self.message_user = Some(v.into());
        self
    }

    pub fn variables(mut self, v: impl Into<String>) -> Self {
        self.variables = Some(v.into());
        self
    }

    pub fn return_value(mut self, v: impl Into<String>) -> Self {
        self.return_value = Some(v.into());
        self
    }

    pub fn exception(mut self, v: impl Into<String>) -> Self {
        self.exception = Some(v.into());
        self
    }

    pub fn delimiter(mut self, v: impl Into<String>) -> Self {
        self.delimiter = Some(v.into());
        self
    }

    pub fn delimiter_msg(mut self, v: impl Into<String>) -> Self {
        self.delimiter_msg = Some(v.into());
        self
    }

    fn resolve(&self, name: &str) -> &str {
        let slot = match name {
            "logger" => &self.logger,
            "enclosing_type" => &self.enclosing_type,
            "enclosing_method" => &self.enclosing_method,
            "message" => &self.message,
            "message_user" => &self.message_user,
            "variables" => &self.variables,
            "return_value" => &self.return_value,
            "exception" => &self.exception,
            "delimiter" => &self.delimiter,
            "delimiter_msg" => &self.delimiter_msg,
            _ => return "",
        };
        slot.as_deref().unwrap_or("")
    }
}

/// Substitute `${...}` placeholders. Unknown and unbound placeholders
/// collapse to the empty string; an unterminated `${` is kept verbatim.
pub fn substitute(template: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find('}') {
            Some(end) => {
                let key = &rest[start + 2..start + 2 + end];
                out.push_str(bindings.resolve(key));
                rest = &rest[start + 2 + end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render the template stored under `key` in the profile and validate the
/// result as the given fragment kind.
pub fn render(
    profile: &Profile,
    key: &str,
    bindings: &Bindings,
    kind: FragmentKind,
) -> Result<String, RenderError> {
    let raw = profile.template(key).ok_or_else(|| RenderError::MissingTemplate {
        key: key.to_string(),
    })?;
    ensure_valid(key, substitute(raw, bindings), kind)
}

/// Render the logger declaration, honoring the static/final flags.
pub fn render_declaration(
    profile: &Profile,
    bindings: &Bindings,
    use_static: bool,
    use_final: bool,
) -> Result<String, RenderError> {
    let raw = profile
        .template(keys::LOGGER_DECLARATION)
        .ok_or_else(|| RenderError::MissingTemplate {
            key: keys::LOGGER_DECLARATION.to_string(),
        })?;
    let rendered = strip_modifiers(&substitute(raw, bindings), use_static, use_final);
    ensure_valid(keys::LOGGER_DECLARATION, rendered, FragmentKind::Member)
}

fn ensure_valid(key: &str, rendered: String, kind: FragmentKind) -> Result<String, RenderError> {
    if fragment_is_valid(&rendered, kind) {
        Ok(rendered)
    } else {
        Err(RenderError::InvalidFragment {
            key: key.to_string(),
            rendered,
        })
    }
}

/// Drop `static`/`final` from the declaration head when the flags are off.
/// Only the text before the initializer is touched.
fn strip_modifiers(decl: &str, use_static: bool, use_final: bool) -> String {
    let (head, tail) = match decl.find('=') {
        Some(i) => decl.split_at(i),
        None => (decl, ""),
    };
    let kept: Vec<&str> = head
        .split_whitespace()
        .filter(|tok| match *tok {
            "static" => use_static,
            "final" => use_final,
            _ => true,
        })
        .collect();
    let mut out = kept.join(" ");
    if !tail.is_empty() {
        out.push(' ');
        out.push_str(tail);
    }
    out
}
