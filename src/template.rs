//! Positional message templates.
//!
//! A template is a string with zero or more placeholders (`%s` by default).
//! Rendering interleaves the literal fragments between placeholders with the
//! supplied arguments, in order.
use crate::value::Value;
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER: &str = "%s";

/// Renders message templates.
///
/// The default formatter uses `%s` and substitutes nothing for missing
/// arguments. It can be loaded from configuration:
///
/// ```
/// let fmt: its_core::Formatter = serde_json::from_str(r#"{ "placeholder": "{}" }"#).unwrap();
/// assert_eq!(fmt.render("a {} c", &["b".into()]), "a b c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formatter {
    /// The marker templates are split on.
    pub placeholder: String,
    /// Substituted where a placeholder has no matching argument.
    pub missing: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
            missing: String::new(),
        }
    }
}

impl Formatter {
    /// Number of placeholders in `template`.
    pub fn placeholders(&self, template: &str) -> usize {
        if self.placeholder.is_empty() {
            return 0;
        }
        template.matches(self.placeholder.as_str()).count()
    }

    /// Renders `template`, filling placeholders from `args` left to right.
    ///
    /// Arguments beyond the last placeholder are ignored. An empty placeholder
    /// marker disables substitution and returns the template unchanged.
    pub fn render(&self, template: &str, args: &[Value]) -> String {
        if self.placeholder.is_empty() {
            return template.to_string();
        }

        let mut fragments = template.split(self.placeholder.as_str());
        let mut out = String::with_capacity(template.len());
        if let Some(first) = fragments.next() {
            out.push_str(first);
        }
        for (index, fragment) in fragments.enumerate() {
            match args.get(index) {
                Some(arg) => out.push_str(&arg.template_text()),
                None => out.push_str(&self.missing),
            }
            out.push_str(fragment);
        }
        out
    }
}

/// Renders `template` with the default `%s` formatter.
pub fn render(template: &str, args: &[Value]) -> String {
    Formatter::default().render(template, args)
}
