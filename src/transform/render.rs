//! Placeholder templates for replacement text.
//!
//! A template is plain text with `{name}` placeholders. Rendering looks each
//! name up in a parameter map; names without a value render as nothing.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern must compile"));

/// Substitute every `{name}` in `template` from `params`
pub fn render(template: &str, params: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            params.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Names of the placeholders used by `template`, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Format a count with comma thousands separators (`12000` -> `12,000`)
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Match the case of the first letter of `reference`
///
/// Replacement phrases are stored lowercase. When the text they replace
/// opened a sentence, the phrase has to open it too.
pub fn match_leading_case(phrase: &str, reference: &str) -> String {
    let starts_upper = reference
        .chars()
        .find(|c| c.is_alphabetic())
        .is_some_and(char::is_uppercase);

    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) if starts_upper => first.to_uppercase().chain(chars).collect(),
        _ => phrase.to_string(),
    }
}
