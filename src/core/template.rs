use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// `{{`, any characters except line terminators (non-greedy), `}}`
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^\r\n\x{2028}\x{2029}]*?)\}\}").unwrap());

/// Substitutes every `{{key}}` placeholder of `template` with its value in `variables`
///
/// Keys are trimmed before lookup and absent keys render as an empty string.
/// Substituted values are never scanned again.
///
/// # Arguments
/// * `template` - The prompt template
/// * `variables` - Values keyed by placeholder name
///
/// # Returns
/// * `String` - The rendered prompt
pub fn render_prompt(template: &str, variables: &BTreeMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            variables
                .get(caps[1].trim())
                .map(String::as_str)
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}

/// Trimmed placeholder keys in order of appearance
pub fn template_placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Placeholder keys that have no value in `variables`, each reported once
pub fn missing_variables(template: &str, variables: &BTreeMap<String, String>) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for key in template_placeholders(template) {
        if !variables.contains_key(&key) && !missing.contains(&key) {
            missing.push(key);
        }
    }
    missing
}
