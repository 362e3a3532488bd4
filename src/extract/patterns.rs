//! Free-text patterns for values that only appear inside prose
//!
//! Each function takes whitespace-normalized text and returns the captured
//! value, or `None` when the page wording has drifted.

use regex::Regex;
use std::sync::OnceLock;

fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("pattern literal is valid"))
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}

/// `"/ 5 of 9 votes (..."` → `"9"`
pub fn vote_count(text: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    capture(cached(&RE, r"of (.*) votes"), text)
}

/// `"(63 have, 55 want)"` → `"63"`
pub fn have_count(text: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    capture(cached(&RE, r"\((.*) have"), text)
}

/// `"(63 have, 55 want)"` → `"55"`
pub fn want_count(text: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    capture(cached(&RE, r", (.*) want"), text)
}

/// `"Vinyl, 12\", Single"` → `"12\""`
///
/// Takes the first token after `Vinyl, ` and drops its commas.
pub fn release_format(text: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let rest = capture(cached(&RE, r"Vinyl, (.*)"), text)?;
    let token = rest.split_whitespace().next()?.replace(',', "");
    (!token.is_empty()).then_some(token)
}

/// `"1 – 25 of 12,345"` → `12345`
pub fn inventory_total(text: &str) -> Option<u64> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let total = capture(cached(&RE, r"of (.*)"), text)?;
    total.replace(',', "").trim().parse().ok()
}
