use crate::consts::{DATE_RE, ID_RE, SEPARATORS};
use crate::types::DirectoryNameFeatures;
use regex::Regex;

/// Split a directory basename into experiment ID, date and extra text.
///
/// ID and date are searched for independently, so they can appear in any
/// order. Never fails: missing pieces come back as empty strings.
pub fn parse_directory_name(name: &str) -> DirectoryNameFeatures {
    let id_match = first_token(&ID_RE, name);
    let date_match = first_token(&DATE_RE, name);

    // Remove the text as it was matched, not the lowercased id.
    let mut rest = name.to_string();
    for token in [id_match, date_match].into_iter().flatten() {
        rest = rest.replacen(token, "", 1);
    }

    let extra = collapse_separators(rest.trim_matches(SEPARATORS.as_slice()));
    let id = id_match.map(str::to_lowercase).unwrap_or_default();
    let date = date_match.unwrap_or_default().to_string();

    tracing::trace!(original = name, id = %id, date = %date, extra = %extra, "parsed directory name");
    DirectoryNameFeatures::new(id, date, extra)
}

/// First delimiter-bounded token matched by `re`, without its delimiters.
fn first_token<'a>(re: &Regex, haystack: &'a str) -> Option<&'a str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Fold doubled separators left behind by token removal.
/// Single pass: `a___b` only loses one underscore.
fn collapse_separators(s: &str) -> String {
    s.replace("__", "_").replace("--", "-")
}
