//! GVariant text format helpers
//!
//! Covers the subset GNOME Terminal profiles use: strings, booleans and
//! string arrays.

use thiserror::Error;

/// GVariant text parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GVariantError {
    /// Not a quoted string
    #[error("expected a quoted string, got {0:?}")]
    NotAString(String),

    /// Not a string array
    #[error("expected a string array, got {0:?}")]
    NotAnArray(String),

    /// Input ended inside a string
    #[error("unterminated string in {0:?}")]
    Unterminated(String),
}

/// Quote a string as a single-quoted GVariant literal
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Boolean literal
pub fn format_bool(value: bool) -> String {
    value.to_string()
}

/// String array literal; the empty array carries its type annotation
pub fn format_string_array<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "@as []".to_string();
    }
    let quoted: Vec<String> = items.iter().map(|s| quote_string(s.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

/// Parse a quoted string literal
pub fn parse_string(text: &str) -> Result<String, GVariantError> {
    let trimmed = text.trim();
    let (value, rest) = read_string(trimmed)?;
    if !rest.trim().is_empty() {
        return Err(GVariantError::NotAString(trimmed.to_string()));
    }
    Ok(value)
}

/// Parse a string array literal
pub fn parse_string_array(text: &str) -> Result<Vec<String>, GVariantError> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix("@as").unwrap_or(trimmed).trim_start();
    let inner = body
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| GVariantError::NotAnArray(trimmed.to_string()))?;

    let mut items = Vec::new();
    let mut rest = inner.trim_start();
    while !rest.is_empty() {
        let (item, after) = read_string(rest)?;
        items.push(item);
        rest = after.trim_start();
        match rest.strip_prefix(',') {
            Some(after_comma) => rest = after_comma.trim_start(),
            None if rest.is_empty() => break,
            None => return Err(GVariantError::NotAnArray(trimmed.to_string())),
        }
    }
    Ok(items)
}

/// Read one quoted string from the start of `text`, returning it and the rest
fn read_string(text: &str) -> Result<(String, &str), GVariantError> {
    let mut chars = text.char_indices();
    let quote = match chars.next() {
        Some((_, q @ ('\'' | '"'))) => q,
        _ => return Err(GVariantError::NotAString(text.to_string())),
    };

    let mut value = String::new();
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, escaped)) => value.push(escaped),
                None => break,
            },
            c if c == quote => return Ok((value, &text[index + 1..])),
            c => value.push(c),
        }
    }
    Err(GVariantError::Unterminated(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("never"), "'never'");
        assert_eq!(quote_string("it's"), "'it\\'s'");
        assert_eq!(quote_string("a\\b"), "'a\\\\b'");
        assert_eq!(parse_string(&quote_string("it's a\\b")).unwrap(), "it's a\\b");
    }

    #[test]
    fn test_string_arrays() {
        assert_eq!(format_string_array::<&str>(&[]), "@as []");
        assert_eq!(format_string_array(&["#2d2d2d", "#f2777a"]), "['#2d2d2d', '#f2777a']");

        assert_eq!(parse_string_array("@as []").unwrap(), Vec::<String>::new());
        assert_eq!(parse_string_array("[]\n").unwrap(), Vec::<String>::new());
        assert_eq!(
            parse_string_array("['b1dcc9dd-5262-4d8d-a863-c897e6d979b9', \"x,y\"]").unwrap(),
            vec!["b1dcc9dd-5262-4d8d-a863-c897e6d979b9".to_string(), "x,y".to_string()]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_string("plain"), Err(GVariantError::NotAString(_))));
        assert!(matches!(parse_string("'open"), Err(GVariantError::Unterminated(_))));
        assert!(matches!(parse_string("'a' 'b'"), Err(GVariantError::NotAString(_))));
        assert!(matches!(parse_string_array("'a'"), Err(GVariantError::NotAnArray(_))));
        assert!(matches!(parse_string_array("['a' 'b']"), Err(GVariantError::NotAnArray(_))));
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_bool(true), "true");
        assert_eq!(format_bool(false), "false");
    }
}
