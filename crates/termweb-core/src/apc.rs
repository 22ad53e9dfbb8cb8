//! APC payload parsing for `bk;` processing instructions.
//!
//! Payloads look like `bk;key=value;key=value`. A `\;` escapes a literal
//! semicolon inside a value, and values may be bare, single-quoted or
//! double-quoted (with the opposite quote allowed inside). Anything not
//! prefixed `bk;` is discarded.

use crate::osc::unquote;

/// Parse a `bk;` payload into its key-value pairs, in source order.
///
/// Returns `None` for non-`bk` payloads and for payloads with no pairs.
pub(crate) fn parse_bk(payload: &str) -> Option<Vec<(String, String)>> {
    let rest = payload.strip_prefix("bk;")?;

    let mut pairs = Vec::new();
    let mut token = String::new();
    let mut chars = rest.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(';') => token.push(';'),
                Some(other) => {
                    token.push('\\');
                    token.push(other);
                }
                None => token.push('\\'),
            },
            ';' => {
                push_pair(&mut pairs, &token);
                token.clear();
            }
            _ => token.push(ch),
        }
    }
    push_pair(&mut pairs, &token);

    if pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}

fn push_pair(pairs: &mut Vec<(String, String)>, token: &str) {
    if token.is_empty() {
        return;
    }
    match token.split_once('=') {
        Some((key, value)) => pairs.push((key.to_owned(), unquote(value).to_owned())),
        None => pairs.push((token.to_owned(), String::new())),
    }
}
