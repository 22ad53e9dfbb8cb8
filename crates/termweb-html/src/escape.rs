//! HTML escaping and URL sanitization for untrusted terminal output.
//!
//! Everything the screen holds is attacker-controlled, so every scalar that
//! reaches the output passes through one of two escapers:
//!
//! - **character data** ([`escape_text`]): `& < > " ' /` — the slash is
//!   escaped so a literal `</script>` in terminal output cannot close a
//!   surrounding script element;
//! - **attribute values and element content** ([`escape_attr`]): the same
//!   set minus `/`, which must survive inside URLs and `data:` URIs.
//!
//! URLs additionally pass [`sanitize_url`], which percent-encodes control
//! bytes and HTML-unsafe characters before the attribute escaper runs.

use std::borrow::Cow;
use std::fmt::Write as _;

const fn text_entity(scalar: char) -> Option<&'static str> {
    match scalar {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        '/' => Some("&#47;"),
        _ => None,
    }
}

const fn attr_entity(scalar: char) -> Option<&'static str> {
    match scalar {
        '/' => None,
        _ => text_entity(scalar),
    }
}

fn escape_with(input: &str, entity: fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    // Fast path: nothing to rewrite, return the input borrowed.
    if !input.chars().any(|scalar| entity(scalar).is_some()) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for scalar in input.chars() {
        match entity(scalar) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(scalar),
        }
    }
    Cow::Owned(out)
}

/// Escape a string for emission as HTML character data.
#[must_use]
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape_with(input, text_entity)
}

/// Escape a string for emission as an attribute value or element content.
#[must_use]
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    escape_with(input, attr_entity)
}

/// Append one scalar of character data to `out`, escaped.
pub fn push_text(out: &mut String, scalar: char) {
    match text_entity(scalar) {
        Some(replacement) => out.push_str(replacement),
        None => out.push(scalar),
    }
}

/// Percent-encode the bytes of a URL that could break out of an attribute
/// or smuggle markup: controls, DEL, non-ASCII, `< > ' "` and space.
///
/// `&` is left alone (the attribute escaper turns it into `&amp;`), and
/// existing `%XX` escapes pass through untouched.
#[must_use]
pub fn sanitize_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for &byte in url.as_bytes() {
        if byte < 0x20 || byte >= 0x7f || matches!(byte, b'<' | b'>' | b'\'' | b'"' | b' ') {
            let _ = write!(out, "%{byte:02X}");
        } else {
            out.push(char::from(byte));
        }
    }
    out
}
