//! OSC payload interpretation: inline images, external images, hyperlinks.
//!
//! The renderer understands the iTerm2-style extension codes:
//!
//! - `1337;File=key=value;…:<base64>` — inline image
//! - `1338;url=…;alt=…;width=…;height=…` — external image
//! - `1339;url=…;content=…` — hyperlink
//!
//! Every other OSC code (titles, clipboard, colors) is consumed and
//! discarded.

use tracing::trace;

use crate::cell::Element;
use crate::url::scheme_allowed;

/// What the parser should do with a completed OSC payload.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum OscAction {
    /// Place an image on its own line.
    Image(Element),
    /// An external image whose URL failed the allow-list: the surrounding
    /// linefeeds still happen, the element itself is suppressed.
    SuppressedImage,
    /// Place a link inline.
    Link(Element),
    /// Nothing to do.
    Ignore,
}

pub(crate) fn interpret(payload: &[u8], allowed_schemes: &[String]) -> OscAction {
    let payload = String::from_utf8_lossy(payload);
    let (code, rest) = match payload.split_once(';') {
        Some((code, rest)) => (code, rest),
        None => (payload.as_ref(), ""),
    };

    match code {
        "1337" => match rest.strip_prefix("File=").and_then(inline_image) {
            Some(element) => OscAction::Image(element),
            None => OscAction::Ignore,
        },
        "1338" => external_image(rest, allowed_schemes),
        "1339" => match link(rest) {
            Some(element) => OscAction::Link(element),
            None => OscAction::Ignore,
        },
        other => {
            trace!(code = other, "discarding unsupported OSC payload");
            OscAction::Ignore
        }
    }
}

/// Parse an iTerm2 `File=` argument list plus base64 body.
///
/// The element is only produced for `inline=1` payloads with a `name`
/// whose extension maps to a known content type. A body that fails base64
/// decoding degrades to an empty payload rather than an error.
fn inline_image(args: &str) -> Option<Element> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let (args, body) = args.split_once(':')?;

    let mut name = None;
    let mut inline = false;
    let mut width = None;
    let mut height = None;
    for (key, value) in key_value_pairs(args) {
        match key {
            "name" => {
                let decoded = STANDARD.decode(value).ok()?;
                name = Some(String::from_utf8_lossy(&decoded).into_owned());
            }
            "inline" => inline = value == "1",
            "width" => width = Some(css_dimension(value)),
            "height" => height = Some(css_dimension(value)),
            _ => {}
        }
    }

    if !inline {
        return None;
    }
    let name = name?;
    let content_type = content_type_for(&name)?;
    let body = STANDARD.decode(body).unwrap_or_default();

    Some(Element::Image {
        alt: name,
        src: format!("data:{content_type};base64,{}", STANDARD.encode(body)),
        width,
        height,
    })
}

fn external_image(args: &str, allowed_schemes: &[String]) -> OscAction {
    let mut url = None;
    let mut alt = None;
    let mut width = None;
    let mut height = None;
    for (key, value) in key_value_pairs(args) {
        match key {
            "url" => url = Some(value.to_owned()),
            "alt" => alt = Some(value.to_owned()),
            "width" => width = Some(css_dimension(value)),
            "height" => height = Some(css_dimension(value)),
            _ => {}
        }
    }

    let Some(url) = url else {
        return OscAction::Ignore;
    };
    if !scheme_allowed(&url, allowed_schemes) {
        trace!(url = url.as_str(), "suppressing external image with disallowed scheme");
        return OscAction::SuppressedImage;
    }
    OscAction::Image(Element::Image {
        alt: alt.unwrap_or_else(|| url.clone()),
        src: url,
        width,
        height,
    })
}

fn link(args: &str) -> Option<Element> {
    let mut url = None;
    let mut content = None;
    for (key, value) in key_value_pairs(args) {
        match key {
            "url" => url = Some(value.to_owned()),
            "content" => content = Some(value.to_owned()),
            _ => {}
        }
    }
    Some(Element::Link { url: url?, content })
}

/// Split a `;`-separated `key=value` list, stripping surrounding quotes.
fn key_value_pairs(args: &str) -> impl Iterator<Item = (&str, &str)> {
    args.split(';').filter_map(|token| {
        let (key, value) = token.split_once('=')?;
        Some((key, unquote(value)))
    })
}

/// Strip one pair of matching surrounding quotes, single or double.
pub(crate) fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Normalize an image dimension to a CSS length.
///
/// Bare numbers (and anything else without a recognized unit) are treated
/// as `em` values.
fn css_dimension(value: &str) -> String {
    if value.ends_with("px") || value.ends_with("em") || value.ends_with('%') {
        value.to_owned()
    } else {
        format!("{value}em")
    }
}

/// Content type inferred from a filename extension.
///
/// Unknown extensions yield `None`, which suppresses the inline image.
fn content_type_for(filename: &str) -> Option<&'static str> {
    let (_, extension) = filename.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "bmp" => Some("image/bmp"),
        "gif" => Some("image/gif"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "svg" => Some("image/svg+xml"),
        "tif" | "tiff" => Some("image/tiff"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}
