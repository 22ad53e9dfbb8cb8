//! HTML serialization of a finished [`Screen`].
//!
//! One pass over the grid. Per line, adjacent cells with the same style
//! collapse into a single `<span>` (value equality on [`Style`]), plain
//! runs are emitted bare, and element cells flush the open run before
//! rendering. Spans never nest and always close before the line ends.

use termweb_core::{scheme_allowed, Color, Element, Line, Node, Screen, Style, StyleFlags};
use tracing::trace;

use crate::escape::{escape_attr, push_text, sanitize_url};

/// Serialize the whole screen, one HTML line per screen line.
#[must_use]
pub fn screen_to_html(screen: &Screen, allowed_schemes: &[String]) -> String {
    let mut out = String::new();
    let mut carried_timestamp: Option<&str> = None;

    for (index, line) in screen.lines().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if line.timestamp().is_some() {
            carried_timestamp = line.timestamp();
        }
        if screen.timestamped() {
            if let Some(timestamp) = carried_timestamp {
                out.push_str("<?bk t=\"");
                out.push_str(&escape_attr(timestamp));
                out.push_str("\"?>");
            }
        }
        line_to_html(&mut out, line, allowed_schemes);
    }
    out
}

fn line_to_html(out: &mut String, line: &Line, allowed_schemes: &[String]) {
    let cells = line.cells();

    // A row that was never written renders as a non-breaking space so the
    // blank line survives HTML whitespace collapsing.
    if cells.is_empty() {
        out.push_str("&nbsp;");
        return;
    }

    // Trailing unstyled spaces are cursor-motion residue, not content.
    let end = cells
        .iter()
        .rposition(|cell| !cell.is_blank())
        .map_or(0, |last| last + 1);

    let mut open: Option<Style> = None;
    for cell in &cells[..end] {
        match &cell.node {
            Node::Text(scalar) => {
                let wanted = (!cell.style.is_plain()).then_some(cell.style);
                if open != wanted {
                    if open.is_some() {
                        out.push_str("</span>");
                    }
                    if let Some(style) = wanted {
                        out.push_str("<span class=\"");
                        push_style_classes(out, &style);
                        out.push_str("\">");
                    }
                    open = wanted;
                }
                push_text(out, *scalar);
            }
            Node::Elem(element) => {
                if open.take().is_some() {
                    out.push_str("</span>");
                }
                element_to_html(out, element, allowed_schemes);
            }
        }
    }
    if open.is_some() {
        out.push_str("</span>");
    }
}

/// Emit the class list for a style: foreground, background, then attribute
/// flags in ascending SGR-code order.
///
/// Standard colors reuse their raw SGR code (`term-fg32`, `term-bg42`);
/// the intense ranges get the `i` infix (`term-fgi90`, `term-bgi100`);
/// 256-color indexes get `x` (`term-fgx169`). Attribute flags share the
/// `term-fgN` namespace with small N.
fn push_style_classes(out: &mut String, style: &Style) {
    use std::fmt::Write as _;

    let mut first = true;
    let mut push_class = |out: &mut String, class: std::fmt::Arguments<'_>| {
        if !first {
            out.push(' ');
        }
        first = false;
        let _ = out.write_fmt(class);
    };

    match style.fg {
        Color::Standard(code @ 90..=97) => push_class(out, format_args!("term-fgi{code}")),
        Color::Standard(code) => push_class(out, format_args!("term-fg{code}")),
        Color::Indexed(index) => push_class(out, format_args!("term-fgx{index}")),
        Color::Default => {}
    }
    match style.bg {
        Color::Standard(code @ 100..=107) => push_class(out, format_args!("term-bgi{code}")),
        Color::Standard(code) => push_class(out, format_args!("term-bg{code}")),
        Color::Indexed(index) => push_class(out, format_args!("term-bgx{index}")),
        Color::Default => {}
    }
    for (flag, code) in StyleFlags::ORDERED {
        if style.flags.contains(flag) {
            push_class(out, format_args!("term-fg{code}"));
        }
    }
}

fn element_to_html(out: &mut String, element: &Element, allowed_schemes: &[String]) {
    match element {
        Element::Image {
            alt,
            src,
            width,
            height,
        } => {
            out.push_str("<img alt=\"");
            out.push_str(&escape_attr(alt));
            out.push_str("\" src=\"");
            out.push_str(&escape_attr(&sanitize_url(src)));
            out.push('"');
            if let Some(width) = width {
                out.push_str(" width=\"");
                out.push_str(&escape_attr(width));
                out.push('"');
            }
            if let Some(height) = height {
                out.push_str(" height=\"");
                out.push_str(&escape_attr(height));
                out.push('"');
            }
            out.push('>');
        }
        Element::Link { url, content } => {
            out.push_str("<a href=\"");
            if scheme_allowed(url, allowed_schemes) {
                out.push_str(&escape_attr(&sanitize_url(url)));
            } else {
                trace!(url = url.as_str(), "neutralizing link with disallowed scheme");
                out.push('#');
            }
            out.push_str("\">");
            out.push_str(&escape_attr(content.as_deref().unwrap_or(url)));
            out.push_str("</a>");
        }
        Element::Apc { pairs } => {
            out.push_str("<?bk");
            for (key, value) in pairs {
                out.push(' ');
                out.push_str(&escape_attr(key));
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            out.push_str("?>");
        }
    }
}
