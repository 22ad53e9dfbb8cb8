//! Screen cell: one grid position holding a scalar or an embedded element.

use crate::style::Style;

/// Inline element occupying a single cell.
///
/// Elements come from OSC/APC extension sequences rather than printable
/// text. They take part in cursor advance like any other cell but are
/// rendered as markup instead of a styled scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// An image, either an inline `data:` URI or an external URL.
    Image {
        alt: String,
        src: String,
        width: Option<String>,
        height: Option<String>,
    },
    /// A hyperlink. `content` falls back to the URL when absent.
    Link { url: String, content: Option<String> },
    /// An application-defined processing instruction (`bk;` APC payload).
    Apc { pairs: Vec<(String, String)> },
}

/// Payload of a cell: a decoded scalar or an element reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(char),
    Elem(Element),
}

/// A single screen cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub node: Node,
    pub style: Style,
}

impl Default for Cell {
    /// A blank cell: a space with the plain style.
    ///
    /// Gap filling uses this, never the cursor's current style — only an
    /// actual write stamps the style register onto a cell.
    fn default() -> Self {
        Self {
            node: Node::Text(' '),
            style: Style::default(),
        }
    }
}

impl Cell {
    /// True iff this cell is an unstyled space.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self.node, Node::Text(' ')) && self.style.is_plain()
    }
}
