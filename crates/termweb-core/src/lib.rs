#![forbid(unsafe_code)]

//! Terminal core logic: a growable virtual screen and the ANSI/VT
//! escape-sequence parser that drives it.
//!
//! This crate is the host-agnostic half of the renderer. It knows nothing
//! about HTML: it turns a byte stream of terminal output (printable UTF-8,
//! C0 controls, CSI/OSC/APC sequences) into a grid of styled cells plus
//! inline elements such as images, links and processing instructions. The
//! `termweb-html` crate serializes the finished grid.
//!
//! ```
//! use termweb_core::{Parser, Screen};
//!
//! let mut screen = Screen::new();
//! Parser::new().parse(b"\x1b[32mhello\x1b[0m", &mut screen);
//! assert_eq!(screen.lines().len(), 1);
//! ```

mod apc;
pub mod cell;
mod osc;
pub mod parser;
pub mod screen;
pub mod style;
pub mod url;

pub use cell::{Cell, Element, Node};
pub use parser::{Parser, ParserConfig};
pub use screen::{ClearDisplay, ClearLine, Line, Screen};
pub use style::{Color, Style, StyleFlags};
pub use url::{scheme_allowed, url_scheme, DEFAULT_URL_SCHEMES};
