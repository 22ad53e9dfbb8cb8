#![forbid(unsafe_code)]

//! Static HTML rendering of ANSI terminal output.
//!
//! Feed a captured byte stream (colors, cursor movement, inline images,
//! links, timestamps) and get back an HTML fragment that looks like the
//! terminal did when the stream finished:
//!
//! ```
//! let html = termweb_html::render(b"\x1b[32mok\x1b[0m 12 tests passed");
//! assert_eq!(
//!     String::from_utf8(html).unwrap(),
//!     "<span class=\"term-fg32\">ok</span> 12 tests passed"
//! );
//! ```
//!
//! The heavy lifting (screen state and escape-sequence parsing) lives in
//! `termweb-core`; this crate walks the finished screen and emits spans,
//! images, links and processing instructions with strict escaping.

pub mod escape;
pub mod html;
mod renderer;

pub use html::screen_to_html;
pub use renderer::{render, Renderer, RendererConfig};
