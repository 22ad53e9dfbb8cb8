//! The renderer: one screen per invocation, parsed to completion, then
//! serialized once.

use termweb_core::{Parser, ParserConfig, Screen, DEFAULT_URL_SCHEMES};

use crate::html::screen_to_html;

/// Configuration for [`Renderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Ceiling for CSI numeric parameters, bounding the memory an
    /// adversarial cursor jump can allocate.
    pub max_csi_param: u16,
    /// URL schemes accepted for hyperlinks and external images. Links
    /// outside the list render with `href="#"`; images are dropped.
    pub allowed_url_schemes: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_csi_param: u16::MAX,
            allowed_url_schemes: DEFAULT_URL_SCHEMES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Renders terminal output to a static HTML fragment.
///
/// Rendering is a pure function of the input: no state survives between
/// invocations, so one `Renderer` may serve any number of calls, from any
/// number of threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Create a renderer with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with explicit configuration.
    #[must_use]
    pub fn with_config(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Render one complete byte stream of terminal output.
    ///
    /// The output is a valid UTF-8 HTML fragment (no `<html>`/`<body>`
    /// wrapper), one line per screen line, joined by `\n`.
    #[must_use]
    pub fn render(&self, input: &[u8]) -> Vec<u8> {
        let mut screen = Screen::new();
        let parser = Parser::with_config(ParserConfig {
            max_csi_param: self.config.max_csi_param,
            allowed_url_schemes: self.config.allowed_url_schemes.clone(),
        });
        parser.parse(input, &mut screen);
        screen_to_html(&screen, &self.config.allowed_url_schemes).into_bytes()
    }
}

/// Render with the default configuration.
#[must_use]
pub fn render(input: &[u8]) -> Vec<u8> {
    Renderer::new().render(input)
}
