//! The styling seam between the renderers and the terminal.
//!
//! Renderers never decide colors themselves: the caller hands in
//! whatever styling policy fits the destination, and the structural
//! output is identical whether text comes back decorated or not.

/// Maps a semantic output category to (possibly decorated) text.
pub trait Style {
    /// A network name.
    fn network(&self, text: &str) -> String;
    /// A container name.
    fn container(&self, text: &str) -> String;
    /// A network alias.
    fn alias(&self, text: &str) -> String;
    /// A fixed label such as `Network:` or `connects to:`.
    fn label(&self, text: &str) -> String;
    /// Tree glyphs and indents.
    fn tree(&self, text: &str) -> String;
}

/// Identity styling: output is byte-for-byte the raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Style for Plain {
    fn network(&self, text: &str) -> String {
        text.to_string()
    }

    fn container(&self, text: &str) -> String {
        text.to_string()
    }

    fn alias(&self, text: &str) -> String {
        text.to_string()
    }

    fn label(&self, text: &str) -> String {
        text.to_string()
    }

    fn tree(&self, text: &str) -> String {
        text.to_string()
    }
}
