use std::io::{IsTerminal, stdout};

use colored::Colorize;
use dockmap_core::output::Style;

use super::colors;

/// ANSI styling for the tree output.
///
/// Enablement is decided once at construction; the renderers stay pure
/// functions of their arguments and never look at ambient state.
pub struct ColorStyle {
    enabled: bool,
}

impl ColorStyle {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enable color only when stdout is a terminal and the user did not
    /// opt out.
    pub fn auto(no_color: bool) -> Self {
        Self::new(!no_color && stdout().is_terminal())
    }
}

impl Style for ColorStyle {
    fn network(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(colors::NETWORK).bold().to_string()
    }

    fn container(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(colors::CONTAINER).to_string()
    }

    fn alias(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(colors::ALIAS).to_string()
    }

    fn label(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(colors::LABEL).to_string()
    }

    fn tree(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.color(colors::TREE).to_string()
    }
}
