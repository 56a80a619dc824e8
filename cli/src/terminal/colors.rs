use colored::Color;

pub const NETWORK: Color = Color::Cyan;
pub const CONTAINER: Color = Color::Green;
pub const ALIAS: Color = Color::Yellow;
pub const LABEL: Color = Color::Magenta;
pub const TREE: Color = Color::Blue;
