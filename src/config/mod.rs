pub mod keybindings;
pub mod options;
pub mod theme;
