pub mod help;
pub mod inputs;
pub mod palette_pane;
pub mod surface;
pub mod ui;
