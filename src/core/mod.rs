pub mod palette;
pub mod sequencer;
pub mod validate;

pub use palette::{ColorId, ColorOption, Palette};
pub use sequencer::{Phase, Sequencer, SurfaceFill, Tick};
pub use validate::{AnimationConfig, ValidationError, validate};
