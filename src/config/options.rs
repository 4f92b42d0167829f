#[derive(Debug, Clone)]
pub struct Options {
    /// Initial display time field value, in seconds
    pub display_time: f64,
    /// Initial delay time field value, in seconds
    pub delay_time: f64,
    /// Initial repetitions field value
    pub repetitions: u32,
    /// fps
    pub fps: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            display_time: 1.0,
            delay_time: 0.5,
            repetitions: 10,
            fps: 30.0,
        }
    }
}
