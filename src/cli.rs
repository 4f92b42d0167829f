use crate::config::options::Options;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Initial display time in seconds (how long each color is shown)
    #[arg(short = 't', long, default_value_t = 1.0)]
    pub display_time: f64,

    /// Initial delay time in seconds (white screen between colors)
    #[arg(short = 'd', long, default_value_t = 0.5)]
    pub delay_time: f64,

    /// Initial number of repetitions
    #[arg(short, long, default_value_t = 10)]
    pub repetitions: u32,

    /// Render rate in frames per second
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    /// Write a debug log to flashbox.log
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn to_options(&self) -> Options {
        Options {
            display_time: self.display_time,
            delay_time: self.delay_time,
            repetitions: self.repetitions,
            fps: self.fps,
        }
    }
}
