use std::time::Duration;

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info};

use crate::core::palette::ColorId;
use crate::core::validate::AnimationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Color,
    Delay,
}

/// What the display surface shows right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurfaceFill {
    /// Neutral theme background, shown outside a run.
    #[default]
    Default,
    /// The white pause between two flashes.
    White,
    /// A flashed color.
    Flash(ColorId),
}

/// The result of one transition: the new surface fill plus the delay until
/// `advance` should be called again. `next: None` means the machine is idle
/// and nothing should be armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub fill: SurfaceFill,
    pub next: Option<Duration>,
}

impl Tick {
    const IDLE: Tick = Tick {
        fill: SurfaceFill::Default,
        next: None,
    };
}

/// Two-phase flash state machine. Owns the run snapshot and the repetition
/// counter; timing lives with the caller, which arms a single deadline from
/// each returned [`Tick`]. That keeps the walk testable without a clock.
#[derive(Debug)]
pub struct Sequencer<R: Rng = ThreadRng> {
    config: Option<AnimationConfig>,
    phase: Phase,
    completed: u32,
    rng: R,
}

impl Sequencer<ThreadRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for Sequencer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Sequencer<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: None,
            phase: Phase::Idle,
            completed: 0,
            rng,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Color displays completed so far in the current run.
    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.config
            .as_ref()
            .map_or(0, |config| config.repetitions)
    }

    /// Begins a fresh run, superseding any active one. The caller must drop
    /// its armed deadline before calling, so a stale transition can never
    /// fire into the new run. The first color phase is entered synchronously.
    pub fn start(&mut self, config: AnimationConfig) -> Tick {
        if self.is_running() {
            debug!(completed = self.completed, "superseding active run");
        }
        info!(
            colors = config.colors.len(),
            display_ms = config.display_time.as_millis() as u64,
            delay_ms = config.delay_time.as_millis() as u64,
            repetitions = config.repetitions,
            "starting run"
        );
        self.config = Some(config);
        self.completed = 0;
        self.enter_color_phase()
    }

    /// Drives the machine when the armed deadline fires.
    pub fn advance(&mut self) -> Tick {
        match self.phase {
            Phase::Color => {
                let delay_time = self
                    .config
                    .as_ref()
                    .map_or(Duration::ZERO, |config| config.delay_time);
                self.phase = Phase::Delay;
                Tick {
                    fill: SurfaceFill::White,
                    next: Some(delay_time),
                }
            }
            Phase::Delay => self.enter_color_phase(),
            Phase::Idle => Tick::IDLE,
        }
    }

    fn enter_color_phase(&mut self) -> Tick {
        let Some(config) = &self.config else {
            return Tick::IDLE;
        };

        if self.completed >= config.repetitions {
            info!(repetitions = config.repetitions, "run finished");
            self.phase = Phase::Idle;
            return Tick::IDLE;
        }

        let index = self.rng.random_range(0..config.colors.len());
        let color = config.colors[index];
        self.completed += 1;
        self.phase = Phase::Color;
        Tick {
            fill: SurfaceFill::Flash(color),
            next: Some(config.display_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn test_config(colors: &[ColorId], repetitions: u32) -> AnimationConfig {
        AnimationConfig {
            colors: colors.to_vec(),
            display_time: Duration::from_millis(100),
            delay_time: Duration::ZERO,
            repetitions,
        }
    }

    fn test_sequencer() -> Sequencer<StdRng> {
        Sequencer::with_rng(StdRng::seed_from_u64(42))
    }

    /// Walks a started sequencer to completion, returning the flashed colors.
    fn run_to_idle(sequencer: &mut Sequencer<StdRng>, first: Tick) -> Vec<ColorId> {
        let mut flashes = Vec::new();
        let mut tick = first;
        while let Some(_delay) = tick.next {
            if let SurfaceFill::Flash(color) = tick.fill {
                flashes.push(color);
            }
            tick = sequencer.advance();
        }
        assert_eq!(tick.fill, SurfaceFill::Default);
        assert_eq!(sequencer.phase(), Phase::Idle);
        flashes
    }

    #[test]
    fn test_exact_repetition_count() {
        let colors = [ColorId::Red, ColorId::Blue];
        let mut sequencer = test_sequencer();
        let first = sequencer.start(test_config(&colors, 3));

        let flashes = run_to_idle(&mut sequencer, first);
        assert_eq!(flashes.len(), 3);
        for color in flashes {
            assert!(colors.contains(&color));
        }
    }

    #[test]
    fn test_first_color_is_synchronous() {
        let mut sequencer = test_sequencer();
        let first = sequencer.start(test_config(&[ColorId::Green], 1));
        assert_eq!(first.fill, SurfaceFill::Flash(ColorId::Green));
        assert_eq!(first.next, Some(Duration::from_millis(100)));
        assert_eq!(sequencer.completed(), 1);
    }

    #[test]
    fn test_phases_alternate() {
        let mut sequencer = test_sequencer();
        let first = sequencer.start(test_config(&[ColorId::Red], 2));
        assert!(matches!(first.fill, SurfaceFill::Flash(_)));

        let pause = sequencer.advance();
        assert_eq!(pause.fill, SurfaceFill::White);
        assert_eq!(pause.next, Some(Duration::ZERO));
        assert_eq!(sequencer.phase(), Phase::Delay);

        let second = sequencer.advance();
        assert!(matches!(second.fill, SurfaceFill::Flash(_)));
        assert_eq!(sequencer.phase(), Phase::Color);
    }

    #[test]
    fn test_restart_resets_counter() {
        let mut sequencer = test_sequencer();
        let first = sequencer.start(test_config(&[ColorId::Red], 5));
        assert_eq!(first.next, Some(Duration::from_millis(100)));
        sequencer.advance();
        sequencer.advance();
        assert_eq!(sequencer.completed(), 2);

        // restart mid-run: counter back to zero, first flash immediate
        let restarted = sequencer.start(test_config(&[ColorId::Purple], 2));
        assert_eq!(restarted.fill, SurfaceFill::Flash(ColorId::Purple));
        assert_eq!(sequencer.completed(), 1);

        let flashes = run_to_idle(&mut sequencer, restarted);
        assert_eq!(flashes.len(), 2);
    }

    #[test]
    fn test_restart_uses_new_snapshot() {
        let mut sequencer = test_sequencer();
        sequencer.start(test_config(&[ColorId::Red], 3));
        let tick = sequencer.start(AnimationConfig {
            colors: vec![ColorId::Cyan],
            display_time: Duration::from_millis(250),
            delay_time: Duration::from_millis(50),
            repetitions: 1,
        });
        assert_eq!(tick.fill, SurfaceFill::Flash(ColorId::Cyan));
        assert_eq!(tick.next, Some(Duration::from_millis(250)));
        assert_eq!(sequencer.total(), 1);
    }

    #[test]
    fn test_advance_when_idle_is_inert() {
        let mut sequencer = test_sequencer();
        let tick = sequencer.advance();
        assert_eq!(tick, Tick::IDLE);
        assert_eq!(sequencer.completed(), 0);
    }

    #[test]
    fn test_single_color_single_repetition() {
        let mut sequencer = test_sequencer();
        let first = sequencer.start(test_config(&[ColorId::Yellow], 1));
        assert_eq!(first.fill, SurfaceFill::Flash(ColorId::Yellow));

        let pause = sequencer.advance();
        assert_eq!(pause.fill, SurfaceFill::White);

        let done = sequencer.advance();
        assert_eq!(done, Tick::IDLE);
        assert!(!sequencer.is_running());
    }
}
