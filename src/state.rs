use crate::core::sequencer::SurfaceFill;
use crate::overlay::notification::Notification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Idle,
    Running {
        completed: u32,
        total: u32,
    },
    Finished {
        total: u32,
    },
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Idle => write!(f, "Status: Idle"),
            RunStatus::Running { completed, total } => {
                write!(f, "Status: Flashing {completed}/{total}")
            }
            RunStatus::Finished { total } => write!(f, "Status: Finished ({total} flashes)"),
        }
    }
}

/// Render-facing state: what the surface shows, how far the run is, and the
/// current notification line, if any.
#[derive(Debug, Default)]
pub struct State {
    pub surface: SurfaceFill,
    pub run_status: RunStatus,
    pub notification: Option<Notification>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
