use std::time::Duration;

use thiserror::Error;

use crate::core::palette::ColorId;

/// Shortest display phase the sequencer will run.
pub const MIN_DISPLAY_TIME: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select at least one color.")]
    EmptySelection,
    #[error("Please enter a valid display time (minimum 0.1 seconds).")]
    InvalidDisplayTime,
    #[error("Please enter a valid delay time (minimum 0 seconds).")]
    InvalidDelayTime,
    #[error("Please enter a valid number of repetitions (minimum 1).")]
    InvalidRepetitions,
}

/// Snapshot of everything a run needs, taken when start is pressed. Edits to
/// the palette or the input fields after that point only affect the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
    pub colors: Vec<ColorId>,
    pub display_time: Duration,
    pub delay_time: Duration,
    pub repetitions: u32,
}

fn parse_seconds(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|secs| secs.is_finite())
}

/// Checks run in a fixed order and stop at the first failure, so exactly one
/// message surfaces per start attempt: selection, display time, delay time,
/// repetitions.
pub fn validate(
    selected: &[ColorId],
    display_raw: &str,
    delay_raw: &str,
    repetitions_raw: &str,
) -> Result<AnimationConfig, ValidationError> {
    if selected.is_empty() {
        return Err(ValidationError::EmptySelection);
    }

    let display_time = parse_seconds(display_raw)
        .filter(|secs| *secs >= MIN_DISPLAY_TIME.as_secs_f64())
        .map(Duration::from_secs_f64)
        .ok_or(ValidationError::InvalidDisplayTime)?;

    let delay_time = parse_seconds(delay_raw)
        .filter(|secs| *secs >= 0.0)
        .map(Duration::from_secs_f64)
        .ok_or(ValidationError::InvalidDelayTime)?;

    let repetitions = repetitions_raw
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|count| *count >= 1)
        .ok_or(ValidationError::InvalidRepetitions)?;

    Ok(AnimationConfig {
        colors: selected.to_vec(),
        display_time,
        delay_time,
        repetitions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECTED: &[ColorId] = &[ColorId::Red, ColorId::Blue];

    #[test]
    fn test_valid_input() {
        let config = validate(SELECTED, "0.1", "0", "3").unwrap();
        assert_eq!(config.colors, SELECTED.to_vec());
        assert_eq!(config.display_time, Duration::from_millis(100));
        assert_eq!(config.delay_time, Duration::ZERO);
        assert_eq!(config.repetitions, 3);
    }

    #[test]
    fn test_empty_selection() {
        let result = validate(&[], "1", "1", "1");
        assert_eq!(result, Err(ValidationError::EmptySelection));
    }

    #[test]
    fn test_display_time_below_floor() {
        let result = validate(SELECTED, "0.05", "1", "1");
        assert_eq!(result, Err(ValidationError::InvalidDisplayTime));
    }

    #[test]
    fn test_display_time_not_a_number() {
        let result = validate(SELECTED, "fast", "1", "1");
        assert_eq!(result, Err(ValidationError::InvalidDisplayTime));
    }

    #[test]
    fn test_negative_delay() {
        let result = validate(SELECTED, "1", "-0.5", "1");
        assert_eq!(result, Err(ValidationError::InvalidDelayTime));
    }

    #[test]
    fn test_zero_delay_is_valid() {
        let config = validate(SELECTED, "1", "0", "1").unwrap();
        assert_eq!(config.delay_time, Duration::ZERO);
    }

    #[test]
    fn test_zero_repetitions() {
        let result = validate(SELECTED, "1", "1", "0");
        assert_eq!(result, Err(ValidationError::InvalidRepetitions));
    }

    #[test]
    fn test_fractional_repetitions() {
        let result = validate(SELECTED, "1", "1", "2.5");
        assert_eq!(result, Err(ValidationError::InvalidRepetitions));
    }

    #[test]
    fn test_first_failure_wins() {
        // every field is invalid, the selection check reports first
        let result = validate(&[], "abc", "-1", "0");
        assert_eq!(result, Err(ValidationError::EmptySelection));

        // then display time, ahead of the equally invalid delay and count
        let result = validate(SELECTED, "abc", "-1", "0");
        assert_eq!(result, Err(ValidationError::InvalidDisplayTime));

        let result = validate(SELECTED, "1", "-1", "0");
        assert_eq!(result, Err(ValidationError::InvalidDelayTime));
    }

    #[test]
    fn test_seconds_are_decimal() {
        let config = validate(SELECTED, "1.5", "0.25", "2").unwrap();
        assert_eq!(config.display_time, Duration::from_millis(1500));
        assert_eq!(config.delay_time, Duration::from_millis(250));
    }
}
