use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::shared_wheel_game::SpinTuning;

static COLOR_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("color pattern is valid")
});

pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    if !COLOR_TOKEN.is_match(color) {
        return Err(ValidationError::new("invalid_color"));
    }
    Ok(())
}

pub fn validate_spin_tuning(tuning: &SpinTuning) -> Result<(), ValidationError> {
    if !(tuning.min_velocity > 0.0 && tuning.max_velocity > tuning.min_velocity) {
        return Err(ValidationError::new("invalid_velocity_range"));
    }
    if !(tuning.decay > 0.0 && tuning.decay < 1.0) {
        return Err(ValidationError::new("invalid_decay"));
    }
    // A zero threshold would never stop the exponential decay.
    if !(tuning.stop_threshold > 0.0) {
        return Err(ValidationError::new("invalid_stop_threshold"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tokens() {
        assert!(validate_color("#4cc9f0").is_ok());
        assert!(validate_color("#FFF").is_ok());
        assert!(validate_color("4cc9f0").is_err());
        assert!(validate_color("#4cc9f").is_err());
        assert!(validate_color("red").is_err());
    }

    #[test]
    fn test_spin_tuning_rules() {
        assert!(validate_spin_tuning(&SpinTuning::default()).is_ok());

        let mut tuning = SpinTuning::default();
        tuning.max_velocity = tuning.min_velocity;
        assert!(validate_spin_tuning(&tuning).is_err());

        let mut tuning = SpinTuning::default();
        tuning.decay = 1.0;
        assert!(validate_spin_tuning(&tuning).is_err());

        let mut tuning = SpinTuning::default();
        tuning.stop_threshold = 0.0;
        assert!(validate_spin_tuning(&tuning).is_err());
    }
}
