use std::fmt;
use std::ops::Range;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::*;
use crate::shared_game_session::{GameSession, SessionOutcome};
use crate::validation::{validate_color, validate_spin_tuning};
use crate::wheel_render::WheelFrame;

/// One wedge of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub color: String,
    pub value: u32,
}

impl Segment {
    pub fn new(label: impl Into<String>, color: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            value,
        }
    }

    /// A segment labelled with its own reward, e.g. "5 XP".
    pub fn xp(color: &str, value: u32) -> Self {
        Self::new(format!("{} XP", value), color, value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    Empty,
    InvalidColor(String),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Wheel needs at least one segment"),
            Self::InvalidColor(color) => write!(f, "Invalid segment color: {}", color),
        }
    }
}

impl std::error::Error for WheelError {}

/// Ordered, non-empty set of equal-width segments. Index 0 starts at the
/// pointer and the rest follow clockwise.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct Wheel {
    segments: Vec<Segment>,
}

impl Wheel {
    pub fn new(segments: Vec<Segment>) -> Result<Self, WheelError> {
        if segments.is_empty() {
            return Err(WheelError::Empty);
        }
        if let Some(bad) = segments.iter().find(|s| validate_color(&s.color).is_err()) {
            return Err(WheelError::InvalidColor(bad.color.clone()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Angular width of every segment, in degrees.
    pub fn segment_width(&self) -> f64 {
        360.0 / self.segments.len() as f64
    }

    /// Index of the segment sitting under the pointer once the wheel has
    /// turned `rotation_degrees` clockwise.
    ///
    /// The pointer stays put while the wheel turns, so the wheel is read
    /// backwards from the rotation. This only holds while wedges are laid out
    /// clockwise from the pointer (see `wheel_render`).
    pub fn segment_index_at(&self, rotation_degrees: f64) -> usize {
        let normalized = (360.0 - rotation_degrees).rem_euclid(360.0);
        let index = (normalized / self.segment_width()).floor() as usize;
        // rem_euclid can land exactly on 360.0 for values just below zero
        index.min(self.segments.len() - 1)
    }
}

impl Default for Wheel {
    fn default() -> Self {
        let segments = [5, 2, 7, 1, 10, 3, 8, 0]
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let color = if i % 2 == 0 { PRIMARY_COLOR } else { SECONDARY_COLOR };
                Segment::xp(color, value)
            })
            .collect();
        Self { segments }
    }
}

impl TryFrom<Vec<Segment>> for Wheel {
    type Error = WheelError;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        Self::new(segments)
    }
}

impl From<Wheel> for Vec<Segment> {
    fn from(wheel: Wheel) -> Self {
        wheel.segments
    }
}

/// Knobs for the spin simulation. The defaults are the reference behavior;
/// changing them changes how long a spin lasts. Deserializing runs the same
/// checks as [`Validate::validate`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Validate)]
#[serde(try_from = "SpinTuningFields")]
#[validate(schema(function = "validate_spin_tuning"))]
pub struct SpinTuning {
    #[validate(range(min = 0.0))]
    pub min_velocity: f64,
    #[validate(range(min = 0.0))]
    pub max_velocity: f64,
    pub decay: f64,
    #[validate(range(min = 0.0))]
    pub stop_threshold: f64,
    #[validate(range(min = 1))]
    pub tick_interval_ms: u32,
}

impl SpinTuning {
    /// Degrees per tick a new spin may start with, upper bound exclusive.
    pub fn velocity_range(&self) -> Range<f64> {
        self.min_velocity..self.max_velocity
    }
}

#[derive(Deserialize)]
struct SpinTuningFields {
    min_velocity: f64,
    max_velocity: f64,
    decay: f64,
    stop_threshold: f64,
    tick_interval_ms: u32,
}

impl TryFrom<SpinTuningFields> for SpinTuning {
    type Error = ValidationErrors;

    fn try_from(fields: SpinTuningFields) -> Result<Self, Self::Error> {
        let tuning = Self {
            min_velocity: fields.min_velocity,
            max_velocity: fields.max_velocity,
            decay: fields.decay,
            stop_threshold: fields.stop_threshold,
            tick_interval_ms: fields.tick_interval_ms,
        };
        tuning.validate()?;
        Ok(tuning)
    }
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            min_velocity: MIN_SPIN_VELOCITY,
            max_velocity: MAX_SPIN_VELOCITY,
            decay: SPIN_DECAY,
            stop_threshold: SPIN_STOP_THRESHOLD,
            tick_interval_ms: SPIN_TICK_MS,
        }
    }
}

/// Rotation and velocity of the wheel between ticks.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct SpinState {
    pub rotation_degrees: f64,
    pub angular_velocity: f64,
    pub is_spinning: bool,
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false and leaves the state alone if a spin is already running
    /// or `velocity` is not finite.
    pub fn start(&mut self, velocity: f64) -> bool {
        if self.is_spinning || !velocity.is_finite() {
            return false;
        }
        self.angular_velocity = velocity.max(0.0);
        self.is_spinning = true;
        true
    }

    /// Advances one tick. Returns true only on the tick that brings the wheel
    /// to rest.
    pub fn advance(&mut self, tuning: &SpinTuning) -> bool {
        if !self.is_spinning {
            return false;
        }

        self.rotation_degrees = (self.rotation_degrees + self.angular_velocity).rem_euclid(360.0);

        // The threshold is checked before decaying; the decay alone never reaches zero.
        if self.angular_velocity > tuning.stop_threshold {
            self.angular_velocity *= tuning.decay;
            false
        } else {
            self.angular_velocity = 0.0;
            self.is_spinning = false;
            true
        }
    }

    /// Stops the wheel where it is.
    pub fn halt(&mut self) {
        self.angular_velocity = 0.0;
        self.is_spinning = false;
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SpinResult {
    pub segment_index: usize,
    pub value: u32,
}

/// The spin wheel mini-game: a wheel, its spin and the session it scores into.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpinWheelGame {
    pub wheel: Wheel,
    pub tuning: SpinTuning,
    pub spin: SpinState,
    pub last_result: Option<SpinResult>,
    pub session: GameSession,
}

impl SpinWheelGame {
    /// Fails if `tuning` could leave a spin that never comes to rest.
    pub fn new(wheel: Wheel, tuning: SpinTuning) -> Result<Self, ValidationErrors> {
        tuning.validate()?;
        Ok(Self::build(wheel, tuning))
    }

    fn build(wheel: Wheel, tuning: SpinTuning) -> Self {
        Self {
            wheel,
            tuning,
            spin: SpinState::new(),
            last_result: None,
            session: GameSession::new("Spin Wheel", "Spin the wheel and try your luck!"),
        }
    }

    pub fn start_game(&mut self) {
        self.spin.halt();
        self.last_result = None;
        self.session.start();
    }

    /// Ends the session and reports the XP it earned. A spin still in flight
    /// is stopped without being scored.
    pub fn end_game(&mut self) -> SessionOutcome {
        if self.spin.is_spinning {
            debug!("Game ended mid-spin at {:.2} degrees", self.spin.rotation_degrees);
        }
        self.spin.halt();
        self.session.end()
    }

    /// Starts a spin with a velocity drawn from the tuning range. Does nothing
    /// and returns false while a spin is in progress.
    pub fn start_spin<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.spin.is_spinning {
            return false;
        }
        let range = self.tuning.velocity_range();
        let velocity = if range.start < range.end {
            rng.gen_range(range)
        } else {
            range.start
        };
        self.start_spin_with_velocity(velocity)
    }

    pub fn start_spin_with_velocity(&mut self, velocity: f64) -> bool {
        if !self.spin.start(velocity) {
            return false;
        }
        self.last_result = None;
        debug!("Wheel spin started at {:.3} deg/tick", self.spin.angular_velocity);
        true
    }

    /// Advances the spin by one tick. Returns the result on the tick the
    /// wheel comes to rest, after adding it to the session score.
    pub fn tick(&mut self) -> Option<SpinResult> {
        if !self.spin.advance(&self.tuning) {
            return None;
        }

        let segment_index = self.wheel.segment_index_at(self.spin.rotation_degrees);
        let value = self
            .wheel
            .segment(segment_index)
            .map(|segment| segment.value)
            .unwrap_or_default();
        let result = SpinResult { segment_index, value };

        self.session.add_score(value);
        self.last_result = Some(result);
        debug!(
            "Wheel stopped at {:.2} degrees on segment {} ({} XP)",
            self.spin.rotation_degrees, segment_index, value
        );
        Some(result)
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn frame(&self, width: f64, height: f64) -> WheelFrame {
        WheelFrame::new(&self.wheel, self.spin.rotation_degrees, width, height)
    }
}

impl Default for SpinWheelGame {
    fn default() -> Self {
        Self::build(Wheel::default(), SpinTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_to_rest(game: &mut SpinWheelGame) -> (SpinResult, usize) {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if let Some(result) = game.tick() {
                return (result, ticks);
            }
            assert!(ticks < 10_000, "spin never stopped");
        }
    }

    #[test]
    fn test_empty_wheel_rejected() {
        assert_eq!(Wheel::new(vec![]), Err(WheelError::Empty));
        let bad = Wheel::new(vec![Segment::new("x", "blue", 1)]);
        assert_eq!(bad, Err(WheelError::InvalidColor("blue".to_string())));
    }

    #[test]
    fn test_default_wheel_layout() {
        let wheel = Wheel::default();
        let values: Vec<u32> = wheel.segments().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![5, 2, 7, 1, 10, 3, 8, 0]);
        assert_eq!(wheel.segment_width(), 45.0);
        assert_eq!(wheel.segments()[4].label, "10 XP");
        assert_eq!(wheel.segments()[1].color, SECONDARY_COLOR);
    }

    #[test]
    fn test_resolution_examples() {
        let wheel = Wheel::default();
        assert_eq!(wheel.segment_index_at(0.0), 0);
        assert_eq!(wheel.segment_index_at(46.0), 6);
        assert_eq!(wheel.segments()[wheel.segment_index_at(46.0)].value, 8);
        assert_eq!(wheel.segment_index_at(359.999), 0);
        assert_eq!(wheel.segment_index_at(1.0), 7);
    }

    #[test]
    fn test_resolution_always_in_range() {
        for n in 1..=13 {
            let segments = (0..n).map(|v| Segment::xp("#000", v)).collect();
            let wheel = Wheel::new(segments).unwrap();
            let mut rotation = 0.0;
            while rotation < 360.0 {
                assert!(wheel.segment_index_at(rotation) < n as usize);
                rotation += 0.37;
            }
            assert!(wheel.segment_index_at(-1e-15) < n as usize);
            assert!(wheel.segment_index_at(f64::EPSILON) < n as usize);
        }
    }

    #[test]
    fn test_single_tick_arithmetic() {
        let tuning = SpinTuning::default();
        let mut state = SpinState::new();
        state.rotation_degrees = 350.0;
        assert!(state.start(15.0));

        assert!(!state.advance(&tuning));
        assert!((state.rotation_degrees - 5.0).abs() < 1e-9);
        assert!((state.angular_velocity - 15.0 * 0.99).abs() < 1e-12);
        assert!(state.is_spinning);
    }

    #[test]
    fn test_threshold_checked_before_decay() {
        let tuning = SpinTuning::default();
        let mut state = SpinState::new();
        state.start(0.1);
        assert!(state.advance(&tuning));
        assert_eq!(state.angular_velocity, 0.0);
        assert!(!state.is_spinning);
        assert!((state.rotation_degrees - 0.1).abs() < 1e-12);

        // resting state does not move
        assert!(!state.advance(&tuning));
        assert!((state.rotation_degrees - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_start_spin_while_spinning_is_noop() {
        let mut game = SpinWheelGame::default();
        game.start_game();
        assert!(game.start_spin_with_velocity(12.0));
        game.tick();
        let before = game.spin;

        let mut rng = StdRng::seed_from_u64(7);
        assert!(!game.start_spin(&mut rng));
        assert!(!game.start_spin_with_velocity(19.0));
        assert_eq!(game.spin, before);
    }

    #[test]
    fn test_start_spin_draws_from_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut game = SpinWheelGame::default();
            assert!(game.start_spin(&mut rng));
            let v = game.spin.angular_velocity;
            assert!((10.0..20.0).contains(&v), "velocity {} out of range", v);
        }

        // an all-zero source yields the bottom of the range
        let mut game = SpinWheelGame::default();
        game.start_spin(&mut StepRng::new(0, 0));
        assert_eq!(game.spin.angular_velocity, 10.0);
    }

    #[test]
    fn test_spin_runs_to_rest_and_latches() {
        let mut game = SpinWheelGame::default();
        game.start_game();
        game.start_spin_with_velocity(15.0);
        assert!(game.last_result.is_none());

        let (result, ticks) = run_to_rest(&mut game);
        // ln(0.1 / 15) / ln(0.99) is roughly 499 decays
        assert!((480..=520).contains(&ticks), "stopped after {} ticks", ticks);
        assert!(!game.is_spinning());
        assert_eq!(game.spin.angular_velocity, 0.0);
        assert_eq!(game.last_result, Some(result));
        assert_eq!(result.segment_index, game.wheel.segment_index_at(game.spin.rotation_degrees));
        assert_eq!(game.score(), result.value);

        // after rest nothing moves and nothing more is scored
        let rotation = game.spin.rotation_degrees;
        for _ in 0..10 {
            assert!(game.tick().is_none());
        }
        assert_eq!(game.spin.rotation_degrees, rotation);
        assert_eq!(game.spin.angular_velocity, 0.0);

        // a new spin clears the latched result
        game.start_spin_with_velocity(11.0);
        assert!(game.last_result.is_none());
    }

    #[test]
    fn test_spins_accumulate_score() {
        let mut game = SpinWheelGame::default();
        game.start_game();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut expected = 0;
        for _ in 0..5 {
            assert!(game.start_spin(&mut rng));
            let (result, _) = run_to_rest(&mut game);
            expected += result.value;
        }
        assert_eq!(game.score(), expected);
    }

    #[test]
    fn test_end_game_mid_spin_is_not_scored() {
        let mut game = SpinWheelGame::default();
        game.start_game();
        game.start_spin_with_velocity(18.0);
        game.tick();

        let outcome = game.end_game();
        assert_eq!(outcome.score, 0);
        assert!(!game.is_spinning());
        assert!(game.tick().is_none());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_start_game_resets() {
        let mut game = SpinWheelGame::default();
        game.start_game();
        game.start_spin_with_velocity(0.05);
        game.tick();
        assert!(game.last_result.is_some());

        game.start_game();
        assert_eq!(game.score(), 0);
        assert!(game.last_result.is_none());
        assert!(game.session.is_active());
    }

    #[test]
    fn test_wheel_serde_rejects_empty() {
        let json = serde_json::to_string(&Wheel::default()).unwrap();
        assert!(json.starts_with('['));
        let back: Wheel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Wheel::default());

        assert!(serde_json::from_str::<Wheel>("[]").is_err());
    }

    #[test]
    fn test_tuning_validate() {
        assert!(SpinTuning::default().validate().is_ok());
        let tuning = SpinTuning { decay: 1.5, ..SpinTuning::default() };
        assert!(tuning.validate().is_err());
        let tuning = SpinTuning { tick_interval_ms: 0, ..SpinTuning::default() };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_empty_velocity_range_does_not_panic() {
        let mut game = SpinWheelGame::default();
        game.tuning.min_velocity = 12.0;
        game.tuning.max_velocity = 12.0;
        assert!(game.start_spin(&mut StdRng::seed_from_u64(1)));
        assert_eq!(game.spin.angular_velocity, 12.0);
    }

    #[test]
    fn test_new_rejects_tuning_that_never_stops() {
        let never_decays = SpinTuning { decay: 1.0, ..SpinTuning::default() };
        assert!(SpinWheelGame::new(Wheel::default(), never_decays).is_err());

        let no_threshold = SpinTuning { stop_threshold: 0.0, ..SpinTuning::default() };
        assert!(SpinWheelGame::new(Wheel::default(), no_threshold).is_err());

        let reversed = SpinTuning { min_velocity: 20.0, max_velocity: 10.0, ..SpinTuning::default() };
        assert!(SpinWheelGame::new(Wheel::default(), reversed).is_err());

        let game = SpinWheelGame::new(Wheel::default(), SpinTuning::default()).unwrap();
        assert_eq!(game.tuning, SpinTuning::default());
    }

    #[test]
    fn test_tuning_serde_validates() {
        let json = serde_json::to_string(&SpinTuning::default()).unwrap();
        let back: SpinTuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SpinTuning::default());

        let bad = r#"{"min_velocity":10.0,"max_velocity":20.0,"decay":1.0,"stop_threshold":0.1,"tick_interval_ms":20}"#;
        assert!(serde_json::from_str::<SpinTuning>(bad).is_err());

        let mut game_json = serde_json::to_value(SpinWheelGame::default()).unwrap();
        game_json["tuning"]["decay"] = serde_json::json!(1.5);
        assert!(serde_json::from_value::<SpinWheelGame>(game_json).is_err());
    }

    #[test]
    fn test_non_finite_velocity_rejected() {
        let mut game = SpinWheelGame::default();
        game.start_game();
        for velocity in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(!game.start_spin_with_velocity(velocity));
            assert!(!game.is_spinning());
            assert!(game.tick().is_none());
        }
        assert_eq!(game.spin.rotation_degrees, 0.0);

        // a finite spin still works afterwards
        assert!(game.start_spin_with_velocity(10.0));
        assert!(game.is_spinning());
    }
}
