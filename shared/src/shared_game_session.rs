use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_SESSION_XP;

/// State of one play session of a mini-game.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameSession {
    pub title: String,
    pub description: String,
    pub started: bool,
    pub over: bool,
    pub score: u32,
}

/// What a finished session is worth.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score: u32,
    pub awarded_xp: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

/// XP earned for a session score, capped per session.
pub fn award_xp(score: u32) -> u32 {
    score.min(MAX_SESSION_XP)
}

impl GameSession {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            started: false,
            over: false,
            score: 0,
        }
    }

    pub fn start(&mut self) {
        self.started = true;
        self.over = false;
        self.score = 0;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn end(&mut self) -> SessionOutcome {
        self.over = true;
        self.started = false;

        let outcome = SessionOutcome::from_score(self.score);
        info!(
            "{} finished with score {}, awarding {} XP",
            self.title, outcome.score, outcome.awarded_xp
        );
        outcome
    }

    pub fn is_active(&self) -> bool {
        self.started && !self.over
    }
}

impl SessionOutcome {
    pub fn from_score(score: u32) -> Self {
        Self {
            score,
            awarded_xp: award_xp(score),
        }
    }

    pub fn notification(&self) -> Notification {
        Notification {
            title: "Game Complete!".to_string(),
            description: format!("You earned {} XP!", self.awarded_xp),
        }
    }
}

impl Notification {
    pub fn message(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_is_capped() {
        let awarded: Vec<u32> = [0, 5, 10, 11, 100].iter().map(|&s| award_xp(s)).collect();
        assert_eq!(awarded, vec![0, 5, 10, 10, 10]);
    }

    #[test]
    fn test_session_lifecycle() {
        let mut session = GameSession::new("Spin Wheel", "Spin the wheel and try your luck!");
        assert!(!session.is_active());

        session.start();
        assert!(session.is_active());
        session.add_score(7);
        session.add_score(8);

        let outcome = session.end();
        assert_eq!(outcome, SessionOutcome { score: 15, awarded_xp: 10 });
        assert!(session.over);
        assert!(!session.started);

        session.start();
        assert_eq!(session.score, 0);
        assert!(!session.over);
    }

    #[test]
    fn test_score_saturates() {
        let mut session = GameSession::new("t", "d");
        session.start();
        session.add_score(u32::MAX);
        session.add_score(3);
        assert_eq!(session.score, u32::MAX);
        assert_eq!(session.end().awarded_xp, MAX_SESSION_XP);
    }

    #[test]
    fn test_notification_text() {
        let note = SessionOutcome::from_score(4).notification();
        assert_eq!(note.title, "Game Complete!");
        assert_eq!(note.description, "You earned 4 XP!");
        assert_eq!(note.message(), "Game Complete! You earned 4 XP!");
    }
}
