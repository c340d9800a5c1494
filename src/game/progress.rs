//! Win progress
//!
//! Counts chests opened for the first time, activates the portal once the goal
//! is met and holds the timed warning shown on the HUD.

/// A warning shown on the HUD until its timer runs out
#[derive(Debug, Clone, PartialEq)]
pub struct TimedMessage {
    pub text: String,
    pub remaining: f32,
}

/// Win progress and transient HUD message
#[derive(Debug, Clone)]
pub struct GameProgress {
    pub chests_opened: u32,
    pub chests_to_win: u32,
    pub portal_active: bool,
    pub game_won: bool,
    message: Option<TimedMessage>,
}

impl GameProgress {
    pub fn new(chests_to_win: u32) -> Self {
        Self {
            chests_opened: 0,
            chests_to_win,
            portal_active: false,
            game_won: false,
            message: None,
        }
    }

    /// Counts a first-time chest opening. Returns `true` when this opening
    /// activates the portal.
    pub fn record_chest_opened(&mut self) -> bool {
        self.chests_opened += 1;
        if self.chests_opened >= self.chests_to_win && !self.portal_active {
            self.portal_active = true;
            return true;
        }
        false
    }

    pub fn goal_reached(&self) -> bool {
        self.chests_opened >= self.chests_to_win
    }

    pub fn chests_remaining(&self) -> u32 {
        self.chests_to_win.saturating_sub(self.chests_opened)
    }

    /// Replaces any current message
    pub fn post_message(&mut self, text: impl Into<String>, duration: f32) {
        self.message = Some(TimedMessage {
            text: text.into(),
            remaining: duration,
        });
    }

    /// The message while its timer is still positive
    pub fn message(&self) -> Option<&TimedMessage> {
        self.message.as_ref().filter(|m| m.remaining > 0.0)
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(message) = self.message.as_mut() {
            if message.remaining > 0.0 {
                message.remaining -= dt;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_activates_at_threshold() {
        let mut progress = GameProgress::new(3);
        assert!(!progress.record_chest_opened());
        assert!(!progress.record_chest_opened());
        assert_eq!(progress.chests_remaining(), 1);
        assert!(progress.record_chest_opened());
        assert!(progress.portal_active);
        assert!(!progress.game_won);
        assert_eq!(progress.chests_remaining(), 0);
    }

    #[test]
    fn test_message_expires() {
        let mut progress = GameProgress::new(3);
        progress.post_message("hello", 1.0);
        progress.tick(0.5);
        assert_eq!(progress.message().map(|m| m.text.as_str()), Some("hello"));
        progress.tick(0.6);
        assert!(progress.message().is_none());
    }
}
