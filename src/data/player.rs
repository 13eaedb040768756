//! Player profile and progression
//!
//! XP, levels and cosmetic titles. The profile is an explicit context object
//! threaded through every interpreter call; nothing here is global state.

use serde::{Deserialize, Serialize};

/// XP needed to advance one level
pub const XP_PER_LEVEL: u32 = 100;

/// Cosmetic rank for a level. Thresholds are checked highest first.
pub fn title_for_level(level: u32) -> &'static str {
    if level >= 10 {
        return "Digital Ghost";
    }
    if level >= 7 {
        return "Cyber Ninja";
    }
    if level >= 5 {
        return "Shell Slinger";
    }
    if level >= 3 {
        return "Root Seeker";
    }
    "Script Kiddie"
}

/// The player's progression record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// XP within the current level, 0..XP_PER_LEVEL
    pub xp: u32,
    pub level: u32,
    pub title: String,
}

impl Profile {
    pub fn new() -> Self {
        Self {
            xp: 0,
            level: 1,
            title: title_for_level(1).to_string(),
        }
    }

    /// Award XP and return any level-up announcement lines.
    ///
    /// XP rolls over at [`XP_PER_LEVEL`]; a single award raises at most one
    /// level (awards in the game are all well under 100).
    pub fn award_xp(&mut self, amount: u32) -> Vec<String> {
        let mut announcements = Vec::new();
        self.xp += amount;
        if self.xp >= XP_PER_LEVEL {
            self.level += 1;
            self.xp %= XP_PER_LEVEL;
            self.title = title_for_level(self.level).to_string();
            announcements.push(format!(
                "🎉 Level Up! You are now level {} - {}",
                self.level, self.title
            ));
        }
        announcements
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}
