//! Mission progression
//!
//! Advancement is re-derived after every action from (state, parsed action)
//! alone; there is no event bus. The primary script moves strictly in order.
//! Side missions watch the raw command text and advance independently.

use super::GameState;
use crate::data::{MISSION_STEPS, SIDE_MISSIONS};

/// A cleared primary mission step, for the completion banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionAdvance {
    pub title: &'static str,
    pub description: &'static str,
    pub reward_xp: u32,
}

impl MissionAdvance {
    /// The two-line completion banner
    pub fn banner(&self) -> Vec<String> {
        vec![
            format!("✔ Step complete: {}", self.title),
            format!("🎯 {} (+{} XP)", self.description, self.reward_xp),
        ]
    }
}

/// Advance the primary mission if the executed action matches the current
/// step's trigger. Out-of-order actions never advance the index; past the
/// last step the script is complete and nothing moves.
pub fn check_mission(
    state: &GameState,
    command: &str,
    arg: Option<&str>,
) -> (GameState, Option<MissionAdvance>) {
    let Some(step) = MISSION_STEPS.get(state.mission_step) else {
        return (state.clone(), None);
    };

    if !step.trigger.matches(command, arg) {
        return (state.clone(), None);
    }

    let advanced = GameState {
        mission_step: state.mission_step + 1,
        ..state.clone()
    };
    let advance = MissionAdvance {
        title: step.title,
        description: step.description,
        reward_xp: step.reward_xp,
    };
    (advanced, Some(advance))
}

/// What a side mission did in response to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideMissionEvent {
    Progressed {
        title: &'static str,
        step: usize,
        total: usize,
    },
    Completed {
        title: &'static str,
        reward_xp: u32,
    },
}

impl SideMissionEvent {
    pub fn line(&self) -> String {
        match self {
            SideMissionEvent::Progressed { title, step, total } => {
                format!("✔ Side Mission Progress: {} (Step {} of {})", title, step, total)
            }
            SideMissionEvent::Completed { title, reward_xp } => {
                format!("✔ Side Mission Complete: {} (+{} XP)", title, reward_xp)
            }
        }
    }
}

/// Run every incomplete side mission against the raw command. A mission
/// advances only when the command equals its next required answer; steps are
/// never skipped, and completion fires exactly once.
pub fn check_side_missions(state: &GameState, raw: &str) -> (GameState, Vec<SideMissionEvent>) {
    let mut progress = state.side_mission_progress.clone();
    let mut events = Vec::new();

    for mission in &SIDE_MISSIONS {
        let done = progress.get(&mission.id).copied().unwrap_or(0);
        if done >= mission.steps.len() {
            continue;
        }
        if mission.steps[done].answer != raw {
            continue;
        }

        let done = done + 1;
        progress.insert(mission.id, done);
        if done == mission.steps.len() {
            events.push(SideMissionEvent::Completed {
                title: mission.title,
                reward_xp: mission.reward_xp,
            });
        } else {
            events.push(SideMissionEvent::Progressed {
                title: mission.title,
                step: done,
                total: mission.steps.len(),
            });
        }
    }

    let new_state = GameState {
        side_mission_progress: progress,
        ..state.clone()
    };
    (new_state, events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_advances_only_on_exact_trigger() {
        let state = GameState::new();
        let (state, advance) = check_mission(&state, "cat", Some("passwords.txt"));
        assert!(advance.is_none());
        assert_eq!(state.mission_step, 0);

        let (state, advance) = check_mission(&state, "network_scan", None);
        let advance = advance.expect("first step should clear");
        assert_eq!(advance.title, "Reconnaissance");
        assert_eq!(state.mission_step, 1);

        // Repeating the cleared step does nothing
        let (state, advance) = check_mission(&state, "network_scan", None);
        assert!(advance.is_none());
        assert_eq!(state.mission_step, 1);
    }

    #[test]
    fn side_mission_steps_cannot_be_skipped() {
        let state = GameState::new();
        let (state, events) = check_side_missions(&state, "binod");
        assert!(events.is_empty());

        let (state, events) = check_side_missions(&state, "cat hack_logs");
        assert_eq!(
            events,
            vec![SideMissionEvent::Progressed {
                title: "Find Binod",
                step: 1,
                total: 2
            }]
        );

        let (state, events) = check_side_missions(&state, "binod");
        assert_eq!(
            events,
            vec![SideMissionEvent::Completed {
                title: "Find Binod",
                reward_xp: 40
            }]
        );

        // Completed missions stay completed
        let (_, events) = check_side_missions(&state, "binod");
        assert!(events.is_empty());
    }
}
