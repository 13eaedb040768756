//! Mission scripts
//!
//! The primary mission is a fixed linear sequence; the player's only link to
//! it is an index into [`MISSION_STEPS`]. Side missions are independent
//! bonus objectives tracked by per-mission progress counters.

/// What the player must type (parsed form) to clear a mission step.
///
/// Matching is structural over the parsed command rather than over a
/// recomposed string, so argument whitespace can never break a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A bare command with no argument, e.g. `network_scan`
    Bare(&'static str),
    /// A command with one exact argument, e.g. `cat passwords.txt`
    WithArg(&'static str, &'static str),
}

impl Trigger {
    pub fn matches(&self, command: &str, arg: Option<&str>) -> bool {
        match self {
            Trigger::Bare(c) => *c == command && arg.is_none(),
            Trigger::WithArg(c, a) => *c == command && arg == Some(*a),
        }
    }
}

/// One step of the primary mission script
#[derive(Debug, Clone, Copy)]
pub struct MissionStep {
    pub title: &'static str,
    pub description: &'static str,
    pub trigger: Trigger,
    pub reward_xp: u32,
}

/// The primary mission, in play order
pub const MISSION_STEPS: [MissionStep; 6] = [
    MissionStep {
        title: "Reconnaissance",
        description: "Scan the network and find the open host.",
        trigger: Trigger::Bare("network_scan"),
        reward_xp: 20,
    },
    MissionStep {
        title: "Credential Harvesting",
        description: "Find the admin password on the open host.",
        trigger: Trigger::WithArg("cat", "passwords.txt"),
        reward_xp: 20,
    },
    MissionStep {
        title: "Infiltration",
        description: "Login to the secure host using the password.",
        trigger: Trigger::WithArg("login", "letmein"),
        reward_xp: 20,
    },
    MissionStep {
        title: "Firewall Bypass",
        description: "Disable the firewall on the secure host.",
        trigger: Trigger::WithArg("cat", "firewall.conf"),
        reward_xp: 20,
    },
    MissionStep {
        title: "Payload Deployment",
        description: "Connect to the suspicious host and run malware.",
        trigger: Trigger::WithArg("cat", "malware.exe"),
        reward_xp: 20,
    },
    MissionStep {
        title: "Ghost Protocol",
        description: "Scan again to find the hidden server and read the secret.",
        trigger: Trigger::WithArg("cat", "easter_egg.txt"),
        reward_xp: 30,
    },
];

/// One step of a side mission: the exact command that clears it, plus a
/// hint the assistant may surface.
#[derive(Debug, Clone, Copy)]
pub struct SideMissionStep {
    pub answer: &'static str,
    pub hint: &'static str,
}

/// An optional bonus objective, tracked independently of the primary script
#[derive(Debug, Clone, Copy)]
pub struct SideMission {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [SideMissionStep],
    pub reward_xp: u32,
}

pub const SIDE_MISSIONS: [SideMission; 1] = [SideMission {
    id: 1,
    title: "Find Binod",
    description: "A mysterious name is hidden in the logs. Can you uncover it?",
    steps: &[
        SideMissionStep {
            answer: "cat hack_logs",
            hint: "Check the logs for something unusual.",
        },
        SideMissionStep {
            answer: "binod",
            hint: "Type the name you found in the logs.",
        },
    ],
    reward_xp: 40,
}];
