//! The static game world
//!
//! Hosts, filesystem seeds, mission scripts and the XP/title tables.
//! Everything here is lookup-only; nothing in this module mutates at runtime.

pub mod hosts;
pub mod missions;
pub mod player;

pub use hosts::*;
pub use missions::*;
pub use player::*;

use serde::{Deserialize, Serialize};

/// Security posture of a simulated host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityType {
    Open,
    Secure,
    Suspicious,
    Hidden,
}

impl SecurityType {
    /// Label shown in scan results
    pub fn scan_label(&self) -> &'static str {
        match self {
            SecurityType::Open => "open",
            SecurityType::Secure => "secure",
            SecurityType::Suspicious => "??? suspicious",
            SecurityType::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for SecurityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityType::Open => write!(f, "OPEN"),
            SecurityType::Secure => write!(f, "SECURE"),
            SecurityType::Suspicious => write!(f, "SUSPICIOUS"),
            SecurityType::Hidden => write!(f, "HIDDEN"),
        }
    }
}
