//! Host and filesystem definitions
//!
//! The four hosts of the simulated network, their security posture, and the
//! files each one serves. Lookups for unknown addresses or filenames return
//! `None`; the world never fabricates content.

use super::SecurityType;

/// A simulated network endpoint
#[derive(Debug, Clone, Copy)]
pub struct HostProfile {
    pub address: &'static str,
    pub security: SecurityType,
    /// Present only when the host demands a password at login
    pub password: Option<&'static str>,
}

impl HostProfile {
    pub fn requires_password(&self) -> bool {
        self.password.is_some()
    }
}

/// Every host in the simulation, in discovery order
pub const HOSTS: [HostProfile; 4] = [
    HostProfile {
        address: "192.168.0.42",
        security: SecurityType::Open,
        password: None,
    },
    HostProfile {
        address: "10.0.0.2",
        security: SecurityType::Secure,
        password: Some("letmein"),
    },
    HostProfile {
        address: "192.168.1.5",
        security: SecurityType::Suspicious,
        password: None,
    },
    HostProfile {
        address: "172.16.0.13",
        security: SecurityType::Hidden,
        password: None,
    },
];

/// Hosts revealed by every scan
pub const BASE_SCAN_RESULTS: [&str; 3] = ["192.168.0.42", "10.0.0.2", "192.168.1.5"];

/// Revealed only once the mission has progressed past Credential Harvesting
pub const HIDDEN_HOST: &str = "172.16.0.13";

/// Look up a host by address
pub fn host_profile(address: &str) -> Option<&'static HostProfile> {
    HOSTS.iter().find(|h| h.address == address)
}

/// Seed data for a host's filesystem
#[derive(Debug, Clone, Copy)]
pub struct FilesystemSeed {
    pub address: &'static str,
    pub files: &'static [&'static str],
    pub folders: &'static [&'static str],
}

/// Per-host filesystem contents. A folder name may also appear in `files`;
/// listings show it under both headings, same as the fiction intends.
pub const FILESYSTEMS: [FilesystemSeed; 4] = [
    FilesystemSeed {
        address: "192.168.0.42",
        files: &["mission.txt", "secret_folder", "hack_logs", "passwords.txt"],
        folders: &["secret_folder"],
    },
    FilesystemSeed {
        address: "10.0.0.2",
        files: &["mission.txt", "firewall.conf", "admin_notes.txt"],
        folders: &["backups"],
    },
    FilesystemSeed {
        address: "192.168.1.5",
        files: &["mission.txt", "strange_file.bin", "malware.exe"],
        folders: &["secret_folder", "downloads"],
    },
    FilesystemSeed {
        address: "172.16.0.13",
        files: &["mission.txt", "easter_egg.txt"],
        folders: &[],
    },
];

/// Contents of a file on a given host. `mission.txt` differs per host; the
/// rest read the same wherever they appear.
pub fn file_content(address: &str, filename: &str) -> Option<&'static str> {
    match filename {
        "mission.txt" => match address {
            "192.168.0.42" => Some("Step 1: Find the admin password in passwords.txt"),
            "10.0.0.2" => Some("Step 2: Disable the firewall (see firewall.conf)"),
            "192.168.1.5" => Some("Step 3: Download malware.exe and upload to 10.0.0.2"),
            "172.16.0.13" => {
                Some("Congrats! You found the secret server. Read easter_egg.txt.")
            }
            _ => None,
        },
        "hack_logs" => Some(
            "[INFO] Connection from 10.0.0.66\n[WARN] Suspicious access spike\n[ALERT] Failed breach attempt",
        ),
        "strange_file.bin" => Some("\u{00DE}\u{00AD}\u{00BE}\u{00EF} ... (binary noise)"),
        "passwords.txt" => Some("admin: letmein\nuser: password123"),
        "firewall.conf" => Some("# Firewall rules\nALLOW 22\nALLOW 80\nDENY 443"),
        "admin_notes.txt" => Some("TODO: Patch malware vulnerability.\nDon't forget to backup!"),
        "malware.exe" => Some("(binary executable)"),
        "easter_egg.txt" => Some("You found the secret! Binod was here."),
        _ => None,
    }
}
