//! Pure state transition functions
//!
//! Every gameplay action is a function from the current [`GameState`] (plus
//! arguments) to either a new state or a [`Denied`] refusal. `Err` always
//! means the state is unchanged; refusals are data, never panics, and their
//! `Display` text is exactly what the terminal prints.

use super::GameState;
use crate::data;

/// A refused action, with its user-facing message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Denied {
    #[error("IP {0} not found. Run network_scan first!")]
    UnknownHost(String),

    #[error("Not connected to any host. Use 'connect <ip>' first.")]
    NotConnected,

    #[error("Access denied. Please 'login' first.")]
    NotLoggedIn,

    /// Combined gate used by file reads and directory changes
    #[error("Access denied. Connect and login first.")]
    NoSession,

    #[error("Password required. Use: login <password>")]
    PasswordRequired,

    #[error("Incorrect password for this host.")]
    WrongPassword,

    #[error("No file system found for this host.")]
    MissingFilesystem,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("{0} is already installed.")]
    AlreadyInstalled(String),
}

/// Scan the network. Always succeeds; reveals the three base hosts, plus the
/// hidden server once the mission has progressed past Credential Harvesting.
pub fn scan_network(state: &GameState) -> GameState {
    let mut discovered: Vec<String> = data::BASE_SCAN_RESULTS
        .iter()
        .map(|ip| ip.to_string())
        .collect();
    if state.mission_step > 1 {
        discovered.push(data::HIDDEN_HOST.to_string());
    }

    GameState {
        discovered_ips: discovered,
        ..state.clone()
    }
}

/// Connect to a discovered host. Resets the login flag even when
/// reconnecting to the same address.
pub fn connect(state: &GameState, ip: &str) -> Result<GameState, Denied> {
    if !state.discovered_ips.iter().any(|known| known == ip) {
        return Err(Denied::UnknownHost(ip.to_string()));
    }
    Ok(GameState {
        connected_ip: Some(ip.to_string()),
        logged_in: false,
        ..state.clone()
    })
}

/// Log in to the connected host. Hosts that demand a password accept exactly
/// their configured one; open hosts accept anything, including nothing.
pub fn login(state: &GameState, password: Option<&str>) -> Result<GameState, Denied> {
    let ip = state.connected_ip.as_deref().ok_or(Denied::NotConnected)?;

    if let Some(profile) = data::host_profile(ip) {
        if let Some(expected) = profile.password {
            let supplied = password.ok_or(Denied::PasswordRequired)?;
            if supplied != expected {
                return Err(Denied::WrongPassword);
            }
        }
    }

    Ok(GameState {
        logged_in: true,
        ..state.clone()
    })
}

/// List the connected host's files and folders, in seed order. Read-only.
pub fn list_files(state: &GameState) -> Result<Vec<String>, Denied> {
    let ip = state.connected_ip.as_deref().ok_or(Denied::NotConnected)?;
    if !state.logged_in {
        return Err(Denied::NotLoggedIn);
    }
    let fs = state.directories.get(ip).ok_or(Denied::MissingFilesystem)?;

    let mut entries = fs.files.clone();
    entries.extend(fs.folders.iter().cloned());
    Ok(entries)
}

/// Read a file on the connected host
pub fn cat_file(state: &GameState, filename: &str) -> Result<&'static str, Denied> {
    let ip = session_host(state)?;
    data::file_content(ip, filename).ok_or_else(|| Denied::FileNotFound(filename.to_string()))
}

/// Enter a directory on the connected host
pub fn change_directory(state: &GameState, dirname: &str) -> Result<GameState, Denied> {
    let ip = session_host(state)?;

    let fs = state
        .directories
        .get(ip)
        .filter(|fs| fs.folders.iter().any(|f| f == dirname))
        .ok_or_else(|| Denied::DirectoryNotFound(dirname.to_string()))?;

    let mut directories = state.directories.clone();
    directories.insert(
        ip.to_string(),
        super::HostFs {
            current_dir: dirname.to_string(),
            ..fs.clone()
        },
    );

    Ok(GameState {
        directories,
        ..state.clone()
    })
}

/// Install a tool. Installing twice is a refusal, not a no-op.
pub fn install_tool(state: &GameState, tool: &str) -> Result<GameState, Denied> {
    if state.has_tool(tool) {
        return Err(Denied::AlreadyInstalled(tool.to_string()));
    }
    let mut tools = state.tools.clone();
    tools.push(tool.to_string());
    Ok(GameState {
        tools,
        ..state.clone()
    })
}

/// Connected-and-logged-in gate shared by file reads and directory changes
fn session_host(state: &GameState) -> Result<&str, Denied> {
    match state.connected_ip.as_deref() {
        Some(ip) if state.logged_in => Ok(ip),
        _ => Err(Denied::NoSession),
    }
}
