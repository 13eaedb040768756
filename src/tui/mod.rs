//! Terminal User Interface
//!
//! Green-on-black terminal shell for the game using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the terminal
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::Green,
            accent: Color::LightGreen,
            alert: Color::Red,
            success: Color::Green,
            border: Color::DarkGray,
            header: Color::LightGreen,
        }
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo, shown once at boot
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════════════════╗
║                                                          ║
║   ██╗  ██╗ █████╗  ██████╗██╗  ██╗███████╗██████╗        ║
║   ██║  ██║██╔══██╗██╔════╝██║ ██╔╝██╔════╝██╔══██╗       ║
║   ███████║███████║██║     █████╔╝ █████╗  ██████╔╝       ║
║   ██╔══██║██╔══██║██║     ██╔═██╗ ██╔══╝  ██╔══██╗       ║
║   ██║  ██║██║  ██║╚██████╗██║  ██╗███████╗██║  ██║       ║
║   ╚═╝  ╚═╝╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝       ║
║                                                          ║
║        T E R M I N A L   v1.0                            ║
║                                                          ║
╚══════════════════════════════════════════════════════════╝
"#;

/// Header strip title
pub const SMALL_LOGO: &str = " 🧠 HACKER TERMINAL ";

/// Lines printed by the boot sequence
pub const BOOT_LINES: [&str; 4] = [
    "🧠 Booting Hacker Terminal...",
    "Initializing modules...",
    "💡 Type 'help' for available commands.",
    "🔐 Login not required. Terminal open in dev mode.",
];

/// Create the main layout: header, log, input line, assistant strip
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with XP bar
            Constraint::Min(10),   // Terminal log
            Constraint::Length(3), // Input line
            Constraint::Length(3), // Assistant hint
        ])
        .split(area)
        .to_vec()
}
