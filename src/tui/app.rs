//! Main application state and rendering

use crate::data::{Profile, MISSION_STEPS, XP_PER_LEVEL};
use crate::game::interpreter::{interpret, Effect};
use crate::game::GameState;
use crate::persistence::{self, SaveData};
use crate::tui::{create_main_layout, styled_block, Theme, BOOT_LINES, LOGO, SMALL_LOGO};
use crate::tui::widgets::XpBar;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::path::PathBuf;
use std::time::Duration;

/// How many log lines to keep around
const LOG_LIMIT: usize = 500;

/// How many frames a danger/glitch flash lasts
const FLASH_FRAMES: u8 = 7;

/// Output line fragments that should flash the danger border
const ALARMING_FRAGMENTS: [&str; 12] = [
    "access denied",
    "incorrect password",
    "not installed",
    "dangerous",
    "self-destruct",
    "fail",
    "denied",
    "error",
    "💥",
    "💣",
    "mission failed",
    "just kidding",
];

/// Output line fragments the assistant picks up as hints
const HINTABLE_FRAGMENTS: [&str; 7] = [
    "not installed",
    "Access denied",
    "Password required",
    "Incorrect password",
    "File not found",
    "Directory not found",
    "Usage:",
];

/// Application state
pub struct App {
    pub profile: Profile,
    pub state: GameState,
    pub theme: Theme,
    pub running: bool,
    pub log: Vec<String>,
    pub input_buffer: String,
    pub command_history: Vec<String>,
    history_index: Option<usize>,
    pub hint: String,
    danger_frames: u8,
    glitch_frames: u8,
    save_path: PathBuf,
    rng: StdRng,
}

impl App {
    pub fn new() -> Self {
        let save_path = persistence::default_save_path();
        let (profile, state) = persistence::load_or_initial(&save_path);

        let mut log: Vec<String> = LOGO.lines().map(String::from).collect();
        log.extend(BOOT_LINES.iter().map(|l| l.to_string()));

        let mut app = Self {
            profile,
            state,
            theme: Theme::default(),
            running: true,
            log,
            input_buffer: String::new(),
            command_history: Vec::new(),
            history_index: None,
            hint: String::new(),
            danger_frames: 0,
            glitch_frames: 0,
            save_path,
            rng: StdRng::from_entropy(),
        };
        app.hint = app.objective_hint();
        app
    }

    /// Handle keyboard input. Returns false when the app should exit.
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.running = false;
                        return Ok(false);
                    }
                    KeyCode::Esc => {
                        if self.input_buffer.is_empty() {
                            self.running = false;
                            return Ok(false);
                        }
                        self.input_buffer.clear();
                    }
                    KeyCode::Enter => self.submit_command(),
                    KeyCode::Backspace => {
                        self.input_buffer.pop();
                    }
                    KeyCode::Up => self.history_back(),
                    KeyCode::Down => self.history_forward(),
                    KeyCode::Char(c) => {
                        self.input_buffer.push(c);
                        self.history_index = None;
                    }
                    _ => {}
                }
            }
        }
        Ok(true)
    }

    /// Run the typed command through the interpreter and fold the report
    /// back into the shell: log lines, effects, hint, autosave.
    fn submit_command(&mut self) {
        let raw = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        self.history_index = None;
        if raw.is_empty() {
            return;
        }
        self.command_history.push(raw.clone());

        let state = std::mem::take(&mut self.state);
        let report = interpret(&raw, &mut self.profile, state, &mut self.rng);
        self.state = report.state;

        let mut reset_save = false;
        for effect in &report.effects {
            match effect {
                Effect::ClearLog => self.log.clear(),
                Effect::Glitch => self.glitch_frames = FLASH_FRAMES,
                Effect::DangerFlash => self.danger_frames = FLASH_FRAMES,
                Effect::ResetSave => reset_save = true,
            }
        }

        if report.lines.iter().any(|l| line_is_alarming(l)) {
            self.danger_frames = FLASH_FRAMES;
        }

        self.update_hint(&report.lines, &raw);
        self.log.extend(report.lines);
        while self.log.len() > LOG_LIMIT {
            self.log.remove(0);
        }

        if reset_save {
            persistence::clear_save(&self.save_path);
        } else {
            let snapshot = SaveData::capture(&self.profile, &self.state);
            let _ = persistence::save_to_path(&self.save_path, &snapshot);
        }
    }

    fn history_back(&mut self) {
        if self.command_history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.command_history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.input_buffer = self.command_history[index].clone();
    }

    fn history_forward(&mut self) {
        if self.command_history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => return,
            Some(i) => (i + 1).min(self.command_history.len() - 1),
        };
        self.history_index = Some(index);
        self.input_buffer = self.command_history[index].clone();
    }

    /// Assistant message for the latest report
    fn update_hint(&mut self, lines: &[String], raw: &str) {
        if lines.iter().any(|l| l.starts_with("Unknown command")) {
            self.hint =
                "🤖 Oops! That's not a valid command. Try 'help' or check your spelling."
                    .to_string();
            return;
        }
        if let Some(problem) = lines
            .iter()
            .find(|l| HINTABLE_FRAGMENTS.iter().any(|frag| l.contains(frag)))
        {
            self.hint = format!("🤖 Hint: {}", problem);
            return;
        }
        if raw.to_lowercase().contains("sudo") {
            self.hint = "🤖 Sudo won't help you here, hacker! 😜".to_string();
            return;
        }
        self.hint = self.objective_hint();
    }

    fn objective_hint(&self) -> String {
        match MISSION_STEPS.get(self.state.mission_step) {
            Some(step) => format!("🤖 Next Objective: {}", step.description),
            None => "🤖 All missions complete! You are a Digital Ghost!".to_string(),
        }
    }

    /// Render the whole UI
    pub fn render(&mut self, frame: &mut Frame) {
        let areas = create_main_layout(frame.size());

        self.render_header(frame, areas[0]);
        self.render_log(frame, areas[1]);
        self.render_input(frame, areas[2]);
        self.render_assistant(frame, areas[3]);

        self.danger_frames = self.danger_frames.saturating_sub(1);
        self.glitch_frames = self.glitch_frames.saturating_sub(1);
    }

    fn render_header(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(area);

        let title = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.header).add_modifier(Modifier::BOLD))
            .block(styled_block("", &self.theme));
        frame.render_widget(title, chunks[0]);

        let block = styled_block(self.state.display_name(), &self.theme);
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        frame.render_widget(
            XpBar::new(self.profile.xp, XP_PER_LEVEL, self.profile.level, &self.profile.title)
                .color(self.theme.success),
            inner,
        );
    }

    fn render_log(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let mut block = styled_block("TERMINAL", &self.theme);
        if self.danger_frames > 0 {
            block = block.border_style(Style::default().fg(self.theme.alert));
        }
        let inner = block.inner(area);

        // Show the tail of the log that fits
        let visible = inner.height as usize;
        let skip = self.log.len().saturating_sub(visible);
        let mut style = Style::default().fg(self.theme.fg);
        if self.glitch_frames > 0 {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let lines: Vec<Line> = self.log[skip..]
            .iter()
            .map(|l| Line::styled(l.clone(), style))
            .collect();

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_input(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let prompt = format!("> {}█", self.input_buffer);
        let input = Paragraph::new(prompt)
            .style(Style::default().fg(self.theme.accent))
            .block(styled_block("INPUT", &self.theme));
        frame.render_widget(input, area);
    }

    fn render_assistant(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let assistant = Paragraph::new(self.hint.clone())
            .style(Style::default().fg(self.theme.fg))
            .wrap(Wrap { trim: true })
            .block(styled_block("ASSISTANT", &self.theme));
        frame.render_widget(assistant, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Mirrors the presentation rule: errors and refusals flash the border
fn line_is_alarming(line: &str) -> bool {
    let lower = line.to_lowercase();
    ALARMING_FRAGMENTS.iter().any(|frag| lower.contains(frag))
}
