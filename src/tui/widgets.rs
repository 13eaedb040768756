//! Custom widgets for the terminal UI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// XP progress bar with level and title readout
pub struct XpBar {
    xp: u32,
    max: u32,
    level: u32,
    title: String,
    color: Color,
}

impl XpBar {
    pub fn new(xp: u32, max: u32, level: u32, title: &str) -> Self {
        Self {
            xp,
            max,
            level,
            title: title.to_string(),
            color: Color::Green,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for XpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 1 {
            return;
        }

        let label = format!("Lvl {} - {} [{}/{} XP] ", self.level, self.title, self.xp, self.max);
        buf.set_string(area.x, area.y, &label, Style::default().fg(self.color));

        // Remaining width becomes the bar
        let bar_x = area.x + label.chars().count() as u16;
        if bar_x + 2 >= area.x + area.width {
            return;
        }
        let bar_width = area.width - label.chars().count() as u16 - 2;
        let filled = (self.xp.min(self.max) as u16 * bar_width) / self.max.max(1) as u16;

        buf.set_string(bar_x, area.y, "[", Style::default());
        buf.set_string(bar_x + 1 + bar_width, area.y, "]", Style::default());
        for x in 0..filled {
            buf.set_string(bar_x + 1 + x, area.y, "█", Style::default().fg(self.color));
        }
        for x in filled..bar_width {
            buf.set_string(bar_x + 1 + x, area.y, "░", Style::default().fg(Color::DarkGray));
        }
    }
}
