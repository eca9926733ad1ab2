//! Skill progress bar.
//!
//! Turns a CSS-style percentage width ("85%") into a row of filled and
//! empty cells, either as spans for a flowing line or drawn into a buffer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Widget,
};

pub struct ProgressBar {
    percent: u16,
    bar_fill: Color,
    bar_background: Color,
    text_color: Option<Color>,
}

impl ProgressBar {
    pub fn new(percent: u16) -> Self {
        Self {
            percent: percent.min(100),
            bar_fill: Color::Rgb(0, 255, 0), // Green by default
            bar_background: Color::DarkGray,
            text_color: Some(Color::White),
        }
    }

    /// Build from a width string such as "85%"; None if it doesn't parse
    pub fn from_width(width: &str) -> Option<Self> {
        parse_percent(width).map(Self::new)
    }

    pub fn set_colors(mut self, bar_fill: Color, bar_background: Color) -> Self {
        self.bar_fill = bar_fill;
        self.bar_background = bar_background;
        self
    }

    pub fn set_text_color(mut self, color: Option<Color>) -> Self {
        self.text_color = color;
        self
    }

    /// Number of filled cells out of `cells`
    pub fn filled_cells(&self, cells: u16) -> u16 {
        ((cells as u32 * self.percent as u32 + 50) / 100) as u16
    }

    fn label(&self) -> String {
        format!(" {:>3}%", self.percent)
    }

    /// Bar spans sized to `width` cells including the value label
    pub fn spans(&self, width: u16) -> Vec<Span<'static>> {
        let label = self.label();
        let cells = width.saturating_sub(label.len() as u16);
        let filled = self.filled_cells(cells);

        let mut spans = vec![
            Span::styled(" ".repeat(filled as usize), Style::default().bg(self.bar_fill)),
            Span::styled(
                " ".repeat((cells - filled) as usize),
                Style::default().bg(self.bar_background),
            ),
        ];
        let style = match self.text_color {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        };
        spans.push(Span::styled(label, style));
        spans
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut x = area.x;
        for span in self.spans(area.width) {
            for ch in span.content.chars() {
                if x >= area.x + area.width {
                    return;
                }
                buf[(x, area.y)].set_char(ch).set_style(span.style);
                x += 1;
            }
        }
    }
}

/// "85%" -> 85, clamped to 100
pub fn parse_percent(width: &str) -> Option<u16> {
    let value: u16 = width.trim().strip_suffix('%')?.trim().parse().ok()?;
    Some(value.min(100))
}
