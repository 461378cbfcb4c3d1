//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Centered key-binding overlay, toggled with `?`
pub struct HelpWidget;

impl HelpWidget {
    fn centered(area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(14),
                Constraint::Fill(1),
            ])
            .split(area);
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(44),
                Constraint::Fill(1),
            ])
            .split(vertical[1])[1]
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Self::centered(area);
        Clear.render(area, buf);

        let binding = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
                Span::raw(what),
            ])
        };
        let lines = vec![
            Line::from(""),
            binding("Enter / s", "start (intro screen)"),
            binding("1-5", "select a rating"),
            binding("Enter / →", "next question (needs a rating)"),
            binding("← / h", "previous question"),
            binding("r", "restart (result screen)"),
            binding("?", "toggle this help"),
            binding("q / Esc", "quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Answers are kept when you navigate back.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::White)),
            )
            .render(area, buf);
    }
}
