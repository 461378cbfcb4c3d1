//! Intro screen widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget for the intro screen
pub struct IntroWidget {
    total_items: usize,
}

impl IntroWidget {
    pub fn new(total_items: usize) -> Self {
        Self { total_items }
    }
}

impl Widget for IntroWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "BFI-2 Personality Inventory",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "{} statements follow, each completing the prompt:",
                self.total_items
            )),
            Line::from(Span::styled(
                "\"I am someone who...\"",
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from("Rate each from 1 (disagree strongly) to 5 (agree strongly)."),
            Line::from("Your answers stay in memory and are discarded on exit."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(" start    "),
                Span::styled("?", Style::default().fg(Color::Yellow)),
                Span::raw(" help    "),
                Span::styled("q", Style::default().fg(Color::Yellow)),
                Span::raw(" quit"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" bigfive ")
                    .style(Style::default().fg(Color::White)),
            )
            .render(area, buf);
    }
}
