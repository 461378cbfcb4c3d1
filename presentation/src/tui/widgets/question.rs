//! Question screen widget

use bigfive_domain::{Item, Rating};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

/// Likert anchor labels for the 1–5 scale, indexed by `rating - 1`
const SCALE_LABELS: [&str; 5] = [
    "Disagree strongly",
    "Disagree a little",
    "Neutral; no opinion",
    "Agree a little",
    "Agree strongly",
];

/// Widget for one question screen
pub struct QuestionWidget<'a> {
    item: &'a Item,
    index: usize,
    total: usize,
    answered: usize,
    selected: Option<Rating>,
}

impl<'a> QuestionWidget<'a> {
    pub fn new(
        item: &'a Item,
        index: usize,
        total: usize,
        answered: usize,
        selected: Option<Rating>,
    ) -> Self {
        Self {
            item,
            index,
            total,
            answered,
            selected,
        }
    }

    fn option_line(&self, value: u8) -> Line<'static> {
        let selected = self.selected.map(|r| r.value()) == Some(value);
        let marker = if selected { "●" } else { "○" };
        let style = if selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(Span::styled(
            format!(
                "  {marker} {value}  {}",
                SCALE_LABELS[usize::from(value - 1)]
            ),
            style,
        ))
    }
}

impl Widget for QuestionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // progress
                Constraint::Min(5),    // statement
                Constraint::Length(7), // options
                Constraint::Length(1), // hints
            ])
            .split(area);

        let ratio = if self.total == 0 {
            0.0
        } else {
            self.answered as f64 / self.total as f64
        };
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Progress "))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(format!("{}/{} answered", self.answered, self.total))
            .render(chunks[0], buf);

        let statement = vec![
            Line::from(""),
            Line::from(Span::styled(
                "I am someone who...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.item.text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(statement)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(format!(
                " Question {} of {} ",
                self.index + 1,
                self.total
            )))
            .render(chunks[1], buf);

        let options: Vec<Line> = (1..=5).map(|value| self.option_line(value)).collect();
        Paragraph::new(options)
            .block(Block::default().borders(Borders::ALL).title(" Your answer "))
            .render(chunks[2], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("1-5", Style::default().fg(Color::Yellow)),
            Span::raw(" select  "),
            Span::styled("Enter/→", Style::default().fg(Color::Yellow)),
            Span::raw(" next  "),
            Span::styled("←", Style::default().fg(Color::Yellow)),
            Span::raw(" back  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}
