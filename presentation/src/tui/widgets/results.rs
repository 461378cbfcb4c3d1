//! Result screen widget

use bigfive_domain::ScoreSummary;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const METER_WIDTH: usize = 16;

/// Widget for the result screen: domain and facet averages in
/// catalog-definition order
pub struct ResultsWidget<'a> {
    summary: &'a ScoreSummary,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(summary: &'a ScoreSummary) -> Self {
        Self { summary }
    }

    fn meter(average: f64) -> String {
        let filled = ((average / 5.0) * METER_WIDTH as f64).round() as usize;
        let filled = filled.min(METER_WIDTH);
        format!("{}{}", "█".repeat(filled), "░".repeat(METER_WIDTH - filled))
    }
}

impl Widget for ResultsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from("")];

        for entry in self.summary.domains() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<24}", entry.domain.label()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:.2}  ", entry.average),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(Self::meter(entry.average), Style::default().fg(Color::Cyan)),
            ]));
            for facet in self.summary.facets_of(entry.domain) {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {:<22}", facet.facet.label())),
                    Span::raw(format!("{:.2}  ", facet.average)),
                    Span::styled(
                        Self::meter(facet.average),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::raw(" restart    "),
            Span::styled("Enter/q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Your scores (1-5 scale) "),
            )
            .render(area, buf);
    }
}
