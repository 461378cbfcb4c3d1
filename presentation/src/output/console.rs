//! Console formatter for score summaries

use bigfive_domain::{Domain, ScoreSummary};
use colored::Colorize;

const METER_WIDTH: usize = 20;

/// Formats score summaries for console display.
///
/// Averages are displayed with 2 decimal places; the underlying values
/// stay unrounded.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full format: every domain with its facets indented beneath it
    pub fn format(summary: &ScoreSummary) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("BFI-2 Scores"));

        for entry in summary.domains() {
            output.push_str(&format!(
                "\n{:<24} {}  {}\n",
                entry.domain.label().cyan().bold(),
                format!("{:.2}", entry.average).bold(),
                Self::meter(entry.average)
            ));
            for facet in summary.facets_of(entry.domain) {
                output.push_str(&format!(
                    "  {:<22} {:.2}  {}\n",
                    facet.facet.label(),
                    facet.average,
                    Self::meter(facet.average).dimmed()
                ));
            }
        }

        output
    }

    /// Domain averages only
    pub fn format_domains_only(summary: &ScoreSummary) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("BFI-2 Scores"));

        for entry in summary.domains() {
            output.push_str(&format!(
                "\n{:<24} {}  {}",
                entry.domain.label().cyan().bold(),
                format!("{:.2}", entry.average).bold(),
                Self::meter(entry.average)
            ));
        }
        output.push('\n');

        output
    }

    /// JSON output for machine consumption
    pub fn format_json(summary: &ScoreSummary) -> String {
        serde_json::to_string_pretty(summary)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n",
            format!("=== {title} ===").cyan().bold(),
            "(averages on the 1-5 scale)".dimmed()
        )
    }

    /// Visual meter scaled to the 1-5 range (0 for empty categories)
    fn meter(average: f64) -> String {
        let filled = ((average / f64::from(bigfive_domain::Rating::MAX))
            * METER_WIDTH as f64)
            .round() as usize;
        let filled = filled.min(METER_WIDTH);
        format!("{}{}", "█".repeat(filled), "░".repeat(METER_WIDTH - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigfive_domain::{score, Catalog, Rating, RawItem, ResponseSet};

    fn summary() -> ScoreSummary {
        let raw = |number: u8, reverse: bool| RawItem {
            number,
            text: format!("Statement {number}."),
            domain: "Extraversion".to_string(),
            facet: "Sociability".to_string(),
            reverse,
        };
        let catalog = Catalog::from_raw(vec![raw(1, false), raw(2, true)]).unwrap();
        let mut responses = ResponseSet::new();
        responses.record(1, Rating::try_new(4).unwrap());
        responses.record(2, Rating::try_new(2).unwrap());
        score(&catalog, &responses).unwrap()
    }

    #[test]
    fn test_format_shows_two_decimals() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&summary());
        assert!(output.contains("Extraversion"));
        assert!(output.contains("4.00"));
        assert!(output.contains("Sociability"));
    }

    #[test]
    fn test_domains_only_omits_facets() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_domains_only(&summary());
        assert!(output.contains("Extraversion"));
        assert!(!output.contains("Sociability"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let output = ConsoleFormatter::format_json(&summary());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["domains"][0]["domain"], "Extraversion");
        assert_eq!(value["domains"][0]["average"], 4.0);
    }

    #[test]
    fn test_meter_bounds() {
        assert_eq!(ConsoleFormatter::meter(0.0), "░".repeat(METER_WIDTH));
        assert_eq!(ConsoleFormatter::meter(5.0), "█".repeat(METER_WIDTH));
    }
}
