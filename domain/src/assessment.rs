//! The answering flow state machine
//!
//! `intro → question(i) → result`, driven by discrete user actions. Every
//! action runs to completion before the next is accepted, and the single
//! [`ResponseSet`] is owned here — there is no shared mutable state.
//!
//! Malformed navigation (advancing without a selection, `previous` at the
//! first item, events in the wrong state) is silently ignored: these are
//! expected UI-guard conditions, not errors, and there is no terminal
//! failure state.

use crate::inventory::catalog::Catalog;
use crate::inventory::item::Item;
use crate::rating::Rating;
use crate::response::ResponseSet;

/// Where the answering flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    /// Zero-based index into the catalog's item order
    Question(usize),
    Result,
}

/// One run through the questionnaire.
///
/// Owns the catalog and the response set. `result` is only reachable
/// after every item index passed the selection guard in [`next`], so a
/// complete response set is a structural invariant of reaching it — the
/// scoring engine's completeness check never fires through this flow.
///
/// [`next`]: Assessment::next
#[derive(Debug, Clone)]
pub struct Assessment {
    catalog: Catalog,
    responses: ResponseSet,
    screen: Screen,
}

impl Assessment {
    pub fn new(catalog: Catalog) -> Assessment {
        Assessment {
            catalog,
            responses: ResponseSet::new(),
            screen: Screen::Intro,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn total_items(&self) -> usize {
        self.catalog.len()
    }

    /// The item being asked, when on a question screen
    pub fn current_item(&self) -> Option<&Item> {
        match self.screen {
            Screen::Question(index) => self.catalog.items().get(index),
            _ => None,
        }
    }

    /// The recorded rating for the item being asked, if any.
    ///
    /// Revisiting a prior question pre-selects its earlier answer.
    pub fn selected_rating(&self) -> Option<Rating> {
        self.current_item()
            .and_then(|item| self.responses.rating(item.number))
    }

    /// Count of answered items, for progress display
    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    /// `intro --start--> question(0)`.
    ///
    /// An empty catalog has nothing to ask and goes straight to `result`.
    pub fn start(&mut self) {
        if self.screen != Screen::Intro {
            return;
        }
        self.screen = if self.catalog.is_empty() {
            Screen::Result
        } else {
            Screen::Question(0)
        };
    }

    /// Record (or overwrite) the rating for the item being asked.
    ///
    /// Does not advance; no-op outside a question screen.
    pub fn select(&mut self, rating: Rating) {
        if let Screen::Question(index) = self.screen {
            if let Some(item) = self.catalog.items().get(index) {
                self.responses.record(item.number, rating);
            }
        }
    }

    /// Advance to the next question, or to `result` after the last one.
    ///
    /// Guarded: no-op until the current item has a recorded rating.
    pub fn next(&mut self) {
        let Screen::Question(index) = self.screen else {
            return;
        };
        let Some(item) = self.catalog.items().get(index) else {
            return;
        };
        if self.responses.rating(item.number).is_none() {
            return;
        }
        self.screen = if index + 1 == self.catalog.len() {
            Screen::Result
        } else {
            Screen::Question(index + 1)
        };
    }

    /// Go back one question; no-op at the first
    pub fn previous(&mut self) {
        if let Screen::Question(index) = self.screen {
            if index > 0 {
                self.screen = Screen::Question(index - 1);
            }
        }
    }

    /// `result --restart--> intro`, discarding all responses
    pub fn restart(&mut self) {
        if self.screen == Screen::Result {
            self.responses.clear();
            self.screen = Screen::Intro;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::item::RawItem;

    fn rating(value: u8) -> Rating {
        Rating::try_new(value).unwrap()
    }

    fn assessment(total: u8) -> Assessment {
        let raw = (1..=total)
            .map(|number| RawItem {
                number,
                text: format!("Statement {number}."),
                domain: "Extraversion".to_string(),
                facet: "Sociability".to_string(),
                reverse: false,
            })
            .collect();
        Assessment::new(Catalog::from_raw(raw).unwrap())
    }

    #[test]
    fn test_only_start_leaves_intro() {
        let mut flow = assessment(3);
        flow.select(rating(5));
        flow.next();
        flow.previous();
        flow.restart();
        assert_eq!(flow.screen(), Screen::Intro);
        assert!(flow.responses().is_empty());

        flow.start();
        assert_eq!(flow.screen(), Screen::Question(0));
    }

    #[test]
    fn test_next_requires_selection() {
        let mut flow = assessment(3);
        flow.start();
        flow.next();
        assert_eq!(flow.screen(), Screen::Question(0));

        flow.select(rating(3));
        flow.next();
        assert_eq!(flow.screen(), Screen::Question(1));
    }

    #[test]
    fn test_select_overwrites_without_advancing() {
        let mut flow = assessment(2);
        flow.start();
        flow.select(rating(1));
        flow.select(rating(4));
        assert_eq!(flow.screen(), Screen::Question(0));
        assert_eq!(flow.selected_rating(), Some(rating(4)));
    }

    #[test]
    fn test_previous_is_noop_at_first_question() {
        let mut flow = assessment(2);
        flow.start();
        flow.previous();
        assert_eq!(flow.screen(), Screen::Question(0));
    }

    #[test]
    fn test_round_trip_preserves_answers() {
        let mut flow = assessment(3);
        flow.start();
        flow.select(rating(4));
        flow.next();
        flow.select(rating(2));

        // Navigate back and forth; both answers survive and pre-select
        flow.previous();
        assert_eq!(flow.selected_rating(), Some(rating(4)));
        flow.next();
        assert_eq!(flow.screen(), Screen::Question(1));
        assert_eq!(flow.selected_rating(), Some(rating(2)));
    }

    #[test]
    fn test_last_next_reaches_result_with_complete_responses() {
        let mut flow = assessment(2);
        flow.start();
        flow.select(rating(3));
        flow.next();
        flow.select(rating(5));
        flow.next();
        assert_eq!(flow.screen(), Screen::Result);
        assert!(flow.responses().is_complete_for(flow.catalog()));
    }

    #[test]
    fn test_restart_discards_responses() {
        let mut flow = assessment(1);
        flow.start();
        flow.select(rating(2));
        flow.next();
        assert_eq!(flow.screen(), Screen::Result);

        flow.restart();
        assert_eq!(flow.screen(), Screen::Intro);
        assert!(flow.responses().is_empty());
    }

    #[test]
    fn test_empty_catalog_starts_at_result() {
        let mut flow = Assessment::new(Catalog::from_raw(vec![]).unwrap());
        flow.start();
        assert_eq!(flow.screen(), Screen::Result);
    }
}
