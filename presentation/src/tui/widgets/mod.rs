//! Screen widgets

mod help;
mod intro;
mod question;
mod results;

pub use help::HelpWidget;
pub use intro::IntroWidget;
pub use question::QuestionWidget;
pub use results::ResultsWidget;
