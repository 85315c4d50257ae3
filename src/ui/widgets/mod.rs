//! TUI widgets.

mod footer;
mod header;
mod help;
mod match_card;
mod nav;
mod states;
mod ticker;

pub use footer::Footer;
pub use header::Header;
pub use help::HelpPanel;
pub use match_card::MatchCard;
pub use nav::NavBar;
pub use states::StatePanel;
pub use ticker::Ticker;
