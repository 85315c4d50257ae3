//! Background work that feeds the store.
//!
//! Each controller owns its timers and tasks and tears them down when it is
//! dropped. None of them touch the store; they dispatch actions instead.

mod feed;
mod odds;
mod visibility;

pub use feed::MatchFeedController;
pub use odds::OddsResolver;
#[cfg(test)]
pub use visibility::MockWindowHost;
pub use visibility::{TerminalWindow, VisibilityGuard, WindowHost, settle_then_hide};
