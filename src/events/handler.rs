//! Event handler for processing terminal events.

use super::KeyBinding;
use crate::config::KeyBindings;
use crate::error::{Error, Result};
use crate::state::Action;
use crate::sync::TerminalWindow;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Parsed key bindings.
#[derive(Debug, Clone)]
struct Bindings {
    quit: KeyBinding,
    help: KeyBinding,
    refresh: KeyBinding,
    theme: KeyBinding,
    previous: KeyBinding,
    next: KeyBinding,
}

impl TryFrom<&KeyBindings> for Bindings {
    type Error = Error;

    fn try_from(keys: &KeyBindings) -> Result<Self> {
        Ok(Self {
            quit: keys.quit.parse()?,
            help: keys.help.parse()?,
            refresh: keys.refresh.parse()?,
            theme: keys.theme.parse()?,
            previous: keys.previous.parse()?,
            next: keys.next.parse()?,
        })
    }
}

/// Turns terminal input into actions.
///
/// Focus events are mirrored into the [`TerminalWindow`] before being
/// forwarded, so the visibility guard reads the same focus state the
/// terminal reported.
pub struct EventHandler {
    events: EventStream,
    bindings: Bindings,
    window: TerminalWindow,
    tick: tokio::time::Interval,
    hidden: bool,
}

impl EventHandler {
    pub fn new(keys: &KeyBindings, window: TerminalWindow, tick_rate: Duration) -> Result<Self> {
        let mut tick = tokio::time::interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(Self {
            events: EventStream::new(),
            bindings: Bindings::try_from(keys)?,
            window,
            tick,
            hidden: false,
        })
    }

    /// Tell the handler whether the widget is collapsed.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Wait for the next input or redraw tick.
    ///
    /// Returns `Ok(None)` for events that only need a redraw.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        tokio::select! {
            _ = self.tick.tick() => Ok(None),
            event = self.events.next() => match event {
                Some(Ok(event)) => Ok(self.translate(event)),
                Some(Err(e)) => Err(e.into()),
                None => Err(Error::terminal("input stream closed")),
            },
        }
    }

    fn translate(&self, event: CrosstermEvent) -> Option<Action> {
        match event {
            CrosstermEvent::Key(key) => self.handle_key(key),
            CrosstermEvent::FocusLost => {
                self.window.set_focused(false);
                Some(Action::FocusLost)
            }
            CrosstermEvent::FocusGained => {
                self.window.set_focused(true);
                Some(Action::FocusGained)
            }
            _ => None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let b = &self.bindings;
        if b.quit.matches(&key) {
            return Some(Action::Quit);
        }
        if self.hidden {
            return Some(Action::Show);
        }
        if b.help.matches(&key) {
            return Some(Action::ToggleHelp);
        }
        if b.refresh.matches(&key) {
            return Some(Action::RefreshMatches);
        }
        if b.theme.matches(&key) {
            return Some(Action::ToggleTheme);
        }
        if b.previous.matches(&key) || key.code == KeyCode::Left {
            return Some(Action::PreviousMatch);
        }
        if b.next.matches(&key) || key.code == KeyCode::Right {
            return Some(Action::NextMatch);
        }
        if key.code == KeyCode::Esc {
            return Some(Action::Hide);
        }

        None
    }
}
