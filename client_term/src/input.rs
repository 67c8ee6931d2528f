//! Keyboard input handling

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{ControlSignals, Direction, InputSource, IntentQueue, MoveIntent, Side};

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Side, Direction),
    ResetScore,
    Quit,
}

/// Map a key to its action; unbound keys are ignored
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(KeyAction::Move(Side::Left, Direction::Up)),
        KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyAction::Move(Side::Left, Direction::Down))
        }
        KeyCode::Up => Some(KeyAction::Move(Side::Right, Direction::Up)),
        KeyCode::Down => Some(KeyAction::Move(Side::Right, Direction::Down)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::ResetScore),
        KeyCode::Esc | KeyCode::Char('q') => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Non-blocking source of terminal events
pub trait EventSource {
    /// Next pending event, or `None` when nothing is waiting
    fn next_event(&mut self) -> io::Result<Option<Event>>;
}

/// Events read from the real terminal through crossterm
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Collects terminal key presses into the game's intent queue
#[derive(Debug, Default)]
pub struct TerminalInput<S = CrosstermEvents> {
    events: S,
    queue: IntentQueue,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EventSource> TerminalInput<S> {
    pub fn with_source(events: S) -> Self {
        Self {
            events,
            queue: IntentQueue::new(),
        }
    }

    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(side, direction) => self.queue.push_intent(side, direction),
            KeyAction::ResetScore => self.queue.request_reset(),
            KeyAction::Quit => self.queue.request_quit(),
        }
    }

    /// Move every pending event into the queue; a read failure becomes a quit
    fn pump(&mut self) {
        if let Err(err) = self.drain_events() {
            tracing::warn!(%err, "terminal input failed, quitting");
            self.queue.request_quit();
        }
    }

    fn drain_events(&mut self) -> io::Result<()> {
        while let Some(event) = self.events.next_event()? {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event
            {
                if let Some(action) = map_key(code, modifiers) {
                    self.apply(action);
                }
            }
        }
        Ok(())
    }
}

impl<S: EventSource> InputSource for TerminalInput<S> {
    fn poll_intents(&mut self) -> Vec<MoveIntent> {
        self.pump();
        self.queue.poll_intents()
    }

    fn poll_control(&mut self) -> ControlSignals {
        self.pump();
        self.queue.poll_control()
    }
}
