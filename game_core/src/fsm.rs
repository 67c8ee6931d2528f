//! Game loop state machine
//!
//! `Running` while the ball is in play, `Paused` during the serve delay after a
//! point, `Terminated` once a quit is requested.

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
    Terminated,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Scored,
    ServeReady,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: LoopState,
    pub to_state: LoopState,
    pub action: LoopAction,
}

/// Loop finite state machine
#[derive(Debug, Clone)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Attempt a transition; invalid actions leave the state untouched
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                tracing::debug!(?from_state, to_state = ?next_state, ?action, "loop transition");
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::Running, LoopAction::Scored) => Some(LoopState::Paused),
            (LoopState::Running, LoopAction::Quit) => Some(LoopState::Terminated),

            (LoopState::Paused, LoopAction::ServeReady) => Some(LoopState::Running),
            (LoopState::Paused, LoopAction::Quit) => Some(LoopState::Terminated),

            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.state == LoopState::Terminated
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}
