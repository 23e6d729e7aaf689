//! Edit-cycle state machine
//!
//! Tracks whether a token is open under the cursor between keystrokes. The
//! presentation layer drives it indirectly through the engine's editing
//! operations; the machine itself is a plain transition function:
//! - Simple and predictable
//! - Total (every state/event pair has a successor)
//! - Independent of how the popup is drawn

/// States of one edit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    /// No token under the cursor
    #[default]
    Idle,
    /// A non-empty token is under the cursor
    TokenOpen,
    /// Candidates have been requested for the open token
    Filtering,
    /// A completion was just written into the buffer
    CompletionApplied,
}

/// Inputs to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// Buffer or cursor changed
    Edit {
        /// The current token is empty after the edit
        token_empty: bool,
        /// The current token differs from the one before the edit
        prefix_changed: bool,
    },
    /// Candidates were requested
    Filter,
    /// A candidate was accepted
    Accept,
    /// External cancel (escape, focus loss)
    Cancel,
}

/// What the presentation layer should do with its suggestion popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupDirective {
    /// Refresh the popup and make it visible
    Show,
    /// Hide the popup
    Hide,
    /// Leave the popup as it is
    Keep,
}

impl EditState {
    /// Perform state transition based on current state and event
    pub fn next(self, event: EditEvent) -> Self {
        use EditState::*;

        match (self, event) {
            (_, EditEvent::Cancel) => Idle,

            (_, EditEvent::Edit { token_empty: true, .. }) => Idle,
            (
                Filtering,
                EditEvent::Edit {
                    prefix_changed: false,
                    ..
                },
            ) => Filtering,
            (_, EditEvent::Edit { .. }) => TokenOpen,

            (TokenOpen | Filtering, EditEvent::Filter) => Filtering,
            (TokenOpen | Filtering, EditEvent::Accept) => CompletionApplied,

            // Filtering or accepting without an open token changes nothing
            (state, EditEvent::Filter | EditEvent::Accept) => state,
        }
    }

    /// Run the machine over a sequence of events starting from `Idle`
    pub fn run(events: &[EditEvent]) -> Self {
        events
            .iter()
            .fold(EditState::Idle, |state, event| state.next(*event))
    }

    /// Whether a completion may be accepted in this state
    pub fn can_accept(self) -> bool {
        matches!(self, EditState::TokenOpen | EditState::Filtering)
    }
}
