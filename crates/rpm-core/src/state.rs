//! Generation lifecycle as an explicit state machine.
//!
//! [`GenerationState::next`] is a pure reducer: it consumes the current state
//! and an event and returns the following state. Events that make no sense in
//! the current state leave it unchanged.

use std::fmt;

use log::debug;

use crate::models::{GeneratedDocument, Stage};

/// Where a document generation currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Nothing requested yet, or reset
    #[default]
    Idle,
    /// Waiting for stage A
    RequestingPartA,
    /// Stage A finished; waiting for stage B
    RequestingPartB,
    /// A complete document is available
    Ready(GeneratedDocument),
    /// The last attempt failed; carries the user-facing message
    Failed(String),
}

/// Inputs driving [`GenerationState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    /// The user triggered generation
    Submitted,
    /// A stage's provider call completed
    StageCompleted(Stage),
    /// Both stages completed and the document was assembled
    Succeeded(GeneratedDocument),
    /// Either stage failed
    Failed(String),
    /// Return to idle, discarding any document
    Reset,
}

impl GenerationState {
    /// Applies an event and returns the resulting state.
    ///
    /// ```rust
    /// use rpm_core::state::{GenerationEvent, GenerationState};
    ///
    /// let state = GenerationState::Idle.next(GenerationEvent::Submitted);
    /// assert_eq!(state, GenerationState::RequestingPartA);
    /// // the trigger is disabled while a request is in flight
    /// assert_eq!(state.clone().next(GenerationEvent::Submitted), state);
    /// ```
    pub fn next(self, event: GenerationEvent) -> Self {
        use GenerationEvent as E;
        use GenerationState as S;

        match (self, event) {
            (_, E::Reset) => S::Idle,
            (state, E::Submitted) if state.is_busy() => {
                debug!("Ignoring generation trigger while {state}");
                state
            }
            (_, E::Submitted) => S::RequestingPartA,
            (S::RequestingPartA, E::StageCompleted(Stage::A)) => S::RequestingPartB,
            (state, E::Succeeded(document)) if state.is_busy() => S::Ready(document),
            (state, E::Failed(message)) if state.is_busy() => S::Failed(message),
            (state, event) => {
                debug!("No transition from {state} on {event:?}");
                state
            }
        }
    }

    /// Whether a generation is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::RequestingPartA | Self::RequestingPartB)
    }

    /// The generated document, available only when ready and non-empty.
    ///
    /// Both stages may legitimately return no text; such a document is
    /// neither shown nor exported.
    pub fn document(&self) -> Option<&GeneratedDocument> {
        match self {
            Self::Ready(document) if !document.is_empty() => Some(document),
            _ => None,
        }
    }

    /// Whether export actions are available.
    pub fn can_export(&self) -> bool {
        self.document().is_some()
    }

    /// The failure message of the last attempt, if it failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::RequestingPartA => write!(f, "requesting part A"),
            Self::RequestingPartB => write!(f, "requesting part B"),
            Self::Ready(_) => write!(f, "ready"),
            Self::Failed(_) => write!(f, "failed"),
        }
    }
}
