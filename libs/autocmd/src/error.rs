//! Error types for event name parsing.

use thiserror::Error;

/// Errors that can occur when parsing event names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event name is empty.
    #[error("event name cannot be empty")]
    Empty,

    /// The input is not a single event token.
    #[error("invalid event name '{name}': event names are single tokens")]
    InvalidName { name: String },

    /// Neovim does not know an event by this name.
    #[error("unknown event '{name}'{}", did_you_mean(.suggestion))]
    UnknownEvent {
        name: String,
        suggestion: Option<&'static str>,
    },

    /// The event group name is not recognized.
    #[error("unknown event group: {0}")]
    UnknownGroup(String),
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::new(),
    }
}

impl EventError {
    /// Returns true if the name was well-formed but not a known event.
    pub fn is_unknown(&self) -> bool {
        matches!(self, EventError::UnknownEvent { .. })
    }

    /// Returns the closest known event name, if one was found.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            EventError::UnknownEvent { suggestion, .. } => *suggestion,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event_message_with_suggestion() {
        let err = EventError::UnknownEvent {
            name: "WinLeavet".to_string(),
            suggestion: Some("WinLeave"),
        };
        assert_eq!(
            err.to_string(),
            "unknown event 'WinLeavet' (did you mean 'WinLeave'?)"
        );
        assert!(err.is_unknown());
        assert_eq!(err.suggestion(), Some("WinLeave"));
    }

    #[test]
    fn test_unknown_event_message_without_suggestion() {
        let err = EventError::UnknownEvent {
            name: "Nope".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "unknown event 'Nope'");
    }

    #[test]
    fn test_empty_is_not_unknown() {
        assert!(!EventError::Empty.is_unknown());
        assert_eq!(EventError::Empty.suggestion(), None);
    }
}
