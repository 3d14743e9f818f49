//! IPC protocol definitions
//!
//! One JSON message per line, adjacently tagged as `{"type": ..., "payload": ...}`.

use serde::{Deserialize, Serialize};

use crate::engine::{ColorEvent, ColorState, EngineError};

/// IPC message types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum IpcMessage {
    // === Client -> Picker ===

    /// Apply an input event
    #[serde(rename = "event")]
    Event(ColorEvent),

    /// Ask for the current state
    #[serde(rename = "query")]
    Query,

    /// Stop the picker
    #[serde(rename = "shutdown")]
    Shutdown,

    // === Picker -> Client ===

    /// Current state
    #[serde(rename = "state_update")]
    StateUpdate { state: ColorState },

    /// Picker ready
    #[serde(rename = "ready")]
    Ready,

    /// Error occurred
    #[serde(rename = "error")]
    Error { code: i32, message: String },
}

impl IpcMessage {
    /// Create a state update message
    pub fn state_update(state: &ColorState) -> Self {
        IpcMessage::StateUpdate {
            state: state.clone(),
        }
    }

    /// Create a ready message
    pub fn ready() -> Self {
        IpcMessage::Ready
    }

    /// Create an error message
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        IpcMessage::Error {
            code,
            message: message.into(),
        }
    }

    /// Create an error message from an engine rejection
    pub fn engine_error(err: &EngineError) -> Self {
        let code = match err {
            EngineError::UnknownPreset(_) => error_codes::UNKNOWN_PRESET,
            EngineError::UnknownGradient(_) => error_codes::UNKNOWN_GRADIENT,
            EngineError::MalformedPreset { .. } => error_codes::MALFORMED_PRESET,
        };
        Self::error(code, err.to_string())
    }

    /// Serialize to JSON string (line-delimited)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Error codes
pub mod error_codes {
    pub const INVALID_MESSAGE: i32 = 1;
    pub const UNKNOWN_PRESET: i32 = 2;
    pub const UNKNOWN_GRADIENT: i32 = 3;
    pub const MALFORMED_PRESET: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Channel;

    #[test]
    fn test_message_serialization() {
        let msg = IpcMessage::ready();
        let json = msg.to_json().unwrap();
        assert!(json.contains("ready"));

        let parsed = IpcMessage::from_json(&json).unwrap();
        assert!(matches!(parsed, IpcMessage::Ready));
    }

    #[test]
    fn test_event_message() {
        let line = r#"{"type": "event", "payload": {
            "kind": "slider_change", "channel": "green", "value": 200
        }}"#;
        let parsed = IpcMessage::from_json(line).unwrap();
        assert!(matches!(
            parsed,
            IpcMessage::Event(ColorEvent::SliderChange { channel: Channel::Green, value: 200 })
        ));

        let parsed =
            IpcMessage::from_json(r#"{"type": "event", "payload": {"kind": "randomize"}}"#)
                .unwrap();
        assert!(matches!(parsed, IpcMessage::Event(ColorEvent::Randomize)));
    }

    #[test]
    fn test_state_update_carries_state() {
        let json = IpcMessage::state_update(&ColorState::new()).to_json().unwrap();
        assert!(json.contains("state_update"));
        assert!(json.contains("#328bf6"));
    }

    #[test]
    fn test_engine_error_codes() {
        let msg = IpcMessage::engine_error(&EngineError::UnknownGradient(9));
        match msg {
            IpcMessage::Error { code, message } => {
                assert_eq!(code, error_codes::UNKNOWN_GRADIENT);
                assert!(message.contains('9'));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
