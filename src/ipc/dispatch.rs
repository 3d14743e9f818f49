//! Applies inbound messages to the engine

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::engine::ColorEngine;

use super::protocol::{error_codes, IpcMessage};

/// Outcome of handling one inbound message
#[derive(Debug)]
pub enum Dispatch {
    /// Send this back to the client
    Reply(IpcMessage),
    /// Client asked to stop
    Shutdown,
}

/// Handle one inbound message
pub fn dispatch(engine: &mut ColorEngine, msg: IpcMessage) -> Dispatch {
    match msg {
        IpcMessage::Event(event) => match engine.apply(event) {
            Ok(state) => Dispatch::Reply(IpcMessage::state_update(state)),
            Err(e) => Dispatch::Reply(IpcMessage::engine_error(&e)),
        },
        IpcMessage::Query => Dispatch::Reply(IpcMessage::state_update(engine.state())),
        IpcMessage::Shutdown => Dispatch::Shutdown,
        other => {
            warn!("Ignoring outbound-only message {:?}", other);
            Dispatch::Reply(IpcMessage::error(
                error_codes::INVALID_MESSAGE,
                "only event, query and shutdown are accepted",
            ))
        }
    }
}

fn write_message<W: Write>(writer: &mut W, msg: &IpcMessage) -> Result<()> {
    writeln!(writer, "{}", msg.to_json()?).context("failed to write reply")?;
    writer.flush()?;
    Ok(())
}

/// Drive the engine from a line stream without a window
///
/// Runs until EOF or `shutdown`.
pub fn run_headless<R: BufRead, W: Write>(
    engine: &mut ColorEngine,
    reader: R,
    mut writer: W,
) -> Result<()> {
    info!("Running headless");
    write_message(&mut writer, &IpcMessage::ready())?;

    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!("Received: {}", line);

        let reply = match IpcMessage::from_json(line) {
            Ok(msg) => match dispatch(engine, msg) {
                Dispatch::Reply(reply) => reply,
                Dispatch::Shutdown => {
                    info!("Received shutdown command");
                    break;
                }
            },
            Err(e) => {
                warn!("Failed to parse message: {}", e);
                IpcMessage::error(error_codes::INVALID_MESSAGE, format!("Parse error: {}", e))
            }
        };

        write_message(&mut writer, &reply)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Catalog;
    use crate::engine::{ColorEvent, ColorState, GRADIENT_BACKGROUND};
    use std::io::Cursor;

    fn engine() -> ColorEngine {
        ColorEngine::with_seed(Catalog::default(), 5)
    }

    fn replies(output: &[u8]) -> Vec<IpcMessage> {
        String::from_utf8(output.to_vec())
            .unwrap()
            .lines()
            .map(|line| IpcMessage::from_json(line).unwrap())
            .collect()
    }

    #[test]
    fn test_dispatch_event_returns_state() {
        let mut engine = engine();
        match dispatch(&mut engine, IpcMessage::Event(ColorEvent::ApplyGradient { index: 0 })) {
            Dispatch::Reply(IpcMessage::StateUpdate { state }) => {
                assert!(state.is_gradient);
                assert_eq!(state.background_color, GRADIENT_BACKGROUND);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_rejects_outbound_messages() {
        let mut engine = engine();
        assert!(matches!(
            dispatch(&mut engine, IpcMessage::Ready),
            Dispatch::Reply(IpcMessage::Error { code: error_codes::INVALID_MESSAGE, .. })
        ));
        assert!(matches!(dispatch(&mut engine, IpcMessage::Shutdown), Dispatch::Shutdown));
    }

    #[test]
    fn test_headless_session() {
        let input = [
            r#"{"type": "query"}"#,
            r#"{"type": "event", "payload": {"kind": "apply_preset", "index": 5}}"#,
            r#"{"type": "event", "payload": {"kind": "apply_preset", "index": 42}}"#,
            "garbage",
            r#"{"type": "event", "payload": {"kind": "reset"}}"#,
            r#"{"type": "shutdown"}"#,
            r#"{"type": "query"}"#,
        ]
        .join("\n");

        let mut engine = engine();
        let mut output = Vec::new();
        run_headless(&mut engine, Cursor::new(input), &mut output).unwrap();

        let replies = replies(&output);
        assert_eq!(replies.len(), 6);
        assert!(matches!(replies[0], IpcMessage::Ready));
        match &replies[1] {
            IpcMessage::StateUpdate { state } => assert_eq!(state, &ColorState::new()),
            other => panic!("unexpected {:?}", other),
        }
        match &replies[2] {
            IpcMessage::StateUpdate { state } => {
                assert_eq!(state.background_color, "#F59E0B");
                assert_eq!(state.text_color, "#000000");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            replies[3],
            IpcMessage::Error { code: error_codes::UNKNOWN_PRESET, .. }
        ));
        assert!(matches!(
            replies[4],
            IpcMessage::Error { code: error_codes::INVALID_MESSAGE, .. }
        ));
        match &replies[5] {
            IpcMessage::StateUpdate { state } => assert_eq!(state.rgb(), (59, 130, 246)),
            other => panic!("unexpected {:?}", other),
        }
    }
}
