//! IPC Server module
//!
//! Reads messages from stdin and writes replies to stdout on background threads.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::{debug, error, info, warn};

use super::protocol::{error_codes, IpcMessage};

/// Forward parsed lines to the app until EOF or `shutdown`
///
/// Lines that fail to parse are answered with an error on `replies`.
pub fn read_messages<R: BufRead>(
    reader: R,
    to_app: &Sender<IpcMessage>,
    replies: &Sender<IpcMessage>,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("failed to read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!("Received: {}", line);

        match IpcMessage::from_json(line) {
            Ok(msg) => {
                let shutdown = matches!(msg, IpcMessage::Shutdown);
                if to_app.send(msg).is_err() {
                    warn!("App channel closed");
                    break;
                }
                if shutdown {
                    info!("Received shutdown command");
                    break;
                }
            }
            Err(e) => {
                warn!("Failed to parse message: {}", e);
                let reply =
                    IpcMessage::error(error_codes::INVALID_MESSAGE, format!("Parse error: {}", e));
                if replies.send(reply).is_err() {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Write every outgoing message as one JSON line until the channel closes
pub fn write_messages<W: Write>(outgoing: Receiver<IpcMessage>, mut writer: W) -> Result<()> {
    for msg in outgoing {
        let json = msg.to_json()?;
        writeln!(writer, "{}", json).context("failed to write to stdout")?;
        writer.flush()?;
    }
    Ok(())
}

/// IPC message receiver for the main application
pub struct IpcReceiver {
    rx: Receiver<IpcMessage>,
}

impl IpcReceiver {
    pub fn new(rx: Receiver<IpcMessage>) -> Self {
        Self { rx }
    }

    /// Try to receive a message without blocking
    pub fn try_recv(&self) -> Option<IpcMessage> {
        self.rx.try_recv().ok()
    }
}

/// IPC message sender for the main application
pub struct IpcSender {
    tx: Sender<IpcMessage>,
}

impl IpcSender {
    pub fn new(tx: Sender<IpcMessage>) -> Self {
        Self { tx }
    }

    /// Send a message to the IPC server
    pub fn send(&self, msg: IpcMessage) -> bool {
        self.tx.send(msg).is_ok()
    }
}

/// Start the stdio IPC server on background threads
pub fn start_ipc_server() -> (IpcReceiver, IpcSender) {
    let (to_app_tx, to_app_rx) = unbounded();
    let (from_app_tx, from_app_rx) = unbounded();

    std::thread::spawn(move || {
        if let Err(e) = write_messages(from_app_rx, std::io::stdout()) {
            error!("Stdio writer error: {:#}", e);
        }
    });

    let replies = from_app_tx.clone();
    std::thread::spawn(move || {
        info!("Starting stdio IPC server");
        if let Err(e) = read_messages(std::io::stdin().lock(), &to_app_tx, &replies) {
            error!("Stdio reader error: {:#}", e);
        }
        info!("Stdio IPC server stopped");
    });

    let sender = IpcSender::new(from_app_tx);
    sender.send(IpcMessage::ready());

    (IpcReceiver::new(to_app_rx), sender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ColorEvent;
    use std::io::Cursor;

    #[test]
    fn test_read_messages_stops_at_shutdown() {
        let input = concat!(
            r#"{"type": "event", "payload": {"kind": "reset"}}"#,
            "\n\n",
            r#"{"type": "shutdown"}"#,
            "\n",
            r#"{"type": "query"}"#,
            "\n",
        );
        let (to_app_tx, to_app_rx) = unbounded();
        let (replies_tx, replies_rx) = unbounded();

        read_messages(Cursor::new(input), &to_app_tx, &replies_tx).unwrap();

        let received: Vec<_> = to_app_rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert!(matches!(received[0], IpcMessage::Event(ColorEvent::Reset)));
        assert!(matches!(received[1], IpcMessage::Shutdown));
        assert!(replies_rx.try_recv().is_err());
    }

    #[test]
    fn test_read_messages_replies_to_garbage() {
        let (to_app_tx, to_app_rx) = unbounded();
        let (replies_tx, replies_rx) = unbounded();

        read_messages(Cursor::new("not json\n"), &to_app_tx, &replies_tx).unwrap();

        assert!(to_app_rx.try_recv().is_err());
        assert!(matches!(
            replies_rx.try_recv(),
            Ok(IpcMessage::Error { code: error_codes::INVALID_MESSAGE, .. })
        ));
    }

    #[test]
    fn test_write_messages_is_line_delimited() {
        let (tx, rx) = unbounded();
        tx.send(IpcMessage::ready()).unwrap();
        tx.send(IpcMessage::error(error_codes::UNKNOWN_PRESET, "nope")).unwrap();
        drop(tx);

        let mut out = Vec::new();
        write_messages(rx, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(matches!(IpcMessage::from_json(lines[0]), Ok(IpcMessage::Ready)));
    }
}
