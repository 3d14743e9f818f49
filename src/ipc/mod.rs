//! IPC communication module
//!
//! Line-delimited JSON control channel over stdin/stdout.

mod dispatch;
mod protocol;
mod server;

pub use dispatch::{dispatch, run_headless, Dispatch};
pub use protocol::*;
pub use server::{start_ipc_server, IpcReceiver, IpcSender};
