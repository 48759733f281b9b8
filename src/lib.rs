//! Client-side encoding and decoding of the MariaDB/MySQL wire protocol.
//!
//! This crate is the wire-protocol engine of a connector: it frames and
//! encodes outgoing commands, reassembles and decodes incoming packets
//! into typed [`Completion`]s, and keeps a per-connection [`Context`]
//! consistent with the session-state changes the server reports inside
//! its OK packets.
//!
//! It deliberately stops at the protocol boundary. Transport, TLS,
//! authentication, pooling and result-set row decoding live elsewhere;
//! the transport is consumed only through [`std::io::Read`] and
//! [`std::io::Write`].
//!
//! Commands that implement [`protocol::Replayable`] can be re-encoded
//! verbatim against a freshly established connection, which is what makes
//! transparent failover possible: a new [`Context`] is built from the new
//! handshake and re-converged by replaying the buffered session-altering
//! commands in their original order.

#[macro_use]
mod error;

mod context;
mod isolation_level;

pub mod io;
pub mod protocol;

pub use context::Context;
pub use error::Error;
pub use isolation_level::IsolationLevel;
pub use protocol::{Capabilities, Completion, Status};
