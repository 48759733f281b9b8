use std::io::Write;

use crate::error::Error;
use crate::io::ReadBuf;
use crate::Context;

mod capabilities;
mod change_catalog;
mod err;
mod info;
mod ok;
mod packet;
mod ping;
mod quit;
mod result;
pub mod state_change;
mod status;

pub use capabilities::Capabilities;
pub use change_catalog::ChangeCatalog;
pub use err::ErrPacket;
pub use info::Info;
pub use ok::OkPacket;
pub use packet::{PacketReader, PacketWriter, MAX_PACKET_SIZE};
pub use ping::Ping;
pub use quit::Quit;
pub use result::Completion;
pub use status::Status;

/// A command the client can send.
///
/// Encoding may consult the context for negotiated capabilities but must
/// not depend on any response state; the framer is left flushed.
pub trait ClientMessage {
    /// Encode this command through the framer; returns the number of
    /// logical packets written.
    fn encode<W: Write>(
        &self,
        writer: &mut PacketWriter<W>,
        context: &Context,
    ) -> Result<usize, Error>;
}

/// A response shape the server can send.
///
/// Consumes exactly one reassembled logical packet. Context mutation is
/// atomic: on failure the context is left exactly as it was before the
/// call.
pub trait ServerMessage: Sized {
    fn parse(buf: &mut ReadBuf, context: &mut Context) -> Result<Self, Error>;
}

/// Marks a command as safe to re-encode, in order, against a freshly
/// established connection after transparent reconnection.
///
/// Implementors must derive the encoded bytes only from their own
/// immutable fields (plus capability gating from the context), so that
/// every replay reproduces an equivalent request. The buffering and
/// ordering policy belongs to the caller.
pub trait Replayable: ClientMessage {}
