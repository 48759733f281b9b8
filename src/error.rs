use std::io;

/// Protocol-level failure.
///
/// Every variant except [`Error::Io`] indicates that the byte stream no
/// longer matches what the protocol promised. None of them are recoverable
/// in place; the caller is expected to drop the connection and let its
/// reconnection logic take over.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A read demanded more bytes than remain in the current packet.
    #[error("truncated packet; needed {needed} bytes but only {available} remain")]
    TruncatedBuffer { needed: usize, available: usize },

    /// The NULL marker (`0xfb`) was found where a value is mandatory.
    #[error("unexpected NULL for a mandatory length-encoded value")]
    UnexpectedNull,

    /// A frame arrived with an out-of-order sequence number. The connection
    /// must be closed, not retried in place.
    #[error("packets out of order; expected sequence id {expected} but received {received}")]
    ProtocolDesync { expected: u8, received: u8 },

    /// The packet was well-framed but its payload violates the protocol.
    #[error("malformed packet: {0}")]
    Protocol(String),

    #[error("io: {0}")]
    Io(#[from] io::Error),
}

// Format an error message as a `Protocol` error
macro_rules! err_protocol {
    ($($arg:tt)*) => {
        $crate::error::Error::Protocol(format!($($arg)*))
    };
}
