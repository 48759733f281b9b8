use crate::error::Error;
use crate::io::ReadBuf;
use crate::protocol::ServerMessage;
use crate::Context;

/// Error response to any client command.
///
/// Carries the server error code, the optional 5-byte SQLSTATE and a
/// human-readable message. Does not touch the [`Context`].
///
/// <https://mariadb.com/kb/en/err_packet/>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrPacket {
    pub error_code: u16,
    pub sql_state: Option<String>,
    pub error_message: String,
}

impl ServerMessage for ErrPacket {
    fn parse(buf: &mut ReadBuf, _context: &mut Context) -> Result<Self, Error> {
        let tag = buf.get_u8()?;
        if tag != 0xff {
            return Err(err_protocol!("expected 0xff (ERR_Packet) but found 0x{:02x}", tag));
        }

        let error_code = buf.get_u16_le()?;

        let sql_state = if buf.peek() == Some(b'#') {
            // a '#' marker means the 5-byte SQL STATE follows
            buf.skip(1)?;

            Some(buf.get_str(5)?)
        } else {
            None
        };

        let error_message = buf.get_str_eof()?;

        Ok(Self { error_code, sql_state, error_message })
    }
}
