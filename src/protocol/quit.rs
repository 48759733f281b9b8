use std::io::Write;

use crate::error::Error;
use crate::protocol::{ClientMessage, PacketWriter};
use crate::Context;

/// Tell the server the client is closing the connection.
///
/// Not replayable: there is no session left to converge afterwards.
///
/// <https://mariadb.com/kb/en/com_quit/>
#[derive(Debug)]
pub struct Quit;

impl ClientMessage for Quit {
    fn encode<W: Write>(
        &self,
        writer: &mut PacketWriter<W>,
        _context: &Context,
    ) -> Result<usize, Error> {
        writer.init_packet();
        writer.write_u8(0x01);
        writer.flush()?;

        Ok(1)
    }
}
