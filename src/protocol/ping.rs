use std::io::Write;

use crate::error::Error;
use crate::protocol::{ClientMessage, PacketWriter, Replayable};
use crate::Context;

/// Check if the server is alive.
///
/// <https://mariadb.com/kb/en/com_ping/>
#[derive(Debug)]
pub struct Ping;

impl ClientMessage for Ping {
    fn encode<W: Write>(
        &self,
        writer: &mut PacketWriter<W>,
        _context: &Context,
    ) -> Result<usize, Error> {
        writer.init_packet();
        writer.write_u8(0x0e);
        writer.flush()?;

        Ok(1)
    }
}

impl Replayable for Ping {}
