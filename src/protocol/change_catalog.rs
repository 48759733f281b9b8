use std::io::Write;

use crate::error::Error;
use crate::protocol::{ClientMessage, PacketWriter, Replayable};
use crate::Context;

/// Switch the connection to another catalog.
///
/// One packet: the opcode followed by the length-encoded catalog name. The
/// reply is a generic OK (carrying a catalog-change record when session
/// tracking is on) or an ERR.
#[derive(Debug)]
pub struct ChangeCatalog {
    catalog: String,
}

impl ChangeCatalog {
    pub fn new(catalog: impl Into<String>) -> Self {
        Self { catalog: catalog.into() }
    }
}

impl ClientMessage for ChangeCatalog {
    fn encode<W: Write>(
        &self,
        writer: &mut PacketWriter<W>,
        _context: &Context,
    ) -> Result<usize, Error> {
        writer.init_packet();
        writer.write_u8(0x02);
        writer.write_str_lenenc(&self.catalog);
        writer.flush()?;

        Ok(1)
    }
}

// the encoded bytes depend only on the catalog name
impl Replayable for ChangeCatalog {}

#[cfg(test)]
mod tests {
    use super::ChangeCatalog;
    use crate::protocol::{Capabilities, ClientMessage, PacketWriter};
    use crate::Context;

    #[test]
    fn it_encodes_change_catalog() -> anyhow::Result<()> {
        let context = Context::new(Capabilities::PROTOCOL_41);
        let mut out = Vec::new();

        let mut writer = PacketWriter::new(&mut out);
        let packets = ChangeCatalog::new("def").encode(&mut writer, &context)?;

        assert_eq!(packets, 1);
        assert_eq!(&out, b"\x05\0\0\0\x02\x03def");

        Ok(())
    }

    #[test]
    fn replay_is_byte_identical() -> anyhow::Result<()> {
        let command = ChangeCatalog::new("analytics");

        // two independent connections, two fresh contexts
        let first_context = Context::new(Capabilities::PROTOCOL_41 | Capabilities::SESSION_TRACK);
        let second_context = Context::new(Capabilities::PROTOCOL_41);

        let mut first = Vec::new();
        let mut writer = PacketWriter::new(&mut first);
        command.encode(&mut writer, &first_context)?;

        let mut second = Vec::new();
        let mut writer = PacketWriter::new(&mut second);
        command.encode(&mut writer, &second_context)?;

        assert_eq!(first, second);

        Ok(())
    }
}
