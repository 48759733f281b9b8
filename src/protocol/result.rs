use crate::error::Error;
use crate::io::ReadBuf;
use crate::protocol::{ErrPacket, OkPacket, ServerMessage};
use crate::Context;

/// The decoded, typed result of a server response to a client command.
///
/// A closed set: a generic success, the header of a result set (the rows
/// themselves are decoded elsewhere), or a server error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Ok(OkPacket),

    /// First packet of a result set; `columns` column definitions follow.
    ResultSetHeader { columns: u64 },

    Err(ErrPacket),
}

impl ServerMessage for Completion {
    /// Dispatch on the first payload byte: `0x00`/`0xfe` is an OK packet
    /// (`0xfe` when `DEPRECATE_EOF` is in play), `0xff` an ERR packet, and
    /// anything else the column count of a result set.
    fn parse(buf: &mut ReadBuf, context: &mut Context) -> Result<Self, Error> {
        match buf.peek() {
            Some(0x00) | Some(0xfe) => OkPacket::parse(buf, context).map(Self::Ok),

            Some(0xff) => ErrPacket::parse(buf, context).map(Self::Err),

            Some(_) => {
                let columns = buf.get_uint_lenenc_not_null()?;

                Ok(Self::ResultSetHeader { columns })
            }

            None => Err(err_protocol!("received no bytes for a command response")),
        }
    }
}

impl Completion {
    /// Turn a server error completion into `Err`, passing successful
    /// completions through.
    pub fn into_result(self) -> Result<Self, ErrPacket> {
        match self {
            Self::Err(err) => Err(err),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::Completion;
    use crate::io::ReadBuf;
    use crate::protocol::{Capabilities, ServerMessage};
    use crate::Context;

    #[test]
    fn it_dispatches_ok() -> anyhow::Result<()> {
        let mut context = Context::new(Capabilities::PROTOCOL_41);
        let mut buf = ReadBuf::new(Bytes::from_static(b"\x00\x01\x01\x02\x00\x00\x00"));

        match Completion::parse(&mut buf, &mut context)? {
            Completion::Ok(ok) => assert_eq!(ok.affected_rows, 1),
            other => panic!("expected Ok, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn it_dispatches_err() -> anyhow::Result<()> {
        let mut context = Context::new(Capabilities::PROTOCOL_41);
        let mut buf = ReadBuf::new(Bytes::from_static(b"\xff\x84\x04Got packets out of order"));

        match Completion::parse(&mut buf, &mut context)? {
            Completion::Err(err) => assert_eq!(err.error_code, 1156),
            other => panic!("expected Err, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn it_dispatches_result_set_header() -> anyhow::Result<()> {
        let mut context = Context::new(Capabilities::PROTOCOL_41);
        let mut buf = ReadBuf::new(Bytes::from_static(b"\x03"));

        assert_eq!(
            Completion::parse(&mut buf, &mut context)?,
            Completion::ResultSetHeader { columns: 3 }
        );

        Ok(())
    }

    #[test]
    fn into_result_surfaces_the_error() -> anyhow::Result<()> {
        let mut context = Context::new(Capabilities::PROTOCOL_41);
        let mut buf = ReadBuf::new(Bytes::from_static(b"\xff\x84\x04Got packets out of order"));

        let completion = Completion::parse(&mut buf, &mut context)?;
        let err = completion.into_result().unwrap_err();

        assert_eq!(err.error_code, 1156);

        Ok(())
    }
}
