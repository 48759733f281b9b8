use bytes::{Buf, Bytes};

use crate::error::Error;

/// Bounded, forward-only cursor over the payload of one logical packet.
///
/// Unlike the raw [`Buf`] methods, every read here checks the remaining
/// byte count first and fails with [`Error::TruncatedBuffer`] instead of
/// panicking. Length-bounded sub-records are carved out with
/// [`get_length_buf`][ReadBuf::get_length_buf], which hands back an
/// independent cursor so a nested decoder can never over-read into its
/// parent stream.
#[derive(Debug, Clone)]
pub struct ReadBuf {
    buf: Bytes,
}

impl ReadBuf {
    pub fn new(buf: Bytes) -> Self {
        Self { buf }
    }

    /// Number of bytes left to read.
    #[inline]
    pub fn readable_bytes(&self) -> usize {
        self.buf.len()
    }

    /// First unread byte, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.first().copied()
    }

    #[inline]
    fn require(&self, needed: usize) -> Result<(), Error> {
        if self.buf.remaining() < needed {
            return Err(Error::TruncatedBuffer { needed, available: self.buf.remaining() });
        }

        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<(), Error> {
        self.require(n)?;
        self.buf.advance(n);

        Ok(())
    }

    pub fn get_u8(&mut self) -> Result<u8, Error> {
        self.require(1)?;

        Ok(self.buf.get_u8())
    }

    pub fn get_u16_le(&mut self) -> Result<u16, Error> {
        self.require(2)?;

        Ok(self.buf.get_u16_le())
    }

    /// 3-byte little-endian integer, widened to `u32`.
    pub fn get_u24_le(&mut self) -> Result<u32, Error> {
        self.require(3)?;

        // lossless; a 3-byte value always fits
        Ok(self.buf.get_uint_le(3) as u32)
    }

    pub fn get_u32_le(&mut self) -> Result<u32, Error> {
        self.require(4)?;

        Ok(self.buf.get_u32_le())
    }

    pub fn get_u64_le(&mut self) -> Result<u64, Error> {
        self.require(8)?;

        Ok(self.buf.get_u64_le())
    }

    /// Remove the next `n` bytes as an owned view.
    pub fn get_bytes(&mut self, n: usize) -> Result<Bytes, Error> {
        self.require(n)?;

        Ok(self.buf.split_to(n))
    }

    /// Read `n` bytes as UTF-8 text.
    pub fn get_str(&mut self, n: usize) -> Result<String, Error> {
        let bytes = self.get_bytes(n)?;

        String::from_utf8(bytes.to_vec())
            .map_err(|_| err_protocol!("string is not valid UTF-8"))
    }

    /// All remaining bytes as UTF-8 text.
    pub fn get_str_eof(&mut self) -> Result<String, Error> {
        self.get_str(self.buf.len())
    }

    /// Read a length-encoded integer; `None` is the SQL NULL marker.
    ///
    /// <https://mariadb.com/kb/en/protocol-data-types/#length-encoded-integers>
    pub fn get_uint_lenenc(&mut self) -> Result<Option<u64>, Error> {
        Ok(match self.get_u8()? {
            0xfb => None,
            0xfc => Some(u64::from(self.get_u16_le()?)),
            0xfd => Some(u64::from(self.get_u24_le()?)),
            0xfe => Some(self.get_u64_le()?),

            v => Some(u64::from(v)),
        })
    }

    /// Read a length-encoded integer where NULL would violate the protocol.
    pub fn get_uint_lenenc_not_null(&mut self) -> Result<u64, Error> {
        self.get_uint_lenenc()?.ok_or(Error::UnexpectedNull)
    }

    /// Read a length-encoded byte sequence; `None` is the SQL NULL marker.
    pub fn get_bytes_lenenc(&mut self) -> Result<Option<Bytes>, Error> {
        match self.get_uint_lenenc()? {
            Some(len) => {
                let len = usize::try_from(len)
                    .map_err(|_| err_protocol!("byte length overflows usize: {len}"))?;

                self.get_bytes(len).map(Some)
            }

            None => Ok(None),
        }
    }

    /// Read a length-encoded string; `None` is the SQL NULL marker.
    pub fn get_str_lenenc(&mut self) -> Result<Option<String>, Error> {
        match self.get_uint_lenenc()? {
            Some(len) => {
                let len = usize::try_from(len)
                    .map_err(|_| err_protocol!("string length overflows usize: {len}"))?;

                self.get_str(len).map(Some)
            }

            None => Ok(None),
        }
    }

    /// Carve out a length-bounded sub-buffer: a length-encoded (not NULL)
    /// length followed by exactly that many bytes, returned as an isolated
    /// cursor over its own region.
    pub fn get_length_buf(&mut self) -> Result<ReadBuf, Error> {
        let len = self.get_uint_lenenc_not_null()?;
        let len = usize::try_from(len)
            .map_err(|_| err_protocol!("buffer length overflows usize: {len}"))?;

        Ok(Self::new(self.get_bytes(len)?))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::ReadBuf;
    use crate::error::Error;
    use crate::io::BufMutExt;

    #[test]
    fn get_uint_lenenc_widths() -> anyhow::Result<()> {
        let mut buf = ReadBuf::new(Bytes::from_static(
            b"\x00\xfa\xfc\xfb\x00\xfc\xff\xff\xfd\x00\x00\x01\xfd\xff\xff\xff\xfe\x00\x00\x00\x01\x00\x00\x00\x00\xfe\xff\xff\xff\xff\xff\xff\xff\xff",
        ));

        assert_eq!(buf.get_uint_lenenc()?, Some(0));
        assert_eq!(buf.get_uint_lenenc()?, Some(250));
        assert_eq!(buf.get_uint_lenenc()?, Some(251));
        assert_eq!(buf.get_uint_lenenc()?, Some(0xffff));
        assert_eq!(buf.get_uint_lenenc()?, Some(0x1_0000));
        assert_eq!(buf.get_uint_lenenc()?, Some(0xff_ffff));
        assert_eq!(buf.get_uint_lenenc()?, Some(0x100_0000));
        assert_eq!(buf.get_uint_lenenc()?, Some(u64::MAX));
        assert_eq!(buf.readable_bytes(), 0);

        Ok(())
    }

    #[test]
    fn get_uint_lenenc_null() -> anyhow::Result<()> {
        let mut buf = ReadBuf::new(Bytes::from_static(b"\xfb"));
        assert_eq!(buf.get_uint_lenenc()?, None);

        let mut buf = ReadBuf::new(Bytes::from_static(b"\xfb"));
        assert!(matches!(buf.get_uint_lenenc_not_null(), Err(Error::UnexpectedNull)));

        Ok(())
    }

    #[test]
    fn round_trip_uint_lenenc() -> anyhow::Result<()> {
        for value in [0, 1, 250, 251, 255, 256, 0xffff, 0x1_0000, 0xff_ffff, 0x100_0000, u64::MAX]
        {
            let mut encoded = Vec::new();
            encoded.put_uint_lenenc(value);

            let mut buf = ReadBuf::new(Bytes::from(encoded));
            assert_eq!(buf.get_uint_lenenc()?, Some(value));
            assert_eq!(buf.readable_bytes(), 0);
        }

        Ok(())
    }

    #[test]
    fn round_trip_bytes_lenenc() -> anyhow::Result<()> {
        for value in [&b""[..], &b"\0"[..], &b"utf8mb4"[..], &[0xfb_u8; 300][..]] {
            let mut encoded = Vec::new();
            encoded.put_bytes_lenenc(value);

            let mut buf = ReadBuf::new(Bytes::from(encoded));
            assert_eq!(buf.get_bytes_lenenc()?.as_deref(), Some(value));
        }

        Ok(())
    }

    #[test]
    fn truncated_fixed_read() {
        let mut buf = ReadBuf::new(Bytes::from_static(b"\x01\x02"));

        match buf.get_u32_le() {
            Err(Error::TruncatedBuffer { needed: 4, available: 2 }) => {}
            other => panic!("expected TruncatedBuffer, got {other:?}"),
        }

        // the failed read must not consume anything
        assert_eq!(buf.readable_bytes(), 2);
    }

    #[test]
    fn truncated_lenenc_length() {
        // declared length of 16 bytes with only 2 remaining
        let mut buf = ReadBuf::new(Bytes::from_static(b"\x10\xab\xcd"));

        assert!(matches!(
            buf.get_bytes_lenenc(),
            Err(Error::TruncatedBuffer { needed: 16, available: 2 })
        ));
    }

    #[test]
    fn length_buf_is_isolated() -> anyhow::Result<()> {
        let mut parent = ReadBuf::new(Bytes::from_static(b"\x02\xaa\xbb\xcc"));

        let mut child = parent.get_length_buf()?;
        assert_eq!(child.readable_bytes(), 2);
        assert_eq!(child.get_u16_le()?, 0xbbaa);

        // exhausted child cannot reach into the parent
        assert!(matches!(child.get_u8(), Err(Error::TruncatedBuffer { .. })));
        assert_eq!(parent.get_u8()?, 0xcc);

        Ok(())
    }
}
