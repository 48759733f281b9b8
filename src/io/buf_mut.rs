use bytes::BufMut;

/// Write-side counterparts of the packet reads, over the packet
/// accumulation buffer.
///
/// Length-encoded integers always use the minimal width so that the
/// output is byte-exact with what the read side produces on re-encode.
pub trait BufMutExt {
    /// Write a length-encoded integer; `None` writes the NULL marker.
    fn put_uint_lenenc(&mut self, value: impl Into<Option<u64>>);

    fn put_bytes_lenenc(&mut self, value: &[u8]);

    fn put_str_lenenc(&mut self, value: &str);

    fn put_str_nul(&mut self, value: &str);
}

impl BufMutExt for Vec<u8> {
    fn put_uint_lenenc(&mut self, value: impl Into<Option<u64>>) {
        match value.into() {
            None => self.push(0xfb),

            // https://mariadb.com/kb/en/protocol-data-types/#length-encoded-integers
            Some(value) if value < 251 => self.push(value as u8),

            Some(value) if value <= 0xffff => {
                self.push(0xfc);
                self.put_u16_le(value as u16);
            }

            Some(value) if value <= 0xff_ffff => {
                self.push(0xfd);
                self.put_uint_le(value, 3);
            }

            Some(value) => {
                self.push(0xfe);
                self.put_u64_le(value);
            }
        }
    }

    fn put_bytes_lenenc(&mut self, value: &[u8]) {
        self.put_uint_lenenc(value.len() as u64);
        self.extend_from_slice(value);
    }

    fn put_str_lenenc(&mut self, value: &str) {
        self.put_bytes_lenenc(value.as_bytes());
    }

    fn put_str_nul(&mut self, value: &str) {
        self.extend_from_slice(value.as_bytes());
        self.push(0);
    }
}
