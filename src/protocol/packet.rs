use std::io::{Read, Write};

use bytes::{BufMut, BytesMut};

use crate::error::Error;
use crate::io::{BufMutExt, ReadBuf};

/// Largest payload a single physical frame can carry (16 MiB − 1).
///
/// A logical packet of this size or more is split: each boundary frame is
/// exactly this size and the packet ends at the first shorter frame. When
/// the payload is an exact multiple, that final frame is zero-length so the
/// receiver can tell "more to come" from "ended on the boundary".
pub const MAX_PACKET_SIZE: usize = 0xff_ffff;

/// Write half of the packet framer.
///
/// Accumulates one logical packet in memory, then [`flush`][Self::flush]
/// slices it into physical frames, each prefixed by a 3-byte little-endian
/// length and a 1-byte sequence number that increments per frame, wrapping
/// modulo 256.
///
/// Packets in MySQL are prefixed by 4 bytes: 3 for length (in LE) and a
/// sequence id. <https://mariadb.com/kb/en/0-packet/>
pub struct PacketWriter<W> {
    stream: W,
    buf: Vec<u8>,
    sequence_id: u8,
}

impl<W: Write> PacketWriter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream, buf: Vec::with_capacity(1024), sequence_id: 0 }
    }

    /// Begin a new logical packet.
    ///
    /// The sequence id resets to 0; every client command starts a new
    /// request/response exchange.
    pub fn init_packet(&mut self) {
        self.buf.clear();
        self.sequence_id = 0;
    }

    /// The sequence id the *next* frame will carry. After a flush, this is
    /// the id the first response frame is expected to carry.
    pub fn sequence_id(&self) -> u8 {
        self.sequence_id
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    pub fn write_bytes(&mut self, value: &[u8]) {
        self.buf.extend_from_slice(value);
    }

    pub fn write_str(&mut self, value: &str) {
        self.buf.extend_from_slice(value.as_bytes());
    }

    pub fn write_uint_lenenc(&mut self, value: impl Into<Option<u64>>) {
        self.buf.put_uint_lenenc(value);
    }

    pub fn write_bytes_lenenc(&mut self, value: &[u8]) {
        self.buf.put_bytes_lenenc(value);
    }

    pub fn write_str_lenenc(&mut self, value: &str) {
        self.buf.put_str_lenenc(value);
    }

    /// Frame the accumulated payload and write it through the transport.
    pub fn flush(&mut self) -> Result<(), Error> {
        let mut offset = 0;

        loop {
            let end = usize::min(offset + MAX_PACKET_SIZE, self.buf.len());
            let chunk = &self.buf[offset..end];

            let mut header = (chunk.len() as u32).to_le_bytes();
            header[3] = self.sequence_id;
            self.sequence_id = self.sequence_id.wrapping_add(1);

            self.stream.write_all(&header)?;
            self.stream.write_all(chunk)?;

            offset = end;

            // a max-size frame promises a continuation, even an empty one
            if chunk.len() < MAX_PACKET_SIZE {
                break;
            }
        }

        self.buf.clear();
        self.stream.flush()?;

        Ok(())
    }
}

/// Read half of the packet framer.
///
/// Reassembles one logical packet from consecutive physical frames,
/// verifying that every frame carries the expected sequence number.
pub struct PacketReader<R> {
    stream: R,
    sequence_id: u8,
}

impl<R: Read> PacketReader<R> {
    /// Reader for a server-initiated exchange (sequence starts at 0).
    pub fn new(stream: R) -> Self {
        Self::with_sequence_id(stream, 0)
    }

    /// Reader for a response; `sequence_id` is the id the first response
    /// frame is expected to carry (see [`PacketWriter::sequence_id`]).
    pub fn with_sequence_id(stream: R, sequence_id: u8) -> Self {
        Self { stream, sequence_id }
    }

    /// Read and reassemble the next logical packet.
    ///
    /// A sequence mismatch is fatal: the stream is desynchronized and the
    /// connection must be dropped.
    pub fn read_packet(&mut self) -> Result<ReadBuf, Error> {
        let mut payload = BytesMut::new();

        loop {
            let mut header = [0_u8; 4];
            self.stream.read_exact(&mut header)?;

            let len = u32::from_le_bytes([header[0], header[1], header[2], 0]) as usize;
            let received = header[3];

            if received != self.sequence_id {
                return Err(Error::ProtocolDesync { expected: self.sequence_id, received });
            }
            self.sequence_id = self.sequence_id.wrapping_add(1);

            let start = payload.len();
            payload.resize(start + len, 0);
            self.stream.read_exact(&mut payload[start..])?;

            if len < MAX_PACKET_SIZE {
                break;
            }
        }

        Ok(ReadBuf::new(payload.freeze()))
    }
}

#[cfg(test)]
mod tests {
    use super::{PacketReader, PacketWriter, MAX_PACKET_SIZE};
    use crate::error::Error;

    #[test]
    fn it_frames_a_small_packet() -> anyhow::Result<()> {
        let mut out = Vec::new();

        let mut writer = PacketWriter::new(&mut out);
        writer.init_packet();
        writer.write_u8(0x0e);
        writer.flush()?;

        assert_eq!(&out, b"\x01\0\0\0\x0e");

        Ok(())
    }

    #[test]
    fn it_splits_a_boundary_packet() -> anyhow::Result<()> {
        let payload = vec![0xab_u8; MAX_PACKET_SIZE];
        let mut out = Vec::new();

        let mut writer = PacketWriter::new(&mut out);
        writer.init_packet();
        writer.write_bytes(&payload);
        writer.flush()?;

        // one full frame and a zero-length terminator
        assert_eq!(out.len(), 4 + MAX_PACKET_SIZE + 4);
        assert_eq!(&out[..4], b"\xff\xff\xff\0");
        assert_eq!(&out[4 + MAX_PACKET_SIZE..], b"\0\0\0\x01");

        let mut reader = PacketReader::new(&out[..]);
        let buf = reader.read_packet()?;
        assert_eq!(buf.readable_bytes(), MAX_PACKET_SIZE);

        Ok(())
    }

    #[test]
    fn it_reassembles_across_frames() -> anyhow::Result<()> {
        let payload = vec![0x5a_u8; MAX_PACKET_SIZE + 10];
        let mut out = Vec::new();

        let mut writer = PacketWriter::new(&mut out);
        writer.init_packet();
        writer.write_bytes(&payload);
        writer.flush()?;

        assert_eq!(writer.sequence_id(), 2);

        let mut reader = PacketReader::new(&out[..]);
        let mut buf = reader.read_packet()?;

        assert_eq!(buf.readable_bytes(), payload.len());
        assert_eq!(buf.get_bytes(payload.len())?, payload);

        Ok(())
    }

    #[test]
    fn it_rejects_out_of_order_frames() {
        // a frame claiming sequence id 5 when 0 is expected
        let data = b"\x01\0\0\x05\x0e";

        let mut reader = PacketReader::new(&data[..]);

        match reader.read_packet() {
            Err(Error::ProtocolDesync { expected: 0, received: 5 }) => {}
            other => panic!("expected ProtocolDesync, got {other:?}"),
        }
    }

    #[test]
    fn sequence_id_wraps() -> anyhow::Result<()> {
        let mut out = Vec::new();

        let mut writer = PacketWriter::new(&mut out);
        writer.init_packet();
        writer.sequence_id = 255;
        writer.write_u8(0x01);
        writer.flush()?;

        assert_eq!(writer.sequence_id(), 0);
        assert_eq!(&out, b"\x01\0\0\xff\x01");

        Ok(())
    }
}
