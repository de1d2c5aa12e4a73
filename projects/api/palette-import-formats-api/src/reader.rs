//! Checked big-endian reads over an in-memory byte stream.

use crate::error::{CodecError, CodecResult};

/// Forward cursor over a byte slice with bounds-checked reads.
///
/// Every read validates the remaining length first and fails with
/// [`CodecError::Truncated`] carrying the exact position, so codecs get
/// precise truncation reporting without per-site length arithmetic. The
/// cursor moves strictly forward except for [`seek_to`], which exists for
/// formats that restate their header at a computed offset.
///
/// [`seek_to`]: ByteReader::seek_to
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader { data, position: 0 }
    }

    /// Total length of the underlying input.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current read position from the start of the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Move the cursor to an absolute offset.
    pub fn seek_to(&mut self, offset: usize) -> CodecResult<()> {
        if offset > self.data.len() {
            return Err(CodecError::Truncated {
                offset: self.position,
                required: offset - self.position,
                remaining: self.remaining(),
            });
        }
        self.position = offset;
        Ok(())
    }

    /// Consume and return the next `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> CodecResult<&'a [u8]> {
        if self.remaining() < count {
            return Err(CodecError::Truncated {
                offset: self.position,
                required: count,
                remaining: self.remaining(),
            });
        }
        let start = self.position;
        self.position += count;
        Ok(&self.data[start..self.position])
    }

    /// Advance past `count` bytes without interpreting them.
    pub fn skip(&mut self, count: usize) -> CodecResult<()> {
        self.read_bytes(count).map(|_| ())
    }

    pub fn read_u8(&mut self) -> CodecResult<u8> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    pub fn read_u16_be(&mut self) -> CodecResult<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i16_be(&mut self) -> CodecResult<i16> {
        let bytes = self.read_bytes(2)?;
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be(&mut self) -> CodecResult<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
