use byteorder::{ByteOrder, LittleEndian};

use crate::error::{FormatError, Result};

/// Owned byte buffer with a movable read offset.
///
/// All reads are little-endian and bounds-checked; a read that would run past
/// the end of the buffer fails without moving the offset.
#[derive(Debug, Clone)]
pub struct ByteCursor {
    data: Vec<u8>,
    offset: usize,
}

impl ByteCursor {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, offset: 0 }
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Move the offset to an absolute position. Positioning exactly at the
    /// end is allowed; subsequent reads will fail.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.data.len() {
            return Err(FormatError::OutOfBounds {
                offset,
                width: 0,
                len: self.data.len(),
            });
        }
        self.offset = offset;
        Ok(())
    }

    /// Follow a pointer stored inside the buffer itself.
    pub fn seek_pointer(&mut self, what: &'static str, pointer: u32) -> Result<()> {
        let pointer = pointer as usize;
        if pointer >= self.data.len() {
            return Err(FormatError::InvalidPointer {
                what,
                pointer,
                len: self.data.len(),
            });
        }
        self.offset = pointer;
        Ok(())
    }

    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.take(count).map(|_| ())
    }

    fn take(&mut self, width: usize) -> Result<&[u8]> {
        let end = self
            .offset
            .checked_add(width)
            .filter(|&end| end <= self.data.len())
            .ok_or(FormatError::OutOfBounds {
                offset: self.offset,
                width,
                len: self.data.len(),
            })?;
        let start = self.offset;
        self.offset = end;
        Ok(&self.data[start..end])
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.take(count).map(<[u8]>::to_vec)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.take(2).map(LittleEndian::read_u16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.take(4).map(LittleEndian::read_u32)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.take(2).map(LittleEndian::read_i16)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.take(4).map(LittleEndian::read_i32)
    }

    /// Signed 16-bit Q1.3.12 fixed point value.
    pub fn read_fixed_1_3_12(&mut self) -> Result<f32> {
        Ok(f32::from(self.read_i16()?) / 4096.0)
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(data: Vec<u8>) -> Self {
        ByteCursor::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_scalars() {
        let mut cursor = ByteCursor::new(vec![
            0x7F, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xFF, 0xFE, 0xFF, 0x00, 0xF0, 0xFF, 0xFF,
        ]);
        assert_eq!(cursor.read_u8().unwrap(), 0x7F);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(cursor.read_i8().unwrap(), -1);
        assert_eq!(cursor.read_i16().unwrap(), -2);
        assert_eq!(cursor.read_i32().unwrap(), -4096);
        assert_eq!(cursor.position(), 14);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn fixed_point_divides_by_4096() {
        let mut data = Vec::new();
        data.extend_from_slice(&4096i16.to_le_bytes());
        data.extend_from_slice(&(-2048i16).to_le_bytes());
        data.extend_from_slice(&1i16.to_le_bytes());
        let mut cursor = ByteCursor::new(data);
        assert_eq!(cursor.read_fixed_1_3_12().unwrap(), 1.0);
        assert_eq!(cursor.read_fixed_1_3_12().unwrap(), -0.5);
        assert_eq!(cursor.read_fixed_1_3_12().unwrap(), 1.0 / 4096.0);
    }

    #[test]
    fn reading_past_end_fails_without_advancing() {
        let mut cursor = ByteCursor::new(vec![1, 2, 3]);
        cursor.read_u16().unwrap();
        let err = cursor.read_u16().unwrap_err();
        assert!(matches!(
            err,
            FormatError::OutOfBounds {
                offset: 2,
                width: 2,
                len: 3
            }
        ));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_u8().unwrap(), 3);
        assert!(cursor.read_bytes(1).is_err());
    }

    #[test]
    fn pointers_must_land_inside_buffer() {
        let mut cursor = ByteCursor::new(vec![0; 8]);
        cursor.seek_pointer("palette", 4).unwrap();
        assert_eq!(cursor.position(), 4);
        assert!(matches!(
            cursor.seek_pointer("palette", 8),
            Err(FormatError::InvalidPointer { pointer: 8, .. })
        ));
        assert!(cursor.seek(8).is_ok());
        assert!(cursor.seek(9).is_err());
    }
}
