use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::record::MapState;

pub const TEXTURE_WIDTH: usize = 256;
pub const TEXTURE_HEIGHT: usize = 1024;
/// On-disc size: two 4-bit pixels per byte.
pub const TEXTURE_FILE_SIZE: usize = TEXTURE_WIDTH * TEXTURE_HEIGHT / 2;
pub const TEXTURE_BYTE_SIZE: usize = TEXTURE_WIDTH * TEXTURE_HEIGHT * 4;

pub const PALETTE_COUNT: usize = 16;
pub const PALETTE_COLORS: usize = 16;
pub const PALETTE_BYTE_SIZE: usize = PALETTE_COUNT * PALETTE_COLORS * 4;

const PALETTE_POINTER_OFFSET: usize = 0x44;

/// Map texture atlas: four stacked 256x256 pages of 4-bit palette indices.
///
/// Every pixel is expanded to four identical bytes holding the index; the
/// palette lookup is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Texture {
    pub state: MapState,
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl Texture {
    pub fn read(cursor: &mut ByteCursor, state: MapState) -> Result<Self> {
        let packed = cursor.read_bytes(TEXTURE_FILE_SIZE)?;
        let mut data = Vec::with_capacity(TEXTURE_BYTE_SIZE);
        for byte in packed {
            let low = byte & 0x0F;
            let high = (byte & 0xF0) >> 4;
            data.extend_from_slice(&[low; 4]);
            data.extend_from_slice(&[high; 4]);
        }
        Ok(Texture { state, data })
    }

    /// Palette index of the pixel at `(x, y)`.
    pub fn index_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= TEXTURE_WIDTH || y >= TEXTURE_HEIGHT {
            return None;
        }
        self.data.get((y * TEXTURE_WIDTH + x) * 4).copied()
    }
}

/// Sixteen 16-color palettes as RGBA8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub valid: bool,
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            valid: false,
            data: vec![0; PALETTE_BYTE_SIZE],
        }
    }
}

impl Palette {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.seek(PALETTE_POINTER_OFFSET)?;
        let pointer = cursor.read_u32()?;
        if pointer == 0 {
            return Ok(Palette::default());
        }
        cursor.seek_pointer("palette", pointer)?;

        let mut data = Vec::with_capacity(PALETTE_BYTE_SIZE);
        for _ in 0..PALETTE_COUNT * PALETTE_COLORS {
            data.extend_from_slice(&rgb15_to_rgba8888(cursor.read_u16()?));
        }

        Ok(Palette { valid: true, data })
    }

    /// RGBA of `color` within palette `palette`.
    pub fn color(&self, palette: usize, color: usize) -> Option<[u8; 4]> {
        if palette >= PALETTE_COUNT || color >= PALETTE_COLORS {
            return None;
        }
        let start = (palette * PALETTE_COLORS + color) * 4;
        let slice = self.data.get(start..start + 4)?;
        Some([slice[0], slice[1], slice[2], slice[3]])
    }
}

/// Expand a PSX 15-bit color (`abbbbbgggggrrrrr`) to RGBA8.
///
/// Channels are widened with bit replication so 31 maps to 255. A raw value
/// of zero is the transparent color; every other value is opaque.
pub fn rgb15_to_rgba8888(value: u16) -> [u8; 4] {
    let expand = |c: u16| -> u8 {
        let c = c as u8;
        (c << 3) | (c >> 2)
    };
    let red = expand(value & 0x1F);
    let green = expand((value >> 5) & 0x1F);
    let blue = expand((value >> 10) & 0x1F);
    let alpha = if value == 0 { 0x00 } else { 0xFF };
    [red, green, blue, alpha]
}
