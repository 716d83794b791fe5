use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::mesh::read_position;

pub const LIGHT_COUNT: usize = 3;
/// Fixed ambient strength applied to every map.
pub const AMBIENT_STRENGTH: f32 = 2.0;

const LIGHTING_POINTER_OFFSET: usize = 0x64;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Light {
    pub direction: [f32; 3],
    pub color: [f32; 4],
    pub valid: bool,
}

/// Directional lights, ambient color and background gradient of a map.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Lighting {
    pub lights: [Light; LIGHT_COUNT],
    pub ambient_color: [f32; 4],
    pub ambient_strength: f32,
    pub background_top: [f32; 4],
    pub background_bottom: [f32; 4],
    pub valid: bool,
}

impl Lighting {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.seek(LIGHTING_POINTER_OFFSET)?;
        let pointer = cursor.read_u32()?;
        if pointer == 0 {
            return Ok(Lighting::default());
        }
        cursor.seek_pointer("lighting", pointer)?;

        // Stored channel-major: all reds, then all greens, then all blues.
        let mut raw = [[0f32; 3]; LIGHT_COUNT];
        for channel in 0..3 {
            for light in raw.iter_mut() {
                light[channel] = cursor.read_fixed_1_3_12()?;
            }
        }

        let mut lights = [Light::default(); LIGHT_COUNT];
        for (light, channels) in lights.iter_mut().zip(raw) {
            let [r, g, b] = channels;
            light.color = [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), 1.0];
            light.valid = r + g + b > 0.0;
        }
        for light in lights.iter_mut() {
            light.direction = read_position(cursor)?;
        }

        let ambient_color = read_rgb8(cursor)?;
        let background_top = read_rgb8(cursor)?;
        let background_bottom = read_rgb8(cursor)?;

        Ok(Lighting {
            lights,
            ambient_color,
            ambient_strength: AMBIENT_STRENGTH,
            background_top,
            background_bottom,
            valid: true,
        })
    }

    pub fn any_light_valid(&self) -> bool {
        self.lights.iter().any(|light| light.valid)
    }
}

fn read_rgb8(cursor: &mut ByteCursor) -> Result<[f32; 4]> {
    let red = f32::from(cursor.read_u8()?) / 255.0;
    let green = f32::from(cursor.read_u8()?) / 255.0;
    let blue = f32::from(cursor.read_u8()?) / 255.0;
    Ok([red, green, blue, 1.0])
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn q(value: f32) -> [u8; 2] {
        ((value * 4096.0) as i16).to_le_bytes()
    }

    /// Lighting block with per-light RGB (in light order) written at `pointer`.
    pub(crate) fn lighting_block(pointer: usize, colors: [[f32; 3]; 3]) -> Vec<u8> {
        let mut data = vec![0u8; pointer];
        data[0x64..0x68].copy_from_slice(&(pointer as u32).to_le_bytes());
        for channel in 0..3 {
            for light in &colors {
                data.extend_from_slice(&q(light[channel]));
            }
        }
        for direction in [[100i16, 200, -300], [0, -1, 1], [7, 8, 9]] {
            for component in direction {
                data.extend_from_slice(&component.to_le_bytes());
            }
        }
        data.extend_from_slice(&[255, 0, 51]);
        data.extend_from_slice(&[10, 20, 30]);
        data.extend_from_slice(&[0, 0, 255]);
        data
    }

    #[test]
    fn decodes_channel_major_colors() {
        let data = lighting_block(
            0x80,
            [[0.5, 0.25, 0.0], [0.0, 0.0, 0.0], [1.5, -0.5, 0.0]],
        );
        let lighting = Lighting::read(&mut ByteCursor::new(data)).unwrap();
        assert!(lighting.valid);

        assert_eq!(lighting.lights[0].color, [0.5, 0.25, 0.0, 1.0]);
        assert!(lighting.lights[0].valid);
        assert!(!lighting.lights[1].valid);
        // Clamped for storage, validity from the raw sum.
        assert_eq!(lighting.lights[2].color, [1.0, 0.0, 0.0, 1.0]);
        assert!(lighting.lights[2].valid);

        assert_eq!(lighting.lights[0].direction, [100.0, -200.0, 300.0]);
        assert_eq!(lighting.lights[1].direction, [0.0, 1.0, -1.0]);
        assert_eq!(lighting.ambient_color, [1.0, 0.0, 0.2, 1.0]);
        assert_eq!(lighting.ambient_strength, AMBIENT_STRENGTH);
        assert_eq!(lighting.background_bottom, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn negative_raw_sum_invalidates_light() {
        let data = lighting_block(
            0x80,
            [[0.25, -0.5, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
        );
        let lighting = Lighting::read(&mut ByteCursor::new(data)).unwrap();
        assert!(!lighting.lights[0].valid);
        assert!(!lighting.any_light_valid());
        assert_eq!(lighting.lights[0].color, [0.25, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn null_pointer_is_invalid() {
        let lighting = Lighting::read(&mut ByteCursor::new(vec![0u8; 0x80])).unwrap();
        assert!(!lighting.valid);
    }
}
