use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::{FormatError, Result};
use crate::lighting::Lighting;
use crate::record::MapState;
use crate::texture::Palette;

pub const MAX_TEXTURED_TRIANGLES: usize = 512;
pub const MAX_TEXTURED_QUADS: usize = 768;
pub const MAX_UNTEXTURED_TRIANGLES: usize = 64;
pub const MAX_UNTEXTURED_QUADS: usize = 256;

const GEOMETRY_POINTER_OFFSET: usize = 0x40;

/// A single polygon corner in render space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub palette_index: u8,
    pub textured: bool,
}

pub type Triangle = [Vertex; 3];
pub type Quad = [Vertex; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PolygonCounts {
    pub textured_triangles: usize,
    pub textured_quads: usize,
    pub untextured_triangles: usize,
    pub untextured_quads: usize,
}

/// Polygons of a map mesh, grouped by primitive kind in file order.
///
/// Quads keep their four corners; [`Geometry::vertices`] triangulates them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Geometry {
    pub textured_triangles: Vec<Triangle>,
    pub textured_quads: Vec<Quad>,
    pub untextured_triangles: Vec<Triangle>,
    pub untextured_quads: Vec<Quad>,
    pub valid: bool,
}

impl Geometry {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        cursor.seek(GEOMETRY_POINTER_OFFSET)?;
        let pointer = cursor.read_u32()?;
        if pointer == 0 {
            return Ok(Geometry::default());
        }
        cursor.seek_pointer("geometry", pointer)?;

        let textured_triangles = read_count(cursor, "textured triangle", MAX_TEXTURED_TRIANGLES)?;
        let textured_quads = read_count(cursor, "textured quad", MAX_TEXTURED_QUADS)?;
        let untextured_triangles =
            read_count(cursor, "untextured triangle", MAX_UNTEXTURED_TRIANGLES)?;
        let untextured_quads = read_count(cursor, "untextured quad", MAX_UNTEXTURED_QUADS)?;

        let mut geometry = Geometry {
            textured_triangles: vec![[Vertex::default(); 3]; textured_triangles],
            textured_quads: vec![[Vertex::default(); 4]; textured_quads],
            untextured_triangles: vec![[Vertex::default(); 3]; untextured_triangles],
            untextured_quads: vec![[Vertex::default(); 4]; untextured_quads],
            valid: false,
        };

        for polygon in geometry.textured_triangles.iter_mut() {
            read_positions(cursor, polygon)?;
        }
        for polygon in geometry.textured_quads.iter_mut() {
            read_positions(cursor, polygon)?;
        }
        for polygon in geometry.untextured_triangles.iter_mut() {
            read_positions(cursor, polygon)?;
        }
        for polygon in geometry.untextured_quads.iter_mut() {
            read_positions(cursor, polygon)?;
        }

        // Only textured polygons carry normals and texture coordinates.
        for polygon in geometry.textured_triangles.iter_mut() {
            read_normals(cursor, polygon)?;
        }
        for polygon in geometry.textured_quads.iter_mut() {
            read_normals(cursor, polygon)?;
        }
        for polygon in geometry.textured_triangles.iter_mut() {
            read_texture_coords(cursor, polygon)?;
        }
        for polygon in geometry.textured_quads.iter_mut() {
            read_texture_coords(cursor, polygon)?;
        }

        geometry.valid = true;
        Ok(geometry)
    }

    pub fn counts(&self) -> PolygonCounts {
        PolygonCounts {
            textured_triangles: self.textured_triangles.len(),
            textured_quads: self.textured_quads.len(),
            untextured_triangles: self.untextured_triangles.len(),
            untextured_quads: self.untextured_quads.len(),
        }
    }

    /// Triangle list covering every polygon. Quads `abcd` become `abc` and
    /// `bdc`.
    pub fn vertices(&self) -> Vec<Vertex> {
        let counts = self.counts();
        let total = (counts.textured_triangles + counts.untextured_triangles) * 3
            + (counts.textured_quads + counts.untextured_quads) * 6;
        let mut out = Vec::with_capacity(total);

        let push_quad = |out: &mut Vec<Vertex>, [a, b, c, d]: Quad| {
            out.extend_from_slice(&[a, b, c, b, d, c]);
        };

        for tri in &self.textured_triangles {
            out.extend_from_slice(tri);
        }
        for quad in &self.textured_quads {
            push_quad(&mut out, *quad);
        }
        for tri in &self.untextured_triangles {
            out.extend_from_slice(tri);
        }
        for quad in &self.untextured_quads {
            push_quad(&mut out, *quad);
        }
        out
    }
}

fn read_count(cursor: &mut ByteCursor, what: &'static str, max: usize) -> Result<usize> {
    let count = usize::from(cursor.read_u16()?);
    if count >= max {
        return Err(FormatError::CapacityExceeded { what, count, max });
    }
    Ok(count)
}

/// Three i16 components with Y and Z flipped into a Y-up frame.
pub(crate) fn read_position(cursor: &mut ByteCursor) -> Result<[f32; 3]> {
    let x = f32::from(cursor.read_i16()?);
    let y = f32::from(cursor.read_i16()?);
    let z = f32::from(cursor.read_i16()?);
    Ok([x, -y, -z])
}

fn read_normal(cursor: &mut ByteCursor) -> Result<[f32; 3]> {
    let x = cursor.read_fixed_1_3_12()?;
    let y = cursor.read_fixed_1_3_12()?;
    let z = cursor.read_fixed_1_3_12()?;
    Ok([x, -y, -z])
}

fn read_positions(cursor: &mut ByteCursor, polygon: &mut [Vertex]) -> Result<()> {
    for vertex in polygon {
        vertex.position = read_position(cursor)?;
    }
    Ok(())
}

fn read_normals(cursor: &mut ByteCursor, polygon: &mut [Vertex]) -> Result<()> {
    for vertex in polygon {
        vertex.normal = read_normal(cursor)?;
    }
    Ok(())
}

/// Texture block of one polygon:
/// `au av palette pad bu bv page pad cu cv [du dv]`.
fn read_texture_coords(cursor: &mut ByteCursor, polygon: &mut [Vertex]) -> Result<()> {
    let mut raw_uv = [(0u8, 0u8); 4];

    raw_uv[0] = (cursor.read_u8()?, cursor.read_u8()?);
    let palette_index = cursor.read_u8()?;
    cursor.skip(1)?;
    raw_uv[1] = (cursor.read_u8()?, cursor.read_u8()?);
    let page = cursor.read_u8()? & 0x03;
    cursor.skip(1)?;
    for uv in raw_uv.iter_mut().take(polygon.len()).skip(2) {
        *uv = (cursor.read_u8()?, cursor.read_u8()?);
    }

    for (vertex, (u, v)) in polygon.iter_mut().zip(raw_uv) {
        vertex.uv = atlas_uv(u, v, page);
        vertex.palette_index = palette_index;
        vertex.textured = true;
    }
    Ok(())
}

/// Normalise a page-relative coordinate into the 256x1024 atlas.
fn atlas_uv(u: u8, v: u8, page: u8) -> [f32; 2] {
    let u = f32::from(u) / 255.0;
    let v = (f32::from(v) + f32::from(page) * 256.0) / 1023.0;
    [u, v]
}

/// Geometry, palette and lighting decoded from one mesh resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Mesh {
    pub state: MapState,
    pub geometry: Geometry,
    pub palette: Palette,
    pub lighting: Lighting,
    pub valid: bool,
}

impl Mesh {
    pub fn read(cursor: &mut ByteCursor, state: MapState) -> Result<Self> {
        let geometry = Geometry::read(cursor)?;
        let palette = Palette::read(cursor)?;
        let lighting = Lighting::read(cursor)?;
        let valid = geometry.valid || palette.valid || lighting.valid;

        Ok(Mesh {
            state,
            geometry,
            palette,
            lighting,
            valid,
        })
    }

    /// Overlay the valid parts of a state-specific mesh onto this one.
    pub fn merge(&mut self, alt: &Mesh) {
        if alt.geometry.valid {
            self.geometry = alt.geometry.clone();
        }
        if alt.palette.valid {
            self.palette = alt.palette.clone();
        }
        if alt.lighting.valid {
            if alt.lighting.any_light_valid() {
                self.lighting.lights = alt.lighting.lights;
            }
            self.lighting.ambient_strength = alt.lighting.ambient_strength;
            self.lighting.ambient_color = alt.lighting.ambient_color;
            self.lighting.background_top = alt.lighting.background_top;
            self.lighting.background_bottom = alt.lighting.background_bottom;
        }
    }
}
