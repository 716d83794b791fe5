use std::io::{Read, Seek};

use serde::Serialize;

use crate::disc::DiscImage;
use crate::error::{FormatError, Result};
use crate::maps::map_descriptor;
use crate::mesh::{Mesh, Vertex};
use crate::record::{
    DIRECTORY_FILE_SIZE, MapState, ResourceKind, ResourceRecord, parse_directory,
};
use crate::texture::Texture;

/// Every decoded resource listed in one map's directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MapResourceSet {
    pub map_id: usize,
    pub records: Vec<ResourceRecord>,
    pub primary: Option<Mesh>,
    pub override_mesh: Option<Mesh>,
    pub alt_meshes: Vec<Mesh>,
    pub textures: Vec<Texture>,
}

impl MapResourceSet {
    /// Distinct record states in directory order.
    pub fn available_states(&self) -> Vec<MapState> {
        let mut states: Vec<MapState> = Vec::new();
        for record in &self.records {
            if !states.contains(&record.state) {
                states.push(record.state);
            }
        }
        states
    }

    fn insert_default(slot: &mut Option<Mesh>, what: &'static str, mesh: Mesh) -> Result<()> {
        if !mesh.state.is_default() {
            return Err(FormatError::UnexpectedState {
                what,
                state: mesh.state,
            });
        }
        if slot.is_some() {
            return Err(FormatError::DuplicateResource(what));
        }
        *slot = Some(mesh);
        Ok(())
    }
}

/// Look up `map_id` in the map table and load its resource directory.
pub fn read_map_directory<R: Read + Seek>(
    disc: &mut DiscImage<R>,
    map_id: usize,
) -> Result<MapResourceSet> {
    let descriptor = map_descriptor(map_id)
        .filter(|map| map.valid)
        .ok_or(FormatError::UnknownMap(map_id))?;
    log::debug!(
        "map {} '{}' directory at sector {}",
        map_id,
        descriptor.name,
        descriptor.sector
    );
    read_directory_at(disc, map_id, descriptor.sector)
}

/// Load the resource directory stored at `sector` and decode every record.
pub fn read_directory_at<R: Read + Seek>(
    disc: &mut DiscImage<R>,
    map_id: usize,
    sector: u32,
) -> Result<MapResourceSet> {
    let mut cursor = disc.read_cursor(sector, DIRECTORY_FILE_SIZE)?;
    let records = parse_directory(&mut cursor)?;

    let mut set = MapResourceSet {
        map_id,
        ..MapResourceSet::default()
    };

    for record in &records {
        log::debug!(
            "map {} record {} sector {} length {} state {}",
            map_id,
            record.kind.as_str(),
            record.sector,
            record.length,
            record.state
        );
        let mut payload = disc.read_cursor(record.sector, record.length as usize)?;
        match record.kind {
            ResourceKind::Texture => {
                set.textures.push(Texture::read(&mut payload, record.state)?);
            }
            ResourceKind::MeshPrimary => {
                let mesh = Mesh::read(&mut payload, record.state)?;
                MapResourceSet::insert_default(&mut set.primary, "primary mesh", mesh)?;
            }
            ResourceKind::MeshOverride => {
                let mesh = Mesh::read(&mut payload, record.state)?;
                MapResourceSet::insert_default(&mut set.override_mesh, "override mesh", mesh)?;
            }
            ResourceKind::MeshAlt => {
                set.alt_meshes.push(Mesh::read(&mut payload, record.state)?);
            }
            ResourceKind::End => {}
        }
    }

    set.records = records;
    Ok(set)
}

/// A map merged for one requested state, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedMap {
    pub map_id: usize,
    pub state: MapState,
    pub mesh: Mesh,
    #[serde(skip)]
    pub texture: Texture,
    pub vertices: Vec<Vertex>,
    /// Translation that centers the vertex bounding box on the origin.
    pub centered_translation: [f32; 3],
}

/// Choose and merge the resources matching `state`.
///
/// The primary mesh is the base unless it is missing or invalid, in which
/// case the override is used. Only the first valid alternate mesh with an
/// exactly equal state is merged. Textures fall back to the default state.
pub fn resolve(set: &MapResourceSet, state: MapState) -> Result<ResolvedMap> {
    let base = set
        .primary
        .as_ref()
        .filter(|mesh| mesh.valid)
        .or(set.override_mesh.as_ref())
        .filter(|mesh| mesh.valid)
        .ok_or(FormatError::MissingMesh { map_id: set.map_id })?;

    let mut mesh = base.clone();
    if let Some(alt) = set
        .alt_meshes
        .iter()
        .find(|alt| alt.valid && alt.state == state)
    {
        mesh.merge(alt);
    }
    mesh.state = state;

    let texture = set
        .textures
        .iter()
        .find(|texture| texture.state == state)
        .or_else(|| set.textures.iter().find(|texture| texture.state.is_default()))
        .ok_or(FormatError::MissingTexture {
            map_id: set.map_id,
            state,
        })?
        .clone();

    let vertices = mesh.geometry.vertices();
    let centered_translation = centered_translation(&vertices);

    Ok(ResolvedMap {
        map_id: set.map_id,
        state,
        mesh,
        texture,
        vertices,
        centered_translation,
    })
}

pub fn centered_translation(vertices: &[Vertex]) -> [f32; 3] {
    if vertices.is_empty() {
        return [0.0; 3];
    }
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for vertex in vertices {
        for axis in 0..3 {
            min[axis] = min[axis].min(vertex.position[axis]);
            max[axis] = max[axis].max(vertex.position[axis]);
        }
    }
    [
        -(min[0] + max[0]) / 2.0,
        -(min[1] + max[1]) / 2.0,
        -(min[2] + max[2]) / 2.0,
    ]
}
