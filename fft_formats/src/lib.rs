pub mod cursor;
pub mod disc;
pub mod error;
pub mod lighting;
pub mod map;
pub mod maps;
pub mod mesh;
pub mod record;
pub mod texture;

pub use cursor::ByteCursor;
pub use disc::{DiscImage, SectorLayout};
pub use error::{FormatError, Result};
pub use lighting::{Light, Lighting};
pub use map::{MapResourceSet, ResolvedMap, read_directory_at, read_map_directory, resolve};
pub use maps::{MapDescriptor, map_descriptor, valid_maps};
pub use mesh::{Geometry, Mesh, PolygonCounts, Vertex};
pub use record::{MapState, ResourceKind, ResourceRecord, Time, Weather};
pub use texture::{Palette, Texture};
