use std::io;

use thiserror::Error;

use crate::record::MapState;

/// Failures raised while decoding data from the disc image.
///
/// Every variant is fatal for the request that produced it. Conditions the
/// caller is expected to branch on (unused events, unknown opcodes, missing
/// optional resources) are modelled as values instead.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("disc read failed at sector {sector}: {source}")]
    Io {
        sector: u32,
        #[source]
        source: io::Error,
    },
    #[error("read of {width} bytes at offset {offset:#x} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error("{what} count {count} exceeds maximum of {max}")]
    CapacityExceeded {
        what: &'static str,
        count: usize,
        max: usize,
    },
    #[error("{what} pointer {pointer:#x} lies outside buffer of {len} bytes")]
    InvalidPointer {
        what: &'static str,
        pointer: usize,
        len: usize,
    },
    #[error("resource record type {0:#06x} is unknown")]
    UnknownResourceType(u16),
    #[error("weather value {0} is unknown")]
    InvalidWeather(u8),
    #[error("time value {0} is unknown")]
    InvalidTime(u8),
    #[error("map {0} has no resource directory")]
    UnknownMap(usize),
    #[error("{what} resource tagged with non-default state {state}")]
    UnexpectedState { what: &'static str, state: MapState },
    #[error("map directory lists more than one {0} resource")]
    DuplicateResource(&'static str),
    #[error("map {map_id} has no valid mesh")]
    MissingMesh { map_id: usize },
    #[error("map {map_id} has no texture for state {state} or the default state")]
    MissingTexture { map_id: usize, state: MapState },
}

pub type Result<T, E = FormatError> = std::result::Result<T, E>;
