use std::fmt;

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::error::{FormatError, Result};

/// Size of the buffer read for a map's resource directory.
pub const DIRECTORY_FILE_SIZE: usize = 2388;
pub const RECORD_SIZE: usize = 20;
pub const RECORD_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Time {
    #[default]
    Day,
    Night,
}

impl Time {
    pub fn from_raw(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Time::Day),
            1 => Ok(Time::Night),
            other => Err(FormatError::InvalidTime(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Time::Day => "Day",
            Time::Night => "Night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Weather {
    #[default]
    None,
    NoneAlt,
    Normal,
    Strong,
    VeryStrong,
}

impl Weather {
    pub const ALL: [Weather; 5] = [
        Weather::None,
        Weather::NoneAlt,
        Weather::Normal,
        Weather::Strong,
        Weather::VeryStrong,
    ];

    pub fn from_raw(value: u8) -> Result<Self> {
        Weather::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(FormatError::InvalidWeather(value))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weather::None => "None",
            Weather::NoneAlt => "NoneAlt",
            Weather::Normal => "Normal",
            Weather::Strong => "Strong",
            Weather::VeryStrong => "VeryStrong",
        }
    }
}

/// Time, weather and layout a resource applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct MapState {
    pub time: Time,
    pub weather: Weather,
    pub layout: u8,
}

impl MapState {
    pub const DEFAULT: MapState = MapState {
        time: Time::Day,
        weather: Weather::None,
        layout: 0,
    };

    pub fn new(time: Time, weather: Weather, layout: u8) -> Self {
        MapState {
            time,
            weather,
            layout,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == MapState::DEFAULT
    }
}

impl fmt::Display for MapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/L{}",
            self.time.as_str(),
            self.weather.as_str(),
            self.layout
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    Texture,
    MeshPrimary,
    MeshOverride,
    MeshAlt,
    End,
}

impl ResourceKind {
    pub fn from_raw(value: u16) -> Result<Self> {
        match value {
            0x1701 => Ok(ResourceKind::Texture),
            0x2E01 => Ok(ResourceKind::MeshPrimary),
            0x2F01 => Ok(ResourceKind::MeshOverride),
            0x3001 => Ok(ResourceKind::MeshAlt),
            0x3101 => Ok(ResourceKind::End),
            other => Err(FormatError::UnknownResourceType(other)),
        }
    }

    pub fn raw(self) -> u16 {
        match self {
            ResourceKind::Texture => 0x1701,
            ResourceKind::MeshPrimary => 0x2E01,
            ResourceKind::MeshOverride => 0x2F01,
            ResourceKind::MeshAlt => 0x3001,
            ResourceKind::End => 0x3101,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Texture => "Texture",
            ResourceKind::MeshPrimary => "Primary",
            ResourceKind::MeshOverride => "Override",
            ResourceKind::MeshAlt => "Alt",
            ResourceKind::End => "End",
        }
    }
}

/// One entry of a map's resource directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub kind: ResourceKind,
    pub sector: u32,
    pub length: u32,
    pub state: MapState,
    #[serde(skip)]
    pub raw: [u8; RECORD_SIZE],
}

impl ResourceRecord {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let mut raw = [0u8; RECORD_SIZE];
        raw.copy_from_slice(&cursor.read_bytes(RECORD_SIZE)?);

        let kind = ResourceKind::from_raw(u16::from_le_bytes([raw[4], raw[5]]))?;
        let sector = u32::from(u16::from_le_bytes([raw[8], raw[9]]));
        let length = u32::from_le_bytes([raw[12], raw[13], raw[14], raw[15]]);

        // The sentinel's state bits carry no meaning.
        let state = if kind == ResourceKind::End {
            MapState::DEFAULT
        } else {
            let time = Time::from_raw((raw[3] >> 7) & 0x1)?;
            let weather = Weather::from_raw((raw[3] >> 4) & 0x7)?;
            MapState::new(time, weather, raw[2])
        };

        Ok(ResourceRecord {
            kind,
            sector,
            length,
            state,
            raw,
        })
    }
}

/// Read records until the `End` sentinel. The sentinel is not returned.
pub fn parse_directory(cursor: &mut ByteCursor) -> Result<Vec<ResourceRecord>> {
    let mut records = Vec::new();
    loop {
        let record = ResourceRecord::read(cursor)?;
        if record.kind == ResourceKind::End {
            return Ok(records);
        }
        if records.len() == RECORD_CAPACITY {
            return Err(FormatError::CapacityExceeded {
                what: "resource record",
                count: RECORD_CAPACITY + 1,
                max: RECORD_CAPACITY,
            });
        }
        records.push(record);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn encode_record(
        kind: ResourceKind,
        sector: u16,
        length: u32,
        state: MapState,
    ) -> [u8; RECORD_SIZE] {
        let mut raw = [0u8; RECORD_SIZE];
        raw[0] = 0x22;
        raw[2] = state.layout;
        let weather = Weather::ALL.iter().position(|w| *w == state.weather).unwrap() as u8;
        raw[3] = ((state.time == Time::Night) as u8) << 7 | weather << 4;
        raw[4..6].copy_from_slice(&kind.raw().to_le_bytes());
        raw[8..10].copy_from_slice(&sector.to_le_bytes());
        raw[12..16].copy_from_slice(&length.to_le_bytes());
        raw
    }

    #[test]
    fn decodes_record_fields() {
        let state = MapState::new(Time::Night, Weather::Strong, 2);
        let raw = encode_record(ResourceKind::MeshAlt, 0x1234, 0xABCDE, state);
        let mut cursor = ByteCursor::new(raw.to_vec());
        let record = ResourceRecord::read(&mut cursor).unwrap();
        assert_eq!(record.kind, ResourceKind::MeshAlt);
        assert_eq!(record.sector, 0x1234);
        assert_eq!(record.length, 0xABCDE);
        assert_eq!(record.state, state);
        assert_eq!(record.raw, raw);
        assert_eq!(record.state.to_string(), "Night/Strong/L2");
    }

    #[test]
    fn stops_at_end_sentinel() {
        let mut data = Vec::new();
        let default = MapState::DEFAULT;
        data.extend_from_slice(&encode_record(ResourceKind::Texture, 10, 131072, default));
        data.extend_from_slice(&encode_record(ResourceKind::MeshPrimary, 20, 4000, default));
        data.extend_from_slice(&encode_record(ResourceKind::End, 0, 0, default));
        // Garbage after the sentinel must never be parsed.
        data.extend_from_slice(&[0xFF; RECORD_SIZE]);

        let mut cursor = ByteCursor::new(data);
        let records = parse_directory(&mut cursor).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.kind != ResourceKind::End));
        assert_eq!(cursor.position(), 3 * RECORD_SIZE);
    }

    #[test]
    fn accepts_directory_at_capacity() {
        let mut data = Vec::new();
        for _ in 0..RECORD_CAPACITY {
            let record = encode_record(ResourceKind::Texture, 1, 1, MapState::DEFAULT);
            data.extend_from_slice(&record);
        }
        data.extend_from_slice(&encode_record(ResourceKind::End, 0, 0, MapState::DEFAULT));
        let records = parse_directory(&mut ByteCursor::new(data)).unwrap();
        assert_eq!(records.len(), RECORD_CAPACITY);
    }

    #[test]
    fn rejects_directory_over_capacity() {
        let mut data = Vec::new();
        for _ in 0..=RECORD_CAPACITY {
            let record = encode_record(ResourceKind::Texture, 1, 1, MapState::DEFAULT);
            data.extend_from_slice(&record);
        }
        data.extend_from_slice(&encode_record(ResourceKind::End, 0, 0, MapState::DEFAULT));
        let err = parse_directory(&mut ByteCursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            FormatError::CapacityExceeded {
                max: RECORD_CAPACITY,
                ..
            }
        ));
    }

    #[test]
    fn missing_sentinel_is_out_of_bounds() {
        let data = encode_record(ResourceKind::Texture, 1, 1, MapState::DEFAULT).to_vec();
        let err = parse_directory(&mut ByteCursor::new(data)).unwrap_err();
        assert!(matches!(err, FormatError::OutOfBounds { .. }));
    }

    #[test]
    fn unknown_type_and_weather_are_rejected() {
        let mut raw = encode_record(ResourceKind::Texture, 1, 1, MapState::DEFAULT);
        raw[4..6].copy_from_slice(&0x1702u16.to_le_bytes());
        assert!(matches!(
            ResourceRecord::read(&mut ByteCursor::new(raw.to_vec())),
            Err(FormatError::UnknownResourceType(0x1702))
        ));

        let mut raw = encode_record(ResourceKind::Texture, 1, 1, MapState::DEFAULT);
        raw[3] = 0x70;
        assert!(matches!(
            ResourceRecord::read(&mut ByteCursor::new(raw.to_vec())),
            Err(FormatError::InvalidWeather(7))
        ));
    }
}
