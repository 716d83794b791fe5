use std::io::{Read, Seek};

use fft_formats::{ByteCursor, DiscImage, MapState, Result, Time, Weather};
use serde::Serialize;

use crate::event::Event;
use crate::names::{EventDescriptor, event_descriptor};

/// ATTACK.OUT, which carries the scenario table.
pub const SCENARIO_FILE_SECTOR: u32 = 2448;
pub const SCENARIO_FILE_SIZE: usize = 125_956;
pub const SCENARIO_TABLE_OFFSET: usize = 0x10938;
pub const SCENARIO_COUNT: usize = 488;
pub const SCENARIO_RECORD_SIZE: usize = 24;

/// A story step: which event plays on which map, and in what conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub event_id: u16,
    pub map_id: u8,
    pub weather: u8,
    pub time: u8,
    pub entd_id: u16,
    pub next_scenario_id: u16,
}

impl Scenario {
    pub fn read(cursor: &mut ByteCursor) -> Result<Self> {
        let raw = cursor.read_bytes(SCENARIO_RECORD_SIZE)?;
        Ok(Scenario {
            event_id: u16::from_le_bytes([raw[0], raw[1]]),
            map_id: raw[2],
            weather: raw[3],
            time: raw[4],
            entd_id: u16::from_le_bytes([raw[7], raw[8]]),
            next_scenario_id: u16::from_le_bytes([raw[18], raw[19]]),
        })
    }

    /// State used to load the scenario's map. Layout is always 0.
    pub fn map_state(&self) -> Result<MapState> {
        let time = Time::from_raw(self.time)?;
        let weather = Weather::from_raw(self.weather)?;
        Ok(MapState::new(time, weather, 0))
    }

    pub fn descriptor(&self) -> Option<&'static EventDescriptor> {
        event_descriptor(usize::from(self.event_id))
    }
}

/// Read the scenario table, keeping only entries whose event is in use.
pub fn load_scenarios<R: Read + Seek>(
    disc: &mut DiscImage<R>,
    events: &[Event],
) -> Result<Vec<Scenario>> {
    let mut cursor = disc.read_cursor(SCENARIO_FILE_SECTOR, SCENARIO_FILE_SIZE)?;
    parse_scenarios(&mut cursor, events)
}

pub fn parse_scenarios(cursor: &mut ByteCursor, events: &[Event]) -> Result<Vec<Scenario>> {
    cursor.seek(SCENARIO_TABLE_OFFSET)?;

    let mut scenarios = Vec::new();
    for index in 0..SCENARIO_COUNT {
        let scenario = Scenario::read(cursor)?;
        match events.get(usize::from(scenario.event_id)) {
            Some(event) if event.valid => scenarios.push(scenario),
            Some(_) => {}
            None => log::warn!(
                "scenario {index} references event {} outside the event table",
                scenario.event_id
            ),
        }
    }

    log::debug!("kept {} of {} scenarios", scenarios.len(), SCENARIO_COUNT);
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::tests::{event_block, unused_block};
    use fft_formats::FormatError;

    fn events() -> Vec<Event> {
        (0..4)
            .map(|id| {
                let block = if id == 1 {
                    unused_block()
                } else {
                    event_block(&[], &[])
                };
                Event::from_block(id, &block).unwrap()
            })
            .collect()
    }

    fn table(event_ids: &[u16]) -> Vec<u8> {
        let mut data = vec![0u8; SCENARIO_FILE_SIZE];
        for (index, event_id) in event_ids.iter().enumerate() {
            let start = SCENARIO_TABLE_OFFSET + index * SCENARIO_RECORD_SIZE;
            let entry = &mut data[start..start + SCENARIO_RECORD_SIZE];
            entry[0..2].copy_from_slice(&event_id.to_le_bytes());
            entry[2] = 40 + index as u8;
            entry[3] = 2;
            entry[4] = 1;
            entry[7..9].copy_from_slice(&0x0180u16.to_le_bytes());
            entry[18..20].copy_from_slice(&(index as u16 + 1).to_le_bytes());
        }
        data
    }

    #[test]
    fn skips_entries_with_unused_or_missing_events() {
        // Remaining table slots are zero and reference event 0, which is valid.
        let mut cursor = ByteCursor::new(table(&[2, 1, 3, 999]));
        let scenarios = parse_scenarios(&mut cursor, &events()).unwrap();

        assert_eq!(scenarios.len(), SCENARIO_COUNT - 2);
        assert_eq!(scenarios[0].event_id, 2);
        assert_eq!(scenarios[0].map_id, 40);
        assert_eq!(scenarios[1].event_id, 3);
        assert_eq!(scenarios[1].map_id, 42);
        assert_eq!(scenarios[1].entd_id, 0x0180);
        assert_eq!(scenarios[1].next_scenario_id, 3);
        assert_eq!(scenarios[2].event_id, 0);
    }

    #[test]
    fn map_state_uses_weather_and_time() {
        let mut cursor = ByteCursor::new(table(&[2]));
        let scenario = parse_scenarios(&mut cursor, &events()).unwrap()[0];
        assert_eq!(
            scenario.map_state().unwrap(),
            MapState::new(Time::Night, Weather::Normal, 0)
        );
        assert_eq!(scenario.descriptor().map(|d| d.name), Some("Orbonne Prayer"));
    }

    #[test]
    fn map_state_rejects_unknown_time() {
        let mut cursor = ByteCursor::new(table(&[2]));
        let mut scenario = parse_scenarios(&mut cursor, &events()).unwrap()[0];
        scenario.time = 2;
        assert!(matches!(
            scenario.map_state(),
            Err(FormatError::InvalidTime(2))
        ));
    }

    #[test]
    fn short_file_is_out_of_bounds() {
        let mut data = table(&[]);
        data.truncate(SCENARIO_TABLE_OFFSET + 10 * SCENARIO_RECORD_SIZE);
        assert!(parse_scenarios(&mut ByteCursor::new(data), &events()).is_err());
    }
}
