use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::process::Command;

use anyhow::{Context, Result};
use fft_events::event::{
    EVENT_COUNT, EVENT_FILE_SECTOR, EVENT_SENTINEL, EVENT_SENTINEL_ALT, EVENT_SIZE,
};
use fft_events::scenario::{
    SCENARIO_FILE_SECTOR, SCENARIO_FILE_SIZE, SCENARIO_RECORD_SIZE, SCENARIO_TABLE_OFFSET,
};
use fft_events::{Instruction, load_events, load_scenarios};
use fft_formats::{DiscImage, MapState, SectorLayout, Time, Weather};
use tempfile::NamedTempFile;

fn write_sectors(file: &mut File, first_sector: u32, payload: &[u8]) -> Result<()> {
    let layout = SectorLayout::MODE2_FORM1;
    for (index, chunk) in payload.chunks(layout.payload_bytes).enumerate() {
        let mut sector = vec![0u8; layout.payload_bytes];
        sector[..chunk.len()].copy_from_slice(chunk);
        file.seek(SeekFrom::Start(layout.payload_offset(first_sector + index as u32)))?;
        file.write_all(&sector)?;
    }
    Ok(())
}

/// Events 2 and 4 are in use; event 5 is all ones and every other block
/// carries the sentinel.
fn event_file() -> Vec<u8> {
    let mut file = Vec::with_capacity(EVENT_COUNT * EVENT_SIZE);
    for id in 0..EVENT_COUNT {
        let mut block = vec![0u8; EVENT_SIZE];
        match id {
            2 => {
                // Pause, Pause, EventEnd then "Hi" and "A".
                let code = [0x16, 0x16, 0xDB];
                block[..4].copy_from_slice(&7u32.to_le_bytes());
                block[4..7].copy_from_slice(&code);
                block[7..12].copy_from_slice(&[0x11, 0x2C, 0xFE, 0x0A, 0xFE]);
            }
            4 => {
                // Pause followed by an opcode with no table entry.
                block[..4].copy_from_slice(&6u32.to_le_bytes());
                block[4..6].copy_from_slice(&[0x16, 0x01]);
            }
            5 => block[..4].copy_from_slice(&EVENT_SENTINEL_ALT.to_le_bytes()),
            _ => block[..4].copy_from_slice(&EVENT_SENTINEL.to_le_bytes()),
        }
        file.extend_from_slice(&block);
    }
    file
}

fn scenario_file() -> Vec<u8> {
    let mut file = vec![0u8; SCENARIO_FILE_SIZE];
    let entries: [(u16, u8, u8, u8); 3] = [(2, 9, 3, 1), (3, 10, 0, 0), (4, 11, 0, 0)];
    for (index, (event_id, map_id, weather, time)) in entries.into_iter().enumerate() {
        let start = SCENARIO_TABLE_OFFSET + index * SCENARIO_RECORD_SIZE;
        file[start..start + 2].copy_from_slice(&event_id.to_le_bytes());
        file[start + 2] = map_id;
        file[start + 3] = weather;
        file[start + 4] = time;
    }
    file
}

fn build_disc() -> Result<NamedTempFile> {
    let mut temp = NamedTempFile::new().context("creating disc image")?;
    let file = temp.as_file_mut();
    write_sectors(file, SCENARIO_FILE_SECTOR, &scenario_file())?;
    write_sectors(file, EVENT_FILE_SECTOR, &event_file())?;
    file.flush()?;
    Ok(temp)
}

#[test]
fn loads_events_and_filters_scenarios() -> Result<()> {
    let image = build_disc()?;
    let mut disc = DiscImage::open(image.path())?;

    let events = load_events(&mut disc)?;
    assert_eq!(events.len(), EVENT_COUNT);
    assert_eq!(events.iter().filter(|event| event.valid).count(), 2);

    let unused = &events[3];
    assert!(!unused.valid);
    assert!(unused.instructions.is_empty());
    assert!(unused.messages.is_empty());
    assert!(!events[5].valid);

    let prayer = &events[2];
    assert_eq!(prayer.instruction_count(), 3);
    let texts: Vec<&str> = prayer.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["Hi", "A"]);

    let stopped = &events[4];
    assert!(matches!(
        stopped.instructions.last(),
        Some(Instruction::Unknown {
            offset: 1,
            opcode: 0x01
        })
    ));

    // Event 0 is unused, so the zeroed tail of the table drops out too.
    let scenarios = load_scenarios(&mut disc, &events)?;
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].event_id, 2);
    assert_eq!(
        scenarios[0].map_state()?,
        MapState::new(Time::Night, Weather::Strong, 0)
    );
    assert_eq!(scenarios[1].event_id, 4);
    assert_eq!(scenarios[1].map_id, 11);
    Ok(())
}

#[test]
fn event_dump_prints_messages_and_instructions() -> Result<()> {
    let image = build_disc()?;
    let output = Command::new(env!("CARGO_BIN_EXE_event_dump"))
        .arg("--bin")
        .arg(image.path())
        .args(["event", "2"])
        .output()
        .context("executing event_dump")?;
    assert!(output.status.success(), "event_dump exited with {:?}", output.status);

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Orbonne Prayer"), "{stdout}");
    assert!(stdout.contains("Hi"), "{stdout}");
    assert!(stdout.contains("EventEnd"), "{stdout}");
    Ok(())
}
