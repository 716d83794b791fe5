use std::io::{Read, Seek};

use fft_formats::{ByteCursor, DiscImage, FormatError, Result};
use serde::Serialize;

use crate::instruction::{Instruction, decode_instructions};
use crate::message::{Message, read_messages};
use crate::names::{EventDescriptor, event_descriptor};

pub const EVENT_FILE_SECTOR: u32 = 3707;
pub const EVENT_COUNT: usize = 500;
pub const EVENT_SIZE: usize = 8192;
pub const EVENT_FILE_SIZE: usize = EVENT_COUNT * EVENT_SIZE;
/// Text offset value marking an unused event block.
pub const EVENT_SENTINEL: u32 = 0xF2F2_F2F2;
/// All-ones text offset, also treated as an unused block.
pub const EVENT_SENTINEL_ALT: u32 = 0xFFFF_FFFF;

const CODE_START: usize = 4;

/// One 8192-byte event block: bytecode followed by dialogue text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: usize,
    pub valid: bool,
    #[serde(skip)]
    pub data: Vec<u8>,
    pub text_offset: usize,
    pub messages: Vec<Message>,
    pub instructions: Vec<Instruction>,
}

impl Event {
    fn unused(id: usize) -> Self {
        Event {
            id,
            valid: false,
            data: Vec::new(),
            text_offset: 0,
            messages: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn from_block(id: usize, block: &[u8]) -> Result<Self> {
        let mut cursor = ByteCursor::new(block.to_vec());
        let raw_offset = cursor.read_u32()?;
        if matches!(raw_offset, EVENT_SENTINEL | EVENT_SENTINEL_ALT) {
            return Ok(Event::unused(id));
        }

        let text_offset = raw_offset as usize;
        if !(CODE_START..=block.len()).contains(&text_offset) {
            return Err(FormatError::InvalidPointer {
                what: "event text",
                pointer: text_offset,
                len: block.len(),
            });
        }

        let data = cursor.into_inner();
        let messages = read_messages(&data[text_offset..], text_offset);
        let instructions = decode_instructions(&data[CODE_START..text_offset]);
        if let Some(Instruction::Unknown { offset, opcode }) = instructions.last() {
            log::warn!(
                "event {id}: unknown opcode {opcode:#04x} at offset {:#x}",
                CODE_START + offset
            );
        }

        Ok(Event {
            id,
            valid: true,
            data,
            text_offset,
            messages,
            instructions,
        })
    }

    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Bytecode region, empty for unused events.
    pub fn code(&self) -> &[u8] {
        self.data.get(CODE_START..self.text_offset).unwrap_or(&[])
    }

    /// Dialogue region, empty for unused events.
    pub fn text(&self) -> &[u8] {
        self.data.get(self.text_offset..).unwrap_or(&[])
    }

    pub fn descriptor(&self) -> Option<&'static EventDescriptor> {
        event_descriptor(self.id)
    }
}

/// Decode every block of the event file.
pub fn load_events<R: Read + Seek>(disc: &mut DiscImage<R>) -> Result<Vec<Event>> {
    let file = disc.read_file(EVENT_FILE_SECTOR, EVENT_FILE_SIZE)?;
    let events = file
        .chunks(EVENT_SIZE)
        .enumerate()
        .map(|(id, block)| Event::from_block(id, block))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "decoded {} events, {} in use",
        events.len(),
        events.iter().filter(|event| event.valid).count()
    );
    Ok(events)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::message::MESSAGE_TERMINATOR;
    use crate::opcode::EVENT_END;

    /// Event block with `code` at offset 4 and `text` right after it.
    pub(crate) fn event_block(code: &[u8], text: &[u8]) -> Vec<u8> {
        let text_offset = CODE_START + code.len();
        let mut block = vec![0u8; EVENT_SIZE];
        block[..4].copy_from_slice(&(text_offset as u32).to_le_bytes());
        block[CODE_START..text_offset].copy_from_slice(code);
        block[text_offset..text_offset + text.len()].copy_from_slice(text);
        block
    }

    pub(crate) fn unused_block() -> Vec<u8> {
        let mut block = vec![0u8; EVENT_SIZE];
        block[..4].copy_from_slice(&EVENT_SENTINEL.to_le_bytes());
        block
    }

    #[test]
    fn sentinel_block_is_unused() {
        let event = Event::from_block(3, &unused_block()).unwrap();
        assert!(!event.valid);
        assert_eq!(event.instruction_count(), 0);
        assert!(event.messages.is_empty());
        assert!(event.code().is_empty());
        assert!(event.text().is_empty());
    }

    #[test]
    fn all_ones_offset_is_unused() {
        let mut block = event_block(&[0x16, EVENT_END], &[0x0A, MESSAGE_TERMINATOR]);
        block[..4].copy_from_slice(&EVENT_SENTINEL_ALT.to_le_bytes());
        let event = Event::from_block(7, &block).unwrap();
        assert!(!event.valid);
        assert_eq!(event.id, 7);
        assert!(event.instructions.is_empty());
        assert!(event.messages.is_empty());
    }

    #[test]
    fn splits_code_and_text() {
        let code = [0x16, EVENT_END, 0x16];
        let text = [0x0A, MESSAGE_TERMINATOR, 0x0B];
        let event = Event::from_block(2, &event_block(&code, &text)).unwrap();

        assert!(event.valid);
        assert_eq!(event.text_offset, 7);
        assert_eq!(event.code(), &code);
        assert_eq!(event.text().len(), EVENT_SIZE - 7);
        assert_eq!(event.instruction_count(), 2);
        assert_eq!(event.messages.len(), 1);
        assert_eq!(event.messages[0].offset, 7);
        assert_eq!(event.messages[0].text, "A");
        assert_eq!(event.descriptor().map(|d| d.name), Some("Orbonne Prayer"));
    }

    #[test]
    fn text_offset_bounds() {
        let mut block = event_block(&[], &[]);
        let event = Event::from_block(0, &block).unwrap();
        assert!(event.instructions.is_empty());

        block[..4].copy_from_slice(&(EVENT_SIZE as u32).to_le_bytes());
        let event = Event::from_block(0, &block).unwrap();
        assert!(event.messages.is_empty());

        for bad in [0u32, 3, EVENT_SIZE as u32 + 1] {
            block[..4].copy_from_slice(&bad.to_le_bytes());
            assert!(matches!(
                Event::from_block(0, &block),
                Err(FormatError::InvalidPointer { .. })
            ));
        }
    }
}
