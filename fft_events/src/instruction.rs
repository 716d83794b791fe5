use fft_formats::{ByteCursor, Result};
use serde::Serialize;

use crate::opcode::{EVENT_END, OpcodeDescriptor, OperandWidth, opcode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operand {
    Byte(u8),
    Word(u16),
}

impl Operand {
    pub fn value(self) -> u16 {
        match self {
            Operand::Byte(value) => u16::from(value),
            Operand::Word(value) => value,
        }
    }
}

/// One decoded bytecode instruction. Offsets are relative to the start of
/// the decoded region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Instruction {
    Known {
        offset: usize,
        descriptor: &'static OpcodeDescriptor,
        operands: Vec<Operand>,
    },
    /// Opcode byte with no table entry; decoding stops here.
    Unknown { offset: usize, opcode: u8 },
    /// Operands run past the end of the region; decoding stops here.
    Truncated {
        offset: usize,
        descriptor: &'static OpcodeDescriptor,
    },
}

impl Instruction {
    pub fn offset(&self) -> usize {
        match self {
            Instruction::Known { offset, .. }
            | Instruction::Unknown { offset, .. }
            | Instruction::Truncated { offset, .. } => *offset,
        }
    }

    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::Known { descriptor, .. } | Instruction::Truncated { descriptor, .. } => {
                descriptor.opcode
            }
            Instruction::Unknown { opcode, .. } => *opcode,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Instruction::Known { descriptor, .. } | Instruction::Truncated { descriptor, .. } => {
                descriptor.name
            }
            Instruction::Unknown { .. } => "Unknown",
        }
    }

    /// Encoded size including the opcode byte.
    pub fn size(&self) -> usize {
        match self {
            Instruction::Known { descriptor, .. } => 1 + descriptor.operand_bytes(),
            Instruction::Unknown { .. } | Instruction::Truncated { .. } => 1,
        }
    }

    /// True for markers that ended the stream early.
    pub fn is_terminal_marker(&self) -> bool {
        !matches!(self, Instruction::Known { .. })
    }
}

/// Walk `region` as a table-driven instruction stream.
///
/// Stops at the end of the region, after `EventEnd`, or at the first
/// unknown or truncated instruction, which is kept as the final element.
pub fn decode_instructions(region: &[u8]) -> Vec<Instruction> {
    let mut cursor = ByteCursor::new(region.to_vec());
    let mut instructions = Vec::new();

    while cursor.remaining() > 0 {
        let offset = cursor.position();
        let Ok(byte) = cursor.read_u8() else {
            break;
        };

        let Some(descriptor) = opcode(byte) else {
            instructions.push(Instruction::Unknown {
                offset,
                opcode: byte,
            });
            break;
        };

        let operands: Result<Vec<Operand>> = descriptor
            .operands
            .iter()
            .map(|width| read_operand(&mut cursor, *width))
            .collect();
        let Ok(operands) = operands else {
            instructions.push(Instruction::Truncated { offset, descriptor });
            break;
        };

        instructions.push(Instruction::Known {
            offset,
            descriptor,
            operands,
        });
        if byte == EVENT_END {
            break;
        }
    }

    instructions
}

fn read_operand(cursor: &mut ByteCursor, width: OperandWidth) -> Result<Operand> {
    match width {
        OperandWidth::Byte => cursor.read_u8().map(Operand::Byte),
        OperandWidth::Word => cursor.read_u16().map(Operand::Word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::OPCODES;

    #[test]
    fn decodes_operands_in_table_order() {
        // DisplayMessage, then Pause, then EventEnd and trailing garbage.
        let mut region = vec![0x10, 1, 2, 0x34, 0x12, 3, 4, 5, 0xCD, 0xAB, 0, 0, 0xFF, 0xFF, 6];
        region.extend_from_slice(&[0x16, EVENT_END, 0x10, 0x10]);

        let instructions = decode_instructions(&region);
        assert_eq!(instructions.len(), 3);

        let Instruction::Known {
            offset, operands, ..
        } = &instructions[0]
        else {
            panic!("expected known instruction, got {:?}", instructions[0]);
        };
        assert_eq!(*offset, 0);
        assert_eq!(
            operands,
            &[
                Operand::Byte(1),
                Operand::Byte(2),
                Operand::Word(0x1234),
                Operand::Byte(3),
                Operand::Byte(4),
                Operand::Byte(5),
                Operand::Word(0xABCD),
                Operand::Word(0),
                Operand::Word(0xFFFF),
                Operand::Byte(6),
            ]
        );

        assert_eq!(instructions[1].name(), "Pause");
        assert_eq!(instructions[1].offset(), 15);
        assert_eq!(instructions[2].opcode(), EVENT_END);
        assert_eq!(instructions[2].offset(), 16);
    }

    #[test]
    fn unknown_opcode_stops_the_stream() {
        let instructions = decode_instructions(&[0x16, 0x00, 0x16]);
        assert_eq!(
            instructions.last(),
            Some(&Instruction::Unknown {
                offset: 1,
                opcode: 0x00
            })
        );
        assert_eq!(instructions.len(), 2);
    }

    #[test]
    fn truncated_operands_are_marked() {
        let instructions = decode_instructions(&[0x16, 0x7E, 0x01, 0x02, 0x03]);
        assert_eq!(instructions.len(), 2);
        assert!(matches!(
            instructions[1],
            Instruction::Truncated { offset: 1, descriptor } if descriptor.opcode == 0x7E
        ));
        assert!(instructions[1].is_terminal_marker());
    }

    #[test]
    fn empty_region_has_no_instructions() {
        assert!(decode_instructions(&[]).is_empty());
    }

    #[test]
    fn consumed_bytes_match_operand_widths_for_every_opcode() {
        for descriptor in OPCODES.iter() {
            let mut region = vec![descriptor.opcode];
            region.extend((0..descriptor.operand_bytes()).map(|i| i as u8));
            // A trailing Pause shows where the next instruction starts.
            region.push(0x16);

            let instructions = decode_instructions(&region);
            let first = &instructions[0];
            assert!(
                matches!(first, Instruction::Known { operands, .. }
                    if operands.len() == descriptor.operand_count()),
                "{}",
                descriptor.name
            );
            assert_eq!(first.size(), 1 + descriptor.operand_bytes(), "{}", descriptor.name);

            if descriptor.opcode == EVENT_END {
                assert_eq!(instructions.len(), 1);
            } else {
                assert_eq!(instructions.len(), 2, "{}", descriptor.name);
                assert_eq!(instructions[1].offset(), first.size(), "{}", descriptor.name);
            }
        }
    }
}
