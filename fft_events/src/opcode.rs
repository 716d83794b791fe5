//! Opcode table for the event bytecode.

use serde::Serialize;

/// Opcode that terminates an event's instruction stream.
pub const EVENT_END: u8 = 0xDB;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperandWidth {
    Byte,
    Word,
}

impl OperandWidth {
    pub fn bytes(self) -> usize {
        match self {
            OperandWidth::Byte => 1,
            OperandWidth::Word => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpcodeDescriptor {
    pub opcode: u8,
    pub name: &'static str,
    pub operands: &'static [OperandWidth],
}

impl OpcodeDescriptor {
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Bytes of operand data following the opcode byte.
    pub fn operand_bytes(&self) -> usize {
        self.operands.iter().map(|width| width.bytes()).sum()
    }
}

/// Descriptor for `byte`, or `None` when the opcode is not in the table.
pub fn opcode(byte: u8) -> Option<&'static OpcodeDescriptor> {
    OPCODES
        .binary_search_by_key(&byte, |descriptor| descriptor.opcode)
        .ok()
        .map(|index| &OPCODES[index])
}

const B: OperandWidth = OperandWidth::Byte;
const W: OperandWidth = OperandWidth::Word;

const fn op(
    opcode: u8,
    name: &'static str,
    operands: &'static [OperandWidth],
) -> OpcodeDescriptor {
    OpcodeDescriptor {
        opcode,
        name,
        operands,
    }
}

/// Sorted by opcode byte.
pub static OPCODES: [OpcodeDescriptor; 142] = [
    op(0x10, "DisplayMessage", &[B, B, W, B, B, B, W, W, W, B]),
    op(0x11, "UnitAnim", &[B, B, B, B, B]),
    op(0x12, "Unknown(0x12)", &[W]),
    op(0x13, "ChangeMapBeta", &[B, B]),
    op(0x16, "Pause", &[]),
    op(0x18, "Effect", &[W, B, B, B, B]),
    op(0x19, "Camera", &[W, W, W, W, W, W, W, W]),
    op(0x1A, "MapDarkness", &[B, B, B, B, B]),
    op(0x1B, "MapLight", &[W, W, W, W, W, W, W]),
    op(0x1C, "EventSpeed", &[B]),
    op(0x1D, "CameraFusionStart", &[]),
    op(0x1E, "CameraFusionEnd", &[]),
    op(0x1F, "Focus", &[B, B, B, B, B]),
    op(0x21, "SoundEffect", &[W]),
    op(0x22, "SwitchTrack", &[B, B, B]),
    op(0x27, "ReloadMapState", &[]),
    op(0x28, "WalkTo", &[B, B, B, B, B, B, B, B]),
    op(0x29, "WaitWalk", &[B, B]),
    op(0x2A, "BlockStart", &[]),
    op(0x2B, "BlockEnd", &[]),
    op(0x2C, "FaceUnit2", &[B, B, B, B, B, B, B]),
    op(0x2D, "RotateUnit", &[B, B, B, B, B, B]),
    op(0x2E, "Background", &[B, B, B, B, B, B, B, B]),
    op(0x31, "ColorBGBeta", &[B, B, B, B, B]),
    op(0x32, "ColorUnit", &[B, B, B, B, B, B, B]),
    op(0x33, "ColorField", &[B, B, B, B, B]),
    op(0x38, "FocusSpeed", &[W]),
    op(0x39, "Unknown(0x39)", &[]),
    op(0x3A, "Unknown(0x3A)", &[]),
    op(0x3B, "SpriteMove", &[B, B, W, W, W, B, B, W]),
    op(0x3C, "Weather", &[B, B]),
    op(0x3D, "RemoveUnit", &[B, B]),
    op(0x3E, "ColorScreen", &[B, B, B, B, B, B, B, W]),
    op(0x40, "Unknown(0x40)", &[]),
    op(0x41, "EarthquakeStart", &[B, B, B, B]),
    op(0x42, "EarthquakeEnd", &[]),
    op(0x43, "CallFunction", &[B]),
    op(0x44, "Draw", &[B, B]),
    op(0x45, "AddUnit", &[B, B, B]),
    op(0x46, "Erase", &[B, B]),
    op(0x47, "AddGhostUnit", &[B, B, B, B, B, B, B, B]),
    op(0x48, "WaitAddUnit", &[]),
    op(0x49, "AddUnitStart", &[]),
    op(0x4A, "AddUnitEnd", &[]),
    op(0x4B, "WaitAddUnitEnd", &[]),
    op(0x4C, "ChangeMap", &[B, B]),
    op(0x4D, "Reveal", &[B]),
    op(0x4E, "UnitShadow", &[B, B, B]),
    op(0x50, "PortraitCol", &[B]),
    op(0x51, "ChangeDialog", &[B, W, B, B]),
    op(0x53, "FaceUnit", &[B, B, B, B, B, B, B]),
    op(0x54, "Use3DObject", &[B, B]),
    op(0x55, "UseFieldObject", &[B, B]),
    op(0x56, "Wait3DObject", &[]),
    op(0x57, "WaitFieldObject", &[]),
    op(0x58, "LoadEVTCHR", &[B, B, B]),
    op(0x59, "SaveEVTCHR", &[B]),
    op(0x5A, "SaveEVTCHRClear", &[B]),
    op(0x5B, "LoadEVTCHRClear", &[B]),
    op(0x5F, "WarpUnit", &[B, B, B, B, B, B]),
    op(0x60, "FadeSound", &[B, B]),
    op(0x63, "CameraSpeedCurve", &[B]),
    op(0x64, "WaitRotateUnit", &[B, B]),
    op(0x65, "WaitRotateAll", &[]),
    op(0x66, "Unknown(0x66)", &[]),
    op(0x68, "MirrorSprite", &[B, B, B]),
    op(0x69, "FaceTile", &[B, B, B, B, B, B, B, B]),
    op(0x6A, "EditBGSound", &[B, B, B, B, B]),
    op(0x6B, "BGSound", &[B, B, B, B, B]),
    op(0x6D, "Unknown(0x6D)", &[B, B]),
    op(0x6E, "SpriteMoveBeta", &[B, B, W, W, W, B, B, W]),
    op(0x6F, "WaitSpriteMove", &[B, B]),
    op(0x70, "Jump", &[B, B, B, B]),
    op(0x71, "Unknown(0x71)", &[B, B]),
    op(0x73, "Unknown(0x73)", &[B, B, B, B, B, B, B, B, B, B, B, B, B, B]),
    op(0x75, "Unknown(0x75)", &[]),
    op(0x76, "DarkScreen", &[B, B, B, B, B, B]),
    op(0x77, "RemoveDarkScreen", &[]),
    op(0x78, "DisplayConditions", &[B, B]),
    op(0x79, "WalkToAnim", &[B, B, W]),
    op(0x7A, "DismissUnit", &[B, B]),
    op(0x7B, "Unknown(0x7B)", &[B, B]),
    op(0x7C, "Unknown(0x7C)", &[]),
    op(0x7D, "ShowGraphic", &[B]),
    op(0x7E, "WaitValue", &[W, W]),
    op(0x7F, "EVTCHRPalette", &[B, B, B, B]),
    op(0x80, "March", &[B, B, B]),
    op(0x82, "Unknown(0x82)", &[]),
    op(0x83, "ChangeStats", &[B, B, B, W]),
    op(0x84, "PlayTune", &[B]),
    op(0x85, "UnlockDate", &[B]),
    op(0x86, "TempWeapon", &[B, B, B]),
    op(0x87, "Arrow", &[B, B, B, B]),
    op(0x88, "MapUnfreeze", &[]),
    op(0x89, "MapFreeze", &[]),
    op(0x8A, "EffectStart", &[]),
    op(0x8B, "EffectEnd", &[]),
    op(0x8C, "UnitAnimRotate", &[B, B, B, B, B, B]),
    op(0x8E, "WaitGraphicPrint", &[]),
    op(0x8F, "Unknown(0x8F)", &[]),
    op(0x90, "Unknown(0x90)", &[]),
    op(0x91, "ShowMapTitle", &[B, B, B]),
    op(0x92, "InflictStatus", &[B, B, B, B, B]),
    op(0x93, "Unknown(0x93)", &[]),
    op(0x94, "TeleportOut", &[B, B]),
    op(0x96, "AppendMapState", &[]),
    op(0x97, "ResetPalette", &[B, B]),
    op(0x98, "TeleportIn", &[B, B]),
    op(0x99, "BlueRemoveUnit", &[B, B]),
    op(0xA0, "LTE", &[]),
    op(0xA1, "GTE", &[]),
    op(0xA2, "EQ", &[]),
    op(0xA3, "NEQ", &[]),
    op(0xA4, "LT", &[]),
    op(0xA5, "GT", &[]),
    op(0xB0, "ADD", &[W, W]),
    op(0xB1, "ADDVar", &[W, W]),
    op(0xB2, "SUB", &[W, W]),
    op(0xB3, "SUBVar", &[W, W]),
    op(0xB4, "MULT", &[W, W]),
    op(0xB5, "MULTVar", &[W, W]),
    op(0xB6, "DIV", &[W, W]),
    op(0xB7, "DIVVar", &[W, W]),
    op(0xB8, "MOD", &[W, W]),
    op(0xB9, "MODVar", &[W, W]),
    op(0xBA, "AND", &[W, W]),
    op(0xBB, "ANDVar", &[W, W]),
    op(0xBC, "OR", &[W, W]),
    op(0xBD, "ORVar", &[W, W]),
    op(0xBE, "ZERO", &[W]),
    op(0xD0, "JumpForwardIfZero", &[B]),
    op(0xD1, "JumpForward", &[B]),
    op(0xD2, "ForwardTarget", &[B]),
    op(0xD3, "JumpBack", &[B]),
    op(0xD4, "Unknown(0xD4)", &[]),
    op(0xD5, "BackTarget", &[B]),
    op(0xDB, "EventEnd", &[]),
    op(0xE3, "EventEnd2", &[]),
    op(0xE5, "WaitForInstruction", &[B, B]),
    op(0xF0, "Unknown(0xF0)", &[]),
    op(0xF1, "Wait", &[W]),
    op(0xF2, "Pad", &[]),
];
