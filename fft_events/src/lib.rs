pub mod event;
pub mod instruction;
pub mod message;
pub mod names;
pub mod opcode;
pub mod scenario;

pub use event::{Event, load_events};
pub use instruction::{Instruction, Operand, decode_instructions};
pub use message::{Message, render_text};
pub use names::{EventDescriptor, event_descriptor};
pub use opcode::{OpcodeDescriptor, OperandWidth, opcode};
pub use scenario::{Scenario, load_scenarios};
