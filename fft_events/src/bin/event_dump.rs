//! Inspect the event file and scenario table of a disc image.

use std::io::{Read, Seek, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use fft_events::{Event, Instruction, event_descriptor, load_events, load_scenarios};
use fft_formats::{DiscImage, map_descriptor};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raw 2352-byte-sector disc image
    #[arg(long, default_value = "fft.bin")]
    bin: PathBuf,

    /// Memory-map the image instead of buffered reads
    #[arg(long, default_value_t = false)]
    mmap: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every event in use
    Events,
    /// Print the messages and instructions of one event
    Event {
        id: usize,
        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List scenarios whose event is in use
    Scenarios,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.mmap {
        let mut disc = DiscImage::open_mapped(&args.bin)
            .with_context(|| format!("mapping {}", args.bin.display()))?;
        run(&mut disc, &args.command)
    } else {
        let mut disc = DiscImage::open(&args.bin)
            .with_context(|| format!("opening {}", args.bin.display()))?;
        run(&mut disc, &args.command)
    }
}

fn run<R: Read + Seek>(disc: &mut DiscImage<R>, command: &Command) -> Result<()> {
    let events = load_events(disc).context("decoding event file")?;

    match command {
        Command::Events => {
            for event in events.iter().filter(|event| event.valid) {
                let name = event.descriptor().map_or("?", |desc| desc.name);
                println!(
                    "{:#06x} {:>4} instr {:>3} msgs  {}",
                    event.id,
                    event.instruction_count(),
                    event.messages.len(),
                    name
                );
            }
        }
        Command::Event { id, json } => {
            let Some(event) = events.get(*id) else {
                bail!("event {id} is outside the event table");
            };
            if *json {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                serde_json::to_writer_pretty(&mut lock, event)?;
                writeln!(lock)?;
            } else {
                print_event(event);
            }
        }
        Command::Scenarios => {
            let scenarios = load_scenarios(disc, &events).context("decoding scenario table")?;
            for (index, scenario) in scenarios.iter().enumerate() {
                let event = event_descriptor(usize::from(scenario.event_id))
                    .map_or("?", |desc| desc.name);
                let map = map_descriptor(usize::from(scenario.map_id))
                    .map_or("?", |desc| desc.name);
                let state = scenario
                    .map_state()
                    .map_or_else(|err| err.to_string(), |state| state.to_string());
                println!(
                    "{index:>3} event {:#06x} map {:>3} {state:<18} {event} @ {map}",
                    scenario.event_id, scenario.map_id
                );
            }
        }
    }
    Ok(())
}

fn print_event(event: &Event) {
    let name = event.descriptor().map_or("?", |desc| desc.name);
    println!("event {:#06x} {name}", event.id);
    if !event.valid {
        println!("  (unused)");
        return;
    }

    println!("messages:");
    for (index, message) in event.messages.iter().enumerate() {
        println!("  [{index}] @{:#06x} {}", message.offset, message.text);
    }

    println!("instructions:");
    for instruction in &event.instructions {
        match instruction {
            Instruction::Known { operands, .. } => {
                let values: Vec<String> = operands
                    .iter()
                    .map(|operand| format!("{:#x}", operand.value()))
                    .collect();
                println!(
                    "  {:#06x} {:<20} {}",
                    instruction.offset(),
                    instruction.name(),
                    values.join(", ")
                );
            }
            Instruction::Unknown { offset, opcode } => {
                println!("  {offset:#06x} unknown opcode {opcode:#04x}");
            }
            Instruction::Truncated { offset, descriptor } => {
                println!("  {offset:#06x} {} (truncated)", descriptor.name);
            }
        }
    }
}
