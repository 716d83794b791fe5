//! List the resource directory of a map, or every map slot when no id is given.

use std::io::{Read, Seek};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fft_formats::maps::MAPS;
use fft_formats::{DiscImage, read_map_directory};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raw 2352-byte-sector disc image
    #[arg(long, default_value = "fft.bin")]
    bin: PathBuf,

    /// Memory-map the image instead of buffered reads
    #[arg(long, default_value_t = false)]
    mmap: bool,

    /// Map id to inspect
    map: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let Some(map_id) = args.map else {
        for map in MAPS.iter() {
            let flag = if map.valid { ' ' } else { '-' };
            println!("{:>3}{flag} {:>6}  {}", map.id, map.sector, map.name);
        }
        return Ok(());
    };

    if args.mmap {
        let mut disc = DiscImage::open_mapped(&args.bin)
            .with_context(|| format!("mapping {}", args.bin.display()))?;
        dump(&mut disc, map_id)
    } else {
        let mut disc = DiscImage::open(&args.bin)
            .with_context(|| format!("opening {}", args.bin.display()))?;
        dump(&mut disc, map_id)
    }
}

fn dump<R: Read + Seek>(disc: &mut DiscImage<R>, map_id: usize) -> Result<()> {
    let set = read_map_directory(disc, map_id)
        .with_context(|| format!("reading directory of map {map_id}"))?;

    println!("map {} ({} records)", map_id, set.records.len());
    for record in &set.records {
        println!(
            "{kind:<8} {sector:>7} {length:>8}  {state}",
            kind = record.kind.as_str(),
            sector = record.sector,
            length = record.length,
            state = record.state
        );
    }

    if let Some(mesh) = set.primary.as_ref().or(set.override_mesh.as_ref()) {
        let counts = mesh.geometry.counts();
        println!(
            "base mesh: {} tex tris, {} tex quads, {} tris, {} quads",
            counts.textured_triangles,
            counts.textured_quads,
            counts.untextured_triangles,
            counts.untextured_quads
        );
    }

    println!("states:");
    for state in set.available_states() {
        println!("  {state}");
    }
    Ok(())
}
