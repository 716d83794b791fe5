//! Resolve a map for one time/weather/layout and write it out for a renderer.
//!
//! Produces `map.json` (vertices, lighting, translation), `texture.bin`
//! (256x1024 RGBA8 palette indices) and `palette.bin` (16x16 RGBA8).

use std::fs::{self, File};
use std::io::{BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fft_formats::{
    DiscImage, Lighting, MapState, PolygonCounts, ResolvedMap, Time, Vertex, Weather,
    read_map_directory, resolve,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Raw 2352-byte-sector disc image
    #[arg(long, default_value = "fft.bin")]
    bin: PathBuf,

    /// Memory-map the image instead of buffered reads
    #[arg(long, default_value_t = false)]
    mmap: bool,

    /// Map id to export
    #[arg(long)]
    map: usize,

    /// Request the night variant
    #[arg(long, default_value_t = false)]
    night: bool,

    /// Weather value (0 = none .. 4 = very strong)
    #[arg(long, default_value_t = 0)]
    weather: u8,

    /// Layout index
    #[arg(long, default_value_t = 0)]
    layout: u8,

    /// Output directory
    #[arg(long)]
    output: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let time = if args.night { Time::Night } else { Time::Day };
    let weather = Weather::from_raw(args.weather)?;
    let state = MapState::new(time, weather, args.layout);

    let resolved = if args.mmap {
        let mut disc = DiscImage::open_mapped(&args.bin)
            .with_context(|| format!("mapping {}", args.bin.display()))?;
        load(&mut disc, args.map, state)?
    } else {
        let mut disc = DiscImage::open(&args.bin)
            .with_context(|| format!("opening {}", args.bin.display()))?;
        load(&mut disc, args.map, state)?
    };

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let export = ExportMap::from(&resolved);
    write_json(&args.output.join("map.json"), &export, args.pretty)?;
    fs::write(args.output.join("texture.bin"), &resolved.texture.data)?;
    fs::write(args.output.join("palette.bin"), &resolved.mesh.palette.data)?;

    println!(
        "map {} {}: {} vertices -> {}",
        resolved.map_id,
        resolved.state,
        resolved.vertices.len(),
        args.output.display()
    );
    Ok(())
}

fn load<R: Read + Seek>(
    disc: &mut DiscImage<R>,
    map_id: usize,
    state: MapState,
) -> Result<ResolvedMap> {
    let set = read_map_directory(disc, map_id)
        .with_context(|| format!("reading directory of map {map_id}"))?;
    let resolved =
        resolve(&set, state).with_context(|| format!("resolving map {map_id} for {state}"))?;
    Ok(resolved)
}

fn write_json(path: &Path, export: &ExportMap<'_>, pretty: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, export)?;
    } else {
        serde_json::to_writer(&mut writer, export)?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct ExportMap<'a> {
    map_id: usize,
    state: String,
    counts: PolygonCounts,
    translation: [f32; 3],
    palette_valid: bool,
    lighting: &'a Lighting,
    vertices: &'a [Vertex],
}

impl<'a> From<&'a ResolvedMap> for ExportMap<'a> {
    fn from(resolved: &'a ResolvedMap) -> Self {
        ExportMap {
            map_id: resolved.map_id,
            state: resolved.state.to_string(),
            counts: resolved.mesh.geometry.counts(),
            translation: resolved.centered_translation,
            palette_valid: resolved.mesh.palette.valid,
            lighting: &resolved.mesh.lighting,
            vertices: &resolved.vertices,
        }
    }
}
