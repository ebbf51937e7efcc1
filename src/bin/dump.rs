use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::info;
use snepsprite::{
    sketch::{parse_palette, parse_sketch},
    Editor, ExportMode,
};

/// Converts a text sketch of hex color indices into palette and tile
/// listings.
#[derive(Parser, Debug)]
struct Args {
    /// Sketch file to read (standard input if omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Tiles per edge of the block (derived from the row count if omitted)
    #[arg(long)]
    block_size: Option<usize>,

    /// 16 hex palette entries, comma or space separated
    #[arg(long)]
    palette: Option<String>,

    /// Export tile patterns as 32-bit words instead of bytes
    #[arg(long)]
    words: bool,

    /// Skip the palette listing
    #[arg(long)]
    no_palette: bool,

    /// Skip the tile pattern listing
    #[arg(long)]
    no_tiles: bool,
}

pub fn main() -> Result<()> {
    snepsprite::init_logging();
    let args = Args::parse();
    ensure!(
        !(args.no_palette && args.no_tiles),
        "nothing to export with both --no-palette and --no-tiles"
    );

    let mut editor = Editor::default();
    if let Some(pal) = &args.palette {
        editor.palette = parse_palette(pal).context("invalid --palette")?;
    }

    if !args.no_tiles {
        let text = match &args.input {
            Some(path) => {
                info!("Loading sketch {}", path.display());
                std::fs::read_to_string(path)
                    .with_context(|| format!("unable to read {}", path.display()))?
            }
            None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                text
            }
        };
        editor.canvas = parse_sketch(&text, args.block_size)?;
    }

    let mode = if args.words {
        ExportMode::Words
    } else {
        ExportMode::Bytes
    };
    let mut out = io::stdout().lock();
    if !args.no_palette {
        out.write_all(editor.palette_listing().as_bytes())?;
    }
    if !args.no_tiles {
        if !args.no_palette {
            writeln!(out)?;
        }
        info!("Exporting {} tiles as {}", editor.canvas.num_tiles(), mode);
        out.write_all(editor.pattern_listing(mode).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
