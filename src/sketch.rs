// Text sketches for the headless exporter: one hex digit per pixel, one line
// per canvas row. Blank lines and `#` comments are skipped, as is whitespace
// inside a row.
use anyhow::{bail, ensure, Context, Result};
use log::debug;

use crate::{
    canvas::TileCanvas,
    common::{RawColor, MAX_BLOCK_SIZE, PALETTE_SIZE, TILE_WIDTH},
    palette::Palette,
};

pub fn parse_sketch(text: &str, block_size: Option<usize>) -> Result<TileCanvas> {
    let rows: Vec<Vec<u8>> = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| parse_row(line).with_context(|| format!("row {}", i)))
        .collect::<Result<_>>()?;

    let size = rows.len();
    let block_size = match block_size {
        Some(n) => n,
        None => {
            ensure!(
                size % TILE_WIDTH == 0 && size > 0,
                "sketch has {} rows, expected a multiple of 8",
                size
            );
            size / TILE_WIDTH
        }
    };
    ensure!(
        (1..=MAX_BLOCK_SIZE).contains(&block_size),
        "block size {} not supported (1-{})",
        block_size,
        MAX_BLOCK_SIZE
    );
    let expected = block_size * TILE_WIDTH;
    ensure!(
        size == expected,
        "sketch has {} rows, expected {}",
        size,
        expected
    );

    let mut canvas = TileCanvas::new(block_size)?;
    for (y, row) in rows.iter().enumerate() {
        ensure!(
            row.len() == expected,
            "row {} has {} pixels, expected {}",
            y,
            row.len(),
            expected
        );
        for (x, &c) in row.iter().enumerate() {
            canvas.set_pixel(x, y, c as usize)?;
        }
    }
    debug!("Parsed {0}x{0} sketch", expected);
    Ok(canvas)
}

fn parse_row(line: &str) -> Result<Vec<u8>> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_digit(16) {
            Some(d) => Ok(d as u8),
            None => bail!("invalid pixel '{}'", c),
        })
        .collect()
}

/// Parses 16 hex palette entries separated by commas or whitespace.
pub fn parse_palette(text: &str) -> Result<Palette> {
    let values: Vec<RawColor> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| -> Result<RawColor> {
            let digits = s.trim_start_matches("0x").trim_start_matches("0X");
            let value = u8::from_str_radix(digits, 16)
                .with_context(|| format!("invalid palette entry '{}'", s))?;
            ensure!(value <= 0x3F, "palette entry '{}' exceeds 6 bits", s);
            Ok(value)
        })
        .collect::<Result<_>>()?;
    let colors: [RawColor; PALETTE_SIZE] = match values.try_into() {
        Ok(colors) => colors,
        Err(values) => bail!(
            "expected {} palette entries, got {}",
            PALETTE_SIZE,
            values.len()
        ),
    };
    Ok(Palette::new(colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_rows(n: usize, width: usize) -> String {
        (0..n).map(|_| "0".repeat(width) + "\n").collect()
    }

    #[test]
    fn parses_single_tile() {
        let mut text = String::from("# corner pixels\n");
        text += "F000000A\n";
        text += &blank_rows(6, 8);
        text += "\n0000 0003\n";
        let canvas = parse_sketch(&text, None).unwrap();
        assert_eq!(canvas.block_size(), 1);
        assert_eq!(canvas.pixel(0, 0).unwrap(), 0xF);
        assert_eq!(canvas.pixel(7, 0).unwrap(), 0xA);
        assert_eq!(canvas.pixel(7, 7).unwrap(), 0x3);
    }

    #[test]
    fn block_size_from_row_count() {
        let mut text = blank_rows(8, 16);
        text += "000000000000000c\n";
        text += &blank_rows(7, 16);
        let canvas = parse_sketch(&text, None).unwrap();
        assert_eq!(canvas.block_size(), 2);
        assert_eq!(canvas.tile(3)[7], 0xC);
    }

    #[test]
    fn rejects_bad_sketches() {
        assert!(parse_sketch("", None).is_err());
        assert!(parse_sketch(&blank_rows(7, 8), None).is_err());
        assert!(parse_sketch(&blank_rows(8, 9), None).is_err());
        assert!(parse_sketch(&blank_rows(8, 8), Some(2)).is_err());
        let mut text = blank_rows(7, 8);
        text += "0000000g\n";
        assert!(parse_sketch(&text, None).is_err());
    }

    #[test]
    fn parses_palette_list() {
        let text = "00,3f,15,2a 03 0x0c 30 0f 33 3c 02 08 20 0b 06 3a";
        let pal = parse_palette(text).unwrap();
        assert_eq!(pal, Palette::default());
    }

    #[test]
    fn rejects_bad_palettes() {
        assert!(parse_palette("00 01 02").is_err());
        assert!(parse_palette(&"40 ".repeat(16)).is_err());
        assert!(parse_palette(&"zz ".repeat(16)).is_err());
    }
}
