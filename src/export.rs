// Source listings of the palette and tile patterns, ready to paste into a
// C project.
use itertools::Itertools;

use crate::{
    canvas::TileCanvas,
    palette::Palette,
    planar::{encode_tile, pack_word, ExportMode, TILE_BYTES},
};

// Rows of a tile per output line.
const ROWS_PER_LINE: usize = 4;

pub fn palette_listing(palette: &Palette) -> String {
    let mut out = format!("const uint8_t palette [{}] = {{\n", palette.colors().len());
    for chunk in &(0..palette.colors().len()).chunks(8) {
        // Entries come from a fixed-size array, so the lookup can't fail.
        let line = chunk
            .map(|i| format!("0x{:02x}", palette.get(i).unwrap_or_default()))
            .join(", ");
        out += &format!("    {},\n", line);
    }
    out += "};\n";
    out
}

pub fn pattern_listing(canvas: &TileCanvas, mode: ExportMode) -> String {
    let num_tiles = canvas.num_tiles();
    let mut out = match mode {
        ExportMode::Bytes => format!("const uint8_t patterns [{}] = {{\n", num_tiles * TILE_BYTES),
        ExportMode::Words => format!("const uint32_t patterns [{}] = {{\n", num_tiles * 8),
    };
    for (tile_num, tile) in canvas.tiles().enumerate() {
        out += &format!("    /* Tile {} */\n", tile_num);
        for rows in encode_tile(tile).chunks(ROWS_PER_LINE) {
            let line = match mode {
                ExportMode::Bytes => rows
                    .iter()
                    .flatten()
                    .map(|b| format!("0x{:02x}", b))
                    .join(", "),
                ExportMode::Words => rows
                    .iter()
                    .map(|&planes| format!("0x{:08x}", pack_word(planes)))
                    .join(", "),
            };
            out += &format!("    {},\n", line);
        }
    }
    out += "};\n";
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_listing_masks_entries() {
        let mut pal = Palette::new([0; 16]);
        pal.set(1, 0xFF).unwrap();
        pal.set(15, 0x2A).unwrap();
        let listing = palette_listing(&pal);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "const uint8_t palette [16] = {");
        assert_eq!(
            lines[1],
            "    0x00, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,"
        );
        assert_eq!(
            lines[2],
            "    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x2a,"
        );
        assert_eq!(lines[3], "};");
    }

    #[test]
    fn byte_listing_layout() {
        let mut canvas = TileCanvas::new(1).unwrap();
        canvas.set_pixel(0, 0, 0xF).unwrap();
        let listing = pattern_listing(&canvas, ExportMode::Bytes);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "const uint8_t patterns [32] = {");
        assert_eq!(lines[1], "    /* Tile 0 */");
        assert!(lines[2].starts_with("    0x80, 0x80, 0x80, 0x80, 0x00,"));
        assert_eq!(lines[2].matches("0x").count(), 16);
        assert_eq!(lines[3].matches("0x00").count(), 16);
    }

    #[test]
    fn word_listing_layout() {
        let mut canvas = TileCanvas::new(2).unwrap();
        canvas.set_pixel(15, 0, 1).unwrap(); // tile 1, row 0, column 7
        let listing = pattern_listing(&canvas, ExportMode::Words);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "const uint32_t patterns [32] = {");
        assert_eq!(lines.len(), 1 + 4 * 3 + 1);
        assert_eq!(lines[4], "    /* Tile 1 */");
        assert_eq!(
            lines[5],
            "    0x00000001, 0x00000000, 0x00000000, 0x00000000,"
        );
    }
}
