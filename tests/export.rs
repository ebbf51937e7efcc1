use snepsprite::{
    canvas::linear_index,
    planar::{decode_tile, encode_tiles, TILE_BYTES},
    sketch::parse_sketch,
    Editor, ExportMode,
};

fn hex_values(listing: &str) -> Vec<u64> {
    listing
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|s| s.strip_prefix("0x"))
        .map(|s| u64::from_str_radix(s, 16).unwrap())
        .collect()
}

#[test]
fn test_paint_then_export_bytes() {
    let mut editor = Editor::new(2).unwrap();
    editor.select_active_index(0xF).unwrap();
    for x in 0..8 {
        for y in 0..8 {
            editor.paint(x, y).unwrap();
        }
    }
    editor.select_active_index(0x1).unwrap();
    editor.paint(8, 0).unwrap(); // tile 1, column 0
    editor.paint(15, 1).unwrap(); // tile 1, column 7

    let values = hex_values(&editor.pattern_listing(ExportMode::Bytes));
    assert_eq!(values.len(), 4 * TILE_BYTES);
    // Tile 0 is solid 0xF.
    assert!(values[..TILE_BYTES].iter().all(|&v| v == 0xFF));
    // Tile 1: row 0 has bit 0 in column 0, row 1 in column 7.
    assert_eq!(&values[TILE_BYTES..TILE_BYTES + 8], &[0x80, 0, 0, 0, 0x01, 0, 0, 0]);
    assert!(values[TILE_BYTES + 8..].iter().all(|&v| v == 0));
}

#[test]
fn test_word_listing_matches_byte_listing() {
    let mut editor = Editor::new(1).unwrap();
    for (i, c) in [3usize, 5, 9, 12].iter().enumerate() {
        editor.set_pixel(i * 2, i, *c).unwrap();
    }
    let bytes = hex_values(&editor.pattern_listing(ExportMode::Bytes));
    let words = hex_values(&editor.pattern_listing(ExportMode::Words));
    assert_eq!(words.len(), 8);
    for (row, word) in words.iter().enumerate() {
        let planes = &bytes[row * 4..row * 4 + 4];
        let packed = planes[0] | planes[1] << 8 | planes[2] << 16 | planes[3] << 24;
        assert_eq!(*word, packed);
    }
}

#[test]
fn test_block_size_round_trip_keeps_export() {
    let mut editor = Editor::new(1).unwrap();
    editor.set_pixel(2, 5, 0xA).unwrap();
    let before = editor.pattern_listing(ExportMode::Bytes);
    let storage = editor.canvas.storage().to_vec();
    editor.set_block_size(2).unwrap();
    assert_eq!(editor.canvas.storage(), &storage[..]);
    assert_eq!(editor.canvas.pixel(2, 5).unwrap(), 0xA);
    editor.set_block_size(1).unwrap();
    assert_eq!(editor.pattern_listing(ExportMode::Bytes), before);
}

#[test]
fn test_sketch_to_hardware_bytes() {
    let mut sketch = String::new();
    for y in 0..16 {
        for x in 0..16 {
            sketch.push_str(&format!("{:x}", (x + y) % 16));
        }
        sketch.push('\n');
    }
    let canvas = parse_sketch(&sketch, None).unwrap();
    assert_eq!(canvas.block_size(), 2);
    assert_eq!(canvas.storage()[linear_index(2, 9, 0)], 9);

    let bytes = encode_tiles(canvas.tiles());
    assert_eq!(bytes.len(), 4 * TILE_BYTES);
    for (tile_num, chunk) in bytes.chunks_exact(TILE_BYTES).enumerate() {
        assert_eq!(&decode_tile(chunk)[..], canvas.tile(tile_num));
    }
}

#[test]
fn test_palette_listing_has_sixteen_entries() {
    let mut editor = Editor::default();
    editor.set_palette_entry(15, 0xFF).unwrap();
    let values = hex_values(&editor.palette_listing());
    assert_eq!(values.len(), 16);
    assert_eq!(values[15], 0x3F);
    assert!(editor.set_palette_entry(16, 0).is_err());
}
