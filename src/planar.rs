// 4bpp planar tile encoding.
//
// Each 8-pixel row becomes four bytes, one per bit of the color index
// (plane 0 holds bit 0). The leftmost pixel lands in bit 7 of each plane.
use std::fmt::Display;

use crate::common::{ColorIdx, TILE_PIXELS, TILE_WIDTH};

pub const BITPLANES: usize = 4;
pub const TILE_BYTES: usize = TILE_WIDTH * BITPLANES;

pub type RowPlanes = [u8; BITPLANES];

/// Width of each value in a pattern dump.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Four bytes per row: plane 0, 1, 2, 3.
    #[default]
    Bytes,
    /// One 32-bit word per row, plane 0 in the low byte.
    Words,
}

impl ExportMode {
    pub const ALL: [ExportMode; 2] = [ExportMode::Bytes, ExportMode::Words];
}

impl Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportMode::Bytes => write!(f, "bytes"),
            ExportMode::Words => write!(f, "words"),
        }
    }
}

pub fn encode_row(row: &[ColorIdx]) -> RowPlanes {
    let mut planes: RowPlanes = [0; BITPLANES];
    for (x, &c) in row.iter().take(TILE_WIDTH).enumerate() {
        for (b, plane) in planes.iter_mut().enumerate() {
            if (c >> b) & 1 == 1 {
                *plane |= 1 << (7 - x);
            }
        }
    }
    planes
}

pub fn decode_row(planes: RowPlanes) -> [ColorIdx; TILE_WIDTH] {
    let mut row = [0; TILE_WIDTH];
    for (x, c) in row.iter_mut().enumerate() {
        for (b, plane) in planes.iter().enumerate() {
            *c |= ((plane >> (7 - x)) & 1) << b;
        }
    }
    row
}

/// Packs a row's planes into one word with a fixed byte order, so the
/// word's memory image is plane 0, 1, 2, 3 regardless of host.
pub fn pack_word(planes: RowPlanes) -> u32 {
    u32::from_le_bytes(planes)
}

pub fn unpack_word(word: u32) -> RowPlanes {
    word.to_le_bytes()
}

/// Encodes 64 row-major indices into 8 rows of planes.
pub fn encode_tile(tile: &[ColorIdx]) -> [RowPlanes; TILE_WIDTH] {
    let mut rows = [[0; BITPLANES]; TILE_WIDTH];
    for (planes, row) in rows.iter_mut().zip(tile.chunks_exact(TILE_WIDTH)) {
        *planes = encode_row(row);
    }
    rows
}

pub fn decode_tile(data: &[u8]) -> [ColorIdx; TILE_PIXELS] {
    let mut tile = [0; TILE_PIXELS];
    for (out, chunk) in tile
        .chunks_exact_mut(TILE_WIDTH)
        .zip(data.chunks_exact(BITPLANES))
    {
        let planes = [chunk[0], chunk[1], chunk[2], chunk[3]];
        out.copy_from_slice(&decode_row(planes));
    }
    tile
}

/// Flattens tiles into the hardware byte stream (32 bytes per tile).
pub fn encode_tiles<'a>(tiles: impl IntoIterator<Item = &'a [ColorIdx]>) -> Vec<u8> {
    let mut out = vec![];
    for tile in tiles {
        for planes in encode_tile(tile) {
            out.extend(planes);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_empty_tiles() {
        for planes in encode_tile(&[0x0F; 64]) {
            assert_eq!(planes, [0xFF; 4]);
        }
        for planes in encode_tile(&[0; 64]) {
            assert_eq!(planes, [0; 4]);
        }
    }

    #[test]
    fn column_zero_is_msb() {
        let mut row = [0; 8];
        row[0] = 0b0101;
        assert_eq!(encode_row(&row), [0x80, 0x00, 0x80, 0x00]);
        let mut row = [0; 8];
        row[7] = 0b1010;
        assert_eq!(encode_row(&row), [0x00, 0x01, 0x00, 0x01]);
    }

    #[test]
    fn mixed_row() {
        let row = [0, 1, 2, 3, 4, 5, 6, 7];
        // bit 0 set at columns 1, 3, 5, 7
        // bit 1 set at columns 2, 3, 6, 7
        // bit 2 set at columns 4, 5, 6, 7
        assert_eq!(encode_row(&row), [0x55, 0x33, 0x0F, 0x00]);
        assert_eq!(decode_row([0x55, 0x33, 0x0F, 0x00]), row);
    }

    #[test]
    fn word_is_little_endian_planes() {
        assert_eq!(pack_word([0x01, 0x02, 0x03, 0x04]), 0x0403_0201);
        assert_eq!(pack_word([0xFF, 0, 0, 0]), 0xFF);
        assert_eq!(unpack_word(0x0403_0201), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn decode_reverses_encode() {
        let tile: Vec<ColorIdx> = (0..64).map(|i| (i * 7 % 16) as ColorIdx).collect();
        let bytes = encode_tiles([&tile[..]]);
        assert_eq!(bytes.len(), TILE_BYTES);
        assert_eq!(&decode_tile(&bytes)[..], &tile[..]);
    }
}
