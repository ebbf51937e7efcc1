use thiserror::Error;

pub type RawColor = u8; // Hardware color (low 6 bits: --BBGGRR)
pub type ColorValue = u8; // Display channel value (0-255)
pub type ColorIdx = u8; // Index into 4bpp palette (0-15)
pub type PixelCoord = u8; // Pixel position on the block canvas (0 to 8N-1)
pub type ColorRGB = [ColorValue; 3];

pub const PALETTE_SIZE: usize = 16;
pub const TILE_WIDTH: usize = 8;
pub const TILE_PIXELS: usize = TILE_WIDTH * TILE_WIDTH;
pub const MAX_BLOCK_SIZE: usize = 4;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("palette index {0} out of range (0-15)")]
    OutOfRange(usize),
    #[error("block size {0} not supported (1-{MAX_BLOCK_SIZE})")]
    BlockSize(usize),
    #[error("pixel ({x}, {y}) is outside the {size}x{size} canvas")]
    PixelOutOfBounds { x: usize, y: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn check_color_idx(idx: usize) -> Result<ColorIdx> {
    if idx < PALETTE_SIZE {
        Ok(idx as ColorIdx)
    } else {
        Err(Error::OutOfRange(idx))
    }
}
