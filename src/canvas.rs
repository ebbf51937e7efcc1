// Module for the N×N block of 8x8 tiles being edited.
//
// All tiles live in one flat buffer sized for the largest block, one tile
// after another (64 indices each, row-major within the tile). The block size
// only changes how canvas coordinates map into that buffer.
use log::info;

use crate::common::{
    check_color_idx, ColorIdx, Error, PixelCoord, Result, MAX_BLOCK_SIZE, TILE_PIXELS, TILE_WIDTH,
};

const STORAGE_SIZE: usize = MAX_BLOCK_SIZE * MAX_BLOCK_SIZE * TILE_PIXELS;

/// Maps a pixel position on an N×N block canvas to its offset in per-tile
/// storage. Tiles are numbered left to right, top to bottom.
pub fn linear_index(block_size: usize, x: usize, y: usize) -> usize {
    let tile_col = x / TILE_WIDTH;
    let tile_row = y / TILE_WIDTH;
    let tile_num = tile_row * block_size + tile_col;
    tile_num * TILE_PIXELS + (y % TILE_WIDTH) * TILE_WIDTH + x % TILE_WIDTH
}

/// Inverse of [`linear_index`]: canvas position of a storage offset.
pub fn canvas_position(block_size: usize, offset: usize) -> (usize, usize) {
    let tile_num = offset / TILE_PIXELS;
    let local = offset % TILE_PIXELS;
    let x = (tile_num % block_size) * TILE_WIDTH + local % TILE_WIDTH;
    let y = (tile_num / block_size) * TILE_WIDTH + local / TILE_WIDTH;
    (x, y)
}

pub fn check_block_size(block_size: usize) -> Result<usize> {
    if (1..=MAX_BLOCK_SIZE).contains(&block_size) {
        Ok(block_size)
    } else {
        Err(Error::BlockSize(block_size))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCanvas {
    block_size: usize,
    pixels: Box<[ColorIdx]>,
}

impl Default for TileCanvas {
    fn default() -> Self {
        Self {
            block_size: 1,
            pixels: vec![0; STORAGE_SIZE].into_boxed_slice(),
        }
    }
}

impl TileCanvas {
    pub fn new(block_size: usize) -> Result<Self> {
        Ok(Self {
            block_size: check_block_size(block_size)?,
            ..Self::default()
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Reinterprets the existing storage under a new block size. No pixel is
    /// moved or cleared, so tiles beyond the first appear rearranged.
    pub fn set_block_size(&mut self, block_size: usize) -> Result<()> {
        self.block_size = check_block_size(block_size)?;
        info!("Block size set to {0}x{0}", block_size);
        Ok(())
    }

    /// Width (and height) of the canvas in pixels.
    pub fn size(&self) -> usize {
        self.block_size * TILE_WIDTH
    }

    pub fn num_tiles(&self) -> usize {
        self.block_size * self.block_size
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        let size = self.size();
        if x >= size || y >= size {
            return Err(Error::PixelOutOfBounds { x, y, size });
        }
        Ok(linear_index(self.block_size, x, y))
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<ColorIdx> {
        Ok(self.pixels[self.offset(x, y)?])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color_idx: usize) -> Result<()> {
        let color_idx = check_color_idx(color_idx)?;
        let offset = self.offset(x, y)?;
        self.pixels[offset] = color_idx;
        Ok(())
    }

    /// Color indices of the visible canvas in display order (row-major over
    /// the whole block), for rendering.
    pub fn rows(&self) -> impl Iterator<Item = (PixelCoord, PixelCoord, ColorIdx)> + '_ {
        let size = self.size();
        (0..size).flat_map(move |y| {
            (0..size).map(move |x| {
                let idx = self.pixels[linear_index(self.block_size, x, y)];
                (x as PixelCoord, y as PixelCoord, idx)
            })
        })
    }

    /// The 64 indices of tile `tile_num`, in storage order.
    pub fn tile(&self, tile_num: usize) -> &[ColorIdx] {
        &self.pixels[tile_num * TILE_PIXELS..(tile_num + 1) * TILE_PIXELS]
    }

    /// Tiles of the current block, in storage order.
    pub fn tiles(&self) -> impl Iterator<Item = &[ColorIdx]> {
        self.pixels[..self.num_tiles() * TILE_PIXELS].chunks_exact(TILE_PIXELS)
    }

    /// The whole backing buffer, including tiles outside the current block.
    pub fn storage(&self) -> &[ColorIdx] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }
}
