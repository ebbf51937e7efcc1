use log::info;

use crate::{
    canvas::TileCanvas,
    common::{check_color_idx, ColorIdx, ColorRGB, RawColor, Result},
    export::{palette_listing, pattern_listing},
    palette::{Channel, Palette},
    planar::ExportMode,
};

/// Everything the artist is working on: the palette, the tile block and the
/// color that the next paint will use.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    pub palette: Palette,
    pub canvas: TileCanvas,
    active_idx: ColorIdx,
}

impl Editor {
    pub fn new(block_size: usize) -> Result<Self> {
        Ok(Self {
            canvas: TileCanvas::new(block_size)?,
            ..Self::default()
        })
    }

    pub fn active_index(&self) -> ColorIdx {
        self.active_idx
    }

    pub fn select_active_index(&mut self, idx: usize) -> Result<()> {
        self.active_idx = check_color_idx(idx)?;
        Ok(())
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, idx: usize) -> Result<()> {
        self.canvas.set_pixel(x, y, idx)
    }

    /// Paints with the active color.
    pub fn paint(&mut self, x: usize, y: usize) -> Result<()> {
        self.canvas.set_pixel(x, y, self.active_idx as usize)
    }

    /// Makes the color under (x, y) the active one.
    pub fn pick(&mut self, x: usize, y: usize) -> Result<ColorIdx> {
        self.active_idx = self.canvas.pixel(x, y)?;
        Ok(self.active_idx)
    }

    pub fn set_block_size(&mut self, block_size: usize) -> Result<()> {
        self.canvas.set_block_size(block_size)
    }

    pub fn set_palette_entry(&mut self, idx: usize, raw: RawColor) -> Result<()> {
        self.palette.set(idx, raw)
    }

    pub fn set_palette_channel(&mut self, idx: usize, channel: Channel, value: u8) -> Result<()> {
        self.palette.set_channel(idx, channel, value)
    }

    pub fn display_color(&self, idx: usize, emphasis: u8) -> Result<ColorRGB> {
        self.palette.display_color(idx, emphasis)
    }

    /// Restores the default palette and blanks every tile. The block size is
    /// kept.
    pub fn reset(&mut self) {
        info!("Resetting palette and tiles");
        self.palette = Palette::default();
        self.canvas.clear();
        self.active_idx = 0;
    }

    pub fn palette_listing(&self) -> String {
        palette_listing(&self.palette)
    }

    pub fn pattern_listing(&self, mode: ExportMode) -> String {
        pattern_listing(&self.canvas, mode)
    }
}
