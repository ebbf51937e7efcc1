// The 16-entry hardware palette and its conversion to display colors.
use log::debug;

use crate::{
    common::{check_color_idx, ColorRGB, RawColor, Result, PALETTE_SIZE},
    helpers::{emphasize, scale_color},
};

pub const RAW_COLOR_MASK: RawColor = 0x3F;

/// Palette loaded at startup and restored by a reset.
pub const DEFAULT_PALETTE: [RawColor; PALETTE_SIZE] = [
    0x00, 0x3F, 0x15, 0x2A, // black, white, greys
    0x03, 0x0C, 0x30, 0x0F, // red, green, blue, yellow
    0x33, 0x3C, 0x02, 0x08, // magenta, cyan, dark red, dark green
    0x20, 0x0B, 0x06, 0x3A, // dark blue, orange, brown, sky
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    fn shift(self) -> u8 {
        match self {
            Channel::Red => 0,
            Channel::Green => 2,
            Channel::Blue => 4,
        }
    }
}

/// Splits a raw hardware color into its 2-bit (red, green, blue) channels.
pub fn channels(raw: RawColor) -> [u8; 3] {
    [
        raw >> Channel::Red.shift() & 3,
        raw >> Channel::Green.shift() & 3,
        raw >> Channel::Blue.shift() & 3,
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [RawColor; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE,
        }
    }
}

impl Palette {
    pub fn new(colors: [RawColor; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Raw entries as stored, including any bits above the low 6.
    pub fn colors(&self) -> &[RawColor; PALETTE_SIZE] {
        &self.colors
    }

    /// The entry at `idx` with only its meaningful 6 bits.
    pub fn get(&self, idx: usize) -> Result<RawColor> {
        let idx = check_color_idx(idx)?;
        Ok(self.colors[idx as usize] & RAW_COLOR_MASK)
    }

    pub fn set(&mut self, idx: usize, raw: RawColor) -> Result<()> {
        let idx = check_color_idx(idx)?;
        debug!("Palette entry {:X} = 0x{:02x}", idx, raw);
        self.colors[idx as usize] = raw;
        Ok(())
    }

    /// Replaces a single 2-bit channel of an entry, keeping the others.
    pub fn set_channel(&mut self, idx: usize, channel: Channel, value: u8) -> Result<()> {
        let raw = self.get(idx)?;
        let shift = channel.shift();
        let raw = raw & !(3 << shift) | (value & 3) << shift;
        self.set(idx, raw)
    }

    /// Display color of entry `idx`. Each 2-bit channel is expanded to 8
    /// bits, then brightened toward white by `emphasis` tenths.
    pub fn display_color(&self, idx: usize, emphasis: u8) -> Result<ColorRGB> {
        Ok(to_display(self.get(idx)?, emphasis))
    }

    /// All 16 display colors at once, for per-frame rendering.
    pub fn display_colors(&self, emphasis: u8) -> [ColorRGB; PALETTE_SIZE] {
        self.colors.map(|raw| to_display(raw, emphasis))
    }
}

fn to_display(raw: RawColor, emphasis: u8) -> ColorRGB {
    channels(raw).map(|c| emphasize(scale_color(c), emphasis))
}
