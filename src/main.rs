use anyhow::Result;
use clap::Parser;
use iced::{Subscription, Task, Theme};
use message::Message;
use snepsprite::ExportMode;
use state::EditorState;

mod message;
mod state;
mod update;
mod view;

#[derive(Parser, Debug)]
#[command(about = "Tile and palette editor for 4bpp planar console graphics")]
struct Args {
    /// Tiles per edge of the editing block
    #[arg(long, default_value_t = 2)]
    block_size: usize,

    /// Export tile patterns as 32-bit words instead of bytes
    #[arg(long)]
    words: bool,
}

fn theme(_state: &EditorState) -> Theme {
    match dark_light::detect().unwrap_or(dark_light::Mode::Unspecified) {
        dark_light::Mode::Light => Theme::Light,
        dark_light::Mode::Dark | dark_light::Mode::Unspecified => Theme::Dark,
    }
}

fn subscription(_state: &EditorState) -> Subscription<Message> {
    iced::event::listen().map(Message::Event)
}

pub fn main() -> Result<()> {
    snepsprite::init_logging();
    let args = Args::parse();
    let export_mode = if args.words {
        ExportMode::Words
    } else {
        ExportMode::Bytes
    };
    let state = state::get_initial_state(args.block_size, export_mode)?;

    iced::application("Snepsprite", update::update, view::view)
        .font(iced_fonts::REQUIRED_FONT_BYTES)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .theme(theme)
        .subscription(subscription)
        .window_size((720.0, 640.0))
        .run_with(move || (state, Task::none()))?;
    Ok(())
}
