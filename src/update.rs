use std::io::{self, Write};

use iced::{
    keyboard::{self, key},
    Event, Task,
};
use log::{error, info, warn};
use snepsprite::{common::PALETTE_SIZE, palette::Channel};

use crate::{
    message::Message,
    state::{Dialogue, EditorState},
};

fn emit(listing: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(listing.as_bytes()).and_then(|_| stdout.flush()) {
        error!("Error writing export: {}", e);
    }
}

fn change_channel(state: &mut EditorState, channel: Channel, value: u8) {
    let idx = state.editor.active_index() as usize;
    if let Err(e) = state.editor.set_palette_channel(idx, channel, value) {
        warn!("Unable to change color {:X}: {}", idx, e);
    }
}

pub fn update(state: &mut EditorState, message: Message) -> Task<Message> {
    match message {
        Message::Event(event) => match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => {
                state.dialogue = None;
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::ArrowRight),
                ..
            }) => {
                let idx = state.editor.active_index() as usize;
                if idx + 1 < PALETTE_SIZE {
                    let _ = state.editor.select_active_index(idx + 1);
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::ArrowLeft),
                ..
            }) => {
                let idx = state.editor.active_index() as usize;
                if idx > 0 {
                    let _ = state.editor.select_active_index(idx - 1);
                }
            }
            _ => {}
        },
        Message::NewDialogue => {
            state.dialogue = Some(Dialogue::ConfirmNew);
        }
        Message::New => {
            state.editor.reset();
            state.dialogue = None;
        }
        Message::HelpDialogue => {
            state.dialogue = Some(Dialogue::Help);
        }
        Message::HideModal => {
            state.dialogue = None;
        }
        Message::SetBlockSize(n) => {
            if let Err(e) = state.editor.set_block_size(n as usize) {
                warn!("{}", e);
            }
        }
        Message::SetExportMode(mode) => {
            state.export_mode = mode;
        }
        Message::ExportPalette => {
            info!("Exporting palette");
            emit(&state.editor.palette_listing());
        }
        Message::ExportPatterns => {
            let mode = state.export_mode;
            info!(
                "Exporting {} tiles as {}",
                state.editor.canvas.num_tiles(),
                mode
            );
            emit(&state.editor.pattern_listing(mode));
        }
        Message::SelectColor(idx) => {
            if let Err(e) = state.editor.select_active_index(idx as usize) {
                warn!("{}", e);
            }
        }
        Message::ChangeRed(c) => change_channel(state, Channel::Red, c),
        Message::ChangeGreen(c) => change_channel(state, Channel::Green, c),
        Message::ChangeBlue(c) => change_channel(state, Channel::Blue, c),
        Message::PaintPixel(x, y) => {
            if let Err(e) = state.editor.paint(x as usize, y as usize) {
                warn!("Unable to paint: {}", e);
            }
        }
        Message::PickPixel(x, y) => match state.editor.pick(x as usize, y as usize) {
            Ok(idx) => info!("Picked color {:X}", idx),
            Err(e) => warn!("Unable to pick color: {}", e),
        },
    }
    Task::none()
}
