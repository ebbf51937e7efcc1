pub mod canvas;
pub mod common;
pub mod editor;
pub mod export;
pub mod helpers;
pub mod palette;
pub mod planar;
pub mod sketch;

pub use crate::editor::Editor;
pub use crate::planar::ExportMode;

/// Logs through `env_logger`, at info level for this crate unless `RUST_LOG`
/// says otherwise.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_module("snepsprite", log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
