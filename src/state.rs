use anyhow::Result;
use snepsprite::{Editor, ExportMode};

pub enum Dialogue {
    ConfirmNew,
    Help,
}

pub struct EditorState {
    // Project data:
    pub editor: Editor,

    // Temporary editor state:
    pub export_mode: ExportMode,
    pub dialogue: Option<Dialogue>,
}

pub fn get_initial_state(block_size: usize, export_mode: ExportMode) -> Result<EditorState> {
    Ok(EditorState {
        editor: Editor::new(block_size)?,
        export_mode,
        dialogue: None,
    })
}
