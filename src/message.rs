use snepsprite::{
    common::{ColorIdx, ColorValue, PixelCoord},
    ExportMode,
};

#[derive(Debug, Clone)]
pub enum Message {
    Event(iced::Event),
    NewDialogue,
    New,
    HelpDialogue,
    HideModal,
    SetBlockSize(u8),
    SetExportMode(ExportMode),
    ExportPalette,
    ExportPatterns,
    SelectColor(ColorIdx),
    ChangeRed(ColorValue),
    ChangeGreen(ColorValue),
    ChangeBlue(ColorValue),
    PaintPixel(PixelCoord, PixelCoord),
    PickPixel(PixelCoord, PixelCoord),
}
