mod palette;
mod tiles;

use iced::{
    alignment::Vertical,
    widget::{
        button, center, column, container, horizontal_rule, horizontal_space, mouse_area, opaque,
        pick_list, row, stack, text, Column,
    },
    Element, Font, Length, Theme,
};
use palette::palette_bar;
use snepsprite::{common::MAX_BLOCK_SIZE, ExportMode};
use tiles::tile_view;

use crate::{
    message::Message,
    state::{Dialogue, EditorState},
};

fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        iced::Color {
                            a: 0.5,
                            ..iced::Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

pub fn modal_background_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: iced::border::rounded(4)
            .color(palette.background.weak.color)
            .width(1.0),
        ..container::Style::default()
    }
}

pub fn help_view(_state: &EditorState) -> Element<Message> {
    let controls = vec![
        ("Left click", "Paint", "fill a pixel with the active color"),
        ("Right click", "Pick", "make a pixel's color the active one"),
        ("\u{2190} \u{2192}", "Cycle", "select the previous/next color"),
        ("Esc", "Close", "dismiss this dialog"),
    ];
    let mut col = Column::new();
    col = col.push(text("Essential controls:"));
    for (key, name, desc) in controls {
        col = col.push(
            row![
                text(key).width(90).font(Font {
                    weight: iced::font::Weight::ExtraBold,
                    ..Default::default()
                }),
                text(format!("{}: {}", name, desc)).width(340),
            ]
            .align_y(Vertical::Center),
        );
    }
    col = col.push(text(
        "Changing the block size re-reads the same tile data in the new \
         arrangement, so tiles may appear shuffled. Nothing is erased.",
    ));

    container(col.spacing(10))
        .width(470)
        .padding(25)
        .style(modal_background_style)
        .into()
}

pub fn confirm_new_view(_state: &EditorState) -> Element<Message> {
    container(
        column![
            text("Start over with the default palette and blank tiles?"),
            row![
                button(text("Cancel"))
                    .style(button::secondary)
                    .on_press(Message::HideModal),
                horizontal_space(),
                button(text("Clear everything"))
                    .style(button::danger)
                    .on_press(Message::New),
            ],
        ]
        .spacing(10),
    )
    .width(400)
    .padding(25)
    .style(modal_background_style)
    .into()
}

pub fn view_dialogue<'a>(
    state: &'a EditorState,
    main_view: Element<'a, Message>,
) -> Element<'a, Message> {
    if let Some(dialogue) = &state.dialogue {
        match dialogue {
            Dialogue::ConfirmNew => modal(main_view, confirm_new_view(state), Message::HideModal),
            Dialogue::Help => modal(main_view, help_view(state), Message::HideModal),
        }
    } else {
        main_view
    }
}

fn top_bar(state: &EditorState) -> Element<Message> {
    let block_sizes: Vec<u8> = (1..=MAX_BLOCK_SIZE as u8).collect();
    row![
        button(text("New"))
            .style(button::secondary)
            .on_press(Message::NewDialogue),
        text("Block"),
        pick_list(
            block_sizes,
            Some(state.editor.canvas.block_size() as u8),
            Message::SetBlockSize
        ),
        horizontal_space(),
        text("Export"),
        button(text("Palette")).on_press(Message::ExportPalette),
        button(text("Tiles")).on_press(Message::ExportPatterns),
        text("as"),
        pick_list(
            &ExportMode::ALL[..],
            Some(state.export_mode),
            Message::SetExportMode
        ),
        button(text("\u{F505}").font(iced_fonts::BOOTSTRAP_FONT))
            .style(button::secondary)
            .on_press(Message::HelpDialogue),
    ]
    .spacing(10)
    .align_y(Vertical::Center)
    .into()
}

pub fn view(state: &EditorState) -> Element<Message> {
    let main_view: Element<Message> = column![
        top_bar(state),
        horizontal_rule(1),
        tile_view(state),
        horizontal_rule(1),
        palette_bar(state),
    ]
    .padding(10)
    .spacing(10)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(iced::alignment::Horizontal::Center)
    .into();

    view_dialogue(state, main_view)
}
