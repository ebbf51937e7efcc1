// Module for displaying the 16 colors of the palette and editing the active one
use iced::{
    alignment::{Horizontal, Vertical},
    mouse,
    widget::{canvas, column, row, text, Row},
    Element, Size,
};
use iced_aw::number_input;
use snepsprite::{
    common::{ColorIdx, PALETTE_SIZE},
    palette::{channels, Palette},
};

use crate::{message::Message, state::EditorState};

const LABELS: [&str; PALETTE_SIZE] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F",
];

struct ColorBox<'a> {
    palette: &'a Palette,
    thickness: f32,
    selected: bool,
    color_idx: ColorIdx,
}

impl<'a> canvas::Program<Message> for ColorBox<'a> {
    // No internal state
    type State = ();

    fn update(
        &self,
        _interaction: &mut Self::State,
        event: canvas::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if cursor.position_in(bounds).is_none() {
            return (canvas::event::Status::Ignored, None);
        };

        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                let message = match button {
                    mouse::Button::Left => Some(Message::SelectColor(self.color_idx)),
                    _ => None,
                };
                (canvas::event::Status::Captured, message)
            }
            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let emphasis = if self.selected {
            2
        } else if cursor.is_over(bounds) {
            1
        } else {
            0
        };
        let [r, g, b] = self
            .palette
            .display_color(self.color_idx as usize, emphasis)
            .unwrap_or_default();

        let thickness = self.thickness;
        let size = Size {
            width: frame.size().width - 2.0 * thickness,
            height: frame.size().height - 2.0 * thickness - 1.0,
        };
        frame.fill_rectangle(
            iced::Point {
                x: thickness,
                y: thickness,
            },
            size,
            iced::Color::from_rgb8(r, g, b),
        );

        if self.selected {
            let border_color = if theme.extended_palette().is_dark {
                iced::Color::WHITE
            } else {
                iced::Color::BLACK
            };
            let size = Size {
                width: frame.size().width - thickness,
                height: frame.size().height - thickness - 1.0,
            };
            frame.stroke_rectangle(
                iced::Point {
                    x: thickness / 2.0,
                    y: thickness / 2.0,
                },
                size,
                canvas::Stroke {
                    width: thickness,
                    style: border_color.into(),
                    ..Default::default()
                },
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

pub fn palette_bar(state: &EditorState) -> Element<Message> {
    let editor = &state.editor;
    let active = editor.active_index();

    let mut colors_row: Row<Message> = Row::new().spacing(4);
    let size = 32.0;
    for (i, label) in LABELS.iter().enumerate() {
        colors_row = colors_row.push(
            column![
                canvas(ColorBox {
                    palette: &editor.palette,
                    thickness: 2.0,
                    selected: i as ColorIdx == active,
                    color_idx: i as ColorIdx,
                })
                .width(size)
                .height(size),
                text(*label).size(12),
            ]
            .align_x(Horizontal::Center),
        );
    }

    let raw = editor.palette.get(active as usize).unwrap_or_default();
    let [red, green, blue] = channels(raw);
    let rgb_width = 60;
    let col = column![
        colors_row,
        row![
            text(format!("Color {}", LABELS[active as usize & 0xF])),
            text(format!("0x{:02x}", raw)).width(50),
            text("Red"),
            number_input(&red, 0..=3, Message::ChangeRed).width(rgb_width),
            iced::widget::Space::with_width(10),
            text("Green"),
            number_input(&green, 0..=3, Message::ChangeGreen).width(rgb_width),
            iced::widget::Space::with_width(10),
            text("Blue"),
            number_input(&blue, 0..=3, Message::ChangeBlue).width(rgb_width),
        ]
        .spacing(5)
        .align_y(Vertical::Center),
    ]
    .spacing(10)
    .align_x(Horizontal::Center);

    row![col].padding(10).into()
}
