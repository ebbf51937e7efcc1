// Module for painting the tile block pixel-by-pixel
use iced::{
    mouse,
    widget::{canvas, column, container, text},
    Element, Length, Point, Size,
};
use snepsprite::{common::PixelCoord, Editor};

use crate::{message::Message, state::EditorState};

// On-screen width of the whole block, whatever its size.
const CANVAS_WIDTH: f32 = 384.0;

struct TileBox<'a> {
    editor: &'a Editor,
    pixel_size: f32,
    thickness: f32,
}

#[derive(Default)]
struct InternalState {
    painting: bool,
    last_coords: Option<(PixelCoord, PixelCoord)>,
}

impl<'a> TileBox<'a> {
    fn pixel_at(&self, p: Point) -> Option<(PixelCoord, PixelCoord)> {
        let size = self.editor.canvas.size() as i32;
        let x = ((p.x - self.thickness) / self.pixel_size).floor() as i32;
        let y = ((p.y - self.thickness) / self.pixel_size).floor() as i32;
        if x < 0 || x >= size || y < 0 || y >= size {
            return None;
        }
        Some((x as PixelCoord, y as PixelCoord))
    }
}

impl<'a> canvas::Program<Message> for TileBox<'a> {
    type State = InternalState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let Some(p) = cursor.position_in(bounds) else {
            if let canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) = event
            {
                state.painting = false;
            }
            return (canvas::event::Status::Ignored, None);
        };
        let coords = self.pixel_at(p);

        let mut paint = false;
        match event {
            canvas::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    state.painting = true;
                    state.last_coords = None;
                    paint = true;
                }
                mouse::Event::ButtonPressed(mouse::Button::Right) => {
                    if let Some((x, y)) = coords {
                        return (
                            canvas::event::Status::Captured,
                            Some(Message::PickPixel(x, y)),
                        );
                    }
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    state.painting = false;
                }
                mouse::Event::CursorMoved { .. } => {
                    paint = state.painting && coords != state.last_coords;
                }
                mouse::Event::CursorLeft => {
                    state.painting = false;
                }
                _ => {}
            },
            _ => {}
        }

        match coords {
            Some((x, y)) if paint => {
                state.last_coords = coords;
                (
                    canvas::event::Status::Captured,
                    Some(Message::PaintPixel(x, y)),
                )
            }
            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &InternalState,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let colors = self.editor.palette.display_colors(0);
        let hover = cursor.position_in(bounds).and_then(|p| self.pixel_at(p));

        for (x, y, color_idx) in self.editor.canvas.rows() {
            let [r, g, b] = if hover == Some((x, y)) {
                self.editor
                    .display_color(color_idx as usize, 1)
                    .unwrap_or_default()
            } else {
                colors[color_idx as usize]
            };
            frame.fill_rectangle(
                Point {
                    x: x as f32 * self.pixel_size + self.thickness,
                    y: y as f32 * self.pixel_size + self.thickness,
                },
                Size {
                    width: self.pixel_size,
                    height: self.pixel_size,
                },
                iced::Color::from_rgb8(r, g, b),
            );
        }

        // Tile boundaries
        let grid_color = if theme.extended_palette().is_dark {
            iced::Color::from_rgba(1.0, 1.0, 1.0, 0.4)
        } else {
            iced::Color::from_rgba(0.0, 0.0, 0.0, 0.4)
        };
        let block_size = self.editor.canvas.block_size();
        let tile_span = self.pixel_size * 8.0;
        let end = tile_span * block_size as f32 + self.thickness;
        for i in 0..=block_size {
            let offset = i as f32 * tile_span + self.thickness;
            for path in [
                canvas::Path::line(Point::new(offset, self.thickness), Point::new(offset, end)),
                canvas::Path::line(Point::new(self.thickness, offset), Point::new(end, offset)),
            ] {
                frame.stroke(
                    &path,
                    canvas::Stroke {
                        width: self.thickness,
                        style: grid_color.into(),
                        ..Default::default()
                    },
                );
            }
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
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

pub fn tile_view(state: &EditorState) -> Element<Message> {
    let editor = &state.editor;
    let size = editor.canvas.size();
    let pixel_size = CANVAS_WIDTH / size as f32;
    let thickness = 1.0;
    let extent = CANVAS_WIDTH + 2.0 * thickness;

    container(
        column![
            canvas(TileBox {
                editor,
                pixel_size,
                thickness,
            })
            .width(extent)
            .height(extent),
            text(format!(
                "{0}x{0} pixels, {1} tile{2}",
                size,
                editor.canvas.num_tiles(),
                if editor.canvas.num_tiles() == 1 { "" } else { "s" }
            ))
            .size(12),
        ]
        .spacing(5)
        .align_x(iced::alignment::Horizontal::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
