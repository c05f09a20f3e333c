use std::time::Duration;

use iced::widget::canvas::{
    self, Canvas, Frame, Geometry, LineDash, Path, Stroke, Text,
};
use iced::{Color, Element, Font, Length, Pixels, Point, Rectangle, Theme};
use iced::{keyboard, mouse};
use log::debug;
use swatch_grid::{
    GridCell, GridPoint, GridSize, Input, OUTLINE_DASH, OUTLINE_SHADOW,
    OUTLINE_WIDTH, PaletteColor, PaletteGrid, SelectionOutline,
};

use crate::convert::{
    DASH_SEGMENTS, dash_offset_pixels, direction_for_key, rect_origin,
    rect_size, to_color,
};

const LABEL_SIZE: f32 = 11.0;
const LABEL_INSET: f32 = 2.0;

type InputAction<'a, Message> = dyn Fn(Input) -> Message + 'a;

/// Canvas view of a [`PaletteGrid`].
///
/// Drawing is read-only: pointer presses and arrow keys are published as
/// [`Input`] values through [`PaletteSelector::on_input`], and the
/// application feeds them back into [`PaletteGrid::handle_input`].
pub struct PaletteSelector<'a, Message> {
    grid: &'a PaletteGrid,
    elapsed: Duration,
    on_input: Option<Box<InputAction<'a, Message>>>,
}

impl<'a, Message> PaletteSelector<'a, Message> {
    pub fn new(grid: &'a PaletteGrid) -> Self {
        Self {
            grid,
            elapsed: Duration::ZERO,
            on_input: None,
        }
    }

    /// Time since the selector was shown; drives the outline dashes.
    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Emit a message for every pointer press and arrow key.
    pub fn on_input(
        mut self,
        on_input: impl Fn(Input) -> Message + 'a,
    ) -> Self {
        self.on_input = Some(Box::new(on_input));
        self
    }

    /// Build the `Element` for the selector.
    ///
    /// Fixed block sizes produce a fixed-size canvas, otherwise the canvas
    /// fills the available space.
    pub fn view(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let (width, height) = match self.grid.preferred_size() {
            Some(size) => {
                (Length::Fixed(size.width), Length::Fixed(size.height))
            },
            None => (Length::Fill, Length::Fill),
        };

        Canvas::new(self).width(width).height(height).into()
    }

    fn publish(&self, input: Input) -> Option<canvas::Action<Message>> {
        let on_input = self.on_input.as_ref()?;
        Some(canvas::Action::publish(on_input(input)).and_capture())
    }
}

/// Per-widget state kept by the canvas between events.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorState {
    is_focused: bool,
}

impl<Message> canvas::Program<Message> for PaletteSelector<'_, Message> {
    type State = SelectorState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let grid_frame = match self
            .grid
            .frame(GridSize::new(bounds.width, bounds.height), self.elapsed)
        {
            Ok(grid_frame) => grid_frame,
            Err(err) => {
                debug!("palette selector not drawn: {err}");
                return Vec::new();
            },
        };

        let mut frame = Frame::new(renderer, bounds.size());
        for cell in &grid_frame.cells {
            draw_cell(&mut frame, cell);
        }

        if let Some(outline) = grid_frame.selection {
            draw_outline(&mut frame, &outline);
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(
                mouse::Button::Left,
            )) => {
                let Some(position) = cursor.position_in(bounds) else {
                    state.is_focused = false;
                    return None;
                };
                state.is_focused = true;

                self.publish(Input::Press {
                    point: GridPoint::new(position.x, position.y),
                    bounds: GridSize::new(bounds.width, bounds.height),
                })
            },
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key, ..
            }) if state.is_focused => {
                let direction = direction_for_key(key)?;
                self.publish(Input::Key(direction))
            },
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.on_input.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Idle
        }
    }
}

fn draw_cell(frame: &mut Frame, cell: &GridCell) {
    frame.fill_rectangle(
        rect_origin(&cell.rect),
        rect_size(&cell.rect),
        to_color(cell.color),
    );

    let Some(label) = cell.label.as_ref() else {
        return;
    };

    // White label over a one pixel black outline.
    let origin = rect_origin(&cell.rect);
    let position = Point::new(origin.x + LABEL_INSET, origin.y);
    for (dx, dy) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
        frame.fill_text(label_text(
            label,
            Point::new(position.x + dx, position.y + dy),
            Color::BLACK,
        ));
    }
    frame.fill_text(label_text(label, position, Color::WHITE));
}

fn label_text(content: &str, position: Point, color: Color) -> Text {
    Text {
        content: content.to_string(),
        position,
        color,
        size: Pixels(LABEL_SIZE),
        font: Font::MONOSPACE,
        ..Default::default()
    }
}

fn draw_outline(frame: &mut Frame, outline: &SelectionOutline) {
    let path =
        Path::rectangle(rect_origin(&outline.rect), rect_size(&outline.rect));

    frame.stroke(
        &path,
        Stroke::default()
            .with_color(to_color(PaletteColor(OUTLINE_SHADOW)))
            .with_width(OUTLINE_WIDTH),
    );
    frame.stroke(
        &path,
        Stroke {
            line_dash: LineDash {
                segments: &DASH_SEGMENTS,
                offset: dash_offset_pixels(outline.dash_offset),
            },
            ..Stroke::default()
                .with_color(to_color(PaletteColor(OUTLINE_DASH)))
                .with_width(OUTLINE_WIDTH)
        },
    );
}
