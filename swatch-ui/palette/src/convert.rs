use iced::keyboard::{self, key::Named};
use iced::{Color, Point, Size};
use swatch_grid::{
    DASH_LENGTH, Direction, GridRect, OUTLINE_WIDTH, PaletteColor,
};

/// Dash and gap lengths of the selection outline, in pixels.
pub(crate) const DASH_SEGMENTS: [f32; 2] =
    [DASH_LENGTH * OUTLINE_WIDTH, DASH_LENGTH * OUTLINE_WIDTH];

pub(crate) fn to_color(color: PaletteColor) -> Color {
    Color::from_rgba8(color.r(), color.g(), color.b(), color.a() as f32 / 255.0)
}

pub(crate) fn rect_origin(rect: &GridRect) -> Point {
    Point::new(rect.x, rect.y)
}

pub(crate) fn rect_size(rect: &GridRect) -> Size {
    Size::new(rect.width, rect.height)
}

/// Dash offset in whole pixels for an offset expressed in stroke widths.
pub(crate) fn dash_offset_pixels(offset: f32) -> usize {
    (offset * OUTLINE_WIDTH).round().max(0.0) as usize
}

pub(crate) fn direction_for_key(key: &keyboard::Key) -> Option<Direction> {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(Direction::Left),
        keyboard::Key::Named(Named::ArrowRight) => Some(Direction::Right),
        keyboard::Key::Named(Named::ArrowUp) => Some(Direction::Up),
        keyboard::Key::Named(Named::ArrowDown) => Some(Direction::Down),
        _ => None,
    }
}
