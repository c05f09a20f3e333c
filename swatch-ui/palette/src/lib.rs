//! Palette selector widget for [`iced`].
//!
//! [`PaletteSelector`] draws a [`PaletteGrid`] on a canvas: one filled
//! swatch per color, optional hex index labels, and an animated dashed
//! outline around the selected unit. The widget never mutates the grid;
//! it publishes [`Input`] values that the application hands to
//! [`PaletteGrid::handle_input`].
//!
//! The dashes advance with the `elapsed` time passed in by the
//! application, typically from an [`iced::time::every`] subscription
//! ticking at [`DASH_TICK`].
//!
//! See `examples/palette_selector.rs` for a complete runnable example.

mod convert;
mod view;

pub use swatch_grid::{
    ColorClick, DASH_TICK, Direction, Event, GridSettings, Input,
    PaletteColor, PaletteGrid, SelectionGranularity,
};
pub use view::{PaletteSelector, SelectorState};
