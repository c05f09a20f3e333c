//! Palette grid addressing and selection.
//!
//! A flat buffer of packed colors is laid out as a grid of `column_count`
//! columns. The user selects a *unit* of 1, 4 or 16 consecutive colors,
//! depending on [`SelectionGranularity`], with the pointer or arrow keys.
//!
//! The crate is UI-agnostic:
//! - pure helpers ([`compute_cell_size`], [`index_from_point`],
//!   [`selection_rect`], [`coerce_selection`], [`navigate`],
//!   [`dash_offset`]) map between color indexes, units and pixels;
//! - [`PaletteGrid`] owns the colors and a selection that is re-coerced on
//!   every write, turns [`Input`] into [`Event`]s, and describes each draw
//!   as a [`GridFrame`] for whatever renderer embeds it.
//!
//! # Quick Example
//!
//! ```
//! use swatch_grid::{
//!     Event, GridPoint, GridSettings, GridSize, Input, PaletteGrid,
//!     SelectionGranularity,
//! };
//!
//! let settings =
//!     GridSettings::default().with_granularity(SelectionGranularity::Unit4);
//! let mut grid = PaletteGrid::new(settings).with_colors(vec![0xFF00_0000; 64]);
//!
//! let events = grid
//!     .handle_input(Input::Press {
//!         point: GridPoint::new(95.0, 5.0),
//!         bounds: GridSize::new(160.0, 40.0),
//!     })
//!     .unwrap();
//!
//! assert_eq!(events[1], Event::SelectionChanged { unit: 2 });
//! assert_eq!(grid.selected_unit(), 2);
//! ```

mod color;
mod error;
mod geometry;
mod grid;
mod outline;
mod selection;
mod settings;

pub use color::{PaletteColor, index_label};
pub use error::{GridError, Result};
pub use geometry::{
    CellSize, GridPoint, GridRect, GridSize, compute_cell_size,
    index_from_point, selection_rect,
};
pub use grid::{
    ColorClick, DEFAULT_COLOR_COUNT, Event, GridCell, GridFrame, GridLayout,
    Input, PaletteGrid,
};
pub use outline::{
    DASH_LENGTH, DASH_TICK, OUTLINE_DASH, OUTLINE_SHADOW, OUTLINE_WIDTH,
    SelectionOutline, dash_offset,
};
pub use selection::{
    Direction, SelectionGranularity, coerce_selection, navigate,
};
pub use settings::GridSettings;
