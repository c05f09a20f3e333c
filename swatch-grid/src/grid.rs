use std::time::Duration;

use log::{debug, trace};

use crate::color::{PaletteColor, index_label};
use crate::error::Result;
use crate::geometry::{
    CellSize, GridPoint, GridRect, GridSize, compute_cell_size,
    index_from_point, selection_rect,
};
use crate::outline::{SelectionOutline, dash_offset};
use crate::selection::{
    Direction, SelectionGranularity, coerce_selection, navigate,
};
use crate::settings::GridSettings;

/// Color count assumed for coercion before any buffer is loaded.
pub const DEFAULT_COLOR_COUNT: usize = 256;

/// Input forwarded by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Pointer press at `point`, on a drawing surface of size `bounds`.
    Press { point: GridPoint, bounds: GridSize },
    Key(Direction),
}

/// Notifications produced while handling input or state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ColorClicked { index: usize, color: PaletteColor },
    SelectionChanged { unit: usize },
}

/// Result of resolving a pointer position against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorClick {
    pub index: usize,
    pub color: PaletteColor,
    /// Unit the raw index belongs to under the current granularity.
    pub unit: usize,
}

/// Grid geometry resolved for one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell: CellSize,
}

impl GridLayout {
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Rectangle of the cell at `index`; a layout without columns puts
    /// every cell at the origin.
    pub fn cell_rect(&self, index: usize) -> GridRect {
        let row = index.checked_div(self.columns).unwrap_or(0);
        let column = index.checked_rem(self.columns).unwrap_or(0);
        GridRect::new(
            column as f32 * self.cell.width,
            row as f32 * self.cell.height,
            self.cell.width,
            self.cell.height,
        )
    }
}

/// One swatch to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub index: usize,
    pub color: PaletteColor,
    pub rect: GridRect,
    pub label: Option<String>,
}

/// Everything a renderer needs to draw the grid once.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame {
    pub layout: GridLayout,
    pub cells: Vec<GridCell>,
    pub selection: Option<SelectionOutline>,
}

/// Palette grid with a selection that is always valid for the current
/// colors and granularity.
///
/// Every mutation that can invalidate the selection re-coerces it before
/// returning, and reports the change as [`Event::SelectionChanged`].
#[derive(Debug, Clone, Default)]
pub struct PaletteGrid {
    settings: GridSettings,
    colors: Option<Vec<u32>>,
    selected: usize,
}

impl PaletteGrid {
    pub fn new(settings: GridSettings) -> Self {
        Self {
            settings,
            colors: None,
            selected: 0,
        }
    }

    pub fn with_colors(mut self, colors: Vec<u32>) -> Self {
        self.set_colors(colors);
        self
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn colors(&self) -> Option<&[u32]> {
        self.colors.as_deref()
    }

    /// Number of loaded colors, `0` when no buffer is loaded.
    pub fn color_count(&self) -> usize {
        self.colors.as_ref().map_or(0, Vec::len)
    }

    pub fn row_count(&self) -> usize {
        self.color_count()
            .checked_div(self.settings.column_count)
            .unwrap_or(0)
    }

    pub fn selected_unit(&self) -> usize {
        self.selected
    }

    pub fn granularity(&self) -> SelectionGranularity {
        self.settings.granularity
    }

    pub fn set_settings(&mut self, settings: GridSettings) -> Option<Event> {
        self.settings = settings;
        self.recoerce()
    }

    pub fn set_colors(&mut self, colors: Vec<u32>) -> Option<Event> {
        trace!("palette buffer replaced with {} colors", colors.len());
        self.colors = Some(colors);
        self.recoerce()
    }

    pub fn clear_colors(&mut self) -> Option<Event> {
        self.colors = None;
        self.recoerce()
    }

    pub fn set_column_count(&mut self, column_count: usize) -> Option<Event> {
        self.settings.column_count = column_count;
        self.recoerce()
    }

    pub fn set_granularity(
        &mut self,
        granularity: SelectionGranularity,
    ) -> Option<Event> {
        self.settings.granularity = granularity;
        self.recoerce()
    }

    pub fn set_block_size(&mut self, block_size: u32) {
        self.settings.block_size = block_size;
    }

    pub fn set_show_indexes(&mut self, show_indexes: bool) {
        self.settings.show_indexes = show_indexes;
    }

    /// Select the unit closest to `candidate`.
    pub fn select(&mut self, candidate: i64) -> Option<Event> {
        let coerced = coerce_selection(
            candidate,
            self.coercion_color_count(),
            self.settings.granularity,
        );
        if coerced as i64 != candidate {
            debug!("palette selection {candidate} clamped to {coerced}");
        }

        if coerced == self.selected {
            return None;
        }

        self.selected = coerced;
        Some(Event::SelectionChanged { unit: coerced })
    }

    /// Move the selection one step in `direction`.
    pub fn navigate(&mut self, direction: Direction) -> Option<Event> {
        let candidate = navigate(
            self.selected,
            direction,
            self.settings.column_count,
            self.settings.granularity,
        );
        self.select(candidate)
    }

    /// Resolve pointer input and keys into events, updating the selection.
    pub fn handle_input(&mut self, input: Input) -> Result<Vec<Event>> {
        match input {
            Input::Press { point, bounds } => {
                let click = self.hit_test(point, bounds)?;
                let mut events = vec![Event::ColorClicked {
                    index: click.index,
                    color: click.color,
                }];
                events.extend(self.select(click.unit as i64));
                Ok(events)
            },
            Input::Key(direction) => {
                Ok(self.navigate(direction).into_iter().collect())
            },
        }
    }

    pub fn layout(&self, bounds: GridSize) -> Result<GridLayout> {
        let columns = self.settings.column_count;
        let rows = self.row_count();
        let cell =
            compute_cell_size(bounds, columns, rows, self.settings.block_size)?;
        Ok(GridLayout {
            columns,
            rows,
            cell,
        })
    }

    /// Size the grid wants when cells have a fixed block size.
    ///
    /// `None` when cells fit the available area or no colors are loaded.
    pub fn preferred_size(&self) -> Option<GridSize> {
        let block = self.settings.block_size;
        if block == 0 || self.colors.is_none() {
            return None;
        }
        let block = block as f32;
        Some(GridSize::new(
            self.settings.column_count as f32 * block,
            self.row_count() as f32 * block,
        ))
    }

    /// Color and unit under `point` on a surface of size `bounds`.
    pub fn hit_test(
        &self,
        point: GridPoint,
        bounds: GridSize,
    ) -> Result<ColorClick> {
        let layout = self.layout(bounds)?;
        let index =
            index_from_point(point, layout.columns, layout.rows, layout.cell);
        // A valid layout implies a loaded buffer of at least
        // `columns * rows` colors.
        let color = self
            .colors
            .as_ref()
            .and_then(|colors| colors.get(index))
            .copied()
            .map(PaletteColor)
            .unwrap_or_default();

        Ok(ColorClick {
            index,
            color,
            unit: self.settings.granularity.unit_index(index),
        })
    }

    pub fn selection_rect(&self, bounds: GridSize) -> Result<Option<GridRect>> {
        let layout = self.layout(bounds)?;
        Ok(selection_rect(
            self.selected,
            self.settings.granularity,
            layout.columns,
            layout.cell,
        ))
    }

    /// Describe one draw of the grid, `elapsed` driving the dash animation.
    pub fn frame(
        &self,
        bounds: GridSize,
        elapsed: Duration,
    ) -> Result<GridFrame> {
        let layout = self.layout(bounds)?;
        let colors = self.colors.as_deref().unwrap_or_default();
        let cells = colors
            .iter()
            .take(layout.cell_count())
            .enumerate()
            .map(|(index, &color)| GridCell {
                index,
                color: PaletteColor(color),
                rect: layout.cell_rect(index),
                label: self.settings.show_indexes.then(|| index_label(index)),
            })
            .collect();

        let selection = selection_rect(
            self.selected,
            self.settings.granularity,
            layout.columns,
            layout.cell,
        )
        .map(|rect| SelectionOutline {
            rect,
            dash_offset: dash_offset(elapsed),
        });

        Ok(GridFrame {
            layout,
            cells,
            selection,
        })
    }

    fn coercion_color_count(&self) -> usize {
        self.colors.as_ref().map_or(DEFAULT_COLOR_COUNT, Vec::len)
    }

    fn recoerce(&mut self) -> Option<Event> {
        self.select(self.selected as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    fn ramp(count: usize) -> Vec<u32> {
        (0..count as u32).map(|value| 0xFF00_0000 | value).collect()
    }

    fn grid(count: usize, granularity: SelectionGranularity) -> PaletteGrid {
        PaletteGrid::new(GridSettings::default().with_granularity(granularity))
            .with_colors(ramp(count))
    }

    const BOUNDS: GridSize = GridSize::new(160.0, 160.0);

    #[test]
    fn selection_is_clamped_on_write() {
        let mut grid = grid(256, SelectionGranularity::Unit16);
        assert_eq!(
            grid.select(20),
            Some(Event::SelectionChanged { unit: 15 })
        );
        assert_eq!(grid.selected_unit(), 15);
        assert_eq!(grid.select(15), None);
        assert_eq!(grid.select(-3), Some(Event::SelectionChanged { unit: 0 }));
    }

    #[test]
    fn shrinking_the_buffer_recoerces_selection() {
        let mut grid = grid(256, SelectionGranularity::Unit1);
        grid.select(200);
        assert_eq!(
            grid.set_colors(ramp(64)),
            Some(Event::SelectionChanged { unit: 63 })
        );
        assert_eq!(grid.selected_unit(), 63);
    }

    #[test]
    fn changing_granularity_recoerces_selection() {
        let mut grid = grid(64, SelectionGranularity::Unit1);
        grid.select(40);
        assert_eq!(
            grid.set_granularity(SelectionGranularity::Unit4),
            Some(Event::SelectionChanged { unit: 15 })
        );
        assert_eq!(
            grid.set_granularity(SelectionGranularity::None),
            Some(Event::SelectionChanged { unit: 0 })
        );
        assert_eq!(grid.set_granularity(SelectionGranularity::Unit16), None);
    }

    #[test]
    fn missing_buffer_assumes_default_color_count() {
        let mut grid = PaletteGrid::new(
            GridSettings::default().with_granularity(SelectionGranularity::Unit1),
        );
        grid.select(1000);
        assert_eq!(grid.selected_unit(), DEFAULT_COLOR_COUNT - 1);
        assert_eq!(grid.row_count(), 0);
        assert!(matches!(
            grid.layout(BOUNDS),
            Err(GridError::InvalidLayout { columns: 16, rows: 0 })
        ));
    }

    #[test]
    fn fewer_colors_than_columns_is_invalid_layout() {
        let grid = grid(8, SelectionGranularity::Unit1);
        assert_eq!(
            grid.frame(BOUNDS, Duration::ZERO),
            Err(GridError::InvalidLayout {
                columns: 16,
                rows: 0
            })
        );
    }

    #[test]
    fn zero_columns_is_invalid_layout() {
        let mut grid = grid(64, SelectionGranularity::Unit1);
        grid.set_column_count(0);
        assert_eq!(grid.row_count(), 0);
        assert!(grid.hit_test(GridPoint::new(1.0, 1.0), BOUNDS).is_err());
    }

    #[test]
    fn press_reports_click_then_selection() {
        let mut grid = grid(256, SelectionGranularity::Unit4);
        let events = grid
            .handle_input(Input::Press {
                point: GridPoint::new(55.0, 15.0),
                bounds: BOUNDS,
            })
            .unwrap();

        assert_eq!(
            events,
            vec![
                Event::ColorClicked {
                    index: 21,
                    color: PaletteColor(0xFF00_0015),
                },
                Event::SelectionChanged { unit: 5 },
            ]
        );
    }

    #[test]
    fn press_on_selected_unit_only_reports_click() {
        let mut grid = grid(256, SelectionGranularity::None);
        let events = grid
            .handle_input(Input::Press {
                point: GridPoint::new(155.0, 155.0),
                bounds: BOUNDS,
            })
            .unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::ColorClicked { index: 255, .. }));
        assert_eq!(grid.selected_unit(), 0);
    }

    #[test]
    fn arrow_keys_navigate_units() {
        let mut grid = grid(64, SelectionGranularity::Unit4);
        for expected in 1..=4 {
            let events =
                grid.handle_input(Input::Key(Direction::Right)).unwrap();
            assert_eq!(events, vec![Event::SelectionChanged { unit: expected }]);
        }
        grid.navigate(Direction::Down);
        assert_eq!(grid.selected_unit(), 8);
        grid.navigate(Direction::Down);
        grid.navigate(Direction::Down);
        assert_eq!(grid.selected_unit(), 15);
        let events = grid.handle_input(Input::Key(Direction::Right)).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn four_color_selection_rect_for_sixty_four_colors() {
        let mut grid = grid(64, SelectionGranularity::Unit4);
        grid.select(3);
        let bounds = GridSize::new(160.0, 40.0);
        let layout = grid.layout(bounds).unwrap();
        assert_eq!(layout.rows, 4);
        assert_eq!(
            grid.selection_rect(bounds).unwrap(),
            Some(GridRect::new(120.0, 0.0, 40.0, 10.0))
        );
    }

    #[test]
    fn preferred_size_follows_block_size() {
        let mut grid = grid(64, SelectionGranularity::Unit1);
        assert_eq!(grid.preferred_size(), None);
        grid.set_block_size(12);
        assert_eq!(grid.preferred_size(), Some(GridSize::new(192.0, 48.0)));
        grid.clear_colors();
        assert_eq!(grid.preferred_size(), None);
    }

    #[test]
    fn frame_lists_cells_row_major_with_labels() {
        let mut grid = grid(32, SelectionGranularity::Unit1);
        grid.set_show_indexes(true);
        grid.select(17);

        let frame = grid
            .frame(GridSize::new(160.0, 20.0), Duration::from_millis(100))
            .unwrap();

        assert_eq!(frame.cells.len(), 32);
        assert_eq!(frame.cells[17].rect, GridRect::new(10.0, 10.0, 10.0, 10.0));
        assert_eq!(frame.cells[17].label.as_deref(), Some("11"));
        assert_eq!(frame.cells[17].color, PaletteColor(0xFF00_0011));
        assert_eq!(
            frame.selection,
            Some(SelectionOutline {
                rect: GridRect::new(10.0, 10.0, 10.0, 10.0),
                dash_offset: 0.4,
            })
        );
    }

    #[test]
    fn cell_rect_without_columns_stays_at_origin() {
        let layout = GridLayout {
            columns: 0,
            rows: 0,
            cell: CellSize::new(10.0, 10.0),
        };
        assert_eq!(layout.cell_count(), 0);
        assert_eq!(layout.cell_rect(5), GridRect::new(0.0, 0.0, 10.0, 10.0));

        let layout = GridLayout {
            columns: 16,
            ..layout
        };
        assert_eq!(layout.cell_rect(35), GridRect::new(30.0, 20.0, 10.0, 10.0));
    }

    #[test]
    fn colors_expose_the_loaded_buffer() {
        let mut grid = grid(4, SelectionGranularity::Unit1);
        assert_eq!(
            grid.colors(),
            Some(&[0xFF00_0000, 0xFF00_0001, 0xFF00_0002, 0xFF00_0003][..])
        );
        grid.clear_colors();
        assert_eq!(grid.colors(), None);
        assert_eq!(grid.color_count(), 0);
    }

    #[test]
    fn frame_skips_trailing_partial_row_and_labels() {
        let grid = grid(40, SelectionGranularity::None);
        let frame = grid
            .frame(GridSize::new(160.0, 20.0), Duration::ZERO)
            .unwrap();
        assert_eq!(frame.layout.rows, 2);
        assert_eq!(frame.cells.len(), 32);
        assert!(frame.cells.iter().all(|cell| cell.label.is_none()));
        assert_eq!(frame.selection, None);
    }
}
