use crate::error::{GridError, Result};
use crate::selection::SelectionGranularity;

/// Position relative to the grid's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPoint {
    pub x: f32,
    pub y: f32,
}

impl GridPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridSize {
    pub width: f32,
    pub height: f32,
}

impl GridSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in grid-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GridRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> GridPoint {
        GridPoint::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Pixel size of one color swatch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Size of one cell for a grid drawn into `available`.
///
/// A non-zero `block_size` fixes both dimensions and ignores `available`;
/// the caller is expected to size the surface to
/// `column_count * block_size` x `row_count * block_size`.
pub fn compute_cell_size(
    available: GridSize,
    column_count: usize,
    row_count: usize,
    block_size: u32,
) -> Result<CellSize> {
    if column_count == 0 || row_count == 0 {
        return Err(GridError::InvalidLayout {
            columns: column_count,
            rows: row_count,
        });
    }

    if block_size > 0 {
        let side = block_size as f32;
        return Ok(CellSize::new(side, side));
    }

    Ok(CellSize::new(
        available.width / column_count as f32,
        available.height / row_count as f32,
    ))
}

/// Raw color index of the cell under `point`.
///
/// Points outside the grid clamp to the nearest edge cell. A grid with no
/// rows, no columns or a cell that is not positive maps every point to `0`.
pub fn index_from_point(
    point: GridPoint,
    column_count: usize,
    row_count: usize,
    cell: CellSize,
) -> usize {
    if column_count == 0
        || row_count == 0
        || !is_positive(cell.width)
        || !is_positive(cell.height)
    {
        return 0;
    }

    let row = axis_index(point.y, cell.height, row_count);
    let column = axis_index(point.x, cell.width, column_count);
    row * column_count + column
}

/// `false` for zero, negatives and NaN.
fn is_positive(extent: f32) -> bool {
    extent > 0.0
}

fn axis_index(position: f32, extent: f32, count: usize) -> usize {
    // `as` saturates: NaN and negatives land on 0.
    let index = (position / extent).floor().max(0.0) as usize;
    index.min(count - 1)
}

/// Bounding rectangle of `selected_unit`, or `None` when nothing is
/// selectable.
///
/// Sixteen-color units offset their column by a single cell width while
/// spanning sixteen cells, matching the row-segment layout used by the
/// palette viewers this grid mirrors.
pub fn selection_rect(
    selected_unit: usize,
    granularity: SelectionGranularity,
    column_count: usize,
    cell: CellSize,
) -> Option<GridRect> {
    let size = granularity.unit_size()?;
    if column_count == 0 {
        return None;
    }

    let row = (selected_unit * size) / column_count;
    let units_per_row = column_count / size;
    let column = selected_unit.checked_rem(units_per_row).unwrap_or(0) as f32;
    let y = row as f32 * cell.height;

    let rect = match granularity {
        SelectionGranularity::Unit1 => GridRect::new(
            (selected_unit % column_count) as f32 * cell.width,
            y,
            cell.width,
            cell.height,
        ),
        SelectionGranularity::Unit4 => GridRect::new(
            column * cell.width * 4.0,
            y,
            cell.width * 4.0,
            cell.height,
        ),
        SelectionGranularity::Unit16 => GridRect::new(
            column * cell.width,
            y,
            cell.width * 16.0,
            cell.height,
        ),
        SelectionGranularity::None => return None,
    };

    Some(rect)
}
