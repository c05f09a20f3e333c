use serde::{Deserialize, Serialize};

/// How many consecutive colors form one selectable unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SelectionGranularity {
    /// Nothing is selectable; the selection is pinned to unit 0.
    #[default]
    None,
    Unit1,
    Unit4,
    Unit16,
}

impl SelectionGranularity {
    /// Number of colors in one unit, `None` for no selection.
    pub const fn unit_size(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Unit1 => Some(1),
            Self::Unit4 => Some(4),
            Self::Unit16 => Some(16),
        }
    }

    /// Unit containing the raw color at `color_index`.
    ///
    /// `None` maps like [`SelectionGranularity::Unit1`], so a pointer press
    /// always resolves to a unit even when nothing is selectable.
    pub const fn unit_index(self, color_index: usize) -> usize {
        match self.unit_size() {
            Some(size) => color_index / size,
            None => color_index,
        }
    }

    /// Highest valid unit index for a buffer of `color_count` colors.
    ///
    /// Negative when the buffer is shorter than a single unit.
    pub fn max_unit(self, color_count: usize) -> i64 {
        match self.unit_size() {
            Some(size) => (color_count / size) as i64 - 1,
            None => 0,
        }
    }
}

/// Arrow-key navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Clamp a candidate unit index into `[0, max_unit]`.
pub fn coerce_selection(
    candidate: i64,
    color_count: usize,
    granularity: SelectionGranularity,
) -> usize {
    let max_unit = granularity.max_unit(color_count);
    candidate.min(max_unit).max(0) as usize
}

/// Candidate unit reached by moving one step from `current`.
///
/// The result is not clamped; pass it through [`coerce_selection`].
/// Vertical moves skip a full row of units, and do nothing when the
/// granularity selects nothing.
pub fn navigate(
    current: usize,
    direction: Direction,
    column_count: usize,
    granularity: SelectionGranularity,
) -> i64 {
    let current = current as i64;
    let row_stride = granularity
        .unit_size()
        .map(|size| (column_count / size) as i64)
        .unwrap_or(0);

    match direction {
        Direction::Left => current - 1,
        Direction::Right => current + 1,
        Direction::Up => current - row_stride,
        Direction::Down => current + row_stride,
    }
}
