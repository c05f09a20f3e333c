//! Selection outline styling and dash animation.

use std::time::Duration;

use crate::geometry::GridRect;

/// Interval at which the dash pattern advances one step.
pub const DASH_TICK: Duration = Duration::from_millis(50);

/// Stroke width of both outline passes, in pixels.
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Color of the solid pass drawn under the dashes.
pub const OUTLINE_SHADOW: u32 = 0x4000_0000;

/// Color of the dashed pass.
pub const OUTLINE_DASH: u32 = 0xFFFF_FFFF;

/// Dash and gap length, in multiples of [`OUTLINE_WIDTH`].
pub const DASH_LENGTH: f32 = 2.0;

const DASH_STEPS: u64 = 100;
const STEPS_PER_UNIT: f32 = 5.0;

/// Offset of the dash pattern after `elapsed`, in multiples of
/// [`OUTLINE_WIDTH`].
///
/// Advances by 0.2 every [`DASH_TICK`] and wraps every 100 ticks.
pub fn dash_offset(elapsed: Duration) -> f32 {
    let ticks = elapsed.as_millis() / DASH_TICK.as_millis();
    (ticks % u128::from(DASH_STEPS)) as f32 / STEPS_PER_UNIT
}

/// Outline to draw around the selected unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOutline {
    pub rect: GridRect,
    pub dash_offset: f32,
}
