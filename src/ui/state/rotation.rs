// SPDX-License-Identifier: MPL-2.0
//! Rotation engine: maps horizontal drag distance to a frame index.
//!
//! The conversion is anchored: every computation starts from the frame that
//! was current when the drag began and the total delta since the anchor
//! point. Integrating small per-move deltas instead would accumulate
//! rounding error over a long drag and the sequence would visibly drift.
//!
//! Direction convention: a drag to the right advances the frame index, i.e.
//! the object turns right. Keyboard stepping follows the same convention.

pub use crate::config::FULL_ROTATION_DISTANCE;

/// Frames advanced per logical pixel of horizontal drag.
///
/// Dragging across [`FULL_ROTATION_DISTANCE`] pixels traverses all `N`
/// frames, one full virtual turn.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sensitivity(frame_count: usize) -> f32 {
    frame_count as f32 / FULL_ROTATION_DISTANCE
}

/// Computes the frame shown after dragging `delta_x` pixels from a session
/// that started on `anchor_frame`.
///
/// The result is always in `[0, frame_count)`. `frame_count` must be
/// non-zero; callers guard the empty sequence before any drag math runs.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn frame_for_drag(anchor_frame: usize, delta_x: f32, frame_count: usize) -> usize {
    debug_assert!(frame_count > 0);

    let frame_delta = (delta_x * sensitivity(frame_count)).round() as i64;
    wrap(anchor_frame as i64 + frame_delta, frame_count)
}

/// Steps `delta` whole frames from `current`, wrapping in both directions.
#[must_use]
pub fn step_frame(current: usize, delta: i64, frame_count: usize) -> usize {
    debug_assert!(frame_count > 0);

    wrap(current as i64 + delta, frame_count)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn wrap(frame: i64, frame_count: usize) -> usize {
    frame.rem_euclid(frame_count as i64) as usize
}
