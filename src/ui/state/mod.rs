// SPDX-License-Identifier: MPL-2.0
//! Pure viewer state types, free of widget concerns.

pub mod drag;
pub mod rotation;
pub mod zoom;

pub use drag::{DragMode, DragState};
pub use zoom::{ZoomPanState, ZoomScale};
