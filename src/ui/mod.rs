// SPDX-License-Identifier: MPL-2.0
//! User interface layer: pure interaction state and the viewer component.

pub mod state;
pub mod viewer;
