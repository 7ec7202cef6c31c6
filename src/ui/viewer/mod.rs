// SPDX-License-Identifier: MPL-2.0
//! Rotation viewer module responsible for rendering frames and related UI.

pub mod component;
pub mod controls;
pub mod empty_state;
pub mod pane;
pub mod subcomponents;

pub use component::{Effect, Message, State};
