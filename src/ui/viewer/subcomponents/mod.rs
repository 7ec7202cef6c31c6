// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── drag      - Input normalizer: one drag session, rotate or pan
//!     ├── zoom      - Scale + pan offset, mode arbitration
//!     ├── autoplay  - Timed frame advance state machine
//!     └── overlay   - Controls visibility from cursor enter/leave
//! ```

pub mod autoplay;
pub mod drag;
pub mod overlay;
pub mod zoom;
