// SPDX-License-Identifier: MPL-2.0
//! Autoplay sub-component: a two-state machine advancing the frame on a
//! fixed cadence.
//!
//! The machine is Stopped or Running. It only owns the decision to advance;
//! the orchestrator owns the frame index, and the app derives the actual
//! timer (`iced::time::every`) from `is_running()` each update, so a Stopped
//! or unmounted viewer has no timer at all. A tick that was already in
//! flight when the machine stopped is ignored here, which is what makes drag
//! preemption race-free.

use crate::config::DEFAULT_ROTATION_SPEED_MS;
use crate::error::{Error, Result};
use std::time::Duration;

/// Interval between autoplay frame advances.
///
/// Validated at construction: a zero interval would make the scheduler spin
/// and is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSpeed(u64);

impl RotationSpeed {
    /// Creates a rotation speed from a millisecond interval.
    pub fn new(ms: u64) -> Result<Self> {
        if ms == 0 {
            return Err(Error::Config(
                "rotation speed must be a positive number of milliseconds".into(),
            ));
        }
        Ok(Self(ms))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a `Duration`.
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RotationSpeed {
    fn default() -> Self {
        Self(DEFAULT_ROTATION_SPEED_MS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Stopped,
    Running,
}

/// Autoplay sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
    speed: RotationSpeed,
}

/// Messages for the autoplay sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Explicit enable/disable toggle.
    Toggle,
    /// Force a specific phase (initial flag, reset).
    SetRunning(bool),
    /// One cadence tick elapsed.
    Tick,
    /// A drag session started; autoplay yields immediately.
    DragStarted,
}

/// Effects produced by autoplay transitions.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The machine started or stopped; the app should rebuild its timer.
    PhaseChanged(bool),
    /// Advance to the next frame.
    Advance,
}

impl State {
    /// Creates a scheduler in the given initial phase.
    #[must_use]
    pub fn new(initially_running: bool, speed: RotationSpeed) -> Self {
        Self {
            phase: if initially_running {
                Phase::Running
            } else {
                Phase::Stopped
            },
            speed,
        }
    }

    /// Handle an autoplay message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                let running = self.phase != Phase::Running;
                self.set_running(running)
            }
            Message::SetRunning(running) => self.set_running(running),
            Message::Tick => match self.phase {
                Phase::Running => Effect::Advance,
                // A tick that raced a stop transition is dropped.
                Phase::Stopped => Effect::None,
            },
            Message::DragStarted => self.set_running(false),
        }
    }

    fn set_running(&mut self, running: bool) -> Effect {
        let target = if running { Phase::Running } else { Phase::Stopped };
        if self.phase == target {
            return Effect::None;
        }
        self.phase = target;
        Effect::PhaseChanged(running)
    }

    /// Whether the machine is in the Running phase.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The configured tick interval.
    #[must_use]
    pub fn speed(&self) -> RotationSpeed {
        self.speed
    }
}
