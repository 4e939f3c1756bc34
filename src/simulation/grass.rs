//! Renewable grass patches.
//!
//! One patch sits in every cell for the whole run. A patch is either grown or
//! depleted with a countdown; grazing a grown patch starts the countdown again.

use serde::{Deserialize, Serialize};

/// Default number of ticks a grazed patch stays depleted.
pub const DEFAULT_REGROW_TIME: i32 = 20;

/// Growth state of a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrassState {
    /// Ready to be eaten.
    Grown,
    /// Regrowing; becomes grown once the timer reaches zero.
    Depleted {
        /// Ticks left until regrowth.
        timer: i32,
    },
}

/// A grass patch with a fixed regrowth time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrassPatch {
    /// Current growth state.
    pub state: GrassState,
    regrow_time_default: i32,
}

impl GrassPatch {
    /// Creates a patch.
    ///
    /// A patch created depleted has a timer of zero, so it regrows on its first step.
    pub fn new(grown: bool, regrow_time: i32) -> Self {
        let state = if grown {
            GrassState::Grown
        } else {
            GrassState::Depleted { timer: 0 }
        };
        Self {
            state,
            regrow_time_default: regrow_time,
        }
    }

    /// Whether the patch can be eaten.
    pub fn is_grown(&self) -> bool {
        self.state == GrassState::Grown
    }

    /// Ticks left until regrowth, zero when grown.
    pub fn regrow_timer(&self) -> i32 {
        match self.state {
            GrassState::Grown => 0,
            GrassState::Depleted { timer } => timer,
        }
    }

    /// Regrowth time set at creation.
    pub fn regrow_time_default(&self) -> i32 {
        self.regrow_time_default
    }

    /// Advances the regrowth countdown by one tick.
    pub fn step(&mut self) {
        if let GrassState::Depleted { timer } = self.state {
            let timer = timer - 1;
            self.state = if timer <= 0 {
                GrassState::Grown
            } else {
                GrassState::Depleted { timer }
            };
        }
    }

    /// Grazes the patch.
    ///
    /// Returns `true` and starts the countdown if the patch was grown. A depleted
    /// patch is left untouched and `false` is returned.
    pub fn eat(&mut self) -> bool {
        match self.state {
            GrassState::Grown => {
                self.state = GrassState::Depleted {
                    timer: self.regrow_time_default,
                };
                true
            }
            GrassState::Depleted { .. } => false,
        }
    }
}

impl Default for GrassPatch {
    fn default() -> Self {
        Self::new(true, DEFAULT_REGROW_TIME)
    }
}
