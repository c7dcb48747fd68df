//! Move controller - pending destination and per-tick interpolation
//!
//! A [`MoveController`] sits on the movable piece and owns at most one pending
//! destination. Every tick the piece is pulled toward it with
//! `position.lerp(destination, speed * delta)`; once the remaining distance
//! drops below the arrival epsilon the piece snaps onto the destination and
//! the controller goes idle again.
//!
//! # Interpolation factor
//!
//! In [`InterpolationMode::Unclamped`] (the default) the factor is used as is.
//! A long frame with `speed * delta > 1` therefore overshoots past the
//! destination along the line from the current position. A later tick pulls
//! the piece back, and if large frames keep coming the piece oscillates
//! around the destination. [`InterpolationMode::Clamped`] bounds the factor
//! to `[0, 1]`, so a long frame lands exactly on the destination.
//!
//! # States
//!
//! ```text
//! Idle --retarget--> Moving --retarget--> Moving
//!                      |
//!                      +--arrival--> Idle
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Lerp speed in units per second (factor per second of elapsed time)
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;

/// Distance under which a moving piece snaps onto its destination
pub const ARRIVAL_EPSILON: f32 = 0.001;

/// How the per-tick lerp factor is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Reflect)]
pub enum InterpolationMode {
    /// `speed * delta` is used as is and may exceed 1
    #[default]
    Unclamped,
    /// `speed * delta` is clamped to `[0, 1]`
    Clamped,
}

impl InterpolationMode {
    pub fn factor(self, speed: f32, elapsed_secs: f32) -> f32 {
        let factor = speed * elapsed_secs;
        match self {
            InterpolationMode::Unclamped => factor,
            InterpolationMode::Clamped => factor.clamp(0.0, 1.0),
        }
    }
}

/// Whether a controller currently has somewhere to go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveState {
    Idle,
    Moving,
}

/// Outcome of a single [`MoveController::tick`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveStep {
    /// No destination pending; the position was not touched
    Idle,
    /// The position was interpolated toward the destination
    Advanced { factor: f32 },
    /// The position snapped onto the destination and the move finished
    Arrived { destination: Vec3 },
}

/// Drives a piece toward the last picked destination
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveController {
    /// Lerp factor per second of elapsed time
    pub speed: f32,
    /// Snap distance
    pub arrival_epsilon: f32,
    /// Added to a picked tile position before leveling to the resting height
    pub pick_offset: Vec3,
    pub mode: InterpolationMode,
    destination: Option<Vec3>,
}

impl Default for MoveController {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_SPEED, ARRIVAL_EPSILON)
    }
}

impl MoveController {
    pub fn new(speed: f32, arrival_epsilon: f32) -> Self {
        Self {
            speed,
            arrival_epsilon,
            pick_offset: Vec3::new(-0.4, 0.0, 0.0),
            mode: InterpolationMode::Unclamped,
            destination: None,
        }
    }

    pub fn with_pick_offset(mut self, offset: Vec3) -> Self {
        self.pick_offset = offset;
        self
    }

    pub fn with_mode(mut self, mode: InterpolationMode) -> Self {
        self.mode = mode;
        self
    }

    /// The pending destination, if a move is in progress
    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn state(&self) -> MoveState {
        if self.destination.is_some() {
            MoveState::Moving
        } else {
            MoveState::Idle
        }
    }

    pub fn is_moving(&self) -> bool {
        self.destination.is_some()
    }

    /// Replaces the pending destination, returning the one it overwrote
    ///
    /// There is no queue: the piece turns toward the new destination from
    /// wherever it is on the next tick.
    pub fn retarget(&mut self, destination: Vec3) -> Option<Vec3> {
        self.destination.replace(destination)
    }

    /// Retargets toward a picked tile, see [`pick_target`]
    pub fn retarget_to_tile(&mut self, tile_position: Vec3, resting_height: f32) -> Vec3 {
        let target = pick_target(tile_position, self.pick_offset, resting_height);
        self.retarget(target);
        target
    }

    /// Drops the pending destination without moving
    pub fn stop(&mut self) -> Option<Vec3> {
        self.destination.take()
    }

    /// Advances `position` by one frame of `elapsed_secs`
    pub fn tick(&mut self, position: &mut Vec3, elapsed_secs: f32) -> MoveStep {
        let Some(destination) = self.destination else {
            return MoveStep::Idle;
        };

        if position.distance(destination) < self.arrival_epsilon {
            *position = destination;
            self.destination = None;
            tracing::trace!(?destination, "move complete");
            return MoveStep::Arrived { destination };
        }

        let factor = self.mode.factor(self.speed, elapsed_secs);
        *position = position.lerp(destination, factor);
        MoveStep::Advanced { factor }
    }
}

/// Converts a picked tile's world position into a piece destination
///
/// The offset is added on every axis, then the vertical component is replaced
/// by `resting_height` so the piece keeps its height above the board.
pub fn pick_target(tile_position: Vec3, offset: Vec3, resting_height: f32) -> Vec3 {
    let mut target = tile_position + offset;
    target.y = resting_height;
    target
}
