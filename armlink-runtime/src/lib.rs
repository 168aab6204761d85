// Copyright (C) 2024 Armlink Contributors
// All rights reserved.

/// The `armlink` library provides the stateful simulation layer of the
/// arm simulator: the motion controller, the grasp manager, the sequence
/// recorder and player, and the session that owns them.
///
/// The simulation is single threaded and single stepped. One logical tick
/// per frame is invoked synchronously by the owning loop; no component
/// suspends, blocks or spawns background work. All state is owned by the
/// session and mutated only within a tick, so there is no locking
/// discipline.
pub mod grasp;
pub mod motion;
pub mod scene;
pub mod sequence;
pub mod session;

mod config;
mod error;

pub use self::config::Profile;
pub use self::error::{Error, Result};

pub use armlink_core as core;

#[macro_use]
extern crate log;

pub mod consts {
    /// Armlink runtime version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Nominal tick rate of the simulation, ticks per second.
    pub const TICK_RATE: u64 = 60;

    /// Default maximum angular speed, radians per tick.
    pub const DEFAULT_MAX_STEP: f32 = 0.02;

    /// Convergence tolerance on each axis, radians.
    pub const ANGLE_TOLERANCE: f32 = 0.01;

    /// Minimum end effector height above the ground plane.
    pub const FLOOR_CLEARANCE: f32 = 0.1;
}
