//! Fixed-function fragment lighting state for register-driven GPUs.
//!
//! A [`LightEnvironment`] owns up to eight [`LightState`] slots plus the
//! material, scene ambient and per-pass LUT configuration. Every setter marks
//! exactly the register region it affects; [`LightEnvironment::flush`] emits
//! the packed words for dirty regions only and clears what it emitted.
//! [`LightLut`] / [`LightLutDa`] synthesize the 256-entry lookup tables the
//! hardware samples.
#![no_std]

extern crate alloc;

pub mod env;
pub mod error;
pub mod gpu;
pub mod light;
pub mod lut;
pub mod material;
pub mod math;

pub use env::{EnvDirty, LightEnvironment, LutInputConfig, ShadowMode, MAX_LIGHTS};
pub use error::LightingError;
pub use gpu::{DriverError, EnvHandle, LightHandle, LightingDriver, RegisterLog};
pub use fraglight_hal::{RegisterSink, RegisterWrite};
pub use fraglight_registers::{
    BumpModeE as BumpMode, FresnelSelE as FresnelSelector, LutIdE as LutId,
    LutInputE as LutInput,
};
pub use light::{LightDirty, LightId, LightState};
pub use lut::{LightLut, LightLutDa, LUT_SIZE};
pub use material::Material;
