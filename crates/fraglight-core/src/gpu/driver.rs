//! Render-loop lighting context, generic over the register sink.
//!
//! Owns every [`LightEnvironment`] of the session and tracks which one is
//! bound. Environments and lights are addressed by [`EnvHandle`] and
//! [`LightHandle`] instead of references, so a light can never outlive or
//! change its environment.

use alloc::vec::Vec;

use fraglight_hal::RegisterSink;
use log::{debug, warn};

use super::registers::map;
use crate::env::LightEnvironment;
use crate::error::LightingError;
use crate::light::{LightId, LightState};

/// Error type for driver operations, generic over sink errors.
#[derive(Debug, thiserror::Error)]
pub enum DriverError<E: core::fmt::Debug> {
    /// The register sink rejected a write.
    #[error("register sink error: {0:?}")]
    Transport(E),
    /// Invalid lighting configuration.
    #[error(transparent)]
    Lighting(LightingError),
}

impl<E: core::fmt::Debug> From<E> for DriverError<E> {
    fn from(e: E) -> Self {
        DriverError::Transport(e)
    }
}

/// Index of an environment owned by a [`LightingDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvHandle(usize);

impl EnvHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Durable identity of a light: its environment plus its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightHandle {
    pub env: EnvHandle,
    pub light: LightId,
}

/// Lighting context for one render loop. Owns a sink that receives every
/// register write.
pub struct LightingDriver<S: RegisterSink> {
    sink: S,
    envs: Vec<LightEnvironment>,
    bound: Option<EnvHandle>,
    /// Environment whose state the hardware currently holds.
    uploaded: Option<EnvHandle>,
    /// Last lighting stage enable written, `None` before the first bind.
    stage_enabled: Option<bool>,
}

impl<S: RegisterSink> LightingDriver<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            envs: Vec::new(),
            bound: None,
            uploaded: None,
            stage_enabled: None,
        }
    }

    /// Create a new environment in [`LightEnvironment::init`] state.
    pub fn create_environment(&mut self) -> EnvHandle {
        self.envs.push(LightEnvironment::init());
        EnvHandle(self.envs.len() - 1)
    }

    pub fn environment(&self, env: EnvHandle) -> Option<&LightEnvironment> {
        self.envs.get(env.0)
    }

    pub fn environment_mut(&mut self, env: EnvHandle) -> Option<&mut LightEnvironment> {
        self.envs.get_mut(env.0)
    }

    /// Register a light in `env`.
    pub fn add_light(&mut self, env: EnvHandle) -> Result<LightHandle, LightingError> {
        let light = self.env_mut(env)?.add_light()?;
        Ok(LightHandle { env, light })
    }

    pub fn light(&self, handle: LightHandle) -> Option<&LightState> {
        self.environment(handle.env)?.light(handle.light)
    }

    pub fn light_mut(&mut self, handle: LightHandle) -> Option<&mut LightState> {
        self.environment_mut(handle.env)?.light_mut(handle.light)
    }

    /// Select the environment used by subsequent draws. `None` turns the
    /// fragment lighting stage off. Neither environment's stored state is
    /// touched; a newly bound environment is fully re-uploaded on the next
    /// [`flush`](Self::flush).
    pub fn bind(&mut self, env: Option<EnvHandle>) -> Result<(), DriverError<S::Error>> {
        if let Some(handle) = env {
            self.env_mut(handle).map_err(DriverError::Lighting)?;
        }
        self.bound = env;
        self.set_stage_enabled(env.is_some())?;
        Ok(())
    }

    pub fn bound(&self) -> Option<EnvHandle> {
        self.bound
    }

    /// Upload the bound environment's dirty state. Returns the number of
    /// register writes issued (0 when nothing is bound).
    pub fn flush(&mut self) -> Result<usize, DriverError<S::Error>> {
        let Some(handle) = self.bound else {
            return Ok(0);
        };
        let rebound = self.uploaded != Some(handle);
        let env = lookup(&mut self.envs, handle).map_err(DriverError::Lighting)?;

        if rebound {
            debug!("environment {} replaces hardware state", handle.0);
            env.invalidate();
        }
        if env.enabled_light_count() == 0 {
            warn!("environment {} is bound with no enabled light", handle.0);
        }

        let count = env.flush_to(&mut self.sink)?;
        self.uploaded = Some(handle);
        Ok(count)
    }

    /// Get a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the underlying sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the driver and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn env_mut(&mut self, handle: EnvHandle) -> Result<&mut LightEnvironment, LightingError> {
        lookup(&mut self.envs, handle)
    }

    fn set_stage_enabled(&mut self, enabled: bool) -> Result<(), S::Error> {
        if self.stage_enabled == Some(enabled) {
            return Ok(());
        }
        self.sink
            .write_register(map::LIGHTING_ENABLE, u32::from(enabled))?;
        self.sink
            .write_register(map::LIGHTING_DISABLE, u32::from(!enabled))?;
        self.stage_enabled = Some(enabled);
        Ok(())
    }
}

fn lookup(
    envs: &mut [LightEnvironment],
    handle: EnvHandle,
) -> Result<&mut LightEnvironment, LightingError> {
    let max = envs.len().saturating_sub(1);
    envs.get_mut(handle.0).ok_or(LightingError::InvalidIndex {
        what: "environment",
        index: handle.0,
        max,
    })
}
