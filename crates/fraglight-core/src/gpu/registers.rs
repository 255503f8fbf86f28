//! Lighting register addresses and packed register types.
//!
//! Re-exported from the `fraglight-registers` crate (single source of truth).

pub use fraglight_registers::*;
