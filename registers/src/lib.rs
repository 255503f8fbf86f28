//! Fragment lighting register map: addresses, packed register types and field enums.
#![no_std]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::identity_op)]
#![allow(clippy::inline_always)]
#![allow(clippy::unnecessary_cast)]

pub mod components;
pub mod encode;
pub mod map;
pub mod reg;

pub use crate::components::bump_mode_e::BumpModeE;
pub use crate::components::fresnel_sel_e::FresnelSelE;
pub use crate::components::lut_id_e::LutIdE;
pub use crate::components::lut_input_e::LutInputE;
pub use crate::components::light_regs::named_types::*;
