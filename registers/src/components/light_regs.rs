//! Addrmap: Fragment Lighting Registers
//!
//! Typed views of the packed words written to the lighting register space.
//! Addresses live in [`crate::map`].

/// Named types defined within this component's body
pub mod named_types {
    pub mod light_color_reg;
    pub mod light_config_reg;
    pub mod lighting_config0_reg;
    pub mod lighting_config1_reg;
    pub mod lut_entry_reg;
    pub mod lut_index_reg;

    pub use light_color_reg::LightColorReg;
    pub use light_config_reg::LightConfigReg;
    pub use lighting_config0_reg::LightingConfig0Reg;
    pub use lighting_config1_reg::LightingConfig1Reg;
    pub use lut_entry_reg::LutEntryReg;
    pub use lut_index_reg::LutIndexReg;
}
