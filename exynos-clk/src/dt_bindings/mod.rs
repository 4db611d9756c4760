//! Identifiers shared with device-tree sources.
//!
//! These mirror the C headers under `include/dt-bindings/` that device trees
//! use to reference clocks and power domains by number.

pub mod clock {
    //! Clock IDs, per SoC.

    #[cfg(feature = "exynos3475")]
    pub mod exynos3475;
}

pub mod power {
    //! Power-domain IDs, per SoC.

    pub mod owl_atm7051;
}
