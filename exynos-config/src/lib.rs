//! Build-time configuration for `exynos-clk`.
//!
//! Options are declared by a crate's `build.rs` with [`generate_config`] and are
//! overridden by environment variables of the form `<CRATE>_CONFIG_<OPTION>`.
//! The selected values are handed to the crate as `rustc-env` variables and read
//! back with [`exynos_config_int!`].
//!
//! ## Feature Flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "build")]
mod generate;
#[cfg(feature = "build")]
pub use generate::{
    generate_config,
    generate_config_internal,
    validator::Validator,
    value::Value,
    ConfigOption,
    Error,
};

/// Parse the value of a configuration environment variable as an integer at
/// compile time.
///
/// ```rust, ignore
/// const OSCCLK_HZ: u32 = exynos_config::exynos_config_int!(u32, "EXYNOS_CLK_CONFIG_OSCCLK_FREQUENCY");
/// ```
#[macro_export]
macro_rules! exynos_config_int {
    ($ty:ty, $var:expr) => {
        match <$ty>::from_str_radix(env!($var), 10) {
            Ok(val) => val,
            _ => unreachable!(),
        }
    };
}

#[cfg(test)]
mod tests {
    const MAJOR: u8 = crate::exynos_config_int!(u8, "CARGO_PKG_VERSION_MAJOR");
    const MINOR: u32 = crate::exynos_config_int!(u32, "CARGO_PKG_VERSION_MINOR");

    #[test]
    fn integers_parse_in_const_context() {
        assert_eq!(MAJOR, 0);
        assert_eq!(MINOR, 1);
    }
}
