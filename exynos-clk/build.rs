use std::{env, error::Error};

use exynos_config::{generate_config, ConfigOption, Validator, Value};

fn main() -> Result<(), Box<dyn Error>> {
    // Log and defmt are mutually exclusive features: the logging macros expand
    // to exactly one backend.
    let log = env::var_os("CARGO_FEATURE_LOG").is_some();
    let defmt = env::var_os("CARGO_FEATURE_DEFMT").is_some();
    if log && defmt {
        return Err("the `log` and `defmt` features are mutually exclusive".into());
    }

    let chips = ["CARGO_FEATURE_EXYNOS3475"]
        .iter()
        .filter(|feature| env::var_os(feature).is_some())
        .count();
    if chips > 1 {
        return Err("at most one chip feature may be enabled".into());
    }

    generate_config(
        "exynos_clk",
        &[ConfigOption {
            name: "oscclk-frequency",
            description: "Frequency of the board's `oscclk` reference oscillator, in Hz. \
            Every PLL on the SoC is fed from this clock.",
            default_value: Value::Integer(26_000_000),
            constraint: Some(Validator::IntegerInRange(1_000_000..=100_000_000)),
        }],
        true,
    );

    Ok(())
}
