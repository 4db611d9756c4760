use anyhow::{bail, Context, Result};
use exynos_clk::{
    clock::ClockNode,
    cmu::Cmu,
    soc,
    validate::{self, ValidationContext},
};

pub mod bindings;
pub mod dispatch;
pub mod dump;
pub mod graph;

/// The checked blocks of the selected chip, with its external clocks.
pub fn context() -> ValidationContext<'static> {
    ValidationContext::new(soc::CMUS, soc::EXTERNAL_CLOCKS)
}

/// Looks up a block by its short name, e.g. `peri`.
pub fn find_block(name: &str) -> Result<&'static Cmu> {
    soc::CMUS
        .iter()
        .copied()
        .find(|cmu| cmu.name.eq_ignore_ascii_case(name))
        .with_context(|| {
            let known = soc::CMUS.iter().map(|cmu| cmu.name).collect::<Vec<_>>();
            format!("Unknown block '{name}', expected one of: {}", known.join(", "))
        })
}

/// Looks up a clock defined by one of the chip's blocks.
pub fn find_clock(name: &str) -> Result<(&'static Cmu, ClockNode<'static>)> {
    context()
        .clock(name)
        .with_context(|| format!("Clock '{name}' is not defined by any block"))
}

/// Runs every table check. The library logs each violation as it is found.
pub fn check_tables(ctx: &ValidationContext<'_>) -> Result<()> {
    let violations = validate::check(ctx, |_| {});

    if violations > 0 {
        bail!("Found {violations} violation(s) in the clock tables");
    }

    let clocks = ctx
        .blocks
        .iter()
        .map(|cmu| cmu.info.clock_count())
        .sum::<usize>();
    log::info!(
        "{} blocks with {clocks} clocks are consistent",
        ctx.blocks.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_pass() {
        assert!(check_tables(&context()).is_ok());
    }

    #[test]
    fn violations_are_counted_once() {
        use exynos_clk::{clock::GateClock, cmu::CmuInfo};

        static GATES: &[GateClock] = &[
            GateClock::new("gate", "nowhere", 0x800, 0),
            GateClock::new("other", "oscclk", 0x804, 1),
        ];
        static INFO: CmuInfo = CmuInfo {
            gate_clks: GATES,
            clk_regs: &[0x800],
            ..CmuInfo::EMPTY
        };
        static BROKEN: Cmu = Cmu {
            name: "broken",
            compatible: "vendor,broken",
            base: 0,
            info: &INFO,
        };

        let blocks = [&BROKEN];
        let error = check_tables(&ValidationContext::new(&blocks, &["oscclk"])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Found 2 violation(s) in the clock tables"
        );
    }

    #[test]
    fn block_lookup() {
        assert_eq!(find_block("peri").unwrap().base, 0x139f_0000);
        assert_eq!(find_block("MIF").unwrap().name, "mif");

        let error = find_block("audio").unwrap_err().to_string();
        assert!(error.starts_with("Unknown block 'audio'"));
        assert!(error.contains("bus0, bus2, cpu"));
    }

    #[test]
    fn clock_lookup() {
        let (cmu, node) = find_clock("usb_pll").unwrap();
        assert_eq!(cmu.name, "fsys");
        assert_eq!(node.parents(), &["oscclk"]);

        assert!(find_clock("oscclk").is_err());
    }
}
