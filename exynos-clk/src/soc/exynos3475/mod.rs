//! # Exynos3475
//!
//! Eight CMU blocks make up the clock tree. CMU_MIF owns the PLLs that feed
//! the rest of the SoC and CMU_TOP divides them down for the peripheral
//! blocks. Each block is matched to its device-tree node by compatible string
//! and registered independently; cross-block parents are resolved by name.
//!
//! Two inputs come from outside the CMUs: the board oscillator `oscclk`, and
//! `aud_pll`, which is owned by the audio subsystem.

use fugit::HertzU32;

use crate::{
    clock::FixedRateClock,
    cmu::Cmu,
    of::OfClockDeclare,
};

pub mod bus0;
pub mod bus2;
pub mod cpu;
pub mod fsys;
pub mod g3d;
pub mod mif;
pub mod peri;
pub mod top;

/// Frequency of the board oscillator, set through the
/// `EXYNOS_CLK_CONFIG_OSCCLK_FREQUENCY` build-time option.
pub const OSCCLK_FREQUENCY: HertzU32 = HertzU32::from_raw(exynos_config::exynos_config_int!(
    u32,
    "EXYNOS_CLK_CONFIG_OSCCLK_FREQUENCY"
));

/// The board oscillator every PLL is fed from.
pub const OSCCLK: FixedRateClock = FixedRateClock::new("oscclk", OSCCLK_FREQUENCY);

pub static EXTERNAL_CLOCKS: &[&str] = &[OSCCLK.name, "aud_pll"];

/// All blocks, in declaration order.
pub static CMUS: &[&Cmu] = &[
    &bus0::CMU,
    &bus2::CMU,
    &cpu::CMU,
    &fsys::CMU,
    &g3d::CMU,
    &peri::CMU,
    &mif::CMU,
    &top::CMU,
];

macro_rules! declare {
    ($($block:ident),* $(,)?) => {
        pub static CLOCK_DECLARES: &[OfClockDeclare] = &[
            $(
                OfClockDeclare {
                    name: concat!("exynos3475_cmu_", stringify!($block)),
                    compatible: concat!("samsung,exynos3475-cmu-", stringify!($block)),
                    init: $block::init,
                },
            )*
        ];
    };
}

declare!(bus0, bus2, cpu, fsys, g3d, peri, mif, top);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cmu::CmuInfo,
        of::tests::{Recorder, TestNode},
        validate::{self, ValidationContext},
    };

    fn context() -> ValidationContext<'static> {
        ValidationContext::new(CMUS, EXTERNAL_CLOCKS)
    }

    #[test]
    fn tables_are_consistent() {
        let mut errors = Vec::new();
        let count = validate::check(&context(), |error| errors.push(error.to_string()));

        assert_eq!(count, 0, "{errors:#?}");
        assert!(validate::validate(&context()).is_ok());
    }

    #[test]
    fn declarations_match_blocks() {
        assert_eq!(CLOCK_DECLARES.len(), CMUS.len());
        for (declare, cmu) in CLOCK_DECLARES.iter().zip(CMUS) {
            assert_eq!(declare.compatible, cmu.compatible);
            assert!(declare.name.ends_with(cmu.name));
        }
    }

    #[test]
    fn every_block_registers_its_own_tables() {
        for cmu in CMUS {
            let mut recorder = Recorder::default();
            let node = TestNode::new(
                "/soc/clock-controller",
                core::slice::from_ref(&cmu.compatible),
            );

            assert!(crate::of::clk_init(&node, &mut recorder));
            assert_eq!(recorder.nr_clk_ids, vec![cmu.info.nr_clk_ids]);
        }
    }

    #[test]
    fn descriptor_counts() {
        let counts = |info: &CmuInfo| {
            [
                info.pll_clks.len(),
                info.mux_clks.len(),
                info.div_clks.len(),
                info.gate_clks.len(),
                info.fixed_clks.len(),
                info.fixed_factor_clks.len(),
                info.clk_regs.len(),
            ]
        };

        assert_eq!(counts(&bus0::CMU_INFO), [0, 0, 1, 1, 0, 0, 2]);
        assert_eq!(counts(&bus2::CMU_INFO), [0, 0, 1, 1, 0, 0, 2]);
        assert_eq!(counts(&cpu::CMU_INFO), [1, 1, 9, 1, 0, 0, 14]);
        assert_eq!(counts(&fsys::CMU_INFO), [1, 0, 0, 41, 4, 0, 19]);
        assert_eq!(counts(&g3d::CMU_INFO), [1, 1, 2, 13, 0, 0, 10]);
        assert_eq!(counts(&peri::CMU_INFO), [0, 0, 0, 57, 0, 0, 22]);
        assert_eq!(counts(&mif::CMU_INFO), [3, 13, 11, 3, 0, 4, 33]);
        assert_eq!(counts(&top::CMU_INFO), [0, 15, 28, 22, 0, 0, 65]);
    }

    #[test]
    fn every_exported_id_is_used_once() {
        use crate::dt_bindings::clock::exynos3475 as ids;

        let namespaces = [
            (&bus0::CMU_INFO, ids::bus0::IDS),
            (&bus2::CMU_INFO, ids::bus2::IDS),
            (&cpu::CMU_INFO, ids::cpu::IDS),
            (&fsys::CMU_INFO, ids::fsys::IDS),
            (&g3d::CMU_INFO, ids::g3d::IDS),
            (&peri::CMU_INFO, ids::peri::IDS),
            (&mif::CMU_INFO, ids::mif::IDS),
            (&top::CMU_INFO, ids::top::IDS),
        ];

        for (info, ids) in namespaces {
            assert_eq!(info.exported_count(), ids.len());
            for (name, id) in ids {
                let users = info.nodes().filter(|node| node.id() == Some(*id)).count();
                assert_eq!(users, 1, "{name}");
            }
        }
    }

    #[test]
    fn spot_checks() {
        let cpu_pll = cpu::CMU_INFO.clock("cpu_pll");
        assert_eq!(cpu_pll.map(|node| node.parents()), Some(&["oscclk"][..]));

        let mout = top::CMU_INFO.clock("mout_bus_pll_user");
        assert_eq!(
            mout.map(|node| node.registers()),
            Some(&[top::CLK_CON_MUX_BUS_PLL_USER][..])
        );

        let spi = peri::CMU_INFO.clock("mout_sclk_peri_spi0_spi_ext_clk_user");
        assert!(spi.is_some_and(|node| node
            .flags()
            .contains(crate::clock::ClockFlags::SET_RATE_PARENT)));
    }

    #[test]
    fn oscclk_is_configured() {
        assert_eq!(OSCCLK.rate, OSCCLK_FREQUENCY);
        assert!(OSCCLK.parent.is_none());
        assert!(EXTERNAL_CLOCKS.contains(&"oscclk"));
    }

    #[test]
    fn tables_carry_the_driver_license() {
        assert_eq!(env!("CARGO_PKG_LICENSE"), "GPL-2.0-only");
    }
}
