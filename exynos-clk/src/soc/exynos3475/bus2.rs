//! CMU_BUS2: the 333 MHz data bus 2 and its 83 MHz APB divider.

use crate::{
    clock::{ClockFlags, DivClock, GateClock},
    cmu::{Cmu, CmuInfo, CmuRegistrar},
    dt_bindings::clock::exynos3475::bus2::*,
    of::OfNode,
};

pub const CLK_CON_MUX_ACLK_BUS2_333_USER: u32 = 0x0200;
pub const CLK_CON_DIV_PCLK_BUS2_83: u32 = 0x0400;

static CLK_REGS: &[u32] = &[
    CLK_CON_MUX_ACLK_BUS2_333_USER,
    CLK_CON_DIV_PCLK_BUS2_83,
];

static DIV_CLKS: &[DivClock] = &[
    DivClock::new("dout_pclk_bus2_83", "mout_aclk_bus2_333_user", CLK_CON_DIV_PCLK_BUS2_83, 0, 3),
];

static GATE_CLKS: &[GateClock] = &[
    GateClock::new("mout_aclk_bus2_333_user", "aclk_bus2_333", CLK_CON_MUX_ACLK_BUS2_333_USER, 26)
        .flags(ClockFlags::IGNORE_UNUSED),
];

pub static CMU_INFO: CmuInfo = CmuInfo {
    div_clks: DIV_CLKS,
    gate_clks: GATE_CLKS,
    nr_clk_ids: NR_CLK,
    clk_regs: CLK_REGS,
    ..CmuInfo::EMPTY
};

pub static CMU: Cmu = Cmu {
    name: "bus2",
    compatible: "samsung,exynos3475-cmu-bus2",
    base: 0x1180_0000,
    info: &CMU_INFO,
};

/// Registers CMU_BUS2 with the clock framework.
pub fn init(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
    crate::cmu::register_one(node, &CMU, registrar);
}
