//! CMU_CPU: the CPU cluster.
//!
//! `cpu_pll` is the normal source of the cluster. While it relocks, `mout_cpu`
//! is switched over to the 800 MHz bus PLL output distributed by CMU_MIF. The
//! rate table lists the DVFS operating points, fastest first.

use crate::{
    clock::{
        ClockFlags,
        DivClock,
        GateClock,
        MuxClock,
        PllClock,
        PllRate,
        PllType,
    },
    cmu::{Cmu, CmuInfo, CmuRegistrar},
    dt_bindings::clock::exynos3475::cpu::*,
    of::OfNode,
};

pub const CPU_PLL_LOCK: u32 = 0x0000;
pub const CPU_PLL_CON0: u32 = 0x0100;
pub const CLK_CON_MUX_CPU_PLL: u32 = 0x0200;
pub const CLK_CON_MUX_SCLK_BUS_PLL_USER: u32 = 0x0204;
pub const CLK_CON_MUX_CPU: u32 = 0x0208;
pub const CLK_CON_DIV_CPU_1: u32 = 0x0400;
pub const CLK_CON_DIV_CPU_2: u32 = 0x0404;
pub const CLK_CON_DIV_ATCLK_CPU: u32 = 0x0408;
pub const CLK_CON_DIV_PCLK_DBG: u32 = 0x040c;
pub const CLK_CON_DIV_ACLK_CPU: u32 = 0x0410;
pub const CLK_CON_DIV_PCLK_CPU: u32 = 0x0414;
pub const CLK_CON_DIV_SCLK_HPM_CPU: u32 = 0x0418;
pub const CLK_CON_DIV_CPU_PLL: u32 = 0x041c;
pub const CLK_CON_DIV_CPU_RUN_MONITOR: u32 = 0x0420;

static CLK_REGS: &[u32] = &[
    CPU_PLL_LOCK,
    CPU_PLL_CON0,
    CLK_CON_MUX_CPU_PLL,
    CLK_CON_MUX_SCLK_BUS_PLL_USER,
    CLK_CON_MUX_CPU,
    CLK_CON_DIV_CPU_1,
    CLK_CON_DIV_CPU_2,
    CLK_CON_DIV_ATCLK_CPU,
    CLK_CON_DIV_PCLK_DBG,
    CLK_CON_DIV_ACLK_CPU,
    CLK_CON_DIV_PCLK_CPU,
    CLK_CON_DIV_SCLK_HPM_CPU,
    CLK_CON_DIV_CPU_PLL,
    CLK_CON_DIV_CPU_RUN_MONITOR,
];

const MOUT_CPU_P: &[&str] = &["cpu_pll", "mout_sclk_bus_pll_user"];

static PLL_CPU_RATES: &[PllRate] = &[
    PllRate::new(2_000_000_000, 13, 1000, 0, 0),
    PllRate::new(1_898_000_000, 4, 292, 0, 0),
    PllRate::new(1_794_000_000, 4, 276, 0, 0),
    PllRate::new(1_703_000_000, 4, 262, 0, 0),
    PllRate::new(1_599_000_000, 4, 246, 0, 0),
    PllRate::new(1_495_000_000, 4, 230, 0, 0),
    PllRate::new(1_404_000_000, 4, 216, 0, 0),
    PllRate::new(1_300_000_000, 4, 200, 0, 0),
    PllRate::new(1_196_000_000, 4, 368, 1, 0),
    PllRate::new(1_105_000_000, 4, 340, 1, 0),
    PllRate::new(1_001_000_000, 4, 308, 1, 0),
    PllRate::new(897_000_000, 4, 276, 1, 0),
    PllRate::new(806_000_000, 4, 248, 1, 0),
    PllRate::new(702_000_000, 4, 216, 1, 0),
    PllRate::new(598_000_000, 4, 368, 2, 0),
    PllRate::new(507_000_000, 4, 312, 2, 0),
    PllRate::new(403_000_000, 4, 248, 2, 0),
    PllRate::new(299_000_000, 4, 368, 3, 0),
    PllRate::new(195_000_000, 4, 240, 3, 0),
];

static PLL_CLKS: &[PllClock] = &[
    PllClock::new(PllType::Pll2555x, "cpu_pll", "oscclk", CPU_PLL_LOCK, CPU_PLL_CON0)
        .id(CLK_CPU_PLL)
        .rate_table(PLL_CPU_RATES),
];

static MUX_CLKS: &[MuxClock] = &[
    MuxClock::new("mout_cpu", MOUT_CPU_P, CLK_CON_MUX_CPU, 12, 1)
        .id(CLK_MOUT_CPU),
];

static DIV_CLKS: &[DivClock] = &[
    DivClock::new("dout_cpu_1", "mout_cpu", CLK_CON_DIV_CPU_1, 0, 3),
    DivClock::new("dout_cpu_2", "dout_cpu_1", CLK_CON_DIV_CPU_2, 0, 3),
    DivClock::new("dout_atclk_cpu", "dout_cpu_2", CLK_CON_DIV_ATCLK_CPU, 0, 3),
    DivClock::new("dout_pclk_dbg", "dout_cpu_2", CLK_CON_DIV_PCLK_DBG, 0, 3),
    DivClock::new("dout_aclk_cpu", "dout_cpu_2", CLK_CON_DIV_ACLK_CPU, 0, 3),
    DivClock::new("dout_pclk_cpu", "dout_cpu_2", CLK_CON_DIV_PCLK_CPU, 0, 3),
    DivClock::new("dout_sclk_hpm_cpu", "mout_cpu", CLK_CON_DIV_SCLK_HPM_CPU, 0, 3),
    DivClock::new("dout_cpu_pll", "mout_cpu", CLK_CON_DIV_CPU_PLL, 0, 3),
    DivClock::new("dout_cpu_run_monitor", "dout_cpu_2", CLK_CON_DIV_CPU_RUN_MONITOR, 0, 3),
];

static GATE_CLKS: &[GateClock] = &[
    GateClock::new("mout_sclk_bus_pll_user", "aclk_cpu_800", CLK_CON_MUX_SCLK_BUS_PLL_USER, 26)
        .flags(ClockFlags::IGNORE_UNUSED),
];

pub static CMU_INFO: CmuInfo = CmuInfo {
    pll_clks: PLL_CLKS,
    mux_clks: MUX_CLKS,
    div_clks: DIV_CLKS,
    gate_clks: GATE_CLKS,
    nr_clk_ids: NR_CLK,
    clk_regs: CLK_REGS,
    ..CmuInfo::EMPTY
};

pub static CMU: Cmu = Cmu {
    name: "cpu",
    compatible: "samsung,exynos3475-cmu-cpu",
    base: 0x1090_0000,
    info: &CMU_INFO,
};

/// Registers CMU_CPU with the clock framework.
pub fn init(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
    crate::cmu::register_one(node, &CMU, registrar);
}
