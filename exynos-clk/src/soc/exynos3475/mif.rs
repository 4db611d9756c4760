//! CMU_MIF: memory interface.
//!
//! Hosts the memory, media and bus PLLs. Besides clocking the DRAM PHYs it
//! is the root of the SoC: CMU_CPU and CMU_TOP take their PLL outputs from
//! the `aclk_cpu_800`, `sclk_bus_pll_top` and `sclk_media_pll_top` gates.

use crate::{
    clock::{
        ClockFlags,
        DivClock,
        FixedFactorClock,
        GateClock,
        MuxClock,
        PllClock,
        PllRate,
        PllType,
    },
    cmu::{Cmu, CmuInfo, CmuRegistrar},
    dt_bindings::clock::exynos3475::mif::*,
    of::OfNode,
};

pub const MEM0_PLL_LOCK: u32 = 0x0000;
pub const MEDIA_PLL_LOCK: u32 = 0x0008;
pub const BUS_PLL_LOCK: u32 = 0x000c;
pub const MEM0_PLL_CON0: u32 = 0x0100;
pub const MEDIA_PLL_CON0: u32 = 0x0110;
pub const BUS_PLL_CON0: u32 = 0x0120;
pub const CLK_CON_MUX_DIV2_MEM0_PLL: u32 = 0x0210;
pub const CLK_CON_MUX_DIV2_MEDIA_PLL: u32 = 0x0214;
pub const CLK_CON_MUX_CLKM_PHY_A: u32 = 0x0218;
pub const CLK_CON_MUX_CLKM_PHY_B: u32 = 0x021c;
pub const CLK_CON_MUX_CLK2X_PHY_A: u32 = 0x0220;
pub const CLK_CON_MUX_CLK2X_PHY_B: u32 = 0x0224;
pub const CLK_CON_MUX_ACLK_MIF_333: u32 = 0x0228;
pub const CLK_CON_MUX_ACLK_MIF_83: u32 = 0x022c;
pub const CLK_CON_MUX_ACLK_MIF_FIX_50: u32 = 0x0230;
pub const CLK_CON_MUX_ACLK_DISPAUD_133: u32 = 0x0234;
pub const CLK_CON_MUX_ACLK_ISP_300: u32 = 0x0238;
pub const CLK_CON_MUX_SCLK_DISP_DECON_INT_ECLK: u32 = 0x023c;
pub const CLK_CON_MUX_SCLK_DISP_DECON_INT_VCLK: u32 = 0x0240;
pub const CLK_CON_DIV_CLKM_PHY: u32 = 0x0400;
pub const CLK_CON_DIV_CLK2X_PHY: u32 = 0x0404;
pub const CLK_CON_DIV_ACLK_MIF_333: u32 = 0x0408;
pub const CLK_CON_DIV_ACLK_MIF_166: u32 = 0x040c;
pub const CLK_CON_DIV_ACLK_MIF_83: u32 = 0x0410;
pub const CLK_CON_DIV_ACLK_MIF_FIX_50: u32 = 0x0414;
pub const CLK_CON_DIV_ACLK_DISPAUD_133: u32 = 0x0418;
pub const CLK_CON_DIV_ACLK_ISP_300: u32 = 0x041c;
pub const CLK_CON_DIV_SCLK_DISP_DECON_INT_ECLK: u32 = 0x0420;
pub const CLK_CON_DIV_SCLK_DISP_DECON_INT_VCLK: u32 = 0x0424;
pub const CLK_CON_DIV_MIF_NODDR: u32 = 0x0428;
pub const CLK_ENABLE_ACLK_CPU_800: u32 = 0x083c;
pub const CLK_ENABLE_SCLK_BUS_PLL_TOP: u32 = 0x0840;
pub const CLK_ENABLE_SCLK_MEDIA_PLL_TOP: u32 = 0x0844;

static CLK_REGS: &[u32] = &[
    MEM0_PLL_LOCK,
    MEDIA_PLL_LOCK,
    BUS_PLL_LOCK,
    MEM0_PLL_CON0,
    MEDIA_PLL_CON0,
    BUS_PLL_CON0,
    CLK_CON_MUX_DIV2_MEM0_PLL,
    CLK_CON_MUX_DIV2_MEDIA_PLL,
    CLK_CON_MUX_CLKM_PHY_A,
    CLK_CON_MUX_CLKM_PHY_B,
    CLK_CON_MUX_CLK2X_PHY_A,
    CLK_CON_MUX_CLK2X_PHY_B,
    CLK_CON_MUX_ACLK_MIF_333,
    CLK_CON_MUX_ACLK_MIF_83,
    CLK_CON_MUX_ACLK_MIF_FIX_50,
    CLK_CON_MUX_ACLK_DISPAUD_133,
    CLK_CON_MUX_ACLK_ISP_300,
    CLK_CON_MUX_SCLK_DISP_DECON_INT_ECLK,
    CLK_CON_MUX_SCLK_DISP_DECON_INT_VCLK,
    CLK_CON_DIV_CLKM_PHY,
    CLK_CON_DIV_CLK2X_PHY,
    CLK_CON_DIV_ACLK_MIF_333,
    CLK_CON_DIV_ACLK_MIF_166,
    CLK_CON_DIV_ACLK_MIF_83,
    CLK_CON_DIV_ACLK_MIF_FIX_50,
    CLK_CON_DIV_ACLK_DISPAUD_133,
    CLK_CON_DIV_ACLK_ISP_300,
    CLK_CON_DIV_SCLK_DISP_DECON_INT_ECLK,
    CLK_CON_DIV_SCLK_DISP_DECON_INT_VCLK,
    CLK_CON_DIV_MIF_NODDR,
    CLK_ENABLE_ACLK_CPU_800,
    CLK_ENABLE_SCLK_MEDIA_PLL_TOP,
    CLK_ENABLE_SCLK_BUS_PLL_TOP,
];

const MOUT_DIV2_MEM0_PLL_P: &[&str] = &["mem0_pll", "ffac_mem0_pll_div2"];
const MOUT_DIV2_MEDIA_PLL_P: &[&str] = &["media_pll", "ffac_media_pll_div2"];
const MOUT_CLKM_PHY_A_P: &[&str] = &["mout_div2_media_pll", "mout_div2_mem0_pll"];
const MOUT_CLKM_PHY_B_P: &[&str] = &["mout_clkm_phy_a", "bus_pll"];
const MOUT_CLK2X_PHY_A_P: &[&str] = &["mout_div2_media_pll", "mout_div2_mem0_pll"];
const MOUT_CLK2X_PHY_B_P: &[&str] = &["mout_clk2x_phy_a", "bus_pll"];
const MOUT_ACLK_MIF_333_P: &[&str] = &["dout_mif_noddr", "bus_pll", "mout_div2_mem0_pll"];
const MOUT_ACLK_MIF_83_P: &[&str] = &["dout_mif_noddr", "bus_pll", "mout_div2_mem0_pll"];
const MOUT_ACLK_MIF_FIX_50_P: &[&str] = &["bus_pll", "dout_mif_noddr"];
const MOUT_ACLK_DISPAUD_133_P: &[&str] = &["bus_pll", "dout_mif_noddr", "aud_pll"];
const MOUT_ACLK_ISP_300_P: &[&str] = &["aud_pll", "bus_pll", "dout_mif_noddr"];
const MOUT_SCLK_DISP_DECON_INT_ECLK_P: &[&str] = &["bus_pll", "dout_mif_noddr", "aud_pll"];
const MOUT_SCLK_DISP_DECON_INT_VCLK_P: &[&str] = &["bus_pll", "dout_mif_noddr", "aud_pll"];

static PLL_BUS_RATES: &[PllRate] = &[
    PllRate::new(825_000_000, 26, 825, 0, 0),
    PllRate::new(800_000_000, 13, 400, 0, 0),
];

static PLL_MEDIA_RATES: &[PllRate] = &[
    PllRate::new(1_334_000_000, 13, 667, 0, 0),
    PllRate::new(1_332_000_000, 13, 666, 0, 0),
];

static PLL_MEM0_RATES: &[PllRate] = &[
    PllRate::new(1_650_000_000, 13, 825, 0, 0),
    PllRate::new(1_332_000_000, 13, 666, 0, 0),
    PllRate::new(1_118_000_000, 4, 344, 1, 0),
    PllRate::new(676_000_000, 4, 208, 1, 0),
    PllRate::new(546_000_000, 4, 336, 2, 0),
    PllRate::new(400_000_000, 13, 800, 2, 0),
];

static FIXED_FACTOR_CLKS: &[FixedFactorClock] = &[
    FixedFactorClock::new("ffac_mem0_pll_div2", "mem0_pll", 1, 2),
    FixedFactorClock::new("ffac_media_pll_div2", "media_pll", 1, 2),
    FixedFactorClock::new("ffac_media_pll_div4", "ffac_media_pll_div2", 1, 2),
    FixedFactorClock::new("ffac_bus_pll_div2", "bus_pll", 1, 2),
];

static PLL_CLKS: &[PllClock] = &[
    PllClock::new(PllType::Pll2555x, "mem0_pll", "oscclk", MEM0_PLL_LOCK, MEM0_PLL_CON0)
        .id(CLK_MEM0_PLL)
        .rate_table(PLL_MEM0_RATES),
    PllClock::new(PllType::Pll2555x, "media_pll", "oscclk", MEDIA_PLL_LOCK, MEDIA_PLL_CON0)
        .rate_table(PLL_MEDIA_RATES),
    PllClock::new(PllType::Pll2551x, "bus_pll", "oscclk", BUS_PLL_LOCK, BUS_PLL_CON0)
        .id(CLK_BUS_PLL)
        .rate_table(PLL_BUS_RATES),
];

static MUX_CLKS: &[MuxClock] = &[
    MuxClock::new("mout_div2_mem0_pll", MOUT_DIV2_MEM0_PLL_P, CLK_CON_MUX_DIV2_MEM0_PLL, 12, 1),
    MuxClock::new("mout_div2_media_pll", MOUT_DIV2_MEDIA_PLL_P, CLK_CON_MUX_DIV2_MEDIA_PLL, 12, 1),
    MuxClock::new("mout_clkm_phy_a", MOUT_CLKM_PHY_A_P, CLK_CON_MUX_CLKM_PHY_A, 12, 1),
    MuxClock::new("mout_clkm_phy_b", MOUT_CLKM_PHY_B_P, CLK_CON_MUX_CLKM_PHY_B, 12, 1),
    MuxClock::new("mout_clk2x_phy_a", MOUT_CLK2X_PHY_A_P, CLK_CON_MUX_CLK2X_PHY_A, 12, 1),
    MuxClock::new("mout_clk2x_phy_b", MOUT_CLK2X_PHY_B_P, CLK_CON_MUX_CLK2X_PHY_B, 12, 1),
    MuxClock::new("mout_aclk_mif_333", MOUT_ACLK_MIF_333_P, CLK_CON_MUX_ACLK_MIF_333, 12, 2)
        .id(CLK_MOUT_ACLK_MIF_333),
    MuxClock::new("mout_aclk_mif_83", MOUT_ACLK_MIF_83_P, CLK_CON_MUX_ACLK_MIF_83, 12, 2)
        .id(CLK_MOUT_ACLK_MIF_83),
    MuxClock::new(
        "mout_aclk_mif_fix_50",
        MOUT_ACLK_MIF_FIX_50_P,
        CLK_CON_MUX_ACLK_MIF_FIX_50,
        12,
        1,
    )
    .id(CLK_MOUT_ACLK_MIF_FIX_50),
    MuxClock::new(
        "mout_aclk_dispaud_133",
        MOUT_ACLK_DISPAUD_133_P,
        CLK_CON_MUX_ACLK_DISPAUD_133,
        12,
        2,
    )
    .id(CLK_MOUT_ACLK_DISPAUD_133),
    MuxClock::new("mout_aclk_isp_300", MOUT_ACLK_ISP_300_P, CLK_CON_MUX_ACLK_ISP_300, 12, 2)
        .id(CLK_MOUT_ACLK_ISP_300),
    MuxClock::new(
        "mout_sclk_disp_decon_int_eclk",
        MOUT_SCLK_DISP_DECON_INT_ECLK_P,
        CLK_CON_MUX_SCLK_DISP_DECON_INT_ECLK,
        12,
        2,
    )
    .id(CLK_MOUT_SCLK_DISP_DECON_INT_ECLK),
    MuxClock::new(
        "mout_sclk_disp_decon_int_vclk",
        MOUT_SCLK_DISP_DECON_INT_VCLK_P,
        CLK_CON_MUX_SCLK_DISP_DECON_INT_VCLK,
        12,
        2,
    )
    .id(CLK_MOUT_SCLK_DISP_DECON_INT_VCLK),
];

static DIV_CLKS: &[DivClock] = &[
    DivClock::new("dout_clkm_phy", "mout_clkm_phy_b", CLK_CON_DIV_CLKM_PHY, 0, 4),
    DivClock::new("dout_clk2x_phy", "mout_clk2x_phy_b", CLK_CON_DIV_CLK2X_PHY, 0, 4),
    DivClock::new("dout_aclk_mif_333", "mout_aclk_mif_333", CLK_CON_DIV_ACLK_MIF_333, 0, 3)
        .id(CLK_DOUT_ACLK_MIF_333),
    DivClock::new("dout_aclk_mif_166", "dout_aclk_mif_333", CLK_CON_DIV_ACLK_MIF_166, 0, 2)
        .id(CLK_DOUT_ACLK_MIF_166),
    DivClock::new("dout_aclk_mif_83", "mout_aclk_mif_83", CLK_CON_DIV_ACLK_MIF_83, 0, 4)
        .id(CLK_DOUT_ACLK_MIF_83),
    DivClock::new(
        "dout_aclk_mif_fix_50",
        "mout_aclk_mif_fix_50",
        CLK_CON_DIV_ACLK_MIF_FIX_50,
        0,
        4,
    )
    .id(CLK_DOUT_ACLK_MIF_FIX_50),
    DivClock::new(
        "dout_aclk_dispaud_133",
        "mout_aclk_dispaud_133",
        CLK_CON_DIV_ACLK_DISPAUD_133,
        0,
        4,
    )
    .id(CLK_DOUT_ACLK_DISPAUD_133),
    DivClock::new("dout_aclk_isp_300", "mout_aclk_isp_300", CLK_CON_DIV_ACLK_ISP_300, 0, 4)
        .id(CLK_DOUT_ACLK_ISP_300),
    DivClock::new(
        "dout_sclk_disp_decon_int_eclk",
        "mout_sclk_disp_decon_int_eclk",
        CLK_CON_DIV_SCLK_DISP_DECON_INT_ECLK,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_DISP_DECON_INT_ECLK),
    DivClock::new(
        "dout_sclk_disp_decon_int_vclk",
        "mout_sclk_disp_decon_int_vclk",
        CLK_CON_DIV_SCLK_DISP_DECON_INT_VCLK,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_DISP_DECON_INT_VCLK),
    DivClock::new("dout_mif_noddr", "mout_div2_media_pll", CLK_CON_DIV_MIF_NODDR, 0, 4)
        .id(CLK_DOUT_MIF_NODDR),
];

static GATE_CLKS: &[GateClock] = &[
    GateClock::new("aclk_cpu_800", "bus_pll", CLK_ENABLE_ACLK_CPU_800, 0)
        .id(CLK_ACLK_CPU_800)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("sclk_media_pll_top", "ffac_media_pll_div2", CLK_ENABLE_SCLK_MEDIA_PLL_TOP, 0)
        .id(CLK_SCLK_MEDIA_PLL_TOP)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("sclk_bus_pll_top", "bus_pll", CLK_ENABLE_SCLK_BUS_PLL_TOP, 0)
        .id(CLK_SCLK_BUS_PLL_TOP)
        .flags(ClockFlags::IGNORE_UNUSED),
];

pub static CMU_INFO: CmuInfo = CmuInfo {
    pll_clks: PLL_CLKS,
    mux_clks: MUX_CLKS,
    div_clks: DIV_CLKS,
    gate_clks: GATE_CLKS,
    fixed_factor_clks: FIXED_FACTOR_CLKS,
    nr_clk_ids: NR_CLK,
    clk_regs: CLK_REGS,
    ..CmuInfo::EMPTY
};

pub static CMU: Cmu = Cmu {
    name: "mif",
    compatible: "samsung,exynos3475-cmu-mif",
    base: 0x1043_0000,
    info: &CMU_INFO,
};

/// Registers CMU_MIF with the clock framework.
pub fn init(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
    crate::cmu::register_one(node, &CMU, registrar);
}
