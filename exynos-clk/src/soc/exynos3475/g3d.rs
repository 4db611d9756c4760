//! CMU_G3D: the GPU.

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
    dt_bindings::clock::exynos3475::g3d::*,
    of::OfNode,
};

pub const G3D_PLL_LOCK: u32 = 0x0000;
pub const G3D_PLL_CON0: u32 = 0x0100;
pub const CLK_CON_MUX_ACLK_G3D_667: u32 = 0x0208;
pub const CLK_CON_DIV_ACLK_G3D_667: u32 = 0x0400;
pub const CLK_CON_DIV_PCLK_G3D_167: u32 = 0x0404;
pub const CLK_ENABLE_ACLK_G3D_667: u32 = 0x0800;
pub const CLK_ENABLE_ACLK_G3D_667_SECURE_CFW: u32 = 0x0804;
pub const CLK_ENABLE_PCLK_G3D_167: u32 = 0x0808;
pub const CLK_ENABLE_PCLK_G3D_167_SECURE_CFW: u32 = 0x080c;
pub const CLK_CON_MUX_ACLK_G3D_400_USER: u32 = 0x0204;

static CLK_REGS: &[u32] = &[
    G3D_PLL_LOCK,
    G3D_PLL_CON0,
    CLK_CON_MUX_ACLK_G3D_667,
    CLK_CON_DIV_ACLK_G3D_667,
    CLK_CON_DIV_PCLK_G3D_167,
    CLK_ENABLE_ACLK_G3D_667,
    CLK_ENABLE_ACLK_G3D_667_SECURE_CFW,
    CLK_ENABLE_PCLK_G3D_167,
    CLK_ENABLE_PCLK_G3D_167_SECURE_CFW,
    CLK_CON_MUX_ACLK_G3D_400_USER,
];

const MOUT_ACLK_G3D_667_P: &[&str] = &["g3d_pll", "mout_aclk_g3d_400_user"];

static PLL_G3D_RATES: &[PllRate] = &[
    PllRate::new(667_000_000, 12, 308, 0, 0),
    PllRate::new(600_000_000, 13, 300, 0, 0),
    PllRate::new(533_000_000, 14, 287, 0, 0),
    PllRate::new(480_000_000, 13, 480, 1, 0),
    PllRate::new(440_000_000, 13, 440, 1, 0),
    PllRate::new(420_000_000, 13, 420, 1, 0),
    PllRate::new(370_000_000, 13, 370, 1, 0),
    PllRate::new(350_000_000, 13, 350, 1, 0),
    PllRate::new(266_000_000, 13, 266, 1, 0),
    PllRate::new(160_000_000, 13, 320, 2, 0),
    PllRate::new(100_000_000, 13, 400, 3, 0),
];

static PLL_CLKS: &[PllClock] = &[
    PllClock::new(PllType::Pll2551x, "g3d_pll", "oscclk", G3D_PLL_LOCK, G3D_PLL_CON0)
        .rate_table(PLL_G3D_RATES),
];

static MUX_CLKS: &[MuxClock] = &[
    MuxClock::new("mout_aclk_g3d_667", MOUT_ACLK_G3D_667_P, CLK_CON_MUX_ACLK_G3D_667, 12, 1)
        .id(CLK_MOUT_ACLK_G3D_667),
];

static DIV_CLKS: &[DivClock] = &[
    DivClock::new("dout_aclk_g3d_667", "mout_aclk_g3d_667", CLK_CON_DIV_ACLK_G3D_667, 0, 3),
    DivClock::new("dout_pclk_g3d_167", "dout_aclk_g3d_667", CLK_CON_DIV_PCLK_G3D_167, 0, 3),
];

static GATE_CLKS: &[GateClock] = &[
    GateClock::new(
        "aclk_g3d_667_aclk_ppmu_g3d_aclk",
        "dout_aclk_g3d_667",
        CLK_ENABLE_ACLK_G3D_667,
        4,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_g3d_667_aclk_qe_g3d_aclk",
        "dout_aclk_g3d_667",
        CLK_ENABLE_ACLK_G3D_667,
        3,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_g3d_667_aclk_async_ahb2apb_g3d_to_g3d_cclk",
        "dout_aclk_g3d_667",
        CLK_ENABLE_ACLK_G3D_667,
        2,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_g3d_667_aclk_bus_d_g3d_aclk_g3dnd",
        "dout_aclk_g3d_667",
        CLK_ENABLE_ACLK_G3D_667,
        1,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("aclk_g3d_667_aclk_g3d_clk", "dout_aclk_g3d_667", CLK_ENABLE_ACLK_G3D_667, 0)
        .id(CLK_ACLK_G3D_667_ACLK_G3D_CLK)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_g3d_667_secure_cfw_aclk_smmu_g3d_aclk_cfw",
        "dout_aclk_g3d_667",
        CLK_ENABLE_ACLK_G3D_667_SECURE_CFW,
        0,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "pclk_g3d_167_pclk_ppmu_g3d_pclk",
        "dout_pclk_g3d_167",
        CLK_ENABLE_PCLK_G3D_167,
        6,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "pclk_g3d_167_pclk_qe_g3d_pclk",
        "dout_pclk_g3d_167",
        CLK_ENABLE_PCLK_G3D_167,
        5,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "pclk_g3d_167_pclk_sysreg_g3d_pclk",
        "dout_pclk_g3d_167",
        CLK_ENABLE_PCLK_G3D_167,
        4,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "pclk_g3d_167_pclk_pmu_g3d_pclk",
        "dout_pclk_g3d_167",
        CLK_ENABLE_PCLK_G3D_167,
        3,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "pclk_g3d_167_pclk_async_ahb2apb_g3d_to_g3d_pclk",
        "dout_pclk_g3d_167",
        CLK_ENABLE_PCLK_G3D_167,
        2,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "pclk_g3d_167_secure_cfw_pclk_smmu_g3d_pclk_cfw",
        "dout_pclk_g3d_167",
        CLK_ENABLE_PCLK_G3D_167_SECURE_CFW,
        0,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("mout_aclk_g3d_400_user", "aclk_g3d_400", CLK_CON_MUX_ACLK_G3D_400_USER, 26)
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
    name: "g3d",
    compatible: "samsung,exynos3475-cmu-g3d",
    base: 0x1046_4060,
    info: &CMU_INFO,
};

/// Registers CMU_G3D with the clock framework.
pub fn init(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
    crate::cmu::register_one(node, &CMU, registrar);
}
