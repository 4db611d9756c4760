//! CMU_FSYS: SD/MMC controllers, USB 2.0 host and OTG.
//!
//! The USB PHYs drive their own 60 MHz and 48 MHz outputs back into the
//! block. They are modelled as fixed-rate clocks.

use fugit::HertzU32;

use crate::{
    clock::{
        ClockFlags,
        FixedRateClock,
        GateClock,
        PllClock,
        PllRate,
        PllType,
    },
    cmu::{Cmu, CmuInfo, CmuRegistrar},
    dt_bindings::clock::exynos3475::fsys::*,
    of::OfNode,
};

pub const USB_PLL_LOCK: u32 = 0x0000;
pub const USB_PLL_CON0: u32 = 0x0100;
pub const CLK_ENABLE_ACLK_FSYS_200: u32 = 0x0800;
pub const CLK_ENABLE_SCLK_FSYS_MMC0_SDCLKIN: u32 = 0x0804;
pub const CLK_ENABLE_SCLK_FSYS_MMC1_SDCLKIN: u32 = 0x0808;
pub const CLK_ENABLE_SCLK_FSYS_MMC2_SDCLKIN: u32 = 0x080c;
pub const CLK_ENABLE_SCLK_USB20_PHY_CLKCORE: u32 = 0x0810;
pub const CLK_ENABLE_PHYCLK_USBHOST20_USB20_FREECLK: u32 = 0x0814;
pub const CLK_ENABLE_PHYCLK_USBHOST20_USB20_PHYCLOCK: u32 = 0x0818;
pub const CLK_ENABLE_PHYCLK_USBHOST20_USB20_CLK48MOHCI: u32 = 0x081c;
pub const CLK_ENABLE_PHYCLK_USBHOTG_OTG20_PHYCLOCK: u32 = 0x0820;
pub const CLK_CON_MUX_ACLK_FSYS_200_USER: u32 = 0x0204;
pub const CLK_CON_MUX_SCLK_FSYS_MMC0_SDCLKIN_USER: u32 = 0x0208;
pub const CLK_CON_MUX_SCLK_FSYS_MMC1_SDCLKIN_USER: u32 = 0x020c;
pub const CLK_CON_MUX_SCLK_FSYS_MMC2_SDCLKIN_USER: u32 = 0x0210;
pub const CLK_CON_MUX_PHYCLK_USBHOST20_USB20_FREECLK_USER: u32 = 0x0214;
pub const CLK_CON_MUX_PHYCLK_USBHOST20_USB20_PHYCLOCK_USER: u32 = 0x0218;
pub const CLK_CON_MUX_PHYCLK_USBHOST20_USB20_CLK48MOHCI_USER: u32 = 0x021c;
pub const CLK_CON_MUX_PHYCLK_USBOTG_OTG20_PHYCLOCK_USER: u32 = 0x0220;

static CLK_REGS: &[u32] = &[
    USB_PLL_LOCK,
    USB_PLL_CON0,
    CLK_ENABLE_ACLK_FSYS_200,
    CLK_ENABLE_SCLK_FSYS_MMC0_SDCLKIN,
    CLK_ENABLE_SCLK_FSYS_MMC1_SDCLKIN,
    CLK_ENABLE_SCLK_FSYS_MMC2_SDCLKIN,
    CLK_ENABLE_SCLK_USB20_PHY_CLKCORE,
    CLK_ENABLE_PHYCLK_USBHOST20_USB20_FREECLK,
    CLK_ENABLE_PHYCLK_USBHOST20_USB20_PHYCLOCK,
    CLK_ENABLE_PHYCLK_USBHOST20_USB20_CLK48MOHCI,
    CLK_ENABLE_PHYCLK_USBHOTG_OTG20_PHYCLOCK,
    CLK_CON_MUX_ACLK_FSYS_200_USER,
    CLK_CON_MUX_SCLK_FSYS_MMC0_SDCLKIN_USER,
    CLK_CON_MUX_SCLK_FSYS_MMC1_SDCLKIN_USER,
    CLK_CON_MUX_SCLK_FSYS_MMC2_SDCLKIN_USER,
    CLK_CON_MUX_PHYCLK_USBHOST20_USB20_FREECLK_USER,
    CLK_CON_MUX_PHYCLK_USBHOST20_USB20_PHYCLOCK_USER,
    CLK_CON_MUX_PHYCLK_USBHOST20_USB20_CLK48MOHCI_USER,
    CLK_CON_MUX_PHYCLK_USBOTG_OTG20_PHYCLOCK_USER,
];

static PLL_USB_RATES: &[PllRate] = &[
    PllRate::new(50_000_000, 13, 400, 4, 0),
    PllRate::new(24_000_000, 13, 384, 5, 0),
];

static FIXED_CLKS: &[FixedRateClock] = &[
    FixedRateClock::new("phyclk_usbhost20_phy_usb20_freeclk", HertzU32::MHz(60)),
    FixedRateClock::new("phyclk_usbhost20_phy_usb20_phyclock", HertzU32::MHz(60)),
    FixedRateClock::new("phyclk_usbhost20_phy_usb20_clk48mohci", HertzU32::MHz(48)),
    FixedRateClock::new("phyclk_usbotg_phy_otg20_phyclock", HertzU32::MHz(60)),
];

static PLL_CLKS: &[PllClock] = &[
    PllClock::new(PllType::Pll2551x, "usb_pll", "oscclk", USB_PLL_LOCK, USB_PLL_CON0)
        .rate_table(PLL_USB_RATES),
];

static GATE_CLKS: &[GateClock] = &[
    GateClock::new(
        "aclk_fsys_200_pclk_ppmu_fsys_pclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        27,
    ),
    GateClock::new(
        "aclk_fsys_200_pclk_sysreg_fsys_pclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        25,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_pclk_pmu_fsys_pclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        24,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_ppmu_fsys_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        23,
    ),
    GateClock::new(
        "aclk_fsys_200_aclk_upsizer_ahb_usbhs_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        22,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_UPSIZER_AHB_USBHS_ACLK),
    GateClock::new(
        "aclk_fsys_200_aclk_upsizer_dma_fsys1_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        21,
    ),
    GateClock::new(
        "aclk_fsys_200_aclk_upsizer_dma_fsys0_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        20,
    ),
    GateClock::new(
        "aclk_fsys_200_aclk_upsizer_fsys1_to_fsys0_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        19,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_UPSIZER_FSYS1_TO_FSYS0_ACLK)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_bus_d_fsys_aclk_fsysnd",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        18,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_ahb2apb_fsys1_hclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        16,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_ahb2axi_usbhs_hclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        15,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_AHB2AXI_USBHS_HCLK)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_ahb_usbhs_hclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        14,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_AHB_USBHS_HCLK)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_ahb_fsys0_hclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        13,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_xiu_d_fsys1_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        11,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_XIU_D_FSYS1_ACLK)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_xiu_d_fsys0_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        10,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_fsys_200_aclk_upsizer_usbotg_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        9,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_UPSIZER_USBOTG_ACLK),
    GateClock::new(
        "aclk_fsys_200_aclk_ahb2axi_usbotg_hclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        8,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_AHB2AXI_USBOTG_HCLK),
    GateClock::new(
        "aclk_fsys_200_aclk_usbotg20_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        7,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_USBOTG20_ACLK),
    GateClock::new(
        "aclk_fsys_200_aclk_mmc2_i_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        6,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_MMC2_I_ACLK),
    GateClock::new(
        "aclk_fsys_200_aclk_mmc1_i_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        5,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_MMC1_I_ACLK),
    GateClock::new(
        "aclk_fsys_200_aclk_mmc0_i_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        4,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_MMC0_I_ACLK),
    GateClock::new(
        "aclk_fsys_200_aclk_sromc_hclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        3,
    ),
    GateClock::new(
        "aclk_fsys_200_aclk_usbhost20_aclk",
        "mout_aclk_fsys_200_user",
        CLK_ENABLE_ACLK_FSYS_200,
        2,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_USBHOST20_ACLK),
    GateClock::new(
        "aclk_fsys_200_aclk_dma_fsys1_aclk",
        "aclk_fsys_200_aclk_upsizer_dma_fsys1_aclk",
        CLK_ENABLE_ACLK_FSYS_200,
        1,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_DMA_FSYS1_ACLK),
    GateClock::new(
        "aclk_fsys_200_aclk_dma_fsys0_aclk",
        "aclk_fsys_200_aclk_upsizer_dma_fsys0_aclk",
        CLK_ENABLE_ACLK_FSYS_200,
        0,
    )
    .id(CLK_ACLK_FSYS_200_ACLK_DMA_FSYS0_ACLK),
    GateClock::new(
        "sclk_fsys_mmc0_sdclkin_sclk_mmc0_sdclkin",
        "mout_sclk_fsys_mmc0_sdclkin_user",
        CLK_ENABLE_SCLK_FSYS_MMC0_SDCLKIN,
        0,
    )
    .id(CLK_SCLK_FSYS_MMC0_SDCLKIN_SCLK_MMC0_SDCLKIN)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "sclk_fsys_mmc1_sdclkin_sclk_mmc1_sdclkin",
        "mout_sclk_fsys_mmc1_sdclkin_user",
        CLK_ENABLE_SCLK_FSYS_MMC1_SDCLKIN,
        0,
    )
    .id(CLK_SCLK_FSYS_MMC1_SDCLKIN_SCLK_MMC1_SDCLKIN)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "sclk_fsys_mmc2_sdclkin_sclk_mmc2_sdclkin",
        "mout_sclk_fsys_mmc2_sdclkin_user",
        CLK_ENABLE_SCLK_FSYS_MMC2_SDCLKIN,
        0,
    )
    .id(CLK_SCLK_FSYS_MMC2_SDCLKIN_SCLK_MMC2_SDCLKIN)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("sclk_usb20_phy_clkcore", "usb_pll", CLK_ENABLE_SCLK_USB20_PHY_CLKCORE, 0)
        .id(CLK_USB_PLL)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "phyclk_usbhost20_usb20_freeclk",
        "mout_phyclk_usbhost20_usb20_freeclk_user",
        CLK_ENABLE_PHYCLK_USBHOST20_USB20_FREECLK,
        0,
    )
    .id(CLK_PHYCLK_USBHOST20_USB20_FREECLK),
    GateClock::new(
        "phyclk_usbhost20_usb20_phyclock",
        "mout_phyclk_usbhost20_usb20_phyclock_user",
        CLK_ENABLE_PHYCLK_USBHOST20_USB20_PHYCLOCK,
        0,
    )
    .id(CLK_PHYCLK_USBHOST20_USB20_PHYCLOCK),
    GateClock::new(
        "phyclk_usbhost20_usb20_clk48mohci",
        "mout_phyclk_usbhost20_usb20_clk48mohci_user",
        CLK_ENABLE_PHYCLK_USBHOST20_USB20_CLK48MOHCI,
        0,
    )
    .id(CLK_PHYCLK_USBHOST20_USB20_CLK48MOHCI),
    GateClock::new(
        "phyclk_usbhotg_otg20_phyclock_phyclk_usbotg_otg20_phyclock",
        "mout_phyclk_usbotg_otg20_phyclock_user",
        CLK_ENABLE_PHYCLK_USBHOTG_OTG20_PHYCLOCK,
        0,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("mout_aclk_fsys_200_user", "aclk_fsys_200", CLK_CON_MUX_ACLK_FSYS_200_USER, 26),
    GateClock::new(
        "mout_sclk_fsys_mmc0_sdclkin_user",
        "sclk_fsys_mmc0_sdclkin",
        CLK_CON_MUX_SCLK_FSYS_MMC0_SDCLKIN_USER,
        26,
    )
    .id(CLK_MOUT_SCLK_FSYS_MMC0_SDCLKIN_USER)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "mout_sclk_fsys_mmc1_sdclkin_user",
        "sclk_fsys_mmc1_sdclkin",
        CLK_CON_MUX_SCLK_FSYS_MMC1_SDCLKIN_USER,
        26,
    )
    .id(CLK_MOUT_SCLK_FSYS_MMC1_SDCLKIN_USER)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "mout_sclk_fsys_mmc2_sdclkin_user",
        "sclk_fsys_mmc2_sdclkin",
        CLK_CON_MUX_SCLK_FSYS_MMC2_SDCLKIN_USER,
        26,
    )
    .id(CLK_MOUT_SCLK_FSYS_MMC2_SDCLKIN_USER)
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "mout_phyclk_usbhost20_usb20_freeclk_user",
        "phyclk_usbhost20_phy_usb20_freeclk",
        CLK_CON_MUX_PHYCLK_USBHOST20_USB20_FREECLK_USER,
        26,
    ),
    GateClock::new(
        "mout_phyclk_usbhost20_usb20_phyclock_user",
        "phyclk_usbhost20_phy_usb20_phyclock",
        CLK_CON_MUX_PHYCLK_USBHOST20_USB20_PHYCLOCK_USER,
        26,
    ),
    GateClock::new(
        "mout_phyclk_usbhost20_usb20_clk48mohci_user",
        "phyclk_usbhost20_phy_usb20_clk48mohci",
        CLK_CON_MUX_PHYCLK_USBHOST20_USB20_CLK48MOHCI_USER,
        26,
    ),
    GateClock::new(
        "mout_phyclk_usbotg_otg20_phyclock_user",
        "phyclk_usbotg_phy_otg20_phyclock",
        CLK_CON_MUX_PHYCLK_USBOTG_OTG20_PHYCLOCK_USER,
        26,
    )
    .id(CLK_MOUT_PHYCLK_USBOTG_OTG20_PHYCLOCK_USER),
];

pub static CMU_INFO: CmuInfo = CmuInfo {
    pll_clks: PLL_CLKS,
    gate_clks: GATE_CLKS,
    fixed_clks: FIXED_CLKS,
    nr_clk_ids: NR_CLK,
    clk_regs: CLK_REGS,
    ..CmuInfo::EMPTY
};

pub static CMU: Cmu = Cmu {
    name: "fsys",
    compatible: "samsung,exynos3475-cmu-fsys",
    base: 0x1373_0000,
    info: &CMU_INFO,
};

/// Registers CMU_FSYS with the clock framework.
pub fn init(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
    crate::cmu::register_one(node, &CMU, registrar);
}
