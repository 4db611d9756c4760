//! CMU_TOP: bus and kernel clock distribution.
//!
//! Every `*_user` mux of the other blocks is fed from a gate in this block.

use crate::{
    clock::{
        ClockFlags,
        DivClock,
        GateClock,
        MuxClock,
    },
    cmu::{Cmu, CmuInfo, CmuRegistrar},
    dt_bindings::clock::exynos3475::top::*,
    of::OfNode,
};

pub const CLK_CON_MUX_BUS_PLL_USER: u32 = 0x0200;
pub const CLK_CON_MUX_MEDIA_PLL_USER: u32 = 0x0204;
pub const CLK_CON_MUX_ACLK_BUS0_333: u32 = 0x0208;
pub const CLK_CON_MUX_ACLK_BUS2_333: u32 = 0x020c;
pub const CLK_CON_MUX_ACLK_MFCMSCL_200: u32 = 0x0210;
pub const CLK_CON_MUX_ACLK_MFCMSCL_333: u32 = 0x0214;
pub const CLK_CON_MUX_SCLK_FSYS_MMC0_SDCLKIN: u32 = 0x0218;
pub const CLK_CON_MUX_SCLK_FSYS_MMC1_SDCLKIN: u32 = 0x021c;
pub const CLK_CON_MUX_SCLK_FSYS_MMC2_SDCLKIN: u32 = 0x0220;
pub const CLK_CON_MUX_SCLK_PERI_SPI0_SPI_EXT_CLK: u32 = 0x0224;
pub const CLK_CON_MUX_SCLK_PERI_SPI1_SPI_EXT_CLK: u32 = 0x0228;
pub const CLK_CON_MUX_SCLK_PERI_SPI2_SPI_EXT_CLK: u32 = 0x022c;
pub const CLK_CON_MUX_SCLK_PERI_UART0_EXT_UCLK: u32 = 0x0230;
pub const CLK_CON_MUX_SCLK_PERI_UART1_EXT_UCLK: u32 = 0x0234;
pub const CLK_CON_MUX_SCLK_PERI_UART2_EXT_UCLK: u32 = 0x0238;
pub const CLK_CON_MUX_SCLK_ISP_SENSOR0: u32 = 0x023c;
pub const CLK_CON_MUX_SCLK_ISP_SENSOR1: u32 = 0x0240;
pub const CLK_CON_DIV_ACLK_FSYS_200: u32 = 0x0400;
pub const CLK_CON_DIV_ACLK_IMEM_266: u32 = 0x0404;
pub const CLK_CON_DIV_ACLK_IMEM_200: u32 = 0x0408;
pub const CLK_CON_DIV_ACLK_BUS0_333: u32 = 0x040c;
pub const CLK_CON_DIV_ACLK_BUS2_333: u32 = 0x0410;
pub const CLK_CON_DIV_ACLK_PERI_66: u32 = 0x0414;
pub const CLK_CON_DIV_ACLK_G3D_400: u32 = 0x0418;
pub const CLK_CON_DIV_ACLK_MFCMSCL_200: u32 = 0x041c;
pub const CLK_CON_DIV_ACLK_MFCMSCL_333: u32 = 0x0420;
pub const CLK_CON_DIV_SCLK_FSYS_MMC0_SDCLKIN_A: u32 = 0x0424;
pub const CLK_CON_DIV_SCLK_FSYS_MMC0_SDCLKIN_B: u32 = 0x0428;
pub const CLK_CON_DIV_SCLK_FSYS_MMC1_SDCLKIN_A: u32 = 0x042c;
pub const CLK_CON_DIV_SCLK_FSYS_MMC1_SDCLKIN_B: u32 = 0x0430;
pub const CLK_CON_DIV_SCLK_FSYS_MMC2_SDCLKIN_A: u32 = 0x0434;
pub const CLK_CON_DIV_SCLK_FSYS_MMC2_SDCLKIN_B: u32 = 0x0438;
pub const CLK_CON_DIV_SCLK_PERI_SPI0_A: u32 = 0x043c;
pub const CLK_CON_DIV_SCLK_PERI_SPI0_B: u32 = 0x0440;
pub const CLK_CON_DIV_SCLK_PERI_SPI1_A: u32 = 0x0444;
pub const CLK_CON_DIV_SCLK_PERI_SPI1_B: u32 = 0x0448;
pub const CLK_CON_DIV_SCLK_PERI_SPI2_A: u32 = 0x044c;
pub const CLK_CON_DIV_SCLK_PERI_SPI2_B: u32 = 0x0450;
pub const CLK_CON_DIV_SCLK_PERI_UART0: u32 = 0x0454;
pub const CLK_CON_DIV_SCLK_PERI_UART1: u32 = 0x0458;
pub const CLK_CON_DIV_SCLK_PERI_UART2: u32 = 0x045c;
pub const CLK_CON_DIV_SCLK_ISP_SENSOR0_A: u32 = 0x0460;
pub const CLK_CON_DIV_SCLK_ISP_SENSOR0_B: u32 = 0x0464;
pub const CLK_CON_DIV_SCLK_ISP_SENSOR1_A: u32 = 0x0468;
pub const CLK_CON_DIV_SCLK_ISP_SENSOR1_B: u32 = 0x046c;
pub const CLK_ENABLE_ACLK_FSYS_200_TOP: u32 = 0x0800;
pub const CLK_ENABLE_ACLK_IMEM_266_TOP: u32 = 0x0804;
pub const CLK_ENABLE_ACLK_IMEM_200_TOP: u32 = 0x0808;
pub const CLK_ENABLE_ACLK_BUS0_333: u32 = 0x080c;
pub const CLK_ENABLE_ACLK_BUS2_333: u32 = 0x0810;
pub const CLK_ENABLE_ACLK_PERI_66: u32 = 0x0814;
pub const CLK_ENABLE_ACLK_G3D_400: u32 = 0x0818;
pub const CLK_ENABLE_ACLK_MFCMSCL_200_TOP: u32 = 0x081c;
pub const CLK_ENABLE_ACLK_MFCMSCL_333_TOP: u32 = 0x0820;
pub const CLK_ENABLE_SCLK_FSYS_MMC0_SDCLKIN_TOP: u32 = 0x0824;
pub const CLK_ENABLE_SCLK_FSYS_MMC1_SDCLKIN_TOP: u32 = 0x0828;
pub const CLK_ENABLE_SCLK_FSYS_MMC2_SDCLKIN_TOP: u32 = 0x082c;
pub const CLK_ENABLE_SCLK_PERI_SPI0_SPI_EXT_CLK_TOP: u32 = 0x0830;
pub const CLK_ENABLE_SCLK_PERI_SPI1_SPI_EXT_CLK_TOP: u32 = 0x0834;
pub const CLK_ENABLE_SCLK_PERI_SPI2_SPI_EXT_CLK_TOP: u32 = 0x0838;
pub const CLK_ENABLE_SCLK_PERI_UART0_EXT_UCLK_TOP: u32 = 0x083c;
pub const CLK_ENABLE_SCLK_PERI_UART1_EXT_UCLK_TOP: u32 = 0x0840;
pub const CLK_ENABLE_SCLK_PERI_UART2_EXT_UCLK_TOP: u32 = 0x0844;
pub const CLK_ENABLE_SCLK_ISP_SENSOR0: u32 = 0x0848;
pub const CLK_ENABLE_SCLK_ISP_SENSOR1: u32 = 0x084c;

static CLK_REGS: &[u32] = &[
    CLK_CON_MUX_BUS_PLL_USER,
    CLK_CON_MUX_MEDIA_PLL_USER,
    CLK_CON_MUX_ACLK_BUS0_333,
    CLK_CON_MUX_ACLK_BUS2_333,
    CLK_CON_MUX_ACLK_MFCMSCL_200,
    CLK_CON_MUX_ACLK_MFCMSCL_333,
    CLK_CON_MUX_SCLK_FSYS_MMC0_SDCLKIN,
    CLK_CON_MUX_SCLK_FSYS_MMC1_SDCLKIN,
    CLK_CON_MUX_SCLK_FSYS_MMC2_SDCLKIN,
    CLK_CON_MUX_SCLK_PERI_SPI0_SPI_EXT_CLK,
    CLK_CON_MUX_SCLK_PERI_SPI1_SPI_EXT_CLK,
    CLK_CON_MUX_SCLK_PERI_SPI2_SPI_EXT_CLK,
    CLK_CON_MUX_SCLK_PERI_UART0_EXT_UCLK,
    CLK_CON_MUX_SCLK_PERI_UART1_EXT_UCLK,
    CLK_CON_MUX_SCLK_PERI_UART2_EXT_UCLK,
    CLK_CON_MUX_SCLK_ISP_SENSOR0,
    CLK_CON_MUX_SCLK_ISP_SENSOR1,
    CLK_CON_DIV_ACLK_FSYS_200,
    CLK_CON_DIV_ACLK_IMEM_266,
    CLK_CON_DIV_ACLK_IMEM_200,
    CLK_CON_DIV_ACLK_BUS0_333,
    CLK_CON_DIV_ACLK_BUS2_333,
    CLK_CON_DIV_ACLK_PERI_66,
    CLK_CON_DIV_ACLK_G3D_400,
    CLK_CON_DIV_ACLK_MFCMSCL_200,
    CLK_CON_DIV_ACLK_MFCMSCL_333,
    CLK_CON_DIV_SCLK_FSYS_MMC0_SDCLKIN_A,
    CLK_CON_DIV_SCLK_FSYS_MMC0_SDCLKIN_B,
    CLK_CON_DIV_SCLK_FSYS_MMC1_SDCLKIN_A,
    CLK_CON_DIV_SCLK_FSYS_MMC1_SDCLKIN_B,
    CLK_CON_DIV_SCLK_FSYS_MMC2_SDCLKIN_A,
    CLK_CON_DIV_SCLK_FSYS_MMC2_SDCLKIN_B,
    CLK_CON_DIV_SCLK_PERI_SPI0_A,
    CLK_CON_DIV_SCLK_PERI_SPI0_B,
    CLK_CON_DIV_SCLK_PERI_SPI1_A,
    CLK_CON_DIV_SCLK_PERI_SPI1_B,
    CLK_CON_DIV_SCLK_PERI_SPI2_A,
    CLK_CON_DIV_SCLK_PERI_SPI2_B,
    CLK_CON_DIV_SCLK_PERI_UART0,
    CLK_CON_DIV_SCLK_PERI_UART1,
    CLK_CON_DIV_SCLK_PERI_UART2,
    CLK_CON_DIV_SCLK_ISP_SENSOR0_A,
    CLK_CON_DIV_SCLK_ISP_SENSOR0_B,
    CLK_CON_DIV_SCLK_ISP_SENSOR1_A,
    CLK_CON_DIV_SCLK_ISP_SENSOR1_B,
    CLK_ENABLE_ACLK_FSYS_200_TOP,
    CLK_ENABLE_ACLK_IMEM_266_TOP,
    CLK_ENABLE_ACLK_IMEM_200_TOP,
    CLK_ENABLE_ACLK_BUS0_333,
    CLK_ENABLE_ACLK_BUS2_333,
    CLK_ENABLE_ACLK_PERI_66,
    CLK_ENABLE_ACLK_G3D_400,
    CLK_ENABLE_ACLK_MFCMSCL_200_TOP,
    CLK_ENABLE_ACLK_MFCMSCL_333_TOP,
    CLK_ENABLE_SCLK_FSYS_MMC0_SDCLKIN_TOP,
    CLK_ENABLE_SCLK_FSYS_MMC1_SDCLKIN_TOP,
    CLK_ENABLE_SCLK_FSYS_MMC2_SDCLKIN_TOP,
    CLK_ENABLE_SCLK_PERI_SPI0_SPI_EXT_CLK_TOP,
    CLK_ENABLE_SCLK_PERI_SPI1_SPI_EXT_CLK_TOP,
    CLK_ENABLE_SCLK_PERI_SPI2_SPI_EXT_CLK_TOP,
    CLK_ENABLE_SCLK_PERI_UART0_EXT_UCLK_TOP,
    CLK_ENABLE_SCLK_PERI_UART1_EXT_UCLK_TOP,
    CLK_ENABLE_SCLK_PERI_UART2_EXT_UCLK_TOP,
    CLK_ENABLE_SCLK_ISP_SENSOR0,
    CLK_ENABLE_SCLK_ISP_SENSOR1,
];

const MOUT_ACLK_BUS0_333_P: &[&str] = &["mout_media_pll_user", "mout_bus_pll_user"];
const MOUT_ACLK_BUS2_333_P: &[&str] = &["mout_media_pll_user", "mout_bus_pll_user"];
const MOUT_ACLK_MFCMSCL_200_P: &[&str] = &["mout_media_pll_user", "mout_bus_pll_user"];
const MOUT_ACLK_MFCMSCL_333_P: &[&str] = &["mout_media_pll_user", "mout_bus_pll_user"];
const MOUT_SCLK_FSYS_MMC0_SDCLKIN_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_FSYS_MMC1_SDCLKIN_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_FSYS_MMC2_SDCLKIN_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_PERI_SPI0_SPI_EXT_CLK_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_PERI_SPI1_SPI_EXT_CLK_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_PERI_SPI2_SPI_EXT_CLK_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_PERI_UART0_EXT_UCLK_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_PERI_UART1_EXT_UCLK_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_PERI_UART2_EXT_UCLK_P: &[&str] = &["mout_bus_pll_user", "mout_media_pll_user"];
const MOUT_SCLK_ISP_SENSOR0_P: &[&str] = &["oscclk", "mout_bus_pll_user"];
const MOUT_SCLK_ISP_SENSOR1_P: &[&str] = &["oscclk", "mout_bus_pll_user"];

static MUX_CLKS: &[MuxClock] = &[
    MuxClock::new("mout_aclk_bus0_333", MOUT_ACLK_BUS0_333_P, CLK_CON_MUX_ACLK_BUS0_333, 12, 1)
        .id(CLK_MOUT_ACLK_BUS0_333),
    MuxClock::new("mout_aclk_bus2_333", MOUT_ACLK_BUS2_333_P, CLK_CON_MUX_ACLK_BUS2_333, 12, 1)
        .id(CLK_MOUT_ACLK_BUS2_333),
    MuxClock::new(
        "mout_aclk_mfcmscl_200",
        MOUT_ACLK_MFCMSCL_200_P,
        CLK_CON_MUX_ACLK_MFCMSCL_200,
        12,
        1,
    )
    .id(CLK_MOUT_ACLK_MFCMSCL_200),
    MuxClock::new(
        "mout_aclk_mfcmscl_333",
        MOUT_ACLK_MFCMSCL_333_P,
        CLK_CON_MUX_ACLK_MFCMSCL_333,
        12,
        1,
    )
    .id(CLK_MOUT_ACLK_MFCMSCL_333),
    MuxClock::new(
        "mout_sclk_fsys_mmc0_sdclkin",
        MOUT_SCLK_FSYS_MMC0_SDCLKIN_P,
        CLK_CON_MUX_SCLK_FSYS_MMC0_SDCLKIN,
        12,
        1,
    )
    .id(CLK_MOUT_SCLK_FSYS_MMC0_SDCLKIN),
    MuxClock::new(
        "mout_sclk_fsys_mmc1_sdclkin",
        MOUT_SCLK_FSYS_MMC1_SDCLKIN_P,
        CLK_CON_MUX_SCLK_FSYS_MMC1_SDCLKIN,
        12,
        1,
    )
    .id(CLK_MOUT_SCLK_FSYS_MMC1_SDCLKIN),
    MuxClock::new(
        "mout_sclk_fsys_mmc2_sdclkin",
        MOUT_SCLK_FSYS_MMC2_SDCLKIN_P,
        CLK_CON_MUX_SCLK_FSYS_MMC2_SDCLKIN,
        12,
        1,
    )
    .id(CLK_MOUT_SCLK_FSYS_MMC2_SDCLKIN),
    MuxClock::new(
        "mout_sclk_peri_spi0_spi_ext_clk",
        MOUT_SCLK_PERI_SPI0_SPI_EXT_CLK_P,
        CLK_CON_MUX_SCLK_PERI_SPI0_SPI_EXT_CLK,
        12,
        1,
    ),
    MuxClock::new(
        "mout_sclk_peri_spi1_spi_ext_clk",
        MOUT_SCLK_PERI_SPI1_SPI_EXT_CLK_P,
        CLK_CON_MUX_SCLK_PERI_SPI1_SPI_EXT_CLK,
        12,
        1,
    ),
    MuxClock::new(
        "mout_sclk_peri_spi2_spi_ext_clk",
        MOUT_SCLK_PERI_SPI2_SPI_EXT_CLK_P,
        CLK_CON_MUX_SCLK_PERI_SPI2_SPI_EXT_CLK,
        12,
        1,
    ),
    MuxClock::new(
        "mout_sclk_peri_uart0_ext_uclk",
        MOUT_SCLK_PERI_UART0_EXT_UCLK_P,
        CLK_CON_MUX_SCLK_PERI_UART0_EXT_UCLK,
        12,
        1,
    ),
    MuxClock::new(
        "mout_sclk_peri_uart1_ext_uclk",
        MOUT_SCLK_PERI_UART1_EXT_UCLK_P,
        CLK_CON_MUX_SCLK_PERI_UART1_EXT_UCLK,
        12,
        1,
    ),
    MuxClock::new(
        "mout_sclk_peri_uart2_ext_uclk",
        MOUT_SCLK_PERI_UART2_EXT_UCLK_P,
        CLK_CON_MUX_SCLK_PERI_UART2_EXT_UCLK,
        12,
        1,
    ),
    MuxClock::new(
        "mout_sclk_isp_sensor0",
        MOUT_SCLK_ISP_SENSOR0_P,
        CLK_CON_MUX_SCLK_ISP_SENSOR0,
        12,
        1,
    )
    .id(CLK_MOUT_SCLK_ISP_SENSOR0),
    MuxClock::new(
        "mout_sclk_isp_sensor1",
        MOUT_SCLK_ISP_SENSOR1_P,
        CLK_CON_MUX_SCLK_ISP_SENSOR1,
        12,
        1,
    )
    .id(CLK_MOUT_SCLK_ISP_SENSOR1),
];

static DIV_CLKS: &[DivClock] = &[
    DivClock::new("dout_aclk_fsys_200", "mout_bus_pll_user", CLK_CON_DIV_ACLK_FSYS_200, 0, 4)
        .id(CLK_DOUT_ACLK_FSYS_200),
    DivClock::new("dout_aclk_imem_266", "mout_bus_pll_user", CLK_CON_DIV_ACLK_IMEM_266, 0, 4)
        .id(CLK_DOUT_ACLK_IMEM_266),
    DivClock::new("dout_aclk_imem_200", "mout_bus_pll_user", CLK_CON_DIV_ACLK_IMEM_200, 0, 4)
        .id(CLK_DOUT_ACLK_IMEM_200),
    DivClock::new("dout_aclk_bus0_333", "mout_aclk_bus0_333", CLK_CON_DIV_ACLK_BUS0_333, 0, 4)
        .id(CLK_DOUT_ACLK_BUS0_333),
    DivClock::new("dout_aclk_bus2_333", "mout_aclk_bus2_333", CLK_CON_DIV_ACLK_BUS2_333, 0, 4)
        .id(CLK_DOUT_ACLK_BUS2_333),
    DivClock::new("dout_aclk_peri_66", "mout_bus_pll_user", CLK_CON_DIV_ACLK_PERI_66, 0, 4)
        .id(CLK_DOUT_ACLK_PERI_66),
    DivClock::new("dout_aclk_g3d_400", "mout_bus_pll_user", CLK_CON_DIV_ACLK_G3D_400, 0, 4)
        .id(CLK_DOUT_ACLK_G3D_400),
    DivClock::new(
        "dout_aclk_mfcmscl_200",
        "mout_aclk_mfcmscl_200",
        CLK_CON_DIV_ACLK_MFCMSCL_200,
        0,
        4,
    )
    .id(CLK_DOUT_ACLK_MFCMSCL_200),
    DivClock::new(
        "dout_aclk_mfcmscl_333",
        "mout_aclk_mfcmscl_333",
        CLK_CON_DIV_ACLK_MFCMSCL_333,
        0,
        4,
    )
    .id(CLK_DOUT_ACLK_MFCMSCL_333),
    DivClock::new(
        "dout_sclk_fsys_mmc0_sdclkin_a",
        "mout_sclk_fsys_mmc0_sdclkin",
        CLK_CON_DIV_SCLK_FSYS_MMC0_SDCLKIN_A,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_FSYS_MMC0_SDCLKIN_A),
    DivClock::new(
        "dout_sclk_fsys_mmc0_sdclkin_b",
        "dout_sclk_fsys_mmc0_sdclkin_a",
        CLK_CON_DIV_SCLK_FSYS_MMC0_SDCLKIN_B,
        0,
        8,
    )
    .id(CLK_DOUT_SCLK_FSYS_MMC0_SDCLKIN_B),
    DivClock::new(
        "dout_sclk_fsys_mmc1_sdclkin_a",
        "mout_sclk_fsys_mmc1_sdclkin",
        CLK_CON_DIV_SCLK_FSYS_MMC1_SDCLKIN_A,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_FSYS_MMC1_SDCLKIN_A),
    DivClock::new(
        "dout_sclk_fsys_mmc1_sdclkin_b",
        "dout_sclk_fsys_mmc1_sdclkin_a",
        CLK_CON_DIV_SCLK_FSYS_MMC1_SDCLKIN_B,
        0,
        8,
    )
    .id(CLK_DOUT_SCLK_FSYS_MMC1_SDCLKIN_B),
    DivClock::new(
        "dout_sclk_fsys_mmc2_sdclkin_a",
        "mout_sclk_fsys_mmc2_sdclkin",
        CLK_CON_DIV_SCLK_FSYS_MMC2_SDCLKIN_A,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_FSYS_MMC2_SDCLKIN_A),
    DivClock::new(
        "dout_sclk_fsys_mmc2_sdclkin_b",
        "dout_sclk_fsys_mmc2_sdclkin_a",
        CLK_CON_DIV_SCLK_FSYS_MMC2_SDCLKIN_B,
        0,
        8,
    )
    .id(CLK_DOUT_SCLK_FSYS_MMC2_SDCLKIN_B),
    DivClock::new(
        "dout_sclk_peri_spi0_a",
        "mout_sclk_peri_spi0_spi_ext_clk",
        CLK_CON_DIV_SCLK_PERI_SPI0_A,
        0,
        4,
    ),
    DivClock::new(
        "dout_sclk_peri_spi0_b",
        "dout_sclk_peri_spi0_a",
        CLK_CON_DIV_SCLK_PERI_SPI0_B,
        0,
        8,
    ),
    DivClock::new(
        "dout_sclk_peri_spi1_a",
        "mout_sclk_peri_spi1_spi_ext_clk",
        CLK_CON_DIV_SCLK_PERI_SPI1_A,
        0,
        4,
    ),
    DivClock::new(
        "dout_sclk_peri_spi1_b",
        "dout_sclk_peri_spi1_a",
        CLK_CON_DIV_SCLK_PERI_SPI1_B,
        0,
        8,
    ),
    DivClock::new(
        "dout_sclk_peri_spi2_a",
        "mout_sclk_peri_spi2_spi_ext_clk",
        CLK_CON_DIV_SCLK_PERI_SPI2_A,
        0,
        4,
    ),
    DivClock::new(
        "dout_sclk_peri_spi2_b",
        "dout_sclk_peri_spi2_a",
        CLK_CON_DIV_SCLK_PERI_SPI2_B,
        0,
        8,
    ),
    DivClock::new(
        "dout_sclk_peri_uart0",
        "mout_sclk_peri_uart0_ext_uclk",
        CLK_CON_DIV_SCLK_PERI_UART0,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_PERI_UART0),
    DivClock::new(
        "dout_sclk_peri_uart1",
        "mout_sclk_peri_uart1_ext_uclk",
        CLK_CON_DIV_SCLK_PERI_UART1,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_PERI_UART1),
    DivClock::new(
        "dout_sclk_peri_uart2",
        "mout_sclk_peri_uart2_ext_uclk",
        CLK_CON_DIV_SCLK_PERI_UART2,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_PERI_UART2),
    DivClock::new(
        "dout_sclk_isp_sensor0_a",
        "mout_sclk_isp_sensor0",
        CLK_CON_DIV_SCLK_ISP_SENSOR0_A,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_ISP_SENSOR0_A),
    DivClock::new(
        "dout_sclk_isp_sensor0_b",
        "dout_sclk_isp_sensor0_a",
        CLK_CON_DIV_SCLK_ISP_SENSOR0_B,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_ISP_SENSOR0_B),
    DivClock::new(
        "dout_sclk_isp_sensor1_a",
        "mout_sclk_isp_sensor1",
        CLK_CON_DIV_SCLK_ISP_SENSOR1_A,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_ISP_SENSOR1_A),
    DivClock::new(
        "dout_sclk_isp_sensor1_b",
        "dout_sclk_isp_sensor1_a",
        CLK_CON_DIV_SCLK_ISP_SENSOR1_B,
        0,
        4,
    )
    .id(CLK_DOUT_SCLK_ISP_SENSOR1_B),
];

static GATE_CLKS: &[GateClock] = &[
    GateClock::new("aclk_fsys_200", "dout_aclk_fsys_200", CLK_ENABLE_ACLK_FSYS_200_TOP, 0),
    GateClock::new("aclk_imem_266", "dout_aclk_imem_266", CLK_ENABLE_ACLK_IMEM_266_TOP, 0)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("aclk_imem_200", "dout_aclk_imem_200", CLK_ENABLE_ACLK_IMEM_200_TOP, 0)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("aclk_bus0_333", "dout_aclk_bus0_333", CLK_ENABLE_ACLK_BUS0_333, 0)
        .id(CLK_ACLK_BUS0_333)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("aclk_bus2_333", "dout_aclk_bus2_333", CLK_ENABLE_ACLK_BUS2_333, 0)
        .id(CLK_ACLK_BUS2_333)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("aclk_peri_66", "dout_aclk_peri_66", CLK_ENABLE_ACLK_PERI_66, 0)
        .id(CLK_ACLK_PERI_66),
    GateClock::new("aclk_g3d_400", "dout_aclk_g3d_400", CLK_ENABLE_ACLK_G3D_400, 0)
        .id(CLK_ACLK_G3D_400),
    GateClock::new("aclk_mfcmscl_200", "dout_aclk_mfcmscl_200", CLK_ENABLE_ACLK_MFCMSCL_200_TOP, 0),
    GateClock::new("aclk_mfcmscl_333", "dout_aclk_mfcmscl_333", CLK_ENABLE_ACLK_MFCMSCL_333_TOP, 0)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "sclk_fsys_mmc0_sdclkin",
        "dout_sclk_fsys_mmc0_sdclkin_b",
        CLK_ENABLE_SCLK_FSYS_MMC0_SDCLKIN_TOP,
        0,
    )
    .id(CLK_SCLK_FSYS_MMC0_SDCLKIN),
    GateClock::new(
        "sclk_fsys_mmc1_sdclkin",
        "dout_sclk_fsys_mmc1_sdclkin_b",
        CLK_ENABLE_SCLK_FSYS_MMC1_SDCLKIN_TOP,
        0,
    )
    .id(CLK_SCLK_FSYS_MMC1_SDCLKIN),
    GateClock::new(
        "sclk_fsys_mmc2_sdclkin",
        "dout_sclk_fsys_mmc2_sdclkin_b",
        CLK_ENABLE_SCLK_FSYS_MMC2_SDCLKIN_TOP,
        0,
    )
    .id(CLK_SCLK_FSYS_MMC2_SDCLKIN),
    GateClock::new(
        "sclk_peri_spi0_spi_ext_clk",
        "dout_sclk_peri_spi0_b",
        CLK_ENABLE_SCLK_PERI_SPI0_SPI_EXT_CLK_TOP,
        0,
    )
    .flags(ClockFlags::SET_RATE_PARENT),
    GateClock::new(
        "sclk_peri_spi1_spi_ext_clk",
        "dout_sclk_peri_spi1_b",
        CLK_ENABLE_SCLK_PERI_SPI1_SPI_EXT_CLK_TOP,
        0,
    )
    .flags(ClockFlags::SET_RATE_PARENT),
    GateClock::new(
        "sclk_peri_spi2_spi_ext_clk",
        "dout_sclk_peri_spi2_b",
        CLK_ENABLE_SCLK_PERI_SPI2_SPI_EXT_CLK_TOP,
        0,
    )
    .flags(ClockFlags::SET_RATE_PARENT),
    GateClock::new(
        "sclk_peri_uart0_ext_uclk",
        "dout_sclk_peri_uart0",
        CLK_ENABLE_SCLK_PERI_UART0_EXT_UCLK_TOP,
        0,
    ),
    GateClock::new(
        "sclk_peri_uart1_ext_uclk",
        "dout_sclk_peri_uart1",
        CLK_ENABLE_SCLK_PERI_UART1_EXT_UCLK_TOP,
        0,
    ),
    GateClock::new(
        "sclk_peri_uart2_ext_uclk",
        "dout_sclk_peri_uart2",
        CLK_ENABLE_SCLK_PERI_UART2_EXT_UCLK_TOP,
        0,
    ),
    GateClock::new("sclk_isp_sensor0", "dout_sclk_isp_sensor0_b", CLK_ENABLE_SCLK_ISP_SENSOR0, 0)
        .id(CLK_SCLK_ISP_SENSOR0),
    GateClock::new("sclk_isp_sensor1", "dout_sclk_isp_sensor1_b", CLK_ENABLE_SCLK_ISP_SENSOR1, 0)
        .id(CLK_SCLK_ISP_SENSOR1),
    GateClock::new("mout_bus_pll_user", "sclk_bus_pll_top", CLK_CON_MUX_BUS_PLL_USER, 8)
        .id(CLK_MOUT_BUS_PLL_USER)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new("mout_media_pll_user", "sclk_media_pll_top", CLK_CON_MUX_MEDIA_PLL_USER, 4)
        .id(CLK_MOUT_MEDIA_PLL_USER)
        .flags(ClockFlags::IGNORE_UNUSED),
];

pub static CMU_INFO: CmuInfo = CmuInfo {
    mux_clks: MUX_CLKS,
    div_clks: DIV_CLKS,
    gate_clks: GATE_CLKS,
    nr_clk_ids: NR_CLK,
    clk_regs: CLK_REGS,
    ..CmuInfo::EMPTY
};

pub static CMU: Cmu = Cmu {
    name: "top",
    compatible: "samsung,exynos3475-cmu-top",
    base: 0x1001_0000,
    info: &CMU_INFO,
};

/// Registers CMU_TOP with the clock framework.
pub fn init(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
    crate::cmu::register_one(node, &CMU, registrar);
}
