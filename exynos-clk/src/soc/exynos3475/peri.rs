//! CMU_PERI: low-speed peripherals.
//!
//! Only gates live here. Every APB clock hangs off `aclk_peri_66` from
//! CMU_TOP, and the SPI and UART kernel clocks are divided in CMU_TOP as well.

use crate::{
    clock::{ClockFlags, GateClock},
    cmu::{Cmu, CmuInfo, CmuRegistrar},
    dt_bindings::clock::exynos3475::peri::*,
    of::OfNode,
};

pub const CLK_CON_MUX_ACLK_PERI_66_USER: u32 = 0x0200;
pub const CLK_CON_MUX_SCLK_PERI_SPI0_SPI_EXT_CLK_USER: u32 = 0x0204;
pub const CLK_CON_MUX_SCLK_PERI_SPI1_SPI_EXT_CLK_USER: u32 = 0x0208;
pub const CLK_CON_MUX_SCLK_PERI_SPI2_SPI_EXT_CLK_USER: u32 = 0x020c;
pub const CLK_CON_MUX_SCLK_PERI_UART0_EXT_UCLK_USER: u32 = 0x0210;
pub const CLK_CON_MUX_SCLK_PERI_UART1_EXT_UCLK_USER: u32 = 0x0214;
pub const CLK_CON_MUX_SCLK_PERI_UART2_EXT_UCLK_USER: u32 = 0x0218;
pub const CLK_ENABLE_ACLK_PERI_66_1: u32 = 0x0800;
pub const CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC: u32 = 0x0804;
pub const CLK_ENABLE_ACLK_PERI_66_SECURE_RTC_TOP: u32 = 0x0808;
pub const CLK_ENABLE_ACLK_PERI_66_SECURE_CHIPID: u32 = 0x080c;
pub const CLK_ENABLE_ACLK_PERI_66_SECURE_SECKEY: u32 = 0x0810;
pub const CLK_ENABLE_ACLK_PERI_66_SECURE_ANTIRBK_CNT: u32 = 0x0814;
pub const CLK_ENABLE_ACLK_PERI_66_SECURE_MONOTONIC_CNT: u32 = 0x0818;
pub const CLK_ENABLE_ACLK_PERI_66_SECURE_RTC: u32 = 0x081c;
pub const CLK_ENABLE_ACLK_PERI_66_2: u32 = 0x0820;
pub const CLK_ENABLE_SCLK_PERI_SPI0_SPI_EXT_CLK: u32 = 0x082c;
pub const CLK_ENABLE_SCLK_PERI_SPI1_SPI_EXT_CLK: u32 = 0x0830;
pub const CLK_ENABLE_SCLK_PERI_SPI2_SPI_EXT_CLK: u32 = 0x0834;
pub const CLK_ENABLE_SCLK_PERI_UART0_EXT_UCLK: u32 = 0x0838;
pub const CLK_ENABLE_SCLK_PERI_UART1_EXT_UCLK: u32 = 0x083c;
pub const CLK_ENABLE_SCLK_PERI_UART2_EXT_UCLK: u32 = 0x0844;

static CLK_REGS: &[u32] = &[
    CLK_ENABLE_ACLK_PERI_66_1,
    CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
    CLK_ENABLE_ACLK_PERI_66_SECURE_RTC_TOP,
    CLK_ENABLE_ACLK_PERI_66_SECURE_CHIPID,
    CLK_ENABLE_ACLK_PERI_66_SECURE_SECKEY,
    CLK_ENABLE_ACLK_PERI_66_SECURE_ANTIRBK_CNT,
    CLK_ENABLE_ACLK_PERI_66_SECURE_MONOTONIC_CNT,
    CLK_ENABLE_ACLK_PERI_66_SECURE_RTC,
    CLK_ENABLE_ACLK_PERI_66_2,
    CLK_ENABLE_SCLK_PERI_SPI0_SPI_EXT_CLK,
    CLK_ENABLE_SCLK_PERI_SPI1_SPI_EXT_CLK,
    CLK_ENABLE_SCLK_PERI_SPI2_SPI_EXT_CLK,
    CLK_ENABLE_SCLK_PERI_UART0_EXT_UCLK,
    CLK_ENABLE_SCLK_PERI_UART1_EXT_UCLK,
    CLK_ENABLE_SCLK_PERI_UART2_EXT_UCLK,
    CLK_CON_MUX_ACLK_PERI_66_USER,
    CLK_CON_MUX_SCLK_PERI_SPI0_SPI_EXT_CLK_USER,
    CLK_CON_MUX_SCLK_PERI_SPI1_SPI_EXT_CLK_USER,
    CLK_CON_MUX_SCLK_PERI_SPI2_SPI_EXT_CLK_USER,
    CLK_CON_MUX_SCLK_PERI_UART0_EXT_UCLK_USER,
    CLK_CON_MUX_SCLK_PERI_UART1_EXT_UCLK_USER,
    CLK_CON_MUX_SCLK_PERI_UART2_EXT_UCLK_USER,
];

static GATE_CLKS: &[GateClock] = &[
    GateClock::new(
        "aclk_peri_66_1_pclk_hsi2c8_ipclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        18,
    )
    .id(CLK_ACLK_PERI_PCLK_HSI2C8_IPCLK),
    GateClock::new(
        "aclk_peri_66_1_pclk_hsi2c7_ipclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        17,
    )
    .id(CLK_ACLK_PERI_PCLK_HSI2C7_IPCLK),
    GateClock::new(
        "aclk_peri_66_1_pclk_hsi2c1_ipclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        16,
    )
    .id(CLK_ACLK_PERI_PCLK_HSI2C1_IPCLK),
    GateClock::new(
        "aclk_peri_66_1_pclk_hsi2c0_ipclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        15,
    )
    .id(CLK_ACLK_PERI_PCLK_HSI2C0_IPCLK),
    GateClock::new(
        "aclk_peri_66_1_pclk_i2c6_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        14,
    )
    .id(CLK_ACLK_PERI_PCLK_I2C6_PCLK),
    GateClock::new(
        "aclk_peri_66_1_pclk_i2c5_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        13,
    )
    .id(CLK_ACLK_PERI_PCLK_I2C5_PCLK),
    GateClock::new(
        "aclk_peri_66_1_pclk_i2c4_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        12,
    )
    .id(CLK_ACLK_PERI_PCLK_I2C4_PCLK),
    GateClock::new(
        "aclk_peri_66_1_pclk_i2c3_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        11,
    )
    .id(CLK_ACLK_PERI_PCLK_I2C3_PCLK),
    GateClock::new(
        "aclk_peri_66_1_aclk_ahb2apb_peric0_hclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        9,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_1_pclk_efuse_writer_sc_apbif_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        7,
    ),
    GateClock::new(
        "aclk_peri_66_1_pclk_cmu_top_apbif_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        6,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_1_pclk_wdt_cpu_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        5,
    )
    .id(CLK_ACLK_PERI_PCLK_WDT_CPU_PCLK),
    GateClock::new(
        "aclk_peri_66_1_pclk_mct_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        4,
    )
    .id(CLK_ACLK_PERI_PCLK_MCT_PCLK),
    GateClock::new(
        "aclk_peri_66_1_aclk_ahb2apb_peris1_hclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        3,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_1_aclk_ahb2apb_peris0_hclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_1,
        2,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_secure_tzpc_pclk_tzpc10_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
        10,
    ),
    GateClock::new(
        "aclk_peri_66_secure_tzpc_pclk_tzpc9_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
        9,
    ),
    GateClock::new(
        "aclk_peri_66_secure_tzpc_pclk_tzpc8_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
        8,
    ),
    GateClock::new(
        "aclk_peri_66_secure_tzpc_pclk_tzpc7_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
        7,
    ),
    GateClock::new(
        "aclk_peri_66_secure_tzpc_pclk_tzpc6_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
        6,
    ),
    GateClock::new(
        "aclk_peri_66_secure_tzpc_pclk_tzpc4_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
        4,
    ),
    GateClock::new(
        "aclk_peri_66_secure_tzpc_pclk_tzpc3_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
        3,
    ),
    GateClock::new(
        "aclk_peri_66_secure_tzpc_pclk_tzpc2_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_TZPC,
        2,
    ),
    GateClock::new(
        "aclk_peri_66_secure_rtc_top_pclk_rtc_top_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_RTC_TOP,
        0,
    ),
    GateClock::new(
        "aclk_peri_66_secure_chipid_pclk_chipid_apbif_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_CHIPID,
        0,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_secure_rtc_pclk_rtc_apbif_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_SECURE_RTC,
        0,
    )
    .id(CLK_ACLK_PERI_SECURE_RTC_PCLK_RTC_APBIF_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_sysreg_peri_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        17,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_2_pclk_pmu_peri_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        16,
    ),
    GateClock::new(
        "aclk_peri_66_2_pclk_gpio_alive_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        15,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_2_pclk_gpio_ese_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        14,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_2_pclk_gpio_touch_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        13,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_2_pclk_gpio_nfc_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        12,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_2_pclk_gpio_peri_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        11,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_2_pclk_tmu0_apbif_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        10,
    )
    .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "aclk_peri_66_2_pclk_pwm_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        9,
    )
    .id(CLK_ACLK_PERI_PCLK_PWM_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_i2c10_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        8,
    )
    .id(CLK_ACLK_PERI_PCLK_I2C10_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_i2c9_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        7,
    )
    .id(CLK_ACLK_PERI_PCLK_I2C9_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_spi2_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        6,
    )
    .id(CLK_ACLK_PERI_PCLK_SPI2_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_spi1_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        5,
    )
    .id(CLK_ACLK_PERI_PCLK_SPI1_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_spi0_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        4,
    )
    .id(CLK_ACLK_PERI_PCLK_SPI0_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_adcif_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        3,
    )
    .id(CLK_ACLK_PERI_PCLK_ADCIF_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_uart2_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        2,
    )
    .id(CLK_ACLK_PERI_PCLK_UART2_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_uart1_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        1,
    )
    .id(CLK_ACLK_PERI_PCLK_UART1_PCLK),
    GateClock::new(
        "aclk_peri_66_2_pclk_uart0_pclk",
        "mout_aclk_peri_66_user",
        CLK_ENABLE_ACLK_PERI_66_2,
        0,
    )
    .id(CLK_ACLK_PERI_PCLK_UART0_PCLK),
    GateClock::new(
        "sclk_peri_spi0_spi_ext_clk_sclk_spi0_spi_ext_clk",
        "mout_sclk_peri_spi0_spi_ext_clk_user",
        CLK_ENABLE_SCLK_PERI_SPI0_SPI_EXT_CLK,
        0,
    )
    .id(CLK_SCLK_PERI_SPI0_SPI_EXT_CLK_SCLK_SPI0_SPI_EXT_CLK)
    .flags(ClockFlags::SET_RATE_PARENT),
    GateClock::new(
        "sclk_peri_spi1_spi_ext_clk_sclk_spi1_spi_ext_clk",
        "mout_sclk_peri_spi1_spi_ext_clk_user",
        CLK_ENABLE_SCLK_PERI_SPI1_SPI_EXT_CLK,
        0,
    )
    .id(CLK_SCLK_PERI_SPI1_SPI_EXT_CLK_SCLK_SPI1_SPI_EXT_CLK)
    .flags(ClockFlags::SET_RATE_PARENT),
    GateClock::new(
        "sclk_peri_spi2_spi_ext_clk_sclk_spi2_spi_ext_clk",
        "mout_sclk_peri_spi2_spi_ext_clk_user",
        CLK_ENABLE_SCLK_PERI_SPI2_SPI_EXT_CLK,
        0,
    )
    .id(CLK_SCLK_PERI_SPI2_SPI_EXT_CLK_SCLK_SPI2_SPI_EXT_CLK)
    .flags(ClockFlags::SET_RATE_PARENT),
    GateClock::new(
        "sclk_peri_uart0_ext_uclk_sclk_uart0_ext_uclk",
        "mout_sclk_peri_uart0_ext_uclk_user",
        CLK_ENABLE_SCLK_PERI_UART0_EXT_UCLK,
        0,
    )
    .id(CLK_SCLK_PERI_UART0_EXT_UCLK_SCLK_UART0_EXT_UCLK),
    GateClock::new(
        "sclk_peri_uart1_ext_uclk_sclk_uart1_ext_uclk",
        "mout_sclk_peri_uart1_ext_uclk_user",
        CLK_ENABLE_SCLK_PERI_UART1_EXT_UCLK,
        0,
    )
    .id(CLK_SCLK_PERI_UART1_EXT_UCLK_SCLK_UART1_EXT_UCLK),
    GateClock::new(
        "sclk_peri_uart2_ext_uclk_sclk_uart2_ext_uclk",
        "mout_sclk_peri_uart2_ext_uclk_user",
        CLK_ENABLE_SCLK_PERI_UART2_EXT_UCLK,
        0,
    )
    .id(CLK_SCLK_PERI_UART2_EXT_UCLK_SCLK_UART2_EXT_UCLK),
    GateClock::new("mout_aclk_peri_66_user", "aclk_peri_66", CLK_CON_MUX_ACLK_PERI_66_USER, 26)
        .flags(ClockFlags::IGNORE_UNUSED),
    GateClock::new(
        "mout_sclk_peri_spi0_spi_ext_clk_user",
        "sclk_peri_spi0_spi_ext_clk",
        CLK_CON_MUX_SCLK_PERI_SPI0_SPI_EXT_CLK_USER,
        26,
    )
    .flags(ClockFlags::SET_RATE_PARENT),
    GateClock::new(
        "mout_sclk_peri_spi1_spi_ext_clk_user",
        "sclk_peri_spi1_spi_ext_clk",
        CLK_CON_MUX_SCLK_PERI_SPI1_SPI_EXT_CLK_USER,
        26,
    )
    .flags(ClockFlags::SET_RATE_PARENT),
    GateClock::new(
        "mout_sclk_peri_spi2_spi_ext_clk_user",
        "sclk_peri_spi2_spi_ext_clk",
        CLK_CON_MUX_SCLK_PERI_SPI2_SPI_EXT_CLK_USER,
        26,
    ),
    GateClock::new(
        "mout_sclk_peri_uart0_ext_uclk_user",
        "sclk_peri_uart0_ext_uclk",
        CLK_CON_MUX_SCLK_PERI_UART0_EXT_UCLK_USER,
        26,
    ),
    GateClock::new(
        "mout_sclk_peri_uart1_ext_uclk_user",
        "sclk_peri_uart1_ext_uclk",
        CLK_CON_MUX_SCLK_PERI_UART1_EXT_UCLK_USER,
        26,
    ),
    GateClock::new(
        "mout_sclk_peri_uart2_ext_uclk_user",
        "sclk_peri_uart2_ext_uclk",
        CLK_CON_MUX_SCLK_PERI_UART2_EXT_UCLK_USER,
        26,
    ),
];

pub static CMU_INFO: CmuInfo = CmuInfo {
    gate_clks: GATE_CLKS,
    nr_clk_ids: NR_CLK,
    clk_regs: CLK_REGS,
    ..CmuInfo::EMPTY
};

pub static CMU: Cmu = Cmu {
    name: "peri",
    compatible: "samsung,exynos3475-cmu-peri",
    base: 0x139f_0000,
    info: &CMU_INFO,
};

/// Registers CMU_PERI with the clock framework.
pub fn init(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
    crate::cmu::register_one(node, &CMU, registrar);
}
