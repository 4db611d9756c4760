//! Clock IDs exported by the Exynos3475 CMU blocks.
//!
//! Each block has its own ID namespace. ID 0 is reserved, so `NR_CLK` is one
//! more than the highest ID in use. Blocks without exported clocks still
//! reserve ID 0.

use crate::clock::ClockId;

/// One more than the highest ID in `ids`.
const fn nr_clk(ids: &[(&str, ClockId)]) -> u32 {
    let mut max = 0;
    let mut i = 0;
    while i < ids.len() {
        if ids[i].1.raw() > max {
            max = ids[i].1.raw();
        }
        i += 1;
    }
    max + 1
}

macro_rules! clock_ids {
    ($(#[$meta:meta])* $block:ident { $($name:ident = $value:literal,)* }) => {
        $(#[$meta])*
        pub mod $block {
            #[allow(unused_imports)]
            use super::ClockId;

            $(pub const $name: ClockId = ClockId::new($value);)*

            /// Every ID of the block with its binding name, in ID order.
            pub const IDS: &[(&str, ClockId)] = &[$((stringify!($name), $name)),*];

            /// Size of the block's ID namespace.
            pub const NR_CLK: u32 = super::nr_clk(IDS);
        }
    };
}

clock_ids! {
    /// CMU_BUS0
    bus0 {}
}

clock_ids! {
    /// CMU_BUS2
    bus2 {}
}

clock_ids! {
    /// CMU_CPU
    cpu {
        CLK_CPU_PLL = 1,
        CLK_MOUT_CPU = 2,
    }
}

clock_ids! {
    /// CMU_FSYS
    fsys {
        CLK_ACLK_FSYS_200_ACLK_UPSIZER_AHB_USBHS_ACLK = 1,
        CLK_ACLK_FSYS_200_ACLK_UPSIZER_FSYS1_TO_FSYS0_ACLK = 2,
        CLK_ACLK_FSYS_200_ACLK_AHB2AXI_USBHS_HCLK = 3,
        CLK_ACLK_FSYS_200_ACLK_AHB_USBHS_HCLK = 4,
        CLK_ACLK_FSYS_200_ACLK_XIU_D_FSYS1_ACLK = 5,
        CLK_ACLK_FSYS_200_ACLK_UPSIZER_USBOTG_ACLK = 6,
        CLK_ACLK_FSYS_200_ACLK_AHB2AXI_USBOTG_HCLK = 7,
        CLK_ACLK_FSYS_200_ACLK_USBOTG20_ACLK = 8,
        CLK_ACLK_FSYS_200_ACLK_MMC2_I_ACLK = 9,
        CLK_ACLK_FSYS_200_ACLK_MMC1_I_ACLK = 10,
        CLK_ACLK_FSYS_200_ACLK_MMC0_I_ACLK = 11,
        CLK_ACLK_FSYS_200_ACLK_USBHOST20_ACLK = 12,
        CLK_ACLK_FSYS_200_ACLK_DMA_FSYS1_ACLK = 13,
        CLK_ACLK_FSYS_200_ACLK_DMA_FSYS0_ACLK = 14,
        CLK_SCLK_FSYS_MMC0_SDCLKIN_SCLK_MMC0_SDCLKIN = 15,
        CLK_SCLK_FSYS_MMC1_SDCLKIN_SCLK_MMC1_SDCLKIN = 16,
        CLK_SCLK_FSYS_MMC2_SDCLKIN_SCLK_MMC2_SDCLKIN = 17,
        CLK_USB_PLL = 18,
        CLK_PHYCLK_USBHOST20_USB20_FREECLK = 19,
        CLK_PHYCLK_USBHOST20_USB20_PHYCLOCK = 20,
        CLK_PHYCLK_USBHOST20_USB20_CLK48MOHCI = 21,
        CLK_MOUT_SCLK_FSYS_MMC0_SDCLKIN_USER = 22,
        CLK_MOUT_SCLK_FSYS_MMC1_SDCLKIN_USER = 23,
        CLK_MOUT_SCLK_FSYS_MMC2_SDCLKIN_USER = 24,
        CLK_MOUT_PHYCLK_USBOTG_OTG20_PHYCLOCK_USER = 25,
    }
}

clock_ids! {
    /// CMU_G3D
    g3d {
        CLK_MOUT_ACLK_G3D_667 = 1,
        CLK_ACLK_G3D_667_ACLK_G3D_CLK = 2,
    }
}

clock_ids! {
    /// CMU_PERI
    peri {
        CLK_ACLK_PERI_PCLK_HSI2C8_IPCLK = 1,
        CLK_ACLK_PERI_PCLK_HSI2C7_IPCLK = 2,
        CLK_ACLK_PERI_PCLK_HSI2C1_IPCLK = 3,
        CLK_ACLK_PERI_PCLK_HSI2C0_IPCLK = 4,
        CLK_ACLK_PERI_PCLK_I2C6_PCLK = 5,
        CLK_ACLK_PERI_PCLK_I2C5_PCLK = 6,
        CLK_ACLK_PERI_PCLK_I2C4_PCLK = 7,
        CLK_ACLK_PERI_PCLK_I2C3_PCLK = 8,
        CLK_ACLK_PERI_PCLK_WDT_CPU_PCLK = 9,
        CLK_ACLK_PERI_PCLK_MCT_PCLK = 10,
        CLK_ACLK_PERI_SECURE_RTC_PCLK_RTC_APBIF_PCLK = 11,
        CLK_ACLK_PERI_PCLK_PWM_PCLK = 12,
        CLK_ACLK_PERI_PCLK_I2C10_PCLK = 13,
        CLK_ACLK_PERI_PCLK_I2C9_PCLK = 14,
        CLK_ACLK_PERI_PCLK_SPI2_PCLK = 15,
        CLK_ACLK_PERI_PCLK_SPI1_PCLK = 16,
        CLK_ACLK_PERI_PCLK_SPI0_PCLK = 17,
        CLK_ACLK_PERI_PCLK_ADCIF_PCLK = 18,
        CLK_ACLK_PERI_PCLK_UART2_PCLK = 19,
        CLK_ACLK_PERI_PCLK_UART1_PCLK = 20,
        CLK_ACLK_PERI_PCLK_UART0_PCLK = 21,
        CLK_SCLK_PERI_SPI0_SPI_EXT_CLK_SCLK_SPI0_SPI_EXT_CLK = 22,
        CLK_SCLK_PERI_SPI1_SPI_EXT_CLK_SCLK_SPI1_SPI_EXT_CLK = 23,
        CLK_SCLK_PERI_SPI2_SPI_EXT_CLK_SCLK_SPI2_SPI_EXT_CLK = 24,
        CLK_SCLK_PERI_UART0_EXT_UCLK_SCLK_UART0_EXT_UCLK = 25,
        CLK_SCLK_PERI_UART1_EXT_UCLK_SCLK_UART1_EXT_UCLK = 26,
        CLK_SCLK_PERI_UART2_EXT_UCLK_SCLK_UART2_EXT_UCLK = 27,
    }
}

clock_ids! {
    /// CMU_MIF
    mif {
        CLK_MEM0_PLL = 1,
        CLK_BUS_PLL = 2,
        CLK_MOUT_ACLK_MIF_333 = 3,
        CLK_MOUT_ACLK_MIF_83 = 4,
        CLK_MOUT_ACLK_MIF_FIX_50 = 5,
        CLK_MOUT_ACLK_DISPAUD_133 = 6,
        CLK_MOUT_ACLK_ISP_300 = 7,
        CLK_MOUT_SCLK_DISP_DECON_INT_ECLK = 8,
        CLK_MOUT_SCLK_DISP_DECON_INT_VCLK = 9,
        CLK_DOUT_ACLK_MIF_333 = 10,
        CLK_DOUT_ACLK_MIF_166 = 11,
        CLK_DOUT_ACLK_MIF_83 = 12,
        CLK_DOUT_ACLK_MIF_FIX_50 = 13,
        CLK_DOUT_ACLK_DISPAUD_133 = 14,
        CLK_DOUT_ACLK_ISP_300 = 15,
        CLK_DOUT_SCLK_DISP_DECON_INT_ECLK = 16,
        CLK_DOUT_SCLK_DISP_DECON_INT_VCLK = 17,
        CLK_DOUT_MIF_NODDR = 18,
        CLK_ACLK_CPU_800 = 19,
        CLK_SCLK_MEDIA_PLL_TOP = 20,
        CLK_SCLK_BUS_PLL_TOP = 21,
    }
}

clock_ids! {
    /// CMU_TOP
    top {
        CLK_MOUT_ACLK_BUS0_333 = 1,
        CLK_MOUT_ACLK_BUS2_333 = 2,
        CLK_MOUT_ACLK_MFCMSCL_200 = 3,
        CLK_MOUT_ACLK_MFCMSCL_333 = 4,
        CLK_MOUT_SCLK_FSYS_MMC0_SDCLKIN = 5,
        CLK_MOUT_SCLK_FSYS_MMC1_SDCLKIN = 6,
        CLK_MOUT_SCLK_FSYS_MMC2_SDCLKIN = 7,
        CLK_MOUT_SCLK_ISP_SENSOR0 = 8,
        CLK_MOUT_SCLK_ISP_SENSOR1 = 9,
        CLK_DOUT_ACLK_FSYS_200 = 10,
        CLK_DOUT_ACLK_IMEM_266 = 11,
        CLK_DOUT_ACLK_IMEM_200 = 12,
        CLK_DOUT_ACLK_BUS0_333 = 13,
        CLK_DOUT_ACLK_BUS2_333 = 14,
        CLK_DOUT_ACLK_PERI_66 = 15,
        CLK_DOUT_ACLK_G3D_400 = 16,
        CLK_DOUT_ACLK_MFCMSCL_200 = 17,
        CLK_DOUT_ACLK_MFCMSCL_333 = 18,
        CLK_DOUT_SCLK_FSYS_MMC0_SDCLKIN_A = 19,
        CLK_DOUT_SCLK_FSYS_MMC0_SDCLKIN_B = 20,
        CLK_DOUT_SCLK_FSYS_MMC1_SDCLKIN_A = 21,
        CLK_DOUT_SCLK_FSYS_MMC1_SDCLKIN_B = 22,
        CLK_DOUT_SCLK_FSYS_MMC2_SDCLKIN_A = 23,
        CLK_DOUT_SCLK_FSYS_MMC2_SDCLKIN_B = 24,
        CLK_DOUT_SCLK_PERI_UART0 = 25,
        CLK_DOUT_SCLK_PERI_UART1 = 26,
        CLK_DOUT_SCLK_PERI_UART2 = 27,
        CLK_DOUT_SCLK_ISP_SENSOR0_A = 28,
        CLK_DOUT_SCLK_ISP_SENSOR0_B = 29,
        CLK_DOUT_SCLK_ISP_SENSOR1_A = 30,
        CLK_DOUT_SCLK_ISP_SENSOR1_B = 31,
        CLK_ACLK_BUS0_333 = 32,
        CLK_ACLK_BUS2_333 = 33,
        CLK_ACLK_PERI_66 = 34,
        CLK_ACLK_G3D_400 = 35,
        CLK_SCLK_FSYS_MMC0_SDCLKIN = 36,
        CLK_SCLK_FSYS_MMC1_SDCLKIN = 37,
        CLK_SCLK_FSYS_MMC2_SDCLKIN = 38,
        CLK_SCLK_ISP_SENSOR0 = 39,
        CLK_SCLK_ISP_SENSOR1 = 40,
        CLK_MOUT_BUS_PLL_USER = 41,
        CLK_MOUT_MEDIA_PLL_USER = 42,
    }
}

/// The ID namespace of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockIds {
    /// Short block name, e.g. `"peri"`.
    pub name: &'static str,
    pub ids: &'static [(&'static str, ClockId)],
    pub nr_clk: u32,
}

macro_rules! blocks {
    ($($block:ident),* $(,)?) => {
        /// The ID namespace of every block, in declaration order.
        pub const BLOCKS: &[BlockIds] = &[
            $(
                BlockIds {
                    name: stringify!($block),
                    ids: $block::IDS,
                    nr_clk: $block::NR_CLK,
                },
            )*
        ];
    };
}

blocks!(bus0, bus2, cpu, fsys, g3d, peri, mif, top);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_sizes() {
        assert_eq!(bus0::NR_CLK, 1);
        assert_eq!(bus2::NR_CLK, 1);
        assert_eq!(cpu::NR_CLK, 3);
        assert_eq!(fsys::NR_CLK, 26);
        assert_eq!(g3d::NR_CLK, 3);
        assert_eq!(peri::NR_CLK, 28);
        assert_eq!(mif::NR_CLK, 22);
        assert_eq!(top::NR_CLK, 43);
    }

    #[test]
    fn ids_are_dense_from_one() {
        for ids in [cpu::IDS, fsys::IDS, g3d::IDS, peri::IDS, mif::IDS, top::IDS] {
            for (index, (_, id)) in ids.iter().enumerate() {
                assert_eq!(id.raw() as usize, index + 1);
            }
        }
    }

    #[test]
    fn binding_names() {
        assert_eq!(cpu::IDS[0], ("CLK_CPU_PLL", cpu::CLK_CPU_PLL));
        assert_eq!(fsys::CLK_USB_PLL, ClockId::new(18));
        assert_eq!(top::IDS.last().map(|(name, _)| *name), Some("CLK_MOUT_MEDIA_PLL_USER"));
    }

    #[test]
    fn every_block_is_listed() {
        let names = BLOCKS.iter().map(|block| block.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["bus0", "bus2", "cpu", "fsys", "g3d", "peri", "mif", "top"]
        );
        assert_eq!(BLOCKS[5].ids, peri::IDS);
        assert_eq!(BLOCKS[5].nr_clk, peri::NR_CLK);
        assert_eq!(BLOCKS[3].nr_clk, 26);
    }

    #[test]
    fn empty_namespace() {
        assert!(bus0::IDS.is_empty());
        assert_eq!(nr_clk(&[]), 1);
    }
}
