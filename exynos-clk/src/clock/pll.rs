use core::fmt;

use fugit::HertzU32;

use super::{ClockFlags, ClockId};

/// PLL hardware variants found on Exynos CMUs.
///
/// The variant selects the rate formula and the register layout the
/// framework uses when programming the PLL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PllType {
    /// Integer PLL without fractional divider.
    Pll2551x,
    /// Integer PLL used for CPU and memory domains.
    Pll2555x,
}

impl PllType {
    pub const fn as_str(self) -> &'static str {
        match self {
            PllType::Pll2551x => "pll_2551x",
            PllType::Pll2555x => "pll_2555x",
        }
    }
}

impl fmt::Display for PllType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One supported output rate of a PLL, with the divider settings that
/// produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllRate {
    pub rate: HertzU32,
    pub pdiv: u16,
    pub mdiv: u16,
    pub sdiv: u8,
    pub kdiv: i16,
}

impl PllRate {
    pub const fn new(rate: u32, pdiv: u16, mdiv: u16, sdiv: u8, kdiv: i16) -> Self {
        Self {
            rate: HertzU32::from_raw(rate),
            pdiv,
            mdiv,
            sdiv,
            kdiv,
        }
    }
}

/// A phase-locked loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllClock {
    pub ty: PllType,
    pub id: Option<ClockId>,
    pub name: &'static str,
    pub parent: &'static str,
    /// Lock-time and configuration register offsets, in that order.
    pub registers: [u32; 2],
    pub flags: ClockFlags,
    /// Supported rates, fastest first.
    pub rate_table: &'static [PllRate],
}

impl PllClock {
    pub const fn new(
        ty: PllType,
        name: &'static str,
        parent: &'static str,
        lock_reg: u32,
        con_reg: u32,
    ) -> Self {
        Self {
            ty,
            id: None,
            name,
            parent,
            registers: [lock_reg, con_reg],
            flags: ClockFlags::empty(),
            rate_table: &[],
        }
    }

    pub const fn id(mut self, id: ClockId) -> Self {
        self.id = Some(id);
        self
    }

    pub const fn flags(mut self, flags: ClockFlags) -> Self {
        self.flags = flags;
        self
    }

    pub const fn rate_table(mut self, rate_table: &'static [PllRate]) -> Self {
        self.rate_table = rate_table;
        self
    }

    pub const fn lock_reg(&self) -> u32 {
        self.registers[0]
    }

    pub const fn con_reg(&self) -> u32 {
        self.registers[1]
    }

    /// Fastest supported rate.
    pub fn max_rate(&self) -> Option<HertzU32> {
        self.rate_table.first().map(|row| row.rate)
    }

    /// Slowest supported rate.
    pub fn min_rate(&self) -> Option<HertzU32> {
        self.rate_table.last().map(|row| row.rate)
    }

    /// The table row for exactly `rate`, if the PLL supports it.
    pub fn rate_settings(&self, rate: HertzU32) -> Option<&'static PllRate> {
        self.rate_table.iter().find(|row| row.rate == rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[PllRate] = &[
        PllRate::new(825_000_000, 26, 825, 0, 0),
        PllRate::new(800_000_000, 13, 400, 0, 0),
    ];

    #[test]
    fn registers_are_split() {
        let pll = PllClock::new(PllType::Pll2551x, "bus_pll", "oscclk", 0xc, 0x120);
        assert_eq!(pll.lock_reg(), 0xc);
        assert_eq!(pll.con_reg(), 0x120);
        assert!(pll.rate_table.is_empty());
    }

    #[test]
    fn rate_lookup() {
        let pll = PllClock::new(PllType::Pll2551x, "bus_pll", "oscclk", 0xc, 0x120)
            .rate_table(TABLE);

        assert_eq!(pll.max_rate(), Some(HertzU32::MHz(825)));
        assert_eq!(pll.min_rate(), Some(HertzU32::MHz(800)));
        assert_eq!(
            pll.rate_settings(HertzU32::MHz(800)).map(|row| row.mdiv),
            Some(400)
        );
        assert_eq!(pll.rate_settings(HertzU32::MHz(801)), None);
    }

    #[test]
    fn type_names() {
        assert_eq!(PllType::Pll2555x.as_str(), "pll_2555x");
    }
}
