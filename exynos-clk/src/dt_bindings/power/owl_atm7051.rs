//! Power domains of the Actions Semi ATM7051 SPS (smart power system).

pub const ATM7051_PD_CPU2: u32 = 0;
pub const ATM7051_PD_CPU3: u32 = 1;
pub const ATM7051_PD_GPU: u32 = 2;
pub const ATM7051_PD_VDE: u32 = 3;
pub const ATM7051_PD_VCE: u32 = 4;

/// A power-gated domain, by its device-tree index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum PowerDomain {
    /// Third CPU core.
    Cpu2 = ATM7051_PD_CPU2,
    /// Fourth CPU core.
    Cpu3 = ATM7051_PD_CPU3,
    Gpu = ATM7051_PD_GPU,
    /// Video decoder.
    Vde = ATM7051_PD_VDE,
    /// Video encoder.
    Vce = ATM7051_PD_VCE,
}

impl PowerDomain {
    /// All domains, in index order.
    pub const ALL: [PowerDomain; 5] = [
        PowerDomain::Cpu2,
        PowerDomain::Cpu3,
        PowerDomain::Gpu,
        PowerDomain::Vde,
        PowerDomain::Vce,
    ];

    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            ATM7051_PD_CPU2 => Some(PowerDomain::Cpu2),
            ATM7051_PD_CPU3 => Some(PowerDomain::Cpu3),
            ATM7051_PD_GPU => Some(PowerDomain::Gpu),
            ATM7051_PD_VDE => Some(PowerDomain::Vde),
            ATM7051_PD_VCE => Some(PowerDomain::Vce),
            _ => None,
        }
    }

    pub const fn raw(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_contiguous() {
        for (index, domain) in PowerDomain::ALL.iter().enumerate() {
            assert_eq!(domain.raw(), index as u32);
            assert_eq!(PowerDomain::from_raw(index as u32), Some(*domain));
        }
    }

    #[test]
    fn binding_values() {
        assert_eq!(ATM7051_PD_CPU2, 0);
        assert_eq!(ATM7051_PD_GPU, 2);
        assert_eq!(ATM7051_PD_VCE, 4);
        assert_eq!(PowerDomain::from_raw(5), None);
    }
}
