//! # Table consistency checks
//!
//! The clock framework trusts the tables: a parent name that resolves to
//! nothing leaves a clock orphaned, and a field that spills past its register
//! corrupts its neighbour. These checks catch such mistakes before the tables
//! reach hardware.
//!
//! [`check`] reports every violation found in a set of blocks, [`validate`]
//! stops at the first.
//!
//! ```rust
//! use exynos_clk::{soc, validate};
//!
//! let ctx = validate::ValidationContext::new(soc::CMUS, soc::EXTERNAL_CLOCKS);
//! assert!(validate::validate(&ctx).is_ok());
//! ```

use core::fmt;

use fugit::HertzU32;

use crate::{
    clock::{BitField, ClockId, ClockNode, REGISTER_WIDTH},
    cmu::Cmu,
};

/// A violated table invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// A parent name matches no clock of any block and no external clock.
    DanglingParent {
        block: &'static str,
        clock: &'static str,
        parent: &'static str,
    },
    /// A register used by a clock is missing from the block's register list.
    UnlistedRegister {
        block: &'static str,
        clock: &'static str,
        offset: u32,
    },
    /// The block's register list names the same offset twice.
    DuplicateRegister { block: &'static str, offset: u32 },
    /// Two clocks of one block are exported under the same ID.
    DuplicateId {
        block: &'static str,
        id: ClockId,
        first: &'static str,
        second: &'static str,
    },
    /// A clock ID does not fit the block's ID namespace.
    IdOutOfRange {
        block: &'static str,
        clock: &'static str,
        id: ClockId,
        nr_clk_ids: u32,
    },
    /// A PLL has no supported rates.
    EmptyRateTable {
        block: &'static str,
        pll: &'static str,
    },
    /// A PLL rate is not strictly slower than the row before it.
    UnorderedRateTable {
        block: &'static str,
        pll: &'static str,
        previous: HertzU32,
        rate: HertzU32,
    },
    /// A mux or divider field extends past bit 31 of its register.
    FieldOverflow {
        block: &'static str,
        clock: &'static str,
        field: BitField,
    },
    /// A mux has more parents than its field can select.
    TooManyParents {
        block: &'static str,
        clock: &'static str,
        parents: usize,
        width: u8,
    },
    /// A gate's enable bit lies outside its register.
    GateBitOutOfRange {
        block: &'static str,
        clock: &'static str,
        bit: u8,
    },
    /// A fixed-factor clock has a zero multiplier or divisor.
    ZeroFactor {
        block: &'static str,
        clock: &'static str,
    },
    /// Two clocks share a name. Parents are resolved by name, so this makes
    /// resolution ambiguous.
    DuplicateName {
        clock: &'static str,
        first_block: &'static str,
        second_block: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DanglingParent {
                block,
                clock,
                parent,
            } => write!(f, "CMU_{block}: parent `{parent}` of `{clock}` not found"),
            ValidationError::UnlistedRegister {
                block,
                clock,
                offset,
            } => write!(
                f,
                "CMU_{block}: register {offset:#06x} of `{clock}` is not in the register list"
            ),
            ValidationError::DuplicateRegister { block, offset } => {
                write!(f, "CMU_{block}: register {offset:#06x} is listed twice")
            }
            ValidationError::DuplicateId {
                block,
                id,
                first,
                second,
            } => write!(
                f,
                "CMU_{block}: clock ID {id} is used by both `{first}` and `{second}`"
            ),
            ValidationError::IdOutOfRange {
                block,
                clock,
                id,
                nr_clk_ids,
            } => write!(
                f,
                "CMU_{block}: clock ID {id} of `{clock}` exceeds the namespace of {nr_clk_ids} IDs"
            ),
            ValidationError::EmptyRateTable { block, pll } => {
                write!(f, "CMU_{block}: PLL `{pll}` has an empty rate table")
            }
            ValidationError::UnorderedRateTable {
                block,
                pll,
                previous,
                rate,
            } => write!(
                f,
                "CMU_{block}: rate {} Hz of PLL `{pll}` follows {} Hz, expected strictly descending rates",
                rate.raw(),
                previous.raw()
            ),
            ValidationError::FieldOverflow { block, clock, field } => write!(
                f,
                "CMU_{block}: field of `{clock}` at bit {} with width {} exceeds register {:#06x}",
                field.shift, field.width, field.offset
            ),
            ValidationError::TooManyParents {
                block,
                clock,
                parents,
                width,
            } => write!(
                f,
                "CMU_{block}: mux `{clock}` has {parents} parents but a {width}-bit field"
            ),
            ValidationError::GateBitOutOfRange { block, clock, bit } => {
                write!(f, "CMU_{block}: gate `{clock}` uses bit {bit}")
            }
            ValidationError::ZeroFactor { block, clock } => {
                write!(f, "CMU_{block}: fixed-factor clock `{clock}` has a zero factor")
            }
            ValidationError::DuplicateName {
                clock,
                first_block,
                second_block,
            } => write!(
                f,
                "Clock `{clock}` is defined in both CMU_{first_block} and CMU_{second_block}"
            ),
        }
    }
}

/// The set of blocks checked together, and the clocks they may reference
/// without defining.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'c> {
    pub blocks: &'c [&'c Cmu],
    pub external: &'c [&'c str],
}

impl<'c> ValidationContext<'c> {
    pub const fn new(blocks: &'c [&'c Cmu], external: &'c [&'c str]) -> Self {
        Self { blocks, external }
    }

    pub fn has_clock(&self, clk: &str) -> bool {
        self.external.iter().any(|name| *name == clk) || self.clock(clk).is_some()
    }

    /// The block defining `clk`, and its descriptor.
    pub fn clock(&self, clk: &str) -> Option<(&'c Cmu, ClockNode<'static>)> {
        self.blocks
            .iter()
            .find_map(|cmu| cmu.info.clock(clk).map(|node| (*cmu, node)))
    }
}

/// Runs every check, calling `report` for each violation. Returns the number
/// of violations.
pub fn check(ctx: &ValidationContext<'_>, mut report: impl FnMut(&ValidationError)) -> usize {
    let mut count = 0;
    let mut emit = |error: ValidationError| {
        warn!("{}", error);
        count += 1;
        report(&error);
    };

    for (index, cmu) in ctx.blocks.iter().enumerate() {
        trace!("Checking CMU_{}", cmu.name);
        check_block(ctx, cmu, &mut emit);
        check_names(ctx, index, cmu, &mut emit);
    }

    debug!(
        "Checked {} blocks: {} violations",
        ctx.blocks.len(),
        count
    );
    count
}

/// Runs every check and returns the first violation.
pub fn validate(ctx: &ValidationContext<'_>) -> Result<(), ValidationError> {
    let mut first = None;
    check(ctx, |error| {
        first.get_or_insert(*error);
    });

    match first {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn check_block(ctx: &ValidationContext<'_>, cmu: &Cmu, emit: &mut impl FnMut(ValidationError)) {
    let block = cmu.name;
    let info = cmu.info;

    for (index, offset) in info.clk_regs.iter().enumerate() {
        if info.clk_regs[..index].contains(offset) {
            emit(ValidationError::DuplicateRegister {
                block,
                offset: *offset,
            });
        }
    }

    for (index, node) in info.nodes().enumerate() {
        let clock = node.name();

        for &parent in node.parents() {
            if !ctx.has_clock(parent) {
                emit(ValidationError::DanglingParent {
                    block,
                    clock,
                    parent,
                });
            }
        }

        for offset in node.registers() {
            if !info.clk_regs.contains(offset) {
                emit(ValidationError::UnlistedRegister {
                    block,
                    clock,
                    offset: *offset,
                });
            }
        }

        if let Some(id) = node.id() {
            if id.raw() >= info.nr_clk_ids {
                emit(ValidationError::IdOutOfRange {
                    block,
                    clock,
                    id,
                    nr_clk_ids: info.nr_clk_ids,
                });
            }
            if let Some(first) = info.nodes().take(index).find(|other| other.id() == Some(id)) {
                emit(ValidationError::DuplicateId {
                    block,
                    id,
                    first: first.name(),
                    second: clock,
                });
            }
        }

        if let Some(field) = node.bitfield() {
            if !field.fits_register() {
                emit(ValidationError::FieldOverflow {
                    block,
                    clock,
                    field,
                });
            }
        }

        match node {
            ClockNode::Pll(pll) => {
                if pll.rate_table.is_empty() {
                    emit(ValidationError::EmptyRateTable { block, pll: clock });
                }
                for pair in pll.rate_table.windows(2) {
                    if pair[1].rate >= pair[0].rate {
                        emit(ValidationError::UnorderedRateTable {
                            block,
                            pll: clock,
                            previous: pair[0].rate,
                            rate: pair[1].rate,
                        });
                    }
                }
            }
            ClockNode::Mux(mux) => {
                let selectable = 1usize.checked_shl(mux.width as u32);
                if selectable.is_some_and(|max| mux.parents.len() > max) {
                    emit(ValidationError::TooManyParents {
                        block,
                        clock,
                        parents: mux.parents.len(),
                        width: mux.width,
                    });
                }
            }
            ClockNode::Gate(gate) => {
                if gate.bit >= REGISTER_WIDTH {
                    emit(ValidationError::GateBitOutOfRange {
                        block,
                        clock,
                        bit: gate.bit,
                    });
                }
            }
            ClockNode::FixedFactor(ffac) => {
                if ffac.mult == 0 || ffac.div == 0 {
                    emit(ValidationError::ZeroFactor { block, clock });
                }
            }
            ClockNode::Div(_) | ClockNode::FixedRate(_) => {}
        }
    }
}

/// Reports clocks of `cmu` whose name was already used, either earlier in
/// `cmu` or in one of the blocks before it.
fn check_names(
    ctx: &ValidationContext<'_>,
    block_index: usize,
    cmu: &Cmu,
    emit: &mut impl FnMut(ValidationError),
) {
    for (index, node) in cmu.info.nodes().enumerate() {
        let name = node.name();

        let earlier_block = ctx.blocks[..block_index]
            .iter()
            .find(|other| other.info.clock(name).is_some());
        let first_block = match earlier_block {
            Some(other) => Some(other.name),
            None => cmu
                .info
                .nodes()
                .take(index)
                .any(|other| other.name() == name)
                .then_some(cmu.name),
        };

        if let Some(first_block) = first_block {
            emit(ValidationError::DuplicateName {
                clock: name,
                first_block,
                second_block: cmu.name,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
        cmu::CmuInfo,
    };

    static GOOD_RATES: &[PllRate] = &[
        PllRate::new(800_000_000, 13, 400, 0, 0),
        PllRate::new(400_000_000, 13, 400, 1, 0),
    ];
    static GOOD_PLLS: &[PllClock] = &[PllClock::new(PllType::Pll2551x, "pll", "osc", 0x0, 0x100)
        .id(ClockId::new(1))
        .rate_table(GOOD_RATES)];
    static GOOD_MUXES: &[MuxClock] =
        &[MuxClock::new("mout", &["pll", "osc"], 0x200, 12, 1).id(ClockId::new(2))];
    static GOOD_GATES: &[GateClock] =
        &[GateClock::new("gate", "mout", 0x800, 0).flags(ClockFlags::IGNORE_UNUSED)];
    static GOOD: CmuInfo = CmuInfo {
        pll_clks: GOOD_PLLS,
        mux_clks: GOOD_MUXES,
        gate_clks: GOOD_GATES,
        nr_clk_ids: 3,
        clk_regs: &[0x0, 0x100, 0x200, 0x800],
        ..CmuInfo::EMPTY
    };
    static GOOD_CMU: Cmu = Cmu {
        name: "good",
        compatible: "vendor,good",
        base: 0,
        info: &GOOD,
    };

    const EXTERNAL: &[&str] = &["osc"];

    fn errors(blocks: &[&Cmu]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let count = check(&ValidationContext::new(blocks, EXTERNAL), |error| {
            errors.push(*error)
        });
        assert_eq!(count, errors.len());
        errors
    }

    fn cmu(info: &'static CmuInfo) -> Cmu {
        Cmu {
            name: "bad",
            compatible: "vendor,bad",
            base: 0,
            info,
        }
    }

    #[test]
    fn consistent_block_passes() {
        assert!(errors(&[&GOOD_CMU]).is_empty());
        assert_eq!(
            validate(&ValidationContext::new(&[&GOOD_CMU], EXTERNAL)),
            Ok(())
        );
    }

    #[test]
    fn context_lookup() {
        let blocks = [&GOOD_CMU];
        let ctx = ValidationContext::new(&blocks, EXTERNAL);
        assert!(ctx.has_clock("osc"));
        assert!(ctx.has_clock("mout"));
        assert!(!ctx.has_clock("missing"));
        assert_eq!(ctx.clock("gate").map(|(cmu, _)| cmu.name), Some("good"));
    }

    #[test]
    fn dangling_parent_and_unlisted_register() {
        static DIVS: &[DivClock] = &[DivClock::new("dout", "nowhere", 0x404, 0, 4)];
        static INFO: CmuInfo = CmuInfo {
            div_clks: DIVS,
            clk_regs: &[0x400],
            ..CmuInfo::EMPTY
        };

        assert_eq!(
            errors(&[&cmu(&INFO)]),
            vec![
                ValidationError::DanglingParent {
                    block: "bad",
                    clock: "dout",
                    parent: "nowhere",
                },
                ValidationError::UnlistedRegister {
                    block: "bad",
                    clock: "dout",
                    offset: 0x404,
                },
            ]
        );
    }

    #[test]
    fn parents_resolve_across_blocks() {
        static DIVS: &[DivClock] = &[DivClock::new("dout", "gate", 0x400, 0, 4)];
        static INFO: CmuInfo = CmuInfo {
            div_clks: DIVS,
            clk_regs: &[0x400],
            ..CmuInfo::EMPTY
        };

        assert!(errors(&[&GOOD_CMU, &cmu(&INFO)]).is_empty());
        assert_eq!(errors(&[&cmu(&INFO)]).len(), 1);
    }

    #[test]
    fn duplicate_and_out_of_range_ids() {
        static GATES: &[GateClock] = &[
            GateClock::new("a", "osc", 0x800, 0).id(ClockId::new(1)),
            GateClock::new("b", "osc", 0x800, 1).id(ClockId::new(1)),
            GateClock::new("c", "osc", 0x800, 2).id(ClockId::new(2)),
        ];
        static INFO: CmuInfo = CmuInfo {
            gate_clks: GATES,
            nr_clk_ids: 2,
            clk_regs: &[0x800],
            ..CmuInfo::EMPTY
        };

        assert_eq!(
            errors(&[&cmu(&INFO)]),
            vec![
                ValidationError::DuplicateId {
                    block: "bad",
                    id: ClockId::new(1),
                    first: "a",
                    second: "b",
                },
                ValidationError::IdOutOfRange {
                    block: "bad",
                    clock: "c",
                    id: ClockId::new(2),
                    nr_clk_ids: 2,
                },
            ]
        );
    }

    #[test]
    fn rate_tables_must_descend_strictly() {
        static DUP_RATES: &[PllRate] = &[
            PllRate::new(800_000_000, 13, 400, 0, 0),
            PllRate::new(800_000_000, 26, 800, 0, 0),
        ];
        static RISING_RATES: &[PllRate] = &[
            PllRate::new(400_000_000, 13, 400, 1, 0),
            PllRate::new(800_000_000, 13, 400, 0, 0),
        ];
        static PLLS: &[PllClock] = &[
            PllClock::new(PllType::Pll2555x, "empty", "osc", 0x0, 0x100),
            PllClock::new(PllType::Pll2555x, "dup", "osc", 0x0, 0x100).rate_table(DUP_RATES),
            PllClock::new(PllType::Pll2555x, "rising", "osc", 0x0, 0x100)
                .rate_table(RISING_RATES),
        ];
        static INFO: CmuInfo = CmuInfo {
            pll_clks: PLLS,
            clk_regs: &[0x0, 0x100],
            ..CmuInfo::EMPTY
        };

        assert_eq!(
            errors(&[&cmu(&INFO)]),
            vec![
                ValidationError::EmptyRateTable {
                    block: "bad",
                    pll: "empty",
                },
                ValidationError::UnorderedRateTable {
                    block: "bad",
                    pll: "dup",
                    previous: HertzU32::MHz(800),
                    rate: HertzU32::MHz(800),
                },
                ValidationError::UnorderedRateTable {
                    block: "bad",
                    pll: "rising",
                    previous: HertzU32::MHz(400),
                    rate: HertzU32::MHz(800),
                },
            ]
        );
    }

    #[test]
    fn register_field_bounds() {
        static MUXES: &[MuxClock] = &[
            MuxClock::new("wide", &["osc"], 0x200, 30, 4),
            MuxClock::new("crowded", &["osc", "osc", "osc"], 0x200, 12, 1),
            MuxClock::new("full", &["osc", "osc", "osc", "osc"], 0x200, 12, 2),
        ];
        static GATES: &[GateClock] = &[GateClock::new("gate", "osc", 0x800, 32)];
        static INFO: CmuInfo = CmuInfo {
            mux_clks: MUXES,
            gate_clks: GATES,
            clk_regs: &[0x200, 0x800],
            ..CmuInfo::EMPTY
        };

        assert_eq!(
            errors(&[&cmu(&INFO)]),
            vec![
                ValidationError::FieldOverflow {
                    block: "bad",
                    clock: "wide",
                    field: BitField {
                        offset: 0x200,
                        shift: 30,
                        width: 4,
                    },
                },
                ValidationError::TooManyParents {
                    block: "bad",
                    clock: "crowded",
                    parents: 3,
                    width: 1,
                },
                ValidationError::GateBitOutOfRange {
                    block: "bad",
                    clock: "gate",
                    bit: 32,
                },
            ]
        );
    }

    #[test]
    fn duplicate_registers_and_zero_factors() {
        static FFACS: &[FixedFactorClock] = &[FixedFactorClock::new("half", "osc", 1, 0)];
        static INFO: CmuInfo = CmuInfo {
            fixed_factor_clks: FFACS,
            clk_regs: &[0x200, 0x204, 0x200],
            ..CmuInfo::EMPTY
        };

        assert_eq!(
            errors(&[&cmu(&INFO)]),
            vec![
                ValidationError::DuplicateRegister {
                    block: "bad",
                    offset: 0x200,
                },
                ValidationError::ZeroFactor {
                    block: "bad",
                    clock: "half",
                },
            ]
        );
    }

    #[test]
    fn names_are_unique_across_blocks() {
        static GATES: &[GateClock] = &[
            GateClock::new("gate", "osc", 0x800, 1),
            GateClock::new("twice", "osc", 0x800, 2),
            GateClock::new("twice", "osc", 0x800, 3),
        ];
        static INFO: CmuInfo = CmuInfo {
            gate_clks: GATES,
            clk_regs: &[0x800],
            ..CmuInfo::EMPTY
        };

        assert_eq!(
            errors(&[&GOOD_CMU, &cmu(&INFO)]),
            vec![
                ValidationError::DuplicateName {
                    clock: "gate",
                    first_block: "good",
                    second_block: "bad",
                },
                ValidationError::DuplicateName {
                    clock: "twice",
                    first_block: "bad",
                    second_block: "bad",
                },
            ]
        );
    }

    #[test]
    fn validate_returns_first_violation() {
        static GATES: &[GateClock] = &[
            GateClock::new("a", "nowhere", 0x800, 0),
            GateClock::new("b", "osc", 0x800, 40),
        ];
        static INFO: CmuInfo = CmuInfo {
            gate_clks: GATES,
            clk_regs: &[0x800],
            ..CmuInfo::EMPTY
        };
        let bad = cmu(&INFO);

        assert_eq!(
            validate(&ValidationContext::new(&[&bad], EXTERNAL)),
            Err(ValidationError::DanglingParent {
                block: "bad",
                clock: "a",
                parent: "nowhere",
            })
        );
    }

    #[test]
    fn messages() {
        let error = ValidationError::UnlistedRegister {
            block: "peri",
            clock: "mct_pclk",
            offset: 0x800,
        };
        assert_eq!(
            error.to_string(),
            "CMU_peri: register 0x0800 of `mct_pclk` is not in the register list"
        );

        let error = ValidationError::DuplicateName {
            clock: "oscclk",
            first_block: "mif",
            second_block: "top",
        };
        assert_eq!(
            error.to_string(),
            "Clock `oscclk` is defined in both CMU_mif and CMU_top"
        );
    }
}
