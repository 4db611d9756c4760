//! # Clock-node descriptors
//!
//! ## Overview
//! A CMU block is described by flat tables of clock nodes. Each node names
//! its parent(s) by string. The registration engine resolves names against
//! every clock registered so far, so a parent may live in another block.
//!
//! Node kinds:
//! - [`PllClock`]: a frequency synthesizer with a table of supported rates.
//! - [`MuxClock`]: selects one of an ordered list of parents. The position
//!   of a parent in the list is the value written into the register field.
//! - [`DivClock`]: divides a single parent by a register field.
//! - [`GateClock`]: enables or disables its parent with a single bit.
//! - [`FixedRateClock`]: a clock running at a literal frequency.
//! - [`FixedFactorClock`]: a fixed `mult / div` ratio of its parent.
//!
//! All descriptors are `Copy` and built with `const fn`s, so whole tables can
//! live in `const`/`static` items:
//!
//! ```rust
//! use exynos_clk::clock::{ClockFlags, ClockId, DivClock, GateClock};
//!
//! const DIV: DivClock = DivClock::new("dout_pclk", "mout_aclk_user", 0x400, 0, 3);
//! const GATE: GateClock = GateClock::new("mout_aclk_user", "aclk", 0x200, 26)
//!     .id(ClockId::new(1))
//!     .flags(ClockFlags::IGNORE_UNUSED);
//!
//! assert_eq!(GATE.id, Some(ClockId::new(1)));
//! assert_eq!(DIV.parent, "mout_aclk_user");
//! ```

use core::fmt;

use fugit::HertzU32;

pub use self::pll::{PllClock, PllRate, PllType};

mod pll;

/// Width of every CMU register, in bits.
pub const REGISTER_WIDTH: u8 = 32;

/// Identifier a clock is exported under.
///
/// Consumers look clocks up by `(block, ClockId)`. Nodes that are only used
/// internally by the tree carry no ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockId(u32);

impl ClockId {
    /// Creates an ID from its raw binding value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw binding value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

bitflags::bitflags! {
    /// Flags interpreted by the clock framework for any node kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClockFlags: u32 {
        /// Must be gated across rate change.
        const SET_RATE_GATE   = 1 << 0;
        /// Must be gated across re-parent.
        const SET_PARENT_GATE = 1 << 1;
        /// Propagate rate change up one level.
        const SET_RATE_PARENT = 1 << 2;
        /// Do not gate even if unused.
        const IGNORE_UNUSED   = 1 << 3;
        /// Do not use the cached clock rate.
        const GET_RATE_NOCACHE = 1 << 6;
        /// Do not gate, ever.
        const IS_CRITICAL     = 1 << 11;
    }
}

bitflags::bitflags! {
    /// Register semantics of a [`GateClock`] bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GateFlags: u8 {
        /// Writing 1 disables the clock.
        const SET_TO_DISABLE = 1 << 0;
        /// The upper 16 bits of the register are a write mask.
        const HIWORD_MASK    = 1 << 1;
        const BIG_ENDIAN     = 1 << 2;
    }
}

bitflags::bitflags! {
    /// Register semantics of a [`MuxClock`] field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MuxFlags: u8 {
        const INDEX_ONE     = 1 << 0;
        const INDEX_BIT     = 1 << 1;
        const HIWORD_MASK   = 1 << 2;
        const READ_ONLY     = 1 << 3;
        const ROUND_CLOSEST = 1 << 4;
        const BIG_ENDIAN    = 1 << 5;
    }
}

bitflags::bitflags! {
    /// Register semantics of a [`DivClock`] field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DividerFlags: u16 {
        /// The field holds the divider itself rather than `divider - 1`.
        const ONE_BASED     = 1 << 0;
        /// The field holds `log2(divider)`.
        const POWER_OF_TWO  = 1 << 1;
        const ALLOW_ZERO    = 1 << 2;
        const HIWORD_MASK   = 1 << 3;
        const ROUND_CLOSEST = 1 << 4;
        const READ_ONLY     = 1 << 5;
        const MAX_AT_ZERO   = 1 << 6;
        const BIG_ENDIAN    = 1 << 7;
    }
}

#[cfg(feature = "defmt")]
macro_rules! impl_defmt_for_flags {
    ($($ty:ty),*) => {
        $(
            impl defmt::Format for $ty {
                fn format(&self, f: defmt::Formatter<'_>) {
                    defmt::write!(f, "{=u32:#x}", self.bits() as u32)
                }
            }
        )*
    };
}

#[cfg(feature = "defmt")]
impl_defmt_for_flags!(ClockFlags, GateFlags, MuxFlags, DividerFlags);

/// Selects one of several parents through a register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MuxClock {
    pub id: Option<ClockId>,
    pub name: &'static str,
    /// Candidate parents, indexed by field value.
    pub parents: &'static [&'static str],
    pub offset: u32,
    pub shift: u8,
    pub width: u8,
    pub flags: ClockFlags,
    pub mux_flags: MuxFlags,
}

impl MuxClock {
    pub const fn new(
        name: &'static str,
        parents: &'static [&'static str],
        offset: u32,
        shift: u8,
        width: u8,
    ) -> Self {
        Self {
            id: None,
            name,
            parents,
            offset,
            shift,
            width,
            flags: ClockFlags::empty(),
            mux_flags: MuxFlags::empty(),
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

    pub const fn mux_flags(mut self, mux_flags: MuxFlags) -> Self {
        self.mux_flags = mux_flags;
        self
    }
}

/// Divides its parent by the value of a register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DivClock {
    pub id: Option<ClockId>,
    pub name: &'static str,
    pub parent: &'static str,
    pub offset: u32,
    pub shift: u8,
    pub width: u8,
    pub flags: ClockFlags,
    pub div_flags: DividerFlags,
}

impl DivClock {
    pub const fn new(
        name: &'static str,
        parent: &'static str,
        offset: u32,
        shift: u8,
        width: u8,
    ) -> Self {
        Self {
            id: None,
            name,
            parent,
            offset,
            shift,
            width,
            flags: ClockFlags::empty(),
            div_flags: DividerFlags::empty(),
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

    pub const fn div_flags(mut self, div_flags: DividerFlags) -> Self {
        self.div_flags = div_flags;
        self
    }

    /// Largest divider the field can encode, assuming the default
    /// `field + 1` encoding.
    pub const fn max_divider(&self) -> u32 {
        1 << self.width
    }
}

/// Enables or disables its parent with a single register bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GateClock {
    pub id: Option<ClockId>,
    pub name: &'static str,
    pub parent: &'static str,
    pub offset: u32,
    pub bit: u8,
    pub flags: ClockFlags,
    pub gate_flags: GateFlags,
}

impl GateClock {
    pub const fn new(name: &'static str, parent: &'static str, offset: u32, bit: u8) -> Self {
        Self {
            id: None,
            name,
            parent,
            offset,
            bit,
            flags: ClockFlags::empty(),
            gate_flags: GateFlags::empty(),
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

    pub const fn gate_flags(mut self, gate_flags: GateFlags) -> Self {
        self.gate_flags = gate_flags;
        self
    }
}

/// A clock with a literal frequency, such as a PHY output or a board
/// oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedRateClock {
    pub id: Option<ClockId>,
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub flags: ClockFlags,
    pub rate: HertzU32,
}

impl FixedRateClock {
    pub const fn new(name: &'static str, rate: HertzU32) -> Self {
        Self {
            id: None,
            name,
            parent: None,
            flags: ClockFlags::empty(),
            rate,
        }
    }

    pub const fn id(mut self, id: ClockId) -> Self {
        self.id = Some(id);
        self
    }

    pub const fn parent(mut self, parent: &'static str) -> Self {
        self.parent = Some(parent);
        self
    }

    pub const fn flags(mut self, flags: ClockFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Runs at `parent * mult / div`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedFactorClock {
    pub id: Option<ClockId>,
    pub name: &'static str,
    pub parent: &'static str,
    pub mult: u32,
    pub div: u32,
    pub flags: ClockFlags,
}

impl FixedFactorClock {
    pub const fn new(name: &'static str, parent: &'static str, mult: u32, div: u32) -> Self {
        Self {
            id: None,
            name,
            parent,
            mult,
            div,
            flags: ClockFlags::empty(),
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
}

/// The kind of a [`ClockNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockKind {
    Pll,
    Mux,
    Div,
    Gate,
    FixedRate,
    FixedFactor,
}

impl ClockKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClockKind::Pll => "pll",
            ClockKind::Mux => "mux",
            ClockKind::Div => "div",
            ClockKind::Gate => "gate",
            ClockKind::FixedRate => "fixed-rate",
            ClockKind::FixedFactor => "fixed-factor",
        }
    }
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A register field: `width` bits starting at bit `shift` of the register at
/// `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    pub offset: u32,
    pub shift: u8,
    pub width: u8,
}

impl BitField {
    /// Whether the field lies within a single register.
    pub const fn fits_register(&self) -> bool {
        (self.shift as u32) + (self.width as u32) <= REGISTER_WIDTH as u32
    }
}

/// A borrowed view over a descriptor of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockNode<'a> {
    Pll(&'a PllClock),
    Mux(&'a MuxClock),
    Div(&'a DivClock),
    Gate(&'a GateClock),
    FixedRate(&'a FixedRateClock),
    FixedFactor(&'a FixedFactorClock),
}

impl<'a> ClockNode<'a> {
    pub fn kind(&self) -> ClockKind {
        match self {
            ClockNode::Pll(_) => ClockKind::Pll,
            ClockNode::Mux(_) => ClockKind::Mux,
            ClockNode::Div(_) => ClockKind::Div,
            ClockNode::Gate(_) => ClockKind::Gate,
            ClockNode::FixedRate(_) => ClockKind::FixedRate,
            ClockNode::FixedFactor(_) => ClockKind::FixedFactor,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClockNode::Pll(c) => c.name,
            ClockNode::Mux(c) => c.name,
            ClockNode::Div(c) => c.name,
            ClockNode::Gate(c) => c.name,
            ClockNode::FixedRate(c) => c.name,
            ClockNode::FixedFactor(c) => c.name,
        }
    }

    pub fn id(&self) -> Option<ClockId> {
        match self {
            ClockNode::Pll(c) => c.id,
            ClockNode::Mux(c) => c.id,
            ClockNode::Div(c) => c.id,
            ClockNode::Gate(c) => c.id,
            ClockNode::FixedRate(c) => c.id,
            ClockNode::FixedFactor(c) => c.id,
        }
    }

    pub fn flags(&self) -> ClockFlags {
        match self {
            ClockNode::Pll(c) => c.flags,
            ClockNode::Mux(c) => c.flags,
            ClockNode::Div(c) => c.flags,
            ClockNode::Gate(c) => c.flags,
            ClockNode::FixedRate(c) => c.flags,
            ClockNode::FixedFactor(c) => c.flags,
        }
    }

    /// Parent names. Mux parents are in field-encoding order.
    pub fn parents(&self) -> &'a [&'static str] {
        match *self {
            ClockNode::Pll(c) => core::slice::from_ref(&c.parent),
            ClockNode::Mux(c) => c.parents,
            ClockNode::Div(c) => core::slice::from_ref(&c.parent),
            ClockNode::Gate(c) => core::slice::from_ref(&c.parent),
            ClockNode::FixedRate(c) => c.parent.as_slice(),
            ClockNode::FixedFactor(c) => core::slice::from_ref(&c.parent),
        }
    }

    /// Register offsets the node reads or writes.
    pub fn registers(&self) -> &'a [u32] {
        match *self {
            ClockNode::Pll(c) => &c.registers,
            ClockNode::Mux(c) => core::slice::from_ref(&c.offset),
            ClockNode::Div(c) => core::slice::from_ref(&c.offset),
            ClockNode::Gate(c) => core::slice::from_ref(&c.offset),
            ClockNode::FixedRate(_) | ClockNode::FixedFactor(_) => &[],
        }
    }

    /// The multi-bit register field of a mux or divider.
    pub fn bitfield(&self) -> Option<BitField> {
        match self {
            ClockNode::Mux(c) => Some(BitField {
                offset: c.offset,
                shift: c.shift,
                width: c.width,
            }),
            ClockNode::Div(c) => Some(BitField {
                offset: c.offset,
                shift: c.shift,
                width: c.width,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_keep_defaults_empty() {
        const GATE: GateClock = GateClock::new("g", "p", 0x800, 3);

        assert_eq!(GATE.id, None);
        assert!(GATE.flags.is_empty());
        assert!(GATE.gate_flags.is_empty());
    }

    #[test]
    fn builders_are_usable_in_const_context() {
        const MUX: MuxClock = MuxClock::new("mout", &["a", "b"], 0x208, 12, 1)
            .id(ClockId::new(2))
            .flags(ClockFlags::SET_RATE_PARENT.union(ClockFlags::IGNORE_UNUSED));

        assert_eq!(MUX.id.map(ClockId::raw), Some(2));
        assert!(MUX.flags.contains(ClockFlags::IGNORE_UNUSED));
        assert!(MUX.flags.contains(ClockFlags::SET_RATE_PARENT));
    }

    #[test]
    fn framework_flag_values() {
        assert_eq!(ClockFlags::SET_RATE_PARENT.bits(), 0x4);
        assert_eq!(ClockFlags::IGNORE_UNUSED.bits(), 0x8);
        assert_eq!(ClockFlags::IS_CRITICAL.bits(), 0x800);
    }

    #[test]
    fn node_views() {
        let mux = MuxClock::new("mout", &["a", "b", "c"], 0x228, 12, 2);
        let node = ClockNode::Mux(&mux);
        assert_eq!(node.kind(), ClockKind::Mux);
        assert_eq!(node.parents(), &["a", "b", "c"]);
        assert_eq!(node.registers(), &[0x228]);
        assert_eq!(
            node.bitfield(),
            Some(BitField {
                offset: 0x228,
                shift: 12,
                width: 2
            })
        );

        let fixed = FixedRateClock::new("phy", HertzU32::MHz(60));
        let node = ClockNode::FixedRate(&fixed);
        assert!(node.parents().is_empty());
        assert!(node.registers().is_empty());
        assert_eq!(node.bitfield(), None);

        let ffac = FixedFactorClock::new("half", "pll", 1, 2);
        assert_eq!(ClockNode::FixedFactor(&ffac).parents(), &["pll"]);
    }

    #[test]
    fn bitfield_bounds() {
        assert!(BitField { offset: 0, shift: 28, width: 4 }.fits_register());
        assert!(!BitField { offset: 0, shift: 29, width: 4 }.fits_register());
    }

    #[test]
    fn divider_range() {
        assert_eq!(DivClock::new("d", "p", 0x400, 0, 3).max_divider(), 8);
        assert_eq!(DivClock::new("d", "p", 0x424, 0, 8).max_divider(), 256);
    }
}
