//! # Clock management units
//!
//! A [`CmuInfo`] bundles every descriptor table of one CMU block together
//! with the number of clock IDs the block exports and the list of registers
//! the framework saves and restores across suspend. A [`Cmu`] pairs the
//! bundle with the block's identity on the device tree.
//!
//! Turning a bundle into live clocks is the job of the clock framework, which
//! plugs in through [`CmuRegistrar`].

use crate::{
    clock::{
        ClockNode,
        DivClock,
        FixedFactorClock,
        FixedRateClock,
        GateClock,
        MuxClock,
        PllClock,
    },
    of::OfNode,
};

/// Every descriptor table of one CMU block.
#[derive(Debug, Clone, Copy)]
pub struct CmuInfo {
    pub pll_clks: &'static [PllClock],
    pub mux_clks: &'static [MuxClock],
    pub div_clks: &'static [DivClock],
    pub gate_clks: &'static [GateClock],
    pub fixed_clks: &'static [FixedRateClock],
    pub fixed_factor_clks: &'static [FixedFactorClock],
    /// One more than the highest clock ID the block exports.
    pub nr_clk_ids: u32,
    /// Register offsets saved across suspend.
    pub clk_regs: &'static [u32],
}

impl CmuInfo {
    /// A bundle with no clocks. Used as the base for struct-update syntax.
    pub const EMPTY: Self = Self {
        pll_clks: &[],
        mux_clks: &[],
        div_clks: &[],
        gate_clks: &[],
        fixed_clks: &[],
        fixed_factor_clks: &[],
        nr_clk_ids: 1,
        clk_regs: &[],
    };

    /// All descriptors, in the order the framework registers them.
    pub fn nodes(&self) -> impl Iterator<Item = ClockNode<'static>> {
        let Self {
            pll_clks,
            mux_clks,
            div_clks,
            gate_clks,
            fixed_clks,
            fixed_factor_clks,
            ..
        } = *self;

        pll_clks
            .iter()
            .map(ClockNode::Pll)
            .chain(mux_clks.iter().map(ClockNode::Mux))
            .chain(div_clks.iter().map(ClockNode::Div))
            .chain(gate_clks.iter().map(ClockNode::Gate))
            .chain(fixed_clks.iter().map(ClockNode::FixedRate))
            .chain(fixed_factor_clks.iter().map(ClockNode::FixedFactor))
    }

    pub fn clock(&self, name: &str) -> Option<ClockNode<'static>> {
        self.nodes().find(|node| node.name() == name)
    }

    pub fn clock_count(&self) -> usize {
        self.pll_clks.len()
            + self.mux_clks.len()
            + self.div_clks.len()
            + self.gate_clks.len()
            + self.fixed_clks.len()
            + self.fixed_factor_clks.len()
    }

    /// Number of descriptors exported under a clock ID.
    pub fn exported_count(&self) -> usize {
        self.nodes().filter(|node| node.id().is_some()).count()
    }
}

/// One CMU block of a SoC.
#[derive(Debug, Clone, Copy)]
pub struct Cmu {
    /// Short block name, e.g. `"peri"`.
    pub name: &'static str,
    /// Device-tree compatible string of the block's node.
    pub compatible: &'static str,
    /// Physical base address of the block's register window.
    pub base: u32,
    pub info: &'static CmuInfo,
}

/// The clock framework's registration primitive.
///
/// Implementations walk the tables of `info`, create the runtime clocks and
/// publish them under the block's clock-ID namespace. Any failure is theirs
/// to report.
pub trait CmuRegistrar {
    fn register_one(&mut self, node: &dyn OfNode, info: &'static CmuInfo);
}

/// Hands the tables of `cmu` to the framework for the device-tree `node`.
pub fn register_one(node: &dyn OfNode, cmu: &Cmu, registrar: &mut dyn CmuRegistrar) {
    debug!(
        "Registering CMU_{} ({} clocks, {} registers) for {}",
        cmu.name,
        cmu.info.clock_count(),
        cmu.info.clk_regs.len(),
        node.full_name()
    );

    registrar.register_one(node, cmu.info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::{ClockId, ClockKind},
        of::tests::TestNode,
    };

    static DIVS: &[DivClock] = &[DivClock::new("dout", "mout_user", 0x400, 0, 3)];
    static GATES: &[GateClock] =
        &[GateClock::new("mout_user", "aclk", 0x200, 26).id(ClockId::new(1))];
    static INFO: CmuInfo = CmuInfo {
        div_clks: DIVS,
        gate_clks: GATES,
        nr_clk_ids: 2,
        clk_regs: &[0x200, 0x400],
        ..CmuInfo::EMPTY
    };
    static CMU: Cmu = Cmu {
        name: "test",
        compatible: "vendor,test-cmu",
        base: 0x1000_0000,
        info: &INFO,
    };

    #[derive(Default)]
    struct Recorder {
        calls: usize,
        clocks: usize,
    }

    impl CmuRegistrar for Recorder {
        fn register_one(&mut self, _node: &dyn OfNode, info: &'static CmuInfo) {
            self.calls += 1;
            self.clocks += info.clock_count();
        }
    }

    #[test]
    fn nodes_follow_registration_order() {
        let kinds = INFO.nodes().map(|node| node.kind()).collect::<Vec<_>>();
        assert_eq!(kinds, vec![ClockKind::Div, ClockKind::Gate]);
    }

    #[test]
    fn lookup_and_counts() {
        assert_eq!(INFO.clock_count(), 2);
        assert_eq!(INFO.exported_count(), 1);
        assert_eq!(
            INFO.clock("mout_user").and_then(|node| node.id()),
            Some(ClockId::new(1))
        );
        assert!(INFO.clock("missing").is_none());
    }

    #[test]
    fn empty_bundle_exports_nothing() {
        assert_eq!(CmuInfo::EMPTY.clock_count(), 0);
        assert_eq!(CmuInfo::EMPTY.nodes().count(), 0);
        assert_eq!(CmuInfo::EMPTY.nr_clk_ids, 1);
    }

    #[test]
    fn register_one_forwards_the_bundle() {
        let mut recorder = Recorder::default();
        let node = TestNode::new("/soc/clock-controller@10000000", &["vendor,test-cmu"]);

        register_one(&node, &CMU, &mut recorder);

        assert_eq!(recorder.calls, 1);
        assert_eq!(recorder.clocks, 2);
    }
}
