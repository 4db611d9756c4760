//! # Device-tree init dispatch
//!
//! Every CMU block declares the compatible string of its device-tree node
//! and an init hook. At platform init the firmware walks the device tree and
//! calls [`clk_init`] for each clock-controller node it finds. The first
//! declaration whose compatible string matches runs its hook, which hands the
//! block's tables to the clock framework.

use crate::cmu::CmuRegistrar;

/// A device-tree node handle supplied by the platform.
pub trait OfNode {
    /// Full path of the node, used in diagnostics.
    fn full_name(&self) -> &str;

    /// Whether `compatible` appears in the node's `compatible` property.
    fn is_compatible(&self, compatible: &str) -> bool;
}

/// Init hook of a clock provider.
pub type ClockInitFn = fn(&dyn OfNode, &mut dyn CmuRegistrar);

/// Binds a device-tree compatible string to the init hook of a clock
/// provider.
#[derive(Clone, Copy)]
pub struct OfClockDeclare {
    pub name: &'static str,
    pub compatible: &'static str,
    pub init: ClockInitFn,
}

impl core::fmt::Debug for OfClockDeclare {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OfClockDeclare")
            .field("name", &self.name)
            .field("compatible", &self.compatible)
            .finish_non_exhaustive()
    }
}

/// Finds the declaration for `compatible` among the chip's clock providers.
pub fn find(compatible: &str) -> Option<&'static OfClockDeclare> {
    crate::soc::CLOCK_DECLARES
        .iter()
        .find(|declare| declare.compatible == compatible)
}

/// Runs the init hook matching `node`.
///
/// Returns `false` if no clock provider of the selected chip is compatible
/// with the node.
pub fn clk_init(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) -> bool {
    clk_init_from(crate::soc::CLOCK_DECLARES, node, registrar)
}

pub(crate) fn clk_init_from(
    declares: &[OfClockDeclare],
    node: &dyn OfNode,
    registrar: &mut dyn CmuRegistrar,
) -> bool {
    let Some(declare) = declares
        .iter()
        .find(|declare| node.is_compatible(declare.compatible))
    else {
        trace!("No clock provider matches {}", node.full_name());
        return false;
    };

    debug!(
        "Initializing {} for {} ({})",
        declare.name,
        node.full_name(),
        declare.compatible
    );
    (declare.init)(node, registrar);

    true
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cmu::CmuInfo;

    pub(crate) struct TestNode {
        path: &'static str,
        compatible: &'static [&'static str],
    }

    impl TestNode {
        pub(crate) const fn new(path: &'static str, compatible: &'static [&'static str]) -> Self {
            Self { path, compatible }
        }
    }

    impl OfNode for TestNode {
        fn full_name(&self) -> &str {
            self.path
        }

        fn is_compatible(&self, compatible: &str) -> bool {
            self.compatible.iter().any(|c| *c == compatible)
        }
    }

    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) nr_clk_ids: Vec<u32>,
    }

    impl CmuRegistrar for Recorder {
        fn register_one(&mut self, _node: &dyn OfNode, info: &'static CmuInfo) {
            self.nr_clk_ids.push(info.nr_clk_ids);
        }
    }

    static FIRST: CmuInfo = CmuInfo {
        nr_clk_ids: 3,
        ..CmuInfo::EMPTY
    };
    static SECOND: CmuInfo = CmuInfo {
        nr_clk_ids: 7,
        ..CmuInfo::EMPTY
    };

    fn init_first(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
        registrar.register_one(node, &FIRST);
    }

    fn init_second(node: &dyn OfNode, registrar: &mut dyn CmuRegistrar) {
        registrar.register_one(node, &SECOND);
    }

    const DECLARES: &[OfClockDeclare] = &[
        OfClockDeclare {
            name: "first",
            compatible: "vendor,first",
            init: init_first,
        },
        OfClockDeclare {
            name: "second",
            compatible: "vendor,second",
            init: init_second,
        },
    ];

    #[test]
    fn dispatches_to_matching_declaration() {
        let mut recorder = Recorder::default();
        let node = TestNode::new("/soc/cmu@2000", &["vendor,second"]);

        assert!(clk_init_from(DECLARES, &node, &mut recorder));
        assert_eq!(recorder.nr_clk_ids, vec![7]);
    }

    #[test]
    fn first_declaration_wins() {
        let mut recorder = Recorder::default();
        let node = TestNode::new("/soc/cmu@1000", &["vendor,second", "vendor,first"]);

        assert!(clk_init_from(DECLARES, &node, &mut recorder));
        assert_eq!(recorder.nr_clk_ids, vec![3]);
    }

    #[cfg(feature = "exynos3475")]
    #[test]
    fn find_by_compatible() {
        let declare = find("samsung,exynos3475-cmu-top");
        assert_eq!(declare.map(|d| d.name), Some("exynos3475_cmu_top"));
        assert_eq!(
            declare.map(|d| d.compatible),
            Some("samsung,exynos3475-cmu-top")
        );

        assert!(find("samsung,exynos3475-cmu-aud").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn unknown_node_is_ignored() {
        let mut recorder = Recorder::default();
        let node = TestNode::new("/soc/uart@3000", &["vendor,uart"]);

        assert!(!clk_init_from(DECLARES, &node, &mut recorder));
        assert!(recorder.nr_clk_ids.is_empty());
    }
}
