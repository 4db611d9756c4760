use anyhow::{ensure, Result};
use exynos_clk::{
    cmu::{CmuInfo, CmuRegistrar},
    of::{self, OfNode},
};

/// A device-tree node with a single compatible string.
pub struct DtNode {
    path: String,
    compatible: String,
}

impl DtNode {
    pub fn new(compatible: &str) -> Self {
        let unit = compatible.rsplit(',').next().unwrap_or(compatible);

        Self {
            path: format!("/soc/{unit}"),
            compatible: compatible.to_string(),
        }
    }
}

impl OfNode for DtNode {
    fn full_name(&self) -> &str {
        &self.path
    }

    fn is_compatible(&self, compatible: &str) -> bool {
        self.compatible == compatible
    }
}

/// Stands in for the clock framework: records each registration and logs
/// what would be created.
#[derive(Debug, Default)]
pub struct LoggingRegistrar {
    pub registered: Vec<&'static CmuInfo>,
}

impl CmuRegistrar for LoggingRegistrar {
    fn register_one(&mut self, node: &dyn OfNode, info: &'static CmuInfo) {
        log::info!(
            "{}: {} PLLs, {} muxes, {} dividers, {} gates, {} fixed, {} fixed-factor",
            node.full_name(),
            info.pll_clks.len(),
            info.mux_clks.len(),
            info.div_clks.len(),
            info.gate_clks.len(),
            info.fixed_clks.len(),
            info.fixed_factor_clks.len(),
        );
        log::info!(
            "{}: {} clock IDs, {} saved registers",
            node.full_name(),
            info.nr_clk_ids,
            info.clk_regs.len()
        );

        self.registered.push(info);
    }
}

/// Runs the device-tree dispatch for a node compatible with `compatible`.
pub fn dispatch(compatible: &str) -> Result<LoggingRegistrar> {
    let node = DtNode::new(compatible);
    let mut registrar = LoggingRegistrar::default();

    ensure!(
        of::clk_init(&node, &mut registrar),
        "No clock provider is compatible with '{compatible}'"
    );

    Ok(registrar)
}

#[cfg(test)]
mod tests {
    use exynos_clk::soc::exynos3475::peri;

    use super::*;

    #[test]
    fn matching_node_registers_its_block() {
        let registrar = dispatch("samsung,exynos3475-cmu-peri").unwrap();

        assert_eq!(registrar.registered.len(), 1);
        assert!(std::ptr::eq(registrar.registered[0], &peri::CMU_INFO));
    }

    #[test]
    fn unknown_compatible_is_an_error() {
        let error = dispatch("samsung,exynos3475-cmu-aud").unwrap_err();
        assert_eq!(
            error.to_string(),
            "No clock provider is compatible with 'samsung,exynos3475-cmu-aud'"
        );
    }

    #[test]
    fn node_path() {
        let node = DtNode::new("samsung,exynos3475-cmu-top");
        assert_eq!(node.full_name(), "/soc/exynos3475-cmu-top");
        assert!(node.is_compatible("samsung,exynos3475-cmu-top"));
        assert!(!node.is_compatible("samsung,exynos3475-cmu-mif"));
    }
}
