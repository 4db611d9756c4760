use std::fmt::Write as _;

use exynos_clk::cmu::Cmu;
use indexmap::IndexMap;

/// Parent/child relationships between the clocks of several blocks.
pub struct DependencyGraph {
    /// Direct upstream -> downstream clock relationships
    graph: IndexMap<String, Vec<String>>,
    /// Direct downstream -> upstream clock relationships
    reverse_graph: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn build_from(blocks: &[&Cmu]) -> Self {
        let mut dependency_graph = IndexMap::new();
        let mut reverse_dependency_graph = IndexMap::new();

        for node in blocks.iter().flat_map(|cmu| cmu.info.nodes()) {
            let node_name = node.name().to_string();

            for input in node.parents() {
                let graph_node = dependency_graph
                    .entry(input.to_string())
                    .or_insert_with(Vec::new);

                if !graph_node.contains(&node_name) {
                    graph_node.push(node_name.clone());
                }
                reverse_dependency_graph
                    .entry(node_name.clone())
                    .or_insert_with(Vec::new)
                    .push(input.to_string());
            }
        }

        DependencyGraph {
            graph: dependency_graph,
            reverse_graph: reverse_dependency_graph,
        }
    }

    /// Direct parents of `clk`, in mux selection order.
    pub fn inputs(&self, clk: &str) -> &[String] {
        self.reverse_graph
            .get(clk)
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    /// Clocks that list `clk` as a parent.
    pub fn users(&self, clk: &str) -> &[String] {
        self.graph
            .get(clk)
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }

    /// Renders every path from `clk` up to a clock without inputs, one clock
    /// per line, indented by depth.
    pub fn ancestry(&self, clk: &str) -> String {
        let mut out = String::new();
        let mut path = Vec::new();
        self.write_ancestry(&mut out, &mut path, clk);
        out
    }

    fn write_ancestry<'g>(&'g self, out: &mut String, path: &mut Vec<&'g str>, clk: &'g str) {
        let indent = "  ".repeat(path.len());

        if path.contains(&clk) {
            writeln!(out, "{indent}{clk} (loop)").ok();
            return;
        }
        writeln!(out, "{indent}{clk}").ok();

        path.push(clk);
        for input in self.inputs(clk) {
            self.write_ancestry(out, path, input);
        }
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use exynos_clk::soc::exynos3475::{cpu, mif, top};

    use super::*;

    #[test]
    fn inputs_and_users() {
        let graph = DependencyGraph::build_from(&[&cpu::CMU]);

        assert_eq!(graph.inputs("mout_cpu"), &["cpu_pll", "mout_sclk_bus_pll_user"]);
        assert_eq!(graph.inputs("oscclk"), &[] as &[String]);
        assert_eq!(graph.users("oscclk"), &["cpu_pll"]);
        assert!(graph.users("missing").is_empty());
    }

    #[test]
    fn users_are_listed_once() {
        let graph = DependencyGraph::build_from(&[&mif::CMU, &top::CMU]);
        let users = graph.users("bus_pll");

        for user in users {
            assert_eq!(users.iter().filter(|u| *u == user).count(), 1);
        }
        assert!(users.iter().any(|u| u == "ffac_bus_pll_div2"));
    }

    #[test]
    fn ancestry_reaches_the_oscillator() {
        let graph = DependencyGraph::build_from(&[&mif::CMU]);

        assert_eq!(
            graph.ancestry("ffac_media_pll_div4"),
            "ffac_media_pll_div4\n  ffac_media_pll_div2\n    media_pll\n      oscclk\n"
        );
    }
}
