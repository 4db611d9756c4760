use anyhow::Result;
use exynos_clk::dt_bindings::clock::exynos3475;
use serde::Serialize;

const TEMPLATE_NAME: &str = "exynos3475.h";
const TEMPLATE: &str = include_str!("../templates/exynos3475.h.jinja");

#[derive(Debug, Serialize)]
struct Define {
    name: &'static str,
    value: u32,
}

#[derive(Debug, Serialize)]
struct Block {
    name: &'static str,
    ids: Vec<Define>,
    nr_clk: u32,
}

/// Renders `dt-bindings/clock/exynos3475.h` from the clock-ID modules.
pub fn render() -> Result<String> {
    let blocks = exynos3475::BLOCKS
        .iter()
        .map(|block| Block {
            name: block.name,
            ids: block
                .ids
                .iter()
                .map(|&(name, id)| Define {
                    name,
                    value: id.raw(),
                })
                .collect(),
            nr_clk: block.nr_clk,
        })
        .collect::<Vec<_>>();

    let mut env = minijinja::Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;

    let tmpl = env.get_template(TEMPLATE_NAME)?;
    let mut header = tmpl.render(minijinja::context! { blocks => blocks })?;
    header.push('\n');

    Ok(header)
}

#[cfg(test)]
mod tests {
    use exynos_clk::dt_bindings::clock::exynos3475::{fsys, top};

    use super::*;

    #[test]
    fn header_guard_and_blocks() {
        let header = render().unwrap();

        assert!(header.starts_with("/* SPDX-License-Identifier: GPL-2.0-only */\n"));
        assert!(header.contains("#ifndef _DT_BINDINGS_CLOCK_EXYNOS3475_H\n"));
        assert!(header.ends_with("#endif /* _DT_BINDINGS_CLOCK_EXYNOS3475_H */\n"));
        assert_eq!(header.matches("/* CMU_").count(), 8);
        assert!(header.contains("/* CMU_BUS0 */\n#define BUS0_NR_CLK\t1\n"));
    }

    #[test]
    fn defines_match_the_bindings() {
        let header = render().unwrap();

        assert!(header.contains("/* CMU_CPU */\n#define CLK_CPU_PLL\t1\n#define CLK_MOUT_CPU\t2\n"));
        assert!(header.contains(&format!("#define CLK_USB_PLL\t{}\n", fsys::CLK_USB_PLL)));
        assert!(header.contains(&format!("#define TOP_NR_CLK\t{}\n", top::NR_CLK)));
    }

    #[test]
    fn every_namespace_size_is_rendered() {
        let header = render().unwrap();

        for block in exynos3475::BLOCKS {
            let define = format!(
                "#define {}_NR_CLK\t{}\n",
                block.name.to_ascii_uppercase(),
                block.nr_clk
            );
            assert!(header.contains(&define), "{define}");
        }
    }
}
