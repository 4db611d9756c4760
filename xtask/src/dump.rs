use anyhow::Result;
use clap::ValueEnum;
use exynos_clk::{clock::ClockNode, cmu::Cmu};
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Csv,
    Toml,
}

/// One clock descriptor, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub block: &'static str,
    pub kind: &'static str,
    pub id: Option<u32>,
    pub name: &'static str,
    /// Space-separated, in mux selection order.
    pub parents: String,
    /// The control register: the field register of a mux, divider or gate,
    /// or the configuration register of a PLL.
    pub register: Option<String>,
    /// Field shift of a mux or divider, or the enable bit of a gate.
    pub shift: Option<u8>,
    pub width: Option<u8>,
    pub flags: String,
}

impl Row {
    pub fn new(cmu: &Cmu, node: ClockNode<'static>) -> Self {
        let (register, shift, width) = match node {
            ClockNode::Pll(pll) => (Some(pll.con_reg()), None, None),
            ClockNode::Mux(mux) => (Some(mux.offset), Some(mux.shift), Some(mux.width)),
            ClockNode::Div(div) => (Some(div.offset), Some(div.shift), Some(div.width)),
            ClockNode::Gate(gate) => (Some(gate.offset), Some(gate.bit), Some(1)),
            ClockNode::FixedRate(_) | ClockNode::FixedFactor(_) => (None, None, None),
        };

        Self {
            block: cmu.name,
            kind: node.kind().as_str(),
            id: node.id().map(|id| id.raw()),
            name: node.name(),
            parents: node.parents().join(" "),
            register: register.map(|offset| format!("{offset:#06x}")),
            shift,
            width,
            flags: format!("{:#x}", node.flags().bits()),
        }
    }
}

/// Every descriptor of `blocks`, block by block in registration order.
pub fn rows(blocks: &[&Cmu]) -> Vec<Row> {
    blocks
        .iter()
        .flat_map(|cmu| cmu.info.nodes().map(move |node| Row::new(cmu, node)))
        .collect()
}

#[derive(Serialize)]
struct TomlDump<'a> {
    clock: &'a [Row],
}

pub fn render(rows: &[Row], format: Format) -> Result<String> {
    match format {
        Format::Csv => {
            let mut buffer = Vec::new();
            {
                let mut writer = csv::Writer::from_writer(&mut buffer);
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            Ok(String::from_utf8(buffer)?)
        }
        Format::Toml => Ok(basic_toml::to_string(&TomlDump { clock: rows })?),
    }
}

#[cfg(test)]
mod tests {
    use exynos_clk::soc::exynos3475::{bus0, cpu, mif};

    use super::*;

    #[test]
    fn rows_follow_registration_order() {
        let rows = rows(&[&cpu::CMU]);
        assert_eq!(rows.len(), 12);

        assert_eq!(rows[0].kind, "pll");
        assert_eq!(rows[0].name, "cpu_pll");
        assert_eq!(rows[0].id, Some(1));
        assert_eq!(rows[0].register.as_deref(), Some("0x0100"));

        assert_eq!(rows[1].kind, "mux");
        assert_eq!(rows[1].parents, "cpu_pll mout_sclk_bus_pll_user");
        assert_eq!(rows.last().map(|row| row.kind), Some("gate"));
    }

    #[test]
    fn csv_has_a_header_and_one_line_per_clock() {
        let csv = render(&rows(&[&bus0::CMU]), Format::Csv).unwrap();
        let lines = csv.lines().collect::<Vec<_>>();

        assert_eq!(
            lines[0],
            "block,kind,id,name,parents,register,shift,width,flags"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("bus0,div,,dout_pclk_bus0_83,"));
        assert!(lines[2].starts_with("bus0,gate,,mout_aclk_bus0_333_user,"));
    }

    #[test]
    fn toml_is_an_array_of_tables() {
        let toml = render(&rows(&[&mif::CMU]), Format::Toml).unwrap();

        assert_eq!(toml.matches("[[clock]]").count(), 34);
        assert!(toml.contains("name = \"ffac_media_pll_div4\""));
    }
}
