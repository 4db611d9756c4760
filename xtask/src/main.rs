use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use exynos_clk::soc;
use xtask::{bindings, dispatch, dump, graph::DependencyGraph};

// ----------------------------------------------------------------------------
// Command-line Interface

#[derive(Debug, Parser)]
enum Cli {
    /// Check the clock tables for dangling parents, unlisted registers and
    /// other inconsistencies.
    Validate,
    /// List every clock descriptor.
    Dump(DumpArgs),
    /// Show where a clock comes from and what it feeds.
    Tree(TreeArgs),
    /// Generate the C clock-ID header for device-tree sources.
    Bindings(BindingsArgs),
    /// Run the device-tree dispatch for a compatible string without a clock
    /// framework.
    Dispatch(DispatchArgs),
}

#[derive(Debug, Args)]
struct DumpArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = dump::Format::Csv)]
    format: dump::Format,
    /// Only dump this block (all blocks if omitted).
    #[arg(long)]
    block: Option<String>,
}

#[derive(Debug, Args)]
struct TreeArgs {
    /// Name of the clock, e.g. `dout_aclk_peri_66`.
    clock: String,
}

#[derive(Debug, Args)]
struct BindingsArgs {
    /// Write the header to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct DispatchArgs {
    /// Compatible string of the device-tree node, e.g.
    /// `samsung,exynos3475-cmu-top`.
    compatible: String,
}

// ----------------------------------------------------------------------------
// Application

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_module("xtask", log::LevelFilter::Info)
        .filter_module("exynos_clk", log::LevelFilter::Debug)
        .init();

    match Cli::parse() {
        Cli::Validate => xtask::check_tables(&xtask::context()),
        Cli::Dump(args) => dump_tables(args),
        Cli::Tree(args) => tree(args),
        Cli::Bindings(args) => generate_bindings(args),
        Cli::Dispatch(args) => dispatch_node(args),
    }
}

// ----------------------------------------------------------------------------
// Subcommands

fn dump_tables(args: DumpArgs) -> Result<()> {
    let blocks = match args.block {
        Some(name) => vec![xtask::find_block(&name)?],
        None => soc::CMUS.to_vec(),
    };

    let rows = dump::rows(&blocks);
    print!("{}", dump::render(&rows, args.format)?);

    Ok(())
}

fn tree(args: TreeArgs) -> Result<()> {
    let (cmu, node) = xtask::find_clock(&args.clock)?;
    let graph = DependencyGraph::build_from(soc::CMUS);

    println!("{} ({} in CMU_{})", node.name(), node.kind(), cmu.name);
    if let Some(id) = node.id() {
        println!("exported as ID {id}");
    }

    println!();
    println!("Parents:");
    print!("{}", graph.ancestry(node.name()));

    let users = graph.users(node.name());
    println!();
    if users.is_empty() {
        println!("No users");
    } else {
        println!("Users:");
        for user in users {
            println!("  {user}");
        }
    }

    Ok(())
}

fn generate_bindings(args: BindingsArgs) -> Result<()> {
    let header = bindings::render()?;

    match args.output {
        Some(path) => {
            fs::write(&path, header)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{header}"),
    }

    Ok(())
}

fn dispatch_node(args: DispatchArgs) -> Result<()> {
    let registrar = dispatch::dispatch(&args.compatible)?;
    log::info!(
        "'{}' registered {} block(s)",
        args.compatible,
        registrar.registered.len()
    );

    Ok(())
}
