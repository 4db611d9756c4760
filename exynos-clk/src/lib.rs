//! # Clock tables for Samsung Exynos SoCs
//!
//! ## Overview
//! Each clock management unit (CMU) of an Exynos SoC is described here as a
//! set of static tables: the PLLs, muxes, dividers and gates of the block,
//! the clock IDs it exports to device-tree consumers, and the registers that
//! must survive a suspend cycle. Nothing in this crate touches hardware. The
//! tables are handed to a clock framework through [`cmu::CmuRegistrar`] when
//! the firmware finds the block's node in the device tree:
//!
//! ```rust, no_run
//! use exynos_clk::{cmu::{CmuInfo, CmuRegistrar}, of::{self, OfNode}};
//!
//! struct Framework;
//!
//! impl CmuRegistrar for Framework {
//!     fn register_one(&mut self, node: &dyn OfNode, info: &'static CmuInfo) {
//!         // create the runtime clocks for `info`
//!     }
//! }
//!
//! fn attach(node: &dyn OfNode) {
//!     if !of::clk_init(node, &mut Framework) {
//!         // not a clock controller of this chip
//!     }
//! }
//! ```
//!
//! The [`dt_bindings`] module carries the numeric constants shared with
//! device-tree sources: clock IDs per CMU block, and power-domain IDs.
//!
//! ## Choosing a Device
//!
//! Enable the chip feature for your SoC. Without one, [`soc::CMUS`] is empty
//! and [`of::clk_init`] matches nothing.
//!
//! ## Configuration
//!
//! The following options are read from the environment at build time:
#![doc = ""]
#![doc = include_str!(concat!(env!("OUT_DIR"), "/exynos_clk_config_table.md"))]
#![doc = ""]
//! ## Feature Flags
#![doc = document_features::document_features!()]
#![deny(rust_2018_idioms)]
#![cfg_attr(not(test), no_std)]

// MUST be the first module
mod fmt;

pub mod clock;
pub mod cmu;
pub mod dt_bindings;
pub mod of;
pub mod soc;
pub mod validate;
