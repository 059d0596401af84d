//! # guardduty-export
//!
//! Export AWS GuardDuty findings from US regions to a timestamped CSV
//! file.
//!
//! The run is a linear pipeline:
//!
//! ```text
//! driver ──► region catalog (EC2 DescribeRegions, prefix filter)
//!        ──► per region: finding service (ListDetectors ──►
//!            ListFindings pages ──► GetFindings batches)
//!        ──► CSV exporter (one file, seven fixed columns)
//! ```
//!
//! Regions are processed one at a time in service return order, the
//! aggregate list is owned by the driver, and the CSV is written exactly
//! once at the end of a fully successful run. The remote boundaries are
//! the [`regions::RegionCatalog`] and [`findings::FindingService`]
//! traits; production implementations backed by the AWS SDK live in
//! [`aws`].

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aws;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod exporter;
pub mod findings;
pub mod regions;

pub use error::{Error, Result};
