//! AWS-backed implementations of the exporter's service traits, using
//! the official AWS SDK for Rust.
//!
//! ## Authentication
//!
//! Credentials are loaded from the standard AWS credential chain:
//!
//! 1. Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`)
//! 2. AWS credentials file (`~/.aws/credentials`)
//! 3. IAM instance profile (when running on EC2)
//!
//! Region selection is explicit: the region listing is issued from a
//! fixed home region, and each GuardDuty client is built for the region
//! being exported.

pub mod ec2;
pub mod guardduty;

pub use ec2::Ec2RegionCatalog;
pub use guardduty::GuardDutyFindingService;
