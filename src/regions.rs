//! Region discovery and filtering.
//!
//! The [`RegionCatalog`] trait abstracts the provider's region listing so
//! the driver can run against a substitutable source in tests. The
//! production implementation lives in [`crate::aws::ec2`].

use async_trait::async_trait;

use crate::error::Result;

/// A source of provider region names.
#[async_trait]
pub trait RegionCatalog {
    /// All region names known to the provider, in service return order.
    /// No filtering is applied at this level.
    async fn region_names(&self) -> Result<Vec<String>>;
}

/// Keep the region names that start with `prefix`, preserving their
/// relative order.
pub fn filter_regions(names: Vec<String>, prefix: &str) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .collect()
}

/// List the catalog's regions and keep those matching `prefix`.
pub async fn matching_regions<C>(catalog: &C, prefix: &str) -> Result<Vec<String>>
where
    C: RegionCatalog + ?Sized,
{
    let names = catalog.region_names().await?;
    Ok(filter_regions(names, prefix))
}
