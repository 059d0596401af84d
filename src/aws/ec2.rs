//! EC2-backed region catalog.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::Client;

use crate::error::{Error, Result};
use crate::regions::RegionCatalog;

/// Lists regions via EC2 `DescribeRegions`, issued from a fixed home
/// region.
#[derive(Debug, Clone)]
pub struct Ec2RegionCatalog {
    home_region: String,
}

impl Ec2RegionCatalog {
    pub fn new(home_region: impl Into<String>) -> Self {
        Self {
            home_region: home_region.into(),
        }
    }

    async fn client(&self) -> Client {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_sdk_ec2::config::Region::new(self.home_region.clone()))
            .load()
            .await;
        Client::new(&config)
    }
}

#[async_trait]
impl RegionCatalog for Ec2RegionCatalog {
    async fn region_names(&self) -> Result<Vec<String>> {
        let client = self.client().await;

        let resp = client
            .describe_regions()
            .send()
            .await
            .map_err(|e| Error::remote("DescribeRegions", &self.home_region, e))?;

        let names = resp
            .regions()
            .iter()
            .filter_map(|region| region.region_name().map(str::to_string))
            .collect();
        Ok(names)
    }
}
