//! GuardDuty-backed finding service.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_guardduty::types;
use aws_sdk_guardduty::Client;

use crate::error::{Error, Result};
use crate::findings::{Finding, FindingIdPage, FindingService};

/// Fetches findings from GuardDuty, building a client for whichever
/// region is being queried.
#[derive(Debug, Clone)]
pub struct GuardDutyFindingService {
    page_size: i32,
}

impl GuardDutyFindingService {
    pub fn new(page_size: i32) -> Self {
        Self { page_size }
    }

    async fn client(&self, region: &str) -> Client {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_sdk_guardduty::config::Region::new(region.to_string()))
            .load()
            .await;
        Client::new(&config)
    }
}

#[async_trait]
impl FindingService for GuardDutyFindingService {
    async fn detector_ids(&self, region: &str) -> Result<Vec<String>> {
        let client = self.client(region).await;

        let resp = client
            .list_detectors()
            .send()
            .await
            .map_err(|e| Error::remote("ListDetectors", region, e))?;

        Ok(resp.detector_ids().to_vec())
    }

    async fn finding_id_page(
        &self,
        region: &str,
        detector_id: &str,
        cursor: Option<String>,
    ) -> Result<FindingIdPage> {
        let client = self.client(region).await;

        let resp = client
            .list_findings()
            .detector_id(detector_id)
            .max_results(self.page_size)
            .set_next_token(cursor)
            .send()
            .await
            .map_err(|e| Error::remote("ListFindings", region, e))?;

        Ok(FindingIdPage {
            ids: resp.finding_ids().to_vec(),
            next: resp.next_token().map(str::to_string),
        })
    }

    async fn findings_by_id(
        &self,
        region: &str,
        detector_id: &str,
        ids: &[String],
    ) -> Result<Vec<Finding>> {
        let client = self.client(region).await;

        let resp = client
            .get_findings()
            .detector_id(detector_id)
            .set_finding_ids(Some(ids.to_vec()))
            .send()
            .await
            .map_err(|e| Error::remote("GetFindings", region, e))?;

        Ok(resp.findings().iter().map(finding_from_sdk).collect())
    }
}

/// Convert the SDK finding into the crate's owned record. Title and
/// description are optional in the GuardDuty model and default to empty.
fn finding_from_sdk(finding: &types::Finding) -> Finding {
    Finding {
        id: finding.id().to_string(),
        title: finding.title().unwrap_or_default().to_string(),
        description: finding.description().unwrap_or_default().to_string(),
        severity: finding.severity(),
        created_at: finding.created_at().to_string(),
        updated_at: finding.updated_at().to_string(),
    }
}
