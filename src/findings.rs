//! Finding records and the per-region fetch algorithm.
//!
//! A region owns zero or more detectors; each detector's findings are
//! enumerated as pages of ids and then resolved in batches. The
//! [`FindingService`] trait mirrors the three GuardDuty operations so the
//! algorithm can run against a substitutable source in tests; the
//! production implementation lives in [`crate::aws::guardduty`].

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// A security finding, converted from the provider's record at the
/// service boundary. Optional provider fields default to empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Detector-scoped finding id
    pub id: String,
    pub title: String,
    pub description: String,
    /// GuardDuty severity score (0.1 - 9.0)
    pub severity: f64,
    /// Creation timestamp, as the provider formats it
    pub created_at: String,
    /// Last-update timestamp, as the provider formats it
    pub updated_at: String,
}

/// One page of finding ids plus the opaque continuation cursor for the
/// next page, if any.
#[derive(Debug, Clone, Default)]
pub struct FindingIdPage {
    pub ids: Vec<String>,
    pub next: Option<String>,
}

/// A finding combined with the region it was fetched from, projected
/// onto the CSV column set. Built once per finding, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "FindingId")]
    pub finding_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Severity")]
    pub severity: f64,
    #[serde(rename = "CreatedAt")]
    pub created_at: String,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: String,
}

impl ExportRecord {
    /// Combine a fetched finding with the region it came from.
    pub fn new(region: impl Into<String>, finding: Finding) -> Self {
        Self {
            region: region.into(),
            finding_id: finding.id,
            title: finding.title,
            description: finding.description,
            severity: finding.severity,
            created_at: finding.created_at,
            updated_at: finding.updated_at,
        }
    }
}

/// The three remote operations needed to enumerate a region's findings.
#[async_trait]
pub trait FindingService {
    /// All detector ids active in `region`. Typically zero or one, but
    /// callers must support multiple.
    async fn detector_ids(&self, region: &str) -> Result<Vec<String>>;

    /// One page of finding ids for a detector. `cursor` is the opaque
    /// continuation token from the previous page, or `None` for the
    /// first page.
    async fn finding_id_page(
        &self,
        region: &str,
        detector_id: &str,
        cursor: Option<String>,
    ) -> Result<FindingIdPage>;

    /// Resolve a non-empty batch of finding ids into full records.
    async fn findings_by_id(
        &self,
        region: &str,
        detector_id: &str,
        ids: &[String],
    ) -> Result<Vec<Finding>>;
}

/// Fetch the complete sequence of findings for one region across all of
/// its detectors.
///
/// A region with zero detectors yields an empty sequence, not an error.
/// Empty id pages are skipped without a batch call: the provider rejects
/// an empty `FindingIds` list.
pub async fn fetch_region_findings<S>(service: &S, region: &str) -> Result<Vec<Finding>>
where
    S: FindingService + ?Sized,
{
    let detectors = service.detector_ids(region).await?;
    if detectors.is_empty() {
        tracing::warn!(region = %region, "no GuardDuty detector in region");
        return Ok(Vec::new());
    }
    tracing::debug!(region = %region, detectors = detectors.len(), "enumerating detectors");

    let mut findings = Vec::new();
    for detector_id in &detectors {
        let mut cursor = None;
        loop {
            let page = service
                .finding_id_page(region, detector_id, cursor)
                .await?;

            if !page.ids.is_empty() {
                tracing::debug!(
                    region = %region,
                    detector = %detector_id,
                    ids = page.ids.len(),
                    "resolving finding id page"
                );
                let batch = service
                    .findings_by_id(region, detector_id, &page.ids)
                    .await?;
                findings.extend(batch);
            }

            match page.next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
    }

    Ok(findings)
}
