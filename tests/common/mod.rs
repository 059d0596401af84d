//! Shared fakes for integration tests.
//!
//! The fakes implement the exporter's two service traits over in-memory
//! data and record the batch calls they receive, so tests can assert
//! both results and call patterns.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use guardduty_export::error::{Error, Result};
use guardduty_export::findings::{Finding, FindingIdPage, FindingService};
use guardduty_export::regions::RegionCatalog;

/// Fixed list of region names.
pub struct FakeRegionCatalog {
    pub names: Vec<String>,
}

impl FakeRegionCatalog {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
impl RegionCatalog for FakeRegionCatalog {
    async fn region_names(&self) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }
}

/// In-memory finding service: detectors per region, pages of finding ids
/// per detector, and a finding record per id. Records every batch call.
#[derive(Default)]
pub struct FakeFindingService {
    /// region -> detector ids
    detectors: HashMap<String, Vec<String>>,
    /// (region, detector) -> pages of finding ids
    pages: HashMap<(String, String), Vec<Vec<String>>>,
    /// finding id -> record
    records: HashMap<String, Finding>,
    /// regions whose calls fail
    failing: Vec<String>,
    /// (region, detector, ids) per GetFindings-equivalent call
    pub batch_calls: Mutex<Vec<(String, String, Vec<String>)>>,
}

impl FakeFindingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a detector with its pages of finding ids; each id gets a
    /// backing record generated via [`finding`].
    pub fn with_detector(mut self, region: &str, detector_id: &str, pages: &[&[&str]]) -> Self {
        self.detectors
            .entry(region.to_string())
            .or_default()
            .push(detector_id.to_string());

        let pages: Vec<Vec<String>> = pages
            .iter()
            .map(|page| page.iter().map(|id| id.to_string()).collect())
            .collect();
        for id in pages.iter().flatten() {
            self.records.insert(id.clone(), finding(id));
        }
        self.pages
            .insert((region.to_string(), detector_id.to_string()), pages);
        self
    }

    /// Register a region with no detectors at all.
    pub fn with_empty_region(mut self, region: &str) -> Self {
        self.detectors.entry(region.to_string()).or_default();
        self
    }

    /// Make every call for `region` fail.
    pub fn failing_in(mut self, region: &str) -> Self {
        self.failing.push(region.to_string());
        self
    }

    pub fn batch_call_count(&self) -> usize {
        self.batch_calls.lock().unwrap().len()
    }

    fn check_region(&self, operation: &'static str, region: &str) -> Result<()> {
        if self.failing.iter().any(|r| r == region) {
            return Err(Error::remote(operation, region, "simulated outage"));
        }
        Ok(())
    }
}

#[async_trait]
impl FindingService for FakeFindingService {
    async fn detector_ids(&self, region: &str) -> Result<Vec<String>> {
        self.check_region("ListDetectors", region)?;
        Ok(self.detectors.get(region).cloned().unwrap_or_default())
    }

    async fn finding_id_page(
        &self,
        region: &str,
        detector_id: &str,
        cursor: Option<String>,
    ) -> Result<FindingIdPage> {
        self.check_region("ListFindings", region)?;

        let pages = self
            .pages
            .get(&(region.to_string(), detector_id.to_string()))
            .cloned()
            .unwrap_or_default();

        let index: usize = match cursor {
            Some(token) => token.parse().expect("fake cursor is a page index"),
            None => 0,
        };
        let ids = pages.get(index).cloned().unwrap_or_default();
        let next = if index + 1 < pages.len() {
            Some((index + 1).to_string())
        } else {
            None
        };
        Ok(FindingIdPage { ids, next })
    }

    async fn findings_by_id(
        &self,
        region: &str,
        detector_id: &str,
        ids: &[String],
    ) -> Result<Vec<Finding>> {
        self.check_region("GetFindings", region)?;

        self.batch_calls.lock().unwrap().push((
            region.to_string(),
            detector_id.to_string(),
            ids.to_vec(),
        ));

        Ok(ids
            .iter()
            .map(|id| self.records.get(id).expect("registered finding id").clone())
            .collect())
    }
}

/// A deterministic finding record for a given id.
pub fn finding(id: &str) -> Finding {
    Finding {
        id: id.to_string(),
        title: format!("title-{id}"),
        description: format!("description-{id}"),
        severity: 5.0,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-02T00:00:00.000Z".to_string(),
    }
}
