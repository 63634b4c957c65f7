#[cfg(test)]
#[path = "cases_test.rs"]
mod cases_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::state::report::ReportDraft;

/// Processing status of a reported case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl CaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

/// A tracked case as shown in the dashboard table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub id: String,
    pub date: String,
    pub victim_name: String,
    pub county: String,
    pub case_type: String,
    pub status: CaseStatus,
}

/// A case that has gone too long without progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayedCase {
    pub id: String,
    pub report_date: String,
    pub victim_name: String,
    pub county: String,
    pub case_type: String,
    pub days_elapsed: u32,
    pub status: String,
}

/// Headline numbers for the dashboard stat cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseSummary {
    pub total: u32,
    pub active: u32,
    pub resolved: u32,
    pub resolution_rate: u32,
}

/// One labelled value in a bar chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: u32,
}

impl ChartPoint {
    fn new(name: &str, value: u32) -> Self {
        Self {
            name: name.to_owned(),
            value,
        }
    }
}

/// Data-access seam between the views and whatever holds case data.
///
/// The shipped implementation is an in-memory mock; a real deployment
/// would forward to a case-intake service behind the same interface.
pub trait CaseStore {
    fn fetch_cases(&self) -> Vec<CaseRecord>;
    fn delayed_cases(&self) -> Vec<DelayedCase>;
    fn summary(&self) -> CaseSummary;
    fn county_totals(&self) -> Vec<ChartPoint>;
    fn type_totals(&self) -> Vec<ChartPoint>;

    /// Accept a completed report. Placeholder: stamps an id and logs it.
    fn submit_case(&self, report: ReportDraft);
}

/// Cloneable handle handed out through Leptos context.
#[derive(Clone)]
pub struct Cases(pub Arc<dyn CaseStore + Send + Sync>);

impl Cases {
    pub fn in_memory() -> Self {
        Self(Arc::new(InMemoryCases))
    }
}

/// Mock dataset covering the dashboard, the delayed view, and both charts.
pub struct InMemoryCases;

impl CaseStore for InMemoryCases {
    fn fetch_cases(&self) -> Vec<CaseRecord> {
        let rows: [(&str, &str, &str, &str, &str, CaseStatus); 5] = [
            ("CASE-001", "2025-04-12", "Jane Doe", "Nairobi", "Physical Abuse", CaseStatus::New),
            ("CASE-002", "2025-04-10", "John Smith", "Mombasa", "Sexual Abuse", CaseStatus::InProgress),
            ("CASE-003", "2025-04-08", "Mary Johnson", "Kisumu", "Child Marriage", CaseStatus::New),
            ("CASE-004", "2025-04-05", "Grace Wanjiku", "Narok", "FGM", CaseStatus::InProgress),
            ("CASE-005", "2025-04-03", "Peter Ochieng", "Homabay", "Neglect", CaseStatus::Resolved),
        ];
        rows.into_iter()
            .map(|(id, date, victim, county, case_type, status)| CaseRecord {
                id: id.to_owned(),
                date: date.to_owned(),
                victim_name: victim.to_owned(),
                county: county.to_owned(),
                case_type: case_type.to_owned(),
                status,
            })
            .collect()
    }

    fn delayed_cases(&self) -> Vec<DelayedCase> {
        let rows: [(&str, &str, &str, &str, &str, u32, &str); 3] = [
            ("CASE-001", "2025-01-15", "Jane Doe", "Nairobi", "Physical Abuse", 45, "Pending Police Response"),
            ("CASE-003", "2025-02-01", "Mary Johnson", "Kisumu", "Child Marriage", 30, "Awaiting Medical Report"),
            ("CASE-007", "2025-02-10", "Grace Wanjiku", "Narok", "FGM", 25, "Pending Investigation"),
        ];
        rows.into_iter()
            .map(|(id, date, victim, county, case_type, days, status)| DelayedCase {
                id: id.to_owned(),
                report_date: date.to_owned(),
                victim_name: victim.to_owned(),
                county: county.to_owned(),
                case_type: case_type.to_owned(),
                days_elapsed: days,
                status: status.to_owned(),
            })
            .collect()
    }

    fn summary(&self) -> CaseSummary {
        CaseSummary {
            total: 231,
            active: 89,
            resolved: 142,
            resolution_rate: 62,
        }
    }

    fn county_totals(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Bungoma", 33),
            ChartPoint::new("Homabay", 33),
            ChartPoint::new("Migori", 30),
            ChartPoint::new("Narok", 27),
            ChartPoint::new("Kisumu", 24),
            ChartPoint::new("Siaya", 23),
        ]
    }

    fn type_totals(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Physical Abuse", 42),
            ChartPoint::new("Sexual Abuse", 28),
            ChartPoint::new("FGM", 16),
            ChartPoint::new("Child Marriage", 12),
            ChartPoint::new("Neglect", 8),
            ChartPoint::new("Other", 4),
        ]
    }

    fn submit_case(&self, report: ReportDraft) {
        let case_id = uuid::Uuid::new_v4();
        let body = serde_json::to_string(&report).unwrap_or_default();
        log::info!("case {case_id} submitted: {body}");
    }
}

/// Filter cases whose id, victim name, or county contains `term`,
/// case-insensitively. An empty term matches everything.
pub fn search(cases: &[CaseRecord], term: &str) -> Vec<CaseRecord> {
    let term = term.to_lowercase();
    cases
        .iter()
        .filter(|case| {
            case.id.to_lowercase().contains(&term)
                || case.victim_name.to_lowercase().contains(&term)
                || case.county.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Same match rule as [`search`], over delayed cases.
pub fn search_delayed(cases: &[DelayedCase], term: &str) -> Vec<DelayedCase> {
    let term = term.to_lowercase();
    cases
        .iter()
        .filter(|case| {
            case.id.to_lowercase().contains(&term)
                || case.victim_name.to_lowercase().contains(&term)
                || case.county.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Restrict to one status tab; `None` keeps every case.
pub fn by_status(cases: &[CaseRecord], status: Option<CaseStatus>) -> Vec<CaseRecord> {
    match status {
        None => cases.to_vec(),
        Some(status) => cases
            .iter()
            .filter(|case| case.status == status)
            .cloned()
            .collect(),
    }
}
