//! Analytics Data Aggregator
//!
//! Fetches the todo list through a [`TodoSource`] and derives the figures the
//! analytics view charts. Nothing is cached: every activation refetches.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown for any failed load; details only go to the log
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load analytics data";

/// One record from the analytics data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub completed: bool,
}

/// Totals for a single owner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserTotals {
    pub total: usize,
    pub completed: usize,
}

/// One wedge of the status chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusSlice {
    pub name: &'static str,
    pub value: usize,
    pub color: &'static str,
    /// Share of all records, `0.0..=1.0`
    pub fraction: f64,
}

impl StatusSlice {
    /// e.g. `Completed 43%`
    pub fn percent_label(&self) -> String {
        format!("{} {:.0}%", self.name, self.fraction * 100.0)
    }
}

pub const COMPLETED_COLOR: &str = "#28a745";
pub const PENDING_COLOR: &str = "#ffc107";

/// Summary of a fetched record list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub distinct_users: usize,
    /// Keyed by `userId`, ascending
    pub per_user: BTreeMap<u64, UserTotals>,
}

impl TodoStats {
    pub fn from_records(records: &[TodoRecord]) -> Self {
        let mut per_user: BTreeMap<u64, UserTotals> = BTreeMap::new();
        let mut completed = 0;

        for record in records {
            let totals = per_user.entry(record.user_id).or_default();
            totals.total += 1;
            if record.completed {
                totals.completed += 1;
                completed += 1;
            }
        }

        Self {
            total: records.len(),
            completed,
            pending: records.len() - completed,
            distinct_users: per_user.len(),
            per_user,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Completed share of all records, `None` when there are none
    pub fn completion_ratio(&self) -> Option<f64> {
        (self.total > 0).then(|| self.completed as f64 / self.total as f64)
    }

    /// Completed vs pending, in that order
    pub fn status_slices(&self) -> [StatusSlice; 2] {
        let fraction = |value: usize| {
            if self.total == 0 {
                0.0
            } else {
                value as f64 / self.total as f64
            }
        };

        [
            StatusSlice {
                name: "Completed",
                value: self.completed,
                color: COMPLETED_COLOR,
                fraction: fraction(self.completed),
            },
            StatusSlice {
                name: "Pending",
                value: self.pending,
                color: PENDING_COLOR,
                fraction: fraction(self.pending),
            },
        ]
    }

    /// `(userId, totals)` pairs for the per-owner chart, ascending by owner
    pub fn per_user_series(&self) -> Vec<(u64, UserTotals)> {
        self.per_user.iter().map(|(id, t)| (*id, *t)).collect()
    }

    /// Largest per-owner total, used to scale the bar chart
    pub fn max_user_total(&self) -> usize {
        self.per_user.values().map(|t| t.total).max().unwrap_or(0)
    }
}

/// Errors that can occur while loading analytics data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Data source returned status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl AnalyticsError {
    /// The single message the view displays, whatever went wrong
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

/// Anything able to fetch the analytics record list
#[async_trait(?Send)]
pub trait TodoSource {
    async fn fetch_todos(&self) -> Result<Vec<TodoRecord>, AnalyticsError>;
}

/// Fetch once and aggregate. No retry.
pub async fn load_stats(source: &dyn TodoSource) -> Result<TodoStats, AnalyticsError> {
    match source.fetch_todos().await {
        Ok(records) => {
            let stats = TodoStats::from_records(&records);
            tracing::debug!(
                total = stats.total,
                users = stats.distinct_users,
                "Analytics data loaded"
            );
            Ok(stats)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching todos");
            Err(e)
        }
    }
}
