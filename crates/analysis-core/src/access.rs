use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{AnalysisError, FinancialReport, FinancialReportCreate, ReportStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Accountant,
    Analyst,
    Manager,
}

impl FromStr for UserRole {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "accountant" => Ok(UserRole::Accountant),
            "analyst" => Ok(UserRole::Analyst),
            "manager" => Ok(UserRole::Manager),
            other => Err(AnalysisError::InvalidData(format!("unknown user role '{}'", other))),
        }
    }
}

/// The authenticated user on whose behalf a report is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: i64,
    pub role: UserRole,
}

impl Caller {
    pub fn new(user_id: i64, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Owners may read their own reports; admins may read any report.
    pub fn can_read(&self, report: &FinancialReport) -> bool {
        self.role == UserRole::Admin || report.user_id == self.user_id
    }
}

/// Fetch a report and check that `caller` may read it.
pub async fn resolve_report(
    store: &dyn ReportStore,
    caller: &Caller,
    id: i64,
) -> Result<FinancialReport, AnalysisError> {
    let report = store.get_report(id).await.ok_or(AnalysisError::NotFound(id))?;

    if !caller.can_read(&report) {
        tracing::warn!(
            "User {} ({:?}) denied access to report {} owned by {}",
            caller.user_id,
            caller.role,
            id,
            report.user_id
        );
        return Err(AnalysisError::Unauthorized(id));
    }

    Ok(report)
}

/// Report store held entirely in memory.
#[derive(Default)]
pub struct InMemoryReportStore {
    reports: RwLock<HashMap<i64, FinancialReport>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an upload under the next free id and return that id.
    pub async fn insert(&self, report: FinancialReportCreate, user_id: i64) -> i64 {
        let mut reports = self.reports.write().await;
        let id = reports.keys().max().copied().unwrap_or(0) + 1;
        reports.insert(id, report.into_report(id, user_id));
        tracing::debug!("Stored report {} for user {}", id, user_id);
        id
    }

    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn get_report(&self, id: i64) -> Option<FinancialReport> {
        self.reports.read().await.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportData;

    fn upload(org: &str) -> FinancialReportCreate {
        FinancialReportCreate {
            organization_name: org.to_string(),
            period: "2024".to_string(),
            data: ReportData::default(),
        }
    }

    #[test]
    fn test_user_role_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(" Analyst ".parse::<UserRole>().unwrap(), UserRole::Analyst);
        assert!(matches!("root".parse::<UserRole>(), Err(AnalysisError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryReportStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.insert(upload("A"), 1).await, 1);
        assert_eq!(store.insert(upload("B"), 1).await, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_resolve_report_missing() {
        let store = InMemoryReportStore::new();
        let caller = Caller::new(1, UserRole::Analyst);
        let err = resolve_report(&store, &caller, 42).await.unwrap_err();
        assert!(matches!(err, AnalysisError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_resolve_report_owner_and_admin() {
        let store = InMemoryReportStore::new();
        let id = store.insert(upload("Acme"), 5).await;

        let owner = Caller::new(5, UserRole::Accountant);
        assert_eq!(resolve_report(&store, &owner, id).await.unwrap().organization_name, "Acme");

        let admin = Caller::new(99, UserRole::Admin);
        assert!(resolve_report(&store, &admin, id).await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_report_foreign_user_denied() {
        let store = InMemoryReportStore::new();
        let id = store.insert(upload("Acme"), 5).await;

        let stranger = Caller::new(6, UserRole::Manager);
        let err = resolve_report(&store, &stranger, id).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Unauthorized(i) if i == id));
    }
}
