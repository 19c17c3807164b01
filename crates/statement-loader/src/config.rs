use analysis_core::{Caller, UserRole};
use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    // Labels applied to uploaded statements
    pub organization_name: String,
    pub period: String,

    // Identity the reports are stored and read under
    pub owner_id: i64,
    pub owner_role: UserRole,

    // Logging
    pub json_logging: bool,
}

impl LoaderConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            organization_name: lookup("REPORT_ORGANIZATION")
                .unwrap_or_else(|| "Unknown organization".to_string()),
            period: lookup("REPORT_PERIOD").unwrap_or_else(|| "unspecified".to_string()),

            owner_id: lookup("REPORT_OWNER_ID")
                .unwrap_or_else(|| "1".to_string())
                .parse()
                .context("REPORT_OWNER_ID must be an integer")?,
            owner_role: lookup("REPORT_OWNER_ROLE")
                .unwrap_or_else(|| "accountant".to_string())
                .parse()
                .context("REPORT_OWNER_ROLE must be admin, accountant, analyst or manager")?,

            json_logging: lookup("RUST_LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        };

        Ok(config)
    }

    pub fn caller(&self) -> Caller {
        Caller::new(self.owner_id, self.owner_role)
    }
}
