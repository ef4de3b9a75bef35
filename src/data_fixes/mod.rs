//! One-time data fixes
//!
//! Schema changes live in `migrations/` and are applied by `sqlx::migrate!`.
//! Some schema changes need existing rows rewritten in ways SQL alone cannot
//! express (for example, reading a reference dataset). Those rewrites are data
//! fixes: each names the schema migration it depends on and is applied at most
//! once per database, recorded in `data_fix_history`.

pub mod language_names;
pub mod registry;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{PgConnection, PgPool};

use crate::config::Settings;
use crate::utils::errors::{AmyError, Result};
use crate::utils::logging;

pub use language_names::{fix_truncated_language_names, FixTruncatedLanguageNames, LanguageStore};
pub use registry::{load_registry, long_language_names, RegistryEntry};

/// Arbitrary key for the advisory lock serializing concurrent runners
const DATA_FIX_LOCK_KEY: i64 = 0x616d_795f_6669_78;

/// Rows touched by a data fix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub updated: usize,
    pub skipped: usize,
}

/// A one-time data rewrite applied after a given schema migration
#[async_trait]
pub trait DataFix: Send + Sync {
    /// Unique name recorded in `data_fix_history`
    fn name(&self) -> &str;

    /// Version of the schema migration this fix must run after
    fn required_schema_version(&self) -> i64;

    async fn apply(&self, conn: &mut PgConnection) -> Result<FixReport>;
}

/// Outcome of one registered fix during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FixOutcome {
    Applied(FixReport),
    AlreadyApplied,
}

/// Applies registered data fixes in dependency order
pub struct DataFixRunner {
    fixes: Vec<Box<dyn DataFix>>,
}

impl std::fmt::Debug for DataFixRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataFixRunner")
            .field("fixes", &self.names())
            .finish()
    }
}

impl Default for DataFixRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFixRunner {
    pub fn new() -> Self {
        Self { fixes: Vec::new() }
    }

    /// Runner with every data fix this application ships
    pub fn with_defaults(settings: &Settings) -> Self {
        Self::new().register(FixTruncatedLanguageNames::new(&settings.registry.path))
    }

    /// Add a fix, keeping fixes ordered by required schema version, then name
    pub fn register(mut self, fix: impl DataFix + 'static) -> Self {
        self.fixes.push(Box::new(fix));
        self.fixes.sort_by(|a, b| {
            a.required_schema_version()
                .cmp(&b.required_schema_version())
                .then_with(|| a.name().cmp(b.name()))
        });
        self
    }

    /// Registered fix names in the order they run
    pub fn names(&self) -> Vec<&str> {
        self.fixes.iter().map(|fix| fix.name()).collect()
    }

    /// Apply every fix not yet recorded in `data_fix_history`
    ///
    /// Each fix runs in its own transaction together with its history row, so
    /// a failing fix leaves neither data changes nor a history entry behind.
    pub async fn run(&self, pool: &PgPool) -> Result<Vec<(String, FixOutcome)>> {
        let schema_version = current_schema_version(pool).await?;
        let mut outcomes = Vec::with_capacity(self.fixes.len());

        for fix in &self.fixes {
            let name = fix.name();
            if fix.required_schema_version() > schema_version {
                return Err(AmyError::SchemaTooOld {
                    name: name.to_string(),
                    required_version: fix.required_schema_version(),
                    current_version: schema_version,
                });
            }

            let mut tx = pool.begin().await?;
            sqlx::query("SELECT pg_advisory_xact_lock($1)")
                .bind(DATA_FIX_LOCK_KEY)
                .execute(&mut *tx)
                .await?;

            if is_applied(&mut *tx, name).await? {
                tx.rollback().await?;
                logging::log_data_fix_skipped(name);
                outcomes.push((name.to_string(), FixOutcome::AlreadyApplied));
                continue;
            }

            let report = fix.apply(&mut *tx).await?;
            sqlx::query("INSERT INTO data_fix_history (name, applied_at) VALUES ($1, NOW())")
                .bind(name)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            logging::log_data_fix_applied(name, report.updated, report.skipped);
            outcomes.push((name.to_string(), FixOutcome::Applied(report)));
        }

        Ok(outcomes)
    }
}

/// Highest successfully applied schema migration, 0 on an empty database
pub async fn current_schema_version(pool: &PgPool) -> Result<i64> {
    let version: (Option<i64>,) = sqlx::query_as(
        "SELECT MAX(version) FROM _sqlx_migrations WHERE success"
    )
    .fetch_one(pool)
    .await?;

    Ok(version.0.unwrap_or(0))
}

async fn is_applied(conn: &mut PgConnection, name: &str) -> Result<bool> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM data_fix_history WHERE name = $1")
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;

    Ok(count.0 > 0)
}
