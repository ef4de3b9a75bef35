//! Repair of truncated language names
//!
//! Languages were first imported into a 40-character `name` column, which cut
//! long English descriptions short. Once the column was widened, every stored
//! name equal to the 40-character prefix of a long registry name is replaced
//! by the full name.

use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::PgConnection;

use super::registry::{load_registry, long_language_names, RegistryEntry};
use super::{DataFix, FixReport};
use crate::models::language::PREVIOUS_NAME_MAX_LENGTH;
use crate::models::Language;
use crate::utils::errors::{AmyError, Result};
use crate::utils::helpers::truncate_chars;

pub const FIX_NAME: &str = "0002_fix_truncated_language_names";

/// Schema migration that widened `languages.name` to 100 characters
pub const REQUIRED_SCHEMA_VERSION: i64 = 2;

/// Storage the fix reads and rewrites languages through
#[async_trait]
pub trait LanguageStore: Send {
    async fn find_languages_named(&mut self, name: &str) -> Result<Vec<Language>>;

    async fn rename_language(&mut self, id: i64, name: &str) -> Result<()>;
}

#[async_trait]
impl LanguageStore for PgConnection {
    async fn find_languages_named(&mut self, name: &str) -> Result<Vec<Language>> {
        let languages = sqlx::query_as::<_, Language>(
            "SELECT id, subtag, name FROM languages WHERE name = $1 ORDER BY id"
        )
        .bind(name)
        .fetch_all(&mut *self)
        .await?;

        Ok(languages)
    }

    async fn rename_language(&mut self, id: i64, name: &str) -> Result<()> {
        sqlx::query("UPDATE languages SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(&mut *self)
            .await?;

        Ok(())
    }
}

/// Restore full names of languages whose stored name is a truncated prefix
///
/// Names without a matching row are skipped: the row was either never
/// imported or already repaired. Two rows sharing the truncated name make the
/// fix fail, since there is no way to tell which one the name belongs to.
pub async fn fix_truncated_language_names<S>(store: &mut S, entries: &[RegistryEntry]) -> Result<FixReport>
where
    S: LanguageStore + ?Sized,
{
    let mut report = FixReport::default();

    for full_name in long_language_names(entries) {
        let truncated = truncate_chars(&full_name, PREVIOUS_NAME_MAX_LENGTH);

        let matches = store.find_languages_named(truncated).await?;
        match matches.as_slice() {
            [] => report.skipped += 1,
            [language] => {
                store.rename_language(language.id, &full_name).await?;
                report.updated += 1;
            }
            _ => {
                return Err(AmyError::DataFix {
                    name: FIX_NAME.to_string(),
                    reason: format!("{} languages are named {:?}", matches.len(), truncated),
                });
            }
        }
    }

    Ok(report)
}

/// The language-name repair as a registered data fix
#[derive(Debug, Clone)]
pub struct FixTruncatedLanguageNames {
    registry_path: PathBuf,
}

impl FixTruncatedLanguageNames {
    pub fn new(registry_path: impl Into<PathBuf>) -> Self {
        Self { registry_path: registry_path.into() }
    }
}

#[async_trait]
impl DataFix for FixTruncatedLanguageNames {
    fn name(&self) -> &str {
        FIX_NAME
    }

    fn required_schema_version(&self) -> i64 {
        REQUIRED_SCHEMA_VERSION
    }

    async fn apply(&self, conn: &mut PgConnection) -> Result<FixReport> {
        let entries = load_registry(&self.registry_path).await?;
        fix_truncated_language_names(conn, &entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    /// Languages held in memory, looked up by exact name
    #[derive(Debug, Clone, Default)]
    struct MemoryLanguages {
        rows: Vec<Language>,
    }

    impl MemoryLanguages {
        fn with_names(names: &[&str]) -> Self {
            let rows = names
                .iter()
                .enumerate()
                .map(|(index, name)| Language {
                    id: index as i64 + 1,
                    subtag: format!("x{}", index),
                    name: name.to_string(),
                })
                .collect();
            Self { rows }
        }

        fn names(&self) -> Vec<&str> {
            self.rows.iter().map(|row| row.name.as_str()).collect()
        }
    }

    #[async_trait]
    impl LanguageStore for MemoryLanguages {
        async fn find_languages_named(&mut self, name: &str) -> Result<Vec<Language>> {
            Ok(self.rows.iter().filter(|row| row.name == name).cloned().collect())
        }

        async fn rename_language(&mut self, id: i64, name: &str) -> Result<()> {
            if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
                row.name = name.to_string();
            }
            Ok(())
        }
    }

    const CHURCH_SLAVIC: &str = "Church Slavic Church Slavonic Old Bulgarian Old Church Slavonic Old Slavonic";
    const INTERLINGUA: &str = "Interlingua (International Auxiliary Language Association)";

    fn language(subtag: &str, description: &[&str]) -> RegistryEntry {
        RegistryEntry {
            subtag: subtag.to_string(),
            kind: "language".to_string(),
            description: description.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn registry() -> Vec<RegistryEntry> {
        vec![
            language("cu", &["Church Slavic", "Church Slavonic", "Old Bulgarian", "Old Church Slavonic", "Old Slavonic"]),
            language("ia", &[INTERLINGUA]),
            language("en", &["English"]),
        ]
    }

    #[tokio::test]
    async fn test_restores_truncated_names() {
        let mut store = MemoryLanguages::with_names(&[
            truncate_chars(CHURCH_SLAVIC, 40),
            truncate_chars(INTERLINGUA, 40),
            "English",
        ]);

        let report = fix_truncated_language_names(&mut store, &registry()).await.unwrap();

        assert_eq!(report, FixReport { updated: 2, skipped: 0 });
        assert_eq!(store.names(), vec![CHURCH_SLAVIC, INTERLINGUA, "English"]);
    }

    #[tokio::test]
    async fn test_missing_rows_are_skipped() {
        let mut store = MemoryLanguages::with_names(&["English"]);

        let report = fix_truncated_language_names(&mut store, &registry()).await.unwrap();

        assert_eq!(report, FixReport { updated: 0, skipped: 2 });
        assert_eq!(store.names(), vec!["English"]);
    }

    #[tokio::test]
    async fn test_second_run_changes_nothing() {
        let mut store = MemoryLanguages::with_names(&[truncate_chars(INTERLINGUA, 40)]);

        let first = fix_truncated_language_names(&mut store, &registry()).await.unwrap();
        let after_first = store.clone();
        let second = fix_truncated_language_names(&mut store, &registry()).await.unwrap();

        assert_eq!(first.updated, 1);
        assert_eq!(second, FixReport { updated: 0, skipped: 2 });
        assert_eq!(store.rows, after_first.rows);
    }

    #[tokio::test]
    async fn test_ambiguous_rows_fail() {
        let truncated = truncate_chars(INTERLINGUA, 40);
        let mut store = MemoryLanguages::with_names(&[truncated, truncated]);

        let err = fix_truncated_language_names(&mut store, &registry()).await.unwrap_err();
        assert_matches!(err, AmyError::DataFix { ref name, .. } if name == FIX_NAME);
    }

    #[tokio::test]
    async fn test_name_already_full_length_is_untouched() {
        let mut store = MemoryLanguages::with_names(&[INTERLINGUA]);

        let report = fix_truncated_language_names(&mut store, &registry()).await.unwrap();

        assert_eq!(report.updated, 0);
        assert_eq!(store.names(), vec![INTERLINGUA]);
    }

    fn long_name() -> impl Strategy<Value = String> {
        "[A-Za-z ()]{41,70}"
    }

    proptest! {
        #[test]
        fn prop_no_truncated_prefix_survives_and_rerun_is_noop(
            names in proptest::collection::btree_set(long_name(), 1..6),
            stored in proptest::collection::vec(any::<bool>(), 6),
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let entries: Vec<RegistryEntry> = names
                .iter()
                .enumerate()
                .map(|(i, name)| language(&format!("{:02}", i), &[name.as_str()]))
                .collect();

            // Distinct names may still share a 40-character prefix; keep one
            // stored row per prefix so lookups stay unambiguous.
            let mut prefixes: Vec<&str> = Vec::new();
            for (name, keep) in names.iter().zip(stored.iter()) {
                let prefix = truncate_chars(name, 40);
                if *keep && !prefixes.contains(&prefix) {
                    prefixes.push(prefix);
                }
            }
            let mut store = MemoryLanguages::with_names(&prefixes);

            let report = tokio_test::block_on(fix_truncated_language_names(&mut store, &entries)).unwrap();
            prop_assert_eq!(report.updated, prefixes.len());
            for name in &names {
                prop_assert!(!store.names().contains(&truncate_chars(name, 40)));
            }

            let once = store.clone();
            let rerun = tokio_test::block_on(fix_truncated_language_names(&mut store, &entries)).unwrap();
            prop_assert_eq!(rerun.updated, 0);
            prop_assert_eq!(store.rows, once.rows);
        }
    }
}
