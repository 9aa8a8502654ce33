//! Named id sequences.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use tracing::debug;

use estudiantes_core::student::{IdSequence, StudentError};

/// Increment-and-read in one statement, creating the counter on first use.
const NEXT_VALUE_SQL: &str = r"
INSERT INTO sequences (name, value) VALUES ($1, 1)
ON CONFLICT (name) DO UPDATE SET value = sequences.value + 1
RETURNING value
";

#[derive(Debug, FromQueryResult)]
struct SequenceValue {
    value: i64,
}

/// Sequence repository backed by the `sequences` table.
#[derive(Debug)]
pub struct SequenceRepository {
    db: Arc<DatabaseConnection>,
}

impl SequenceRepository {
    /// Creates a new sequence repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl IdSequence for SequenceRepository {
    async fn next_value(&self, name: &str) -> Result<i64, StudentError> {
        let stmt =
            Statement::from_sql_and_values(DbBackend::Postgres, NEXT_VALUE_SQL, [name.into()]);

        let row = SequenceValue::find_by_statement(stmt)
            .one(self.db.as_ref())
            .await
            .map_err(|e| StudentError::repository(e.to_string()))?
            .ok_or_else(|| StudentError::repository(format!("sequence '{name}' returned no row")))?;

        debug!(sequence = name, value = row.value, "Sequence advanced");
        Ok(row.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Transaction, Value};

    fn value_row(value: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("value", Value::BigInt(Some(value)))])
    }

    #[tokio::test]
    async fn test_next_value_returns_counter() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![value_row(7)]])
                .into_connection(),
        );
        let repo = SequenceRepository::new(db.clone());

        assert_eq!(repo.next_value("estudiantes").await.unwrap(), 7);

        drop(repo);
        let db = Arc::try_unwrap(db).ok().expect("repository dropped");
        assert_eq!(
            db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                NEXT_VALUE_SQL,
                ["estudiantes".into()],
            )]
        );
    }

    #[tokio::test]
    async fn test_next_value_without_row_is_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&'static str, Value>>::new()])
            .into_connection();
        let repo = SequenceRepository::new(Arc::new(db));

        let err = repo.next_value("estudiantes").await.unwrap_err();
        assert!(matches!(err, StudentError::Repository(_)));
    }
}
