//! Thin wrappers so lifecycle changes spanning several rows (approving a
//! request, allocating stock, promoting a volunteer) share one error path.

use crate::error::AppError;
use sqlx::postgres::PgTransaction;
use sqlx::PgPool;

fn tx_error(action: &str, err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, "failed to {} transaction", action);
    AppError::InternalServerError(err.into())
}

pub async fn begin_transaction(db: &PgPool) -> Result<PgTransaction<'_>, AppError> {
    db.begin().await.map_err(|err| tx_error("begin", err))
}

/// Commits the transaction. Dropping a transaction without calling this rolls it back.
pub async fn commit_transaction(tx: PgTransaction<'_>) -> Result<(), AppError> {
    tx.commit().await.map_err(|err| tx_error("commit", err))
}

/// Rolls back explicitly, used when a conditional update matched no row.
pub async fn rollback_transaction(tx: PgTransaction<'_>) -> Result<(), AppError> {
    tx.rollback().await.map_err(|err| tx_error("roll back", err))
}
