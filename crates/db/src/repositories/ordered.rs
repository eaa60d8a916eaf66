//! Generic ordered-collection repository.
//!
//! Hero slides, FAQs, gallery items, and content sections share one ordering
//! implementation instead of re-deriving the swap-two-sort-keys algorithm
//! per entity. An entity opts in by implementing [`OrderedRecord`]; the
//! entity repository keeps its own typed insert/update SQL and delegates
//! listing, lookup, deletion, and reordering here.

use std::marker::PhantomData;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use tourbase_core::ordering::{plan_swap, Direction, SortSlot, SwapOutcome};
use tourbase_core::types::DbId;

/// Ties a row type to its table and column list.
///
/// `COLUMNS` must include `id`, `sort_order`, `is_active`, `created_at`,
/// `updated_at` plus the entity's content fields, matching the `FromRow`
/// field order of the row struct.
pub trait OrderedRecord: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
}

/// Outcome of a reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Sort keys were exchanged with the neighbour.
    Moved,
    /// Boundary move; state untouched, still reported as success upstream.
    Unchanged,
    /// No row with the requested id.
    NotFound,
}

/// Row shape for the locked ordering snapshot inside a swap transaction.
#[derive(Debug, FromRow)]
struct SlotRow {
    id: DbId,
    sort_order: i32,
}

/// Zero-sized entry point; all methods take `&PgPool` like the entity repos.
pub struct OrderedCollection<T>(PhantomData<T>);

impl<T: OrderedRecord> OrderedCollection<T> {
    /// List all rows in display order: `sort_order` ascending with
    /// `created_at` descending as the tiebreak, so ties still produce a
    /// deterministic total order. Always a fresh query, never cached.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<T>, sqlx::Error> {
        let query = if active_only {
            format!(
                "SELECT {} FROM {} WHERE is_active = true \
                 ORDER BY sort_order, created_at DESC",
                T::COLUMNS,
                T::TABLE
            )
        } else {
            format!(
                "SELECT {} FROM {} ORDER BY sort_order, created_at DESC",
                T::COLUMNS,
                T::TABLE
            )
        };
        sqlx::query_as::<_, T>(&query).fetch_all(pool).await
    }

    /// Find a row by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<T>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
        sqlx::query_as::<_, T>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row. Returns `false` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move a row one step up or down in the display order.
    ///
    /// The whole operation runs in one transaction: the ordering snapshot is
    /// taken with `FOR UPDATE` (concurrent swaps on overlapping rows
    /// serialize on the row locks) and both key updates commit together, so
    /// a concurrent `list` never observes a half-applied swap.
    ///
    /// When the two rows tie on `sort_order`, the swap exchanges equal keys
    /// and the visible order (`created_at` DESC tiebreak) stays the same.
    /// The result is still `Moved`; keys only become distinct once a later
    /// update or explicit `sort_order` assignment separates them.
    pub async fn move_record(
        pool: &PgPool,
        id: DbId,
        direction: Direction,
    ) -> Result<MoveResult, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let snapshot_query = format!(
            "SELECT id, sort_order FROM {} \
             ORDER BY sort_order, created_at DESC \
             FOR UPDATE",
            T::TABLE
        );
        let slots: Vec<SortSlot> = sqlx::query_as::<_, SlotRow>(&snapshot_query)
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .map(|row| SortSlot {
                id: row.id,
                sort_order: row.sort_order,
            })
            .collect();

        match plan_swap(&slots, id, direction) {
            SwapOutcome::NotFound => {
                tx.rollback().await?;
                Ok(MoveResult::NotFound)
            }
            SwapOutcome::Boundary => {
                // No writes to commit.
                tx.rollback().await?;
                Ok(MoveResult::Unchanged)
            }
            SwapOutcome::Swap(plan) => {
                let update_query =
                    format!("UPDATE {} SET sort_order = $2 WHERE id = $1", T::TABLE);
                sqlx::query(&update_query)
                    .bind(plan.moved.0)
                    .bind(plan.moved.1)
                    .execute(&mut *tx)
                    .await?;
                sqlx::query(&update_query)
                    .bind(plan.neighbour.0)
                    .bind(plan.neighbour.1)
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
                Ok(MoveResult::Moved)
            }
        }
    }
}
