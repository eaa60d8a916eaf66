//! Repository for the `faqs` table.

use sqlx::PgPool;
use tourbase_core::ordering::Direction;
use tourbase_core::types::DbId;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};
use crate::repositories::ordered::{MoveResult, OrderedCollection, OrderedRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, sort_order, is_active, created_at, updated_at";

impl OrderedRecord for Faq {
    const TABLE: &'static str = "faqs";
    const COLUMNS: &'static str = COLUMNS;
}

/// Provides CRUD and reordering operations for FAQs.
pub struct FaqRepo;

impl FaqRepo {
    /// Insert a new FAQ, appending at the end of the order unless an
    /// explicit `sort_order` is supplied.
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question, answer, sort_order, is_active) \
             VALUES ($1, $2, \
                COALESCE($3, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM faqs)), \
                COALESCE($4, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List FAQs in display order, optionally active-only.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<Faq>, sqlx::Error> {
        OrderedCollection::<Faq>::list(pool, active_only).await
    }

    /// Find an FAQ by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        OrderedCollection::<Faq>::find_by_id(pool, id).await
    }

    /// Update an FAQ. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET \
                question = COALESCE($2, question), \
                answer = COALESCE($3, answer), \
                sort_order = COALESCE($4, sort_order), \
                is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an FAQ. Returns `false` if already absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        OrderedCollection::<Faq>::delete(pool, id).await
    }

    /// Swap the FAQ with its neighbour in the given direction.
    pub async fn move_record(
        pool: &PgPool,
        id: DbId,
        direction: Direction,
    ) -> Result<MoveResult, sqlx::Error> {
        OrderedCollection::<Faq>::move_record(pool, id, direction).await
    }
}
