//! Repository for the `content_sections` table.

use sqlx::PgPool;
use tourbase_core::ordering::Direction;
use tourbase_core::types::DbId;

use crate::models::content_section::{ContentSection, CreateContentSection, UpdateContentSection};
use crate::repositories::ordered::{MoveResult, OrderedCollection, OrderedRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, slug, title, body, image_path, sort_order, is_active, created_at, updated_at";

impl OrderedRecord for ContentSection {
    const TABLE: &'static str = "content_sections";
    const COLUMNS: &'static str = COLUMNS;
}

/// Provides CRUD and reordering operations for content sections.
pub struct ContentSectionRepo;

impl ContentSectionRepo {
    /// Insert a new content section, appending at the end of the order
    /// unless an explicit `sort_order` is supplied.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContentSection,
    ) -> Result<ContentSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_sections (slug, title, body, image_path, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, \
                COALESCE($5, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM content_sections)), \
                COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentSection>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.image_path)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List content sections in display order, optionally active-only.
    pub async fn list(
        pool: &PgPool,
        active_only: bool,
    ) -> Result<Vec<ContentSection>, sqlx::Error> {
        OrderedCollection::<ContentSection>::list(pool, active_only).await
    }

    /// Find a content section by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContentSection>, sqlx::Error> {
        OrderedCollection::<ContentSection>::find_by_id(pool, id).await
    }

    /// Update a content section. Only non-`None` fields are applied; slug
    /// is immutable.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContentSection,
    ) -> Result<Option<ContentSection>, sqlx::Error> {
        let query = format!(
            "UPDATE content_sections SET \
                title = COALESCE($2, title), \
                body = COALESCE($3, body), \
                image_path = COALESCE($4, image_path), \
                sort_order = COALESCE($5, sort_order), \
                is_active = COALESCE($6, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentSection>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.image_path)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a content section. Returns `false` if already absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        OrderedCollection::<ContentSection>::delete(pool, id).await
    }

    /// Swap the section with its neighbour in the given direction.
    pub async fn move_record(
        pool: &PgPool,
        id: DbId,
        direction: Direction,
    ) -> Result<MoveResult, sqlx::Error> {
        OrderedCollection::<ContentSection>::move_record(pool, id, direction).await
    }
}
