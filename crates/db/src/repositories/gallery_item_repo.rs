//! Repository for the `gallery_items` table.

use sqlx::PgPool;
use tourbase_core::ordering::Direction;
use tourbase_core::types::DbId;

use crate::models::gallery_item::{CreateGalleryItem, GalleryItem, UpdateGalleryItem};
use crate::repositories::ordered::{MoveResult, OrderedCollection, OrderedRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, image_path, sort_order, is_active, created_at, updated_at";

impl OrderedRecord for GalleryItem {
    const TABLE: &'static str = "gallery_items";
    const COLUMNS: &'static str = COLUMNS;
}

/// Provides CRUD and reordering operations for gallery items.
pub struct GalleryItemRepo;

impl GalleryItemRepo {
    /// Insert a new gallery item, appending at the end of the order unless
    /// an explicit `sort_order` is supplied.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGalleryItem,
    ) -> Result<GalleryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_items (title, image_path, sort_order, is_active) \
             VALUES ($1, $2, \
                COALESCE($3, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM gallery_items)), \
                COALESCE($4, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(&input.title)
            .bind(&input.image_path)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List gallery items in display order, optionally active-only.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<GalleryItem>, sqlx::Error> {
        OrderedCollection::<GalleryItem>::list(pool, active_only).await
    }

    /// Find a gallery item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryItem>, sqlx::Error> {
        OrderedCollection::<GalleryItem>::find_by_id(pool, id).await
    }

    /// Update a gallery item. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGalleryItem,
    ) -> Result<Option<GalleryItem>, sqlx::Error> {
        let query = format!(
            "UPDATE gallery_items SET \
                title = COALESCE($2, title), \
                image_path = COALESCE($3, image_path), \
                sort_order = COALESCE($4, sort_order), \
                is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image_path)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gallery item. Returns `false` if already absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        OrderedCollection::<GalleryItem>::delete(pool, id).await
    }

    /// Swap the item with its neighbour in the given direction.
    pub async fn move_record(
        pool: &PgPool,
        id: DbId,
        direction: Direction,
    ) -> Result<MoveResult, sqlx::Error> {
        OrderedCollection::<GalleryItem>::move_record(pool, id, direction).await
    }
}
