//! Repository for the `hero_slides` table.

use sqlx::PgPool;
use tourbase_core::ordering::Direction;
use tourbase_core::types::DbId;

use crate::models::hero_slide::{CreateHeroSlide, HeroSlide, UpdateHeroSlide};
use crate::repositories::ordered::{MoveResult, OrderedCollection, OrderedRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, subtitle, image_path, cta_label, cta_url, \
    sort_order, is_active, created_at, updated_at";

impl OrderedRecord for HeroSlide {
    const TABLE: &'static str = "hero_slides";
    const COLUMNS: &'static str = COLUMNS;
}

/// Provides CRUD and reordering operations for hero slides.
pub struct HeroSlideRepo;

impl HeroSlideRepo {
    /// Insert a new hero slide, returning the created row.
    ///
    /// When no explicit `sort_order` is supplied the slide is appended:
    /// one past the current maximum, or 0 for an empty table.
    pub async fn create(pool: &PgPool, input: &CreateHeroSlide) -> Result<HeroSlide, sqlx::Error> {
        let query = format!(
            "INSERT INTO hero_slides \
                (title, subtitle, image_path, cta_label, cta_url, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, \
                COALESCE($6, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM hero_slides)), \
                COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_path)
            .bind(&input.cta_label)
            .bind(&input.cta_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// List slides in display order, optionally active-only.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<HeroSlide>, sqlx::Error> {
        OrderedCollection::<HeroSlide>::list(pool, active_only).await
    }

    /// Find a slide by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HeroSlide>, sqlx::Error> {
        OrderedCollection::<HeroSlide>::find_by_id(pool, id).await
    }

    /// Update a slide. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHeroSlide,
    ) -> Result<Option<HeroSlide>, sqlx::Error> {
        let query = format!(
            "UPDATE hero_slides SET \
                title = COALESCE($2, title), \
                subtitle = COALESCE($3, subtitle), \
                image_path = COALESCE($4, image_path), \
                cta_label = COALESCE($5, cta_label), \
                cta_url = COALESCE($6, cta_url), \
                sort_order = COALESCE($7, sort_order), \
                is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HeroSlide>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_path)
            .bind(&input.cta_label)
            .bind(&input.cta_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide. Returns `false` if already absent.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        OrderedCollection::<HeroSlide>::delete(pool, id).await
    }

    /// Swap the slide with its neighbour in the given direction.
    pub async fn move_record(
        pool: &PgPool,
        id: DbId,
        direction: Direction,
    ) -> Result<MoveResult, sqlx::Error> {
        OrderedCollection::<HeroSlide>::move_record(pool, id, direction).await
    }
}
