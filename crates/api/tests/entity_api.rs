//! HTTP-level integration tests for the content resources: hero slides
//! CRUD, tour packages (slug uniqueness, featured filter, public slug
//! lookup), testimonials (rating bounds), and site settings.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, get, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Hero slide CRUD
// ---------------------------------------------------------------------------

/// Full lifecycle: create, read, partial update, delete.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_hero_slide_crud(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/hero-slides",
        &token,
        serde_json::json!({
            "title": "Discover Komodo",
            "subtitle": "Three days at sea",
            "cta_label": "Book now",
            "cta_url": "/packages/komodo"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["title"], "Discover Komodo");
    assert_eq!(created["data"]["sort_order"], 0);
    assert_eq!(created["data"]["is_active"], true);

    let response = get_auth(app.clone(), &format!("/api/v1/admin/hero-slides/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update: only the subtitle changes; everything else stays.
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/hero-slides/{id}"),
        &token,
        serde_json::json!({ "subtitle": "Four days at sea" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["data"]["subtitle"], "Four days at sea");
    assert_eq!(updated["data"]["title"], "Discover Komodo");
    assert_eq!(updated["data"]["cta_label"], "Book now");

    let response =
        common::delete_auth(app.clone(), &format!("/api/v1/admin/hero-slides/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/admin/hero-slides/{id}"), &token).await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

/// An empty title is rejected and nothing is persisted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_hero_slide_empty_title_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/hero-slides",
        &token,
        serde_json::json!({ "title": "   " }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let response = get_auth(app, "/api/v1/admin/hero-slides", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// Clearing a title through update is rejected the same way.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_hero_slide_update_empty_title_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/hero-slides",
        &token,
        serde_json::json!({ "title": "Valid" }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/hero-slides/{id}"),
        &token,
        serde_json::json!({ "title": "" }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

/// Deleting a record removes its uploaded image from disk; a missing
/// file never blocks or fails the delete.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_cleans_up_image_best_effort(pool: PgPool) {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let mut config = common::test_config();
    config.upload_dir = dir.path().to_path_buf();
    let app = common::build_test_app_with_config(pool, config);
    let token = common::auth_token();

    // An image that really exists on disk is removed with the record.
    std::fs::write(dir.path().join("slide.png"), b"png-bytes").expect("write should succeed");
    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/hero-slides",
        &token,
        serde_json::json!({ "title": "With image", "image_path": "/uploads/slide.png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response =
        common::delete_auth(app.clone(), &format!("/api/v1/admin/hero-slides/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(
        !dir.path().join("slide.png").exists(),
        "deleting the record must remove its image"
    );

    // A dangling image path must not block the delete.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/hero-slides",
        &token,
        serde_json::json!({ "title": "Dangling", "image_path": "/uploads/ghost.png" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response =
        common::delete_auth(app.clone(), &format!("/api/v1/admin/hero-slides/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/admin/hero-slides/{id}"), &token).await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

/// Deleting an id that does not exist is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_unknown_id_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = common::delete_auth(app, "/api/v1/admin/hero-slides/4242", &token).await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

/// Deactivated records stay in the admin listing but drop out of the
/// public one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_hidden_from_public(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    for title in ["Visible", "Hidden"] {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/admin/hero-slides",
            &token,
            serde_json::json!({ "title": title }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listing = body_json(get_auth(app.clone(), "/api/v1/admin/hero-slides", &token).await).await;
    let hidden_id = listing["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["title"] == "Hidden")
        .and_then(|r| r["id"].as_i64())
        .unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/admin/hero-slides/{hidden_id}"),
        &token,
        serde_json::json!({ "is_active": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let public = body_json(get(app.clone(), "/api/v1/public/hero-slides").await).await;
    let titles: Vec<&str> = public["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Visible"]);

    let admin = body_json(get_auth(app, "/api/v1/admin/hero-slides", &token).await).await;
    assert_eq!(admin["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Tour packages
// ---------------------------------------------------------------------------

/// Two packages cannot share a slug.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_package_duplicate_slug_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let body = serde_json::json!({ "title": "Komodo Cruise", "slug": "komodo-cruise" });
    let response = post_json_auth(app.clone(), "/api/v1/admin/packages", &token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app, "/api/v1/admin/packages", &token, body).await;
    assert_error(response, StatusCode::CONFLICT, "CONFLICT").await;
}

/// Structured fields survive the round trip as real JSON, not strings.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_package_structured_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = post_json_auth(
        app,
        "/api/v1/admin/packages",
        &token,
        serde_json::json!({
            "title": "Komodo Cruise",
            "slug": "komodo-cruise",
            "price_cents": 1250000i64,
            "highlights": ["Snorkelling", "Pink beach"],
            "itinerary": [
                { "day": 1, "title": "Departure" },
                { "day": 2, "title": "Komodo island", "detail": "Dragon trek" }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["highlights"][1], "Pink beach");
    assert_eq!(json["data"]["itinerary"][1]["day"], 2);
    assert_eq!(json["data"]["itinerary"][1]["detail"], "Dragon trek");
    assert_eq!(json["data"]["price_cents"], 1250000);
}

/// The public listing filters to active packages and honours `?featured=true`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_package_public_listing_and_featured_filter(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    for (title, slug, featured, active) in [
        ("Featured trip", "featured-trip", true, true),
        ("Plain trip", "plain-trip", false, true),
        ("Retired trip", "retired-trip", false, false),
    ] {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/admin/packages",
            &token,
            serde_json::json!({
                "title": title,
                "slug": slug,
                "is_featured": featured,
                "is_active": active
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all = body_json(get(app.clone(), "/api/v1/public/packages").await).await;
    let slugs: Vec<&str> = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs.len(), 2);
    assert!(!slugs.contains(&"retired-trip"));
    assert_eq!(slugs[0], "featured-trip", "featured packages list first");

    let featured = body_json(get(app, "/api/v1/public/packages?featured=true").await).await;
    let slugs: Vec<&str> = featured["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["featured-trip"]);
}

/// Public slug lookup returns the package, but not when it is inactive.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_package_public_slug_lookup(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    for (slug, active) in [("live-trip", true), ("retired-trip", false)] {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/admin/packages",
            &token,
            serde_json::json!({ "title": slug, "slug": slug, "is_active": active }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.clone(), "/api/v1/public/packages/live-trip").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["slug"], "live-trip");

    let response = get(app.clone(), "/api/v1/public/packages/retired-trip").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;

    let response = get(app, "/api/v1/public/packages/no-such-trip").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

/// A malformed slug on create is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_package_bad_slug_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = post_json_auth(
        app,
        "/api/v1/admin/packages",
        &token,
        serde_json::json!({ "title": "Trip", "slug": "Not A Slug!" }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

/// Ratings outside 1..=5 are rejected on create and update.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_testimonial_rating_bounds(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/testimonials",
        &token,
        serde_json::json!({ "author_name": "Ava", "quote": "Great!", "rating": 6 }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/testimonials",
        &token,
        serde_json::json!({ "author_name": "Ava", "quote": "Great!", "rating": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/testimonials/{id}"),
        &token,
        serde_json::json!({ "rating": 0 }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

/// Omitted rating defaults to 5.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_testimonial_rating_defaults_to_five(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = post_json_auth(
        app,
        "/api/v1/admin/testimonials",
        &token,
        serde_json::json!({ "author_name": "Ben", "quote": "Lovely." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["rating"], 5);
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

/// The settings row is seeded by the migrations and can be partially
/// updated.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_settings_seeded_and_updatable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = get_auth(app.clone(), "/api/v1/admin/settings", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["site_name"], "Tourbase");

    let response = put_json_auth(
        app.clone(),
        "/api/v1/admin/settings",
        &token,
        serde_json::json!({
            "tagline": "See the archipelago",
            "social_links": { "instagram": "https://instagram.com/tourbase" }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["site_name"], "Tourbase");
    assert_eq!(json["data"]["tagline"], "See the archipelago");
    assert_eq!(
        json["data"]["social_links"]["instagram"],
        "https://instagram.com/tourbase"
    );

    // The public mirror reflects the change without a token.
    let public = body_json(get(app, "/api/v1/public/settings").await).await;
    assert_eq!(public["data"]["tagline"], "See the archipelago");
}

/// Blanking the site name is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_settings_empty_site_name_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::auth_token();

    let response = put_json_auth(
        app,
        "/api/v1/admin/settings",
        &token,
        serde_json::json!({ "site_name": "" }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}
