//! One-shot tool that creates the initial admin account.
//!
//! Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD` from the environment (or a
//! `.env` file), hashes the password, and inserts the account. Running
//! it again with the same email is a no-op, so it is safe to call on
//! every deploy.

use tourbase_api::auth::password::hash_password;
use tourbase_db::models::admin_user::CreateAdminUser;
use tourbase_db::repositories::AdminUserRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
    let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = tourbase_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    tourbase_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if let Some(existing) = AdminUserRepo::find_by_email(&pool, &email)
        .await
        .expect("Failed to query admin users")
    {
        tracing::info!(email = %existing.email, "Admin account already exists, nothing to do");
        return;
    }

    let password_hash = hash_password(&password).expect("Failed to hash password");

    let user = AdminUserRepo::create(
        &pool,
        &CreateAdminUser {
            email,
            password_hash,
            role: "admin".into(),
        },
    )
    .await
    .expect("Failed to create admin account");

    tracing::info!(email = %user.email, "Admin account created");
}
