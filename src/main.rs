use std::sync::Arc;

use membership_manager::{
    app_state::AppState,
    get_sqlite_pool,
    services::{data_stores::SqliteMemberStore, PdfCardRenderer},
    utils::{
        constants::{prod, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};
use sqlx::SqlitePool;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialise tracing");

    let pool = configure_sqlite().await;
    let member_store = Arc::new(RwLock::new(SqliteMemberStore::new(pool)));
    let card_renderer = Arc::new(PdfCardRenderer);

    let app_state = AppState::new(member_store, card_renderer);

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

async fn configure_sqlite() -> SqlitePool {
    let pool = get_sqlite_pool(&DATABASE_URL)
        .await
        .expect("Failed to create SQLite connection pool");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to migrate the database");

    pool
}
