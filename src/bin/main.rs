use std::{env, fs};

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use ticketdesk_server::{config::Config, state::AppState, store::DbConnRecordStore, time::CoreTimeProvider, users::{self, StoreUserService}};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    dotenvy::dotenv().ok();

    let config = serde_json::from_str::<Config>(&fs::read_to_string("config.json")?)?;

    let db_con_str = env::var("DATABASE_URL")?;
    let mut db_options = ConnectOptions::new(db_con_str);
    db_options.sqlx_logging(config.db_logging);
    let db = Database::connect(db_options).await?;

    let time_provider = CoreTimeProvider::new_dyn();
    let store = DbConnRecordStore::new_dyn(db, time_provider);
    let user_svc = StoreUserService::new_dyn(store);
    let app_state = AppState { user_svc };

    let app = Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .nest("/users", users::routes::routes(app_state))
        )
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    log::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
