use std::env;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::Config;
use dotenvy::dotenv;

use appetizr_products::auth::JwtVerifier;
use appetizr_products::db::{establish_connection_pool, run_pending_migrations};
use appetizr_products::models::config::ServerConfig;
use appetizr_products::repository::DieselRepository;
use appetizr_products::routes::{configure, cors};
use appetizr_products::storage::{ObjectStore, S3ObjectStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors_allowed_origins"),
        )
        .build();

    let server_config = match settings.and_then(|s| s.try_deserialize::<ServerConfig>()) {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server_config.validate() {
        log::error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = run_pending_migrations(&mut conn) {
                log::error!("Failed to run database migrations: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    let store: Arc<dyn ObjectStore> = Arc::new(
        S3ObjectStore::new(
            server_config.s3_bucket.clone(),
            server_config.s3_region.clone(),
            server_config.s3_endpoint.clone(),
            server_config.s3_force_path_style,
        )
        .await,
    );
    let store = web::Data::from(store);

    let verifier = JwtVerifier::from_config(&server_config);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting products service on {}:{} (create guard {:?}, delete policy {:?})",
        bind_address.0,
        bind_address.1,
        server_config.create_guard,
        server_config.delete_policy
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&server_config.cors_allowed_origins))
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(store.clone())
            .app_data(web::Data::new(verifier.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
