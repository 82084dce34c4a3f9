//! VetDesk Server — veterinary-clinic management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use vetdesk_auth::jwt::{JwtDecoder, JwtEncoder};
use vetdesk_auth::password::PasswordHasher;
use vetdesk_auth::rbac::RbacEnforcer;
use vetdesk_core::config::AppConfig;
use vetdesk_core::error::{AppError, ErrorKind};
use vetdesk_entity::user::Role;
use vetdesk_service::appointment::AppointmentService;
use vetdesk_service::auth::AuthService;
use vetdesk_service::pet::PetService;
use vetdesk_service::user::{CreateUser, UserService};
use vetdesk_store::{MemoryAppointmentStore, MemoryPetStore, MemoryUserStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
///
/// `JWT_SECRET` wins over any file-provided secret. The signing secret is
/// threaded into the encoder/decoder from here; nothing deeper in the call
/// graph reads the process environment. A missing secret is fatal.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("VETDESK_ENV").unwrap_or_else(|_| "development".to_string());

    let mut config = AppConfig::load(&env)?;

    if let Ok(secret) = std::env::var("JWT_SECRET") {
        config.auth.jwt_secret = secret;
    }

    config.auth.validate()?;

    Ok(config)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VetDesk v{}", env!("CARGO_PKG_VERSION"));

    let config = Arc::new(config);

    // Stores (in-memory backend)
    let user_store = Arc::new(MemoryUserStore::new());
    let pet_store = Arc::new(MemoryPetStore::new());
    let appointment_store = Arc::new(MemoryAppointmentStore::new());

    // Auth
    let hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let rbac = Arc::new(RbacEnforcer::new());

    // Services
    let auth_service = Arc::new(AuthService::new(
        user_store.clone(),
        hasher.clone(),
        jwt_encoder,
    ));
    let user_service = Arc::new(UserService::new(user_store, hasher));
    let pet_service = Arc::new(PetService::new(pet_store));
    let appointment_service = Arc::new(AppointmentService::new(appointment_store));

    seed_bootstrap_admin(&config, &user_service).await?;

    let state = vetdesk_api::state::AppState {
        config: config.clone(),
        jwt_decoder,
        rbac,
        auth_service,
        user_service,
        pet_service,
        appointment_service,
    };

    let app = vetdesk_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("VetDesk server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("VetDesk server shut down gracefully");
    Ok(())
}

/// Seed the configured first-admin account so a fresh deployment can log in.
async fn seed_bootstrap_admin(
    config: &AppConfig,
    user_service: &UserService,
) -> Result<(), AppError> {
    let Some(bootstrap) = &config.bootstrap else {
        return Ok(());
    };

    let result = user_service
        .create(CreateUser {
            name: bootstrap.name.clone(),
            lastname: bootstrap.lastname.clone(),
            email: bootstrap.email.clone(),
            address: bootstrap.address.clone(),
            phone: bootstrap.phone,
            roles: vec![Role::Admin],
            password: bootstrap.password.clone(),
        })
        .await;

    match result {
        Ok(user) => {
            tracing::info!(email = %user.email, "Bootstrap admin seeded");
            Ok(())
        }
        Err(err) if err.kind == ErrorKind::Conflict => Ok(()),
        Err(err) => Err(err),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
