//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use vetdesk_auth::jwt::{JwtDecoder, JwtEncoder};
use vetdesk_auth::password::PasswordHasher;
use vetdesk_auth::rbac::RbacEnforcer;
use vetdesk_core::config::auth::AuthConfig;
use vetdesk_core::config::{AppConfig, ServerConfig};
use vetdesk_entity::user::Role;
use vetdesk_service::appointment::AppointmentService;
use vetdesk_service::auth::AuthService;
use vetdesk_service::pet::PetService;
use vetdesk_service::user::{CreateUser, UserService};
use vetdesk_store::{MemoryAppointmentStore, MemoryPetStore, MemoryUserStore};

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// User service, for seeding accounts directly.
    pub user_service: Arc<UserService>,
}

/// A collected response: status plus parsed JSON body.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed body (`Null` when empty or not JSON).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over empty in-memory stores.
    pub fn new() -> Self {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            auth: AuthConfig {
                jwt_secret: TEST_SECRET.to_string(),
                token_ttl_secs: 3600,
            },
            logging: Default::default(),
            bootstrap: None,
        };

        let user_store = Arc::new(MemoryUserStore::new());
        let pet_store = Arc::new(MemoryPetStore::new());
        let appointment_store = Arc::new(MemoryAppointmentStore::new());

        let hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            user_store.clone(),
            hasher.clone(),
            jwt_encoder,
        ));
        let user_service = Arc::new(UserService::new(user_store, hasher));
        let pet_service = Arc::new(PetService::new(pet_store));
        let appointment_service = Arc::new(AppointmentService::new(appointment_store));

        let state = vetdesk_api::state::AppState {
            config: Arc::new(config),
            jwt_decoder,
            rbac: Arc::new(RbacEnforcer::new()),
            auth_service,
            user_service: user_service.clone(),
            pet_service,
            appointment_service,
        };

        Self {
            router: vetdesk_api::router::build_router(state),
            user_service,
        }
    }

    /// Seed a user directly through the service layer.
    pub async fn create_test_user(&self, email: &str, password: &str, roles: &[Role]) -> Uuid {
        self.user_service
            .create(CreateUser {
                name: "Test".to_string(),
                lastname: "User".to_string(),
                email: email.to_string(),
                address: "123 Main St".to_string(),
                phone: 3001234567,
                roles: roles.to_vec(),
                password: password.to_string(),
            })
            .await
            .expect("Failed to seed test user")
            .id
    }

    /// Log in through the API and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["data"]["token"]
            .as_str()
            .expect("login response carries no token")
            .to_string()
    }

    /// Fire one request at the router and collect the response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router error");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
