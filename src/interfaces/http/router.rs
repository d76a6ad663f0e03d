//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::services::{
    BookingService, ProfileService, RecommendationService, StationService,
};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{admin_middleware, auth_middleware, AuthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::{
    auth, bookings, health, profile, recommendations, stations,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        auth::handlers::register,
        auth::handlers::get_current_user,
        auth::handlers::change_password,
        // Stations
        stations::handlers::list_stations,
        stations::handlers::get_station,
        stations::handlers::create_station,
        stations::handlers::update_station,
        stations::handlers::delete_station,
        // Bookings
        bookings::handlers::create_booking,
        bookings::handlers::list_my_bookings,
        bookings::handlers::list_all_bookings,
        bookings::handlers::get_booking,
        bookings::handlers::cancel_booking,
        // Profile
        profile::handlers::get_profile,
        profile::handlers::update_profile,
        // Recommendations
        recommendations::handlers::recommend_station,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::HealthResponse,
            health::handlers::ComponentHealth,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisterRequest,
            auth::UserInfo,
            auth::ChangePasswordRequest,
            // Stations
            stations::StationResponse,
            stations::ConnectorDto,
            stations::CoordinatesDto,
            stations::CreateStationRequest,
            stations::UpdateStationRequest,
            // Bookings
            bookings::BookingResponse,
            bookings::CreateBookingRequest,
            // Profile
            profile::ProfileResponse,
            profile::UpdateProfileRequest,
            // Recommendations
            recommendations::RecommendationRequest,
            recommendations::RecommendationResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "User authentication: login (JWT), registration, password change"),
        (name = "Stations", description = "Charging station directory; mutations require the admin role"),
        (name = "Bookings", description = "Charging slot bookings and cancellation"),
        (name = "Profile", description = "Driver profile, created lazily on first access"),
        (name = "Recommendations", description = "AI-assisted station recommendation"),
    ),
    info(
        title = "ChargeSpot API",
        version = "1.0.0",
        description = "REST API for EV charging-station discovery and booking",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
#[allow(clippy::too_many_arguments)]
pub fn create_api_router(
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    station_service: Arc<StationService>,
    booking_service: Arc<BookingService>,
    profile_service: Arc<ProfileService>,
    recommendation_service: Arc<RecommendationService>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_state = auth::AuthHandlerState {
        db: db.clone(),
        jwt_config,
    };
    let auth_routes = Router::new()
        .route("/login", post(auth::handlers::login))
        .route("/register", post(auth::handlers::register))
        .with_state(auth_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::handlers::get_current_user))
        .route("/change-password", put(auth::handlers::change_password))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_state);

    // Station routes: reads for any authenticated user, mutations admin-only
    let station_state = stations::StationAppState {
        service: station_service,
    };
    let station_read_routes = Router::new()
        .route("/", get(stations::handlers::list_stations))
        .route("/{id}", get(stations::handlers::get_station));
    let station_admin_routes = Router::new()
        .route("/", post(stations::handlers::create_station))
        .route(
            "/{id}",
            put(stations::handlers::update_station).delete(stations::handlers::delete_station),
        )
        .route_layer(middleware::from_fn(admin_middleware));
    let station_routes = station_read_routes
        .merge(station_admin_routes)
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(station_state);

    // Booking routes; the cross-user listing is admin-only
    let booking_state = bookings::BookingAppState {
        service: booking_service,
    };
    let booking_user_routes = Router::new()
        .route(
            "/",
            get(bookings::handlers::list_my_bookings).post(bookings::handlers::create_booking),
        )
        .route("/{id}", get(bookings::handlers::get_booking))
        .route("/{id}/cancel", post(bookings::handlers::cancel_booking));
    let booking_admin_routes = Router::new()
        .route("/all", get(bookings::handlers::list_all_bookings))
        .route_layer(middleware::from_fn(admin_middleware));
    let booking_routes = booking_user_routes
        .merge(booking_admin_routes)
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(booking_state);

    // Profile routes (protected)
    let profile_state = profile::ProfileAppState {
        service: profile_service,
    };
    let profile_routes = Router::new()
        .route(
            "/",
            get(profile::handlers::get_profile).put(profile::handlers::update_profile),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(profile_state);

    // Recommendation route (protected)
    let recommendation_state = recommendations::RecommendationAppState {
        service: recommendation_service,
    };
    let recommendation_routes = Router::new()
        .route("/", post(recommendations::handlers::recommend_station))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(recommendation_state);

    // Health state
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // Prometheus scrape endpoint
    let metrics_state = MetricsState {
        handle: prometheus_handle,
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route(
            "/health",
            get(health::handlers::health_check).with_state(health_state),
        )
        // Metrics
        .route(
            "/metrics",
            get(prometheus_metrics).with_state(metrics_state),
        )
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Stations
        .nest("/api/v1/stations", station_routes)
        // Bookings
        .nest("/api/v1/bookings", booking_routes)
        // Profile
        .nest("/api/v1/profile", profile_routes)
        // Recommendations
        .nest("/api/v1/recommendations", recommendation_routes)
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
