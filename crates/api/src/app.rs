use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    booking_payments::booking_payments,
    create_booking::create_booking,
    create_payment::create_payment,
    create_user::create_user,
    delete_user::delete_user,
    get_booking::get_booking,
    get_payment::get_payment,
    get_user::get_user,
    health::health_check,
    payment_qr_image::payment_qr_image,
    review_payment::review_payment,
    submit_upi_txn::{submit_upi_txn, submit_upi_txn_wrong_method},
    update_booking_status::update_booking_status,
    upi_qr_image::upi_qr_image,
    user_bookings::user_bookings,
};
use axum::routing::{get, patch, post};
use axum::{middleware, response::IntoResponse, Router};
use parkpay_core::app_state::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_upi_routers())
        .merge(create_booking_routers())
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB limit
        .layer(middleware::from_fn(https_redirect_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

// routes the payer's device and the checkout page talk to
fn create_upi_routers() -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/upi_qr_image/{amount}/", get(upi_qr_image))
        .route(
            "/submit-upi-txn/",
            post(submit_upi_txn).fallback(submit_upi_txn_wrong_method),
        )
        .route(
            "/api/submit-upi-txn/",
            post(submit_upi_txn).fallback(submit_upi_txn_wrong_method),
        )
        .route("/api/health", get(health_check))
}

fn create_booking_routers() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/{user_id}", get(get_user).delete(delete_user))
        .route("/api/users/{user_id}/bookings", get(user_bookings))
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/{booking_id}", get(get_booking))
        .route(
            "/api/bookings/{booking_id}/status",
            patch(update_booking_status),
        )
        .route("/api/bookings/{booking_id}/payments", get(booking_payments))
        .route("/api/payments", post(create_payment))
        .route("/api/payments/{payment_id}", get(get_payment))
        .route(
            "/api/payments/{payment_id}/upi_qr_image/",
            get(payment_qr_image),
        )
        .route("/api/payments/{payment_id}/review", post(review_payment))
}

async fn https_redirect_middleware(
    req: axum::extract::Request,
    next: middleware::Next,
) -> Result<axum::response::Response, (axum::http::StatusCode, String)> {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    if env == "production" {
        let headers = req.headers();
        let proto = headers
            .get("x-forwarded-proto")
            .and_then(|h| h.to_str().ok());

        if let Some("http") = proto {
            let host = headers
                .get("host")
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");

            let path_and_query = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("");
            let redirect_url = format!("https://{}{}", host, path_and_query);

            return Ok(axum::response::Redirect::permanent(&redirect_url).into_response());
        }
    }

    Ok(next.run(req).await)
}
