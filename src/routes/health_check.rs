use actix_web::HttpResponse;

/// Liveness check: answers `200 Running` whatever the state of the
/// mailing list integration.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("Running")
}
