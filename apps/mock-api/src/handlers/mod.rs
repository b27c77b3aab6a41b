//! HTTP handlers and route configuration.

mod auth;
mod catalogue;
mod health;
mod stats;
mod vehicles;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/login", web::post().to(auth::login))
            // Inventory routes, token checked when auth is required
            .route("/me", web::get().to(auth::me))
            .route("/summary", web::get().to(stats::summary))
            .route("/chart", web::get().to(stats::chart))
            .service(
                web::resource("/vehicles")
                    .route(web::get().to(vehicles::list))
                    .route(web::post().to(vehicles::create)),
            )
            .service(
                web::resource("/vehicles/{id}")
                    .route(web::get().to(vehicles::get))
                    .route(web::delete().to(vehicles::delete)),
            )
            .route("/manufacturers", web::get().to(catalogue::manufacturers))
            .route("/models", web::get().to(catalogue::models))
            .route("/types", web::get().to(catalogue::types))
            .route("/colors", web::get().to(catalogue::colors)),
    );
}
