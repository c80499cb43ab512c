pub mod webhook;

use actix_web::{HttpResponse, web};

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/webhook", web::route().to(webhook::webhook))
        .default_service(web::to(HttpResponse::Ok));
}
