use actix_web::{HttpResponse, Responder};

pub const BANNER: &str = "Xefag Backend API is running!";

pub async fn root() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(BANNER)
}
