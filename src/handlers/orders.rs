use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::entities::seed::sample_orders;
use crate::entities::validation::{validate, OrderDraft};
use crate::errors::ApiError;
use crate::state::AppState;

/// `status` may be absent, and so may the whole body; the order is then
/// looked up and returned with its status unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = state.orders.list().await?;
    Ok(HttpResponse::Ok().json(items))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let order = state.orders.get_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(order))
}

pub async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<OrderDraft>,
) -> Result<HttpResponse, ApiError> {
    let new = validate(payload.into_inner())?;
    let created = state.orders.create(new).await?;
    tracing::info!(order_id = %created.id, "order created");
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Option<web::Json<UpdateStatusPayload>>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let status = payload.map(web::Json::into_inner).unwrap_or_default().status;
    let updated = state.orders.set_status(&id, status).await?;
    tracing::info!(order_id = %updated.id, status = %updated.status, "order status updated");
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn seed_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let stored = state.orders.reset(sample_orders()).await?;
    tracing::warn!(stored, "orders collection reset to sample data");
    Ok(HttpResponse::Created().json(MessageResponse {
        message: "Dummy orders seeded successfully",
    }))
}
