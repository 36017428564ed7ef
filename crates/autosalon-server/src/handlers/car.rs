//! Catalog endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use autosalon_core::types::facets::Facets;
use autosalon_core::types::list_query::CarListQuery;
use autosalon_core::{Car, PageResult};

use crate::errors::{blocking, AppError};
use crate::state::SharedState;

/// Listing envelope. Always paginated, never a bare array.
#[derive(Debug, Serialize)]
pub struct CarListResponse {
    pub cars: Vec<Car>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u64,
}

impl From<PageResult<Car>> for CarListResponse {
    fn from(page: PageResult<Car>) -> Self {
        let pages = page.page_count();
        Self {
            pages,
            cars: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}

/// `GET /api/cars`
///
/// Parameters arrive as raw pairs so a repeated key narrows to one value
/// instead of failing the whole request.
pub async fn list_cars(
    State(state): State<SharedState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CarListResponse>, AppError> {
    let Query(pairs) = params?;
    let query = CarListQuery::from_pairs(pairs);
    let criteria = query.criteria();
    let request = query.page_request(state.catalog.config());
    let page = blocking(move || state.catalog.list_cars(&criteria, request)).await?;
    Ok(Json(page.into()))
}

/// `GET /api/cars/featured`
pub async fn featured_cars(State(state): State<SharedState>) -> Result<Json<CarListResponse>, AppError> {
    let page = blocking(move || state.catalog.featured_cars()).await?;
    Ok(Json(page.into()))
}

/// `GET /api/cars/facets`
pub async fn facets(State(state): State<SharedState>) -> Result<Json<Facets>, AppError> {
    Ok(Json(blocking(move || state.catalog.facets()).await?))
}

/// `GET /api/cars/:id`
pub async fn get_car(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(blocking(move || state.catalog.get_car_by_id(&id)).await?))
}
