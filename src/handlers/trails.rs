use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::client::{RequestScope, TrailApi};
use crate::models::common::Pagination;
use crate::models::trail::TrailFilter;

// AppState struct containing shared resources
pub struct AppState {
    pub client: Arc<dyn TrailApi>,
}

// Query parameters accepted by the trail listing page.
// Unknown parameters are accepted and ignored.
#[derive(Debug, Default)]
pub struct TrailListQuery {
    pub category: Option<String>,
}

impl TrailListQuery {
    /// Read the recognized parameters out of the raw query pairs.
    ///
    /// The first occurrence of a repeated parameter wins, matching
    /// `URLSearchParams.get` on the frontend.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            category: pairs
                .iter()
                .find(|(name, _)| name == "category")
                .map(|(_, value)| value.clone()),
        }
    }
}

/// Payload handed to the trail listing view
#[derive(Debug, Serialize)]
pub struct TrailListPage {
    pub filter: TrailFilter,
    pub pagination: Pagination,
}

// Trail listing page-load endpoint
pub async fn trail_list_page(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Result<Json<TrailListPage>, StatusCode> {
    // Outgoing calls present the caller's own credentials
    let scope = RequestScope::from_headers(&headers);
    let query = TrailListQuery::from_pairs(&pairs);

    let mut filter = TrailFilter::default();
    if let Some(category) = query.category.filter(|c| !c.is_empty()) {
        filter.category.push(category);
    }

    info!(
        "Received trail listing request with categories {:?}",
        filter.category
    );

    // The listing always opens on the first page
    let response = match state.client.search_trails(&filter, 1, &scope).await {
        Ok(response) => {
            info!(
                "Trail search returned page {} of {}",
                response.page, response.total_pages
            );
            response
        }
        Err(err) => {
            error!("Failed to search trails: {}", err);
            return Err(StatusCode::BAD_GATEWAY);
        }
    };

    // Refresh the shared categories listing for the sidebar. Its payload
    // is consumed elsewhere, not by this response.
    if let Err(err) = state.client.refresh_categories(&scope).await {
        error!("Failed to refresh categories index: {}", err);
        return Err(StatusCode::BAD_GATEWAY);
    }

    Ok(Json(TrailListPage {
        filter,
        pagination: Pagination {
            page: response.page,
            total_pages: response.total_pages,
        },
    }))
}
