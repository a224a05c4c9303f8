use async_trait::async_trait;
use mockall::mock;

use crate::client::{RequestScope, TrailApi, TrailApiError, TrailSearchResponse};
use crate::models::category::Category;
use crate::models::trail::TrailFilter;

// Define a mock client for the trail backend
mock! {
    pub TrailApiClient {}

    #[async_trait]
    impl TrailApi for TrailApiClient {
        async fn search_trails(
            &self,
            filter: &TrailFilter,
            page: usize,
            scope: &RequestScope,
        ) -> Result<TrailSearchResponse, TrailApiError>;

        async fn refresh_categories(
            &self,
            scope: &RequestScope,
        ) -> Result<Vec<Category>, TrailApiError>;
    }
}

// Helper function to set up a mock client with predefined behavior
pub fn setup_mock_client() -> MockTrailApiClient {
    let mut mock_client = MockTrailApiClient::new();

    // Echo the requested page back, one page of results total
    mock_client
        .expect_search_trails()
        .returning(|_filter, page, _scope| {
            Ok(TrailSearchResponse {
                page,
                total_pages: 1,
                items: Vec::new(),
            })
        });

    // A small categories listing, enough for sidebar consumers
    mock_client.expect_refresh_categories().returning(|_scope| {
        Ok(vec![
            Category {
                id: "cat_alpine".to_string(),
                name: "alpine".to_string(),
            },
            Category {
                id: "cat_forest".to_string(),
                name: "forest".to_string(),
            },
        ])
    });

    mock_client
}
