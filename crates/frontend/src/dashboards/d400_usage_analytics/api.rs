use contracts::dashboards::d400_usage_analytics::dto::{PerformanceMetrics, UsageAnalytics, UsageFilter};
use contracts::shared::api::endpoints::analytics;
use contracts::shared::api::ApiClientError;

use crate::shared::api_client;

/// Views, interactions and quotes for the filter period
pub async fn get_usage(token: &str, filter: &UsageFilter) -> Result<UsageAnalytics, ApiClientError> {
    let url = analytics::usage(
        token,
        filter.configurator_id.as_deref(),
        filter.from.as_deref(),
        filter.to.as_deref(),
    );
    api_client::get(&url).await
}

pub async fn get_performance(
    token: &str,
    configurator_id: Option<&str>,
) -> Result<PerformanceMetrics, ApiClientError> {
    api_client::get(&analytics::performance(token, configurator_id)).await
}
