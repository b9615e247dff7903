use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filters for `GET /api/analytics/usage`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configurator_id: Option<String>,
    /// ISO date, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// ISO date, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageAnalytics {
    pub total_views: u64,
    pub total_interactions: u64,
    pub total_quotes: u64,
    pub conversion_rate: f64,
    #[serde(default)]
    pub top_configurators: Vec<TopConfigurator>,
    #[serde(default)]
    pub daily_stats: Vec<DailyStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopConfigurator {
    pub id: String,
    pub name: String,
    pub views: u64,
    pub quotes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    /// Day in format "YYYY-MM-DD"
    pub date: String,
    pub views: u64,
    pub interactions: u64,
    pub quotes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub average_load_time: f64,
    pub average_interaction_time: f64,
    pub bounce_rate: f64,
    pub completion_rate: f64,
    #[serde(default)]
    pub device_breakdown: HashMap<String, f64>,
    #[serde(default)]
    pub browser_breakdown: HashMap<String, f64>,
}
