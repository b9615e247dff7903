pub mod d400_usage_analytics;

pub use d400_usage_analytics::ui::UsageAnalyticsPanel;
