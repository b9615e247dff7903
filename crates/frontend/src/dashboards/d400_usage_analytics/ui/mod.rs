mod panel;

pub use panel::UsageAnalyticsPanel;
