use chrono::{Duration, NaiveDate, Utc};
use contracts::dashboards::d400_usage_analytics::dto::{PerformanceMetrics, UsageAnalytics, UsageFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

use crate::dashboards::d400_usage_analytics::api;
use crate::shared::components::ui::{FormCheckbox, FormSelect};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_auth;

const PERIODS: [(i64, &str); 3] = [(7, "Last 7 days"), (30, "Last 30 days"), (90, "Last 90 days")];

/// Inclusive `(from, to)` ISO dates covering the last `days` days up to `today`
fn period_bounds(days: i64, today: NaiveDate) -> (String, String) {
    let from = today - Duration::days((days - 1).max(0));
    (from.format("%Y-%m-%d").to_string(), today.format("%Y-%m-%d").to_string())
}

/// Rates arrive either as a fraction or already in percent
fn format_rate(rate: f64) -> String {
    let percent = if rate <= 1.0 { rate * 100.0 } else { rate };
    format!("{:.1}%", percent)
}

fn bar_width(value: u64, max: u64) -> String {
    if max == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", value as f64 * 100.0 / max as f64)
}

/// Largest share first
fn sorted_breakdown(breakdown: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut rows: Vec<(String, f64)> = breakdown.iter().map(|(k, v)| (k.clone(), *v)).collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Usage and performance numbers of the account
#[component]
pub fn UsageAnalyticsPanel(
    /// Current configurator, offered as a filter
    configurator_id: Option<String>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let toasts = use_toasts();

    let period = RwSignal::new("30".to_string());
    let only_current = RwSignal::new(false);
    let usage = RwSignal::new(None::<UsageAnalytics>);
    let performance = RwSignal::new(None::<PerformanceMetrics>);
    let loading = RwSignal::new(false);

    let has_configurator = configurator_id.is_some();

    Effect::new(move |_| {
        let days = period.get().parse::<i64>().unwrap_or(30);
        let configurator_id = configurator_id.clone().filter(|_| only_current.get());
        let (from, to) = period_bounds(days, Utc::now().date_naive());
        let filter = UsageFilter {
            configurator_id,
            from: Some(from),
            to: Some(to),
        };
        let token = auth.get_untracked().token().unwrap_or_default();

        loading.set(true);
        spawn_local(async move {
            match api::get_usage(&token, &filter).await {
                Ok(data) => usage.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load usage analytics: {}", e);
                    toasts.api_error(&e);
                }
            }
            match api::get_performance(&token, filter.configurator_id.as_deref()).await {
                Ok(data) => performance.set(Some(data)),
                Err(e) => log::warn!("Performance metrics unavailable: {}", e),
            }
            loading.set(false);
        });
    });

    let period_options = Signal::stored(
        PERIODS
            .iter()
            .map(|(days, label)| (days.to_string(), label.to_string()))
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="analytics">
            <Flex gap=FlexGap::Medium style="align-items: flex-end;">
                <FormSelect label="Period" value=period options=period_options />
                {has_configurator.then(|| view! {
                    <FormCheckbox label="This configurator only" checked=only_current />
                })}
            </Flex>

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                {move || usage.get().map(|data| {
                    let max_views = data.daily_stats.iter().map(|d| d.views).max().unwrap_or(0);
                    view! {
                        <div class="analytics__stats">
                            <StatTile label="Views" value=data.total_views.to_string() />
                            <StatTile label="Interactions" value=data.total_interactions.to_string() />
                            <StatTile label="Quotes" value=data.total_quotes.to_string() />
                            <StatTile label="Conversion" value=format_rate(data.conversion_rate) />
                        </div>

                        <h3 class="dialog__section-title">"Daily views"</h3>
                        {if data.daily_stats.is_empty() {
                            view! { <p class="dialog__empty">"No activity in this period."</p> }.into_any()
                        } else {
                            view! {
                                <div class="analytics__daily">
                                    {data.daily_stats.into_iter().map(|day| view! {
                                        <div class="analytics__day">
                                            <span class="analytics__day-date">{day.date}</span>
                                            <div class="analytics__bar">
                                                <div
                                                    class="analytics__bar-fill"
                                                    style:width=bar_width(day.views, max_views)
                                                ></div>
                                            </div>
                                            <span class="analytics__day-value">
                                                {format!("{} / {} / {}", day.views, day.interactions, day.quotes)}
                                            </span>
                                        </div>
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }}

                        {(!data.top_configurators.is_empty()).then(|| view! {
                            <h3 class="dialog__section-title">"Top configurators"</h3>
                            <table class="analytics__table">
                                <thead>
                                    <tr><th>"Name"</th><th>"Views"</th><th>"Quotes"</th></tr>
                                </thead>
                                <tbody>
                                    {data.top_configurators.iter().map(|c| view! {
                                        <tr>
                                            <td>{c.name.clone()}</td>
                                            <td>{c.views}</td>
                                            <td>{c.quotes}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        })}
                    }
                })}

                {move || performance.get().map(|perf| view! {
                    <h3 class="dialog__section-title">"Performance"</h3>
                    <div class="analytics__stats">
                        <StatTile label="Avg. load" value=format!("{:.0} ms", perf.average_load_time) />
                        <StatTile label="Avg. interaction" value=format!("{:.1} s", perf.average_interaction_time) />
                        <StatTile label="Bounce rate" value=format_rate(perf.bounce_rate) />
                        <StatTile label="Completion" value=format_rate(perf.completion_rate) />
                    </div>
                    <div class="analytics__breakdowns">
                        <Breakdown title="Devices" rows=sorted_breakdown(&perf.device_breakdown) />
                        <Breakdown title="Browsers" rows=sorted_breakdown(&perf.browser_breakdown) />
                    </div>
                })}
            </Show>
        </div>
    }
}

#[component]
fn StatTile(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <Card class="analytics__stat">
            <div class="analytics__stat-value">{value}</div>
            <div class="analytics__stat-label">{label}</div>
        </Card>
    }
}

#[component]
fn Breakdown(#[prop(into)] title: String, rows: Vec<(String, f64)>) -> impl IntoView {
    view! {
        <div class="analytics__breakdown">
            <h4>{title}</h4>
            {rows.into_iter().map(|(name, share)| view! {
                <div class="analytics__breakdown-row">
                    <span>{name}</span>
                    <span>{format_rate(share)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_bounds() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(period_bounds(7, today), ("2024-03-04".to_string(), "2024-03-10".to_string()));
        assert_eq!(period_bounds(1, today), ("2024-03-10".to_string(), "2024-03-10".to_string()));
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.125), "12.5%");
        assert_eq!(format_rate(42.0), "42.0%");
        assert_eq!(format_rate(0.0), "0.0%");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(5, 10), "50%");
        assert_eq!(bar_width(3, 0), "0%");
    }

    #[test]
    fn test_sorted_breakdown() {
        let map: HashMap<String, f64> = [("mobile".to_string(), 0.3), ("desktop".to_string(), 0.7)]
            .into_iter()
            .collect();
        let rows = sorted_breakdown(&map);
        assert_eq!(rows[0].0, "desktop");
        assert_eq!(rows[1].0, "mobile");
    }
}
