//! Text rendering of the dashboard report.

#![allow(clippy::format_push_string)]

use sentiboard_core::{day_key, Dashboard, DashboardParams, FilterSpec};

const HEAVY_RULE: &str =
    "═══════════════════════════════════════════════════════════════\n";
const LIGHT_RULE: &str =
    "───────────────────────────────────────────────────────────────\n";

/// Formats the full dashboard as a sectioned text report.
#[must_use]
pub fn format_dashboard(
    dashboard: &Dashboard,
    filter: &FilterSpec,
    params: &DashboardParams,
) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(HEAVY_RULE);
    output.push_str("                 STOCK SENTIMENT DASHBOARD                     \n");
    output.push_str(HEAVY_RULE);
    output.push('\n');

    output.push_str("Filter\n");
    output.push_str(LIGHT_RULE);
    output.push_str(&format!("Ticker:                {}\n", filter.ticker));
    output.push_str(&format!(
        "Date Range:            {} .. {}\n",
        filter.start.map_or_else(|| "open".to_string(), day_key),
        filter.end.map_or_else(|| "open".to_string(), day_key),
    ));
    output.push_str(&format!(
        "Horizon:               {} day(s)\n",
        params.horizon_days
    ));
    output.push_str(&format!(
        "Sentiment Scale:       {}\n",
        params.sentiment_scale
    ));
    output.push('\n');

    output.push_str("Price Series\n");
    output.push_str(LIGHT_RULE);
    output.push_str(&format!(
        "Observations:          {}\n",
        dashboard.prices.len()
    ));
    if let (Some(first), Some(last)) = (dashboard.prices.first(), dashboard.prices.last()) {
        output.push_str(&format!(
            "First Close:           ${:.2} ({})\n",
            first.close,
            day_key(first.date)
        ));
        output.push_str(&format!(
            "Last Close:            ${:.2} ({})\n",
            last.close,
            day_key(last.date)
        ));
    }
    output.push('\n');

    output.push_str("Sentiment Distribution\n");
    output.push_str(LIGHT_RULE);
    let total_posts: usize = dashboard.category_distribution.values().sum();
    output.push_str(&format!("Total Posts:           {total_posts}\n"));
    for (category, count) in &dashboard.category_distribution {
        output.push_str(&format!("  {:<10}           {}\n", category.as_str(), count));
    }
    output.push('\n');

    output.push_str("Post Volume\n");
    output.push_str(LIGHT_RULE);
    output.push_str(&format!(
        "Active Days:           {}\n",
        dashboard.post_volume.len()
    ));
    if let Some((day, count)) = dashboard
        .post_volume
        .iter()
        .max_by_key(|(_, &count)| count)
    {
        output.push_str(&format!(
            "Busiest Day:           {} ({} posts)\n",
            day_key(*day),
            count
        ));
    }
    output.push('\n');

    output.push_str("Weekly Sentiment vs Price\n");
    output.push_str(LIGHT_RULE);
    output.push_str("Week         Sentiment   Change%\n");
    for row in &dashboard.weekly {
        output.push_str(&format!(
            "{}   {:>9}   {:>7}\n",
            day_key(row.week),
            optional_stat(row.sentiment_score),
            optional_stat(row.price_change_pct),
        ));
    }
    output.push_str(&format!(
        "Correlation:           {}\n",
        optional_stat(dashboard.weekly_correlation)
    ));
    output.push('\n');

    output.push_str("Lagged Sentiment vs Return\n");
    output.push_str(LIGHT_RULE);
    output.push_str(&format!(
        "Paired Observations:   {}\n",
        dashboard.scatter.len()
    ));
    output.push_str(&format!(
        "Correlation:           {}\n",
        optional_stat(dashboard.regression.correlation)
    ));
    match dashboard.regression.fit {
        Some(fit) => {
            output.push_str(&format!("Slope:                 {:.4}\n", fit.slope));
            output.push_str(&format!("Intercept:             {:.4}\n", fit.intercept));
        }
        None => {
            output.push_str("Slope:                 n/a\n");
            output.push_str("Intercept:             n/a\n");
        }
    }
    if let Some([a, b]) = dashboard.regression_segment {
        output.push_str(&format!(
            "Fit Line:              ({:.2}, {:.4}) .. ({:.2}, {:.4})\n",
            a.x, a.y, b.x, b.y
        ));
    }

    output
}

fn optional_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}
