// Chart data derivation and CSS-based rendering
use leptos::*;

use crate::types::SystemStats;
use crate::utils::humanize_category;

pub const STATUS_COLORS: [&str; 4] = ["#FF6B6B", "#FFA500", "#4ECDC4", "#95E1D3"];
pub const PRIORITY_LOW_COLOR: &str = "#3498db";
pub const PRIORITY_MEDIUM_COLOR: &str = "#f39c12";
pub const PRIORITY_HIGH_COLOR: &str = "#e74c3c";
pub const CATEGORY_COLOR: &str = "#667eea";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: u32,
    pub color: &'static str,
}

/// Status counts mapped to the four fixed display categories.
pub fn status_slices(stats: &SystemStats) -> Vec<ChartSlice> {
    let labels = ["Submitted", "In Progress", "Resolved", "Closed"];
    let values = [stats.submitted, stats.in_progress, stats.resolved, stats.closed];
    labels
        .iter()
        .zip(values)
        .zip(STATUS_COLORS)
        .map(|((label, value), color)| ChartSlice {
            label: label.to_string(),
            value,
            color,
        })
        .collect()
}

pub fn priority_slices(stats: &SystemStats) -> Vec<ChartSlice> {
    vec![
        ChartSlice {
            label: "Low".to_string(),
            value: stats.by_priority.low,
            color: PRIORITY_LOW_COLOR,
        },
        ChartSlice {
            label: "Medium".to_string(),
            value: stats.by_priority.medium,
            color: PRIORITY_MEDIUM_COLOR,
        },
        ChartSlice {
            label: "High".to_string(),
            value: stats.by_priority.high,
            color: PRIORITY_HIGH_COLOR,
        },
    ]
}

/// Category counts with tags turned into readable labels.
pub fn category_slices(stats: &SystemStats) -> Vec<ChartSlice> {
    stats
        .by_category
        .iter()
        .map(|(tag, value)| ChartSlice {
            label: humanize_category(tag),
            value: *value,
            color: CATEGORY_COLOR,
        })
        .collect()
}

/// Horizontal bar chart, scaled against the largest slice.
#[component]
pub fn BarChart(#[prop(into)] title: String, slices: Vec<ChartSlice>) -> impl IntoView {
    let max = slices.iter().map(|s| s.value).max().unwrap_or(0).max(1);

    view! {
        <div class="card">
            <h3 class="card-title">{title}</h3>
            {if slices.is_empty() {
                view! { <div class="empty-state">"No data"</div> }.into_view()
            } else {
                slices
                    .into_iter()
                    .map(|slice| {
                        let percent = slice.value * 100 / max;
                        view! {
                            <div class="chart-bar-row">
                                <span class="chart-bar-label">{slice.label.clone()}</span>
                                <div class="chart-bar-track">
                                    <div
                                        class="chart-bar-fill"
                                        style=format!(
                                            "width: {}%; background: {}",
                                            percent,
                                            slice.color,
                                        )
                                    ></div>
                                </div>
                                <span>{slice.value}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Legend-style breakdown with colored swatches, used where the original
/// design showed a pie.
#[component]
pub fn DistributionLegend(#[prop(into)] title: String, slices: Vec<ChartSlice>) -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card-title">{title}</h3>
            {slices
                .into_iter()
                .map(|slice| {
                    view! {
                        <div class="chart-bar-row">
                            <span
                                class="legend-swatch"
                                style=format!("background: {}", slice.color)
                            ></span>
                            <span class="chart-bar-label">{slice.label.clone()}</span>
                            <span>{slice.value}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriorityCounts;

    fn stats() -> SystemStats {
        SystemStats {
            total: 10,
            submitted: 3,
            in_progress: 2,
            resolved: 4,
            closed: 1,
            by_priority: PriorityCounts {
                low: 2,
                medium: 5,
                high: 3,
            },
            by_category: [("hostel_issues".to_string(), 6), ("it_support".to_string(), 4)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn status_slices_are_fixed_four() {
        let slices = status_slices(&stats());
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].label, "Submitted");
        assert_eq!(slices[0].value, 3);
        assert_eq!(slices[0].color, "#FF6B6B");
        assert_eq!(slices[3].label, "Closed");
        assert_eq!(slices[3].color, "#95E1D3");
    }

    #[test]
    fn status_slices_zero_for_default_stats() {
        let slices = status_slices(&SystemStats::default());
        assert_eq!(slices.len(), 4);
        assert!(slices.iter().all(|s| s.value == 0));
    }

    #[test]
    fn priority_slices_carry_level_colors() {
        let slices = priority_slices(&stats());
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].color, PRIORITY_LOW_COLOR);
        assert_eq!(slices[1].value, 5);
        assert_eq!(slices[2].color, PRIORITY_HIGH_COLOR);
    }

    #[test]
    fn category_slices_humanize_tags() {
        let slices = category_slices(&stats());
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "hostel issues");
        assert!(slices.iter().all(|s| s.color == CATEGORY_COLOR));
    }
}
