use crate::core::models::{Balance, Group};
use chrono::{DateTime, Utc};
use log::debug;
use serde_json::{Value, json};

/// Render an amount the way the UI shows it: 4 decimals for ETH, 2 with a
/// dollar sign for anything else.
pub fn format_amount(amount: f64, currency: &str) -> String {
    if currency == "ETH" {
        format!("{:.4} ETH", amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Human-readable distance between `date` and `now` ("Just now", "3h ago",
/// "2d ago", or the plain date once it's over a week old).
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - date).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if hours < 168 {
        format!("{}d ago", hours / 24)
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

// Generates Chart.js configuration for visualizing member balances in a group
pub struct Visualization;

impl Visualization {
    /// Chart.js bar chart config for a group's member balances: one bar per
    /// member in roster order, labeled with the member's name.
    pub fn balance_chart(group: &Group, balances: &[Balance]) -> Value {
        debug!(
            "Generating balance chart for group {} with {} balances",
            group.id,
            balances.len()
        );

        let mut labels: Vec<String> = Vec::new();
        let mut data: Vec<f64> = Vec::new();
        for balance in balances {
            let name = group
                .member_name(&balance.user_id)
                .unwrap_or(balance.user_id.as_str());
            labels.push(name.to_string());
            data.push(balance.amount);
        }

        // Rotate through a fixed palette to support any roster size.
        let base_colors = [
            (75, 192, 192),  // Teal
            (255, 99, 132),  // Red
            (54, 162, 235),  // Blue
            (255, 206, 86),  // Yellow
            (153, 102, 255), // Purple
        ];
        let mut background_colors = Vec::new();
        let mut border_colors = Vec::new();
        for i in 0..labels.len() {
            let (r, g, b) = base_colors[i % base_colors.len()];
            background_colors.push(format!("rgba({}, {}, {}, 0.6)", r, g, b));
            border_colors.push(format!("rgba({}, {}, {}, 1)", r, g, b));
        }

        json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Member Balances",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "title": {
                            "display": true,
                            "text": format!("Balance ({})", group.currency)
                        }
                    },
                    "x": {
                        "title": {
                            "display": true,
                            "text": "Members"
                        }
                    }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": format!("Balances for Group: {}", group.name)
                    }
                }
            }
        })
    }
}
