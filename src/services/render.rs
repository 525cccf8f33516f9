//! Writes a station's readings into the page.

use crate::models::{AQI_CARD_CLASS, PLACEHOLDER, Page, QueryResult, ResultsPanel};
use serde_json::Value;

/// Render the backend's `data` object for `city`, replacing any previous
/// results on the page.
pub fn render_results(page: &mut Page, city: &str, data: &Value) {
    page.show_results(results_panel(QueryResult::from_data(city, data)));
}

/// Map a normalized result onto the results-container fields.
pub fn results_panel(result: QueryResult) -> ResultsPanel {
    let category = result.category();

    let aqi_card_class = match category {
        Some(category) => format!("{AQI_CARD_CLASS} {}", category.class_name()),
        None => AQI_CARD_CLASS.to_string(),
    };

    ResultsPanel {
        city_name: result.city,
        aqi_value: result
            .aqi
            .map(|aqi| aqi.display)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        aqi_card_class,
        category: category.map(|c| c.label().to_string()),
        health_message: category.map(|c| c.health_message()),
        pollutants: result.pollutants,
        last_updated: result.last_updated,
    }
}
