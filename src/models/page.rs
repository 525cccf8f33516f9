//! The widget page and its fixed element identifiers.
//!
//! [`Page`] is the state of every element the widget writes to. It is built
//! fresh for each search, so a render always replaces all previous output.
//! [`Page::to_html`] turns it into the full document.

use crate::models::PollutantReading;
use crate::utils::escape_html;
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Element ids the page exposes.
pub mod ids {
    pub const SEARCH_FORM: &str = "search-form";
    pub const CITY_INPUT: &str = "city-input";
    pub const MESSAGE: &str = "message";
    pub const RESULTS_CONTAINER: &str = "results-container";
    pub const CITY_NAME_DISPLAY: &str = "city-name-display";
    pub const AQI_CARD: &str = "aqi-card";
    pub const AQI_VALUE: &str = "aqi-value";
    pub const HEALTH_MESSAGE_INLINE: &str = "health-message-inline";
    pub const POLLUTANTS_DETAIL: &str = "pollutants-detail";
    pub const LAST_UPDATED: &str = "last-updated";
}

/// Base class of the AQI card, always present.
pub const AQI_CARD_CLASS: &str = "aqi-card";

/// Contents of `results-container`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ResultsPanel {
    pub city_name: String,
    /// AQI number, or `--` when the station reported none
    pub aqi_value: String,
    /// Full class attribute of the AQI card, e.g. `aqi-card moderate`
    pub aqi_card_class: String,
    /// Band label, when an AQI is known
    pub category: Option<String>,
    /// `<label> — <advisory>`, when an AQI is known
    pub health_message: Option<String>,
    pub pollutants: Vec<PollutantReading>,
    pub last_updated: String,
}

impl ResultsPanel {
    /// Inner HTML of `pollutants-detail`
    pub fn pollutants_html(&self) -> String {
        let mut html = String::from("<h3>Key Pollutants:</h3><ul>");
        for reading in &self.pollutants {
            let _ = write!(
                html,
                "<li><strong>{}:</strong> {}</li>",
                escape_html(&reading.name),
                escape_html(&reading.value)
            );
        }
        html.push_str("</ul>");
        html
    }
}

/// State of the widget page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct Page {
    /// Value echoed back into `city-input`
    pub city_input: String,
    /// Text of the `message` region; hidden when absent
    pub message: Option<String>,
    /// The `results-container`; hidden when absent
    pub results: Option<ResultsPanel>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the message and results ahead of a new search.
    pub fn begin_search(&mut self, city_input: &str) {
        self.city_input = city_input.to_string();
        self.message = None;
        self.results = None;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn show_results(&mut self, results: ResultsPanel) {
        self.results = Some(results);
    }

    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str(DOCUMENT_HEAD);

        let _ = write!(
            html,
            r#"<form id="{form}" method="get" action="/search">
<input id="{input}" name="city" type="text" placeholder="Enter city name" value="{value}" autocomplete="off">
<button type="submit">Search</button>
</form>
"#,
            form = ids::SEARCH_FORM,
            input = ids::CITY_INPUT,
            value = escape_html(&self.city_input),
        );

        let _ = match &self.message {
            Some(message) => writeln!(
                html,
                r#"<div id="{}">{}</div>"#,
                ids::MESSAGE,
                escape_html(message)
            ),
            None => writeln!(html, r#"<div id="{}" class="hidden"></div>"#, ids::MESSAGE),
        };

        match &self.results {
            Some(results) => write_results(&mut html, results),
            None => {
                let _ = writeln!(
                    html,
                    r#"<div id="{}" class="hidden"></div>"#,
                    ids::RESULTS_CONTAINER
                );
            }
        }

        html.push_str(DOCUMENT_TAIL);
        html
    }
}

fn write_results(html: &mut String, results: &ResultsPanel) {
    let _ = write!(
        html,
        r#"<div id="{container}">
<h2 id="{city_id}">{city}</h2>
<div id="{card_id}" class="{card_class}">
<div id="{value_id}">{value}</div>
"#,
        container = ids::RESULTS_CONTAINER,
        city_id = ids::CITY_NAME_DISPLAY,
        city = escape_html(&results.city_name),
        card_id = ids::AQI_CARD,
        card_class = escape_html(&results.aqi_card_class),
        value_id = ids::AQI_VALUE,
        value = escape_html(&results.aqi_value),
    );

    if let Some(message) = &results.health_message {
        let _ = writeln!(
            html,
            r#"<div id="{}">{}</div>"#,
            ids::HEALTH_MESSAGE_INLINE,
            escape_html(message)
        );
    }

    let _ = write!(
        html,
        r#"</div>
<div id="{detail_id}">{detail}</div>
<p>Last updated: <span id="{updated_id}">{updated}</span></p>
</div>
"#,
        detail_id = ids::POLLUTANTS_DETAIL,
        detail = results.pollutants_html(),
        updated_id = ids::LAST_UPDATED,
        updated = escape_html(&results.last_updated),
    );
}

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Air Quality Index</title>
<style>
body { font-family: Arial, sans-serif; margin: 0; background: #f5f5f5; color: #333; }
main { max-width: 640px; margin: 40px auto; padding: 20px; background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
h1 { text-align: center; }
form { display: flex; gap: 8px; }
input { flex: 1; padding: 8px; }
.hidden { display: none; }
#message { margin-top: 16px; color: #b00020; }
.aqi-card { margin: 16px 0; padding: 16px; border-radius: 8px; background: #eee; text-align: center; }
#aqi-value { font-size: 3rem; font-weight: 700; }
#health-message-inline { margin-top: 10px; font-size: 1rem; font-weight: 600; }
.aqi-card.good { background: #a8e05f; }
.aqi-card.moderate { background: #fdd74b; }
.aqi-card.unhealthy-sensitive { background: #fe9b57; }
.aqi-card.unhealthy { background: #fe6a69; }
.aqi-card.very-unhealthy { background: #a97abc; color: #fff; }
.aqi-card.hazardous { background: #a87383; color: #fff; }
</style>
</head>
<body>
<main>
<h1>Air Quality Index</h1>
"#;

const DOCUMENT_TAIL: &str = "</main>\n</body>\n</html>\n";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> ResultsPanel {
        ResultsPanel {
            city_name: "Delhi".to_string(),
            aqi_value: "168".to_string(),
            aqi_card_class: "aqi-card unhealthy".to_string(),
            category: Some("Unhealthy".to_string()),
            health_message: Some("Unhealthy — Everyone may feel discomfort.".to_string()),
            pollutants: vec![PollutantReading {
                code: "pm25".to_string(),
                name: "Particulate Matter 2.5 (PM2.5)".to_string(),
                value: "168".to_string(),
            }],
            last_updated: "2024-03-09 14:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_page_hides_everything() {
        let html = Page::new().to_html();
        assert!(html.contains(r#"<div id="message" class="hidden"></div>"#));
        assert!(html.contains(r#"<div id="results-container" class="hidden"></div>"#));
        assert!(html.contains(r#"id="search-form""#));
        assert!(html.contains(r#"id="city-input""#));
    }

    #[test]
    fn test_shown_message_has_no_class() {
        let mut page = Page::new();
        page.show_message("No data returned for this city.");
        let html = page.to_html();

        assert!(html.contains(r#"<div id="message">No data returned for this city.</div>"#));
        assert!(!html.contains(r#"class="""#));
    }

    #[test]
    fn test_begin_search_clears_previous_output() {
        let mut page = Page::new();
        page.show_message("old");
        page.show_results(sample_results());

        page.begin_search("Paris");

        assert_eq!(page.city_input, "Paris");
        assert!(page.message.is_none());
        assert!(page.results.is_none());
    }

    #[test]
    fn test_results_markup() {
        let mut page = Page::new();
        page.show_results(sample_results());
        let html = page.to_html();

        assert!(html.contains(r#"<h2 id="city-name-display">Delhi</h2>"#));
        assert!(html.contains(r#"<div id="aqi-card" class="aqi-card unhealthy">"#));
        assert!(html.contains(r#"<div id="health-message-inline">"#));
        assert!(html.contains(
            "<h3>Key Pollutants:</h3><ul><li><strong>Particulate Matter 2.5 (PM2.5):</strong> 168</li></ul>"
        ));
        assert!(html.contains(r#"<span id="last-updated">2024-03-09 14:00:00</span>"#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut page = Page::new();
        page.begin_search(r#""><script>"#);
        page.show_message("<b>bad</b>");
        let html = page.to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }
}
