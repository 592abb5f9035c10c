//! Carousel configuration
//!
//! Option keys follow the camelCase names page authors pass from JavaScript.
//! Every field has a default, so a partial object (or `{}`) is valid.

use serde::Deserialize;

use crate::error::{CarouselError, CarouselResult};

/// Thresholds used to classify a finished touch
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TouchThresholds {
    /// Minimum travel (px) along the main axis for a swipe or scroll
    pub threshold: f64,
    /// Maximum travel (px) allowed on the cross axis
    pub restraint: f64,
    /// Maximum duration (ms) of a swipe or scroll
    pub allowed_time: f64,
    /// Maximum travel (px) on both axes for a tap
    pub tap_threshold: f64,
}

impl Default for TouchThresholds {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            restraint: 100.0,
            allowed_time: 300.0,
            tap_threshold: 6.0,
        }
    }
}

/// Class-name hooks and behavior knobs for one carousel
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub item_class: String,
    pub prev_class: String,
    pub next_class: String,
    pub dot_page_class: String,
    pub dot_page_wrap_class: String,
    /// Gesture thresholds
    #[serde(rename = "touchObject")]
    pub touch: TouchThresholds,
    /// Indicator text; `{page}` is 1-based, `{count}` is the page count
    pub indicator_label: String,
    /// Selector for the control that receives focus inside an item
    pub focusable_selector: String,
    /// Class marking the active indicator
    pub active_class: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_class: "swipe-items".to_string(),
            prev_class: "swipe-prev".to_string(),
            next_class: "swipe-next".to_string(),
            dot_page_class: "swipe-page".to_string(),
            dot_page_wrap_class: "swipe-page-wrap".to_string(),
            touch: TouchThresholds::default(),
            indicator_label: "Page {page} of {count}".to_string(),
            focusable_selector: "a".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse an option object serialized as JSON.
    ///
    /// `null` and the empty string are treated as "no options".
    pub fn from_json(json: &str) -> CarouselResult<Self> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        serde_json::from_str(trimmed).map_err(|e| CarouselError::InvalidConfig(e.to_string()))
    }

    /// Render the indicator label for a 0-based page index.
    pub fn indicator_text(&self, page: usize, count: usize) -> String {
        self.indicator_label
            .replace("{page}", &(page + 1).to_string())
            .replace("{count}", &count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.item_class, "swipe-items");
        assert_eq!(config.prev_class, "swipe-prev");
        assert_eq!(config.next_class, "swipe-next");
        assert_eq!(config.dot_page_class, "swipe-page");
        assert_eq!(config.dot_page_wrap_class, "swipe-page-wrap");
        assert_eq!(config.touch.threshold, 100.0);
        assert_eq!(config.touch.restraint, 100.0);
        assert_eq!(config.touch.allowed_time, 300.0);
        assert_eq!(config.touch.tap_threshold, 6.0);
    }

    #[test]
    fn test_empty_and_null_use_defaults() {
        assert_eq!(CarouselConfig::from_json("").unwrap(), CarouselConfig::default());
        assert_eq!(CarouselConfig::from_json("null").unwrap(), CarouselConfig::default());
        assert_eq!(CarouselConfig::from_json("{}").unwrap(), CarouselConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = CarouselConfig::from_json(
            r#"{"itemClass":"card","touchObject":{"threshold":50},"swipe":null}"#,
        )
        .unwrap();
        assert_eq!(config.item_class, "card");
        assert_eq!(config.prev_class, "swipe-prev");
        assert_eq!(config.touch.threshold, 50.0);
        assert_eq!(config.touch.restraint, 100.0);
        assert_eq!(config.touch.tap_threshold, 6.0);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = CarouselConfig::from_json(r#"{"itemClass": 3}"#).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));

        let err = CarouselConfig::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));
    }

    #[test]
    fn test_indicator_text() {
        let config = CarouselConfig::default();
        assert_eq!(config.indicator_text(0, 3), "Page 1 of 3");
        assert_eq!(config.indicator_text(2, 3), "Page 3 of 3");

        let config = CarouselConfig {
            indicator_label: "Service & Support Page {page} of {count}".to_string(),
            ..Default::default()
        };
        assert_eq!(config.indicator_text(1, 4), "Service & Support Page 2 of 4");
    }
}
