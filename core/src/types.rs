//! Domain DTOs for the widget API.
//!
//! # Design
//! These types mirror the widget service's wire schema but are defined
//! independently of the mock-server crate; integration tests catch any
//! schema drift between the two. Wire names follow the server's camelCase
//! convention (`chartType`, `widgetId`, `createdAt`), with Rust fields in
//! snake_case behind `#[serde(rename)]`.
//!
//! `WidgetResponse` treats every field as optional so an arbitrary JSON
//! object from the server still parses; the `markdown` → `content` fallback
//! is the server's contract and lives in `display_content`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The widget kinds the service accepts, serialized as lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Dashboard,
    Chart,
    Table,
    Timeline,
    Comparison,
}

/// Request payload for creating a chart widget.
///
/// Serializes to the exact wire schema: `type` is always `"chart"`, `labels`
/// and `data` are parallel arrays whose order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateChartWidget {
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    pub title: String,
    #[serde(rename = "chartType")]
    pub chart_type: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl CreateChartWidget {
    /// Build a chart payload; `widget_type` is pinned to `Chart`.
    pub fn new(title: &str, chart_type: &str, labels: Vec<String>, data: Vec<f64>) -> Self {
        Self {
            widget_type: WidgetType::Chart,
            title: title.to_string(),
            chart_type: chart_type.to_string(),
            labels,
            data,
        }
    }
}

/// Response to a widget creation request.
///
/// The server's reply is an open JSON object; every field here is optional or
/// defaulted so any well-formed object parses. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetResponse {
    pub success: bool,
    pub markdown: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "widgetId")]
    pub widget_id: Option<Uuid>,
    #[serde(rename = "widgetUrl")]
    pub widget_url: Option<String>,
    pub message: Option<String>,
}

impl WidgetResponse {
    /// The displayable content of the response: `markdown` if present and
    /// non-empty, otherwise `content` if present and non-empty.
    ///
    /// The fallback order is the server's contract, not derived here.
    pub fn display_content(&self) -> Option<&str> {
        match self.markdown.as_deref() {
            Some(m) if !m.is_empty() => Some(m),
            _ => match self.content.as_deref() {
                Some(c) if !c.is_empty() => Some(c),
                _ => None,
            },
        }
    }
}

/// Response to `GET /api/widgets`: the widget types the server accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetTypeList {
    pub success: bool,
    pub widgets: Vec<WidgetType>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A widget as stored by the server: the creation payload plus the server's
/// `createdAt` timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredWidget {
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    pub title: String,
    #[serde(rename = "chartType")]
    pub chart_type: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Response to `GET /api/widgets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetRecord {
    pub success: bool,
    #[serde(rename = "widgetId")]
    pub widget_id: Uuid,
    pub widget: StoredWidget,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(markdown: Option<&str>, content: Option<&str>) -> WidgetResponse {
        WidgetResponse {
            markdown: markdown.map(String::from),
            content: content.map(String::from),
            ..WidgetResponse::default()
        }
    }

    #[test]
    fn chart_widget_serializes_to_wire_schema() {
        let widget = CreateChartWidget::new(
            "T",
            "bar",
            vec!["A".to_string()],
            vec![1.0],
        );
        let json = serde_json::to_string(&widget).unwrap();
        assert_eq!(
            json,
            r#"{"type":"chart","title":"T","chartType":"bar","labels":["A"],"data":[1.0]}"#
        );
    }

    #[test]
    fn chart_widget_preserves_array_order() {
        let widget = CreateChartWidget::new(
            "Ventas",
            "bar",
            vec!["Enero".to_string(), "Febrero".to_string(), "Marzo".to_string()],
            vec![12000.0, 15000.0, 18000.0],
        );
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["labels"][0], "Enero");
        assert_eq!(json["labels"][2], "Marzo");
        assert_eq!(json["data"][0], 12000.0);
        assert_eq!(json["data"][2], 18000.0);
    }

    #[test]
    fn widget_type_serializes_lowercase() {
        assert_eq!(serde_json::to_value(WidgetType::Chart).unwrap(), "chart");
        assert_eq!(serde_json::to_value(WidgetType::Timeline).unwrap(), "timeline");
    }

    #[test]
    fn display_content_prefers_markdown() {
        let r = response(Some("# md"), Some("plain"));
        assert_eq!(r.display_content(), Some("# md"));
    }

    #[test]
    fn display_content_falls_back_when_markdown_missing() {
        let r = response(None, Some("plain"));
        assert_eq!(r.display_content(), Some("plain"));
    }

    #[test]
    fn display_content_falls_back_when_markdown_empty() {
        let r = response(Some(""), Some("plain"));
        assert_eq!(r.display_content(), Some("plain"));
    }

    #[test]
    fn display_content_none_when_both_missing() {
        let r = response(None, None);
        assert_eq!(r.display_content(), None);
    }

    #[test]
    fn display_content_none_when_both_empty() {
        let r = response(Some(""), Some(""));
        assert_eq!(r.display_content(), None);
    }

    #[test]
    fn widget_response_parses_arbitrary_object() {
        let r: WidgetResponse = serde_json::from_str(r#"{"unexpected":42}"#).unwrap();
        assert!(!r.success);
        assert_eq!(r.display_content(), None);
    }

    #[test]
    fn widget_response_parses_content_only() {
        let r: WidgetResponse = serde_json::from_str(r#"{"content":"ok"}"#).unwrap();
        assert_eq!(r.display_content(), Some("ok"));
    }

    #[test]
    fn stored_widget_uses_camel_case_wire_names() {
        let widget = StoredWidget {
            widget_type: WidgetType::Chart,
            title: "T".to_string(),
            chart_type: "bar".to_string(),
            labels: vec!["A".to_string()],
            data: vec![1.0],
            created_at: "2025-01-15T10:30:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["type"], "chart");
        assert_eq!(json["chartType"], "bar");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn widget_record_roundtrips_through_json() {
        let record = WidgetRecord {
            success: true,
            widget_id: Uuid::nil(),
            widget: StoredWidget {
                widget_type: WidgetType::Chart,
                title: "Roundtrip".to_string(),
                chart_type: "line".to_string(),
                labels: vec!["A".to_string(), "B".to_string()],
                data: vec![1.5, 2.5],
                created_at: "2025-01-15T10:30:00Z".parse().unwrap(),
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: WidgetRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
