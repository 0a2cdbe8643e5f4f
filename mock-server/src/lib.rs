use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Widget types the API accepts, matching the production frontend's routing
/// table.
pub const WIDGET_TYPES: [&str; 5] = ["dashboard", "chart", "table", "timeline", "comparison"];

/// A widget as stored by the server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredWidget {
    #[serde(rename = "type")]
    pub widget_type: String,
    pub title: String,
    #[serde(rename = "chartType", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Incoming creation payload. Fields are optional so the handler can answer
/// missing `type` / `title` with a 400 and a JSON error body instead of the
/// extractor's generic 422.
#[derive(Deserialize)]
pub struct CreateWidget {
    #[serde(rename = "type")]
    pub widget_type: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "chartType")]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, StoredWidget>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/widgets", get(list_widget_types).post(create_widget))
        .route("/api/widgets/{id}", get(get_widget))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Render the markdown fallback the production backend attaches to chart
/// responses: a title heading plus a label/value table.
pub fn render_markdown(widget: &StoredWidget) -> String {
    let mut out = format!("## {}\n", widget.title);
    if !widget.labels.is_empty() {
        out.push_str("\n| Label | Value |\n| --- | --- |\n");
        for (label, value) in widget.labels.iter().zip(&widget.data) {
            out.push_str(&format!("| {label} | {value} |\n"));
        }
    }
    out
}

fn bad_request(message: String) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "error": message })),
    )
}

async fn list_widget_types() -> Json<Value> {
    Json(json!({
        "success": true,
        "widgets": WIDGET_TYPES,
        "message": "POST /api/widgets with widget data to create a visualization",
    }))
}

async fn create_widget(
    State(db): State<Db>,
    Json(input): Json<CreateWidget>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let widget_type = input
        .widget_type
        .ok_or_else(|| bad_request("widget type is required".to_string()))?;
    if !WIDGET_TYPES.contains(&widget_type.as_str()) {
        return Err(bad_request(format!(
            "invalid widget type: {widget_type}. available types: {}",
            WIDGET_TYPES.join(", ")
        )));
    }
    let title = input
        .title
        .ok_or_else(|| bad_request("widget title is required".to_string()))?;
    if widget_type == "chart" && input.chart_type.is_none() {
        return Err(bad_request("chartType is required for chart widgets".to_string()));
    }

    let widget = StoredWidget {
        widget_type,
        title,
        chart_type: input.chart_type,
        labels: input.labels,
        data: input.data,
        created_at: Utc::now(),
    };

    let id = Uuid::new_v4();
    let markdown = render_markdown(&widget);
    // The production backend reports the concrete chart kind as `type`.
    let reported_type = widget.chart_type.clone().unwrap_or_else(|| widget.widget_type.clone());
    let widget_url = format!("/widgets/{}?id={id}", widget.widget_type);
    db.write().await.insert(id, widget);

    Ok(Json(json!({
        "success": true,
        "widgetId": id,
        "widgetUrl": widget_url,
        "markdown": markdown,
        "type": reported_type,
        "message": "widget created",
    })))
}

async fn get_widget(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let widgets = db.read().await;
    match widgets.get(&id) {
        Some(widget) => Ok(Json(json!({
            "success": true,
            "widgetId": id,
            "widget": widget,
        }))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({
                "success": false,
                "error": "widget not found",
                "widgetId": id,
            })),
        )),
    }
}
