//! Runnable host for the widget API client.
//!
//! # Overview
//! Creates a chart widget on the deployed widget service and prints the
//! formatted content from the response. The core crate builds the request
//! and parses the response; this binary owns the single blocking HTTP
//! round-trip, bounded by a 30-second timeout.
//!
//! Takes no flags and reads no environment; the target URL and payload are
//! fixed, like the upstream example this mirrors.

use std::time::Duration;

use widget_core::{CreateChartWidget, HttpMethod, HttpRequest, HttpResponse, WidgetClient};

const API_URL: &str = "https://frontend-production-d329.up.railway.app";

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(30)))
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call()?,
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes())?,
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty()?,
    };

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let widget = CreateChartWidget::new(
        "Ventas Mensuales 2025",
        "bar",
        ["Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio"]
            .map(String::from)
            .to_vec(),
        vec![12000.0, 15000.0, 18000.0, 22000.0, 25000.0, 27000.0],
    );

    println!("creating widget:");
    println!("{}", serde_json::to_string_pretty(&widget)?);

    let client = WidgetClient::new(API_URL);
    let request = client.build_create_widget(&widget)?;
    let response = client.parse_create_widget(execute(request)?)?;

    if let Some(url) = &response.widget_url {
        println!("\nwidget url: {url}");
    }

    match response.display_content() {
        Some(content) => println!("\n{content}"),
        None => println!("\nno `markdown` or `content` field found in the response"),
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: failed to create widget: {err}");
        std::process::exit(1);
    }
}
