// server/src/cli/client.rs

// Thin HTTP client for a running booking REST API.

use anyhow::{Context, Result};
use reqwest::header::HeaderName;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Raw outcome of one API call, printed as-is by the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// `Status: <code>` followed by pretty JSON, or the raw body when it is not JSON.
    pub fn render(&self) -> String {
        let body = match serde_json::from_str::<Value>(&self.body) {
            Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| self.body.clone()),
            Err(_) => self.body.clone(),
        };
        format!("Status: {}\n{}", self.status, body)
    }
}

pub struct BookingClient {
    http: reqwest::Client,
    base_url: String,
    role_header: HeaderName,
}

impl BookingClient {
    /// `role_header` must match the `role_header` the server was configured with.
    pub fn new(base_url: &str, role_header: &str) -> Result<Self> {
        let role_header = HeaderName::from_bytes(role_header.as_bytes())
            .with_context(|| format!("Invalid role header name: {}", role_header))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(BookingClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            role_header,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, role: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match role {
            Some(role) => builder.header(&self.role_header, role),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse> {
        let request = builder.build().context("Failed to build request")?;
        debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .http
            .execute(request)
            .await
            .with_context(|| format!("Request to {} failed", self.base_url))?;
        let status = response.status().as_u16();
        let body = response.text().await.context("Failed to read response body")?;
        Ok(ApiResponse { status, body })
    }

    pub async fn list_doctors(&self) -> Result<ApiResponse> {
        self.send(self.request(Method::GET, "/doctors", None)).await
    }

    pub async fn create(
        &self,
        role: &str,
        doctor_id: u32,
        patient_name: &str,
        date: &str,
        time: &str,
        comment: &str,
    ) -> Result<ApiResponse> {
        let doctor_id = doctor_id.to_string();
        let builder = self.request(Method::POST, "/appointments", Some(role)).query(&[
            ("doctor_id", doctor_id.as_str()),
            ("patient_name", patient_name),
            ("date", date),
            ("time", time),
            ("comment", comment),
        ]);
        self.send(builder).await
    }

    pub async fn list(&self, role: &str) -> Result<ApiResponse> {
        self.send(self.request(Method::GET, "/appointments", Some(role))).await
    }

    pub async fn get(&self, role: &str, id: u64) -> Result<ApiResponse> {
        let path = format!("/appointments/{}", id);
        self.send(self.request(Method::GET, &path, Some(role))).await
    }

    pub async fn update(&self, role: &str, id: u64, date: &str, time: &str, comment: &str) -> Result<ApiResponse> {
        let path = format!("/appointments/{}", id);
        let builder = self
            .request(Method::PUT, &path, Some(role))
            .query(&[("date", date), ("time", time), ("comment", comment)]);
        self.send(builder).await
    }

    pub async fn delete(&self, role: &str, id: u64) -> Result<ApiResponse> {
        let path = format!("/appointments/{}", id);
        self.send(self.request(Method::DELETE, &path, Some(role))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_engine::config::DEFAULT_ROLE_HEADER;
    use booking_engine::BookingConfig;
    use tokio::net::TcpListener;

    const LOCAL_API: &str = "http://127.0.0.1:8000";

    #[test]
    fn should_pretty_print_json_bodies() {
        let response = ApiResponse { status: 403, body: r#"{"code":"FORBIDDEN"}"#.to_string() };
        assert_eq!(response.render(), "Status: 403\n{\n  \"code\": \"FORBIDDEN\"\n}");
    }

    #[test]
    fn should_print_raw_text_bodies() {
        let response = ApiResponse { status: 500, body: "boom".to_string() };
        assert_eq!(response.render(), "Status: 500\nboom");
    }

    #[test]
    fn should_trim_trailing_slash_from_base_url() {
        let client = BookingClient::new("http://127.0.0.1:8000/", DEFAULT_ROLE_HEADER).unwrap();
        assert_eq!(client.url("/doctors"), "http://127.0.0.1:8000/doctors");
    }

    #[test]
    fn create_encodes_parameters_and_role() {
        let client = BookingClient::new(LOCAL_API, DEFAULT_ROLE_HEADER).unwrap();
        let request = client
            .request(Method::POST, "/appointments", Some("user"))
            .query(&[("patient_name", "Ivan Petrov"), ("time", "10:00")])
            .build()
            .unwrap();
        assert_eq!(request.headers()[DEFAULT_ROLE_HEADER], "user");
        let query = request.url().query().unwrap();
        assert!(query.contains("patient_name=Ivan+Petrov"));
        assert!(query.contains("time=10%3A00"));
    }

    #[test]
    fn should_send_role_under_configured_header() {
        let client = BookingClient::new(LOCAL_API, "X-Caller-Role").unwrap();
        let request = client.request(Method::GET, "/appointments", Some("admin")).build().unwrap();
        assert_eq!(request.headers()["x-caller-role"], "admin");
        assert!(request.headers().get(DEFAULT_ROLE_HEADER).is_none());
    }

    #[test]
    fn should_reject_invalid_header_name() {
        assert!(BookingClient::new(LOCAL_API, "bad header").is_err());
    }

    #[tokio::test]
    async fn should_reach_server_with_custom_role_header() {
        let config = BookingConfig {
            role_header: "X-Caller-Role".to_string(),
            ..BookingConfig::default()
        };
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(async move {
            rest_api::serve(listener, &config, async move {
                let _ = stopped.await;
            })
            .await
        });

        let client = BookingClient::new(&base_url, "X-Caller-Role").unwrap();
        let response = client.list("admin").await.unwrap();
        assert_eq!(response.status, 200, "{}", response.body);

        let mismatched = BookingClient::new(&base_url, DEFAULT_ROLE_HEADER).unwrap();
        let response = mismatched.list("admin").await.unwrap();
        assert_eq!(response.status, 401);

        stop.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
