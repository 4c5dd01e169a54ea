// REST client for the Campus Help Desk backend
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::{expect_context, provide_context, SignalGetUntracked};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::SessionState;
use crate::types::{
    Complaint, CreateComplaintRequest, DashboardSnapshot, LoginRequest, Officer, RegisterRequest,
    SessionUser, StatusUpdateRequest, SystemStats,
};

/// Path prefix the backend is served under.
pub const DEFAULT_API_BASE: &str = "/api";

/// Response envelope every endpoint wraps its payload in.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// List payload of `GET /users?role=officer`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserListPayload {
    #[serde(default)]
    pub users: Vec<Officer>,
}

/// List payload of `GET /complaints`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplaintListPayload {
    #[serde(default)]
    pub complaints: Vec<Complaint>,
}

/// Register/login payload: the created or authenticated user plus a token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub data: SessionUser,
    pub token: String,
}

/// Creation payload of `POST /complaints`. The human-readable identifier is
/// preferred for navigation, with the raw id as fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedComplaint {
    #[serde(default)]
    pub complaint_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl CreatedComplaint {
    pub fn route_id(&self) -> &str {
        self.complaint_id
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    Network(String),
    Http(u16),
    /// Backend rejected the request and supplied a message.
    Api(String),
    Decode(String),
}

impl ApiError {
    /// Message shown to the user: the backend's own text when it sent one,
    /// otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Http(status) => write!(f, "HTTP error: {}", status),
            ApiError::Api(msg) => write!(f, "API error: {}", msg),
            ApiError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionState,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionState) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        self.post("/users/register", req).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<AuthPayload, ApiError> {
        self.post("/users/login", req).await
    }

    pub async fn stats_overview(&self) -> Result<SystemStats, ApiError> {
        self.get("/complaints/stats/overview").await
    }

    pub async fn list_officers(&self) -> Result<Vec<Officer>, ApiError> {
        let payload: UserListPayload = self.get("/users?role=officer").await?;
        Ok(payload.users)
    }

    pub async fn list_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        let payload: ComplaintListPayload = self.get("/complaints").await?;
        Ok(payload.complaints)
    }

    pub async fn get_complaint(&self, id: &str) -> Result<Complaint, ApiError> {
        self.get(&format!("/complaints/{}", id)).await
    }

    pub async fn create_complaint(
        &self,
        req: &CreateComplaintRequest,
    ) -> Result<CreatedComplaint, ApiError> {
        self.post("/complaints", req).await
    }

    pub async fn update_complaint_status(
        &self,
        id: &str,
        req: &StatusUpdateRequest,
    ) -> Result<(), ApiError> {
        let url = format!("{}/complaints/{}/status", self.base_url, id);
        let response = self
            .with_auth(Request::put(&url))
            .json(req)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    pub async fn delete_complaint(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/complaints/{}", self.base_url, id);
        let response = self
            .with_auth(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    /// Issues the three dashboard fetches concurrently and waits for the
    /// whole batch. Never fails; failed portions degrade to defaults.
    pub async fn load_dashboard(&self) -> DashboardSnapshot {
        let (stats, officers, complaints) = futures::join!(
            self.stats_overview(),
            self.list_officers(),
            self.list_complaints()
        );
        if let Err(e) = &stats {
            log::warn!("dashboard stats load failed: {}", e);
        }
        if let Err(e) = &officers {
            log::warn!("officer list load failed: {}", e);
        }
        if let Err(e) = &complaints {
            log::warn!("complaint list load failed: {}", e);
        }
        DashboardSnapshot::from_parts(stats, officers, complaints)
    }

    // Generic HTTP plumbing

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.get_untracked().token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .with_auth(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_data(response).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .with_auth(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_data(response).await
    }

    /// Decodes the envelope and extracts `data`.
    async fn unwrap_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !response.ok() {
            return Err(Self::error_from_body(response).await.unwrap_or(ApiError::Http(status)));
        }
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !envelope.success {
            return Err(ApiError::Api(
                envelope.message.unwrap_or_else(|| "Request failed".to_string()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("response envelope missing data".to_string()))
    }

    /// Like `unwrap_data` for endpoints whose payload we do not consume.
    async fn check(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if !response.ok() {
            return Err(Self::error_from_body(response).await.unwrap_or(ApiError::Http(status)));
        }
        let envelope: Envelope<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if !envelope.success {
            return Err(ApiError::Api(
                envelope.message.unwrap_or_else(|| "Request failed".to_string()),
            ));
        }
        Ok(())
    }

    async fn error_from_body(response: Response) -> Option<ApiError> {
        let envelope: Envelope<serde_json::Value> = response.json().await.ok()?;
        envelope.message.map(ApiError::Api)
    }
}

/// Normalizes an optional `data-api-base` value, falling back to the
/// default prefix. A trailing slash is stripped so path joins stay clean.
fn resolve_api_base(attr: Option<String>) -> String {
    match attr {
        Some(v) if !v.trim().is_empty() => v.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// Reads `data-api-base` off the mount element (`<body>`).
fn mount_api_base() -> String {
    let attr = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute("data-api-base"));
    resolve_api_base(attr)
}

pub fn provide_api_client(session: SessionState) -> ApiClient {
    let client = ApiClient::new(mount_api_base(), session);
    provide_context(client.clone());
    client
}

pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_list_payloads() {
        let json = r#"{
            "success": true,
            "data": {
                "users": [
                    {
                        "id": "u1",
                        "firstName": "Rita",
                        "lastName": "Verma",
                        "email": "rita@college.edu",
                        "role": "officer",
                        "isActive": true
                    }
                ]
            }
        }"#;
        let env: Envelope<UserListPayload> = serde_json::from_str(json).unwrap();
        assert!(env.success);
        let users = env.data.unwrap().users;
        assert_eq!(users.len(), 1);
        assert!(users[0].is_active);
    }

    #[test]
    fn envelope_decodes_error_shape() {
        let json = r#"{ "success": false, "message": "Email already registered" }"#;
        let env: Envelope<AuthPayload> = serde_json::from_str(json).unwrap();
        assert!(!env.success);
        assert_eq!(env.message.as_deref(), Some("Email already registered"));
        assert!(env.data.is_none());
    }

    #[test]
    fn created_complaint_prefers_human_readable_id() {
        let created = CreatedComplaint {
            complaint_id: Some("CMP-2024-001".to_string()),
            id: Some("65a1".to_string()),
        };
        assert_eq!(created.route_id(), "CMP-2024-001");

        let created = CreatedComplaint {
            complaint_id: None,
            id: Some("65a1".to_string()),
        };
        assert_eq!(created.route_id(), "65a1");
    }

    #[test]
    fn api_base_falls_back_and_trims_trailing_slash() {
        assert_eq!(resolve_api_base(None), DEFAULT_API_BASE);
        assert_eq!(resolve_api_base(Some("   ".to_string())), DEFAULT_API_BASE);
        assert_eq!(
            resolve_api_base(Some("https://helpdesk.college.edu/api/".to_string())),
            "https://helpdesk.college.edu/api"
        );
    }

    #[test]
    fn user_message_prefers_backend_text() {
        let err = ApiError::Api("Student ID not found".to_string());
        assert_eq!(err.user_message("Failed to submit issue"), "Student ID not found");

        let err = ApiError::Http(502);
        assert_eq!(err.user_message("Failed to submit issue"), "Failed to submit issue");
    }
}
