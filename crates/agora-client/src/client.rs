use crate::dto::{AuthPayload, GraphDto, SearchResults};
use crate::envelope::ApiResponse;
use crate::session::Session;
use agora_core::{
    DebateGraph, DebateId, DebateSummary, EnumConversionError, GraphSource, SourceError, User,
};
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("API error: {0}")]
    Api(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("Invalid enum value: {0}")]
    Conversion(#[from] EnumConversionError),
}

/// Synchronous client for the versioned REST API.
///
/// The session sits behind a lock so the client can be shared with the
/// loader thread as a `GraphSource` while the UI thread logs in or out.
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
    session: RwLock<Session>,
}

impl ApiClient {
    /// `base_url` is the versioned root, e.g. `http://localhost:5000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let agent = ureq::AgentBuilder::new().timeout(DEFAULT_TIMEOUT).build();
        Self {
            base_url,
            agent,
            session: RwLock::new(Session::new()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    fn handle<T: DeserializeOwned>(
        &self,
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<ApiResponse<T>, ClientError> {
        match result {
            Ok(response) => response
                .into_json()
                .map_err(|e| ClientError::Decode(e.to_string())),
            Err(ureq::Error::Status(status, response)) => {
                // Error bodies still use the envelope when the server wrote one.
                let message = response
                    .into_json::<ApiResponse<serde_json::Value>>()
                    .ok()
                    .and_then(|envelope| envelope.error.map(|e| e.message))
                    .unwrap_or_else(|| "request failed".to_string());
                Err(ClientError::Status { status, message })
            }
            Err(err) => Err(ClientError::Transport(err.to_string())),
        }
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ClientError> {
        let mut request = self.agent.get(&self.url(path));
        if let Some(bearer) = self.session.read().bearer() {
            request = request.set("Authorization", &bearer);
        }
        self.handle(request.call())
    }

    fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, ClientError> {
        let mut request = self
            .agent
            .post(&self.url(path))
            .set("Content-Type", "application/json");
        if let Some(bearer) = self.session.read().bearer() {
            request = request.set("Authorization", &bearer);
        }
        self.handle(request.send_json(body))
    }

    // ---- auth ----

    pub fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let payload: AuthPayload = self
            .post(
                "/auth/login",
                &serde_json::json!({ "email": email, "password": password }),
            )?
            .into_data()?;
        self.session.write().set_token(&payload.token);
        Ok(payload.user.into())
    }

    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let payload: AuthPayload = self
            .post(
                "/auth/register",
                &serde_json::json!({
                    "username": username, "email": email, "password": password
                }),
            )?
            .into_data()?;
        self.session.write().set_token(&payload.token);
        Ok(payload.user.into())
    }

    /// Clears the session token. The backend keeps no session state to tear
    /// down beyond the token itself.
    pub fn logout(&self) {
        self.session.write().clear_token();
    }

    pub fn current_user(&self) -> Result<User, ClientError> {
        #[derive(serde::Deserialize)]
        struct Payload {
            user: crate::dto::UserDto,
        }
        let payload: Payload = self.get("/auth/me")?.into_data()?;
        Ok(payload.user.into())
    }

    // ---- debates ----

    pub fn debates(&self) -> Result<Vec<DebateSummary>, ClientError> {
        self.get("/debates")?.into_data()
    }

    pub fn debate(&self, id: &DebateId) -> Result<DebateSummary, ClientError> {
        self.get(&format!("/debates/{id}"))?.into_data()
    }

    pub fn debate_graph(&self, id: &DebateId) -> Result<DebateGraph, ClientError> {
        let dto: GraphDto = self.get(&format!("/debates/{id}/graph"))?.into_data()?;
        Ok(dto.into_graph(id.clone())?)
    }

    pub fn rate_argument(&self, argument_id: &str, score: f32) -> Result<(), ClientError> {
        let _: serde_json::Value = self
            .post(
                &format!("/arguments/{argument_id}/ratings"),
                &serde_json::json!({ "score": score }),
            )?
            .into_data()?;
        Ok(())
    }

    pub fn search(&self, query: &str) -> Result<SearchResults, ClientError> {
        self.get(&format!("/search?query={}", urlencode(query)))?
            .into_data()
    }
}

/// Percent-encode a query-string value. Unreserved characters pass through.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Map a client failure onto the loader's terminal states: HTTP 404 (or an
/// envelope that says so) is `NotFound`, everything else is a load error.
fn to_source_error(err: ClientError, id: &DebateId) -> SourceError {
    match &err {
        ClientError::Status { status: 404, .. } => SourceError::NotFound(id.clone()),
        ClientError::Api(message) if message.to_lowercase().contains("not found") => {
            SourceError::NotFound(id.clone())
        }
        _ => SourceError::Unavailable(err.to_string()),
    }
}

impl GraphSource for ApiClient {
    fn load_graph(&self, id: &DebateId) -> Result<DebateGraph, SourceError> {
        self.debate_graph(id).map_err(|err| {
            tracing::warn!("API graph load for debate {id} failed: {err}");
            to_source_error(err, id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode() {
        assert_eq!(urlencode("remote work"), "remote%20work");
        assert_eq!(urlencode("AI-2024_x.y~z"), "AI-2024_x.y~z");
        assert_eq!(urlencode("50%?"), "50%25%3F");
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/api/v1/");
        assert_eq!(
            client.url("/debates/1/graph"),
            "http://localhost:5000/api/v1/debates/1/graph"
        );
    }

    #[test]
    fn test_not_found_mapping() {
        let id = DebateId::from("9");
        let err = ClientError::Status {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(to_source_error(err, &id), SourceError::NotFound(id.clone()));

        let err = ClientError::Api("Debate Not Found".to_string());
        assert_eq!(to_source_error(err, &id), SourceError::NotFound(id.clone()));

        let err = ClientError::Transport("connection refused".to_string());
        assert!(matches!(
            to_source_error(err, &id),
            SourceError::Unavailable(_)
        ));
    }
}
