// API client module: a small blocking HTTP client for the NoteKeeper
// service. One `NoteClient` holds one session: the base URL plus the
// bearer token obtained from `authenticate`.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::Method;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;

const AUTH_PATH: &str = "/api/v1/auth";
const NOTES_PATH: &str = "/api/v1/notes";

/// Login request payload.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

/// Response from the auth endpoint. `token` stays optional so a 2xx body
/// without one is reported as `MissingToken` instead of a decode error.
#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    pub token: Option<String>,
}

/// Payload for creating a note.
#[derive(Serialize, Deserialize, Debug)]
pub struct NoteRequest {
    pub title: String,
    pub content: String,
}

/// A note as returned by the service. Any field may be missing; the
/// report substitutes defaults at display time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Note {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// One outgoing request, independent of the HTTP library that sends it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and hands back the raw status and body. Implementations
/// return `Err` only for connection-level failures; HTTP error statuses
/// come back as ordinary responses.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a reqwest blocking client.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut req = self.client.request(request.method, &request.url);
        if let Some(token) = &request.bearer {
            req = req.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }
        let res = req.send()?;
        let status = res.status().as_u16();
        let body = res.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Client for the NoteKeeper API. Holds the transport, the base URL of the
/// service and the bearer token once `authenticate` has succeeded.
pub struct NoteClient<T = HttpTransport> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl NoteClient<HttpTransport> {
    /// Create a client that talks HTTP to `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_transport(base_url, HttpTransport::new()?))
    }
}

impl<T: Transport> NoteClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        NoteClient {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns whether a token is present in the client.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// POST the credentials to the auth endpoint and keep the returned
    /// token. The session stays unauthenticated on any failure.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        let payload = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = HttpRequest {
            method: Method::POST,
            url: self.url(AUTH_PATH),
            bearer: None,
            body: Some(serde_json::to_value(&payload)?),
        };

        let result = self
            .execute::<AuthResponse>(request)
            .and_then(|auth| match auth.token {
                Some(token) if !token.is_empty() => Ok(token),
                _ => Err(ApiError::MissingToken),
            });

        match result {
            Ok(token) => {
                self.token = Some(token);
                info!("Authentication successful for user: {}", username);
                Ok(())
            }
            Err(e) => {
                warn!("Authentication failed: {}", e);
                Err(e)
            }
        }
    }

    /// Fetch every note visible to the authenticated user.
    pub fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let request = self.authorized(Method::GET, NOTES_PATH.to_string(), None)?;
        match self.execute::<Vec<Note>>(request) {
            Ok(notes) => {
                info!("Successfully retrieved {} notes", notes.len());
                Ok(notes)
            }
            Err(e) => {
                warn!("Failed to retrieve notes: {}", e);
                Err(e)
            }
        }
    }

    /// Fetch a single note by id.
    pub fn get_note(&self, id: i64) -> Result<Note, ApiError> {
        let request = self.authorized(Method::GET, format!("{}/{}", NOTES_PATH, id), None)?;
        self.execute::<Note>(request).map_err(|e| {
            warn!("Failed to retrieve note {}: {}", id, e);
            e
        })
    }

    /// Create a note and return the server's copy, including its id.
    pub fn create_note(&self, title: &str, content: &str) -> Result<Note, ApiError> {
        let payload = NoteRequest {
            title: title.to_string(),
            content: content.to_string(),
        };
        let body = serde_json::to_value(&payload)?;
        let request = self.authorized(Method::POST, NOTES_PATH.to_string(), Some(body))?;
        match self.execute::<Note>(request) {
            Ok(note) => {
                match note.id {
                    Some(id) => info!("Created note with ID: {}", id),
                    None => info!("Created note without an ID in the response"),
                }
                Ok(note)
            }
            Err(e) => {
                warn!("Failed to create note: {}", e);
                Err(e)
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a bearer-authenticated request, or fail before anything is
    /// sent when no token is held.
    fn authorized(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
    ) -> Result<HttpRequest, ApiError> {
        let Some(token) = &self.token else {
            warn!("No authentication token available. Please authenticate first.");
            return Err(ApiError::NotAuthenticated);
        };
        Ok(HttpRequest {
            method,
            url: self.url(&path),
            bearer: Some(token.clone()),
            body,
        })
    }

    fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        debug!(method = %request.method, url = %request.url, "Sending request");
        let res = self.transport.send(request)?;
        if !res.is_success() {
            return Err(ApiError::from_status(res.status, &res.body));
        }
        Ok(serde_json::from_str(&res.body)?)
    }
}
