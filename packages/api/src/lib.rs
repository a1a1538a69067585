//! # API crate — the client facade for the Goal Achiever backend
//!
//! Every screen talks to the backend through [`ApiClient`]. The facade is grouped the
//! same way the backend's routers are:
//!
//! | Group | Accessor | Operations |
//! |-------|----------|------------|
//! | Auth | [`ApiClient::auth`] | `login`, `register`, `logout` |
//! | Goals | [`ApiClient::goals`] | `list`, `create`, `get` |
//! | Plans | [`ApiClient::plans`] | `get_by_date`, `notes`, `add_note`, `mark_complete` |
//! | Chat | [`ApiClient::chat`] | `send`, `history`, `sessions` |
//!
//! ## Contract
//!
//! - Each call issues exactly one HTTP request. There are no retries, no caching and
//!   no request deduplication.
//! - When the [`SessionStore`] holds a credential it is attached as
//!   `Authorization: Bearer <token>`.
//! - Failures come back as [`ApiError`]. A 401 becomes [`ApiError::Unauthorized`] so
//!   the UI can tear the session down; the facade itself never clears it except on
//!   [`AuthApi::logout`].
//! - "Nothing there" is not an error: a day without a plan is `Ok(None)` and a user
//!   without goals gets an empty list.
//! - `login` and `register` persist the credential and the user before returning.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types (goals, plans, notes, chat) and the auth response |
//! | [`error`] | [`ApiError`] and server detail extraction |

use chrono::NaiveDate;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub mod error;
pub mod models;

pub use error::ApiError;
pub use models::{
    AuthResponse, ChatHistory, ChatMessage, ChatReply, ChatSessionSummary, DayPlan, Focus, Goal,
    NewGoal, Note, PlanContent, PlanSchema, Role,
};
pub use store::{Credential, KeyValueStore, SessionStore, User};

use models::chat::ChatRequest;
use models::plan::NoteRequest;
use models::user::CredentialsRequest;

/// Handle to the backend. Cheap to clone: the HTTP connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: &str, session: SessionStore<S>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, session)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str, session: SessionStore<S>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn auth(&self) -> AuthApi<'_, S> {
        AuthApi { client: self }
    }

    pub fn goals(&self) -> GoalsApi<'_, S> {
        GoalsApi { client: self }
    }

    pub fn plans(&self) -> PlansApi<'_, S> {
        PlansApi { client: self }
    }

    pub fn chat(&self) -> ChatApi<'_, S> {
        ChatApi { client: self }
    }

    /// Start a request, attaching the stored credential when there is one.
    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        Ok(match self.session.credential().await? {
            Some(credential) => builder.bearer_auth(credential.as_str()),
            None => builder,
        })
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = builder.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::from_status(
                status.as_u16(),
                &String::from_utf8_lossy(&bytes),
            ));
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like [`send`](Self::send) but a 404 is the empty state.
    async fn send_optional<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        match self.send(builder).await {
            Ok(value) => Ok(Some(value)),
            Err(ApiError::Server { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Send and ignore any response body.
    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let resp = builder.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}

pub struct AuthApi<'a, S> {
    client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> AuthApi<'_, S> {
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let req = self
            .client
            .request(Method::POST, "/auth/login")
            .await?
            .json(&CredentialsRequest { email, password });
        let resp: AuthResponse = self.client.send(req).await?;
        self.persist(resp).await
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let req = self
            .client
            .request(Method::POST, "/auth/register")
            .await?
            .json(&CredentialsRequest { email, password });
        let resp: AuthResponse = self.client.send(req).await?;
        self.persist(resp).await
    }

    /// Forget the session on this device. The backend keeps no session to end.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.session.clear().await?;
        info!("signed out");
        Ok(())
    }

    async fn persist(&self, resp: AuthResponse) -> Result<User, ApiError> {
        self.client
            .session
            .save(&resp.access_token, &resp.user)
            .await?;
        info!(user = %resp.user.email, "signed in");
        Ok(resp.user)
    }
}

pub struct GoalsApi<'a, S> {
    client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> GoalsApi<'_, S> {
    /// All goals of the signed-in user, newest first.
    pub async fn list(&self) -> Result<Vec<Goal>, ApiError> {
        let req = self.client.request(Method::GET, "/goals").await?;
        self.client.send(req).await
    }

    pub async fn create(&self, goal: &NewGoal) -> Result<Goal, ApiError> {
        let req = self.client.request(Method::POST, "/goals").await?.json(goal);
        let created: Goal = self.client.send(req).await?;
        info!(goal = %created.id, days = created.total_days, "goal created");
        Ok(created)
    }

    /// Look a goal up by id. The backend has no single-goal route, so this goes
    /// through the list.
    pub async fn get(&self, goal_id: &str) -> Result<Option<Goal>, ApiError> {
        Ok(self.list().await?.into_iter().find(|g| g.id == goal_id))
    }
}

pub struct PlansApi<'a, S> {
    client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> PlansApi<'_, S> {
    /// The plan scheduled on `date`, or `None` when that day has no plan.
    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Option<DayPlan>, ApiError> {
        let path = format!("/plans/date/{}/dynamic", date.format("%Y-%m-%d"));
        let req = self.client.request(Method::GET, &path).await?;
        self.client.send_optional(req).await
    }

    pub async fn notes(&self, plan_id: &str) -> Result<Vec<Note>, ApiError> {
        let path = format!("/plans/{plan_id}/notes");
        let req = self.client.request(Method::GET, &path).await?;
        self.client.send(req).await
    }

    pub async fn add_note(&self, plan_id: &str, content: &str) -> Result<Note, ApiError> {
        let path = format!("/plans/{plan_id}/notes");
        let req = self
            .client
            .request(Method::POST, &path)
            .await?
            .json(&NoteRequest { content });
        self.client.send(req).await
    }

    pub async fn mark_complete(&self, plan_id: &str) -> Result<(), ApiError> {
        let path = format!("/plans/{plan_id}/complete");
        let req = self.client.request(Method::POST, &path).await?;
        self.client.send_empty(req).await?;
        info!(plan = %plan_id, "plan completed");
        Ok(())
    }
}

pub struct ChatApi<'a, S> {
    client: &'a ApiClient<S>,
}

impl<S: KeyValueStore> ChatApi<'_, S> {
    pub async fn send(
        &self,
        message: &str,
        session_id: Option<&str>,
        topic: Option<&str>,
    ) -> Result<ChatReply, ApiError> {
        let req = self
            .client
            .request(Method::POST, "/chat")
            .await?
            .json(&ChatRequest {
                message,
                session_id,
                context_topic: topic,
            });
        self.client.send(req).await
    }

    pub async fn history(&self, session_id: &str) -> Result<ChatHistory, ApiError> {
        let path = format!("/chat/history/{session_id}");
        let req = self.client.request(Method::GET, &path).await?;
        self.client.send(req).await
    }

    /// Recent conversations, most recently active first.
    pub async fn sessions(&self) -> Result<Vec<ChatSessionSummary>, ApiError> {
        let req = self.client.request(Method::GET, "/chat/sessions").await?;
        self.client.send(req).await
    }
}
