//! Async REST client for the remote habit API.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::StoreError;
use crate::habit::{Habit, HabitDraft};
use crate::session::{AuthSession, UserProfile};
use crate::storage::Config;
use crate::store::types::{ApiEnvelope, CompletionBody, NewHabitRecord};

/// Client for the remote habit store.
///
/// Read routes work unauthenticated; mutations carry the session's bearer
/// token. The client holds no mutable state and can be shared freely.
#[derive(Debug)]
pub struct HabitStore {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HabitStore {
    /// Build a client against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url).map_err(|e| StoreError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidBaseUrl {
                url: base_url.to_string(),
                message: "URL cannot be a base".to_string(),
            });
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Build a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )
    }

    /// Attach the session's bearer token for mutating routes.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Client for a signed-in session: the configured base URL plus the
    /// session's bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the token cannot be
    /// read from the keyring.
    pub fn for_session(config: &Config, session: &AuthSession) -> crate::error::Result<Self> {
        let token = session.token()?;
        Ok(Self::from_config(config)?.with_token(token))
    }

    /// `GET /my-habits/{email}` -- habits owned by `email`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on transport failure or an error response.
    pub async fn list_habits_by_owner(&self, email: &str) -> Result<Vec<Habit>, StoreError> {
        let url = self.url(&["my-habits", email]);
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// `GET /habit` -- the public feed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on transport failure or an error response.
    pub async fn list_public_habits(&self) -> Result<Vec<Habit>, StoreError> {
        let url = self.url(&["habit"]);
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// `GET /habit/{id}` -- one habit.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on transport failure or an error response.
    pub async fn get_habit(&self, id: &str) -> Result<Habit, StoreError> {
        let url = self.url(&["habit", id]);
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// `POST /habit` -- create a habit owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] without a token, otherwise a
    /// [`StoreError`] on transport failure or an error response.
    pub async fn create_habit(
        &self,
        draft: &HabitDraft,
        owner: &UserProfile,
    ) -> Result<Habit, StoreError> {
        let token = self.token.as_ref().ok_or(StoreError::Unauthorized)?;
        let record = NewHabitRecord::new(draft, owner, Utc::now());
        let url = self.url(&["habit"]);
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&record)
            .send()
            .await?;
        decode(response).await
    }

    /// `PUT /habit/{id}` -- replace a habit's mutable fields.
    ///
    /// The full record (minus its id) is sent, matching the store's
    /// replace semantics.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] without a token, otherwise a
    /// [`StoreError`] on transport failure or an error response.
    pub async fn update_habit(&self, habit: &Habit) -> Result<Habit, StoreError> {
        let token = self.token.as_ref().ok_or(StoreError::Unauthorized)?;
        let mut body = serde_json::to_value(habit)?;
        if let Some(fields) = body.as_object_mut() {
            fields.remove("_id");
        }
        let url = self.url(&["habit", &habit.id]);
        let response = self
            .http
            .put(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    /// `DELETE /habit/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] without a token, otherwise a
    /// [`StoreError`] on transport failure or an error response.
    pub async fn delete_habit(&self, id: &str) -> Result<(), StoreError> {
        let token = self.token.as_ref().ok_or(StoreError::Unauthorized)?;
        let url = self.url(&["habit", id]);
        let response = self.http.delete(url).bearer_auth(token).send().await?;
        acknowledge(response).await
    }

    /// `PUT /habit/{id}/complete` -- record a completion for `date`.
    ///
    /// The store upserts the date into the habit's completion set, so
    /// recording an already-present date succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unauthorized`] without a token, otherwise a
    /// [`StoreError`] on transport failure or an error response.
    pub async fn record_completion(&self, id: &str, date: NaiveDate) -> Result<Habit, StoreError> {
        let token = self.token.as_ref().ok_or(StoreError::Unauthorized)?;
        let body = CompletionBody {
            date: date.format("%Y-%m-%d").to_string(),
        };
        let url = self.url(&["habit", id, "complete"]);
        let response = self
            .http
            .put(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Decode an envelope response into its result payload.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
    let envelope = check(response).await?;
    envelope.result.ok_or(StoreError::MissingResult)
}

/// Decode an envelope response that carries no payload of interest.
async fn acknowledge(response: reqwest::Response) -> Result<(), StoreError> {
    check::<serde_json::Value>(response).await.map(|_| ())
}

async fn check<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiEnvelope<T>, StoreError> {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(StoreError::Unauthorized);
    }
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(StoreError::Api {
            status: status.as_u16(),
            message,
        });
    }
    let envelope: ApiEnvelope<T> = response.json().await?;
    if !envelope.success {
        return Err(StoreError::Api {
            status: status.as_u16(),
            message: envelope
                .message
                .unwrap_or_else(|| "request rejected by the store".to_string()),
        });
    }
    Ok(envelope)
}
