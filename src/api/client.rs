//! Typed HTTP client for the tutor API.
//!
//! Authenticated calls take the bearer token as an explicit argument; the
//! client itself holds no credentials.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::ApiError;
use super::types::*;
use crate::session::Bearer;

pub struct TutorClient {
    base_url: String,
    client: Client,
}

impl TutorClient {
    /// Build a client for `base_url`. Trailing slashes are trimmed. `timeout`
    /// of `None` leaves reqwest's default (no overall timeout).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Exchange username/password (form-encoded) for an access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        debug!(url = %self.url("/token"), "Requesting access token");
        let response = self
            .client
            .post(self.url("/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        let body: TokenResponse = check(response).await?.json().await?;
        match body.token_type.as_deref() {
            Some(kind) if !kind.eq_ignore_ascii_case("bearer") => {
                warn!(token_type = kind, "Unexpected token type, sending it as bearer");
            }
            kind => debug!(token_type = kind.unwrap_or("bearer"), "Received access token"),
        }
        Ok(body.access_token)
    }

    /// Create a user. Credentials travel as query parameters.
    ///
    /// Any 2xx yields `Ok`; 201 is distinguished as [`RegisterOutcome::Created`].
    pub async fn register(&self, username: &str, password: &str) -> Result<RegisterOutcome, ApiError> {
        debug!(url = %self.url("/users"), "Registering user");
        let response = self
            .client
            .post(self.url("/users"))
            .query(&[("username", username), ("password", password)])
            .send()
            .await?;
        let status = check(response).await?.status();
        if status == StatusCode::CREATED {
            Ok(RegisterOutcome::Created)
        } else {
            Ok(RegisterOutcome::UnexpectedStatus(status.as_u16()))
        }
    }

    pub async fn ask(&self, bearer: &Bearer, request: &QuestionRequest) -> Result<String, ApiError> {
        let body: AnswerResponse = self.post_json(bearer, "/question", request).await?;
        Ok(body.response)
    }

    pub async fn study_tips(&self, bearer: &Bearer, subject: Subject) -> Result<String, ApiError> {
        let path = format!("/study_tips/{}", subject.as_str());
        let body: StudyTipsResponse = self.get_json(bearer, &path).await?;
        Ok(body.study_tips)
    }

    pub async fn practice(&self, bearer: &Bearer, request: &PracticeRequest) -> Result<String, ApiError> {
        let body: PracticeResponse = self.post_json(bearer, "/practice", request).await?;
        Ok(body.questions)
    }

    pub async fn evaluate(&self, bearer: &Bearer, request: &EvaluationRequest) -> Result<String, ApiError> {
        let body: EvaluationResponse = self.post_json(bearer, "/evaluate", request).await?;
        Ok(body.evaluation)
    }

    pub async fn syllabus(&self, bearer: &Bearer, subject: Subject) -> Result<String, ApiError> {
        let path = format!("/syllabus/{}", subject.as_str());
        let body: SyllabusResponse = self.get_json(bearer, &path).await?;
        Ok(body.syllabus)
    }

    /// Run any tutoring request and return the markdown text it produced.
    pub async fn run(&self, bearer: &Bearer, request: &TutorRequest) -> Result<String, ApiError> {
        match request {
            TutorRequest::Ask(req) => self.ask(bearer, req).await,
            TutorRequest::StudyTips { subject } => self.study_tips(bearer, *subject).await,
            TutorRequest::Practice(req) => self.practice(bearer, req).await,
            TutorRequest::Evaluate(req) => self.evaluate(bearer, req).await,
            TutorRequest::Syllabus { subject } => self.syllabus(bearer, *subject).await,
        }
    }

    async fn post_json<B, T>(&self, bearer: &Bearer, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(url = %self.url(path), "POST");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(bearer.as_str())
            .json(body)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, bearer: &Bearer, path: &str) -> Result<T, ApiError> {
        debug!(url = %self.url(path), "GET");
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(bearer.as_str())
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Map non-success statuses to [`ApiError`], passing successful responses through.
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}
