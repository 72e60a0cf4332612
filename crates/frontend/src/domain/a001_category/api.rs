//! Category API - transport layer
//!
//! `CategoryApi` is the seam the form talks to; `HttpCategoryApi` is the
//! browser implementation over `gloo-net`.

use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{
    Category, CategoryDto, CategoryId, CreateCategoryResponse,
};
use contracts::domain::common::AggregateId;
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api_utils::{api_base, join_url};

/// Shown when the request never got a response
pub const CONNECTIVITY_MESSAGE: &str = "something went wrong, please check your connection!";
/// Shown when the server answered but the operation did not go through
pub const REJECTION_MESSAGE: &str = "Request wasn't sent, please check your data!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No HTTP response was received
    #[error("no response from server: {0}")]
    Connectivity(String),
    #[error("server rejected the request with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Connectivity(_))
    }

    /// Generic text for the form; details only go to the log
    pub fn user_message(&self) -> &'static str {
        if self.is_connectivity() {
            CONNECTIVITY_MESSAGE
        } else {
            REJECTION_MESSAGE
        }
    }
}

#[async_trait(?Send)]
pub trait CategoryApi {
    /// `POST /subcat`
    async fn create_category(&self, dto: &CategoryDto) -> Result<Category, ApiError>;

    /// `PUT /subcat/{id}`
    async fn update_category(
        &self,
        id: &CategoryId,
        dto: &CategoryDto,
    ) -> Result<Category, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpCategoryApi {
    base_url: String,
}

impl HttpCategoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the API host resolved from the build config or window location
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    pub fn collection_url(&self) -> String {
        join_url(&self.base_url, "/subcat")
    }

    pub fn item_url(&self, id: &CategoryId) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(&id.as_string()))
    }
}

#[async_trait(?Send)]
impl CategoryApi for HttpCategoryApi {
    async fn create_category(&self, dto: &CategoryDto) -> Result<Category, ApiError> {
        let response = Request::post(&self.collection_url())
            .json(dto)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        let created: CreateCategoryResponse = ensure_ok(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(created.subcategory)
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        dto: &CategoryDto,
    ) -> Result<Category, ApiError> {
        let response = Request::put(&self.item_url(id))
            .json(dto)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Connectivity(e.to_string()))?;

        ensure_ok(response)
            .await?
            .json::<Category>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_status(status, body)?;
    Ok(response)
}

/// Any answered request outside 2xx is a rejection
pub fn classify_status(status: u16, body: String) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let api = HttpCategoryApi::new("https://api.example.com/");
        assert_eq!(api.collection_url(), "https://api.example.com/subcat");
        assert_eq!(
            api.item_url(&CategoryId::new("42")),
            "https://api.example.com/subcat/42"
        );
        assert_eq!(
            api.item_url(&CategoryId::new("a/b c")),
            "https://api.example.com/subcat/a%2Fb%20c"
        );
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200, String::new()), Ok(()));
        assert_eq!(classify_status(204, String::new()), Ok(()));
        for status in [301, 404, 422, 500] {
            let err = classify_status(status, "nope".into()).unwrap_err();
            assert_eq!(
                err,
                ApiError::Rejected {
                    status,
                    body: "nope".into()
                }
            );
            assert_eq!(err.user_message(), REJECTION_MESSAGE);
        }
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::Connectivity("fetch failed".into()).user_message(),
            CONNECTIVITY_MESSAGE
        );
        for err in [
            ApiError::Rejected {
                status: 422,
                body: "bad".into(),
            },
            ApiError::Decode("eof".into()),
            ApiError::Encode("nan".into()),
        ] {
            assert!(!err.is_connectivity());
            assert_eq!(err.user_message(), REJECTION_MESSAGE);
        }
    }
}
