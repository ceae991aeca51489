//! JSON body extractor whose rejection is an `AppError::Validation`, so malformed bodies get the same JSON error shape as every other failure.

use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "rejected request body");
                Err(AppError::Validation(rejection.body_text()))
            }
        }
    }
}
