use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use axum::Json;
use crate::error::AppError;

/// `Json<T>` whose rejections render as `AppError::Validation` instead of
/// axum's plain-text 4xx.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ValidJson(value))
    }
}
