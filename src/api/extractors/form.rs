//! HTML form extractor - Maps form rejections onto the application error.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Form-encoded body whose missing or malformed fields become a 422 page.
///
/// Content rules are not applied here: a submission that deserializes is
/// handed to the handler, which re-renders the form on rule failures.
pub struct HtmlForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for HtmlForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::unprocessable(e.body_text()))?;

        Ok(HtmlForm(value))
    }
}
