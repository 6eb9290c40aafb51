//! Request details exposed to templates as `request`.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, Method, Uri},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageRequest {
    pub path: String,
    pub method: String,
}

impl PageRequest {
    pub fn new(method: &Method, uri: &Uri) -> Self {
        Self {
            path: uri.path().to_string(),
            method: method.to_string(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new(&parts.method, &parts.uri))
    }
}
