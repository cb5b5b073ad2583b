//! Validate-then-send flow shared by the form views.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;

use crate::net::api::ApiError;

/// Why a form submission did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError<E> {
    /// Client-side validation rejected the form; nothing was sent.
    #[error("form has validation errors")]
    Invalid(E),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Send `validated` through `send` only if validation passed.
pub async fn submit<Req, E, R, F, Fut>(validated: Result<Req, E>, send: F) -> Result<R, SubmitError<E>>
where
    F: FnOnce(Req) -> Fut,
    Fut: Future<Output = Result<R, ApiError>>,
{
    let req = validated.map_err(SubmitError::Invalid)?;
    Ok(send(req).await?)
}
