use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::Report;
use tracing::warn;

/// A request the server could not act on. Renders as `400 Bad Request`.
#[derive(Debug)]
pub struct AppError(Report);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(error = %format!("{:#}", self.0), "rejecting request");
        (StatusCode::BAD_REQUEST, format!("{:#}", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Report>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
