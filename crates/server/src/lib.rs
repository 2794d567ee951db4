use api_types::error::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};

pub use server::{run_with_listener, spawn_with_listener};
pub use store::{RecordStore, StoreError};

mod records;
mod server;
mod store;

#[derive(Debug)]
pub enum ServerError {
    Store(StoreError),
    BadRequest(String),
    NotFound,
    /// A sum over stored amounts left the `i64` range.
    Overflow,
}

fn status_for_error(err: &ServerError) -> StatusCode {
    match err {
        ServerError::Store(_) | ServerError::Overflow => StatusCode::INTERNAL_SERVER_ERROR,
        ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        ServerError::NotFound => StatusCode::NOT_FOUND,
    }
}

fn message_for_error(err: ServerError) -> String {
    match err {
        ServerError::Store(store_err) => {
            tracing::error!("storage error: {store_err}");
            "internal server error".to_string()
        }
        ServerError::BadRequest(message) => message,
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::Overflow => {
            tracing::error!("sum of stored amounts overflows i64");
            "amount sum out of range".to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_error(&self);
        let error = message_for_error(self);

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_maps_to_500() {
        let err = std::io::Error::other("disk on fire");
        let res = ServerError::from(StoreError::from(err)).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let res = ServerError::BadRequest("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = ServerError::NotFound.into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn overflow_maps_to_500() {
        let res = ServerError::Overflow.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
