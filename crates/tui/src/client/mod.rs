use api_types::{
    error::ErrorResponse,
    record::Record,
    summary::{CategorySummary, RecordsTotal},
};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::Result;

/// Outcome of a failed request.
///
/// The record view does not tell these apart; they exist for logging.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not found")]
    NotFound,
    #[error("rejected: {0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            base_url,
            http: reqwest::Client::builder().build()?,
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))
    }

    /// `GET /records`: the full collection in server order.
    pub async fn records_list(&self) -> std::result::Result<Vec<Record>, ClientError> {
        self.get_json("records").await
    }

    /// `POST /records`. The response body is ignored.
    pub async fn record_create(&self, record: &Record) -> std::result::Result<(), ClientError> {
        let res = self
            .http
            .post(self.endpoint("records")?)
            .json(record)
            .send()
            .await?;

        if res.status().is_success() {
            return Ok(());
        }
        Err(error_from_response(res).await)
    }

    pub async fn records_total(&self) -> std::result::Result<RecordsTotal, ClientError> {
        self.get_json("records/total").await
    }

    pub async fn records_summary(&self) -> std::result::Result<CategorySummary, ClientError> {
        self.get_json("records/summary").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, ClientError> {
        let res = self.http.get(self.endpoint(path)?).send().await?;

        if res.status().is_success() {
            return Ok(res.json::<T>().await?);
        }
        Err(error_from_response(res).await)
    }
}

async fn error_from_response(res: Response) -> ClientError {
    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());

    match status.as_u16() {
        404 => ClientError::NotFound,
        400 | 422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        test_support::{closed_port_url, spawn_record_service},
    };

    #[tokio::test]
    async fn create_then_list_round_trips_through_the_service() {
        let (url, _dir) = spawn_record_service().await;
        let client = Client::new(&url).unwrap();

        assert!(client.records_list().await.unwrap().is_empty());

        client
            .record_create(&Record::new("2024-01-01", "food", 1200))
            .await
            .unwrap();
        client
            .record_create(&Record::new("2024-01-02", "food", 300))
            .await
            .unwrap();

        let records = client.records_list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Record::new("2024-01-01", "food", 1200));

        assert_eq!(client.records_total().await.unwrap().total, 1500);
        assert_eq!(client.records_summary().await.unwrap().get("food"), Some(&1500));
    }

    #[tokio::test]
    async fn unknown_path_maps_to_not_found() {
        let (url, _dir) = spawn_record_service().await;
        let client = Client::new(&format!("{url}missing/")).unwrap();

        let err = client.records_list().await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let client = Client::new(&closed_port_url().await).unwrap();

        let err = client.records_list().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Client::new("not a url").unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }
}
