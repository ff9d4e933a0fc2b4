//! Record posting
//!
//! Submits one fixture record to one collection. Failures never escape: they
//! are logged and folded into the returned outcome.

use tracing::warn;

use super::SeedError;
use crate::http::{require_field, HttpClient, HttpError};
use crate::models::{Collection, FixtureRecord, RecordId, RecordOutcome};
use crate::output::progress;

/// Posts fixture records with an authenticated client
pub struct RecordPoster {
    client: HttpClient,
}

impl RecordPoster {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Post one record and report it.
    ///
    /// The outcome carries the created id; it is absent whenever the request
    /// failed or the response had no `data.id`.
    pub async fn post(&self, collection: Collection, record: &FixtureRecord) -> RecordOutcome {
        match self.try_post(collection, record).await {
            Ok(id) => {
                progress(format_args!("  ✓ {}", record.label));
                RecordOutcome::created(collection, &record.label, id)
            }
            Err(source) => {
                let message = source.to_string();
                let err = SeedError::Recoverable {
                    label: record.label.clone(),
                    source,
                };
                progress(format_args!("  ✗ {err}"));
                warn!("Failed to create {} record: {}", collection, err);
                RecordOutcome::failed(collection, &record.label, message)
            }
        }
    }

    async fn try_post(
        &self,
        collection: Collection,
        record: &FixtureRecord,
    ) -> Result<RecordId, HttpError> {
        let json = self
            .client
            .post_json(&collection.path(), &record.envelope())
            .await?
            .into_json()?;

        let id = require_field(&json, "/data/id")?;
        RecordId::from_json(id).ok_or(HttpError::MissingField("/data/id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordStatus;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn poster(server: &MockServer) -> RecordPoster {
        let client = HttpClient::new(server.uri(), Some(5))
            .unwrap()
            .with_bearer("abc123");
        RecordPoster::new(client)
    }

    fn genre() -> FixtureRecord {
        FixtureRecord::new("RPG", json!({"name": "RPG", "slug": "rpg"}))
    }

    #[tokio::test]
    async fn test_post_returns_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/genres"))
            .and(header("authorization", "Bearer abc123"))
            .and(body_json(json!({"data": {"name": "RPG", "slug": "rpg"}})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"id": 1, "name": "RPG"}, "meta": {}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let outcome = poster(&server)
            .await
            .post(Collection::Genres, &genre())
            .await;

        assert_eq!(outcome.status, RecordStatus::Created);
        assert_eq!(outcome.id(), Some(&RecordId::Number(1)));
        assert_eq!(outcome.label, "RPG");
    }

    #[tokio::test]
    async fn test_post_missing_id_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/genres"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"name": "RPG"}})))
            .mount(&server)
            .await;

        let outcome = poster(&server)
            .await
            .post(Collection::Genres, &genre())
            .await;

        assert_eq!(outcome.status, RecordStatus::Failed);
        assert!(outcome.id().is_none());
        assert_eq!(
            outcome.message.as_deref(),
            Some("Missing field `/data/id` in response")
        );
    }

    #[tokio::test]
    async fn test_post_null_data_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/genres"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
            .mount(&server)
            .await;

        let outcome = poster(&server)
            .await
            .post(Collection::Genres, &genre())
            .await;

        assert!(outcome.id().is_none());
    }

    #[tokio::test]
    async fn test_post_server_error_is_recoverable() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/developers"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "data": null,
                "error": {"status": 500, "message": "Internal Server Error"}
            })))
            .mount(&server)
            .await;

        let record = FixtureRecord::new("Notum Studio", json!({"name": "Notum Studio"}));
        let outcome = poster(&server)
            .await
            .post(Collection::Developers, &record)
            .await;

        assert_eq!(outcome.status, RecordStatus::Failed);
        assert_eq!(
            outcome.message.as_deref(),
            Some("HTTP 500: Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_post_malformed_json_is_recoverable() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/genres"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let outcome = poster(&server)
            .await
            .post(Collection::Genres, &genre())
            .await;

        assert_eq!(outcome.status, RecordStatus::Failed);
        assert!(outcome
            .message
            .unwrap()
            .starts_with("Invalid JSON response"));
    }

    #[tokio::test]
    async fn test_post_network_error_is_recoverable() {
        let client = HttpClient::new("http://127.0.0.1:1", Some(5))
            .unwrap()
            .with_bearer("abc123");
        let outcome = RecordPoster::new(client)
            .post(Collection::Genres, &genre())
            .await;

        assert_eq!(outcome.status, RecordStatus::Failed);
        assert!(outcome.id().is_none());
    }
}
