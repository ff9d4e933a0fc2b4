//! Seed execution
//!
//! Authenticates once, then drives the fixture plan through the record
//! poster. Errors fall into two tiers: a fatal authentication failure that
//! ends the run, and recoverable per-record failures that are logged and
//! skipped.

mod auth;
mod driver;
mod poster;

pub use auth::{Authenticator, Credentials};
pub use driver::{FixtureDriver, FixturePlan};
pub use poster::RecordPoster;

use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;
use crate::http::{HttpClient, HttpError};
use crate::models::SeedSummary;
use crate::output::progress;

/// Exit code for a completed run
pub const EXIT_OK: u8 = 0;
/// Exit code when authentication (or setup) fails
pub const EXIT_FATAL: u8 = 1;
/// Exit code for a strict run with failed records
pub const EXIT_PARTIAL: u8 = 2;

/// Seed errors
#[derive(Error, Debug)]
pub enum SeedError {
    /// Aborts the whole run
    #[error("Failed to authenticate: {0}")]
    Fatal(#[source] HttpError),

    /// Affects a single record only
    #[error("{label}: {source}")]
    Recoverable {
        label: String,
        #[source]
        source: HttpError,
    },
}

impl SeedError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, SeedError::Fatal(_))
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_fatal() {
            EXIT_FATAL
        } else {
            EXIT_OK
        }
    }
}

/// Run the full seed against the configured CMS
pub async fn run(config: &AppConfig, plan: &FixturePlan) -> Result<SeedSummary, SeedError> {
    progress("🌱 Starting CMS seed with authentication...");
    info!("Seeding {} records into {}", plan.record_count(), config.base_url);

    let client = HttpClient::new(&config.base_url, config.timeout_secs).map_err(SeedError::Fatal)?;
    let token = Authenticator::new(&client)
        .login(&config.credentials())
        .await?;

    let poster = RecordPoster::new(client.with_bearer(token));
    Ok(FixtureDriver::new(&poster).run(plan).await)
}

/// Map a run result to the process exit code.
///
/// Record failures only change the exit code in strict mode.
pub fn exit_code(result: &Result<SeedSummary, SeedError>, strict: bool) -> u8 {
    match result {
        Err(e) => e.exit_code(),
        Ok(summary) if strict && summary.has_failures() => EXIT_PARTIAL,
        Ok(_) => EXIT_OK,
    }
}

#[cfg(test)]
mod tests {
    use super::auth::LOGIN_PATH;
    use super::*;
    use crate::models::{Collection, RecordId, RecordStatus};
    use serde_json::{json, Value};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer) -> AppConfig {
        AppConfig {
            base_url: server.uri(),
            ..AppConfig::default()
        }
    }

    async fn mount_login(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"token": "abc123"}})),
            )
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_collection(server: &MockServer, collection: Collection, status: u16, id: i64) {
        Mock::given(method("POST"))
            .and(path(collection.path()))
            .and(header("authorization", "Bearer abc123"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({"data": {"id": id}})))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_full_seed_links_game_to_developer() {
        let server = MockServer::start().await;
        mount_login(&server).await;

        for (i, record) in crate::fixtures::genres().records.iter().enumerate() {
            Mock::given(method("POST"))
                .and(path("/api/genres"))
                .and(body_partial_json(json!({"data": {"slug": record.payload["slug"]}})))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({"data": {"id": i as i64 + 1}})),
                )
                .expect(1)
                .mount(&server)
                .await;
        }
        mount_collection(&server, Collection::Tags, 200, 100).await;
        mount_collection(&server, Collection::Engines, 200, 200).await;
        mount_collection(&server, Collection::Platforms, 200, 300).await;
        mount_collection(&server, Collection::Developers, 200, 42).await;
        mount_collection(&server, Collection::Games, 200, 7).await;

        let result = run(&config(&server), &FixturePlan::default()).await;
        assert_eq!(exit_code(&result, false), EXIT_OK);

        let summary = result.unwrap();
        assert_eq!(summary.total, 20);
        assert_eq!(summary.created, 20);

        let genre_ids: Vec<_> = summary
            .for_collection(Collection::Genres)
            .filter_map(|o| o.id().cloned())
            .collect();
        assert_eq!(genre_ids, (1..=5).map(RecordId::Number).collect::<Vec<_>>());

        let requests = server.received_requests().await.unwrap();
        let paths: Vec<_> = requests.iter().map(|r| r.url.path().to_string()).collect();
        let mut expected = vec![LOGIN_PATH.to_string()];
        for (collection, count) in [
            (Collection::Genres, 5),
            (Collection::Tags, 5),
            (Collection::Engines, 4),
            (Collection::Platforms, 4),
            (Collection::Developers, 1),
            (Collection::Games, 1),
        ] {
            expected.extend(std::iter::repeat(collection.path()).take(count));
        }
        assert_eq!(paths, expected);

        let game: Value = requests.last().unwrap().body_json().unwrap();
        assert_eq!(game["data"]["developer"], 42);
        assert_eq!(game["data"]["title"], "Sample Game");
    }

    #[tokio::test]
    async fn test_developer_failure_skips_game() {
        let server = MockServer::start().await;
        mount_login(&server).await;
        mount_collection(&server, Collection::Genres, 200, 1).await;
        mount_collection(&server, Collection::Tags, 200, 2).await;
        mount_collection(&server, Collection::Engines, 200, 3).await;
        mount_collection(&server, Collection::Platforms, 200, 4).await;
        mount_collection(&server, Collection::Developers, 500, 0).await;

        Mock::given(method("POST"))
            .and(path("/api/games"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = run(&config(&server), &FixturePlan::default()).await;
        assert_eq!(exit_code(&result, false), EXIT_OK);
        assert_eq!(exit_code(&result, true), EXIT_PARTIAL);

        let summary = result.unwrap();
        let developer = summary
            .for_collection(Collection::Developers)
            .next()
            .unwrap();
        assert_eq!(developer.status, RecordStatus::Failed);
        let game = summary.for_collection(Collection::Games).next().unwrap();
        assert_eq!(game.status, RecordStatus::Skipped);

        let requests = server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| r.url.path() != "/api/games"));
    }

    #[tokio::test]
    async fn test_bad_credentials_post_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(LOGIN_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"status": 401, "message": "Invalid credentials"}
            })))
            .mount(&server)
            .await;

        let result = run(&config(&server), &FixturePlan::default()).await;
        assert!(matches!(result, Err(SeedError::Fatal(_))));
        assert_eq!(exit_code(&result, false), EXIT_FATAL);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.path(), LOGIN_PATH);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fatal() {
        let config = AppConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: Some(5),
            ..AppConfig::default()
        };

        let result = run(&config, &FixturePlan::default()).await;
        assert_eq!(exit_code(&result, false), EXIT_FATAL);
    }

    #[test]
    fn test_recoverable_exit_code() {
        let err = SeedError::Recoverable {
            label: "RPG".to_string(),
            source: HttpError::MissingField("/data/id"),
        };
        assert!(!err.is_fatal());
        assert_eq!(err.exit_code(), EXIT_OK);
        assert_eq!(err.to_string(), "RPG: Missing field `/data/id` in response");
    }
}
