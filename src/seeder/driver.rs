//! Fixture driver
//!
//! Walks the fixture plan in order and feeds every record through the
//! [`RecordPoster`].

use chrono::Utc;
use std::time::Instant;
use tracing::info;

use super::RecordPoster;
use crate::fixtures;
use crate::output::progress;
use crate::models::{
    Collection, FixtureBatch, FixtureRecord, RecordId, RecordOutcome, SeedSummary,
};

/// Builds the game record once the developer id is known
pub type GameBuilder = fn(&RecordId) -> FixtureRecord;

/// Ordered fixture plan: independent taxonomies first, then the
/// developer, then the game that depends on it
pub struct FixturePlan {
    pub taxonomies: Vec<FixtureBatch>,
    pub developer: FixtureRecord,
    pub game_label: String,
    pub game: GameBuilder,
}

impl FixturePlan {
    /// Number of records the plan would create
    pub fn record_count(&self) -> usize {
        self.taxonomies.iter().map(FixtureBatch::len).sum::<usize>() + 2
    }
}

impl Default for FixturePlan {
    fn default() -> Self {
        Self {
            taxonomies: fixtures::taxonomy_batches(),
            developer: fixtures::developer(),
            game_label: fixtures::SAMPLE_GAME_LABEL.to_string(),
            game: fixtures::sample_game,
        }
    }
}

/// Runs a fixture plan through a poster, strictly one request at a time
pub struct FixtureDriver<'a> {
    poster: &'a RecordPoster,
}

impl<'a> FixtureDriver<'a> {
    pub fn new(poster: &'a RecordPoster) -> Self {
        Self { poster }
    }

    pub async fn run(&self, plan: &FixturePlan) -> SeedSummary {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(plan.record_count());

        for batch in plan.taxonomies.iter().filter(|b| !b.is_empty()) {
            progress(format_args!("📦 Seeding {}...", batch.title));
            for record in &batch.records {
                outcomes.push(self.poster.post(batch.collection, record).await);
            }
        }

        progress("📦 Seeding developer...");
        let developer = self
            .poster
            .post(Collection::Developers, &plan.developer)
            .await;
        let developer_id: Option<RecordId> = developer.id().cloned();
        outcomes.push(developer);

        match developer_id {
            Some(id) => {
                progress("📦 Seeding sample game...");
                let game = (plan.game)(&id);
                outcomes.push(self.poster.post(Collection::Games, &game).await);
            }
            None => {
                info!("Skipping {}: developer was not created", plan.game_label);
                outcomes.push(RecordOutcome::skipped(
                    Collection::Games,
                    &plan.game_label,
                    "developer was not created",
                ));
            }
        }

        progress("✅ Seed completed!");

        let summary = SeedSummary::new(started_at, start.elapsed().as_millis() as u64, outcomes);
        info!("{}", summary);
        summary
    }
}
