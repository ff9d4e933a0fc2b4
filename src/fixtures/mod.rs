//! Built-in fixture data
//!
//! The taxonomy batches, developer profile and sample game that a fresh CMS
//! instance is populated with. Batch and record order here is the order in
//! which records are posted.

use serde_json::json;

use crate::models::{Collection, FixtureBatch, FixtureRecord, RecordId};

/// Label of the developer record
pub const DEVELOPER_LABEL: &str = "Notum Studio";

/// Label of the sample game record
pub const SAMPLE_GAME_LABEL: &str = "Sample Game";

/// Release date stamped on the sample game
pub const SAMPLE_GAME_RELEASE_DATE: &str = "2025-01-29";

fn named(name: &str, slug: &str) -> FixtureRecord {
    FixtureRecord::new(name, json!({ "name": name, "slug": slug }))
}

fn tag(name: &str, slug: &str, is_explicit: bool) -> FixtureRecord {
    FixtureRecord::new(
        name,
        json!({ "name": name, "slug": slug, "is_explicit": is_explicit }),
    )
}

pub fn genres() -> FixtureBatch {
    FixtureBatch::new("genres", Collection::Genres)
        .record(named("RPG", "rpg"))
        .record(named("Visual Novel", "visual-novel"))
        .record(named("Dating Sim", "dating-sim"))
        .record(named("Sandbox", "sandbox"))
        .record(named("Management", "management"))
}

pub fn tags() -> FixtureBatch {
    FixtureBatch::new("tags", Collection::Tags)
        .record(tag("Horror", "horror", true))
        .record(tag("Violence", "violence", true))
        .record(tag("Dark Themes", "dark-themes", true))
        .record(tag("Strong Language", "strong-language", true))
        .record(tag("Male Protagonist", "male-protagonist", false))
}

pub fn engines() -> FixtureBatch {
    FixtureBatch::new("engines", Collection::Engines)
        .record(named("Ren'Py", "renpy"))
        .record(named("Unity", "unity"))
        .record(named("RPG Maker", "rpg-maker"))
        .record(named("Unreal Engine", "unreal-engine"))
}

pub fn platforms() -> FixtureBatch {
    FixtureBatch::new("platforms", Collection::Platforms)
        .record(named("Windows", "windows"))
        .record(named("Mac", "mac"))
        .record(named("Linux", "linux"))
        .record(named("Android", "android"))
}

/// Independent taxonomy batches, in posting order
pub fn taxonomy_batches() -> Vec<FixtureBatch> {
    vec![genres(), tags(), engines(), platforms()]
}

pub fn developer() -> FixtureRecord {
    FixtureRecord::new(
        DEVELOPER_LABEL,
        json!({
            "name": DEVELOPER_LABEL,
            "slug": "notum-studio",
            "patreon_link": "https://patreon.com/notumstudio",
            "website_link": "https://notum.cz",
            "twitter": "https://twitter.com/notumcz",
            "discord": "https://discord.gg/notum",
            "subscribestar": "https://subscribestar.com/notum",
        }),
    )
}

/// Sample game linked to an already-created developer
pub fn sample_game(developer: &RecordId) -> FixtureRecord {
    FixtureRecord::new(
        SAMPLE_GAME_LABEL,
        json!({
            "title": SAMPLE_GAME_LABEL,
            "slug": "sample-game",
            "version": "1.0.0",
            "status": "Ongoing",
            "release_date": SAMPLE_GAME_RELEASE_DATE,
            "is_featured": true,
            "trending_score": 100,
            "description": "This is a sample game to demonstrate the architecture.",
        }),
    )
    .with_field("developer", developer.to_json())
}
