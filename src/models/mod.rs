//! Data models for CMS seeding
//!
//! Contains fixture records, collections, and run outcomes.

mod fixture;
mod outcome;

pub use fixture::{Collection, FixtureBatch, FixtureRecord, RecordId};
pub use outcome::{RecordOutcome, RecordStatus, SeedSummary};
