//! Monster, power bank and login bonus DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use kokoro::{AttackOutcome, Monster, StressRecord};

/// The active monster
#[derive(Debug, Serialize, ToSchema)]
pub struct MonsterResponse {
    pub name: String,
    pub description: String,
    pub score: u32,
    pub current_hp: u32,
    pub image_url: String,
}

impl From<Monster> for MonsterResponse {
    fn from(monster: Monster) -> Self {
        Self {
            name: monster.name,
            description: monster.description,
            score: monster.score,
            current_hp: monster.current_hp,
            image_url: monster.image_url,
        }
    }
}

/// Result of an attack
#[derive(Debug, Serialize, ToSchema)]
pub struct AttackResponse {
    /// Power actually thrown at the monster
    pub power: u32,
    pub remaining_hp: u32,
    pub defeated: bool,
    pub power_bank: u32,
}

impl AttackResponse {
    pub fn new(outcome: AttackOutcome, power_bank: u32) -> Self {
        Self {
            power: outcome.power,
            remaining_hp: outcome.remaining_hp,
            defeated: outcome.defeated,
            power_bank,
        }
    }
}

/// Result of returning home with (or without) a defeated monster
#[derive(Debug, Serialize, ToSchema)]
pub struct DismissResponse {
    pub cleared: bool,
}

/// Current power bank
#[derive(Debug, Serialize, ToSchema)]
pub struct PowerResponse {
    pub power: u32,
}

/// Result of an app-open login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// False when today's bonus was already claimed
    pub awarded: bool,
    pub days: u32,
    pub points: u32,
    pub power_bank: u32,
}

/// One stress history point
#[derive(Debug, Serialize, ToSchema)]
pub struct StressRecordResponse {
    pub date: DateTime<Utc>,
    pub score: u32,
}

impl From<StressRecord> for StressRecordResponse {
    fn from(record: StressRecord) -> Self {
        Self {
            date: record.date,
            score: record.score,
        }
    }
}
