//! Monster (ストレスモンスター) - Embodied stress
//!
//! A generated adversary whose hit points equal the stress score that
//! created it. Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback illustration used when image generation is unavailable.
pub const PLACEHOLDER_IMAGE: &str = "/monsters/kaiju_brown.png";

/// Structured result of analyzing a chat transcript.
///
/// Field names follow the constrained output schema sent to the generative
/// model, so the upstream JSON deserializes directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressAnalysis {
    /// 1..=200, higher means more severe stress
    pub stress_score: u32,
    pub monster_name: String,
    pub monster_description: String,
}

/// Monster - embodied stress with hit points
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub name: String,
    pub description: String,
    pub score: u32,
    #[serde(rename = "currentHP")]
    pub current_hp: u32,
    pub image_url: String,
}

impl Monster {
    /// Create a monster from an analysis result. HP starts at the score.
    pub fn from_analysis(analysis: StressAnalysis, image_url: String) -> Self {
        Self {
            name: analysis.monster_name,
            description: analysis.monster_description,
            score: analysis.stress_score,
            current_hp: analysis.stress_score,
            image_url,
        }
    }

    /// Fixed monster used when transcript analysis fails, so the flow
    /// always completes.
    pub fn fallback() -> Self {
        Self {
            name: "エラーモンスター".to_string(),
            description: "予期せぬエラーが発生しました。もう一度お試しください。".to_string(),
            score: 50,
            current_hp: 50,
            image_url: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Apply attack damage. HP is floored at 0 and never exceeds the score.
    pub fn take_damage(&mut self, power: u32) {
        self.current_hp = self.current_hp.saturating_sub(power);
    }

    /// Zero the HP outright (developer affordance, consumes no power).
    pub fn slay(&mut self) {
        self.current_hp = 0;
    }

    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }
}

/// StressRecord - append-only log entry, one per generated monster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressRecord {
    pub date: DateTime<Utc>,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(score: u32) -> StressAnalysis {
        StressAnalysis {
            stress_score: score,
            monster_name: "締め切りデビル".to_string(),
            monster_description: "燃え尽きた時計が頭に乗っている".to_string(),
        }
    }

    #[test]
    fn test_hp_starts_at_score() {
        let monster = Monster::from_analysis(analysis(120), "img".to_string());
        assert_eq!(monster.current_hp, 120);
        assert!(!monster.is_defeated());
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut monster = Monster::from_analysis(analysis(30), "img".to_string());
        monster.take_damage(100);
        assert_eq!(monster.current_hp, 0);
        assert!(monster.is_defeated());
    }

    #[test]
    fn test_damage_never_exceeds_score() {
        let mut monster = Monster::from_analysis(analysis(80), "img".to_string());
        monster.take_damage(30);
        assert_eq!(monster.current_hp, 50);
        assert!(monster.current_hp <= monster.score);
    }

    #[test]
    fn test_slay_zeroes_hp() {
        let mut monster = Monster::from_analysis(analysis(200), "img".to_string());
        monster.slay();
        assert!(monster.is_defeated());
    }

    #[test]
    fn test_serializes_with_original_field_names() {
        let monster = Monster::fallback();
        let json = serde_json::to_value(&monster).unwrap();
        assert!(json.get("currentHP").is_some());
        assert!(json.get("imageUrl").is_some());
    }
}
