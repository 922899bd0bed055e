//! Reward Engine - power bank accounting
//!
//! Pure state-transition functions mapping self-care actions to power-bank
//! deltas and monster HP deltas. The power bank is process-wide and never
//! goes negative.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Monster;

/// Bonus for saving a diary entry on a new date (on top of its score)
pub const DIARY_BONUS: u32 = 10;
/// Bonus for a healthy night of sleep
pub const SLEEP_BONUS: u32 = 10;
/// Bonus for completing a to-do (revoked on un-completion)
pub const TODO_BONUS: u32 = 10;

/// Healthy sleep window, in hours
const SLEEP_RANGE: std::ops::RangeInclusive<f32> = 6.0..=8.0;

/// PowerBank (パワー貯金) - accumulated self-care currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerBank(u32);

impl PowerBank {
    pub fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u32 {
        self.0
    }

    pub fn credit(self, amount: u32) -> Self {
        Self(self.0 + amount)
    }

    /// Debit, floored at zero.
    pub fn debit(self, amount: u32) -> Self {
        Self(self.0.saturating_sub(amount))
    }
}

/// Outcome of spending the power bank on an attack
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Power actually thrown at the monster
    pub power: u32,
    pub remaining_hp: u32,
    pub defeated: bool,
}

/// Attack with power `p`: HP drops to `max(0, hp - p)` and the bank drops
/// to `max(0, bank - p)`.
pub fn attack(monster: &mut Monster, bank: PowerBank, power: u32) -> (PowerBank, AttackOutcome) {
    monster.take_damage(power);
    let outcome = AttackOutcome {
        power,
        remaining_hp: monster.current_hp,
        defeated: monster.is_defeated(),
    };
    (bank.debit(power), outcome)
}

/// Credit for a diary save: a new date earns `score + DIARY_BONUS`, an
/// update earns only the positive score delta.
pub fn diary_credit(previous_score: Option<u32>, new_score: u32) -> u32 {
    match previous_score {
        Some(old) => new_score.saturating_sub(old),
        None => new_score + DIARY_BONUS,
    }
}

/// Credit for a sleep save: the bonus applies only inside the healthy
/// window.
pub fn sleep_credit(duration_hours: f32) -> u32 {
    if SLEEP_RANGE.contains(&duration_hours) {
        SLEEP_BONUS
    } else {
        0
    }
}

/// Apply a completion toggle: completing credits the bonus, un-completing
/// revokes it (clamped at zero).
pub fn apply_todo_toggle(bank: PowerBank, now_completed: bool) -> PowerBank {
    if now_completed {
        bank.credit(TODO_BONUS)
    } else {
        bank.debit(TODO_BONUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::StressAnalysis;

    fn monster(score: u32) -> Monster {
        Monster::from_analysis(
            StressAnalysis {
                stress_score: score,
                monster_name: "先延ばし沼のヌッシー".to_string(),
                monster_description: "沼".to_string(),
            },
            "img".to_string(),
        )
    }

    #[test]
    fn test_attack_drains_hp_and_bank() {
        let mut target = monster(120);
        let (bank, outcome) = attack(&mut target, PowerBank::new(50), 50);
        assert_eq!(outcome.remaining_hp, 70);
        assert_eq!(bank.amount(), 0);
        assert!(!outcome.defeated);
    }

    #[test]
    fn test_overkill_floors_hp_and_bank() {
        let mut target = monster(30);
        let (bank, outcome) = attack(&mut target, PowerBank::new(40), 100);
        assert_eq!(outcome.remaining_hp, 0);
        assert!(outcome.defeated);
        assert_eq!(bank.amount(), 0);
    }

    #[test]
    fn test_diary_credit_new_date() {
        assert_eq!(diary_credit(None, 30), 40);
    }

    #[test]
    fn test_diary_credit_update_only_positive_delta() {
        assert_eq!(diary_credit(Some(20), 35), 15);
        assert_eq!(diary_credit(Some(35), 20), 0);
    }

    #[test]
    fn test_sleep_credit_window() {
        assert_eq!(sleep_credit(7.5), SLEEP_BONUS);
        assert_eq!(sleep_credit(6.0), SLEEP_BONUS);
        assert_eq!(sleep_credit(8.0), SLEEP_BONUS);
        assert_eq!(sleep_credit(4.0), 0);
        assert_eq!(sleep_credit(9.5), 0);
    }

    #[test]
    fn test_toggle_round_trip_never_negative() {
        let bank = PowerBank::default();
        // Un-completing with an empty bank must clamp, not underflow
        let bank = apply_todo_toggle(bank, false);
        assert_eq!(bank.amount(), 0);
        let bank = apply_todo_toggle(bank, true);
        let bank = apply_todo_toggle(bank, false);
        assert_eq!(bank.amount(), 0);
    }
}
