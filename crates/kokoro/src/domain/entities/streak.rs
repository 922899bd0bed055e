//! LoginStreak - consecutive daily opens and their escalating bonus

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reward points per consecutive day
const POINTS_PER_DAY: u32 = 10;

/// LoginStreak - persisted record of the last rewarded open
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginStreak {
    pub last_login_date: NaiveDate,
    pub consecutive_days: u32,
}

/// Bonus awarded for an app open
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoginBonus {
    pub days: u32,
    pub points: u32,
}

impl LoginStreak {
    pub const MAX_DAYS: u32 = 7;

    /// First ever open: streak of 1.
    pub fn first(today: NaiveDate) -> (Self, LoginBonus) {
        let streak = Self {
            last_login_date: today,
            consecutive_days: 1,
        };
        let bonus = streak.bonus();
        (streak, bonus)
    }

    /// Advance the streak for an open on `today`.
    ///
    /// Returns `None` when today was already rewarded (same-day reload
    /// performs no mutation). A gap of exactly one day increments the
    /// streak up to the cap; anything else resets it to 1.
    pub fn advance(&self, today: NaiveDate) -> Option<(Self, LoginBonus)> {
        if today == self.last_login_date {
            return None;
        }

        let gap = (today - self.last_login_date).num_days();
        let consecutive_days = if gap == 1 {
            (self.consecutive_days + 1).min(Self::MAX_DAYS)
        } else {
            1
        };

        let streak = Self {
            last_login_date: today,
            consecutive_days,
        };
        let bonus = streak.bonus();
        Some((streak, bonus))
    }

    fn bonus(&self) -> LoginBonus {
        LoginBonus {
            days: self.consecutive_days,
            points: self.consecutive_days * POINTS_PER_DAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_first_login_awards_ten() {
        let (streak, bonus) = LoginStreak::first(date("2025-06-01"));
        assert_eq!(streak.consecutive_days, 1);
        assert_eq!(bonus.points, 10);
    }

    #[test]
    fn test_next_day_increments() {
        let (streak, _) = LoginStreak::first(date("2025-06-01"));
        let (streak, bonus) = streak.advance(date("2025-06-02")).unwrap();
        assert_eq!(streak.consecutive_days, 2);
        assert_eq!(bonus.points, 20);
    }

    #[test]
    fn test_same_day_is_noop() {
        let (streak, _) = LoginStreak::first(date("2025-06-01"));
        assert!(streak.advance(date("2025-06-01")).is_none());
    }

    #[test]
    fn test_gap_resets_to_one() {
        let streak = LoginStreak {
            last_login_date: date("2025-06-01"),
            consecutive_days: 5,
        };
        let (streak, bonus) = streak.advance(date("2025-06-03")).unwrap();
        assert_eq!(streak.consecutive_days, 1);
        assert_eq!(bonus.points, 10);
    }

    #[test]
    fn test_streak_caps_at_seven() {
        let mut streak = LoginStreak {
            last_login_date: date("2025-06-01"),
            consecutive_days: 7,
        };
        let (next, bonus) = streak.advance(date("2025-06-02")).unwrap();
        streak = next;
        assert_eq!(streak.consecutive_days, 7);
        assert_eq!(bonus.points, 70);
    }
}
