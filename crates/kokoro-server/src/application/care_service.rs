//! Care Application Service
//!
//! Diary, sleep and mood records plus the login bonus - every self-care
//! action that feeds the power bank.

use chrono::NaiveDate;
use std::sync::Arc;

use kokoro::domain::{rewards, upsert_by_date};
use kokoro::{DiaryEntry, DomainError, LoginBonus, LoginStreak, MoodRecord, SleepRecord, StateRepository};

use crate::application::power::PowerVault;
use crate::application::undo::MoodUndoBuffer;

/// Application service for the self-care records
pub struct CareService<R: StateRepository> {
    repo: Arc<R>,
    vault: Arc<PowerVault>,
    mood_undo: MoodUndoBuffer,
}

impl<R: StateRepository> CareService<R> {
    pub fn new(repo: Arc<R>, vault: Arc<PowerVault>) -> Self {
        Self {
            repo,
            vault,
            mood_undo: MoodUndoBuffer::new(),
        }
    }

    // ============================================
    // Diary
    // ============================================

    pub async fn diary_history(&self) -> Result<Vec<DiaryEntry>, DomainError> {
        self.repo.load_diary_history().await
    }

    /// Upsert a diary entry. A new date credits `score + 10`; an update
    /// credits only the positive score delta. Returns (credited, bank).
    pub async fn save_diary(&self, entry: DiaryEntry) -> Result<(u32, u32), DomainError> {
        let mut history = self.repo.load_diary_history().await?;
        let previous = upsert_by_date(&mut history, entry.clone());
        self.repo.save_diary_history(&history).await?;

        let credited = rewards::diary_credit(previous.map(|p| p.score), entry.score);
        let bank = if credited > 0 {
            self.vault.credit(credited)
        } else {
            self.vault.current()
        };

        tracing::info!("Saved diary for {} (+{} power)", entry.date, credited);

        Ok((credited, bank))
    }

    pub async fn delete_diary(&self, date: NaiveDate) -> Result<bool, DomainError> {
        let mut history = self.repo.load_diary_history().await?;
        let before = history.len();
        history.retain(|e| e.date != date);
        if history.len() == before {
            return Ok(false);
        }

        self.repo.save_diary_history(&history).await?;
        Ok(true)
    }

    // ============================================
    // Sleep
    // ============================================

    pub async fn sleep_history(&self) -> Result<Vec<SleepRecord>, DomainError> {
        self.repo.load_sleep_history().await
    }

    /// Upsert a sleep record (last-write-wins on the date). A healthy
    /// night earns the sleep bonus. Returns (credited, bank).
    pub async fn save_sleep(&self, record: SleepRecord) -> Result<(u32, u32), DomainError> {
        let mut history = self.repo.load_sleep_history().await?;
        upsert_by_date(&mut history, record.clone());
        self.repo.save_sleep_history(&history).await?;

        let credited = rewards::sleep_credit(record.duration);
        let bank = if credited > 0 {
            self.vault.credit(credited)
        } else {
            self.vault.current()
        };

        Ok((credited, bank))
    }

    // ============================================
    // Mood
    // ============================================

    pub async fn mood_history(&self) -> Result<Vec<MoodRecord>, DomainError> {
        self.repo.load_mood_history().await
    }

    /// Upsert today's mood and arm the undo window. Saving replaces any
    /// same-date record; the replaced record is what an undo restores.
    pub async fn save_mood(&self, record: MoodRecord) -> Result<MoodRecord, DomainError> {
        if !(-3..=3).contains(&record.score) {
            return Err(DomainError::Validation(format!(
                "mood score out of range: {}",
                record.score
            )));
        }

        let mut history = self.repo.load_mood_history().await?;
        let previous = upsert_by_date(&mut history, record.clone());
        self.repo.save_mood_history(&history).await?;

        self.mood_undo.arm(record.date, previous);

        Ok(record)
    }

    /// Undo the most recent mood save, while its window is open.
    pub async fn undo_mood(&self) -> Result<bool, DomainError> {
        let Some((date, previous)) = self.mood_undo.take() else {
            return Ok(false);
        };

        let mut history = self.repo.load_mood_history().await?;
        history.retain(|r| r.date != date);
        if let Some(previous) = previous {
            upsert_by_date(&mut history, previous);
        }
        self.repo.save_mood_history(&history).await?;

        Ok(true)
    }

    // ============================================
    // Login bonus / power bank
    // ============================================

    /// Apply the login bonus for an open on `today`. Idempotent within a
    /// calendar day. Returns the bonus (None when already claimed) and the
    /// bank total.
    pub async fn login(&self, today: NaiveDate) -> Result<(Option<LoginBonus>, u32), DomainError> {
        let advanced = match self.repo.load_login_streak().await? {
            None => Some(LoginStreak::first(today)),
            Some(streak) => streak.advance(today),
        };

        match advanced {
            Some((streak, bonus)) => {
                self.repo.save_login_streak(&streak).await?;
                let bank = self.vault.credit(bonus.points);
                tracing::info!(
                    "Login bonus: day {} (+{} power)",
                    bonus.days,
                    bonus.points
                );
                Ok((Some(bonus), bank))
            }
            None => Ok((None, self.vault.current())),
        }
    }

    pub async fn login_streak(&self) -> Result<Option<LoginStreak>, DomainError> {
        self.repo.load_login_streak().await
    }

    pub fn power(&self) -> u32 {
        self.vault.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStateRepository;
    use kokoro::AchievementList;

    fn service() -> CareService<MemoryStateRepository> {
        CareService::new(
            Arc::new(MemoryStateRepository::new()),
            Arc::new(PowerVault::new()),
        )
    }

    fn diary(date: &str, score: u32) -> DiaryEntry {
        DiaryEntry {
            date: date.parse().unwrap(),
            plan: "計画".to_string(),
            achievements: AchievementList::default(),
            score,
        }
    }

    fn sleep(date: &str, duration: f32) -> SleepRecord {
        SleepRecord {
            date: date.parse().unwrap(),
            bed_time: "23:30".to_string(),
            wake_time: "07:00".to_string(),
            duration,
        }
    }

    fn mood(date: &str, score: i8) -> MoodRecord {
        MoodRecord {
            date: date.parse().unwrap(),
            score,
            emoji: "🙂".to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_diary_credits_score_plus_bonus() {
        let service = service();
        let (credited, bank) = service.save_diary(diary("2025-06-01", 30)).await.unwrap();
        assert_eq!(credited, 40);
        assert_eq!(bank, 40);
    }

    #[tokio::test]
    async fn test_diary_update_credits_only_positive_delta() {
        let service = service();
        service.save_diary(diary("2025-06-01", 30)).await.unwrap();
        let (credited, _) = service.save_diary(diary("2025-06-01", 45)).await.unwrap();
        assert_eq!(credited, 15);

        let (credited, _) = service.save_diary(diary("2025-06-01", 10)).await.unwrap();
        assert_eq!(credited, 0);

        let history = service.diary_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score, 10);
    }

    #[tokio::test]
    async fn test_sleep_bonus_only_in_window() {
        let service = service();
        let (credited, _) = service.save_sleep(sleep("2025-06-01", 7.0)).await.unwrap();
        assert_eq!(credited, 10);

        let (credited, _) = service.save_sleep(sleep("2025-06-02", 4.5)).await.unwrap();
        assert_eq!(credited, 0);
    }

    #[tokio::test]
    async fn test_sleep_same_date_replaces() {
        let service = service();
        service.save_sleep(sleep("2025-06-01", 7.0)).await.unwrap();
        service.save_sleep(sleep("2025-06-01", 5.0)).await.unwrap();

        let history = service.sleep_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].duration, 5.0);
    }

    #[tokio::test]
    async fn test_mood_undo_restores_previous() {
        let service = service();
        service.save_mood(mood("2025-06-01", 1)).await.unwrap();
        service.save_mood(mood("2025-06-01", -2)).await.unwrap();

        assert!(service.undo_mood().await.unwrap());
        let history = service.mood_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score, 1);
    }

    #[tokio::test]
    async fn test_mood_undo_removes_first_save() {
        let service = service();
        service.save_mood(mood("2025-06-01", 2)).await.unwrap();

        assert!(service.undo_mood().await.unwrap());
        assert!(service.mood_history().await.unwrap().is_empty());
        // Nothing left to undo
        assert!(!service.undo_mood().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_bonus_once_per_day() {
        let service = service();
        let today: NaiveDate = "2025-06-01".parse().unwrap();

        let (bonus, bank) = service.login(today).await.unwrap();
        assert_eq!(bonus.unwrap().points, 10);
        assert_eq!(bank, 10);

        let (bonus, bank) = service.login(today).await.unwrap();
        assert!(bonus.is_none());
        assert_eq!(bank, 10);
    }

    #[tokio::test]
    async fn test_login_streak_escalates() {
        let service = service();
        service.login("2025-06-01".parse().unwrap()).await.unwrap();
        let (bonus, bank) = service.login("2025-06-02".parse().unwrap()).await.unwrap();

        let bonus = bonus.unwrap();
        assert_eq!(bonus.days, 2);
        assert_eq!(bonus.points, 20);
        assert_eq!(bank, 30);
    }
}
