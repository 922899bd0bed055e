//! Battle Application Service
//!
//! Monster lifecycle: adoption after a chat, attacks funded by the power
//! bank, and dismissal once defeated. Every adoption appends to the
//! stress history.

use chrono::Utc;
use std::sync::Arc;

use kokoro::domain::rewards;
use kokoro::{AttackOutcome, DomainError, Monster, PowerBank, StateRepository, StressRecord};

use crate::application::power::PowerVault;

/// Application service for the stress monster
pub struct BattleService<R: StateRepository> {
    repo: Arc<R>,
    vault: Arc<PowerVault>,
}

impl<R: StateRepository> BattleService<R> {
    pub fn new(repo: Arc<R>, vault: Arc<PowerVault>) -> Self {
        Self { repo, vault }
    }

    pub async fn current(&self) -> Result<Option<Monster>, DomainError> {
        self.repo.load_monster().await
    }

    /// Persist a freshly created monster and log its stress score.
    pub async fn adopt(&self, monster: Monster) -> Result<Monster, DomainError> {
        self.repo.save_monster(&monster).await?;

        let mut history = self.repo.load_stress_history().await?;
        history.push(StressRecord {
            date: Utc::now(),
            score: monster.score,
        });
        self.repo.save_stress_history(&history).await?;

        tracing::info!("Monster appeared: {} (score {})", monster.name, monster.score);

        Ok(monster)
    }

    /// Throw the entire power bank at the monster.
    pub async fn attack(&self) -> Result<(Monster, AttackOutcome, u32), DomainError> {
        let mut monster = self
            .repo
            .load_monster()
            .await?
            .ok_or_else(|| DomainError::not_found("Monster", "current"))?;

        let power = self.vault.current();
        if power == 0 {
            return Err(DomainError::Validation(
                "no power in the bank to attack with".to_string(),
            ));
        }

        let (_, outcome) = rewards::attack(&mut monster, PowerBank::new(power), power);
        let bank = self.vault.debit(power);
        self.repo.save_monster(&monster).await?;

        tracing::info!(
            "Attacked {} with {} power ({} HP left)",
            monster.name,
            outcome.power,
            outcome.remaining_hp
        );

        Ok((monster, outcome, bank))
    }

    /// Zero the monster's HP without spending power (developer affordance).
    pub async fn slay(&self) -> Result<(Monster, AttackOutcome), DomainError> {
        let mut monster = self
            .repo
            .load_monster()
            .await?
            .ok_or_else(|| DomainError::not_found("Monster", "current"))?;

        let power = monster.current_hp;
        monster.slay();
        self.repo.save_monster(&monster).await?;

        let outcome = AttackOutcome {
            power,
            remaining_hp: 0,
            defeated: true,
        };
        Ok((monster, outcome))
    }

    /// Clear the monster, but only once it has been defeated. Returns
    /// whether anything was cleared.
    pub async fn dismiss(&self) -> Result<bool, DomainError> {
        match self.repo.load_monster().await? {
            Some(monster) if monster.is_defeated() => {
                self.repo.clear_monster().await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub async fn stress_history(&self) -> Result<Vec<StressRecord>, DomainError> {
        self.repo.load_stress_history().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStateRepository;
    use kokoro::StressAnalysis;

    fn monster(score: u32) -> Monster {
        Monster::from_analysis(
            StressAnalysis {
                stress_score: score,
                monster_name: "承認欲求モンスター".to_string(),
                monster_description: "霧".to_string(),
            },
            "img".to_string(),
        )
    }

    fn service(vault: Arc<PowerVault>) -> BattleService<MemoryStateRepository> {
        BattleService::new(Arc::new(MemoryStateRepository::new()), vault)
    }

    #[tokio::test]
    async fn test_attack_spends_whole_bank() {
        let vault = Arc::new(PowerVault::new());
        vault.credit(50);
        let service = service(Arc::clone(&vault));
        service.adopt(monster(120)).await.unwrap();

        let (updated, outcome, bank) = service.attack().await.unwrap();
        assert_eq!(outcome.power, 50);
        assert_eq!(updated.current_hp, 70);
        assert_eq!(bank, 0);
        assert!(!outcome.defeated);
    }

    #[tokio::test]
    async fn test_attack_without_power_is_rejected() {
        let service = service(Arc::new(PowerVault::new()));
        service.adopt(monster(30)).await.unwrap();

        let err = service.attack().await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_attack_without_monster_is_not_found() {
        let vault = Arc::new(PowerVault::new());
        vault.credit(10);
        let service = service(vault);

        let err = service.attack().await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_adopt_appends_stress_record() {
        let service = service(Arc::new(PowerVault::new()));
        service.adopt(monster(80)).await.unwrap();
        service.dismiss().await.unwrap();
        service.adopt(monster(120)).await.unwrap();

        let history = service.stress_history().await.unwrap();
        let scores: Vec<u32> = history.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![80, 120]);
    }

    #[tokio::test]
    async fn test_dismiss_only_when_defeated() {
        let vault = Arc::new(PowerVault::new());
        let service = service(Arc::clone(&vault));
        service.adopt(monster(40)).await.unwrap();

        assert!(!service.dismiss().await.unwrap());
        assert!(service.current().await.unwrap().is_some());

        service.slay().await.unwrap();
        assert!(service.dismiss().await.unwrap());
        assert!(service.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_slay_consumes_no_power() {
        let vault = Arc::new(PowerVault::new());
        vault.credit(30);
        let service = service(Arc::clone(&vault));
        service.adopt(monster(99)).await.unwrap();

        let (updated, outcome) = service.slay().await.unwrap();
        assert!(updated.is_defeated());
        assert!(outcome.defeated);
        assert_eq!(vault.current(), 30);
    }
}
