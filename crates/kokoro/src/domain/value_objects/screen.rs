//! Screen - the top-level view state machine
//!
//! HOME → CHAT → MONSTER_REVEAL → ATTACK_RESULT, fully deterministic.
//! Any screen whose precondition is absent redirects to Home.

use serde::{Deserialize, Serialize};

/// Top-level screen of the companion flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    #[default]
    Home,
    Chat,
    MonsterReveal,
    AttackResult,
}

impl Screen {
    /// Home → Chat, only once an assistant name has been chosen.
    pub fn start_chat(self, has_assistant: bool) -> Screen {
        match self {
            Screen::Home if has_assistant => Screen::Chat,
            other => other,
        }
    }

    /// Chat → MonsterReveal on successful monster creation.
    pub fn monster_created(self) -> Screen {
        match self {
            Screen::Chat => Screen::MonsterReveal,
            other => other,
        }
    }

    /// Home/MonsterReveal → AttackResult on attack.
    pub fn attack(self, has_monster: bool) -> Screen {
        match self {
            Screen::Home | Screen::MonsterReveal if has_monster => Screen::AttackResult,
            other => other,
        }
    }

    /// Any screen → Home.
    pub fn restart(self) -> Screen {
        Screen::Home
    }

    /// Redirect to Home when the current screen's precondition is absent.
    pub fn enforce(self, has_assistant: bool, has_monster: bool) -> Screen {
        match self {
            Screen::Chat if !has_assistant => Screen::Home,
            Screen::MonsterReveal | Screen::AttackResult if !has_monster => Screen::Home,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_requires_assistant_name() {
        assert_eq!(Screen::Home.start_chat(false), Screen::Home);
        assert_eq!(Screen::Home.start_chat(true), Screen::Chat);
    }

    #[test]
    fn test_full_flow() {
        let screen = Screen::Home
            .start_chat(true)
            .monster_created()
            .attack(true);
        assert_eq!(screen, Screen::AttackResult);
        assert_eq!(screen.restart(), Screen::Home);
    }

    #[test]
    fn test_attack_from_home_with_monster() {
        assert_eq!(Screen::Home.attack(true), Screen::AttackResult);
        assert_eq!(Screen::Home.attack(false), Screen::Home);
    }

    #[test]
    fn test_enforce_redirects_without_preconditions() {
        assert_eq!(Screen::Chat.enforce(false, false), Screen::Home);
        assert_eq!(Screen::MonsterReveal.enforce(true, false), Screen::Home);
        assert_eq!(Screen::AttackResult.enforce(true, false), Screen::Home);
        assert_eq!(Screen::MonsterReveal.enforce(true, true), Screen::MonsterReveal);
    }

    #[test]
    fn test_monster_created_only_from_chat() {
        assert_eq!(Screen::Home.monster_created(), Screen::Home);
        assert_eq!(Screen::Chat.monster_created(), Screen::MonsterReveal);
    }
}
