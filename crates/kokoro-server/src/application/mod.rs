//! Application Services (Use Cases)
//!
//! Orchestrate domain operations over the state repository and the
//! external-service ports.

pub mod battle_service;
pub mod care_service;
pub mod chat_service;
pub mod power;
pub mod todo_service;
pub mod undo;

pub use battle_service::BattleService;
pub use care_service::CareService;
pub use chat_service::ChatService;
pub use power::PowerVault;
pub use todo_service::ToDoService;
pub use undo::MoodUndoBuffer;
