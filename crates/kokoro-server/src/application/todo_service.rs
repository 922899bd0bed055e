//! ToDo Application Service

use chrono::{NaiveDate, Utc};
use std::sync::Arc;

use kokoro::domain::sort_by_schedule;
use kokoro::{DomainError, StateRepository, ToDoItem};

use crate::application::power::PowerVault;

/// Application service for the to-do list
pub struct ToDoService<R: StateRepository> {
    repo: Arc<R>,
    vault: Arc<PowerVault>,
}

impl<R: StateRepository> ToDoService<R> {
    pub fn new(repo: Arc<R>, vault: Arc<PowerVault>) -> Self {
        Self { repo, vault }
    }

    /// List items in display order.
    pub async fn list(&self) -> Result<Vec<ToDoItem>, DomainError> {
        let mut items = self.repo.load_todo_list().await?;
        items.sort_by_key(|item| item.order);
        Ok(items)
    }

    /// Create an item at the end of the list.
    pub async fn add(
        &self,
        title: String,
        due_date: Option<NaiveDate>,
        start_time: Option<String>,
        end_time: Option<String>,
        memo: String,
    ) -> Result<ToDoItem, DomainError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }

        let mut items = self.repo.load_todo_list().await?;

        // Millisecond timestamps are unique enough for a personal list;
        // nudge forward on the rare same-instant collision.
        let mut id = Utc::now().timestamp_millis();
        while items.iter().any(|item| item.id == id) {
            id += 1;
        }

        let item = ToDoItem::new(id, title, due_date, start_time, end_time, memo);
        items.push(item.clone());
        self.repo.save_todo_list(&items).await?;

        Ok(item)
    }

    /// Edit an item's content. Completion, favorite and order are managed
    /// by their own operations.
    pub async fn edit(
        &self,
        id: i64,
        title: String,
        due_date: Option<NaiveDate>,
        start_time: Option<String>,
        end_time: Option<String>,
        memo: String,
    ) -> Result<ToDoItem, DomainError> {
        let mut items = self.repo.load_todo_list().await?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::not_found("ToDoItem", id))?;

        item.title = title;
        item.due_date = due_date;
        item.start_time = start_time;
        item.end_time = end_time;
        item.memo = memo;
        let updated = item.clone();

        self.repo.save_todo_list(&items).await?;
        Ok(updated)
    }

    /// Flip completion. Completing credits the bonus, un-completing
    /// revokes it. Returns the item and the bank total.
    pub async fn toggle(&self, id: i64) -> Result<(ToDoItem, u32), DomainError> {
        let mut items = self.repo.load_todo_list().await?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::not_found("ToDoItem", id))?;

        item.is_completed = !item.is_completed;
        let bank = self.vault.apply_todo_toggle(item.is_completed);
        let updated = item.clone();

        self.repo.save_todo_list(&items).await?;
        Ok((updated, bank))
    }

    pub async fn toggle_favorite(&self, id: i64) -> Result<ToDoItem, DomainError> {
        let mut items = self.repo.load_todo_list().await?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::not_found("ToDoItem", id))?;

        item.is_favorite = !item.is_favorite;
        let updated = item.clone();

        self.repo.save_todo_list(&items).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut items = self.repo.load_todo_list().await?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Ok(false);
        }

        self.repo.save_todo_list(&items).await?;
        Ok(true)
    }

    /// Manual reorder: `ids` is the full list in its new order.
    pub async fn reorder(&self, ids: &[i64]) -> Result<Vec<ToDoItem>, DomainError> {
        let mut items = self.repo.load_todo_list().await?;
        for (position, id) in ids.iter().enumerate() {
            let item = items
                .iter_mut()
                .find(|item| item.id == *id)
                .ok_or_else(|| DomainError::not_found("ToDoItem", id))?;
            item.order = position as i64;
        }
        self.repo.save_todo_list(&items).await?;

        self.list().await
    }

    /// Chronological sort: favorites first, then by due date and start
    /// time; rewrites `order` as the resulting rank.
    pub async fn sort_by_date(&self) -> Result<Vec<ToDoItem>, DomainError> {
        let mut items = self.list().await?;
        sort_by_schedule(&mut items);
        self.repo.save_todo_list(&items).await?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStateRepository;

    fn service() -> ToDoService<MemoryStateRepository> {
        ToDoService::new(
            Arc::new(MemoryStateRepository::new()),
            Arc::new(PowerVault::new()),
        )
    }

    #[tokio::test]
    async fn test_toggle_awards_and_revokes() {
        let service = service();
        let item = service
            .add("掃除".to_string(), None, None, None, String::new())
            .await
            .unwrap();

        let (item, bank) = service.toggle(item.id).await.unwrap();
        assert!(item.is_completed);
        assert_eq!(bank, 10);

        let (item, bank) = service.toggle(item.id).await.unwrap();
        assert!(!item.is_completed);
        assert_eq!(bank, 0);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_not_found() {
        let service = service();
        let err = service.toggle(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_title_rejected() {
        let service = service();
        let err = service
            .add("   ".to_string(), None, None, None, String::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_sort_by_date_persists_ranks() {
        let service = service();
        let late = service
            .add("後".to_string(), Some("2025-06-02".parse().unwrap()), None, None, String::new())
            .await
            .unwrap();
        let early = service
            .add("先".to_string(), Some("2025-06-01".parse().unwrap()), None, None, String::new())
            .await
            .unwrap();

        let sorted = service.sort_by_date().await.unwrap();
        assert_eq!(sorted[0].id, early.id);
        assert_eq!(sorted[0].order, 0);
        assert_eq!(sorted[1].id, late.id);
        assert_eq!(sorted[1].order, 1);

        // The rewritten order survives a reload
        let listed = service.list().await.unwrap();
        assert_eq!(listed[0].id, early.id);
    }

    #[tokio::test]
    async fn test_reorder_follows_given_ids() {
        let service = service();
        let a = service
            .add("a".to_string(), None, None, None, String::new())
            .await
            .unwrap();
        let b = service
            .add("b".to_string(), None, None, None, String::new())
            .await
            .unwrap();

        let items = service.reorder(&[b.id, a.id]).await.unwrap();
        assert_eq!(items[0].id, b.id);
        assert_eq!(items[1].id, a.id);
    }
}
