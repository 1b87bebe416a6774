//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory expense store and member directory for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStore {
    expenses: Arc<RwLock<HashMap<String, Expense>>>,
    members: Arc<RwLock<HashMap<MemberId, Member>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            expenses: Arc::new(RwLock::new(HashMap::new())),
            members: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a member so their display name resolves
    pub fn add_member(&mut self, member: Member) {
        self.members
            .write()
            .unwrap()
            .insert(member.id.clone(), member);
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.expenses.write().unwrap().clear();
        self.members.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpenseStore for MemoryStore {
    async fn save_expense(&mut self, expense: &Expense) -> SettlementResult<()> {
        self.expenses
            .write()
            .unwrap()
            .insert(expense.id.clone(), expense.clone());
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> SettlementResult<Option<Expense>> {
        Ok(self.expenses.read().unwrap().get(expense_id).cloned())
    }

    async fn list_group_expenses(&self, group_id: &str) -> SettlementResult<Vec<Expense>> {
        let expenses = self.expenses.read().unwrap();
        let mut filtered: Vec<Expense> = expenses
            .values()
            .filter(|expense| expense.group_id == group_id)
            .cloned()
            .collect();
        // Newest first, with the id as a stable tie-breaker
        filtered.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(filtered)
    }

    async fn list_member_expenses(&self, member_id: &str) -> SettlementResult<Vec<Expense>> {
        let expenses = self.expenses.read().unwrap();
        let mut filtered: Vec<Expense> = expenses
            .values()
            .filter(|expense| expense.splits.iter().any(|s| s.member_id == member_id))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(filtered)
    }

    async fn delete_expense(&mut self, expense_id: &str) -> SettlementResult<()> {
        if self.expenses.write().unwrap().remove(expense_id).is_some() {
            Ok(())
        } else {
            Err(SettlementError::ExpenseNotFound(expense_id.to_string()))
        }
    }
}

#[async_trait]
impl MemberDirectory for MemoryStore {
    async fn display_name(&self, member_id: &str) -> SettlementResult<Option<String>> {
        Ok(self
            .members
            .read()
            .unwrap()
            .get(member_id)
            .map(|member| member.name.clone()))
    }
}
