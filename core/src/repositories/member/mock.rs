//! Mock implementation of MemberRepository for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::member::Member;
use crate::errors::DataAccessError;

use super::trait_::MemberRepository;

/// In-memory member repository for testing
pub struct MockMemberRepository {
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl MockMemberRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            members: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn insert_member(&self, member: &Member) -> Result<(), DataAccessError> {
        let mut members = self.members.write().await;

        // Mirrors the primary-key constraint on member.id
        if members.contains_key(&member.id) {
            return Err(DataAccessError::SqlExecution {
                statement: "MemberMapper.insertMember".to_string(),
                message: format!("duplicate member id `{}`", member.id),
            });
        }

        members.insert(member.id.clone(), member.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, DataAccessError> {
        let members = self.members.read().await;
        Ok(members.get(id).cloned())
    }

    async fn update_member(&self, member: &Member) -> Result<bool, DataAccessError> {
        let mut members = self.members.write().await;

        if !members.contains_key(&member.id) {
            return Ok(false);
        }

        members.insert(member.id.clone(), member.clone());
        Ok(true)
    }

    async fn delete_member(&self, id: &str) -> Result<bool, DataAccessError> {
        let mut members = self.members.write().await;
        Ok(members.remove(id).is_some())
    }

    async fn list_members(&self) -> Result<Vec<Member>, DataAccessError> {
        let members = self.members.read().await;
        let mut all: Vec<Member> = members.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }
}
