//! MySQL-backed member mapper
//!
//! Implements `MemberRepository` by dispatching through the session template
//! to the statements under the `MemberMapper` namespace. The statement ids
//! follow the `<namespace>.<method>` convention the mapper documents are
//! loaded with.

use async_trait::async_trait;
use serde_json::json;

use mb_core::domain::entities::member::Member;
use mb_core::errors::DataAccessError;
use mb_core::repositories::member::MemberRepository;

use crate::database::session::SessionTemplate;

/// Statement ids this mapper dispatches to
pub mod statements {
    pub const INSERT_MEMBER: &str = "MemberMapper.insertMember";
    pub const SELECT_MEMBER_BY_ID: &str = "MemberMapper.selectMemberById";
    pub const SELECT_ALL_MEMBERS: &str = "MemberMapper.selectAllMembers";
    pub const UPDATE_MEMBER: &str = "MemberMapper.updateMember";
    pub const DELETE_MEMBER: &str = "MemberMapper.deleteMember";
}

/// MySQL implementation of `MemberRepository`
pub struct SqlMemberMapper {
    session: SessionTemplate,
}

impl SqlMemberMapper {
    /// Create a new member mapper over a shared session template
    pub fn new(session: SessionTemplate) -> Self {
        Self { session }
    }
}

#[async_trait]
impl MemberRepository for SqlMemberMapper {
    async fn insert_member(&self, member: &Member) -> Result<(), DataAccessError> {
        self.session.insert(statements::INSERT_MEMBER, member).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, DataAccessError> {
        // Scalar arguments are wrapped into a single-field object named
        // after the placeholder.
        self.session
            .select_one(statements::SELECT_MEMBER_BY_ID, &json!({ "id": id }))
            .await
    }

    async fn update_member(&self, member: &Member) -> Result<bool, DataAccessError> {
        let affected = self.session.update(statements::UPDATE_MEMBER, member).await?;
        Ok(affected > 0)
    }

    async fn delete_member(&self, id: &str) -> Result<bool, DataAccessError> {
        let affected = self
            .session
            .delete(statements::DELETE_MEMBER, &json!({ "id": id }))
            .await?;
        Ok(affected > 0)
    }

    async fn list_members(&self) -> Result<Vec<Member>, DataAccessError> {
        self.session
            .select_list(statements::SELECT_ALL_MEMBERS, &json!({}))
            .await
    }
}
