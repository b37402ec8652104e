//! Member repository trait defining the interface for member persistence.
//!
//! The trait is the caller-facing contract over the mapped statements: one
//! typed method per statement. Implementations dispatch to the session
//! template while keeping the domain layer free of database concerns.

use async_trait::async_trait;

use crate::domain::entities::member::Member;
use crate::errors::DataAccessError;

/// Repository contract for member records
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a new member row
    ///
    /// # Arguments
    /// * `member` - the record to persist; all fields are taken as-is
    ///
    /// # Returns
    /// * `Ok(())` - row inserted
    /// * `Err(DataAccessError)` - statement lookup, binding, or execution failed
    async fn insert_member(&self, member: &Member) -> Result<(), DataAccessError>;

    /// Find a member by login id
    ///
    /// # Returns
    /// * `Ok(Some(Member))` - member found
    /// * `Ok(None)` - no member with the given id
    /// * `Err(DataAccessError)` - lookup or execution failed
    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, DataAccessError>;

    /// Update an existing member row
    ///
    /// # Returns
    /// * `Ok(true)` - a row was changed
    /// * `Ok(false)` - no row matched the member id
    async fn update_member(&self, member: &Member) -> Result<bool, DataAccessError>;

    /// Delete a member by login id, returning whether a row was removed
    async fn delete_member(&self, id: &str) -> Result<bool, DataAccessError>;

    /// List every member row
    async fn list_members(&self) -> Result<Vec<Member>, DataAccessError>;
}
