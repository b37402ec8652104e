//! Repository interfaces and test doubles

pub mod member;

pub use member::{MemberRepository, MockMemberRepository};
