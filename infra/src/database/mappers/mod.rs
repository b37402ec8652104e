//! Typed mappers dispatching through the session template

pub mod member;

pub use member::SqlMemberMapper;
