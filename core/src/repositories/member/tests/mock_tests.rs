//! Unit tests for the mock member repository

use crate::domain::entities::member::Member;
use crate::errors::DataAccessError;
use crate::repositories::member::{MemberRepository, MockMemberRepository};

fn sample_member() -> Member {
    Member::new("장발장", "mr.jang", "010-222-3333")
}

#[tokio::test]
async fn test_insert_and_find_round_trip() {
    let repo = MockMemberRepository::new();
    let member = sample_member();

    repo.insert_member(&member).await.unwrap();

    let found = repo.find_by_id("mr.jang").await.unwrap();
    assert_eq!(found, Some(member));
}

#[tokio::test]
async fn test_find_missing_member_returns_none() {
    let repo = MockMemberRepository::new();
    let found = repo.find_by_id("nobody").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_insert_fails() {
    let repo = MockMemberRepository::new();
    let member = sample_member();

    repo.insert_member(&member).await.unwrap();
    let result = repo.insert_member(&member).await;

    assert!(matches!(
        result,
        Err(DataAccessError::SqlExecution { .. })
    ));
}

#[tokio::test]
async fn test_update_existing_member() {
    let repo = MockMemberRepository::new();
    repo.insert_member(&sample_member()).await.unwrap();

    let updated = Member::new("장발장", "mr.jang", "010-999-8888");
    assert!(repo.update_member(&updated).await.unwrap());

    let found = repo.find_by_id("mr.jang").await.unwrap().unwrap();
    assert_eq!(found.phone, "010-999-8888");
}

#[tokio::test]
async fn test_update_missing_member_returns_false() {
    let repo = MockMemberRepository::new();
    assert!(!repo.update_member(&sample_member()).await.unwrap());
}

#[tokio::test]
async fn test_delete_member() {
    let repo = MockMemberRepository::new();
    repo.insert_member(&sample_member()).await.unwrap();

    assert!(repo.delete_member("mr.jang").await.unwrap());
    assert!(!repo.delete_member("mr.jang").await.unwrap());
    assert!(repo.find_by_id("mr.jang").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_members_sorted_by_id() {
    let repo = MockMemberRepository::new();
    repo.insert_member(&Member::new("b", "beta", "2")).await.unwrap();
    repo.insert_member(&Member::new("a", "alpha", "1")).await.unwrap();

    let all = repo.list_members().await.unwrap();
    let ids: Vec<&str> = all.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "beta"]);
}
