//! Inserts a member and reads it back
//!
//! Requires a running MySQL instance reachable through `DATABASE_URL` (or
//! `config/application.toml`) with the `member` table applied.

use mb_core::domain::entities::member::Member;
use mb_core::repositories::member::MemberRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let services = mb_infra::initialize().await?;

    let member = Member::new("장발장", "mr.jang", "010-222-3333");
    println!("inserting: {:?}", member);
    services.members.insert_member(&member).await?;

    let found = services.members.find_by_id("mr.jang").await?;
    println!("selected:  {:?}", found);

    println!("{}", services.pool.statistics());

    services.members.delete_member("mr.jang").await?;
    services.shutdown().await;
    Ok(())
}
