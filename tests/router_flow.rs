mod common;

use common::{names_in, seed_thing, test_data, TestContext};
use things::db::{thing, Role};
use things::types::error::AppError;

#[actix_web::test]
async fn test_read_only_without_follower_allows_writes() {
    let ctx = TestContext::new().await;

    let created = ctx
        .db
        .run_read_only(|conn| async move {
            assert_eq!(conn.role(), Role::Writing);
            let conn = conn.writable()?;
            thing::insert(&conn, test_data::named("Lamp")).await
        })
        .await
        .expect("Write inside read-only block should succeed without a follower");

    assert_eq!(created.name.as_deref(), Some("Lamp"));

    let listed = ctx
        .db
        .run_read_only(|conn| async move { thing::list_newest_first(&conn).await })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[actix_web::test]
async fn test_read_only_with_follower_rejects_writes() {
    let ctx = TestContext::with_follower().await;
    assert!(ctx.db.has_follower());

    let result = ctx
        .db
        .run_read_only(|conn| async move {
            assert_eq!(conn.role(), Role::Reading);
            let conn = conn.writable()?;
            thing::insert(&conn, test_data::named("Lamp")).await
        })
        .await;

    assert!(matches!(result, Err(AppError::ReadOnlyViolation)));

    // nothing reached either database
    assert!(names_in(&ctx.conn).await.is_empty());
    assert!(names_in(ctx.follower()).await.is_empty());
}

#[actix_web::test]
async fn test_reads_go_to_follower_and_writes_to_primary() {
    let ctx = TestContext::with_follower().await;
    seed_thing(ctx.follower(), "Replicated").await;

    ctx.db
        .run_writable(|conn| async move { thing::insert(&conn, test_data::named("Desk")).await })
        .await
        .expect("Writes go to the primary even with a follower configured");

    assert_eq!(names_in(&ctx.conn).await, [Some("Desk".to_string())]);
    assert_eq!(names_in(ctx.follower()).await, [Some("Replicated".to_string())]);

    let listed = ctx
        .db
        .run_read_only(|conn| async move { thing::list_newest_first(&conn).await })
        .await
        .unwrap();

    let names: Vec<_> = listed.iter().map(|t| t.name.as_deref().unwrap()).collect();
    assert_eq!(names, ["Replicated"]);
}

#[actix_web::test]
async fn test_readable_on_writable_reads_primary() {
    let ctx = TestContext::with_follower().await;
    seed_thing(ctx.follower(), "Replicated").await;

    let listed = ctx
        .db
        .run_writable(|conn| async move {
            thing::insert(&conn, test_data::named("Desk")).await?;
            let conn = conn.readable();
            assert_eq!(conn.role(), Role::Writing);
            thing::list_newest_first(&conn).await
        })
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name.as_deref(), Some("Desk"));
}

#[actix_web::test]
async fn test_errors_from_work_pass_through() {
    let ctx = TestContext::new().await;

    let result: Result<(), AppError> = ctx
        .db
        .run_read_only(|_conn| async move { Err(AppError::Internal("boom".into())) })
        .await;

    assert!(matches!(result, Err(AppError::Internal(msg)) if msg == "boom"));
}

#[actix_web::test]
async fn test_ping_reaches_primary() {
    let ctx = TestContext::new().await;
    ctx.db.ping().await.expect("Ping should succeed");
}
