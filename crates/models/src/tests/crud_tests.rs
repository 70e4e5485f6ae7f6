use anyhow::Result;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::memory_db;
use crate::data_processor;

#[tokio::test]
async fn test_upsert_inserts_new_key() -> Result<()> {
    let db = memory_db().await?;

    let created = data_processor::upsert(&db, 1, 12345).await?;
    assert_eq!(created, data_processor::Model { user_id: 1, dp_value: 12345 });

    let found = data_processor::find(&db, 1).await?;
    assert_eq!(found, Some(created));
    Ok(())
}

/// Last write wins and the key stays unique.
#[tokio::test]
async fn test_upsert_overwrites_existing_key() -> Result<()> {
    let db = memory_db().await?;

    data_processor::upsert(&db, 1, 100).await?;
    data_processor::upsert(&db, 1, 200).await?;

    let found = data_processor::find(&db, 1).await?.expect("row for user 1");
    assert_eq!(found.dp_value, 200);
    assert_eq!(data_processor::Entity::find().count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_upsert_keeps_other_keys_untouched() -> Result<()> {
    let db = memory_db().await?;

    data_processor::upsert(&db, 1, 10).await?;
    data_processor::upsert(&db, 2, 20).await?;
    data_processor::upsert(&db, 1, 11).await?;

    assert_eq!(data_processor::find(&db, 2).await?.map(|m| m.dp_value), Some(20));
    assert_eq!(data_processor::Entity::find().count(&db).await?, 2);
    Ok(())
}

#[tokio::test]
async fn test_upsert_accepts_full_i64_range() -> Result<()> {
    let db = memory_db().await?;

    data_processor::upsert(&db, -1, i64::MIN).await?;
    data_processor::upsert(&db, i32::MAX, i64::MAX).await?;

    assert_eq!(data_processor::find(&db, -1).await?.map(|m| m.dp_value), Some(i64::MIN));
    assert_eq!(data_processor::find(&db, i32::MAX).await?.map(|m| m.dp_value), Some(i64::MAX));
    Ok(())
}

#[tokio::test]
async fn test_find_missing_key_is_none() -> Result<()> {
    let db = memory_db().await?;
    assert!(data_processor::find(&db, 404).await?.is_none());
    Ok(())
}
