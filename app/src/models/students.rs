//! Students model.
//!
//! Row-level persistence helpers for the `students` table. This layer is
//! the sole writer of ids and timestamps; callers pass domain values only.
//! Timestamps are assigned explicitly here rather than through entity
//! lifecycle hooks.

pub use super::entities::students::*;

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, QueryFilter, QueryOrder, Set};

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Insert a new row, assigning the id and both timestamps.
    pub async fn insert_new(
        db: &DatabaseConnection,
        value: String,
        is_completed: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            value: Set(value),
            is_completed: Set(is_completed),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// All rows, newest first. Id breaks ties between equal timestamps.
    pub async fn find_all_ordered(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Rows filtered by completion state, newest first.
    pub async fn find_by_is_completed(
        db: &DatabaseConnection,
        is_completed: bool,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::IsCompleted.eq(is_completed))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Rows whose value contains the given fragment.
    pub async fn find_by_value_containing(
        db: &DatabaseConnection,
        fragment: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Value.contains(fragment))
            .all(db)
            .await
    }
}

impl Model {
    /// Persist this row with its completion flag inverted, refreshing
    /// `updated_at`. Fails with `RecordNotUpdated` if the row is gone.
    pub async fn save_toggled(self, db: &DatabaseConnection) -> Result<Model, DbErr> {
        let toggled = !self.is_completed;
        let mut active: ActiveModel = self.into();
        active.is_completed = Set(toggled);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::Migrator;
    use plinth::database::{DatabaseConfig, DbConnection};
    use pretty_assertions::assert_eq;
    use sea_orm_migration::MigratorTrait;

    async fn db() -> DbConnection {
        let mut config = DatabaseConfig::with_url("sqlite::memory:");
        config.max_connections = 1;
        config.min_connections = 1;
        let conn = DbConnection::connect(&config).await.unwrap();
        Migrator::up(conn.inner(), None).await.unwrap();
        conn
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamps() {
        let conn = db().await;
        let row = Entity::insert_new(conn.inner(), "read a book".into(), false)
            .await
            .unwrap();

        assert!(row.id > 0);
        assert_eq!(row.value, "read a book");
        assert!(!row.is_completed);
        assert_eq!(row.created_at, row.updated_at);
    }

    #[tokio::test]
    async fn find_by_is_completed_filters() {
        let conn = db().await;
        Entity::insert_new(conn.inner(), "open task".into(), false)
            .await
            .unwrap();
        Entity::insert_new(conn.inner(), "done task".into(), true)
            .await
            .unwrap();

        let open = Entity::find_by_is_completed(conn.inner(), false)
            .await
            .unwrap();
        let done = Entity::find_by_is_completed(conn.inner(), true)
            .await
            .unwrap();

        assert_eq!(open.len(), 1);
        assert_eq!(open[0].value, "open task");
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].value, "done task");
    }

    #[tokio::test]
    async fn find_by_value_containing_matches_fragments() {
        let conn = db().await;
        Entity::insert_new(conn.inner(), "buy milk".into(), false)
            .await
            .unwrap();
        Entity::insert_new(conn.inner(), "buy bread".into(), false)
            .await
            .unwrap();
        Entity::insert_new(conn.inner(), "walk the dog".into(), false)
            .await
            .unwrap();

        let matches = Entity::find_by_value_containing(conn.inner(), "buy")
            .await
            .unwrap();
        assert_eq!(matches.len(), 2);

        let none = Entity::find_by_value_containing(conn.inner(), "swim")
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn ordering_is_newest_first() {
        let conn = db().await;
        for value in ["first", "second", "third"] {
            Entity::insert_new(conn.inner(), value.into(), false)
                .await
                .unwrap();
        }

        let all = Entity::find_all_ordered(conn.inner()).await.unwrap();
        let values: Vec<_> = all.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["third", "second", "first"]);
    }
}
