//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

use quill_core::domain::{NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// SeaORM-backed implementation of the post repository. Each statement runs
/// in its own store transaction; `id` and `time_created` are assigned by the
/// database via column defaults and never written from here.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    let msg = err.to_string();
    if msg.contains("violates") || msg.contains("constraint") || msg.contains("duplicate") {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        // id and time_created stay NotSet so Postgres fills them in; the
        // RETURNING clause hands back the completed row.
        let model = post::ActiveModel {
            title: Set(new_post.title),
            content: Set(new_post.content),
            author: Set(new_post.author),
            ..Default::default()
        };

        let model = model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        // No ORDER BY: the unordered listing is contractually unordered.
        let result = PostEntity::find().all(&self.db).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(map_db_err)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel {
            id: ActiveValue::Unchanged(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author: Set(post.author),
            // Immutable after insert.
            time_created: ActiveValue::NotSet,
        };

        let model = model.update(&self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            err => map_db_err(err),
        })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
