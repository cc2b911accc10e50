use async_trait::async_trait;
use sqlx::{FromRow, Pool, Sqlite};
use anyhow::Result;
use uuid::Uuid;

use crate::models::{Movie, MovieDocument};

/// 电影文档仓库接口
///
/// ID 由仓库在插入时生成；格式不合法的 ID 一律视为不存在。
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// 插入并返回新 ID
    async fn insert_movie(&self, movie: &Movie) -> Result<String>;
    async fn find_movie(&self, id: &str) -> Result<Option<MovieDocument>>;
    async fn find_all_movies(&self) -> Result<Vec<MovieDocument>>;
    /// 整体替换，返回匹配的文档数
    async fn replace_movie(&self, id: &str, movie: &Movie) -> Result<u64>;
    /// 删除，返回删除的文档数
    async fn delete_movie(&self, id: &str) -> Result<u64>;
    async fn count_movies(&self) -> Result<i64>;
}

#[derive(Debug, FromRow)]
struct MovieRow {
    id: String,
    document: String,
}

impl MovieRow {
    fn into_document(self) -> Result<MovieDocument> {
        let movie: Movie = serde_json::from_str(&self.document)
            .map_err(|e| anyhow::anyhow!("Corrupted movie document {}: {}", self.id, e))?;
        Ok(MovieDocument { id: self.id, movie })
    }
}

/// 规范化 ID；无法解析时返回 None
fn parse_id(id: &str) -> Option<String> {
    Uuid::parse_str(id).ok().map(|uuid| uuid.to_string())
}

/// SQLite 文档仓库实现
#[derive(Clone)]
pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqliteRepository {
    async fn insert_movie(&self, movie: &Movie) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let document = serde_json::to_string(movie)?;

        sqlx::query("INSERT INTO movies (id, document) VALUES (?, ?)")
            .bind(&id)
            .bind(document)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn find_movie(&self, id: &str) -> Result<Option<MovieDocument>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, MovieRow>("SELECT id, document FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(MovieRow::into_document).transpose()
    }

    async fn find_all_movies(&self) -> Result<Vec<MovieDocument>> {
        let rows = sqlx::query_as::<_, MovieRow>("SELECT id, document FROM movies ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(MovieRow::into_document).collect()
    }

    async fn replace_movie(&self, id: &str, movie: &Movie) -> Result<u64> {
        let Some(id) = parse_id(id) else {
            return Ok(0);
        };
        let document = serde_json::to_string(movie)?;

        let result = sqlx::query("UPDATE movies SET document = ? WHERE id = ?")
            .bind(document)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_movie(&self, id: &str) -> Result<u64> {
        let Some(id) = parse_id(id) else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count_movies(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
