//! Database operations for posts

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::shared::Post;

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    text: String,
    name: String,
    avatar: String,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            user: row.user_id,
            text: row.text,
            name: row.name,
            avatar: row.avatar,
            date: row.created_at,
        }
    }
}

/// Store a new post
///
/// `name` and `avatar` are copied from the author so the post keeps
/// rendering the same way if the profile changes later.
pub async fn create_post(
    pool: &SqlitePool,
    user_id: Uuid,
    text: &str,
    name: &str,
    avatar: &str,
) -> Result<Post, sqlx::Error> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (id, user_id, text, name, avatar, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, user_id, text, name, avatar, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(text)
    .bind(name)
    .bind(avatar)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// All posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, user_id, text, name, avatar, created_at
        FROM posts
        ORDER BY seq DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Post::from).collect())
}

/// Delete every post written by `user_id`; returns the number removed
pub async fn delete_posts_by_user(
    conn: &mut SqliteConnection,
    user_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE user_id = ?1")
        .bind(user_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
