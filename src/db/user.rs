use serde::{Deserialize, Serialize};
use sqlx::Row as _;

use super::{Client, Error};

#[derive(Clone, Debug)]
pub struct User {
    pub id: Id,
    pub name: String,
}

/// Store-assigned user identifier. Never client-supplied.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    sqlx::Type,
)]
#[sqlx(transparent)]
pub struct Id(i64);

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Client {
    pub async fn find_all_users(&self) -> Result<Vec<User>, Error> {
        const SQL: &str = "SELECT id, name FROM users";
        Ok(sqlx::query(SQL)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    pub async fn create_user(&self, name: &str) -> Result<User, Error> {
        const SQL: &str = "INSERT INTO users (name) VALUES (?)";
        let done = sqlx::query(SQL).bind(name).execute(&self.pool).await?;
        Ok(User {
            id: Id(done.last_insert_rowid()),
            name: name.to_string(),
        })
    }
}
