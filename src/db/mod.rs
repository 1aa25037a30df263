pub mod user;

use std::{error, fmt, io};

use derive_more::From;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tempfile::TempDir;

use crate::config;

pub use self::user::User;

/// Boots the embedded database and returns a handle to it.
///
/// The database file lives in a freshly created scratch directory that is
/// removed together with the returned [`Client`], so nothing survives a
/// restart. The `users` schema is dropped and recreated on every boot.
pub async fn connect(config: &config::Db) -> Result<Client, Error> {
    let scratch = tempfile::Builder::new()
        .prefix("user-service.")
        .tempdir()
        .map_err(Error::CreateScratchDir)?;

    let options = SqliteConnectOptions::new()
        .filename(scratch.path().join(format!("{}.db", config.name)))
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::query("DROP TABLE IF EXISTS users").execute(&pool).await?;
    sqlx::query(
        "CREATE TABLE users ( \
             id   INTEGER PRIMARY KEY AUTOINCREMENT, \
             name TEXT NOT NULL \
         )",
    )
    .execute(&pool)
    .await?;

    Ok(Client {
        pool,
        _scratch: scratch,
    })
}

pub struct Client {
    pool: SqlitePool,

    // Holds the scratch directory open for the lifetime of the client.
    _scratch: TempDir,
}

#[derive(Debug, From)]
pub enum Error {
    CreateScratchDir(io::Error),
    #[from]
    Sql(sqlx::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateScratchDir(e) => {
                write!(f, "failed to create a scratch directory: {e}")
            }
            Self::Sql(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::CreateScratchDir(e) => Some(e),
            Self::Sql(e) => Some(e),
        }
    }
}
