use std::net;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub db: Db,
    pub http: Http,
}

#[derive(Deserialize)]
pub struct Db {
    /// Logical name of the embedded database. Becomes the file name inside
    /// the scratch directory.
    pub name: String,

    /// Users inserted at startup, in order. Ids are assigned by the store.
    #[serde(default)]
    pub seed: Vec<String>,
}

#[derive(Deserialize)]
pub struct Http {
    pub server: Server,
    pub cors: Cors,
}

#[derive(Deserialize)]
pub struct Server {
    pub addr: net::SocketAddr,
}

#[derive(Deserialize)]
pub struct Cors {
    pub allowed_origins: Vec<String>,
}
