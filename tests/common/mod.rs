use std::sync::Arc;

use reqwest::StatusCode;
use tokio::{net, task};
use user_service::{api, config, db, server};

pub struct Client {
    base_url: String,
    inner: reqwest::Client,
    _server: task::JoinHandle<()>,
}

impl Client {
    /// Boots a fresh application instance on an ephemeral port with the
    /// given users seeded, and returns a client pointed at it.
    pub async fn spawn(seed: &[&str]) -> Self {
        let db_client = db::connect(&config::Db {
            name: "sample".to_string(),
            seed: Vec::new(),
        })
        .await
        .expect("failed to boot the database");

        for name in seed {
            db_client
                .create_user(name)
                .await
                .expect("failed to seed a user");
        }

        let app = server::router(Arc::new(server::AppState { db_client }));
        let listener = net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind a port");
        let addr = listener
            .local_addr()
            .expect("failed to get the bound address");
        let server = task::spawn(async move {
            axum::serve(listener, app).await.expect("server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            inner: reqwest::Client::new(),
            _server: server,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<api::User>, StatusCode> {
        Ok(self
            .inner
            .get(&self.base_url)
            .send()
            .await
            .expect("failed to send a request")
            .error_for_status()
            .map_err(|e| e.status().expect("status error"))?
            .json::<Vec<api::User>>()
            .await
            .expect("failed to get a response"))
    }

    pub async fn list_users_raw(&self) -> (StatusCode, serde_json::Value) {
        let response = self
            .inner
            .get(&self.base_url)
            .send()
            .await
            .expect("failed to send a request");
        let status = response.status();
        let body = response
            .json::<serde_json::Value>()
            .await
            .expect("failed to get a response");
        (status, body)
    }

    pub async fn post_root(&self) -> StatusCode {
        self.inner
            .post(&self.base_url)
            .send()
            .await
            .expect("failed to send a request")
            .status()
    }
}
