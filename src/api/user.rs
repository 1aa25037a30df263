use serde::{Deserialize, Serialize};

pub use crate::db::user::Id;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub id: Id,
    pub name: String,
}

/// Inbound user shape. Declared for the API surface, but no route consumes
/// it: there is no write endpoint.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub name: String,
    pub authority_name: String,
}
