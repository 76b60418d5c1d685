use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A participant. `address` is the chain account the user settles from; it is
/// carried opaquely and never validated here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
