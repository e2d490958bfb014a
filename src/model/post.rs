use serde::{Deserialize, Serialize};

use crate::model::Id;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub image_uri: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
