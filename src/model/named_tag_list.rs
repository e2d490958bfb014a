use serde::{Deserialize, Serialize};

use crate::model::Id;

/// A user-defined, ordered collection of tags.
///
/// The bucket a list belongs to is passed alongside the value rather than
/// stored on it, so it never appears in a JSON representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTagList {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NamedTagList {
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            tags,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }
}
