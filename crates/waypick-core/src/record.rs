use serde::{Deserialize, Serialize};

use crate::ident::derive_id;
use crate::path::UiPath;

/// One recorded mapping between a UI path and a page interaction.
///
/// Immutable after construction; destroyed only by a bulk clear. The
/// interaction kind serializes as `"type"` to keep the wire shape the
/// collector side consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: String,
    pub parent: Option<String>,
    pub path: Vec<String>,
    pub title: String,
    pub route: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ActionRecord {
    /// Builds a record for picking `title` under `path`.
    ///
    /// `id` derives from the full path including the new leaf; `parent`
    /// derives from the base path alone, or is `None` when the base path
    /// is empty.
    pub fn build(path: &UiPath, title: &str, route: &str, kind: &str) -> Self {
        let id = derive_id(path.segments(), title);
        let parent = path
            .segments()
            .split_last()
            .map(|(leaf, init)| derive_id(init, leaf));

        let mut full_path = path.segments().to_vec();
        full_path.push(title.to_string());

        Self {
            id,
            parent,
            path: full_path,
            title: title.to_string(),
            route: route.to_string(),
            kind: kind.to_string(),
        }
    }
}
