use std::collections::BTreeMap;

use serde::Serialize;

/// Full category id -> label mapping, ascending id order on the wire.
#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: BTreeMap<i64, String>,
}
