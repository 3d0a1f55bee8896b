use serde::{Deserialize, Serialize};

/// A single record kept in the backing file.
///
/// Missing fields decode to their zero value and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub email: String,
    pub age: i64,
}
