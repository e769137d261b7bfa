use serde::{Deserialize, Serialize};

/// Payload returned by the upstream joke API and relayed back to callers.
///
/// A body without a `joke` field deserializes to `None` and is serialized
/// back as `{"joke": null}`. Other upstream fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeResponse {
    #[serde(default)]
    pub joke: Option<String>,
}
