use serde::{Deserialize, Serialize};

/// JSON body which the server returns with error status codes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(alias = "error", alias = "detail")]
    pub message: String,
}
