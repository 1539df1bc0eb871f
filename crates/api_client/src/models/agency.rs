use model::{AgencyId, ReportCategory};
use serde::{Deserialize, Serialize};

/// Government agency which handles reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: AgencyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Report categories which are routed to this agency.
    #[serde(default)]
    pub categories: Vec<ReportCategory>,
}
