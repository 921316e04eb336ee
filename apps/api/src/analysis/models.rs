use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use crate::analysis::sections::SectionScore;

/// Display string for a contact field the extractor could not find.
pub const NOT_FOUND: &str = "Not found";

/// Full output of one resume analysis. Serialized in camelCase for the web client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0–100, the rounded mean of `sections[].score`.
    pub score: u8,
    pub summary: String,
    pub resume_summary: ResumeSummary,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: KeywordReport,
    pub sections: Vec<SectionScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub name: String,
    pub title: String,
    pub experience: String,
    pub education: String,
    pub skills: Vec<String>,
    pub contact: ContactDetails,
}

/// Contact fields stay `None` in Rust; on the wire an absent field is `"Not found"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(
        default,
        serialize_with = "or_not_found",
        deserialize_with = "from_not_found"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        serialize_with = "or_not_found",
        deserialize_with = "from_not_found"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        serialize_with = "or_not_found",
        deserialize_with = "from_not_found"
    )]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// Technical vocabulary hits, at most 10.
    pub found: Vec<String>,
    /// Randomly sampled terms absent from the text, at most 10.
    pub missing: Vec<String>,
}

fn or_not_found<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(NOT_FOUND))
}

fn from_not_found<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| v != NOT_FOUND))
}
