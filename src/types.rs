use serde::{Deserialize, Deserializer, Serialize};

/// Auxiliary statistics carried next to the measurements, in file order.
pub type Stats = serde_json::Map<String, serde_json::Value>;

/// Aggregated timings for one named target, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub avg: f64,
    // Older result files only recorded name and avg.
    #[serde(default)]
    pub median: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
}

/// Everything the runner hands to the chart generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub results: Vec<Measurement>,
    pub stats: Stats,
}

/// The `{"results": [...], "stats": {...}}` shape.
#[derive(Debug, Deserialize)]
pub struct WrappedResults {
    pub results: Vec<Measurement>,
    #[serde(default, deserialize_with = "lenient_stats")]
    pub stats: Stats,
}

/// The two on-disk shapes a results file may take.
#[derive(Debug)]
pub enum ResultFile {
    Wrapped(WrappedResults),
    Bare(Vec<Measurement>),
}

impl ResultFile {
    /// An object with a `results` key is the wrapped shape; anything else must
    /// be a bare array. Errors come from the chosen shape, with position info.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        let peek: serde_json::Value = serde_json::from_str(s)?;
        if peek.get("results").is_some() {
            Ok(ResultFile::Wrapped(serde_json::from_str(s)?))
        } else {
            Ok(ResultFile::Bare(serde_json::from_str(s)?))
        }
    }
}

/// Anything other than an object (`null`, a number, a list) means no stats.
fn lenient_stats<'de, D>(deserializer: D) -> Result<Stats, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Ok(Stats::new()),
    }
}

impl From<ResultFile> for ResultSet {
    fn from(file: ResultFile) -> Self {
        match file {
            ResultFile::Wrapped(WrappedResults { results, stats }) => ResultSet { results, stats },
            ResultFile::Bare(results) => ResultSet {
                results,
                stats: Stats::new(),
            },
        }
    }
}
