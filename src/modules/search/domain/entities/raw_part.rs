use serde::{Deserialize, Deserializer, Serialize};

/// Part record exactly as the catalog service returns it.
///
/// Only the identifying fields are expected; when one is missing or `null` it
/// decodes as an empty string instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPartRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub part_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supplier: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
