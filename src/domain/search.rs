//! Player directory filters.

use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Raw search form. Every field is optional and arrives from either a query
/// string or a JSON body; blank fields are ignored. Ages may be sent as text
/// or as JSON numbers.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(default)]
pub struct PlayerSearch {
    /// Exact sport value
    pub deporte: Option<String>,
    /// Substring of the position
    pub posicion: Option<String>,
    /// Minimum age, inclusive
    #[serde(deserialize_with = "text_or_number")]
    pub edad_min: Option<String>,
    /// Maximum age, inclusive
    #[serde(deserialize_with = "text_or_number")]
    pub edad_max: Option<String>,
    /// Substring of the country
    pub pais: Option<String>,
    /// Substring of the city
    pub ciudad: Option<String>,
    /// Exact level value
    pub nivel: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Keep the raw text so malformed ages are dropped later instead of failing
/// the whole request.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Integer(n) => n.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    }))
}

/// Normalized filters: only present, non-blank, well-formed criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub deporte: Option<String>,
    pub posicion: Option<String>,
    pub edad_min: Option<i32>,
    pub edad_max: Option<i32>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub nivel: Option<String>,
}

impl PlayerFilter {
    pub fn is_empty(&self) -> bool {
        *self == PlayerFilter::default()
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ages that fail to parse, or are negative, are dropped.
fn age(value: &Option<String>) -> Option<i32> {
    present(value)
        .and_then(|s| s.parse::<i32>().ok())
        .filter(|n| *n >= 0)
}

impl From<&PlayerSearch> for PlayerFilter {
    fn from(search: &PlayerSearch) -> Self {
        Self {
            deporte: present(&search.deporte),
            posicion: present(&search.posicion),
            edad_min: age(&search.edad_min),
            edad_max: age(&search.edad_max),
            pais: present(&search.pais),
            ciudad: present(&search.ciudad),
            nivel: present(&search.nivel),
        }
    }
}
