//! Request parameter types.
//!
//! A [`ParameterSet`] is the flat `name -> value` map every Seller Center
//! call is built from. It is keyed by a `BTreeMap`, so iteration is always in
//! byte-wise ascending key order regardless of insertion order.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Parameter names whose date values are converted to ISO-8601 text before
/// they are merged into a request.
pub const DATE_FILTER_KEYS: [&str; 4] = [
    "CreatedBefore",
    "CreatedAfter",
    "UpdatedBefore",
    "UpdatedAfter",
];

/// Formats an instant as ISO-8601 with a numeric UTC offset.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use lazada_seller_center::signing::format_iso8601;
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(format_iso8601(&instant.into()), "2024-01-02T03:04:05+00:00");
/// ```
#[must_use]
pub fn format_iso8601(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// A single parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// A plain string value.
    Text(String),
    /// A list of strings, transmitted as a JSON array (e.g. `["a","b"]`).
    List(Vec<String>),
    /// A date, transmitted as ISO-8601 with a numeric offset.
    Date(DateTime<FixedOffset>),
}

impl ParamValue {
    /// Renders the value exactly as it is signed and transmitted.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => serde_json::Value::from(items.clone()).to_string(),
            Self::Date(date) => format_iso8601(date),
        }
    }

    /// Returns the string value if this is a `Text` parameter.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

impl From<DateTime<FixedOffset>> for ParamValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value.into())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(u32, u64, i32, i64, usize);

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Text(value.to_string())
    }
}

/// A set of named request parameters.
///
/// Keys are unique; inserting an existing key replaces its value. Iteration
/// order is the canonical signing order.
///
/// # Example
///
/// ```rust
/// use lazada_seller_center::ParameterSet;
///
/// let params = ParameterSet::new()
///     .with("Limit", 10u32)
///     .with("Status", "pending")
///     .with("SkuSellerList", vec!["sku-1", "sku-2"]);
///
/// let keys: Vec<&str> = params.keys().collect();
/// assert_eq!(keys, vec!["Limit", "SkuSellerList", "Status"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet(BTreeMap<String, ParamValue>);

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter and returns the set, for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter, returning the previous value for that key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over keys in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over parameters in canonical order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Merges `other` into this set. Values from `other` win on key collisions.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Converts date values of the date filter parameters
    /// ([`DATE_FILTER_KEYS`]) to ISO-8601 text.
    #[must_use]
    pub fn with_dates_as_text(mut self) -> Self {
        for key in DATE_FILTER_KEYS {
            if let Some(value) = self.0.get_mut(key) {
                if let ParamValue::Date(date) = value {
                    let text = format_iso8601(date);
                    *value = ParamValue::Text(text);
                }
            }
        }
        self
    }

    /// Renders every value to its transmitted string form.
    #[must_use]
    pub fn to_wire_fields(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.to_wire()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, ParamValue);
    type IntoIter = btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
