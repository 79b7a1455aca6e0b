use serde::{Deserialize, Deserializer, Serialize};

/// Invoice as submitted by the caller.
///
/// Every field is caller-supplied and trusted: `sub_total` and `total` are
/// rendered as given and never recomputed from the rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InvoiceData {
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_number: i64,
    /// Empty means "today".
    #[serde(deserialize_with = "null_as_default")]
    pub issued_date: String,
    /// Empty means "On Receipt".
    #[serde(deserialize_with = "null_as_default")]
    pub due_date: String,

    #[serde(deserialize_with = "null_as_default")]
    pub client_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_city_state_zip: String,

    #[serde(deserialize_with = "null_as_default")]
    pub your_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub your_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub your_city_state_zip: String,

    #[serde(deserialize_with = "null_as_default")]
    pub rows: Vec<RowData>,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_total: f64,
    /// Percentage; 0 omits the line.
    #[serde(deserialize_with = "null_as_default")]
    pub discount: f64,
    /// Percentage; 0 omits the line.
    #[serde(deserialize_with = "null_as_default")]
    pub tax: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
}

/// One line item. `amount` is expected to be `quantity * rate` but that is
/// the caller's business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RowData {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
}

impl InvoiceData {
    pub fn has_discount(&self) -> bool {
        self.discount != 0.0
    }

    pub fn has_tax(&self) -> bool {
        self.tax != 0.0
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
