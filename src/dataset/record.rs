//! Record schema for the fixed 15-column KEN_ALL layout.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the KEN_ALL postal-code dataset.
///
/// Field order matches the fixed 15-column CSV layout; the file has no header
/// row, so positional deserialization depends on this ordering. The four
/// flag columns are 0/1 in the source and serialize to JSON as native
/// booleans; the two status columns serialize as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRecord {
    /// JIS local government code.
    pub local_gov_code: String,
    /// Old 5-digit postal code.
    pub old_zip_code: String,
    /// 7-digit postal code. Lookup key; not unique across rows.
    pub zip_code: String,
    /// Prefecture name, half-width katakana.
    pub prefecture_kana: String,
    /// City name, half-width katakana.
    pub city_kana: String,
    /// Town name, half-width katakana.
    pub town_kana: String,
    /// Prefecture name.
    pub prefecture: String,
    /// City name.
    pub city: String,
    /// Town name.
    pub town: String,
    /// One area is covered by multiple postal codes.
    #[serde(deserialize_with = "flag_from_int")]
    pub multiple_zip_codes: bool,
    /// Town has koaza banchi (block-number) variants.
    #[serde(deserialize_with = "flag_from_int")]
    pub koaza_banchi: bool,
    /// Town has chome (sub-district) numbering.
    #[serde(deserialize_with = "flag_from_int")]
    pub has_chome: bool,
    /// One postal code covers multiple towns.
    #[serde(deserialize_with = "flag_from_int")]
    pub multiple_towns: bool,
    /// Update status code.
    pub update_status: u8,
    /// Update reason code.
    pub update_reason: u8,
}

/// Deserialize a 0/1 source column into a bool, rejecting any other value.
fn flag_from_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid flag value {other}, expected 0 or 1"
        ))),
    }
}
