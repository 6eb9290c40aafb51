//! Deserializers for required form fields.

use serde::{de, Deserialize, Deserializer};

/// A required text field; an empty value counts as missing.
pub fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(de::Error::custom("required field is empty"));
    }
    Ok(value)
}

/// A required checkbox. Browsers send `on` for a ticked box.
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "off" | "false" | "f" | "0" | "no" | "n" => Ok(false),
        "" => Err(de::Error::custom("required field is empty")),
        other => Err(de::Error::custom(format!("{:?} is not a valid boolean", other))),
    }
}
