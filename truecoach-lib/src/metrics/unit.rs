//! Assessment units and the value coercion policy attached to each.

use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::IntoAppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Unit an assessment is measured in.
///
/// Matching against the wire text is exact and case-sensitive. Anything outside the known
/// vocabulary is kept verbatim as [`Unit::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    Calories,
    Kilograms,
    Pounds,
    #[strum(serialize = "yes/no")]
    YesNo,
    #[strum(serialize = "beats per minute")]
    BeatsPerMinute,
    Centimeters,
    Inches,
    Percent,
    Reps,
    Time,
    Other,
    #[strum(default)]
    Unknown(String),
}

/// How raw sample values are turned into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Parsed as a decimal number; a parse failure is fatal.
    Decimal,

    /// `1.0` for exactly `"yes"`, `0.0` otherwise.
    YesNo,

    /// Known unit whose values are not interpreted yet; always `0.0`.
    Placeholder,

    /// Unit outside the vocabulary; `0.0` and reported as a diagnostic.
    Unsupported,
}

impl Unit {
    /// The unit's wire text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown(text) => text,
            known => <&'static str>::from(known),
        }
    }

    /// Map wire text onto the vocabulary, keeping unrecognized text as [`Unit::Unknown`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.parse().unwrap_or_else(|_| Self::Unknown(text.to_string()))
    }

    #[must_use]
    pub const fn coercion(&self) -> Coercion {
        match self {
            Self::Calories | Self::Kilograms | Self::Pounds => Coercion::Decimal,
            Self::YesNo => Coercion::YesNo,
            Self::BeatsPerMinute | Self::Centimeters | Self::Inches | Self::Percent | Self::Reps | Self::Time | Self::Other => {
                Coercion::Placeholder
            }
            Self::Unknown(_) => Coercion::Unsupported,
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Normalize an already unpadded raw value according to this unit's [`Coercion`].
    ///
    /// # Errors
    ///
    /// Returns an error carrying `raw` when a decimal unit's value does not parse.
    pub fn coerce(&self, raw: &str) -> Result<f64> {
        match self.coercion() {
            Coercion::Decimal => raw.parse::<f64>().into_app_err_with(|| format!("failed parsing value '{raw}'")),
            Coercion::YesNo => Ok(if raw == "yes" { 1.0 } else { 0.0 }),
            Coercion::Placeholder | Coercion::Unsupported => Ok(0.0),
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}
