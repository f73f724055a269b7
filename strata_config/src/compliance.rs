//! Compliance framework tiers selecting hardening defaults.
//!
//! Exactly one framework is active per resolution; it selects which
//! compliance-defaults layer a component supplies at rank 1. Every `match`
//! on [`ComplianceFramework`] is exhaustive, so adding a tier forces each
//! component's defaults provider to handle it at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StrataError;

/// Security and assurance tier active for one resolution.
///
/// The canonical string identifiers (accepted by [`FromStr`] and used by
/// serde) are `commercial`, `fedramp-moderate`, and `fedramp-high`.
///
/// Compliance defaults injected under a tier sit at rank 1, below
/// environment, manifest, and policy layers: they are hardening *defaults*,
/// overridable by manifest authors. Values a governance regime must not let
/// authors weaken belong in the rank-4 policy layer instead.
///
/// # Examples
///
/// ```rust
/// use strata_config::ComplianceFramework;
///
/// let tier: ComplianceFramework = "fedramp-high".parse()?;
/// assert!(tier.is_fedramp());
/// assert_eq!(tier.to_string(), "fedramp-high");
/// # Ok::<_, strata_config::StrataError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceFramework {
    /// Baseline commercial hardening.
    Commercial,
    /// FedRAMP Moderate hardening defaults.
    FedrampModerate,
    /// FedRAMP High hardening defaults.
    FedrampHigh,
}

impl ComplianceFramework {
    /// All frameworks, in ascending assurance order.
    pub const ALL: [Self; 3] = [Self::Commercial, Self::FedrampModerate, Self::FedrampHigh];

    /// Canonical identifier for the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::FedrampModerate => "fedramp-moderate",
            Self::FedrampHigh => "fedramp-high",
        }
    }

    /// Whether the tier is one of the FedRAMP assurance levels.
    #[must_use]
    pub const fn is_fedramp(self) -> bool {
        matches!(self, Self::FedrampModerate | Self::FedrampHigh)
    }
}

impl fmt::Display for ComplianceFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceFramework {
    type Err = StrataError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "commercial" => Ok(Self::Commercial),
            "fedramp-moderate" => Ok(Self::FedrampModerate),
            "fedramp-high" => Ok(Self::FedrampHigh),
            other => Err(StrataError::UnknownFramework {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ComplianceFramework;
    use crate::error::StrataError;

    #[test]
    fn identifiers_round_trip() {
        for tier in ComplianceFramework::ALL {
            let parsed: Result<ComplianceFramework, _> = tier.as_str().parse();
            assert_eq!(parsed.ok(), Some(tier));
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let parsed: Result<ComplianceFramework, _> = "fedramp-maximum".parse();
        assert!(matches!(
            parsed,
            Err(StrataError::UnknownFramework { value }) if value == "fedramp-maximum"
        ));
    }

    #[test]
    fn serde_names_match_canonical_identifiers() {
        for tier in ComplianceFramework::ALL {
            let serialised = serde_json::to_value(tier).ok();
            assert_eq!(serialised, Some(serde_json::Value::String(tier.as_str().to_owned())));
        }
    }

    #[test]
    fn only_fedramp_tiers_report_fedramp() {
        assert!(!ComplianceFramework::Commercial.is_fedramp());
        assert!(ComplianceFramework::FedrampModerate.is_fedramp());
        assert!(ComplianceFramework::FedrampHigh.is_fedramp());
    }
}
