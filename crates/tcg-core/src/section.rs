//! # Section Slugs and Categories
//!
//! Closed identifiers for the sections of the compliance guide. The section
//! catalogue is authored as data, but every slug it names must be one of the
//! variants below, so a typo in the catalogue fails at load time rather than
//! producing an orphaned result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TcgError;

/// Unique identifier of a compliance guide section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionSlug {
    /// Carrier licences and licence conditions.
    CarrierLicensing,
    /// Service provider rules for carriage service providers.
    ServiceProviderRules,
    /// Consumer protection code, complaints handling and customer contracts.
    ConsumerProtection,
    /// Industry ombudsman scheme membership.
    IndustryOmbudsman,
    /// Technical standards, customer equipment and cabling rules.
    TechnicalRegulation,
    /// Telephone numbering plan and number portability.
    Numbering,
    /// Emergency call service access.
    EmergencyServices,
    /// Interception capability and access to stored communications.
    InterceptionAndAccess,
    /// Metadata retention obligations.
    DataRetention,
    /// Security of networks and notification of changes.
    NationalSecurity,
    /// Privacy, customer information and data protection.
    PrivacyAndDataProtection,
    /// Online content and content service obligations.
    ContentRegulation,
    /// Access to facilities and network infrastructure.
    InfrastructureAccess,
    /// Industry levy and funding contributions.
    IndustryLevy,
    /// Offshore operations, cross-border supply and international roaming.
    InternationalAspects,
}

impl SectionSlug {
    /// All slugs in the guide's published order.
    pub fn all() -> &'static [SectionSlug] {
        &[
            Self::CarrierLicensing,
            Self::ServiceProviderRules,
            Self::ConsumerProtection,
            Self::IndustryOmbudsman,
            Self::TechnicalRegulation,
            Self::Numbering,
            Self::EmergencyServices,
            Self::InterceptionAndAccess,
            Self::DataRetention,
            Self::NationalSecurity,
            Self::PrivacyAndDataProtection,
            Self::ContentRegulation,
            Self::InfrastructureAccess,
            Self::IndustryLevy,
            Self::InternationalAspects,
        ]
    }

    /// Kebab-case slug, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CarrierLicensing => "carrier-licensing",
            Self::ServiceProviderRules => "service-provider-rules",
            Self::ConsumerProtection => "consumer-protection",
            Self::IndustryOmbudsman => "industry-ombudsman",
            Self::TechnicalRegulation => "technical-regulation",
            Self::Numbering => "numbering",
            Self::EmergencyServices => "emergency-services",
            Self::InterceptionAndAccess => "interception-and-access",
            Self::DataRetention => "data-retention",
            Self::NationalSecurity => "national-security",
            Self::PrivacyAndDataProtection => "privacy-and-data-protection",
            Self::ContentRegulation => "content-regulation",
            Self::InfrastructureAccess => "infrastructure-access",
            Self::IndustryLevy => "industry-levy",
            Self::InternationalAspects => "international-aspects",
        }
    }
}

impl fmt::Display for SectionSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionSlug {
    type Err = TcgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|slug| slug.as_str() == s)
            .ok_or_else(|| TcgError::Parse(format!("unknown section slug: {s:?}")))
    }
}

/// Topical grouping of a section in the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionCategory {
    /// Licensing and registration.
    Licensing,
    /// Consumer-facing obligations.
    ConsumerProtection,
    /// Technical standards and network rules.
    Technical,
    /// Numbering and emergency services.
    Numbering,
    /// Law enforcement and national security.
    Security,
    /// Privacy and data handling.
    Privacy,
    /// Content services.
    Content,
    /// Industry funding and levies.
    Industry,
    /// Cross-border matters.
    International,
}

impl SectionCategory {
    /// Kebab-case tag, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Licensing => "licensing",
            Self::ConsumerProtection => "consumer-protection",
            Self::Technical => "technical",
            Self::Numbering => "numbering",
            Self::Security => "security",
            Self::Privacy => "privacy",
            Self::Content => "content",
            Self::Industry => "industry",
            Self::International => "international",
        }
    }
}

impl fmt::Display for SectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
