//! # Business Type: Regulatory Classifications
//!
//! Defines the `BusinessType` enum: the closed set of regulatory
//! classifications a telecommunications business may hold. This is the ONE
//! definition used by the question catalogue, the section catalogue and the
//! rule engine. Every `match` on `BusinessType` must be exhaustive.
//!
//! A business may hold several classifications at once (a carrier that also
//! resells, an ISP that offers VoIP). The engine treats them as an unordered,
//! deduplicated set whose canonical order is declaration order below.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TcgError;

/// A regulatory classification a telecommunications business may hold.
///
/// # Classifications
///
/// | # | Tag | Description |
/// |---|-----|-------------|
/// | 1 | `carrier` | Owns network units used to supply carriage services to the public |
/// | 2 | `carriage-service-provider` | Supplies carriage services using another party's network |
/// | 3 | `content-service-provider` | Supplies content services (broadcast, online, premium) |
/// | 4 | `voip-provider` | Supplies voice over IP services |
/// | 5 | `equipment-supplier` | Imports, manufactures or supplies customer equipment and cabling |
/// | 6 | `reseller` | Resells another provider's services under its own brand |
/// | 7 | `isp` | Supplies internet access |
/// | 8 | `mvno` | Mobile virtual network operator |
///
/// The derived `Ord` follows declaration order and is the canonical order of
/// classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    /// Network unit owner supplying carriage services to the public.
    Carrier,
    /// Carriage service provider using a carrier's network.
    CarriageServiceProvider,
    /// Content service provider.
    ContentServiceProvider,
    /// Voice over IP provider.
    VoipProvider,
    /// Customer equipment or cabling supplier.
    EquipmentSupplier,
    /// Reseller of another provider's services.
    Reseller,
    /// Internet service provider.
    Isp,
    /// Mobile virtual network operator.
    Mvno,
}

/// Total number of business types. Used for compile-time assertions.
pub const BUSINESS_TYPE_COUNT: usize = 8;

impl BusinessType {
    /// Returns all business types in canonical order.
    pub fn all() -> &'static [BusinessType] {
        &[
            Self::Carrier,
            Self::CarriageServiceProvider,
            Self::ContentServiceProvider,
            Self::VoipProvider,
            Self::EquipmentSupplier,
            Self::Reseller,
            Self::Isp,
            Self::Mvno,
        ]
    }

    /// Returns the kebab-case tag for this business type.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Carrier => "carrier",
            Self::CarriageServiceProvider => "carriage-service-provider",
            Self::ContentServiceProvider => "content-service-provider",
            Self::VoipProvider => "voip-provider",
            Self::EquipmentSupplier => "equipment-supplier",
            Self::Reseller => "reseller",
            Self::Isp => "isp",
            Self::Mvno => "mvno",
        }
    }

    /// Human-readable label for rendering a business profile.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Carrier => "Carrier",
            Self::CarriageServiceProvider => "Carriage service provider",
            Self::ContentServiceProvider => "Content service provider",
            Self::VoipProvider => "VoIP provider",
            Self::EquipmentSupplier => "Equipment supplier",
            Self::Reseller => "Reseller",
            Self::Isp => "Internet service provider",
            Self::Mvno => "Mobile virtual network operator",
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessType {
    type Err = TcgError;

    /// Parse a business type from its kebab-case tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|bt| bt.as_str() == s)
            .ok_or_else(|| TcgError::Parse(format!("unknown business type: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count() {
        assert_eq!(BusinessType::all().len(), BUSINESS_TYPE_COUNT);
    }

    #[test]
    fn test_all_is_in_canonical_order() {
        let all = BusinessType::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_as_str_roundtrip() {
        for bt in BusinessType::all() {
            let parsed: BusinessType = bt.as_str().parse().unwrap();
            assert_eq!(*bt, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("Carrier".parse::<BusinessType>().is_err());
        assert!("carrier ".parse::<BusinessType>().is_err());
        assert!("".parse::<BusinessType>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for bt in BusinessType::all() {
            let json = serde_json::to_string(bt).unwrap();
            assert_eq!(json, format!("\"{}\"", bt.as_str()));
        }
    }

    #[test]
    fn test_exhaustive_match_compiles() {
        // Adding a variant must break this match.
        fn is_network_operator(bt: BusinessType) -> bool {
            match bt {
                BusinessType::Carrier | BusinessType::Mvno => true,
                BusinessType::CarriageServiceProvider
                | BusinessType::ContentServiceProvider
                | BusinessType::VoipProvider
                | BusinessType::EquipmentSupplier
                | BusinessType::Reseller
                | BusinessType::Isp => false,
            }
        }
        let operators = BusinessType::all()
            .iter()
            .filter(|bt| is_network_operator(**bt))
            .count();
        assert_eq!(operators, 2);
    }
}
