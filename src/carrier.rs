//! Carrier identities and the per-lookup result type.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A mobile network operator known to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Carrier {
    SkTelecom,
    Kt,
    LgUplus,
}

impl Carrier {
    pub fn as_str(self) -> &'static str {
        match self {
            Carrier::SkTelecom => "SK Telecom",
            Carrier::Kt => "KT",
            Carrier::LgUplus => "LG U+",
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Carrier label reported for a mobile address.
///
/// Table entries without a carrier tag still count as mobile; lookups that
/// land on them report one of the fallback labels instead of a carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierName {
    Known(Carrier),
    /// Matched an IPv6 prefix that has no carrier tag
    Ipv6Fallback,
    /// Matched an IPv4 range that has no carrier tag
    RangeFallback,
    /// Mobile, but no attributed prefix or range covers the address
    Unknown,
}

impl CarrierName {
    pub fn as_str(self) -> &'static str {
        match self {
            CarrierName::Known(carrier) => carrier.as_str(),
            CarrierName::Ipv6Fallback => "Mobile Carrier (IPv6)",
            CarrierName::RangeFallback => "Mobile Carrier (Range)",
            CarrierName::Unknown => "Mobile Carrier (Unknown)",
        }
    }

    pub fn carrier(self) -> Option<Carrier> {
        match self {
            CarrierName::Known(carrier) => Some(carrier),
            _ => None,
        }
    }

    pub fn is_fallback(self) -> bool {
        self.carrier().is_none()
    }
}

impl fmt::Display for CarrierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CarrierName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IpVersion {
    #[serde(rename = "IPv4")]
    V4,
    #[serde(rename = "IPv6")]
    V6,
}

impl IpVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            IpVersion::V4 => "IPv4",
            IpVersion::V6 => "IPv6",
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful carrier lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierInfo {
    pub is_mobile: bool,
    pub carrier: CarrierName,
    pub ip_version: IpVersion,
    /// The prefix (`203.226`, `2001:2d8`) or range (`27.160 ~ 27.183`) that matched
    #[serde(rename = "matchedPrefixOrRange", skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_labels() {
        assert_eq!(Carrier::SkTelecom.to_string(), "SK Telecom");
        assert_eq!(Carrier::Kt.to_string(), "KT");
        assert_eq!(Carrier::LgUplus.to_string(), "LG U+");
    }

    #[test]
    fn fallback_labels() {
        assert_eq!(CarrierName::Ipv6Fallback.as_str(), "Mobile Carrier (IPv6)");
        assert_eq!(CarrierName::RangeFallback.as_str(), "Mobile Carrier (Range)");
        assert_eq!(CarrierName::Unknown.as_str(), "Mobile Carrier (Unknown)");
        assert!(CarrierName::Unknown.is_fallback());
        assert!(!CarrierName::Known(Carrier::Kt).is_fallback());
    }

    #[test]
    fn carrier_deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            carrier: Carrier,
        }
        let parsed: Wrapper = toml::from_str(r#"carrier = "lg_uplus""#).unwrap();
        assert_eq!(parsed.carrier, Carrier::LgUplus);
    }

    #[test]
    fn info_serializes_with_wire_names() {
        let info = CarrierInfo {
            is_mobile: true,
            carrier: CarrierName::Known(Carrier::SkTelecom),
            ip_version: IpVersion::V4,
            matched: Some("203.226".to_string()),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isMobile": true,
                "carrier": "SK Telecom",
                "ipVersion": "IPv4",
                "matchedPrefixOrRange": "203.226",
            })
        );
    }

    #[test]
    fn info_omits_missing_match() {
        let info = CarrierInfo {
            is_mobile: true,
            carrier: CarrierName::Ipv6Fallback,
            ip_version: IpVersion::V6,
            matched: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("matchedPrefixOrRange"));
        assert!(json.contains("Mobile Carrier (IPv6)"));
    }
}
