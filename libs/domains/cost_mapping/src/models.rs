use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::CostMappingResult;

/// Cloud provider enumeration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CloudProvider {
    #[default]
    Aws,
    Azure,
    Gcp,
}

/// Cryptographic key specification of a managed encryption key.
///
/// Wire values follow the provider's naming (`RSA_2048`, `ECC_NIST_P256`, ...).
/// Unrecognized values are captured in [`KeySpec::Other`] rather than
/// rejected, so upstream descriptions with specs we do not know about still
/// map to cost components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default, Hash)]
#[serde(from = "String", into = "String")]
pub enum KeySpec {
    #[default]
    #[strum(serialize = "SYMMETRIC_DEFAULT")]
    SymmetricDefault,
    #[strum(serialize = "RSA_2048")]
    Rsa2048,
    #[strum(serialize = "RSA_3072")]
    Rsa3072,
    #[strum(serialize = "RSA_4096")]
    Rsa4096,
    #[strum(serialize = "ECC_NIST_P256")]
    EccNistP256,
    #[strum(serialize = "ECC_NIST_P384")]
    EccNistP384,
    #[strum(serialize = "ECC_NIST_P521")]
    EccNistP521,
    #[strum(serialize = "ECC_SECG_P256K1")]
    EccSecgP256K1,
    /// Any specification not listed above, kept verbatim
    #[strum(default)]
    Other(String),
}

impl From<String> for KeySpec {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl From<KeySpec> for String {
    fn from(value: KeySpec) -> Self {
        value.to_string()
    }
}

/// Attribute-match predicate for selecting a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFilter {
    /// Catalog attribute to match (e.g. "usagetype")
    pub key: String,
    /// Regular expression the attribute value must match
    pub value_regex: String,
}

impl AttributeFilter {
    /// Create a new attribute filter
    pub fn new(key: impl Into<String>, value_regex: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value_regex: value_regex.into(),
        }
    }

    /// Evaluate the pattern against a catalog attribute value
    pub fn matches(&self, value: &str) -> CostMappingResult<bool> {
        let pattern = Regex::new(&self.value_regex)?;
        Ok(pattern.is_match(value))
    }
}

/// Criteria used to select a matching price entry from the pricing catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Cloud vendor the price belongs to
    pub vendor_name: CloudProvider,
    /// Region code, propagated verbatim from the resource
    pub region: String,
    /// Catalog service identifier (e.g. "awskms")
    pub service: String,
    /// Product family (e.g. "Encryption Key")
    pub product_family: Option<String>,
    /// Attribute predicates, applied in order
    #[serde(default)]
    pub attribute_filters: Vec<AttributeFilter>,
}

/// A single billable line item with its own unit, quantity, and lookup filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostComponent {
    /// Display name, unique within a resource's component list
    pub name: String,
    /// Billing unit (e.g. "months", "10k requests")
    pub unit: String,
    /// Scalar the unit price applies to (e.g. 10,000 for per-10k-request rates)
    pub unit_multiplier: Decimal,
    /// Fixed monthly quantity; None when the quantity is usage-driven
    pub monthly_quantity: Option<Decimal>,
    /// Criteria for resolving the unit price from the catalog
    pub product_filter: ProductFilter,
}

/// A resource together with its ordered cost components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedResource {
    /// Identifying name of the resource
    pub name: String,
    /// Cost components in presentation order
    pub cost_components: Vec<CostComponent>,
}

/// Resource types that can describe their billable cost components.
///
/// Implementations are pure: calling [`cost_components`] twice with the same
/// resource state yields lists equal by value.
///
/// [`cost_components`]: CostMappedResource::cost_components
pub trait CostMappedResource {
    /// Identifying address of the resource
    fn address(&self) -> &str;

    /// Ordered cost components for pricing lookup
    fn cost_components(&self) -> Vec<CostComponent>;

    /// Bundle the resource name with its components
    fn build_resource(&self) -> MappedResource {
        MappedResource {
            name: self.address().to_string(),
            cost_components: self.cost_components(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_spec_round_trips_wire_form() {
        for wire in [
            "SYMMETRIC_DEFAULT",
            "RSA_2048",
            "RSA_3072",
            "RSA_4096",
            "ECC_NIST_P256",
            "ECC_NIST_P384",
            "ECC_NIST_P521",
            "ECC_SECG_P256K1",
        ] {
            let spec: KeySpec = wire.parse().unwrap();
            assert!(!matches!(spec, KeySpec::Other(_)), "{wire} parsed as Other");
            assert_eq!(spec.to_string(), wire);
        }
    }

    #[test]
    fn test_key_spec_captures_unknown_values() {
        let spec: KeySpec = "HMAC_256".parse().unwrap();
        assert_eq!(spec, KeySpec::Other("HMAC_256".to_string()));
        assert_eq!(spec.to_string(), "HMAC_256");

        let empty: KeySpec = "".parse().unwrap();
        assert_eq!(empty, KeySpec::Other(String::new()));
    }

    #[test]
    fn test_key_spec_serde_uses_wire_form() {
        let json = serde_json::to_string(&KeySpec::Rsa2048).unwrap();
        assert_eq!(json, "\"RSA_2048\"");

        let spec: KeySpec = serde_json::from_str("\"ECC_SECG_P256K1\"").unwrap();
        assert_eq!(spec, KeySpec::EccSecgP256K1);

        let unknown: KeySpec = serde_json::from_str("\"SM2\"").unwrap();
        assert_eq!(unknown, KeySpec::Other("SM2".to_string()));
    }

    #[test]
    fn test_cloud_provider_serializes_lowercase() {
        assert_eq!(CloudProvider::Aws.to_string(), "aws");
        assert_eq!(
            serde_json::to_string(&CloudProvider::Aws).unwrap(),
            "\"aws\""
        );
    }

    #[test]
    fn test_attribute_filter_matches_anchored_pattern() {
        let filter = AttributeFilter::new("usagetype", "KMS-Requests$");
        assert!(filter.matches("EUW1-KMS-Requests").unwrap());
        assert!(!filter.matches("EUW1-KMS-Requests-Asymmetric").unwrap());
    }

    #[test]
    fn test_attribute_filter_rejects_invalid_pattern() {
        let filter = AttributeFilter::new("usagetype", "KMS-(Requests");
        let err = filter.matches("KMS-Requests").unwrap_err();
        assert!(matches!(
            err,
            crate::error::CostMappingError::InvalidPattern(_)
        ));
    }
}
