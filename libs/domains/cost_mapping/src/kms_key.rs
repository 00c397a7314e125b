//! AWS KMS key cost mapping.
//!
//! A customer master key is billed as a fixed monthly holding charge plus
//! request charges whose catalog usage types depend on the key
//! specification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::models::{
    AttributeFilter, CloudProvider, CostComponent, CostMappedResource, KeySpec, ProductFilter,
};

/// Catalog service identifier for KMS charges
const KMS_SERVICE: &str = "awskms";

/// Usage-type pattern for the monthly key-holding charge
const KEY_STORAGE_USAGE: &str = "KMS-Keys";
/// Usage-type pattern for 2048-bit RSA asymmetric requests
const RSA_2048_REQUESTS_USAGE: &str = "KMS-Requests-Asymmetric-RSA_2048";
/// Usage-type pattern for all other asymmetric requests; anchored so it does
/// not also match the RSA 2048 usage type
const ASYMMETRIC_REQUESTS_USAGE: &str = "KMS-Requests-Asymmetric$";
/// Usage-type pattern for symmetric requests
const SYMMETRIC_REQUESTS_USAGE: &str = "KMS-Requests$";
/// Usage-type pattern for ECC GenerateDataKeyPair requests
const GENERATE_DATA_KEY_PAIR_ECC_USAGE: &str = "KMS-Requests-GenerateDatakeyPair-ECC";

/// A provisioned KMS customer master key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct KmsKey {
    /// Identifying address from the upstream resource description
    #[validate(length(min = 1))]
    pub address: String,
    /// Region code the key lives in
    #[validate(length(min = 1))]
    pub region: String,
    /// Cryptographic specification of the key
    #[serde(default)]
    pub key_spec: KeySpec,
}

impl KmsKey {
    /// Fixed monthly charge for holding the key
    fn customer_master_key_component(&self) -> CostComponent {
        CostComponent {
            name: "Customer master key".to_string(),
            unit: "months".to_string(),
            unit_multiplier: Decimal::ONE,
            monthly_quantity: Some(Decimal::ONE),
            product_filter: ProductFilter {
                vendor_name: CloudProvider::Aws,
                region: self.region.clone(),
                service: KMS_SERVICE.to_string(),
                product_family: Some("Encryption Key".to_string()),
                attribute_filters: vec![AttributeFilter::new("usagetype", KEY_STORAGE_USAGE)],
            },
        }
    }

    /// Usage-driven request charge priced per 10k requests
    fn request_component(&self, name: &str, usage_type: &str) -> CostComponent {
        CostComponent {
            name: name.to_string(),
            unit: "10k requests".to_string(),
            unit_multiplier: Decimal::from(10_000),
            monthly_quantity: None,
            product_filter: ProductFilter {
                vendor_name: CloudProvider::Aws,
                region: self.region.clone(),
                service: KMS_SERVICE.to_string(),
                product_family: None,
                attribute_filters: vec![AttributeFilter::new("usagetype", usage_type)],
            },
        }
    }

    /// Request charges for the key's specification
    fn request_components(&self) -> Vec<CostComponent> {
        match &self.key_spec {
            KeySpec::Rsa2048 => {
                vec![self.request_component("Requests (RSA 2048)", RSA_2048_REQUESTS_USAGE)]
            }
            KeySpec::Rsa3072
            | KeySpec::Rsa4096
            | KeySpec::EccNistP256
            | KeySpec::EccNistP384
            | KeySpec::EccNistP521
            | KeySpec::EccSecgP256K1 => {
                vec![self.request_component("Requests (asymmetric)", ASYMMETRIC_REQUESTS_USAGE)]
            }
            KeySpec::SymmetricDefault | KeySpec::Other(_) => vec![
                self.request_component("Requests", SYMMETRIC_REQUESTS_USAGE),
                self.request_component(
                    "ECC GenerateDataKeyPair requests",
                    GENERATE_DATA_KEY_PAIR_ECC_USAGE,
                ),
                // Shares the ECC usage type with the component above.
                self.request_component(
                    "RSA GenerateDataKeyPair requests",
                    GENERATE_DATA_KEY_PAIR_ECC_USAGE,
                ),
            ],
        }
    }
}

impl CostMappedResource for KmsKey {
    fn address(&self) -> &str {
        &self.address
    }

    fn cost_components(&self) -> Vec<CostComponent> {
        let mut components = vec![self.customer_master_key_component()];
        components.extend(self.request_components());

        debug!(
            address = %self.address,
            region = %self.region,
            key_spec = %self.key_spec,
            count = components.len(),
            "mapped KMS key cost components"
        );

        components
    }
}
