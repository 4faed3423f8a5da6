use crate::v1alpha1::NamespacedName;
use k8s_openapi::api::core::v1::ObjectReference;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// DataNetwork describes the IP addressing of a mobile-network data network
/// (DNN) and the address pools allocated within it
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "req.nephio.org",
    version = "v1alpha1",
    kind = "DataNetwork",
    plural = "datanetworks",
    namespaced,
    derive = "Default",
    derive = "PartialEq",
)]
#[serde(rename_all = "camelCase")]
pub struct DataNetworkSpec {
    /// Network instance this data network is attached to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_instance: Option<ObjectReference>,

    /// Address pools, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pools: Option<Vec<Pool>>,
}

/// Named address block within a data network
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// Name of the pool
    #[serde(default)]
    pub name: String,

    /// Prefix length of the addresses handed out from this pool
    #[serde(default)]
    pub prefix_length: u8,
}

impl Pool {
    /// Create a pool with the given name and prefix length
    pub fn new(name: impl Into<String>, prefix_length: u8) -> Self {
        Self {
            name: name.into(),
            prefix_length,
        }
    }

    /// Declared name of the pool
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared prefix length, not range checked
    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }
}

impl DataNetworkSpec {
    /// Network instance reference, or the zero identity when unset
    pub fn network_instance(&self) -> NamespacedName {
        self.network_instance
            .as_ref()
            .map(NamespacedName::from)
            .unwrap_or_default()
    }

    /// Declared pools, empty when unset
    pub fn pools(&self) -> &[Pool] {
        self.pools.as_deref().unwrap_or_default()
    }
}

impl DataNetwork {
    /// Network instance reference, or the zero identity when unset
    pub fn network_instance(&self) -> NamespacedName {
        self.spec.network_instance()
    }

    /// Declared pools, empty when unset
    pub fn pools(&self) -> &[Pool] {
        self.spec.pools()
    }

    /// First pool declared with the given name
    pub fn pool(&self, name: &str) -> Option<&Pool> {
        self.pools().iter().find(|pool| pool.name == name)
    }
}
