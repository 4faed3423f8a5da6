/// API version v1alpha1 for network function requirement CRDs

pub mod data_network;
pub mod namespaced_name;

pub use data_network::{DataNetwork, DataNetworkSpec, Pool};
pub use namespaced_name::NamespacedName;

/// API group for requirement resources
pub const API_GROUP: &str = "req.nephio.org";
/// API version for requirement resources
pub const API_VERSION: &str = "v1alpha1";
