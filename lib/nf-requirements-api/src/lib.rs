//! Nephio network function requirement types for Kubernetes
//!
//! This library defines the requirement custom resources consumed by
//! network function controllers:
//! - DataNetwork: IP addressing of a data network and its address pools

pub mod v1alpha1;

pub use v1alpha1::{DataNetwork, DataNetworkSpec, NamespacedName, Pool};
