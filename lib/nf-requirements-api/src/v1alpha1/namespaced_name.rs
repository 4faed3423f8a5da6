use k8s_openapi::api::core::v1::ObjectReference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace and name identifying a Kubernetes object.
///
/// The default value is the zero identity (both fields empty).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    /// Create an identity from a namespace and a name
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// True when neither namespace nor name is set
    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty() && self.name.is_empty()
    }
}

impl From<&ObjectReference> for NamespacedName {
    fn from(reference: &ObjectReference) -> Self {
        Self {
            namespace: reference.namespace.clone().unwrap_or_default(),
            name: reference.name.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}/{}", self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let nn = NamespacedName::default();
        assert!(nn.is_empty());
        assert_eq!(nn.namespace, "");
        assert_eq!(nn.name, "");
    }

    #[test]
    fn test_from_object_reference_fields_default_independently() {
        let only_ns = ObjectReference {
            namespace: Some("a".to_string()),
            ..Default::default()
        };
        assert_eq!(NamespacedName::from(&only_ns), NamespacedName::new("a", ""));

        let only_name = ObjectReference {
            name: Some("b".to_string()),
            ..Default::default()
        };
        assert_eq!(NamespacedName::from(&only_name), NamespacedName::new("", "b"));
        assert!(!NamespacedName::from(&only_name).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(NamespacedName::new("core", "dnn").to_string(), "core/dnn");
        assert_eq!(NamespacedName::new("", "dnn").to_string(), "dnn");
        assert_eq!(NamespacedName::default().to_string(), "");
    }
}
