//! Rendering of DataNetwork projections

use kube::ResourceExt;
use nf_requirements_api::{DataNetwork, NamespacedName};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataNetworkReport {
    pub data_network: NamespacedName,
    pub network_instance: NamespacedName,
    pub pools: Vec<PoolReport>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolReport {
    pub name: String,
    pub prefix_length: u8,
}

impl From<&DataNetwork> for DataNetworkReport {
    fn from(dn: &DataNetwork) -> Self {
        Self {
            data_network: NamespacedName::new(dn.namespace().unwrap_or_default(), dn.name_any()),
            network_instance: dn.network_instance(),
            pools: dn
                .pools()
                .iter()
                .map(|pool| PoolReport {
                    name: pool.name().to_string(),
                    prefix_length: pool.prefix_length(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for DataNetworkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DataNetwork {}", self.data_network)?;
        if self.network_instance.is_empty() {
            writeln!(f, "  networkInstance: <none>")?;
        } else {
            writeln!(f, "  networkInstance: {}", self.network_instance)?;
        }
        if self.pools.is_empty() {
            writeln!(f, "  pools: <none>")?;
        }
        for pool in &self.pools {
            writeln!(f, "  pool {}/{}", pool.name, pool.prefix_length)?;
        }
        Ok(())
    }
}

pub fn render_text(reports: &[DataNetworkReport]) -> String {
    reports.iter().map(ToString::to_string).collect()
}

pub fn render_json(reports: &[DataNetworkReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::ObjectReference;
    use nf_requirements_api::{DataNetworkSpec, Pool};

    fn reference(namespace: &str, name: &str) -> ObjectReference {
        ObjectReference {
            namespace: Some(namespace.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn sample() -> DataNetwork {
        let mut dn = DataNetwork::new(
            "internet",
            DataNetworkSpec {
                network_instance: Some(reference("core", "vpc-internet")),
                pools: Some(vec![Pool::new("pool1", 16), Pool::new("pool2", 126)]),
            },
        );
        dn.metadata.namespace = Some("upf".to_string());
        dn
    }

    #[test]
    fn test_report_from_data_network() {
        let report = DataNetworkReport::from(&sample());
        assert_eq!(report.data_network, NamespacedName::new("upf", "internet"));
        assert_eq!(report.network_instance, NamespacedName::new("core", "vpc-internet"));
        assert_eq!(report.pools.len(), 2);
        assert_eq!(report.pools[1].name, "pool2");
        assert_eq!(report.pools[1].prefix_length, 126);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&[DataNetworkReport::from(&sample())]);
        assert_eq!(
            text,
            "DataNetwork upf/internet\n  networkInstance: core/vpc-internet\n  pool pool1/16\n  pool pool2/126\n"
        );
    }

    #[test]
    fn test_render_text_empty_spec() {
        let dn = DataNetwork::new("bare", DataNetworkSpec::default());
        let text = render_text(&[DataNetworkReport::from(&dn)]);
        assert_eq!(
            text,
            "DataNetwork bare\n  networkInstance: <none>\n  pools: <none>\n"
        );
    }

    #[test]
    fn test_render_text_joins_reports_in_order() {
        let first = DataNetworkReport::from(&sample());
        let second = DataNetworkReport::from(&DataNetwork::new("bare", DataNetworkSpec::default()));
        let text = render_text(&[first.clone(), second.clone()]);
        assert_eq!(text, format!("{}{}", first, second));
        assert!(text.ends_with("DataNetwork bare\n  networkInstance: <none>\n  pools: <none>\n"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[DataNetworkReport::from(&sample())]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["networkInstance"]["namespace"], "core");
        assert_eq!(value[0]["pools"][0]["prefixLength"], 16);
        assert_eq!(value[0]["dataNetwork"]["name"], "internet");
    }
}
