//! Mapping resource attributes onto Cloud Monitoring monitored resource types.
//!
//! The policy is a table. Candidates are tried in order; the first whose platform
//! matches and whose every label resolves wins. Each label names a chain of
//! sources that are consulted until one yields a value. The last two candidates,
//! `generic_task` and `generic_node`, match on any platform, and `generic_node`
//! always resolves.

use std::collections::HashMap;

use crate::{
    proto::google::api::MonitoredResource,
    types::{AttributeValue, Resource},
};

/// Resource attribute keys consulted by the mapping.
pub mod keys {
    #![allow(missing_docs)]
    pub const CLOUD_PLATFORM: &str = "cloud.platform";
    pub const CLOUD_AVAILABILITY_ZONE: &str = "cloud.availability_zone";
    pub const CLOUD_REGION: &str = "cloud.region";
    pub const CLOUD_ACCOUNT_ID: &str = "cloud.account.id";
    pub const HOST_ID: &str = "host.id";
    pub const HOST_NAME: &str = "host.name";
    pub const K8S_CLUSTER_NAME: &str = "k8s.cluster.name";
    pub const K8S_NAMESPACE_NAME: &str = "k8s.namespace.name";
    pub const K8S_POD_NAME: &str = "k8s.pod.name";
    pub const K8S_CONTAINER_NAME: &str = "k8s.container.name";
    pub const K8S_NODE_NAME: &str = "k8s.node.name";
    pub const SERVICE_NAME: &str = "service.name";
    pub const SERVICE_NAMESPACE: &str = "service.namespace";
    pub const SERVICE_INSTANCE_ID: &str = "service.instance.id";
    pub const FAAS_NAME: &str = "faas.name";
    pub const FAAS_VERSION: &str = "faas.version";
    pub const FAAS_INSTANCE: &str = "faas.instance";
}

use keys::*;

/// The label every monitored resource type carries for its project.
pub const PROJECT_ID_LABEL: &str = "project_id";

const UNKNOWN_SERVICE_PREFIX: &str = "unknown_service";
const UNKNOWN_SERVICE: &str = "unknown_service:rust";
const GLOBAL: &str = "global";

const KUBERNETES_PLATFORMS: &[&str] = &[
    "gcp_kubernetes_engine",
    "aws_eks",
    "azure_aks",
    "alibaba_cloud_openshift",
    "aws_openshift",
    "azure_openshift",
    "gcp_openshift",
    "ibm_cloud_openshift",
];

/// Which `cloud.platform` values a candidate applies to.
#[derive(Debug)]
enum Platform {
    /// Exactly this platform.
    Is(&'static str),
    /// Any kubernetes flavor, or any resource naming a kubernetes cluster.
    Kubernetes,
    /// Always applies.
    Any,
}

impl Platform {
    fn matches(&self, platform: Option<&str>, resource: &Resource) -> bool {
        match self {
            Platform::Is(expected) => platform == Some(*expected),
            Platform::Kubernetes => {
                platform.is_some_and(|platform| KUBERNETES_PLATFORMS.contains(&platform))
                    || Source::Attribute(K8S_CLUSTER_NAME).resolve(resource).is_some()
            }
            Platform::Any => true,
        }
    }
}

/// One link of a fallback chain.
#[derive(Debug)]
enum Source {
    /// A resource attribute, coerced to text. Missing and empty values do not resolve.
    Attribute(&'static str),
    /// `service.name`, unless it is an sdk-generated `unknown_service` placeholder.
    KnownServiceName,
    /// A fixed value; always resolves.
    Literal(&'static str),
}

impl Source {
    fn resolve(&self, resource: &Resource) -> Option<String> {
        match self {
            Source::Attribute(key) => resource
                .get(key)
                .filter(|value| !value.is_empty())
                .map(AttributeValue::to_label_value),
            Source::KnownServiceName => Source::Attribute(SERVICE_NAME)
                .resolve(resource)
                .filter(|name| !name.starts_with(UNKNOWN_SERVICE_PREFIX)),
            Source::Literal(value) => Some(value.to_string()),
        }
    }
}

fn first_resolved(sources: &[Source], resource: &Resource) -> Option<String> {
    sources.iter().find_map(|source| source.resolve(resource))
}

#[derive(Debug)]
struct LabelRule {
    label: &'static str,
    sources: &'static [Source],
}

const fn label(label: &'static str, sources: &'static [Source]) -> LabelRule {
    LabelRule { label, sources }
}

#[derive(Debug)]
struct Candidate {
    resource_type: &'static str,
    platform: Platform,
    /// Unsupported types are only emitted when the exporter opts in; otherwise
    /// the search continues into the generic tier.
    always_supported: bool,
    /// Each group must have at least one resolving source.
    requires: &'static [&'static [Source]],
    labels: &'static [LabelRule],
}

impl Candidate {
    fn resolve(&self, resource: &Resource) -> Option<MonitoredResource> {
        if !self
            .requires
            .iter()
            .all(|group| first_resolved(group, resource).is_some())
        {
            return None;
        }
        let labels = self
            .labels
            .iter()
            .map(|rule| first_resolved(rule.sources, resource).map(|v| (rule.label.to_string(), v)))
            .collect::<Option<HashMap<String, String>>>()?;
        Some(MonitoredResource {
            r#type: self.resource_type.to_string(),
            labels,
        })
    }
}

const ZONE_OR_REGION: &[Source] = &[
    Source::Attribute(CLOUD_AVAILABILITY_ZONE),
    Source::Attribute(CLOUD_REGION),
];
const ZONE_OR_REGION_OR_GLOBAL: &[Source] = &[
    Source::Attribute(CLOUD_AVAILABILITY_ZONE),
    Source::Attribute(CLOUD_REGION),
    Source::Literal(GLOBAL),
];
const SERVICE_NAMESPACE_OR_EMPTY: &[Source] = &[
    Source::Attribute(SERVICE_NAMESPACE),
    Source::Literal(""),
];
const CLUSTER: LabelRule = label("cluster_name", &[Source::Attribute(K8S_CLUSTER_NAME)]);
const K8S_LOCATION: LabelRule = label("location", ZONE_OR_REGION);

static CANDIDATES: &[Candidate] = &[
    Candidate {
        resource_type: "gce_instance",
        platform: Platform::Is("gcp_compute_engine"),
        always_supported: true,
        requires: &[],
        labels: &[
            label("zone", &[Source::Attribute(CLOUD_AVAILABILITY_ZONE)]),
            label("instance_id", &[Source::Attribute(HOST_ID)]),
        ],
    },
    Candidate {
        resource_type: "aws_ec2_instance",
        platform: Platform::Is("aws_ec2"),
        always_supported: true,
        requires: &[],
        labels: &[
            label("instance_id", &[Source::Attribute(HOST_ID)]),
            label("region", ZONE_OR_REGION),
            label("aws_account", &[Source::Attribute(CLOUD_ACCOUNT_ID)]),
        ],
    },
    Candidate {
        resource_type: "k8s_container",
        platform: Platform::Kubernetes,
        always_supported: true,
        requires: &[],
        labels: &[
            K8S_LOCATION,
            CLUSTER,
            label("namespace_name", &[Source::Attribute(K8S_NAMESPACE_NAME)]),
            label("pod_name", &[Source::Attribute(K8S_POD_NAME)]),
            label("container_name", &[Source::Attribute(K8S_CONTAINER_NAME)]),
        ],
    },
    Candidate {
        resource_type: "k8s_pod",
        platform: Platform::Kubernetes,
        always_supported: true,
        requires: &[],
        labels: &[
            K8S_LOCATION,
            CLUSTER,
            label("namespace_name", &[Source::Attribute(K8S_NAMESPACE_NAME)]),
            label("pod_name", &[Source::Attribute(K8S_POD_NAME)]),
        ],
    },
    Candidate {
        resource_type: "k8s_node",
        platform: Platform::Kubernetes,
        always_supported: true,
        requires: &[],
        labels: &[
            K8S_LOCATION,
            CLUSTER,
            label("node_name", &[Source::Attribute(K8S_NODE_NAME)]),
        ],
    },
    Candidate {
        resource_type: "k8s_cluster",
        platform: Platform::Kubernetes,
        always_supported: true,
        requires: &[],
        labels: &[K8S_LOCATION, CLUSTER],
    },
    Candidate {
        resource_type: "cloud_run_revision",
        platform: Platform::Is("gcp_cloud_run"),
        always_supported: false,
        requires: &[],
        labels: &[
            label("location", ZONE_OR_REGION),
            label(
                "service_name",
                &[Source::Attribute(FAAS_NAME), Source::KnownServiceName],
            ),
            label("revision_name", &[Source::Attribute(FAAS_VERSION)]),
            label("configuration_name", &[Source::Attribute(FAAS_NAME)]),
        ],
    },
    Candidate {
        resource_type: "cloud_function",
        platform: Platform::Is("gcp_cloud_functions"),
        always_supported: false,
        requires: &[],
        labels: &[
            label("region", &[Source::Attribute(CLOUD_REGION)]),
            label("function_name", &[Source::Attribute(FAAS_NAME)]),
        ],
    },
    Candidate {
        resource_type: "gae_instance",
        platform: Platform::Is("gcp_app_engine"),
        always_supported: false,
        requires: &[],
        labels: &[
            label("location", ZONE_OR_REGION),
            label("module_id", &[Source::Attribute(FAAS_NAME)]),
            label("version_id", &[Source::Attribute(FAAS_VERSION)]),
            label("instance_id", &[Source::Attribute(FAAS_INSTANCE)]),
        ],
    },
    Candidate {
        resource_type: "generic_task",
        platform: Platform::Any,
        always_supported: true,
        requires: &[
            &[Source::KnownServiceName, Source::Attribute(FAAS_NAME)],
            &[
                Source::Attribute(SERVICE_INSTANCE_ID),
                Source::Attribute(FAAS_INSTANCE),
            ],
        ],
        labels: &[
            label("location", ZONE_OR_REGION_OR_GLOBAL),
            label("namespace", SERVICE_NAMESPACE_OR_EMPTY),
            label(
                "job",
                &[
                    Source::KnownServiceName,
                    Source::Attribute(FAAS_NAME),
                    // a placeholder service name still beats the generic one
                    Source::Attribute(SERVICE_NAME),
                    Source::Literal(UNKNOWN_SERVICE),
                ],
            ),
            label(
                "task_id",
                &[
                    Source::Attribute(SERVICE_INSTANCE_ID),
                    Source::Attribute(FAAS_INSTANCE),
                ],
            ),
        ],
    },
    Candidate {
        resource_type: "generic_node",
        platform: Platform::Any,
        always_supported: true,
        requires: &[],
        labels: &[
            label("location", ZONE_OR_REGION_OR_GLOBAL),
            label("namespace", SERVICE_NAMESPACE_OR_EMPTY),
            label(
                "node_id",
                &[
                    Source::Attribute(HOST_ID),
                    Source::Attribute(HOST_NAME),
                    Source::Literal(""),
                ],
            ),
        ],
    },
];

/// Pick the monitored resource for a set of resource attributes.
///
/// Never fails: with nothing usable the result is a `generic_node` in the
/// `global` location with empty labels. `project_id` is always set.
pub fn map_resource(
    resource: &Resource,
    project_id: &str,
    include_unsupported: bool,
) -> MonitoredResource {
    let platform = resource
        .get(CLOUD_PLATFORM)
        .map(AttributeValue::to_label_value);
    let mut monitored_resource = CANDIDATES
        .iter()
        .filter(|candidate| include_unsupported || candidate.always_supported)
        .filter(|candidate| candidate.platform.matches(platform.as_deref(), resource))
        .find_map(|candidate| candidate.resolve(resource))
        .unwrap_or_else(empty_generic_node);
    monitored_resource
        .labels
        .insert(PROJECT_ID_LABEL.to_string(), project_id.to_string());
    monitored_resource
}

fn empty_generic_node() -> MonitoredResource {
    MonitoredResource {
        r#type: "generic_node".to_string(),
        labels: HashMap::from([
            ("location".to_string(), GLOBAL.to_string()),
            ("namespace".to_string(), String::new()),
            ("node_id".to_string(), String::new()),
        ]),
    }
}
