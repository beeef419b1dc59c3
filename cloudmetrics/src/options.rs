use std::{fmt::Debug, num::NonZeroUsize, sync::Arc};

use crate::{
    error::ConfigError,
    identity::TaskIdentity,
    project::{EnvironmentProjectId, ProjectIdResolver},
};

/// Metric types are `<prefix>/<metric name>`. This prefix is the one Cloud Monitoring
/// reserves for user-defined workload metrics.
pub const DEFAULT_METRIC_PREFIX: &str = "workload.googleapis.com";

/// Cloud Monitoring accepts at most this many time series per write.
pub const MAX_BATCH_SIZE: usize = 200;

/// How the exporter behaves. Start from `default()` and adjust with the `with_` methods.
#[derive(Clone)]
pub struct ExporterOptions {
    /// The project to write to. When unset the resolver is asked.
    pub project_id: Option<String>,
    /// Consulted when `project_id` is unset.
    pub project_id_resolver: Arc<dyn ProjectIdResolver>,
    /// Prefix for metric types.
    pub metric_prefix: String,
    /// Assume every metric descriptor already exists. Saves one lookup per distinct
    /// metric at startup, at the risk of writes failing for unregistered metrics.
    pub skip_descriptor_check: bool,
    /// Emit monitored resource types beyond gce, aws, kubernetes and generic.
    pub include_unsupported_resources: bool,
    /// Time series per write request.
    pub max_batch_size: usize,
    /// Write requests in flight at once within one export.
    pub max_concurrent_sends: NonZeroUsize,
    /// When set, every time series carries this identity in the reserved task label.
    pub task_identity: Option<TaskIdentity>,
}

impl Default for ExporterOptions {
    fn default() -> Self {
        Self {
            project_id: None,
            project_id_resolver: Arc::new(EnvironmentProjectId),
            metric_prefix: DEFAULT_METRIC_PREFIX.to_string(),
            skip_descriptor_check: false,
            include_unsupported_resources: false,
            max_batch_size: MAX_BATCH_SIZE,
            max_concurrent_sends: NonZeroUsize::MIN,
            task_identity: None,
        }
    }
}

impl Debug for ExporterOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExporterOptions")
            .field("project_id", &self.project_id)
            .field("metric_prefix", &self.metric_prefix)
            .field("skip_descriptor_check", &self.skip_descriptor_check)
            .field(
                "include_unsupported_resources",
                &self.include_unsupported_resources,
            )
            .field("max_batch_size", &self.max_batch_size)
            .field("max_concurrent_sends", &self.max_concurrent_sends)
            .field("task_identity", &self.task_identity)
            .finish_non_exhaustive()
    }
}

impl ExporterOptions {
    /// Write to this project.
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Resolve the project with this instead of the environment.
    pub fn with_project_id_resolver(mut self, resolver: impl ProjectIdResolver) -> Self {
        self.project_id_resolver = Arc::new(resolver);
        self
    }

    /// Use a different metric type prefix, like `custom.googleapis.com`.
    pub fn with_metric_prefix(mut self, metric_prefix: impl Into<String>) -> Self {
        self.metric_prefix = metric_prefix.into();
        self
    }

    /// Skip metric descriptor lookup and creation entirely.
    pub fn with_skip_descriptor_check(mut self, skip: bool) -> Self {
        self.skip_descriptor_check = skip;
        self
    }

    /// Allow cloud run, cloud functions and app engine resource types.
    pub fn with_unsupported_resources(mut self, include: bool) -> Self {
        self.include_unsupported_resources = include;
        self
    }

    /// Time series per write request, 1 to 200.
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    /// Write requests in flight at once.
    pub fn with_max_concurrent_sends(mut self, max_concurrent_sends: NonZeroUsize) -> Self {
        self.max_concurrent_sends = max_concurrent_sends;
        self
    }

    /// Label every time series with the process task identity.
    pub fn with_task_label(mut self) -> Self {
        self.task_identity = Some(TaskIdentity::process());
        self
    }

    /// Label every time series with a given task identity.
    pub fn with_task_identity(mut self, identity: TaskIdentity) -> Self {
        self.task_identity = Some(identity);
        self
    }

    /// Check the options and normalize the metric prefix.
    pub fn validate(mut self) -> Result<ValidOptions, ConfigError> {
        let max_batch_size = NonZeroUsize::new(self.max_batch_size)
            .filter(|size| size.get() <= MAX_BATCH_SIZE)
            .ok_or(ConfigError::BatchSize {
                actual: self.max_batch_size,
                max: MAX_BATCH_SIZE,
            })?;
        let trimmed = self.metric_prefix.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyMetricPrefix);
        }
        self.metric_prefix = trimmed.to_string();
        Ok(ValidOptions {
            max_batch_size,
            options: self,
        })
    }
}

/// Options that passed validation.
#[derive(Debug, Clone)]
pub struct ValidOptions {
    pub(crate) max_batch_size: NonZeroUsize,
    pub(crate) options: ExporterOptions,
}

impl ValidOptions {
    /// The metric type for a metric name.
    pub fn metric_type(&self, metric_name: &str) -> String {
        format!("{}/{metric_name}", self.options.metric_prefix)
    }

    /// The validated options.
    pub fn options(&self) -> &ExporterOptions {
        &self.options
    }
}
