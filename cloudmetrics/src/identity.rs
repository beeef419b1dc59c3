use std::sync::LazyLock;

/// The reserved label carrying the task identity.
pub const TASK_LABEL: &str = "opentelemetry_task";

/// Identifies this process among the writers of a time series: `rust-<pid>@<hostname>`.
///
/// Computed once per process. Time series from two processes that otherwise share
/// labels would collide in the backend; this label keeps them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskIdentity(String);

impl TaskIdentity {
    /// The identity of the running process.
    pub fn process() -> Self {
        static PROCESS: LazyLock<TaskIdentity> = LazyLock::new(|| {
            TaskIdentity(format!("rust-{}@{}", std::process::id(), host_name()))
        });
        PROCESS.clone()
    }

    /// A fixed identity, for tests or for hosts that know better.
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// The label value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn host_name() -> String {
    hostname::get()
        .ok()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| {
            log::warn!("could not read the hostname; task identity uses localhost");
            "localhost".to_string()
        })
}
