//! Types related to sending metrics to Cloud Monitoring

use std::{
    future::Future,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    error::TransportError,
    proto::google::{api::MetricDescriptor, monitoring::v3::TimeSeries},
};

mod channel_connection;
mod logging_transport;
mod monitoring_downstream;

pub use channel_connection::{get_client, web_trust, ChannelType};
pub use logging_transport::LoggingTransport;
pub use monitoring_downstream::{MonitoringDownstream, MONITORING_ENDPOINT};

pub(crate) type StdError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The calls the exporter makes against the monitoring backend.
///
/// `project_name` is always `projects/<project id>`.
pub trait MonitoringTransport: Send + Sync + 'static {
    /// Look up a metric descriptor. A descriptor the backend does not know is `Ok(None)`.
    fn get_metric_descriptor(
        &self,
        project_name: &str,
        metric_type: &str,
    ) -> impl Future<Output = Result<Option<MetricDescriptor>, TransportError>> + Send;

    /// Register a metric descriptor.
    fn create_metric_descriptor(
        &self,
        project_name: &str,
        descriptor: MetricDescriptor,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Write one batch of time series. The batch holds at most 200 entries.
    fn create_time_series(
        &self,
        project_name: &str,
        time_series: Vec<TimeSeries>,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// `projects/<project id>`
pub fn project_name(project_id: &str) -> String {
    format!("projects/{project_id}")
}

/// A provider of protobuf timestamps
pub trait EpochTime {
    /// The time as a protobuf timestamp. Times before the epoch clamp to the epoch.
    fn timestamp(&self) -> prost_types::Timestamp;
}

impl EpochTime for SystemTime {
    fn timestamp(&self) -> prost_types::Timestamp {
        let since_epoch = self.duration_since(UNIX_EPOCH).unwrap_or_default();
        prost_types::Timestamp {
            seconds: since_epoch.as_secs() as i64,
            nanos: since_epoch.subsec_nanos() as i32,
        }
    }
}
