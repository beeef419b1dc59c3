use std::future::{self, Future};

use crate::{
    error::TransportError,
    proto::google::{api::MetricDescriptor, monitoring::v3::TimeSeries},
};

use super::MonitoringTransport;

/// A transport that just logs what it would send and drops it.
///
/// Every descriptor looks unregistered, so a fresh exporter logs one creation per metric.
#[derive(Debug, Clone)]
pub struct LoggingTransport {
    log_level: log::Level,
}

impl Default for LoggingTransport {
    fn default() -> Self {
        Self {
            log_level: log::Level::Info,
        }
    }
}

impl LoggingTransport {
    /// Log at this level instead of info
    pub fn new(log_level: log::Level) -> Self {
        Self { log_level }
    }
}

impl MonitoringTransport for LoggingTransport {
    fn get_metric_descriptor(
        &self,
        project_name: &str,
        metric_type: &str,
    ) -> impl Future<Output = Result<Option<MetricDescriptor>, TransportError>> + Send {
        log::log!(
            self.log_level,
            "Lookup: {project_name}/metricDescriptors/{metric_type}"
        );
        future::ready(Ok(None))
    }

    fn create_metric_descriptor(
        &self,
        project_name: &str,
        descriptor: MetricDescriptor,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        log::log!(self.log_level, "Create in {project_name}: {descriptor:?}");
        future::ready(Ok(()))
    }

    fn create_time_series(
        &self,
        project_name: &str,
        time_series: Vec<TimeSeries>,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        log::log!(
            self.log_level,
            "Sunk {} time series in {project_name}: {time_series:?}",
            time_series.len()
        );
        future::ready(Ok(()))
    }
}

#[cfg(test)]
mod test {
    use crate::downstream::{LoggingTransport, MonitoringTransport};

    #[test_log::test(tokio::test)]
    async fn everything_succeeds() {
        let transport = LoggingTransport::new(log::Level::Debug);
        assert!(transport
            .get_metric_descriptor("projects/p", "workload.googleapis.com/x")
            .await
            .expect("lookup succeeds")
            .is_none());
        transport
            .create_metric_descriptor("projects/p", Default::default())
            .await
            .expect("create succeeds");
        transport
            .create_time_series("projects/p", vec![Default::default()])
            .await
            .expect("send succeeds");
    }
}
