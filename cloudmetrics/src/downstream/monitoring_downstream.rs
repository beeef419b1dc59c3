use std::future::Future;

use tonic::{
    metadata::{AsciiMetadataKey, AsciiMetadataValue},
    Code,
};

use crate::{
    error::TransportError,
    proto::google::{
        api::MetricDescriptor,
        monitoring::v3::{
            metric_service_client::MetricServiceClient, CreateMetricDescriptorRequest,
            CreateTimeSeriesRequest, GetMetricDescriptorRequest, TimeSeries,
        },
    },
};

use super::{MonitoringTransport, StdError};

/// Where Cloud Monitoring listens.
pub const MONITORING_ENDPOINT: &str = "https://monitoring.googleapis.com";

/// Talks to Cloud Monitoring's MetricService over grpc.
///
/// Credentials are your business: pass an `authorization` header (and perhaps
/// `x-goog-user-project`) and they are attached to every request.
#[derive(Debug, Clone)]
pub struct MonitoringDownstream<TChannel> {
    client: MetricServiceClient<TChannel>,
    headers: Vec<(AsciiMetadataKey, AsciiMetadataValue)>,
}

impl<TChannel> MonitoringDownstream<TChannel>
where
    TChannel: tonic::client::GrpcService<tonic::body::BoxBody>,
    TChannel::Error: Into<StdError>,
    TChannel::ResponseBody: http_body::Body<Data = bytes::Bytes> + Send + 'static,
    <TChannel::ResponseBody as http_body::Body>::Error: Into<StdError> + Send,
{
    /// Create a new Cloud Monitoring transport from a grpc client
    pub fn new(client: MetricServiceClient<TChannel>) -> Self {
        Self {
            client,
            headers: Vec::new(),
        }
    }

    /// Attach a header to every request.
    pub fn with_header(mut self, key: AsciiMetadataKey, value: AsciiMetadataValue) -> Self {
        self.headers.push((key, value));
        self
    }

    fn request<T>(&self, request: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(request);
        for (header, value) in &self.headers {
            request.metadata_mut().insert(header.clone(), value.clone());
        }
        request
    }
}

fn log_status(operation: &str, status: &tonic::Status) {
    if !status.metadata().is_empty() {
        log::error!(
            "{operation} failed: {status}. Metadata: {:?}",
            status.metadata()
        );
    }
    log::error!("{operation} failed: {status:?}")
}

impl<TChannel> MonitoringTransport for MonitoringDownstream<TChannel>
where
    TChannel: tonic::client::GrpcService<tonic::body::BoxBody> + Clone + Send + Sync + 'static,
    TChannel::Future: Send,
    TChannel::Error: Into<StdError>,
    TChannel::ResponseBody: http_body::Body<Data = bytes::Bytes> + Send + 'static,
    <TChannel::ResponseBody as http_body::Body>::Error: Into<StdError> + Send,
{
    fn get_metric_descriptor(
        &self,
        project_name: &str,
        metric_type: &str,
    ) -> impl Future<Output = Result<Option<MetricDescriptor>, TransportError>> + Send {
        let mut client = self.client.clone();
        let request = self.request(GetMetricDescriptorRequest {
            name: format!("{project_name}/metricDescriptors/{metric_type}"),
        });
        async move {
            match client.get_metric_descriptor(request).await {
                Ok(response) => Ok(Some(response.into_inner())),
                Err(status) if status.code() == Code::NotFound => Ok(None),
                Err(status) => {
                    log_status("get metric descriptor", &status);
                    Err(status.into())
                }
            }
        }
    }

    fn create_metric_descriptor(
        &self,
        project_name: &str,
        descriptor: MetricDescriptor,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        let mut client = self.client.clone();
        let request = self.request(CreateMetricDescriptorRequest {
            name: project_name.to_string(),
            metric_descriptor: Some(descriptor),
        });
        async move {
            match client.create_metric_descriptor(request).await {
                Ok(created) => {
                    log::debug!("created metric descriptor: {:?}", created.get_ref().name);
                    Ok(())
                }
                Err(status) => {
                    log_status("create metric descriptor", &status);
                    Err(status.into())
                }
            }
        }
    }

    fn create_time_series(
        &self,
        project_name: &str,
        time_series: Vec<TimeSeries>,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        let mut client = self.client.clone();
        let request = self.request(CreateTimeSeriesRequest {
            name: project_name.to_string(),
            time_series,
        });
        async move {
            match client.create_time_series(request).await {
                Ok(success) => {
                    log::debug!("sent metrics: {success:?}");
                    Ok(())
                }
                Err(status) => {
                    log_status("create time series", &status);
                    Err(status.into())
                }
            }
        }
    }
}
