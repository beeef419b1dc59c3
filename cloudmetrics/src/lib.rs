//! Export metrics to Google Cloud Monitoring.
//!
//! [`cloudmetrics`] takes metric streams from your metrics SDK and writes them to
//! Cloud Monitoring over [tonic] and [gRPC]. Along the way it works out which
//! monitored resource your process is, registers each metric descriptor once, and
//! splits writes into batches the backend accepts.
//!
//! Nothing here is fatal to your process. Every failure becomes an
//! [`ExportResult`](error::ExportResult) and a log line.
//!
//! # Examples
//!
//! A demo against the real backend can be found under `benches/cloud_monitoring.rs`.
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! use cloudmetrics::{
//!     downstream::{get_client, web_trust, MonitoringDownstream, MONITORING_ENDPOINT},
//!     exporter::CloudMonitoringExporter,
//!     options::ExporterOptions,
//!     proto::google::monitoring::v3::metric_service_client::MetricServiceClient,
//! };
//!
//! let client = get_client(MONITORING_ENDPOINT, web_trust, MetricServiceClient::with_origin)?;
//! let _exporter = CloudMonitoringExporter::new(
//!     MonitoringDownstream::new(client),
//!     ExporterOptions::default().with_project_id("my-project"),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! [gRPC]: https://grpc.io
//! [tonic]: https://docs.rs/tonic

pub mod downstream;
pub mod error;
pub mod exporter;
pub mod identity;
pub mod label;
pub mod options;
pub mod pipeline;
pub mod project;
pub mod registry;
pub mod resource;
pub mod transform;
pub mod types;

/// Internal generated types - ideally you shouldn't need to do much with them.
/// Nevertheless, they are exported in case you need them.
pub mod proto;

#[cfg(test)]
mod testing;

pub use exporter::CloudMonitoringExporter;
pub use options::ExporterOptions;
