//! Ties resource mapping, descriptor registration, batching and sending together.

use std::{
    pin::pin,
    sync::atomic::{AtomicBool, Ordering},
};

use futures::{future::join_all, Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::{
    downstream::{project_name, MonitoringTransport},
    error::{ConfigError, ExportError, ExportResult, TransportError},
    options::{ExporterOptions, ValidOptions},
    pipeline::partition,
    project::{start_resolution, SharedProjectId},
    registry::DescriptorRegistry,
    resource::map_resource,
    transform::{metric_descriptor, time_series},
    types::ResourceMetrics,
};

/// Pushes metrics to Cloud Monitoring whenever the host asks.
///
/// The exporter never starts an export on its own and buffers nothing: each call to
/// [`export`](Self::export) is one complete round of registration and writes. Share it
/// behind an `Arc` if exports may overlap; the descriptor registry is safe for that.
pub struct CloudMonitoringExporter<TTransport> {
    transport: TTransport,
    options: ValidOptions,
    registry: DescriptorRegistry,
    project_id: SharedProjectId,
    is_shutdown: AtomicBool,
}

impl<TTransport> CloudMonitoringExporter<TTransport>
where
    TTransport: MonitoringTransport,
{
    /// Validate the options and start resolving the project id.
    pub fn new(transport: TTransport, options: ExporterOptions) -> Result<Self, ConfigError> {
        let options = options.validate()?;
        let project_id = start_resolution(
            options.options().project_id.clone(),
            options.options().project_id_resolver.as_ref(),
        );
        Ok(Self {
            transport,
            options,
            registry: DescriptorRegistry::new(),
            project_id,
            is_shutdown: AtomicBool::new(false),
        })
    }

    /// Write one round of metrics.
    ///
    /// Every batch is attempted even when an earlier one fails; any failed batch fails
    /// the export. Metrics whose descriptor could not be registered are dropped for this
    /// round without failing the export.
    pub async fn export(&self, metrics: &ResourceMetrics) -> ExportResult {
        if self.is_shutdown.load(Ordering::Acquire) {
            log::warn!("export called after shutdown");
            return Err(ExportError::Shutdown);
        }
        let Some(project_id) = self.project_id.clone().await else {
            log::error!("no project id is configured or resolvable, dropping metrics");
            return Err(ExportError::MissingProjectId);
        };
        let project_name = project_name(&project_id);
        let options = self.options.options();
        let task = options.task_identity.as_ref();

        let resource = map_resource(
            &metrics.resource,
            &project_id,
            options.include_unsupported_resources,
        );

        let described: Vec<_> = metrics
            .metrics
            .iter()
            .filter_map(|metric| {
                metric_descriptor(
                    metric,
                    self.options.metric_type(metric.name.as_str()),
                    &project_name,
                    task,
                )
                .map(|descriptor| (metric, descriptor))
            })
            .collect();

        let registered = if options.skip_descriptor_check {
            described
        } else {
            let checks = described.iter().map(|(_, descriptor)| {
                self.registry
                    .ensure_registered(&self.transport, &project_name, descriptor)
            });
            let outcomes = join_all(checks).await;
            described
                .into_iter()
                .zip(outcomes)
                .filter_map(|(described, registered)| registered.then_some(described))
                .collect()
        };

        let records: Vec<_> = registered
            .iter()
            .flat_map(|(metric, descriptor)| time_series(metric, descriptor, &resource, task))
            .collect();
        let batches = partition(records, self.options.max_batch_size);
        let attempted = batches.len();

        let project_name = project_name.as_str();
        let outcomes: Vec<Result<(), TransportError>> = futures::stream::iter(batches)
            .map(|batch| self.transport.create_time_series(project_name, batch))
            .buffered(options.max_concurrent_sends.get())
            .collect()
            .await;

        let mut failed = 0;
        let mut first = None;
        for (index, outcome) in outcomes.into_iter().enumerate() {
            if let Err(e) = outcome {
                log::error!("failed to send batch {index} of {attempted}: {e}");
                failed += 1;
                first.get_or_insert(e);
            }
        }
        match first {
            None => {
                log::debug!("exported {attempted} batches to {project_name}");
                Ok(())
            }
            Some(first) => Err(ExportError::Send {
                failed,
                attempted,
                first,
            }),
        }
    }

    /// Nothing is buffered, so there is nothing to flush.
    pub async fn force_flush(&self) -> ExportResult {
        if self.is_shutdown.load(Ordering::Acquire) {
            return Err(ExportError::Shutdown);
        }
        Ok(())
    }

    /// Refuse further exports.
    pub fn shutdown(&self) -> ExportResult {
        if self.is_shutdown.swap(true, Ordering::AcqRel) {
            log::warn!("shutdown called twice");
        }
        Ok(())
    }

    /// The descriptors this exporter has seen registered.
    pub fn registry(&self) -> &DescriptorRegistry {
        &self.registry
    }

    /// Spawn this on a tokio runtime to export metrics as the host sends them.
    /// Returns when every sender is dropped, or after shutdown.
    pub async fn export_batches_forever(&self, receiver: mpsc::Receiver<ResourceMetrics>) {
        self.export_stream(ReceiverStream::new(receiver)).await;
    }

    /// Export each item of a stream as it arrives. Returns when the stream ends.
    pub async fn export_stream(&self, receiver: impl Stream<Item = ResourceMetrics>) {
        let mut receiver = pin!(receiver);
        while let Some(metrics) = receiver.next().await {
            match self.export(&metrics).await {
                Ok(()) => log::debug!("exported {} metrics", metrics.metrics.len()),
                Err(ExportError::Shutdown) => {
                    log::info!("exporter is shut down, no longer exporting");
                    return;
                }
                Err(e) => log::error!("failed to export metrics: {e}"),
            }
        }
    }
}
