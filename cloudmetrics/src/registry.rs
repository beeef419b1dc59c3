//! Remembers which metric descriptors exist so each is registered at most once.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::sync::OnceCell;

use crate::{
    downstream::MonitoringTransport, error::TransportError, proto::google::api::MetricDescriptor,
};

/// Per metric type: uninitialized until the backend is known to have the descriptor.
///
/// A failed registration leaves the cell empty so the next export tries again.
/// Concurrent callers for the same metric type wait on the same registration.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    registered: Mutex<HashMap<String, Arc<OnceCell<()>>>>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the backend has `descriptor`. Returns true when its points may be sent now.
    ///
    /// Looks the descriptor up first and creates it only when the backend does not have
    /// it. Failures are logged and reported as false; they are never cached.
    pub async fn ensure_registered(
        &self,
        transport: &impl MonitoringTransport,
        project_name: &str,
        descriptor: &MetricDescriptor,
    ) -> bool {
        let cell = self.cell(&descriptor.r#type);
        if cell.initialized() {
            return true;
        }
        let registration = cell
            .get_or_try_init(|| register(transport, project_name, descriptor))
            .await;
        match registration {
            Ok(()) => true,
            Err(e) => {
                log::error!(
                    "could not register metric descriptor {}, dropping its points this time: {e}",
                    descriptor.r#type
                );
                false
            }
        }
    }

    /// Whether a metric type is known to be registered.
    pub fn is_registered(&self, metric_type: &str) -> bool {
        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(metric_type)
            .is_some_and(|cell| cell.initialized())
    }

    fn cell(&self, metric_type: &str) -> Arc<OnceCell<()>> {
        let mut registered = self
            .registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match registered.get(metric_type) {
            Some(cell) => cell.clone(),
            None => {
                let cell = Arc::new(OnceCell::new());
                registered.insert(metric_type.to_string(), cell.clone());
                cell
            }
        }
    }
}

async fn register(
    transport: &impl MonitoringTransport,
    project_name: &str,
    descriptor: &MetricDescriptor,
) -> Result<(), TransportError> {
    if transport
        .get_metric_descriptor(project_name, &descriptor.r#type)
        .await?
        .is_some()
    {
        log::debug!("metric descriptor {} already exists", descriptor.r#type);
        return Ok(());
    }
    transport
        .create_metric_descriptor(project_name, descriptor.clone())
        .await
}

#[cfg(test)]
mod test {
    use crate::{
        proto::google::api::MetricDescriptor,
        registry::DescriptorRegistry,
        testing::{Call, RecordingTransport},
    };

    fn descriptor(metric_type: &str) -> MetricDescriptor {
        MetricDescriptor {
            name: format!("projects/p/metricDescriptors/{metric_type}"),
            r#type: metric_type.to_string(),
            ..Default::default()
        }
    }

    #[test_log::test(tokio::test)]
    async fn second_registration_is_free() {
        let transport = RecordingTransport::default();
        let registry = DescriptorRegistry::new();
        let counter = descriptor("workload.googleapis.com/mycounter");

        assert!(registry.ensure_registered(&transport, "projects/p", &counter).await);
        assert_eq!(
            vec![
                Call::GetDescriptor("workload.googleapis.com/mycounter".to_string()),
                Call::CreateDescriptor("workload.googleapis.com/mycounter".to_string()),
            ],
            transport.calls()
        );

        assert!(registry.ensure_registered(&transport, "projects/p", &counter).await);
        assert_eq!(2, transport.calls().len(), "no network on the second call");
        assert!(registry.is_registered("workload.googleapis.com/mycounter"));
    }

    #[test_log::test(tokio::test)]
    async fn existing_descriptor_is_not_created() {
        let transport = RecordingTransport::default();
        transport.add_existing_descriptor("workload.googleapis.com/old");
        let registry = DescriptorRegistry::new();

        assert!(
            registry
                .ensure_registered(&transport, "projects/p", &descriptor("workload.googleapis.com/old"))
                .await
        );
        assert_eq!(
            vec![Call::GetDescriptor("workload.googleapis.com/old".to_string())],
            transport.calls()
        );
    }

    #[test_log::test(tokio::test)]
    async fn failed_registration_is_retried() {
        let transport = RecordingTransport::default();
        transport.fail_creates(true);
        let registry = DescriptorRegistry::new();
        let counter = descriptor("workload.googleapis.com/flaky");

        assert!(!registry.ensure_registered(&transport, "projects/p", &counter).await);
        assert!(!registry.is_registered("workload.googleapis.com/flaky"));

        transport.fail_creates(false);
        assert!(registry.ensure_registered(&transport, "projects/p", &counter).await);
        assert_eq!(
            2,
            transport
                .calls()
                .iter()
                .filter(|call| matches!(call, Call::CreateDescriptor(_)))
                .count()
        );
    }

    #[test_log::test(tokio::test)]
    async fn failed_lookup_does_not_create() {
        let transport = RecordingTransport::default();
        transport.fail_lookups(true);
        let registry = DescriptorRegistry::new();

        assert!(
            !registry
                .ensure_registered(&transport, "projects/p", &descriptor("workload.googleapis.com/x"))
                .await
        );
        assert_eq!(
            vec![Call::GetDescriptor("workload.googleapis.com/x".to_string())],
            transport.calls()
        );
    }

    #[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 4))]
    async fn concurrent_registrations_create_once() {
        let transport = RecordingTransport::default();
        let registry = DescriptorRegistry::new();
        let counter = descriptor("workload.googleapis.com/contended");

        let attempts = (0..16).map(|_| registry.ensure_registered(&transport, "projects/p", &counter));
        let results = futures::future::join_all(attempts).await;

        assert!(results.into_iter().all(|registered| registered));
        assert_eq!(
            1,
            transport
                .calls()
                .iter()
                .filter(|call| matches!(call, Call::CreateDescriptor(_)))
                .count()
        );
    }
}
