//! A scripted transport for tests.

use std::{
    collections::HashSet,
    future::{self, Future},
    sync::{Mutex, MutexGuard},
};

use crate::{
    downstream::MonitoringTransport,
    error::TransportError,
    proto::google::{api::MetricDescriptor, monitoring::v3::TimeSeries},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetDescriptor(String),
    CreateDescriptor(String),
    /// The number of time series in the batch
    Send(usize),
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    existing: HashSet<String>,
    created: Vec<MetricDescriptor>,
    sent: Vec<Vec<TimeSeries>>,
    fail_lookups: bool,
    fail_creates: bool,
    fail_all_sends: bool,
    failing_sends: HashSet<usize>,
    send_attempts: usize,
}

/// Records every call. Succeeds unless told otherwise.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    state: Mutex<State>,
}

impl RecordingTransport {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("state lock is not poisoned")
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn created(&self) -> Vec<MetricDescriptor> {
        self.state().created.clone()
    }

    /// Batches that were accepted
    pub fn sent(&self) -> Vec<Vec<TimeSeries>> {
        self.state().sent.clone()
    }

    pub fn add_existing_descriptor(&self, metric_type: &str) {
        self.state().existing.insert(metric_type.to_string());
    }

    pub fn fail_lookups(&self, fail: bool) {
        self.state().fail_lookups = fail;
    }

    pub fn fail_creates(&self, fail: bool) {
        self.state().fail_creates = fail;
    }

    pub fn fail_all_sends(&self, fail: bool) {
        self.state().fail_all_sends = fail;
    }

    /// Fail the nth send attempt, counting from 0.
    pub fn fail_send(&self, attempt: usize) {
        self.state().failing_sends.insert(attempt);
    }
}

impl MonitoringTransport for RecordingTransport {
    fn get_metric_descriptor(
        &self,
        _project_name: &str,
        metric_type: &str,
    ) -> impl Future<Output = Result<Option<MetricDescriptor>, TransportError>> + Send {
        let mut state = self.state();
        state.calls.push(Call::GetDescriptor(metric_type.to_string()));
        let result = if state.fail_lookups {
            Err(TransportError::Unavailable("lookup refused".to_string()))
        } else if state.existing.contains(metric_type) {
            Ok(Some(MetricDescriptor {
                r#type: metric_type.to_string(),
                ..Default::default()
            }))
        } else {
            Ok(None)
        };
        future::ready(result)
    }

    fn create_metric_descriptor(
        &self,
        _project_name: &str,
        descriptor: MetricDescriptor,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        let mut state = self.state();
        state
            .calls
            .push(Call::CreateDescriptor(descriptor.r#type.clone()));
        let result = if state.fail_creates {
            Err(TransportError::Unavailable("create refused".to_string()))
        } else {
            state.existing.insert(descriptor.r#type.clone());
            state.created.push(descriptor);
            Ok(())
        };
        future::ready(result)
    }

    fn create_time_series(
        &self,
        _project_name: &str,
        time_series: Vec<TimeSeries>,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        let mut state = self.state();
        state.calls.push(Call::Send(time_series.len()));
        let attempt = state.send_attempts;
        state.send_attempts += 1;
        let result = if state.fail_all_sends || state.failing_sends.contains(&attempt) {
            Err(TransportError::Unavailable(format!("send {attempt} refused")))
        } else {
            state.sent.push(time_series);
            Ok(())
        };
        future::ready(result)
    }
}
