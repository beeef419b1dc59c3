//! Finding out which project to write to.

use std::future::Future;

use futures::{
    future::{self, BoxFuture, Shared},
    FutureExt,
};

/// Environment variables consulted, in order, by [`EnvironmentProjectId`].
pub const PROJECT_ID_VARIABLES: &[&str] = &["GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT", "GCP_PROJECT"];

/// Something that can eventually name the project metrics belong to.
///
/// Resolution may take a network round trip (a metadata server, a credentials file),
/// so it is asynchronous. The exporter resolves once and remembers the answer.
pub trait ProjectIdResolver: Send + Sync + 'static {
    /// Resolve the project id, or `None` if there is no way to know it.
    fn resolve(&self) -> BoxFuture<'static, Option<String>>;
}

/// Reads the project id from the conventional environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentProjectId;

impl ProjectIdResolver for EnvironmentProjectId {
    fn resolve(&self) -> BoxFuture<'static, Option<String>> {
        let project_id = PROJECT_ID_VARIABLES
            .iter()
            .filter_map(|variable| std::env::var(variable).ok())
            .find(|value| !value.is_empty());
        future::ready(project_id).boxed()
    }
}

impl<F, Fut> ProjectIdResolver for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<String>> + Send + 'static,
{
    fn resolve(&self) -> BoxFuture<'static, Option<String>> {
        (self)().boxed()
    }
}

/// A project id resolution that every export awaits. It runs at most once.
pub(crate) type SharedProjectId = Shared<BoxFuture<'static, Option<String>>>;

/// Begin resolving the project id.
///
/// A configured id wins outright. Otherwise, when called inside a tokio runtime the
/// resolver starts right away on its own task; outside of one it starts on first await.
pub(crate) fn start_resolution(
    configured: Option<String>,
    resolver: &dyn ProjectIdResolver,
) -> SharedProjectId {
    if let Some(project_id) = configured.filter(|id| !id.is_empty()) {
        return future::ready(Some(project_id)).boxed().shared();
    }
    let resolution = resolver
        .resolve()
        .map(|project_id| project_id.filter(|id| !id.is_empty()));
    match tokio::runtime::Handle::try_current() {
        Ok(runtime) => runtime
            .spawn(resolution)
            .map(|joined| match joined {
                Ok(project_id) => project_id,
                Err(e) => {
                    log::error!("project id resolution did not complete: {e:?}");
                    None
                }
            })
            .boxed()
            .shared(),
        Err(_) => resolution.boxed().shared(),
    }
}
