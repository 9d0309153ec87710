//! Service interpolation
//!
//! Produces a deep copy of a service list in which every user-authored string
//! has had its variable references substituted by a [`TaskEnvironment`].
//! The input is only ever borrowed immutably; all rewrites happen on copies.

mod checks;
mod connect;

use beacon_domain::ServiceDescriptor;
use tracing::{debug, trace};

use crate::ports::TaskEnvironment;

pub use checks::interpolate_check;
pub use connect::interpolate_connect;

/// Returns an interpolated copy of `services`.
///
/// The result has the same length and order as the input. An absent
/// environment or an empty input yields an empty list: the environment may
/// not exist yet in early lifecycle phases, and that means "nothing to
/// register" rather than a failure.
#[must_use]
pub fn interpolate_services<E>(
    env: Option<&E>,
    services: &[ServiceDescriptor],
) -> Vec<ServiceDescriptor>
where
    E: TaskEnvironment + ?Sized,
{
    let Some(env) = env else {
        debug!(services = services.len(), "no task environment, skipping interpolation");
        return Vec::new();
    };

    if services.is_empty() {
        debug!("no services to interpolate");
        return Vec::new();
    }

    services
        .iter()
        .map(|original| interpolate_service(env, original))
        .collect()
}

fn interpolate_service<E>(env: &E, original: &ServiceDescriptor) -> ServiceDescriptor
where
    E: TaskEnvironment + ?Sized,
{
    let mut service = original.clone();

    for check in &mut service.checks {
        interpolate_check(env, check);
    }

    service.name = env.replace_env(&service.name);
    service.port_label = env.replace_env(&service.port_label);
    service.tags = env.parse_and_replace(&service.tags);
    service.canary_tags = env.parse_and_replace(&service.canary_tags);

    service.connect = interpolate_connect(env, service.connect.take());

    // Keys are kept as written; only values are interpolated.
    for value in service.meta.values_mut() {
        *value = env.replace_env(value);
    }
    for value in service.canary_meta.values_mut() {
        *value = env.replace_env(value);
    }

    trace!(service = %service.name, checks = service.checks.len(), "interpolated service");
    service
}
