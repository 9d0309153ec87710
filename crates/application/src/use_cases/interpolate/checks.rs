//! Check interpolation.

use std::collections::HashMap;

use beacon_domain::CheckDescriptor;

use crate::ports::TaskEnvironment;

/// Interpolates every user-authored field of a check in place.
///
/// The check must already be a private copy; the caller owns the copy made at
/// service level.
pub fn interpolate_check<E>(env: &E, check: &mut CheckDescriptor)
where
    E: TaskEnvironment + ?Sized,
{
    check.name = env.replace_env(&check.name);
    check.check_type = env.replace_env(&check.check_type);
    check.command = env.replace_env(&check.command);
    check.args = env.parse_and_replace(&check.args);
    check.path = env.replace_env(&check.path);
    check.protocol = env.replace_env(&check.protocol);
    check.port_label = env.replace_env(&check.port_label);
    check.initial_status = env.replace_env(&check.initial_status);
    check.method = env.replace_env(&check.method);
    check.grpc_service = env.replace_env(&check.grpc_service);

    if !check.header.is_empty() {
        check.header = interpolate_header(env, std::mem::take(&mut check.header));
    }
}

/// Interpolates header names and every header value.
///
/// Names are visited in ascending byte order of the original name, so when two
/// names resolve to the same header the greater original name wins.
fn interpolate_header<E>(
    env: &E,
    header: HashMap<String, Vec<String>>,
) -> HashMap<String, Vec<String>>
where
    E: TaskEnvironment + ?Sized,
{
    let mut entries: Vec<_> = header.into_iter().collect();
    entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    let mut resolved = HashMap::with_capacity(entries.len());
    for (name, values) in entries {
        let values = values.iter().map(|v| env.replace_env(v)).collect();
        resolved.insert(env.replace_env(&name), values);
    }
    resolved
}
