//! Connect and gateway interpolation.

use beacon_domain::{ConnectDescriptor, GatewayIngress, GatewayProxy};

use crate::ports::TaskEnvironment;

/// Interpolates a connect block.
///
/// `connect` is the single private copy of the subtree; every rewrite happens
/// in place on it. An absent block stays absent.
///
/// The sidecar service is carried through unchanged: its tags, port and
/// proxy settings are not interpolated.
pub fn interpolate_connect<E>(
    env: &E,
    connect: Option<ConnectDescriptor>,
) -> Option<ConnectDescriptor>
where
    E: TaskEnvironment + ?Sized,
{
    let mut connect = connect?;

    if let Some(gateway) = connect.gateway.as_mut() {
        interpolate_gateway_proxy(env, gateway.proxy.as_mut());
        interpolate_gateway_ingress(env, gateway.ingress.as_mut());
    }

    Some(connect)
}

fn interpolate_gateway_proxy<E>(env: &E, proxy: Option<&mut GatewayProxy>)
where
    E: TaskEnvironment + ?Sized,
{
    let Some(proxy) = proxy else {
        return;
    };

    for bind in &mut proxy.bind_addresses {
        bind.address = env.replace_env(&bind.address);
    }
}

fn interpolate_gateway_ingress<E>(env: &E, ingress: Option<&mut GatewayIngress>)
where
    E: TaskEnvironment + ?Sized,
{
    let Some(ingress) = ingress else {
        return;
    };

    for listener in &mut ingress.listeners {
        listener.protocol = env.replace_env(&listener.protocol);
        for service in &mut listener.services {
            service.name = env.replace_env(&service.name);
            service.hosts = env.parse_and_replace(&service.hosts);
        }
    }
}
