//! Message dispatch: decode, check origin, plan, forward.

use chordframe_common::FrameId;
use chordframe_config::RouterConfig;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::host::{FrameHost, FramePort, HostPayload, Payload};
use crate::message::Inbound;
use crate::origin::OriginPolicy;
use crate::rules::{self, Outbound};

#[cfg(test)]
mod tests;

/// What happened to one inbound message. Purely diagnostic; forwarding is
/// fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Forwarded { to: FrameId, transformed: bool },
    /// The destination frame is not in the document (or not loaded yet).
    FrameMissing { to: FrameId },
    PostFailed { to: FrameId },
    /// Kind has no rule.
    Ignored,
    /// Sender origin not permitted.
    Rejected,
    Malformed,
}

/// Routes messages between the page's frames.
pub struct FrameRouter<H: FrameHost> {
    host: H,
    policy: OriginPolicy,
    target_origin: String,
    narrow_max_width: f64,
}

impl<H: FrameHost> FrameRouter<H> {
    pub fn new(host: H, config: &RouterConfig) -> Self {
        if config.allowed_origins.is_empty() {
            debug!("router accepts messages from any origin");
        }
        Self {
            host,
            policy: OriginPolicy::from_config(config),
            target_origin: config.target_origin.clone(),
            narrow_max_width: config.narrow_max_width,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle one message posted to the host page by `origin`.
    ///
    /// `data` is the JSON view used to pick a route; `payload` is the
    /// sender's message as posted, which is what gets forwarded.
    pub fn route(&self, origin: &str, data: Value, payload: &HostPayload<H>) -> RouteOutcome {
        let kind = data.get("type").and_then(Value::as_str).unwrap_or("");
        debug!(origin, kind, "received message");

        if !self.policy.permits(origin) {
            warn!(origin, kind, "message rejected: origin not allowed");
            return RouteOutcome::Rejected;
        }

        let inbound = match Inbound::from_value(data) {
            Ok(inbound) => inbound,
            Err(e) => {
                warn!(origin, error = %e, "message rejected: failed to decode");
                return RouteOutcome::Malformed;
            }
        };
        self.dispatch(&inbound, payload)
    }

    /// Forward an already decoded message.
    pub fn dispatch(&self, inbound: &Inbound, payload: &HostPayload<H>) -> RouteOutcome {
        let kind = inbound.kind.as_str();

        let width = self.host.viewport_width();
        let route = match rules::plan(&inbound.message, width, self.narrow_max_width) {
            Ok(Some(route)) => route,
            Ok(None) => {
                debug!(kind, "no route for message kind");
                return RouteOutcome::Ignored;
            }
            Err(e) => {
                warn!(kind, viewport_width = width, error = %e, "message rejected: cannot repack");
                return RouteOutcome::Malformed;
            }
        };

        let Some(port) = self.host.resolve(route.to) else {
            warn!(kind, to = %route.to, "destination frame not available, message dropped");
            return RouteOutcome::FrameMissing { to: route.to };
        };

        let posted = match &route.body {
            Outbound::Passthrough => port.post(payload, &self.target_origin),
            Outbound::LoadAll(chords) => payload
                .repack_load_all(chords)
                .and_then(|repacked| port.post(&repacked, &self.target_origin)),
        };
        if let Err(e) = posted {
            warn!(kind, to = %route.to, error = %e, "failed to forward message");
            return RouteOutcome::PostFailed { to: route.to };
        }

        let detail = inbound.message.detail();
        info!(
            kind,
            to = %route.to,
            transformed = route.is_transformed(),
            viewport_width = width,
            detail = detail.as_deref().unwrap_or(""),
            "forwarded message"
        );
        RouteOutcome::Forwarded {
            to: route.to,
            transformed: route.is_transformed(),
        }
    }
}
