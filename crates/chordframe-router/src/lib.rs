//! Cross-frame message router for the chord editor page.
//!
//! Every frame posts to the host page; the router decodes the message kind
//! and forwards it to exactly one destination frame:
//! - a closed set of kinds, decoded into [`FrameMessage`]
//! - a static rule table ([`rules::plan`]) with one viewport-dependent rule
//! - the `R1_LOAD_ALL` repack used when R3 is fed directly from R2A
//! - destination frames re-resolved through [`FrameHost`] on every dispatch

pub mod host;
pub mod message;
pub mod origin;
pub mod router;
pub mod rules;

pub use host::{FrameHost, FramePort, HostPayload, Payload};
pub use message::{FrameMessage, Inbound};
pub use origin::OriginPolicy;
pub use router::{FrameRouter, RouteOutcome};
pub use rules::{Outbound, Route};
