//! Seams between the router and the page hosting the frames.

use chordframe_common::{FrameId, HostError};
use serde_json::Value;

use crate::rules;

/// A message in the host's own representation, as received and as posted.
///
/// The router decodes a JSON view of each message to pick a route, but what
/// it forwards is always built from the payload the sender posted.
pub trait Payload: Sized {
    /// `R1_LOAD_ALL` carrying this message's chord list and nothing else.
    ///
    /// `chords` is the decoded view of the same list; hosts that can reuse
    /// the sender's own list should.
    fn repack_load_all(&self, chords: &[Value]) -> Result<Self, HostError>;
}

impl Payload for Value {
    fn repack_load_all(&self, chords: &[Value]) -> Result<Self, HostError> {
        Ok(rules::load_all(chords))
    }
}

/// A live frame document able to receive a message.
pub trait FramePort {
    type Payload: Payload;

    /// Deliver `payload` without waiting for any acknowledgment.
    fn post(&self, payload: &Self::Payload, target_origin: &str) -> Result<(), HostError>;
}

/// The page the frames live in.
pub trait FrameHost {
    type Port: FramePort;

    /// Look `frame` up in the current document.
    ///
    /// Called on every dispatch and never cached, so a frame that is
    /// (re)loaded after startup is picked up. `None` when the frame is
    /// absent or has no browsing context yet.
    fn resolve(&self, frame: FrameId) -> Option<Self::Port>;

    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;
}

/// Payload type posted to the frames of host `H`.
pub type HostPayload<H> = <<H as FrameHost>::Port as FramePort>::Payload;
