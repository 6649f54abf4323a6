//! The static routing table.
//!
//! One rule per message kind, written as an exhaustive match so a new
//! [`FrameMessage`] variant cannot be added without deciding its route.

use chordframe_common::{FrameId, MessageError};
use serde_json::{json, Value};

use crate::message::FrameMessage;

/// Kind used when a chord list is repacked for R3.
pub const LOAD_ALL_KIND: &str = "R1_LOAD_ALL";

/// What to send to the destination frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound<'a> {
    /// Forward the sender's message untouched.
    Passthrough,
    /// Repack into `R1_LOAD_ALL` carrying only the chord list.
    LoadAll(&'a [Value]),
}

/// Destination and body for one inbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<'a> {
    pub to: FrameId,
    pub body: Outbound<'a>,
}

impl<'a> Route<'a> {
    fn passthrough(to: FrameId) -> Self {
        Self {
            to,
            body: Outbound::Passthrough,
        }
    }

    fn load_all(to: FrameId, chords: &'a [Value]) -> Self {
        Self {
            to,
            body: Outbound::LoadAll(chords),
        }
    }

    pub fn is_transformed(&self) -> bool {
        matches!(self.body, Outbound::LoadAll(_))
    }
}

/// `R1_LOAD_ALL` message carrying `chords` and nothing else; any title on
/// the source message is dropped.
pub fn load_all(chords: &[Value]) -> Value {
    json!({
        "type": LOAD_ALL_KIND,
        "chords": chords,
    })
}

/// Tablet/phone layouts have no R1 column.
pub fn is_narrow(viewport_width: f64, narrow_max_width: f64) -> bool {
    viewport_width <= narrow_max_width
}

/// Select the route for a message. `Ok(None)` means the kind is not routed.
///
/// Fails only when the chosen route repacks a chord list the message does
/// not carry.
pub fn plan(
    message: &FrameMessage,
    viewport_width: f64,
    narrow_max_width: f64,
) -> Result<Option<Route<'_>>, MessageError> {
    let route = match message {
        FrameMessage::SamplesUpdated => Route::passthrough(FrameId::R2a),
        FrameMessage::R2aLoadToR3 { chords, .. } => Route::load_all(FrameId::R3, chords),
        FrameMessage::R2aLoadChords { chords, .. } => {
            if !is_narrow(viewport_width, narrow_max_width) {
                return Ok(Some(Route::passthrough(FrameId::R1)));
            }
            let Some(chords) = chords.as_ref().and_then(Value::as_array) else {
                return Err(MessageError::BadPayload {
                    kind: "R2A_LOAD_CHORDS".into(),
                    reason: "`chords` is not an array".into(),
                });
            };
            Route::load_all(FrameId::R3, chords)
        }
        FrameMessage::R1LoadChord { .. }
        | FrameMessage::R1LoadAll { .. }
        | FrameMessage::R1ClearAll
        | FrameMessage::R3ClearAll
        | FrameMessage::R3FocusAndPlay { .. }
        | FrameMessage::SetChordDuration { .. } => Route::passthrough(FrameId::R3),
        FrameMessage::R3SendToR2b => Route::passthrough(FrameId::R2b),
        FrameMessage::LoadChordData => Route::passthrough(FrameId::R2a),
        FrameMessage::EditSample { .. } => Route::passthrough(FrameId::Sample),
        FrameMessage::Unknown => return Ok(None),
    };
    Ok(Some(route))
}
