//! Typed view of the messages exchanged between frames.
//!
//! Messages arrive as `{ "type": "...", ...fields }`. The discriminant picks a
//! [`FrameMessage`] variant; fields the router does not look at stay in the
//! raw JSON view. Forwarding never uses this view: pass-through routes post
//! the sender's own payload (see [`crate::host::Payload`]).

use chordframe_common::MessageError;
use serde::Deserialize;
use serde_json::Value;

/// Ordered list of chord records, opaque to the router.
pub type ChordList = Vec<Value>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum FrameMessage {
    /// Sample library changed (Sample → R2A).
    #[serde(rename = "SAMPLES_UPDATED")]
    SamplesUpdated,
    /// R2A feeds R3 directly, bypassing R1.
    #[serde(rename = "R2A_LOAD_TO_R3")]
    R2aLoadToR3 {
        chords: ChordList,
        #[serde(rename = "titleLine", default)]
        title_line: Option<Value>,
    },
    /// R2A loads a progression; destination depends on the viewport.
    ///
    /// `chords` is only read when the message is repacked for R3.
    #[serde(rename = "R2A_LOAD_CHORDS")]
    R2aLoadChords {
        #[serde(default)]
        chords: Option<Value>,
        #[serde(rename = "titleLine", default)]
        title_line: Option<Value>,
    },
    #[serde(rename = "R1_LOAD_CHORD")]
    R1LoadChord {
        #[serde(default)]
        chord: Option<Value>,
    },
    #[serde(rename = "R1_LOAD_ALL")]
    R1LoadAll {
        #[serde(default)]
        chords: Option<Value>,
    },
    #[serde(rename = "R1_CLEAR_ALL")]
    R1ClearAll,
    #[serde(rename = "R3_SEND_TO_R2B")]
    R3SendToR2b,
    #[serde(rename = "R3_CLEAR_ALL")]
    R3ClearAll,
    #[serde(rename = "R3_FOCUS_AND_PLAY")]
    R3FocusAndPlay {
        #[serde(rename = "rowIndex", default)]
        row_index: Option<Value>,
    },
    #[serde(rename = "LOAD_CHORD_DATA")]
    LoadChordData,
    #[serde(rename = "SET_CHORD_DURATION")]
    SetChordDuration {
        #[serde(default)]
        duration: Option<Value>,
    },
    #[serde(rename = "EDIT_SAMPLE")]
    EditSample {
        #[serde(default)]
        data: Option<Value>,
    },
    #[serde(other)]
    Unknown,
}

impl FrameMessage {
    /// Number of chords carried, for kinds that carry a chord list.
    pub fn chord_count(&self) -> Option<usize> {
        match self {
            FrameMessage::R2aLoadToR3 { chords, .. } => Some(chords.len()),
            FrameMessage::R2aLoadChords { chords, .. } | FrameMessage::R1LoadAll { chords } => {
                chords.as_ref().and_then(Value::as_array).map(Vec::len)
            }
            _ => None,
        }
    }

    /// Kind-specific detail worth tracing alongside a forward.
    pub fn detail(&self) -> Option<String> {
        match self {
            FrameMessage::R1LoadChord { chord: Some(chord) } => Some(format!("chord {chord}")),
            FrameMessage::R3FocusAndPlay {
                row_index: Some(row),
            } => Some(format!("row {row}")),
            FrameMessage::SetChordDuration {
                duration: Some(duration),
            } => Some(format!("duration {duration}")),
            FrameMessage::EditSample { data: Some(data) } => Some(format!("data {data}")),
            _ => self.chord_count().map(|n| format!("{n} chords")),
        }
    }
}

/// A decoded inbound message together with its JSON view.
#[derive(Debug, Clone)]
pub struct Inbound {
    /// The wire discriminant, also for unknown kinds.
    pub kind: String,
    pub message: FrameMessage,
    pub raw: Value,
}

impl Inbound {
    /// Decode a message received from a frame.
    pub fn from_value(raw: Value) -> Result<Self, MessageError> {
        let Some(object) = raw.as_object() else {
            return Err(MessageError::NotAnObject);
        };
        let kind = match object.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            _ => return Err(MessageError::MissingKind),
        };
        let message =
            FrameMessage::deserialize(&raw).map_err(|e| MessageError::BadPayload {
                kind: kind.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { kind, message, raw })
    }
}
