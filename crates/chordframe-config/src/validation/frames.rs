use crate::schema::ChordframeConfig;
use chordframe_common::FrameId;

use super::helpers::validate_non_empty;

pub(crate) fn validate_frames(errors: &mut Vec<String>, config: &ChordframeConfig) {
    for frame in FrameId::ALL {
        let name = format!("frames.{}", frame.label().to_lowercase());
        validate_non_empty(errors, &name, config.frames.element_id(frame));
    }
}
