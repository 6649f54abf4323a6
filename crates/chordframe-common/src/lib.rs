pub mod errors;
pub mod types;

pub use errors::{ChordframeError, ConfigError, HostError, MessageError};
pub use types::{Divider, DragSource, FrameId, Rect};
