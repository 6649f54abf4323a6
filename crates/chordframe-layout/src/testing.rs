//! Recording `LayoutHost` fake shared by the unit tests.

use std::collections::HashMap;

use chordframe_common::{Divider, Rect};

use crate::host::LayoutHost;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostOp {
    RootVar(String, String),
    ColumnTemplate(String),
    Dragging(Divider, bool),
    Cursor(Option<String>),
    TextSelection(bool),
    FramesInteractive(bool),
}

#[derive(Debug)]
pub(crate) struct RecordingHost {
    pub rect: Option<Rect>,
    pub vars: HashMap<String, String>,
    pub template: Option<String>,
    pub cursor: Option<String>,
    pub selection_enabled: bool,
    pub frames_interactive: bool,
    pub dragging: HashMap<Divider, bool>,
    pub ops: Vec<HostOp>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            rect: Some(Rect::new(0.0, 100.0, 1200.0, 800.0)),
            vars: HashMap::new(),
            template: None,
            cursor: None,
            selection_enabled: true,
            frames_interactive: true,
            dragging: HashMap::new(),
            ops: Vec::new(),
        }
    }
}

impl RecordingHost {
    pub fn count(&self, pred: impl Fn(&HostOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_dragging(&self, divider: Divider) -> bool {
        self.dragging.get(&divider).copied().unwrap_or(false)
    }
}

impl LayoutHost for RecordingHost {
    fn container_rect(&self) -> Option<Rect> {
        self.rect
    }

    fn set_root_var(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
        self.ops
            .push(HostOp::RootVar(name.to_string(), value.to_string()));
    }

    fn root_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set_column_template(&mut self, template: &str) {
        self.template = Some(template.to_string());
        self.ops.push(HostOp::ColumnTemplate(template.to_string()));
    }

    fn set_divider_dragging(&mut self, divider: Divider, dragging: bool) {
        self.dragging.insert(divider, dragging);
        self.ops.push(HostOp::Dragging(divider, dragging));
    }

    fn set_cursor(&mut self, cursor: Option<&str>) {
        self.cursor = cursor.map(str::to_string);
        self.ops.push(HostOp::Cursor(self.cursor.clone()));
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
        self.ops.push(HostOp::TextSelection(enabled));
    }

    fn set_frames_interactive(&mut self, interactive: bool) {
        self.frames_interactive = interactive;
        self.ops.push(HostOp::FramesInteractive(interactive));
    }
}
