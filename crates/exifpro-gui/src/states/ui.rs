use exifpro_core::meta::TableState;

/// Which view fills the central panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Metadata,
    Compare,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metadata => write!(f, "Metadata"),
            Self::Compare => write!(f, "Compare"),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub view: ViewMode,

    /// Search, collapse and selection state of the metadata table.
    pub table: TableState,

    /// Files the worker has not finished decoding yet.
    pub pending: usize,

    pub log_messages: Vec<String>,
    pub show_about: bool,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
