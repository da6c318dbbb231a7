mod compare;
mod ui;

pub use compare::CompareState;
pub use ui::{UIState, ViewMode};
