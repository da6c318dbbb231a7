pub mod compare;
pub mod guide;
mod helpers;
pub mod library;
pub mod menu_bar;
pub mod metadata;
pub mod status;
