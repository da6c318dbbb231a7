pub mod config;
pub mod explain;
pub mod info;
pub mod site;
