pub mod compare;
pub mod consts;
pub mod error;
pub mod meta;
pub mod session;
pub mod site;
