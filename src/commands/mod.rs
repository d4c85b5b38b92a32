pub mod add;
pub mod brief;
pub mod list;
pub mod notice;
pub mod remove;
pub mod set;
