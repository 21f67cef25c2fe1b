//! Command implementations

pub mod partners;
pub mod publish;
pub mod resolve;
pub mod show;
