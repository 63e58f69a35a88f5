//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod page;

pub(crate) use build::BuildArgs;
pub(crate) use page::PageArgs;
