//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod input;
pub(crate) mod render;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
