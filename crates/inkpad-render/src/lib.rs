//! Inkpad Render Library
//!
//! Renderer adapter for the inkpad sketch surface. A model snapshot is turned
//! into a backend-independent command list (fill then stroke per shape, back
//! to front) which each backend replays. The Vello backend sits behind the
//! `vello-renderer` feature; build and test it with
//! `--features vello-renderer`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod commands;
mod renderer;
mod style;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use commands::{DrawCommand, build_commands, shape_commands};
pub use renderer::{CommandRecorder, RenderContext, RenderResult, Renderer, RendererError};
pub use style::{RenderStyle, SerializableColor};

#[cfg(feature = "vello-renderer")]
#[cfg_attr(docsrs, doc(cfg(feature = "vello-renderer")))]
pub use vello_impl::VelloRenderer;
