use std::fmt;

use anyhow::Result;

/// Handle of an editable region in the host editor.
///
/// Opaque to this crate, the host assigns and interprets the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub usize);

impl SurfaceId {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

/// Callback run when a surface is destroyed or unloaded by the host.
pub type UnloadHook = Box<dyn FnMut()>;

/// Text editing capabilities required from the host editor.
///
/// The host decides what a region is, a split, a tab, a buffer. This crate
/// only moves whole line lists in and out and follows the active region.
pub trait TextSurface: fmt::Debug {
    /// Create a non file backed, non persisted editable region displayed
    /// under `name`. Fails if the host refuses the creation.
    fn create_scratch(&mut self, name: &str) -> Result<SurfaceId>;

    /// Full ordered line content of `id`, empty lines included.
    fn lines(&self, id: SurfaceId) -> Result<Vec<String>>;

    /// Replace the full content of `id` with `lines`.
    fn set_lines(&mut self, id: SurfaceId, lines: &[String]) -> Result<()>;

    /// Currently active region, if any.
    fn active(&self) -> Option<SurfaceId>;

    /// Make `id` the active region. Fails if the region no longer exists.
    fn activate(&mut self, id: SurfaceId) -> Result<()>;

    /// Run `hook` once `id` is destroyed or unloaded by any means.
    fn on_unload(&mut self, id: SurfaceId, hook: UnloadHook);
}
