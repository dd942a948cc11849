use std::{cell::Cell, rc::Rc};

use crate::surface::SurfaceId;

/// Swap state, the two surfaces the swap operation toggles between.
///
/// The scratch handle sits in a shared cell so the unload hook registered
/// on the host clears it here when the user closes the scratch surface.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    surface: Rc<Cell<Option<SurfaceId>>>,
    /// Last external surface before swapping into the scratch surface.
    previous: Option<SurfaceId>,
}

impl Scratch {
    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface.get()
    }

    pub fn set_surface(&mut self, id: SurfaceId) {
        self.surface.set(Some(id));
    }

    /// Shared slot handed to the host unload hook.
    pub fn slot(&self) -> Rc<Cell<Option<SurfaceId>>> {
        Rc::clone(&self.surface)
    }

    pub fn previous(&self) -> Option<SurfaceId> {
        self.previous
    }

    pub fn remember(&mut self, id: Option<SurfaceId>) {
        self.previous = id;
    }
}
