//! In-memory host fakes shared by the test modules.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use anyhow::{anyhow, bail, ensure, Result};
use jotter_core::storage::BlobStore;

use crate::{
    config::Config,
    session::Session,
    surface::{SurfaceId, TextSurface, UnloadHook},
};

/// A fresh session over a [`FakeSurface`] and a [`MemStore`]. The returned
/// handles observe and steer the same state the session sees.
pub(crate) fn session() -> (Session, FakeSurface, MemStore) {
    let surface = FakeSurface::default();
    let store = MemStore::default();
    let session = Session::new(
        Box::new(surface.clone()),
        Box::new(store.clone()),
        Config::default(),
    );
    (session, surface, store)
}

#[derive(Default)]
struct Regions {
    lines: HashMap<usize, Vec<String>>,
    hooks: Vec<(usize, UnloadHook)>,
    active: Option<usize>,
    scratch: Option<usize>,
    next_id: usize,
    refuse_creation: bool,
}

/// Host editor stand-in: a set of line-addressed regions, one of them
/// active, with unload hook delivery on destroy.
#[derive(Clone, Default)]
pub(crate) struct FakeSurface {
    inner: Rc<RefCell<Regions>>,
}

impl FakeSurface {
    /// Create an external document region and make it active.
    pub fn open_document(&self, lines: &[&str]) -> SurfaceId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .lines
            .insert(id, lines.iter().map(|line| line.to_string()).collect());
        inner.active = Some(id);
        SurfaceId(id)
    }

    pub fn active(&self) -> Option<SurfaceId> {
        self.inner.borrow().active.map(SurfaceId)
    }

    /// The scratch region created through the trait, while it is alive.
    pub fn scratch(&self) -> Option<SurfaceId> {
        self.inner.borrow().scratch.map(SurfaceId)
    }

    pub fn lines_of(&self, id: SurfaceId) -> Vec<String> {
        self.inner.borrow().lines[&id.0].clone()
    }

    pub fn set_content(&self, id: SurfaceId, lines: &[&str]) {
        let mut inner = self.inner.borrow_mut();
        let content = inner.lines.get_mut(&id.0).expect("region exists");
        *content = lines.iter().map(|line| line.to_string()).collect();
    }

    /// Destroy a region the way a user closing it would, running any
    /// registered unload hooks.
    pub fn destroy(&self, id: SurfaceId) {
        let hooks = {
            let mut inner = self.inner.borrow_mut();
            inner.lines.remove(&id.0);
            if inner.active == Some(id.0) {
                inner.active = None;
            }
            if inner.scratch == Some(id.0) {
                inner.scratch = None;
            }

            let mut matching = Vec::new();
            let mut rest = Vec::new();
            for (hid, hook) in inner.hooks.drain(..) {
                if hid == id.0 {
                    matching.push(hook);
                } else {
                    rest.push((hid, hook));
                }
            }
            inner.hooks = rest;
            matching
        };

        // Borrow released, hooks may call back into the surface
        for mut hook in hooks {
            hook();
        }
    }

    pub fn refuse_creation(&self) {
        self.inner.borrow_mut().refuse_creation = true;
    }

    pub fn allow_creation(&self) {
        self.inner.borrow_mut().refuse_creation = false;
    }
}

impl fmt::Debug for FakeSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FakeSurface")
            .field("active", &inner.active)
            .field("scratch", &inner.scratch)
            .field("regions", &inner.lines.len())
            .finish_non_exhaustive()
    }
}

impl TextSurface for FakeSurface {
    fn create_scratch(&mut self, _name: &str) -> Result<SurfaceId> {
        let mut inner = self.inner.borrow_mut();
        if inner.refuse_creation {
            bail!("Surface creation refused");
        }

        let id = inner.next_id;
        inner.next_id += 1;
        inner.lines.insert(id, vec![String::new()]);
        inner.scratch = Some(id);
        Ok(SurfaceId(id))
    }

    fn lines(&self, id: SurfaceId) -> Result<Vec<String>> {
        self.inner
            .borrow()
            .lines
            .get(&id.0)
            .cloned()
            .ok_or_else(|| anyhow!("No such region: {id:?}"))
    }

    fn set_lines(&mut self, id: SurfaceId, lines: &[String]) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        match inner.lines.get_mut(&id.0) {
            Some(content) => {
                *content = lines.to_vec();
                Ok(())
            }
            None => bail!("No such region: {id:?}"),
        }
    }

    fn active(&self) -> Option<SurfaceId> {
        self.inner.borrow().active.map(SurfaceId)
    }

    fn activate(&mut self, id: SurfaceId) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        ensure!(inner.lines.contains_key(&id.0), "No such region: {id:?}");
        inner.active = Some(id.0);
        Ok(())
    }

    fn on_unload(&mut self, id: SurfaceId, hook: UnloadHook) {
        self.inner.borrow_mut().hooks.push((id.0, hook));
    }
}

#[derive(Debug, Default)]
struct Blobs {
    blobs: HashMap<String, Vec<u8>>,
    reads: usize,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

/// Blob store over a shared in-memory map with injectable failures.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemStore {
    inner: Rc<RefCell<Blobs>>,
}

impl MemStore {
    pub fn put(&self, key: &str, data: &[u8]) {
        self.inner
            .borrow_mut()
            .blobs
            .insert(key.into(), data.to_vec());
    }

    pub fn blob(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.borrow().blobs.get(key).cloned()
    }

    pub fn reads(&self) -> usize {
        self.inner.borrow().reads
    }

    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn fail_reads(&self) {
        self.inner.borrow_mut().fail_reads = true;
    }

    pub fn fail_writes(&self) {
        self.inner.borrow_mut().fail_writes = true;
    }

    pub fn allow_writes(&self) {
        self.inner.borrow_mut().fail_writes = false;
    }
}

impl BlobStore for MemStore {
    fn read(&self, key: &str) -> Result<Vec<u8>> {
        let mut inner = self.inner.borrow_mut();
        inner.reads += 1;
        if inner.fail_reads {
            bail!("Injected read failure");
        }
        inner
            .blobs
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("No blob under key {key}"))
    }

    fn write(&mut self, key: &str, data: &[u8]) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.writes += 1;
        if inner.fail_writes {
            bail!("Injected write failure");
        }
        inner.blobs.insert(key.into(), data.to_vec());
        Ok(())
    }
}
