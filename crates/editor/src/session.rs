use jotter_core::{
    decode, encode,
    dirs::HISTORY_KEY,
    storage::BlobStore,
    Snapshot, SnapshotHistory,
};

use crate::{
    actions::ActionResult,
    config::Config,
    message::StatusMessage,
    scratch::Scratch,
    surface::{SurfaceId, TextSurface},
};

/// Display name of the scratch surface in the host editor.
pub const SCRATCH_NAME: &str = "*jot*";

/// All state of one scratch buffer subsystem instance.
///
/// Constructed and owned by the hosting editor, passed into every
/// operation. Multiple independent sessions can coexist, each with its own
/// surface, storage and history.
pub struct Session {
    surface: Box<dyn TextSurface>,
    store: Box<dyn BlobStore>,
    config: Config,
    scratch: Scratch,
    /// Loaded from storage on first use.
    history: Option<SnapshotHistory>,
    message: Option<StatusMessage>,
}

impl Session {
    pub fn new(
        surface: Box<dyn TextSurface>,
        store: Box<dyn BlobStore>,
        config: Config,
    ) -> Session {
        Session {
            surface,
            store,
            config,
            scratch: Scratch::default(),
            history: None,
            message: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Latest user visible notice.
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn take_message(&mut self) -> Option<StatusMessage> {
        self.message.take()
    }

    pub(crate) fn info_msg(&mut self, message: &str) {
        self.message = Some(StatusMessage::info(message));
    }

    pub(crate) fn warn_msg(&mut self, message: &str) {
        self.message = Some(StatusMessage::warn(message));
    }

    pub(crate) fn error_msg(&mut self, message: &str) {
        self.message = Some(StatusMessage::error(message));
    }

    /// Toggle between the scratch surface and the surface the user came
    /// from.
    pub fn swap(&mut self) -> ActionResult {
        let active = self.surface.active();
        if active.is_some() && active == self.scratch.surface() {
            self.leave_scratch()
        } else {
            self.enter_scratch(active)
        }
    }

    fn leave_scratch(&mut self) -> ActionResult {
        let Some(previous) = self.scratch.previous() else {
            self.warn_msg("No previous buffer to return to");
            return ActionResult::Skipped;
        };

        if let Err(e) = self.surface.activate(previous) {
            log::warn!("Cannot activate previous surface {previous:?}: {e}");
            self.warn_msg("No previous buffer to return to");
            return ActionResult::Skipped;
        }

        ActionResult::Ok
    }

    fn enter_scratch(&mut self, active: Option<SurfaceId>) -> ActionResult {
        self.scratch.remember(active);

        let id = match self.scratch.surface() {
            Some(id) => id,
            None => match self.surface.create_scratch(SCRATCH_NAME) {
                Ok(id) => {
                    let slot = self.scratch.slot();
                    self.surface.on_unload(id, Box::new(move || slot.set(None)));
                    self.scratch.set_surface(id);
                    id
                }
                Err(e) => {
                    log::error!("Failed to create scratch surface: {e}");
                    self.error_msg("Failed to create scratch buffer");
                    return ActionResult::Failed;
                }
            },
        };

        if let Err(e) = self.surface.activate(id) {
            log::error!("Failed to activate scratch surface {id:?}: {e}");
            self.error_msg("Failed to open scratch buffer");
            return ActionResult::Failed;
        }

        ActionResult::Ok
    }

    /// Save the scratch buffer content as the newest history snapshot and
    /// persist the whole list.
    pub fn save(&mut self) -> ActionResult {
        let Some(id) = self.active_scratch() else {
            return ActionResult::Skipped;
        };

        let lines = match self.surface.lines(id) {
            Ok(lines) => lines,
            Err(e) => {
                log::error!("Failed to read scratch content: {e}");
                self.error_msg("Failed to read scratch buffer");
                return ActionResult::Failed;
            }
        };

        let snapshot = Snapshot::new(lines);
        if snapshot.is_blank() {
            self.info_msg("Nothing to save");
            return ActionResult::Skipped;
        }

        let max = self.config.max_capacity;
        let Some(history) = self.history_mut() else {
            return ActionResult::Failed;
        };

        if !history.push(snapshot, max) {
            self.info_msg("Already saved");
            return ActionResult::Skipped;
        }

        self.persist()
    }

    /// Replace the scratch content with the next older snapshot, wrapping
    /// around to the newest.
    pub fn prev(&mut self) -> ActionResult {
        self.navigate(SnapshotHistory::prev)
    }

    /// Replace the scratch content with the next newer snapshot, starting
    /// from the oldest.
    pub fn next(&mut self) -> ActionResult {
        self.navigate(SnapshotHistory::next)
    }

    fn navigate(
        &mut self,
        step: fn(&mut SnapshotHistory) -> Option<&Snapshot>,
    ) -> ActionResult {
        let Some(id) = self.active_scratch() else {
            return ActionResult::Skipped;
        };

        let Some(history) = self.history_mut() else {
            return ActionResult::Failed;
        };

        let lines = step(history).map(|snapshot| snapshot.lines().to_vec());
        let Some(lines) = lines else {
            self.info_msg("Scratch history is empty");
            return ActionResult::Skipped;
        };

        if let Err(e) = self.surface.set_lines(id, &lines) {
            log::error!("Failed to replace scratch content: {e}");
            self.error_msg("Failed to show snapshot");
            return ActionResult::Failed;
        }

        ActionResult::Ok
    }

    /// Scratch surface handle, but only while it is the active surface.
    fn active_scratch(&self) -> Option<SurfaceId> {
        let active = self.surface.active()?;
        let scratch = self.scratch.surface()?;
        (active == scratch).then_some(active)
    }

    /// History, loading it from storage on first access.
    ///
    /// Unreadable storage degrades to an empty history. Malformed content
    /// is reported and leaves the history unloaded so the next operation
    /// retries the load.
    fn history_mut(&mut self) -> Option<&mut SnapshotHistory> {
        if self.history.is_none() {
            let snapshots = match self.store.read(HISTORY_KEY) {
                Ok(blob) => match decode(&blob) {
                    Ok(snapshots) => snapshots,
                    Err(e) => {
                        log::error!("Failed to parse snapshot history: {e}");
                        self.error_msg("Scratch history is corrupted");
                        return None;
                    }
                },
                Err(e) => {
                    log::warn!("Starting with empty snapshot history: {e}");
                    Vec::new()
                }
            };
            self.history = Some(SnapshotHistory::new(snapshots));
        }

        self.history.as_mut()
    }

    /// Write the in-memory history to storage. The in-memory state is kept
    /// even when the write fails.
    fn persist(&mut self) -> ActionResult {
        let Some(history) = self.history.as_ref() else {
            return ActionResult::Failed;
        };

        let blob = match encode(history) {
            Ok(blob) => blob,
            Err(e) => {
                log::error!("Failed to encode snapshot history: {e}");
                self.error_msg("Failed to save scratch history");
                return ActionResult::Failed;
            }
        };

        if let Err(e) = self.store.write(HISTORY_KEY, &blob) {
            log::error!("Failed to write snapshot history: {e}");
            self.error_msg("Failed to save scratch history");
            return ActionResult::Failed;
        }

        ActionResult::Ok
    }
}
