use super::{Action, ActionResult};
use crate::session::Session;

pub(crate) const SAVE: Action = Action {
    name: "save",
    fun: save,
    desc: "Save the scratch buffer content into history",
};

pub(crate) const PREV: Action = Action {
    name: "prev",
    fun: prev,
    desc: "Show the previous (older) saved snapshot",
};

pub(crate) const NEXT: Action = Action {
    name: "next",
    fun: next,
    desc: "Show the next (newer) saved snapshot",
};

fn save(session: &mut Session) -> ActionResult {
    session.save()
}

fn prev(session: &mut Session) -> ActionResult {
    session.prev()
}

fn next(session: &mut Session) -> ActionResult {
    session.next()
}
