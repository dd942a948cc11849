use super::{Action, ActionResult};
use crate::session::Session;

pub(crate) const SWAP: Action = Action {
    name: "swap",
    fun: swap,
    desc: "Toggle between the scratch buffer and the previous buffer",
};

fn swap(session: &mut Session) -> ActionResult {
    session.swap()
}
