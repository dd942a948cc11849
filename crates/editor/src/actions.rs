pub(crate) mod history;
pub(crate) mod scratch;

use std::fmt;

use crate::session::Session;

/// Outcome of a single executed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    Ok,
    /// A guard rejected the operation, nothing was done.
    Skipped,
    Failed,
}

/// A named niladic operation the user can invoke on a session.
#[derive(Clone, Copy)]
pub struct Action {
    name: &'static str,
    fun: fn(&mut Session) -> ActionResult,
    desc: &'static str,
}

impl Action {
    pub fn execute(&self, session: &mut Session) -> ActionResult {
        (self.fun)(session)
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn description(&self) -> &str {
        self.desc
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Commands exposed to the user

#[rustfmt::skip]
pub const COMMANDS: &[Action] = &[
    scratch::SWAP,

    history::SAVE,
    history::PREV,
    history::NEXT,
];

pub fn find_by_name(name: &str) -> Option<Action> {
    COMMANDS.iter().find(|cmd| cmd.name() == name).copied()
}

/// Dispatch a user entered command name on `session`.
///
/// Unrecognized names are rejected with a visible error before any state
/// is touched.
pub fn run(session: &mut Session, name: &str) -> ActionResult {
    match find_by_name(name) {
        Some(action) => action.execute(session),
        None => {
            log::error!("Unknown command: {name}");
            session.error_msg(&format!("Unknown command: {name}"));
            ActionResult::Failed
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::session;

    #[test]
    fn all_commands_found_by_name() {
        for name in ["swap", "save", "prev", "next"] {
            let action = find_by_name(name).expect(name);
            assert_eq!(action.name(), name);
            assert!(!action.description().is_empty());
        }
        assert_eq!(COMMANDS.len(), 4);
    }

    #[test]
    fn unknown_command_is_rejected() {
        let (mut session, surface, store) = session();
        let doc = surface.open_document(&["doc"]);

        assert_eq!(run(&mut session, "sve"), ActionResult::Failed);
        let msg = session.take_message().unwrap();
        assert!(msg.message.contains("sve"));

        // Nothing happened: no surface change, no storage access
        assert_eq!(surface.active(), Some(doc));
        assert_eq!(store.reads(), 0);
    }

    #[test]
    fn known_command_reaches_the_session() {
        let (mut session, surface, _store) = session();
        surface.open_document(&["doc"]);

        assert_eq!(run(&mut session, "swap"), ActionResult::Ok);
        assert_eq!(surface.active(), surface.scratch());
    }
}
