//! Callback wrapper front ends bind to their actions

use std::fmt;

use crate::{Error, Result};

/// Boxed action run by a [`Command`]
pub type Action<'a, T> = Box<dyn Fn() -> T + 'a>;

/// Boxed predicate deciding whether a [`Command`] may run
pub type Predicate<'a> = Box<dyn Fn() -> bool + 'a>;

/// An action plus an optional guard, e.g. a "Generate" button.
///
/// # Examples
/// ```
/// use sqlgen_core::{generate, Command, QueryRequest};
///
/// let request = QueryRequest::new("Users");
/// let command = Command::new(Some(|| generate("DELETE", &request)))
///     .unwrap()
///     .with_can_execute(|| !request.table.is_empty());
///
/// assert!(command.can_execute());
/// assert_eq!(command.execute(), "DELETE FROM Users;");
/// ```
pub struct Command<'a, T = ()> {
    execute: Action<'a, T>,
    can_execute: Option<Predicate<'a>>,
}

impl<'a, T> Command<'a, T> {
    /// Wrap an action; a missing action is rejected with [`Error::InvalidArgument`]
    pub fn new<F>(execute: Option<F>) -> Result<Self>
    where
        F: Fn() -> T + 'a,
    {
        let execute = execute.ok_or_else(|| Error::invalid_argument("execute"))?;
        Ok(Self {
            execute: Box::new(execute),
            can_execute: None,
        })
    }

    /// Attach a guard; without one the command can always run
    pub fn with_can_execute<P>(mut self, can_execute: P) -> Self
    where
        P: Fn() -> bool + 'a,
    {
        self.can_execute = Some(Box::new(can_execute));
        self
    }

    pub fn can_execute(&self) -> bool {
        self.can_execute.as_ref().map_or(true, |guard| guard())
    }

    /// Run the action. The guard is not consulted.
    pub fn execute(&self) -> T {
        (self.execute)()
    }
}

impl<T> fmt::Debug for Command<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("guarded", &self.can_execute.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_missing_action_is_rejected() {
        let result = Command::new(None::<fn()>);
        let err = result.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name } if name == "execute"));
    }

    #[test]
    fn test_unguarded_command_can_execute() {
        let command = Command::new(Some(|| 7)).unwrap();
        assert!(command.can_execute());
        assert_eq!(command.execute(), 7);
    }

    #[test]
    fn test_guard_is_evaluated_each_time() {
        let enabled = Cell::new(false);
        let command = Command::new(Some(|| ()))
            .unwrap()
            .with_can_execute(|| enabled.get());

        assert!(!command.can_execute());
        enabled.set(true);
        assert!(command.can_execute());
    }

    #[test]
    fn test_execute_ignores_guard() {
        let runs = Cell::new(0);
        let command = Command::new(Some(|| runs.set(runs.get() + 1)))
            .unwrap()
            .with_can_execute(|| false);

        command.execute();
        command.execute();
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_debug_output() {
        let command = Command::new(Some(|| ())).unwrap();
        assert_eq!(format!("{:?}", command), "Command { guarded: false }");
    }
}
