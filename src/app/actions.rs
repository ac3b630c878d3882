//! Side effects requested by the event handler.
//!
//! The handler never prints or talks to the terminal itself. It returns
//! [`Action`]s and the front end executes them in order after the state
//! transition has already happened.

/// Commands for the front end to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Shows a transient notification.
    Notify {
        title: String,
        description: String,
    },

    /// Lists the template gallery.
    ShowTemplates,
}

impl Action {
    pub(crate) fn notify(title: &str, description: impl Into<String>) -> Self {
        Self::Notify {
            title: title.to_string(),
            description: description.into(),
        }
    }
}
