//! The working selection held while a picker is open.

/// Single-select working state, seeded from the caller's current selection.
///
/// Terminal actions consume the session, so confirm and cancel can each
/// happen at most once:
///
/// ```compile_fail
/// use lazer_typeahead::SelectionSession;
///
/// let session = SelectionSession::initialize(Some("2".to_string()));
/// session.confirm();
/// session.confirm();
/// ```
///
/// The session cannot be copied to get around that either:
///
/// ```compile_fail
/// use lazer_typeahead::SelectionSession;
///
/// let session = SelectionSession::initialize(None);
/// let _copy = session.clone();
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct SelectionSession {
    working_value: Option<String>,
}

impl SelectionSession {
    /// Start a session from the caller's current selection.
    ///
    /// The value does not need to be visible in, or even part of, the
    /// current item list; filtering never clears it.
    pub fn initialize(selected_item: Option<String>) -> Self {
        Self {
            working_value: selected_item,
        }
    }

    /// Apply a row checkbox change.
    ///
    /// Checking a row makes it the selection. Unchecking is ignored: the
    /// only way to move off a row is to check another one.
    pub fn set_checked(&mut self, value: impl Into<String>, checked: bool) {
        if checked {
            self.working_value = Some(value.into());
        }
    }

    /// Whether a row should render as checked.
    pub fn is_selected(&self, value: Option<&str>) -> bool {
        self.working_value.as_deref() == value
    }

    /// Current working value.
    pub fn working_value(&self) -> Option<&str> {
        self.working_value.as_deref()
    }

    /// End the session, handing back the working value unchanged.
    pub fn confirm(self) -> Option<String> {
        self.working_value
    }

    /// End the session, discarding the working value.
    pub fn cancel(self) {}
}
