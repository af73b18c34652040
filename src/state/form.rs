//! Home-form state: field values, per-field error flags, validation.
//!
//! DESIGN
//! ======
//! Values are stored verbatim on every keystroke; trimming happens only
//! at validation time. Validation is a pure function from a form
//! snapshot to a fresh set of flags, so submit semantics are testable
//! without a browser.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Raw values of the three home-form fields.
///
/// Fields are optional free text. An absent value and an empty string
/// are distinct states (see [`is_blank`]); the defaults are empty
/// strings, matching untouched inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomForm {
    /// Display name the user wants to carry into a room.
    pub username: Option<String>,
    /// Name for a room to be created.
    pub new_room_name: Option<String>,
    /// Name/code of an existing room to join.
    pub existing_room_name: Option<String>,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self {
            username: Some(String::new()),
            new_room_name: Some(String::new()),
            existing_room_name: Some(String::new()),
        }
    }
}

/// Per-field flags marking "this field was empty at the last submit
/// attempt". A set flag only toggles an error highlight on the matching
/// input; there are no error messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub username: bool,
    pub new_room_name: bool,
    pub existing_room_name: bool,
}

impl FormErrors {
    /// True if any field failed the last submit's emptiness check.
    pub fn any(self) -> bool {
        self.username || self.new_room_name || self.existing_room_name
    }
}

/// Which room field a submit validates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Validate the new-room name field.
    CreateRoom,
    /// Validate the existing-room code field.
    JoinRoom,
}

/// A value is blank when it is present but trims to nothing.
///
/// An absent value is NOT blank: the check is about what the user
/// typed, and an absent field was never typed into.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().is_empty())
}

/// Validate one submit attempt, starting from all-clear flags.
///
/// The username is always checked. Exactly one of the two room fields
/// is checked, selected by `action`; the other never affects the
/// result.
pub fn validate(form: &RoomForm, action: SubmitAction) -> FormErrors {
    let mut errors = FormErrors::default();
    if is_blank(form.username.as_deref()) {
        errors.username = true;
    }
    match action {
        SubmitAction::CreateRoom => {
            if is_blank(form.new_room_name.as_deref()) {
                errors.new_room_name = true;
            }
        }
        SubmitAction::JoinRoom => {
            if is_blank(form.existing_room_name.as_deref()) {
                errors.existing_room_name = true;
            }
        }
    }
    errors
}
