use super::*;

fn filled(username: &str, new_room: &str, existing_room: &str) -> RoomForm {
    RoomForm {
        username: Some(username.to_owned()),
        new_room_name: Some(new_room.to_owned()),
        existing_room_name: Some(existing_room.to_owned()),
    }
}

// =============================================================
// submit_notice
// =============================================================

#[test]
fn clean_create_submit_shows_the_acknowledgment() {
    let errors = validate(&filled("bob", "sprint-42", ""), SubmitAction::CreateRoom);
    assert!(!errors.any());
    assert_eq!(submit_notice(errors), Some("no errors"));
}

#[test]
fn clean_join_submit_shows_the_acknowledgment() {
    let errors = validate(&filled("bob", "", "sprint-42"), SubmitAction::JoinRoom);
    assert_eq!(submit_notice(errors), Some("no errors"));
}

#[test]
fn first_all_empty_submit_shows_no_acknowledgment() {
    // A submit that just set flags must not also claim success: the
    // decision reads this attempt's flags, not a stale snapshot.
    let errors = validate(&RoomForm::default(), SubmitAction::CreateRoom);
    assert!(errors.any());
    assert_eq!(submit_notice(errors), None);
}

#[test]
fn any_flagged_field_suppresses_the_acknowledgment() {
    let errors = FormErrors { username: true, ..FormErrors::default() };
    assert_eq!(submit_notice(errors), None);
    let errors = FormErrors { existing_room_name: true, ..FormErrors::default() };
    assert_eq!(submit_notice(errors), None);
}
