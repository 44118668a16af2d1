use super::*;
use crate::fakes::FakeDialogs;

#[test]
fn default_prompt_when_message_missing() {
    let dialogs = FakeDialogs::answering(true);
    assert!(confirm_delete(&dialogs, None));
    assert_eq!(dialogs.confirms.borrow().as_slice(), ["Вы уверены, что хотите удалить это?"]);
}

#[test]
fn empty_message_uses_default_prompt() {
    assert_eq!(delete_prompt(Some("")), DEFAULT_DELETE_PROMPT);
}

#[test]
fn custom_message_is_passed_through_and_answer_returned() {
    let dialogs = FakeDialogs::answering(false);
    assert!(!confirm_delete(&dialogs, Some("Удалить тему?")));
    assert_eq!(dialogs.confirms.borrow().as_slice(), ["Удалить тему?"]);
    assert!(dialogs.alerts.borrow().is_empty());
}
