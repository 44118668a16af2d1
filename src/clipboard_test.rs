use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct FakePage {
    refuse_copy: bool,
    refuse_insert: bool,
    fields: RefCell<Vec<String>>,
    copied: RefCell<Vec<String>>,
}

impl LegacyCopy for FakePage {
    type Field = usize;

    fn insert_field(&self, text: &str) -> Result<usize, GlueError> {
        if self.refuse_insert {
            return Err(GlueError::NoBody);
        }
        let mut fields = self.fields.borrow_mut();
        fields.push(text.to_owned());
        Ok(fields.len() - 1)
    }

    fn copy_selection(&self, field: &usize) -> Result<(), GlueError> {
        if self.refuse_copy {
            return Err(GlueError::Dom("copy command rejected".to_owned()));
        }
        let text = self.fields.borrow()[*field].clone();
        self.copied.borrow_mut().push(text);
        Ok(())
    }

    fn remove_field(&self, field: usize) {
        self.fields.borrow_mut().remove(field);
    }
}

/// Resolves every write immediately with a fixed answer.
struct FakeClipboard {
    accept: bool,
    written: RefCell<Vec<String>>,
}

impl AsyncCopy for FakeClipboard {
    fn write_text(&self, text: &str, on_done: Box<dyn FnOnce(CopyOutcome)>) {
        self.written.borrow_mut().push(text.to_owned());
        if self.accept {
            on_done(CopyOutcome::Copied);
        } else {
            on_done(CopyOutcome::Failed("NotAllowedError".to_owned()));
        }
    }
}

fn run_copy(clipboard: Option<&FakeClipboard>, page: &FakePage, text: &str) -> Vec<CopyOutcome> {
    let outcomes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outcomes);
    copy_text(clipboard, page, text, Box::new(move |outcome| sink.borrow_mut().push(outcome)));
    outcomes.borrow().clone()
}

fn collect_toasts(outcome: &CopyOutcome, notify_failure: bool) -> Vec<(String, ToastKind)> {
    let mut toasts = Vec::new();
    report_outcome(outcome, notify_failure, |msg, kind| toasts.push((msg.to_owned(), kind)));
    toasts
}

#[test]
fn fallback_copies_and_cleans_up() {
    let page = FakePage::default();
    assert_eq!(copy_with_fallback(&page, "abc"), CopyOutcome::Copied);
    assert_eq!(page.copied.borrow().as_slice(), ["abc"]);
    assert!(page.fields.borrow().is_empty());
}

#[test]
fn fallback_removes_field_even_when_copy_fails() {
    let page = FakePage { refuse_copy: true, ..FakePage::default() };
    let outcome = copy_with_fallback(&page, "abc");
    assert!(matches!(outcome, CopyOutcome::Failed(ref reason) if reason.contains("rejected")));
    assert!(page.fields.borrow().is_empty());
}

#[test]
fn fallback_reports_failure_when_field_cannot_be_attached() {
    let page = FakePage { refuse_insert: true, ..FakePage::default() };
    assert!(matches!(copy_with_fallback(&page, "abc"), CopyOutcome::Failed(_)));
    assert!(page.copied.borrow().is_empty());
}

#[test]
fn success_shows_exactly_one_toast() {
    let toasts = collect_toasts(&CopyOutcome::Copied, false);
    assert_eq!(toasts, vec![("Скопировано в буфер обмена".to_owned(), ToastKind::Success)]);
}

#[test]
fn failure_is_silent_by_default() {
    assert!(collect_toasts(&CopyOutcome::Failed("denied".to_owned()), false).is_empty());
}

#[test]
fn failure_toast_when_configured() {
    let toasts = collect_toasts(&CopyOutcome::Failed("denied".to_owned()), true);
    assert_eq!(toasts, vec![("Ошибка копирования".to_owned(), ToastKind::Danger)]);
}

#[test]
fn async_api_copies_without_touching_the_page() {
    let clipboard = FakeClipboard { accept: true, written: RefCell::new(Vec::new()) };
    let page = FakePage { refuse_insert: true, ..FakePage::default() };

    let outcomes = run_copy(Some(&clipboard), &page, "abc");

    assert_eq!(outcomes, vec![CopyOutcome::Copied]);
    assert_eq!(clipboard.written.borrow().as_slice(), ["abc"]);
    assert!(page.fields.borrow().is_empty());
    assert!(page.copied.borrow().is_empty());

    let toasts: Vec<_> = outcomes.iter().flat_map(|outcome| collect_toasts(outcome, false)).collect();
    assert_eq!(toasts, vec![("Скопировано в буфер обмена".to_owned(), ToastKind::Success)]);
}

#[test]
fn async_failure_does_not_fall_back() {
    let clipboard = FakeClipboard { accept: false, written: RefCell::new(Vec::new()) };
    let page = FakePage::default();

    let outcomes = run_copy(Some(&clipboard), &page, "abc");

    assert!(matches!(outcomes.as_slice(), [CopyOutcome::Failed(reason)] if reason == "NotAllowedError"));
    assert!(page.copied.borrow().is_empty());
}

#[test]
fn missing_async_api_uses_the_hidden_field_once() {
    let page = FakePage::default();

    let outcomes = run_copy(None, &page, "abc");

    assert_eq!(outcomes, vec![CopyOutcome::Copied]);
    assert_eq!(page.copied.borrow().as_slice(), ["abc"]);
    assert!(page.fields.borrow().is_empty());
}
