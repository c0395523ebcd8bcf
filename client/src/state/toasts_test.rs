use super::*;

fn note(title: &str) -> Notification {
    Notification { title: title.to_owned(), description: None }
}

#[test]
fn push_appends_newest_last_with_fresh_ids() {
    let mut state = ToastState::default();
    let a = state.push(&note("Inquiry Saved"));
    let b = state.push(&Notification {
        title: "GRN Saved".to_owned(),
        description: Some("The goods receipt has been successfully recorded.".to_owned()),
    });
    assert_ne!(a, b);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].title, "GRN Saved");
    assert!(state.toasts[1].description.is_some());
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.push(&note("One"));
    let b = state.push(&note("Two"));
    assert!(state.dismiss(a));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    assert!(!state.dismiss(a));
}

#[test]
fn oldest_toasts_drop_past_limit() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.push(&note(&format!("Toast {i}")));
    }
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert_eq!(state.toasts[0].title, "Toast 2");
}

#[test]
fn ids_keep_increasing_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(&note("One"));
    state.dismiss(a);
    let b = state.push(&note("Two"));
    assert!(b > a);
}
