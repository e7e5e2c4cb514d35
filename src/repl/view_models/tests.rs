//! ViewModel behaviour tests

use super::ViewModel;
use crate::config::CalcSettings;
use crate::repl::commands::CommandEvent;
use crate::repl::events::ViewEvent;
use crate::repl::models::INVALID_EXPRESSION_MESSAGE;

fn count(events: &[ViewEvent], wanted: &ViewEvent) -> usize {
    events.iter().filter(|event| *event == wanted).count()
}

#[test]
fn new_view_model_should_start_empty() {
    let view_model = ViewModel::new();
    assert_eq!(view_model.content(), "");
    assert!(view_model.notification().is_none());
}

#[test]
fn append_should_concatenate_tokens_and_update_display() {
    let mut view_model = ViewModel::new();
    view_model.append("1");
    view_model.append("2");
    view_model.append_function("+");
    view_model.append("3");

    assert_eq!(view_model.content(), "12+3");
    let events = view_model.collect_pending_view_events();
    assert_eq!(count(&events, &ViewEvent::DisplayUpdated), 4);
}

#[test]
fn delete_last_on_empty_buffer_should_not_redraw() {
    let mut view_model = ViewModel::new();
    view_model.delete_last();

    assert_eq!(view_model.content(), "");
    assert!(view_model.collect_pending_view_events().is_empty());
}

#[test]
fn clear_should_empty_any_buffer() {
    let mut view_model = ViewModel::new();
    view_model.append("(1+2)*");
    view_model.clear();
    assert_eq!(view_model.content(), "");

    view_model.clear();
    assert_eq!(view_model.content(), "");
}

#[test]
fn evaluate_should_replace_buffer_with_result() {
    let mut view_model = ViewModel::new();
    view_model.append("12+3");

    assert!(view_model.evaluate());
    assert_eq!(view_model.content(), "15");
    assert!(view_model.notification().is_none());
}

#[test]
fn evaluate_failure_should_keep_buffer_and_raise_one_alert() {
    let mut view_model = ViewModel::new();
    view_model.append("12+");
    view_model.collect_pending_view_events();

    assert!(!view_model.evaluate());
    assert_eq!(view_model.content(), "12+");

    let notification = view_model.notification().expect("alert should be pending");
    assert_eq!(notification.message(), INVALID_EXPRESSION_MESSAGE);

    let events = view_model.collect_pending_view_events();
    assert_eq!(events, vec![ViewEvent::NotificationRaised]);
}

#[test]
fn division_by_zero_should_raise_alert() {
    let mut view_model = ViewModel::new();
    view_model.append("5/0");

    assert!(!view_model.evaluate());
    assert_eq!(view_model.content(), "5/0");
    assert_eq!(
        view_model.notification().map(|n| n.detail()),
        Some("division by zero")
    );
}

#[test]
fn results_should_be_reusable_in_new_expressions() {
    let mut view_model = ViewModel::new();
    view_model.append("2-7");
    assert!(view_model.evaluate());
    assert_eq!(view_model.content(), "-5");

    view_model.append("+1");
    assert!(view_model.evaluate());
    assert_eq!(view_model.content(), "-4");
}

#[test]
fn function_tokens_should_fail_at_evaluation_not_at_append() {
    let mut view_model = ViewModel::new();
    view_model.append_function("sqrt(");
    view_model.append("9)");
    assert_eq!(view_model.content(), "sqrt(9)");

    assert!(!view_model.evaluate());
    assert_eq!(view_model.content(), "sqrt(9)");
}

#[test]
fn precision_setting_should_apply_to_results() {
    let mut view_model = ViewModel::with_settings(CalcSettings {
        precision: 3,
        bell: false,
    });
    view_model.append("2/3");
    assert!(view_model.evaluate());
    assert_eq!(view_model.content(), "0.667");
}

#[test]
fn dismiss_should_clear_alert_once() {
    let mut view_model = ViewModel::new();
    view_model.append("(");
    view_model.evaluate();
    view_model.collect_pending_view_events();

    view_model.dismiss_notification();
    view_model.dismiss_notification();

    assert!(view_model.notification().is_none());
    assert_eq!(
        view_model.collect_pending_view_events(),
        vec![ViewEvent::NotificationDismissed]
    );
    assert_eq!(view_model.content(), "(");
}

#[test]
fn apply_command_event_should_drive_operations() {
    let mut view_model = ViewModel::new();
    for event in [
        CommandEvent::append("7"),
        CommandEvent::append("+"),
        CommandEvent::append("3"),
        CommandEvent::EvaluateRequested,
    ] {
        view_model.apply_command_event(event);
    }
    assert_eq!(view_model.content(), "10");

    view_model.apply_command_event(CommandEvent::DeleteLastRequested);
    assert_eq!(view_model.content(), "1");

    view_model.apply_command_event(CommandEvent::ClearRequested);
    assert_eq!(view_model.content(), "");

    view_model.apply_command_event(CommandEvent::QuitRequested);
    assert_eq!(view_model.content(), "");
}

#[test]
fn request_redraw_should_queue_full_redraw() {
    let mut view_model = ViewModel::new();
    view_model.request_redraw();
    assert_eq!(
        view_model.collect_pending_view_events(),
        vec![ViewEvent::FullRedrawRequired]
    );
}
