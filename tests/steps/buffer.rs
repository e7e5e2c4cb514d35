//! Step definitions for direct buffer operations and assertions

use crate::common::world::CalcWorld;
use cucumber::{given, then, when};

#[given("an empty calculator")]
async fn given_empty_calculator(world: &mut CalcWorld) {
    assert_eq!(world.view_model.content(), "");
}

#[given(regex = r#"^the buffer contains "(.*)"$"#)]
async fn given_buffer_contains(world: &mut CalcWorld, text: String) {
    world.view_model.clear();
    world.view_model.append(&text);
    world.drain_view_events();
}

#[when(regex = r#"^I append "(.*)"$"#)]
async fn when_append(world: &mut CalcWorld, token: String) {
    world.view_model.append(&token);
    world.drain_view_events();
}

#[when(regex = r#"^I append the function token "(.*)"$"#)]
async fn when_append_function(world: &mut CalcWorld, token: String) {
    world.view_model.append_function(&token);
    world.drain_view_events();
}

#[when("I evaluate")]
async fn when_evaluate(world: &mut CalcWorld) {
    world.view_model.evaluate();
    world.drain_view_events();
}

#[when("I clear")]
async fn when_clear(world: &mut CalcWorld) {
    world.view_model.clear();
    world.drain_view_events();
}

#[when("I delete the last character")]
async fn when_delete_last(world: &mut CalcWorld) {
    world.view_model.delete_last();
    world.drain_view_events();
}

#[then(regex = r#"^the display shows "(.*)"$"#)]
async fn then_display_shows(world: &mut CalcWorld, expected: String) {
    assert_eq!(world.view_model.content(), expected);
}

#[then(regex = r"^(\d+) alerts? (?:has|have) been raised$")]
async fn then_alerts_raised(world: &mut CalcWorld, count: usize) {
    assert_eq!(world.alerts_raised, count);
}

#[then(regex = r#"^an? "(.*)" alert is pending$"#)]
async fn then_alert_pending(world: &mut CalcWorld, message: String) {
    let notification = world
        .view_model
        .notification()
        .expect("an alert should be pending");
    assert_eq!(notification.message(), message);
}

#[then("no alert is pending")]
async fn then_no_alert_pending(world: &mut CalcWorld) {
    assert!(world.view_model.notification().is_none());
}
