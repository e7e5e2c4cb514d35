//! Step definitions for key presses

use crate::common::world::CalcWorld;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cucumber::{then, when};
use tracing::info;

#[when(regex = r#"^I type "(.*)"$"#)]
async fn when_type(world: &mut CalcWorld, text: String) {
    info!("Typing: {}", text);
    for ch in text.chars() {
        world
            .press_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
            .expect("key routing failed");
    }
}

#[when(regex = r"^I press (Enter|Backspace|Esc|Ctrl\+C)$")]
async fn when_press(world: &mut CalcWorld, key: String) {
    let event = match key.as_str() {
        "Enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        "Backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        "Esc" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
        "Ctrl+C" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        other => panic!("unsupported key {other}"),
    };
    world.press_key(event).expect("key routing failed");
}

#[when(regex = r"^I press Backspace (\d+) times$")]
async fn when_press_backspace_times(world: &mut CalcWorld, count: usize) {
    for _ in 0..count {
        world
            .press_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE))
            .expect("key routing failed");
    }
}

#[then("the calculator quits")]
async fn then_quits(world: &mut CalcWorld) {
    assert!(world.quit_requested);
}

#[then("the calculator keeps running")]
async fn then_keeps_running(world: &mut CalcWorld) {
    assert!(!world.quit_requested);
}
