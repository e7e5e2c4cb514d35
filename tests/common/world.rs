use anyhow::Result;
use crossterm::event::KeyEvent;
use cucumber::World;
use std::fmt;

use calcline::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    events::ViewEvent,
    view_models::ViewModel,
};

/// Scenario state: a real view model driven through the real key routing
#[derive(World)]
#[world(init = Self::new)]
pub struct CalcWorld {
    pub view_model: ViewModel,
    pub command_registry: CommandRegistry,
    /// Alerts raised since the scenario started
    pub alerts_raised: usize,
    /// Display refreshes requested since the scenario started
    pub display_updates: usize,
    pub quit_requested: bool,
}

impl fmt::Debug for CalcWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalcWorld")
            .field("view_model", &self.view_model)
            .field("alerts_raised", &self.alerts_raised)
            .field("display_updates", &self.display_updates)
            .field("quit_requested", &self.quit_requested)
            .finish()
    }
}

impl CalcWorld {
    pub fn new() -> Self {
        Self {
            view_model: ViewModel::new(),
            command_registry: CommandRegistry::new(),
            alerts_raised: 0,
            display_updates: 0,
            quit_requested: false,
        }
    }

    /// Route a key the way the application controller does
    pub fn press_key(&mut self, key_event: KeyEvent) -> Result<()> {
        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = self.command_registry.process_event(key_event, &context)?;

        for event in events {
            if event == CommandEvent::QuitRequested {
                self.quit_requested = true;
            } else {
                self.view_model.apply_command_event(event);
            }
        }

        self.drain_view_events();
        Ok(())
    }

    /// Count the view events produced by direct API calls or key presses
    pub fn drain_view_events(&mut self) {
        for event in self.view_model.collect_pending_view_events() {
            match event {
                ViewEvent::NotificationRaised => self.alerts_raised += 1,
                ViewEvent::DisplayUpdated => self.display_updates += 1,
                ViewEvent::FullRedrawRequired | ViewEvent::NotificationDismissed => {}
            }
        }
    }
}
