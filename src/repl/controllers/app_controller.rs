//! # Application Controller
//!
//! The controller orchestrates the calculator components and runs the event
//! loop: key events go through the command registry, the resulting command
//! events are applied to the view model, and queued view events are handed
//! to the renderer. Every event is processed to completion before the next
//! one is read.

use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    events::ViewEvent,
    io::{EventStream, RenderStream},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use crate::{cmd_args::CommandLineArgs, config};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEvent};
use std::time::Duration;

/// How long one poll waits for input before re-checking loop conditions
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams, loading
    /// settings from the profile named on the command line
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let profile_name = cmd_args.profile();
        let profile_path = config::get_profile_path();
        let settings = config::CalcSettings::load(profile_name, &profile_path)
            .with_context(|| format!("Failed to load profile '{profile_name}'"))?;

        Self::with_settings(settings, event_stream, render_stream)
    }

    /// Create a controller with explicit settings
    pub fn with_settings(
        settings: config::CalcSettings,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        Ok(Self {
            view_model: ViewModel::with_settings(settings),
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            should_quit: false,
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        let outcome = self.event_loop();
        // Restore the terminal even when the loop failed
        let cleanup = self.view_renderer.cleanup();
        outcome.and(cleanup)
    }

    fn event_loop(&mut self) -> Result<()> {
        self.view_renderer.render_full(&self.view_model)?;
        tracing::info!("Event loop started");

        while !self.should_quit && !self.event_stream.is_exhausted() {
            if !self.event_stream.poll(POLL_INTERVAL)? {
                continue;
            }

            match self.event_stream.read()? {
                Event::Key(key_event) => self.process_key_event(key_event)?,
                Event::Resize(width, height) => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                    self.view_renderer.update_size(width, height);
                    self.view_model.request_redraw();
                    self.render_pending_view_events()?;
                }
                _ => {}
            }
        }

        tracing::info!("Event loop finished");
        Ok(())
    }

    /// Route one key event, apply its effects and redraw what changed
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = self.command_registry.process_event(key_event, &context)?;

        for event in events {
            self.apply_command_event(event);
        }

        if !self.should_quit {
            self.render_pending_view_events()?;
        }
        Ok(())
    }

    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::QuitRequested => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            other => self.view_model.apply_command_event(other),
        }
    }

    fn render_pending_view_events(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();

        // A full redraw covers every other pending event
        if view_events.contains(&ViewEvent::FullRedrawRequired) {
            return self.view_renderer.render_full(&self.view_model);
        }

        for event in &view_events {
            self.view_renderer
                .handle_view_event(event, &self.view_model)?;
        }
        Ok(())
    }

    /// Read access to the view model
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn view_renderer(&self) -> &TerminalRenderer<RS> {
        &self.view_renderer
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
