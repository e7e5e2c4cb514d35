//! # Terminal Renderer
//!
//! Draws the calculator: a title, the boxed display, the alert line and a
//! key legend. The renderer only reads the view model.

use crate::repl::events::ViewEvent;
use crate::repl::io::RenderStream;
use crate::repl::view_models::ViewModel;
use anyhow::Result;

use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! execute_term {
    ($($arg:expr),* $(,)?) => {
        execute!($($arg),*).map_err(anyhow::Error::from)
    };
}

const TITLE_ROW: u16 = 0;
const DISPLAY_TOP_ROW: u16 = 2;
const DISPLAY_ROW: u16 = 3;
const DISPLAY_BOTTOM_ROW: u16 = 4;
const NOTIFICATION_ROW: u16 = 6;
const LEGEND_ROW: u16 = 8;

/// Widest the display field grows, in characters
const MAX_DISPLAY_WIDTH: usize = 40;

const TITLE: &str = " calcline ";
const LEGEND: &str = "0-9 + - * / ( ) .   Enter =   Backspace del   c clear   Esc quit";
const ACKNOWLEDGE_HINT: &str = "(press any key)";

/// Trait for rendering views
pub trait ViewRenderer {
    /// Initialize the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Redraw only the display field
    fn render_display(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Redraw only the alert line
    fn render_notification(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Handle view events
    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Cleanup terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Fit `content` into `width` characters, right-aligned.
///
/// Overlong content keeps its tail behind a leading ellipsis, since the end
/// of the expression is where typing happens.
pub fn fit_display(content: &str, width: usize) -> String {
    let length = content.chars().count();
    if length <= width {
        return format!("{content:>width$}");
    }
    if width == 0 {
        return String::new();
    }

    let tail: String = content.chars().skip(length - (width - 1)).collect();
    format!("…{tail}")
}

/// Terminal-based view renderer using crossterm
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer over the given stream, sized from it
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    /// Update terminal size
    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Get current terminal size
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Access the underlying stream (used by headless tests)
    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn display_width(&self) -> usize {
        (self.terminal_size.0 as usize)
            .saturating_sub(4)
            .clamp(1, MAX_DISPLAY_WIDTH)
    }

    fn render_title(&mut self) -> Result<()> {
        execute_term!(
            self.render_stream,
            MoveTo(0, TITLE_ROW),
            SetAttribute(Attribute::Reverse),
            Print(TITLE),
            SetAttribute(Attribute::Reset)
        )
    }

    fn render_frame(&mut self) -> Result<()> {
        let rule = "─".repeat(self.display_width() + 2);
        execute_term!(
            self.render_stream,
            MoveTo(0, DISPLAY_TOP_ROW),
            Print(format!("┌{rule}┐")),
            MoveTo(0, DISPLAY_BOTTOM_ROW),
            Print(format!("└{rule}┘"))
        )
    }

    fn render_legend(&mut self) -> Result<()> {
        execute_term!(
            self.render_stream,
            MoveTo(0, LEGEND_ROW),
            SetAttribute(Attribute::Dim),
            Print(LEGEND),
            SetAttribute(Attribute::Reset)
        )
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.begin_session()
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.clear_screen()?;
        self.render_title()?;
        self.render_frame()?;
        self.render_display(view_model)?;
        self.render_notification(view_model)?;
        self.render_legend()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_display(&mut self, view_model: &ViewModel) -> Result<()> {
        let text = fit_display(view_model.content(), self.display_width());
        execute_term!(
            self.render_stream,
            MoveTo(0, DISPLAY_ROW),
            Clear(ClearType::CurrentLine),
            Print(format!("│ {text} │"))
        )?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_notification(&mut self, view_model: &ViewModel) -> Result<()> {
        execute_term!(
            self.render_stream,
            MoveTo(0, NOTIFICATION_ROW),
            Clear(ClearType::CurrentLine)
        )?;

        if let Some(notification) = view_model.notification() {
            execute_term!(
                self.render_stream,
                SetForegroundColor(Color::Red),
                SetAttribute(Attribute::Bold),
                Print(notification.message()),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print(format!(": {} {ACKNOWLEDGE_HINT}", notification.detail()))
            )?;
        }

        self.render_stream.flush()?;
        Ok(())
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => self.render_full(view_model),
            ViewEvent::DisplayUpdated => self.render_display(view_model),
            ViewEvent::NotificationRaised => {
                if view_model.settings().bell {
                    execute_term!(self.render_stream, Print('\u{7}'))?;
                }
                self.render_notification(view_model)
            }
            ViewEvent::NotificationDismissed => self.render_notification(view_model),
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.end_session()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalcSettings;
    use crate::repl::io::MockRenderStream;

    fn renderer() -> TerminalRenderer<MockRenderStream> {
        TerminalRenderer::with_render_stream(MockRenderStream::with_size((30, 12))).unwrap()
    }

    #[test]
    fn fit_display_should_right_align_short_content() {
        assert_eq!(fit_display("15", 5), "   15");
        assert_eq!(fit_display("", 3), "   ");
    }

    #[test]
    fn fit_display_should_keep_tail_of_long_content() {
        assert_eq!(fit_display("123456789", 5), "…6789");
    }

    #[test]
    fn fit_display_should_handle_zero_width() {
        assert_eq!(fit_display("123", 0), "");
    }

    #[test]
    fn renderer_should_take_size_from_stream() {
        assert_eq!(renderer().terminal_size(), (30, 12));
    }

    #[test]
    fn render_display_should_write_content() {
        let mut renderer = renderer();
        let mut view_model = ViewModel::new();
        view_model.append("12+3");

        renderer.render_display(&view_model).unwrap();
        assert!(renderer.render_stream().output().contains(" 12+3 │"));
    }

    #[test]
    fn render_full_should_show_alert_and_legend() {
        let mut renderer = renderer();
        let mut view_model = ViewModel::new();
        view_model.append("12+");
        view_model.evaluate();

        renderer.render_full(&view_model).unwrap();
        let output = renderer.render_stream().output();
        assert!(output.contains("Invalid Expression"));
        assert!(output.contains(ACKNOWLEDGE_HINT));
        assert!(output.contains("Esc quit"));
        assert!(output.contains(" 12+ │"));
    }

    #[test]
    fn alert_should_show_evaluation_reason() {
        let mut renderer = renderer();
        let mut view_model = ViewModel::new();
        view_model.append("5/0");
        view_model.evaluate();

        renderer.render_notification(&view_model).unwrap();
        let output = renderer.render_stream().output();
        assert!(output.contains("Invalid Expression"));
        assert!(output.contains(": division by zero (press any key)"));
    }

    #[test]
    fn dismissed_alert_should_leave_row_blank() {
        let mut renderer = renderer();
        let mut view_model = ViewModel::new();
        view_model.append("5/0");
        view_model.evaluate();
        view_model.dismiss_notification();

        renderer.render_notification(&view_model).unwrap();
        assert!(!renderer.render_stream().output().contains("division by zero"));
    }

    #[test]
    fn bell_should_ring_only_when_enabled() {
        let mut quiet = renderer();
        let mut view_model = ViewModel::new();
        view_model.append(")");
        view_model.evaluate();
        quiet
            .handle_view_event(&ViewEvent::NotificationRaised, &view_model)
            .unwrap();
        assert!(!quiet.render_stream().output().contains('\u{7}'));

        let mut loud = renderer();
        let mut ringing = ViewModel::with_settings(CalcSettings {
            precision: 10,
            bell: true,
        });
        ringing.append(")");
        ringing.evaluate();
        loud.handle_view_event(&ViewEvent::NotificationRaised, &ringing)
            .unwrap();
        assert!(loud.render_stream().output().contains('\u{7}'));
    }

    #[test]
    fn initialize_and_cleanup_should_toggle_terminal_modes() {
        let mut renderer = renderer();
        renderer.initialize().unwrap();
        assert!(renderer.render_stream().in_session());

        renderer.cleanup().unwrap();
        assert!(!renderer.render_stream().in_session());
        assert_eq!(renderer.render_stream().sessions_started(), 1);
    }
}
