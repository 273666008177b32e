//! Line commands for the native driver.

use std::fmt::Write;
use std::str::FromStr;
use std::time::Duration;

use folio_dom::{Document, Region};
use thiserror::Error;

use crate::controller::DesktopView;
use crate::headless::Headless;
use crate::message::Message;
use crate::overlay::OverlayPhase;

/// Viewport width the driver starts with.
pub const DEFAULT_WIDTH: f64 = 1280.0;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  list            show the project list
  select <id>     click a project
  reset           click the desktop close button
  close           click the overlay close button
  resize <px>     change the viewport width
  frame           run one animation frame
  wait <ms>       advance time
  show            print view state and visible markup
  help            this text
  quit            exit";

/// A parsed driver command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Print the list with the active marking
    List,
    /// Activate the entry for a project id
    Select(u32),
    /// Activate the desktop close affordance
    Reset,
    /// Activate the overlay close control
    Close,
    /// Resize the viewport to this width
    Resize(f64),
    /// Deliver pending animation frames
    Frame,
    /// Advance virtual time by milliseconds
    Wait(u64),
    /// Print state and the visible markup
    Show,
    /// Print the command list
    Help,
    /// Leave the driver
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// First word is not a command
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    /// Command requires an argument that was not given
    #[error("'{command}' needs an argument")]
    MissingArgument { command: &'static str },

    /// Argument did not parse as a number
    #[error("Invalid number '{value}'")]
    InvalidNumber { value: String },
}

fn argument<T: FromStr>(
    command: &'static str,
    value: Option<&str>,
) -> Result<T, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument { command })?;
    value.parse().map_err(|_| CommandError::InvalidNumber {
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or("");
        let arg = words.next();

        match name {
            "list" | "ls" => Ok(Command::List),
            "select" => Ok(Command::Select(argument("select", arg)?)),
            "reset" | "home" => Ok(Command::Reset),
            "close" => Ok(Command::Close),
            "resize" => Ok(Command::Resize(argument("resize", arg)?)),
            "frame" => Ok(Command::Frame),
            "wait" => Ok(Command::Wait(argument("wait", arg)?)),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Run a command against the host and describe the result.
pub fn execute(host: &mut Headless, command: Command) -> String {
    match command {
        Command::List => list(host),
        Command::Select(id) => {
            host.send(Message::SelectProject(id));
            state(host)
        }
        Command::Reset => {
            host.send(Message::ResetToHome);
            state(host)
        }
        Command::Close => {
            host.send(Message::CloseOverlay);
            state(host)
        }
        Command::Resize(width) => {
            host.resize(width);
            state(host)
        }
        Command::Frame => {
            host.frame();
            state(host)
        }
        Command::Wait(ms) => {
            host.wait(Duration::from_millis(ms));
            state(host)
        }
        Command::Show => {
            let mut out = state(host);
            let region = if host.controller.overlay_phase() == OverlayPhase::Closed {
                Region::Display
            } else {
                Region::OverlayContent
            };
            let _ = write!(out, "\n{}", host.doc.inner_html(region));
            out
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

fn list(host: &Headless) -> String {
    let mut out = String::new();
    for (entry, project) in host.doc.entries().iter().zip(host.controller.catalog().iter()) {
        let marker = if entry.active { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:>3}  {}  [{}] ({} media, {} video)",
            marker,
            entry.id,
            entry.label,
            project.tags.join(", "),
            project.media.len(),
            project.video_count()
        );
    }
    out.trim_end().to_string()
}

fn state(host: &Headless) -> String {
    let selected = match host.controller.active_project() {
        Some(project) => format!("{} ({})", project.id, project.title),
        None => "none".to_string(),
    };
    let desktop = match host.controller.desktop_view() {
        DesktopView::Welcome => "welcome".to_string(),
        DesktopView::Project(id) => format!("project {}", id),
    };
    format!(
        "t={:?} width={} selected={} desktop={} overlay={:?} scroll_locked={} pending={}",
        host.now(),
        host.doc.viewport_width(),
        selected,
        desktop,
        host.controller.overlay_phase(),
        host.doc.is_scroll_locked(),
        host.pending()
    )
}
