//! Coloured status lines on stderr

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes user-facing notices to stderr so stdout carries only the map.
pub struct Console {
    stderr: StandardStream,
}

impl Console {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stderr: StandardStream::stderr(choice),
        }
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.line(message, ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.line(message, ColorSpec::new().set_fg(Some(Color::Yellow)))
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        self.line(message, ColorSpec::new().set_fg(Some(Color::Green)))
    }

    fn line(&mut self, message: &str, spec: &ColorSpec) -> io::Result<()> {
        self.stderr.set_color(spec)?;
        write!(self.stderr, "{}", message)?;
        self.stderr.reset()?;
        writeln!(self.stderr)?;
        self.stderr.flush()
    }
}
