use std::io::{self, Write};

use crate::config::{Config, Messages, Theme};
use crate::install::buffer::LineBuffer;
use crate::install::extract::extract_dependencies;
use crate::install::listing::Dependencies;
use crate::install::progress::{build_bar_texts, calculate_state, ProgressBarState};

/// Position of the install task inside a larger numbered workflow.
///
/// With `total == 0` messages carry no step prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steps {
    pub index: usize,
    pub total: usize,
}

impl Steps {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// Prefix such as `"5/6. "` for the step `increment` past `index`.
    pub fn label(&self, increment: usize) -> String {
        if self.total == 0 {
            return String::new();
        }
        format!("{}/{}. ", self.index + increment, self.total)
    }
}

/// Everything the install task needs to know about how to present itself.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Package whose postinstall runs last
    pub app_module: String,
    pub bar_length: usize,
    pub theme: Theme,
    pub messages: Messages,
    pub steps: Steps,
}

impl InstallOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            app_module: config.app_module.clone(),
            bar_length: config.bar_length,
            theme: Theme::from(&config.styles),
            messages: config.messages.clone(),
            steps: Steps::default(),
        }
    }

    pub fn with_steps(mut self, steps: Steps) -> Self {
        self.steps = steps;
        self
    }
}

/// Follows an installer's diagnostic stream and keeps the progress bar in
/// step with the dependencies whose postinstall has run.
///
/// Each chunk passed to [`InstallTracker::feed`] is one data event; all state
/// changes and terminal writes happen inside that call.
#[derive(Debug)]
pub struct InstallTracker<'a> {
    options: &'a InstallOptions,
    expected: &'a Dependencies,
    finished: Dependencies,
    buffer: LineBuffer,
    state: ProgressBarState,
    post_install_seen: bool,
    output: Vec<u8>,
}

impl<'a> InstallTracker<'a> {
    pub fn new(options: &'a InstallOptions, expected: &'a Dependencies) -> Self {
        Self {
            options,
            expected,
            finished: Dependencies::new(),
            buffer: LineBuffer::new(),
            state: ProgressBarState::default(),
            post_install_seen: false,
            output: Vec::new(),
        }
    }

    /// Whether a bar is drawn at all; it is not when nothing is expected.
    pub fn shows_bar(&self) -> bool {
        !self.expected.is_empty()
    }

    /// Prints the install message followed by an empty bar, leaving the
    /// cursor on the same line.
    pub fn start<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let theme = &self.options.theme;
        let message =
            format!("{}{}", self.options.steps.label(1), self.options.messages.install);

        if self.shows_bar() {
            let texts = build_bar_texts(self.options.bar_length, 0);
            write!(
                out,
                "{}{}",
                theme.text.apply_to(format!("{message} ")),
                theme.bar.apply_to(texts.empty)
            )?;
        } else {
            writeln!(out, "{}", theme.text.apply_to(message))?;
        }
        out.flush()
    }

    /// Handles one chunk of the diagnostic stream.
    pub fn feed<W: Write>(&mut self, chunk: &[u8], out: &mut W) -> io::Result<()> {
        self.output.extend_from_slice(chunk);

        match self.buffer.append_bytes(chunk) {
            Some(lines) => self.process_lines(&lines, out),
            None => Ok(()),
        }
    }

    /// Flushes a trailing line left without a newline and ends the bar line.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if let Some(line) = self.buffer.finish() {
            self.process_lines(&[line], out)?;
        }
        if self.shows_bar() && !self.post_install_seen {
            writeln!(out)?;
        }
        out.flush()
    }

    fn process_lines<W: Write>(&mut self, lines: &[String], out: &mut W) -> io::Result<()> {
        let found = extract_dependencies(lines);
        if found.is_empty() {
            return Ok(());
        }
        log::trace!("Postinstall finished for {found:?}");

        let before = self.finished.len();
        for name in &found {
            if self.expected.contains(name) && !self.finished.contains(name) {
                self.finished.insert(name.clone());
            }
        }

        if self.shows_bar() && self.finished.len() > before {
            self.state = calculate_state(
                self.options.bar_length,
                self.state.done,
                self.finished.len(),
                self.expected.len(),
            );
        }

        if self.state.redraw {
            self.redraw(out)?;
        }

        if !self.post_install_seen && found.iter().any(|name| *name == self.options.app_module)
        {
            self.post_install_seen = true;
            let theme = &self.options.theme;
            write!(
                out,
                "{}",
                theme.text.apply_to(format!(
                    "\n{}{}\n",
                    self.options.steps.label(2),
                    self.options.messages.post_install
                ))
            )?;
        }
        out.flush()
    }

    fn redraw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let theme = &self.options.theme;
        let texts = build_bar_texts(self.options.bar_length, self.state.done);
        write!(
            out,
            "{}{}{}",
            texts.erase,
            theme.processed.apply_to(texts.filled),
            theme.bar.apply_to(texts.empty)
        )?;
        self.state.redraw = false;
        Ok(())
    }

    /// Dependencies confirmed complete so far, in completion order.
    pub fn finished(&self) -> &Dependencies {
        &self.finished
    }

    pub fn state(&self) -> ProgressBarState {
        self.state
    }

    pub fn post_install_seen(&self) -> bool {
        self.post_install_seen
    }

    /// Everything received on the stream, for error reporting.
    pub fn into_output(self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}
