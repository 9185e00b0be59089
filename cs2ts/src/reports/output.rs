//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Terminal output implementation.
///
/// `convert` writes TypeScript to stdout, so its summary goes to stderr.
pub struct TerminalOutput {
    stream: Stream,
}

impl TerminalOutput {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    fn line(&self, text: &str) {
        match self.stream {
            Stream::Stdout => println!("{}", text),
            Stream::Stderr => eprintln!("{}", text),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        self.line(&format!("{}:", name));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.line(&format!("  {}: {}", key, value));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        self.line(text);
    }

    fn newline(&mut self) {
        self.line("");
    }
}
