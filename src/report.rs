use std::fmt;

use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "[INFO]",
            Level::Success => "[SUCCESS]",
            Level::Warning => "[WARNING]",
            Level::Error => "[ERROR]",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Severity-levelled sink for progress and diagnostic messages.
pub trait Reporter {
    fn report(&mut self, level: Level, msg: &str);

    fn info(&mut self, msg: &str) {
        self.report(Level::Info, msg);
    }

    fn success(&mut self, msg: &str) {
        self.report(Level::Success, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.report(Level::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.report(Level::Error, msg);
    }
}

/// Terminal reporter. Info and success go to stdout, warnings and errors to stderr.
pub struct Console;

impl Reporter for Console {
    fn report(&mut self, level: Level, msg: &str) {
        match level {
            Level::Info => {
                let tag = level
                    .tag()
                    .if_supports_color(Stream::Stdout, |s| s.blue())
                    .to_string();
                println!("{} {}", tag, msg);
            }
            Level::Success => {
                let tag = level
                    .tag()
                    .if_supports_color(Stream::Stdout, |s| s.green())
                    .to_string();
                println!("{} {}", tag, msg);
            }
            Level::Warning => {
                let tag = level
                    .tag()
                    .if_supports_color(Stream::Stderr, |s| s.yellow())
                    .to_string();
                eprintln!("{} {}", tag, msg);
            }
            Level::Error => {
                let tag = level
                    .tag()
                    .if_supports_color(Stream::Stderr, |s| s.red())
                    .to_string();
                eprintln!("{} {}", tag, msg);
            }
        }
    }
}

/// Keeps every message in order so tests can assert on diagnostics.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub messages: Vec<(Level, String)>,
}

#[cfg(test)]
impl Recorder {
    pub fn at(&self, level: Level) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

#[cfg(test)]
impl Reporter for Recorder {
    fn report(&mut self, level: Level, msg: &str) {
        self.messages.push((level, msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_plain_text() {
        assert_eq!(Level::Info.tag(), "[INFO]");
        assert_eq!(Level::Success.tag(), "[SUCCESS]");
        assert_eq!(Level::Warning.to_string(), "[WARNING]");
        assert_eq!(Level::Error.to_string(), "[ERROR]");
    }

    #[test]
    fn convenience_methods_route_to_levels() {
        let mut rec = Recorder::default();
        rec.info("a");
        rec.success("b");
        rec.warning("c");
        rec.error("d");
        assert_eq!(
            rec.messages,
            vec![
                (Level::Info, "a".to_string()),
                (Level::Success, "b".to_string()),
                (Level::Warning, "c".to_string()),
                (Level::Error, "d".to_string()),
            ]
        );
        assert_eq!(rec.at(Level::Error), vec!["d"]);
    }
}
