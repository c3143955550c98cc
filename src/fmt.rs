//! Human readable output of command results.

/// Where command output is written to.
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Emit every line as a log record with the given level.
    Log(log::Level),
    StdOut,
    StdErr,
    /// Append every line to a file shared between outputs.
    #[cfg(feature = "log-to-file")]
    File(std::sync::Arc<parking_lot::Mutex<std::fs::File>>),
}

impl From<log::Level> for LogOutput {
    fn from(value: log::Level) -> Self {
        Self::Log(value)
    }
}

#[cfg(feature = "log-to-file")]
impl From<std::fs::File> for LogOutput {
    fn from(value: std::fs::File) -> Self {
        Self::File(std::sync::Arc::new(parking_lot::Mutex::new(value)))
    }
}

impl LogOutput {
    /// Write a single line of output.
    pub fn print(&self, line: &str) {
        match self {
            Self::Log(level) => log::log!(*level, "{line}"),
            Self::StdOut => println!("{line}"),
            Self::StdErr => eprintln!("{line}"),
            #[cfg(feature = "log-to-file")]
            Self::File(file) => {
                use std::io::Write;

                if let Err(e) = writeln!(file.lock(), "{line}") {
                    log::warn!("Failed to write output: {e}");
                }
            }
        }
    }
}

/// A single line of structured output: a label at some indentation depth,
/// optionally followed by a value.
#[derive(Debug, Clone, PartialEq)]
pub struct LogItem {
    depth: usize,
    label: String,
    value: Option<String>,
}

impl LogItem {
    pub fn new(depth: usize, label: impl Into<String>, value: Option<String>) -> Self {
        Self {
            depth,
            label: label.into(),
            value,
        }
    }
}

impl<L: ToString, V: ToString> From<(usize, L, V)> for LogItem {
    fn from((depth, label, value): (usize, L, V)) -> Self {
        Self::new(depth, label.to_string(), Some(value.to_string()))
    }
}

impl<L: ToString> From<(usize, L)> for LogItem {
    fn from((depth, label): (usize, L)) -> Self {
        Self::new(depth, label.to_string(), None)
    }
}

/// Something that can be printed as a list of [`LogItem`]s.
pub trait Loggable {
    fn as_log(&self) -> Vec<LogItem>;
}

pub struct Logger;

impl Logger {
    pub fn log<T>(output: &LogOutput, loggable: &T)
    where
        T: Loggable,
    {
        for line in Self::render(&loggable.as_log()) {
            output.print(&line);
        }
    }

    /// Lay out `items` as lines. The first item is a heading, the values of
    /// all following items start in the same column.
    pub fn render(items: &[LogItem]) -> Vec<String> {
        let Some((heading, items)) = items.split_first() else {
            return Vec::new();
        };

        let column = items.iter().map(|i| i.label.len() + 1).max().unwrap_or(0);

        let body = items.iter().map(|item| {
            let indent = item.depth * 2;
            let label = format!("{}:", item.label);

            match &item.value {
                Some(value) => format!("{:indent$}{label:<column$} {value}", ""),
                None => format!("{:indent$}{label}", ""),
            }
        });

        std::iter::once(heading.label.clone()).chain(body).collect()
    }
}

/// Build a `Vec<LogItem>` from `(depth, label)` and `(depth, label, value)`
/// tuples.
#[macro_export]
macro_rules! log_vec {
    [$(($depth:literal, $($part:expr),+)),* $(,)?] => {
        vec![$($crate::LogItem::from(($depth, $($part),+))),*]
    };
}

#[test]
fn values_share_a_column() {
    let items: Vec<LogItem> = log_vec![
        (0, "Heading"),
        (1, "Short", "a"),
        (1, "Much longer", 42),
        (2, "Nested"),
    ];

    assert_eq!(
        Logger::render(&items),
        vec![
            "Heading",
            "  Short:       a",
            "  Much longer: 42",
            "    Nested:",
        ]
    );
}

#[test]
fn nothing_to_render() {
    assert!(Logger::render(&[]).is_empty());
}
