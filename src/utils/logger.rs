use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

/// Terminal logger. Coloring is fixed at construction; nothing here reads the environment.
#[derive(Debug, Clone)]
pub struct Logger {
    color: bool,
    stderr: bool,
}

impl Logger {
    pub fn new(color: bool) -> Self {
        Logger {
            color,
            stderr: false,
        }
    }

    /// A logger that writes to stderr, keeping stdout free for machine output.
    pub fn stderr(color: bool) -> Self {
        Logger {
            color,
            stderr: true,
        }
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        self.emit(&self.format_line(level, message));
    }

    pub fn log_message_with_trace(&self, level: LogLevel, message: &str, trace: Vec<&str>) {
        self.log_message(level, message);
        for t in trace {
            self.emit(&format!("     ↳ {}", t));
        }
    }

    fn emit(&self, line: &str) {
        if self.stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn format_line(&self, level: LogLevel, message: &str) -> String {
        format!(
            "{} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        )
    }

    fn tool_signature(&self) -> String {
        if !self.color {
            return "[addonbump]".to_string();
        }

        let mut s = String::new();
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push('[');
        let _ = write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 29,
                g: 211,
                b: 176,
            })
        );
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str("addonbump");
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);
        s
    }

    fn format_status(&self, level: LogLevel) -> String {
        let status = match level {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
        };
        if !self.color {
            return format!("[{}]", status);
        }

        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
        };

        let mut s = String::new();
        s.push('[');
        let _ = write!(&mut s, "{}", SetForegroundColor(color));
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str(status);
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);
        s
    }
}
