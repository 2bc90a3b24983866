/// Formatter adapters that render lookup data as console text
mod console_formatter;

pub use console_formatter::ConsoleFormatter;
