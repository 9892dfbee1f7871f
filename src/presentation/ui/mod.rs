pub mod console_reporter;

pub use console_reporter::ConsoleReporter;
