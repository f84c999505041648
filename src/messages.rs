//! Console messages for the headless commands

use crate::export::ExportReceipt;
use std::path::Path;

// ANSI Color Codes for console messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Message types printed by headless commands
#[derive(Debug, Clone)]
pub enum ConsoleMessage {
    /// Progress and context messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl ConsoleMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        match self {
            Self::Info(msg) => {
                println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg);
            }
            Self::Success(msg) => {
                println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg);
            }
        }
    }
}

/// Print the export receipt: the multi-line summary, then where the file went.
pub fn print_export_receipt(receipt: &ExportReceipt) {
    for line in receipt.message.lines().filter(|l| !l.is_empty()) {
        ConsoleMessage::info(line).print();
    }
    match &receipt.written_to {
        Some(path) => {
            ConsoleMessage::success(format!("Export written to {}", path.display())).print()
        }
        None => ConsoleMessage::success("Export prepared (no output path given)").print(),
    }
}

/// Print where the configuration was written
pub fn print_config_saved(path: &Path) {
    ConsoleMessage::success(format!("Configuration saved to {}", path.display())).print();
}

/// Print dashboard exit message
pub fn print_dashboard_exit() {
    ConsoleMessage::success("VISTA dashboard closed").print();
}
