//! Sink for non-fatal warnings raised while updating a BoM.

use colored::Colorize;

/// Receives lookup misses so they can be shown or collected.
pub trait Diagnostics {
    /// No substitution exists for this value/footprint pair.
    fn unmatched(&mut self, value: &str, footprint: &str);
}

/// Prints warnings to stdout.
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn unmatched(&mut self, value: &str, footprint: &str) {
        println!(
            "{}{}",
            "No part number found for ".yellow(),
            format!("{},{}", value, footprint).yellow().bold()
        );
    }
}
