//! Non-fatal warning reporting for palette imports.

use log::warn;

/// Receives human-readable warnings emitted while importing a palette.
///
/// Decoders report recoverable conditions here (an unsupported color
/// model, a duplicated identifier) and continue processing. The interface
/// cannot fail, so a misbehaving sink can never abort a decode.
pub trait DiagnosticSink {
    /// Report one warning.
    fn warning(&mut self, message: &str);
}

/// Forwards warnings to the [`log`] facade at warn level.
///
/// The default sink for applications that already route `log` output.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn warning(&mut self, message: &str) {
        warn!("{message}");
    }
}

/// Collects warnings in emission order.
///
/// Used by tests and by callers that surface import warnings in their own
/// UI instead of a log stream.
impl DiagnosticSink for Vec<String> {
    fn warning(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}
