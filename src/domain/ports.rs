/// Output channels for promise handlers. The sink belongs to the caller;
/// the core only writes to it. Emitting a line never suspends, so the
/// methods are plain functions rather than futures.
pub trait LogSink: Send + Sync {
    /// Resolved values land here (stdout channel).
    fn log_value(&self, value: &str);

    /// Formatted rejection messages land here (stderr channel).
    fn log_error(&self, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn log_value(&self, value: &str) {
        (**self).log_value(value);
    }

    fn log_error(&self, message: &str) {
        (**self).log_error(message);
    }
}
