//! Per-call diagnostics.
//!
//! Tracing is switched on by handing a [`Tracer`] to the operation that
//! should explain itself. Nothing is global, so concurrent tests never see
//! each other's output.

/// Receives diagnostic lines from the continuation generator, the selection
/// engine and the players.
///
/// Callers check [`Tracer::enabled`] before formatting a message, so a
/// disabled tracer costs nothing beyond that call.
pub trait Tracer {
    fn enabled(&self) -> bool {
        false
    }

    fn trace(&mut self, _scope: &str, _message: &str) {}
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}

/// Keeps every line in memory as `DBG(scope): message`.
#[derive(Debug, Default, Clone)]
pub struct BufferTracer {
    pub lines: Vec<String>,
}

impl BufferTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted under `scope`, without the prefix.
    pub fn scoped<'a>(&'a self, scope: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let prefix = format!("DBG({scope}): ");
        self.lines
            .iter()
            .filter_map(move |line| line.strip_prefix(prefix.as_str()))
    }
}

impl Tracer for BufferTracer {
    fn enabled(&self) -> bool {
        true
    }

    fn trace(&mut self, scope: &str, message: &str) {
        self.lines.push(format!("DBG({scope}): {message}"));
    }
}

/// Prints `DBG(scope): message` to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrTracer;

impl Tracer for StderrTracer {
    fn enabled(&self) -> bool {
        true
    }

    fn trace(&mut self, scope: &str, message: &str) {
        eprintln!("DBG({scope}): {message}");
    }
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn trace(&mut self, scope: &str, message: &str) {
        (**self).trace(scope, message)
    }
}

impl<T: Tracer + ?Sized> Tracer for Box<T> {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn trace(&mut self, scope: &str, message: &str) {
        (**self).trace(scope, message)
    }
}
