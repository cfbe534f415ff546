use std::fmt;

/// Catch-all error for tests: wraps any error type so `?` works in test bodies.
#[derive(Debug)]
pub struct TestError(pub Box<dyn std::error::Error + Send + Sync + 'static>);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<E: std::error::Error + Send + Sync + 'static> From<E> for TestError {
    fn from(err: E) -> Self {
        TestError(Box::new(err))
    }
}
