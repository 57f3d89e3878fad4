use std::io::{self, BufRead};

/// Source of input text. The returned reader owns the underlying handle,
/// which is released when it is dropped.
pub trait Storage {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead>>;
}
