use std::io::{self, Write};

/// Writes `Hello, {name}` to any writer: a buffer in tests, stdout or a
/// socket in real use.
pub fn greet<W: Write>(mut writer: W, name: &str) -> io::Result<()> {
    write!(writer, "Hello, {name}")
}
