use core::fmt::{self, Write};

use heapless::String;

/// Writer that fills a bounded string and silently drops whatever does not
/// fit, like `snprintf` into a fixed buffer.
pub struct TruncatingWriter<'a, const N: usize> {
    buf: &'a mut String<N>,
}

impl<'a, const N: usize> TruncatingWriter<'a, N> {
    pub fn new(buf: &'a mut String<N>) -> Self {
        Self { buf }
    }
}

impl<const N: usize> Write for TruncatingWriter<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            // Stop at the first char that does not fit; never split UTF-8.
            if self.buf.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Replace the contents of `buf` with the formatted `args`, truncating at
/// capacity.
pub fn write_truncated<const N: usize>(buf: &mut String<N>, args: fmt::Arguments<'_>) {
    buf.clear();
    // The writer never reports an error.
    let _ = TruncatingWriter::new(buf).write_fmt(args);
}

/// Replace the contents of `buf` with `text`, truncating at capacity.
pub fn copy_truncated<const N: usize>(buf: &mut String<N>, text: &str) {
    write_truncated(buf, format_args!("{}", text));
}
