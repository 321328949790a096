use std::io;

/// a line source narrowed to `limit` lines after skipping `offset`
///
/// skipped lines are still read, one at a time, so an I/O error hit while
/// skipping is reported instead of silently dropped
pub struct Windowed<I> {
    inner: I,
    to_skip: usize,
    remaining: usize,
}

/// wrap `source` so it yields at most `limit` lines starting at `offset`
///
/// yields fewer lines, possibly none, when the source runs out first
pub fn window<I>(source: I, offset: usize, limit: usize) -> Windowed<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    Windowed {
        inner: source,
        to_skip: offset,
        remaining: limit,
    }
}

impl<I> Iterator for Windowed<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        while self.to_skip > 0 {
            self.to_skip -= 1;
            if let Err(e) = self.inner.next()? {
                self.remaining = 0;
                return Some(Err(e));
            }
        }

        let line = self.inner.next()?;
        self.remaining = if line.is_ok() { self.remaining - 1 } else { 0 };
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
