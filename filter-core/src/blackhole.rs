use std::hint::black_box;

/// Sink for benchmark results.
///
/// Every consumed value passes through [`black_box`] and is folded into
/// state the optimizer cannot see through, so the computation producing it
/// cannot be elided.
#[derive(Debug, Default)]
pub struct Blackhole {
    acc: u64,
    consumed: u64,
    last: Option<u64>,
}

impl Blackhole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a count.
    #[inline]
    pub fn consume(&mut self, count: u64) {
        let count = black_box(count);
        self.acc = black_box(self.acc ^ count);
        self.consumed += 1;
        self.last = Some(count);
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Most recently consumed value.
    pub fn last(&self) -> Option<u64> {
        self.last
    }
}
