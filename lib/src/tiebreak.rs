use rand::Rng;

/// Source of the random choices the move selector makes.
///
/// Every [`rand::Rng`] is a `TieBreak`, so callers normally pass a seeded
/// `StdRng` or `rand::rng()`. Tests can plug in a fixed implementation.
pub trait TieBreak {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            items.get(self.pick_index(items.len())).copied()
        }
    }
}

impl<R: Rng + ?Sized> TieBreak for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}
