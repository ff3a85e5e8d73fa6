/// Restartable traversal over whatever `iter_fn` produces.
///
/// Every pass calls `iter_fn` afresh, so passes are independent of each other.
/// `counter` counts the passes started, including the first.
pub struct RepeatableIterator<F> {
    iter_fn: F,
    counter: usize,
}

impl<F, I> RepeatableIterator<F>
where
    F: FnMut() -> I,
    I: Iterator,
{
    pub fn new(iter_fn: F) -> Self {
        Self {
            iter_fn,
            counter: 0,
        }
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Starts a new pass.
    pub fn iter(&mut self) -> I {
        self.counter += 1;
        (self.iter_fn)()
    }
}

impl<'a, F, I> IntoIterator for &'a mut RepeatableIterator<F>
where
    F: FnMut() -> I,
    I: Iterator,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.iter()
    }
}
