use anyhow::{ensure, Result};

pub const DEFAULT_FLUSH_EVERY: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFileOptions {
    /// The writer flushes after every `flush_every`-th record.
    pub flush_every: usize,
}

impl Default for RecordFileOptions {
    fn default() -> Self {
        Self {
            flush_every: DEFAULT_FLUSH_EVERY,
        }
    }
}

impl RecordFileOptions {
    pub fn flush_every(mut self, flush_every: usize) -> Self {
        self.flush_every = flush_every;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.flush_every > 0, "flush_every must be positive");
        Ok(())
    }
}
