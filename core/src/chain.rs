//! Sequential execution of fallible steps with first-failure short-circuit.

/// A boxed fallible step, for passing a pre-built list to [`Chain::run`].
pub type Step<E> = Box<dyn FnOnce() -> Result<(), E>>;

/// Runs fallible steps in order and retains the first failure.
///
/// Once a step has failed, every later step is skipped entirely: it is
/// never invoked, not merely ignored after running. A chain is a transient,
/// single-owner value: build it, read the outcome, discard it.
pub struct Chain<E> {
    err: Option<E>,
}

impl<E> Chain<E> {
    /// Creates an empty chain with no captured failure.
    pub fn new() -> Self {
        Self { err: None }
    }

    /// Executes `steps` in order, stopping at the first failure.
    pub fn run<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Step<E>>,
    {
        let mut chain = Self::new();
        for step in steps {
            chain = chain.then(step);
        }
        chain
    }

    /// Runs `step` unless an earlier step already failed, in which case
    /// `step` is skipped. Returns the chain for fluent composition.
    pub fn then<F>(mut self, step: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
    {
        if self.err.is_none() {
            if let Err(e) = step() {
                self.err = Some(e);
            }
        }
        self
    }

    /// The first captured failure, if any.
    pub fn err(&self) -> Option<&E> {
        self.err.as_ref()
    }

    /// Consumes the chain: `Ok(())` when every executed step succeeded (or
    /// the chain was empty), otherwise the first failure, unchanged.
    pub fn into_result(self) -> Result<(), E> {
        match self.err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<E> Default for Chain<E> {
    fn default() -> Self {
        Self::new()
    }
}
