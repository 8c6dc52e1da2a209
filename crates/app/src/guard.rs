use engine::{EngineError, Persistence, ResultEngine, TransactionStore};

/// Owns the store for the whole session and writes it back on the way out.
///
/// The snapshot is flushed by [`close`](Self::close) on a normal exit and by
/// `Drop` on any other path (an early `?` return or a panic unwinding).
/// Nothing is written unless the history changed, so a file that failed to
/// load is not replaced by an empty one.
pub struct SessionGuard<P: Persistence> {
    store: TransactionStore,
    persistence: P,
    load_error: Option<EngineError>,
    closed: bool,
}

impl<P: Persistence> SessionGuard<P> {
    /// Loads the records and builds the store. A load failure leaves the
    /// store empty; the error is kept for [`load_error`](Self::load_error).
    pub fn open(persistence: P) -> Self {
        let loaded = persistence
            .load()
            .and_then(|records| TransactionStore::builder().records(records).build());
        let (store, load_error) = match loaded {
            Ok(store) => (store, None),
            Err(err) => {
                tracing::error!("unable to load transactions: {err}");
                (TransactionStore::new(), Some(err))
            }
        };

        Self {
            store,
            persistence,
            load_error,
            closed: false,
        }
    }

    pub fn load_error(&self) -> Option<&EngineError> {
        self.load_error.as_ref()
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TransactionStore {
        &mut self.store
    }

    /// Writes the snapshot if the history changed since the last write.
    pub fn flush(&mut self) -> ResultEngine<()> {
        if !self.store.is_dirty() {
            return Ok(());
        }
        self.persistence.store(&self.store.snapshot())?;
        self.store.mark_clean();
        Ok(())
    }

    /// Final flush. Errors are returned instead of only logged.
    pub fn close(mut self) -> ResultEngine<()> {
        self.closed = true;
        self.flush()
    }
}

impl<P: Persistence> Drop for SessionGuard<P> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(err) = self.flush() {
            tracing::error!("unable to save transactions: {err}");
        }
    }
}
