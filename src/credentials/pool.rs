use std::sync::atomic::{AtomicUsize, Ordering};

use crate::dispatch::errors::DispatchError;

use super::models::credential::Credential;

/// Ordered credentials handed out round-robin.
///
/// The cursor is advanced with a single compare-and-swap, so concurrent
/// draws always observe distinct, sequential slots.
#[derive(Debug)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
    cursor: AtomicUsize,
}

impl CredentialPool {
    pub fn new(credentials: Vec<String>) -> Self {
        Self {
            credentials: credentials.into_iter().map(Credential::new).collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Slot the next draw will return.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }

    /// Returns the slot index alongside the credential so callers can log
    /// which key served a call without leaking it.
    pub fn next_credential(&self) -> Result<(usize, Credential), DispatchError> {
        let len = self.credentials.len();
        if len == 0 {
            return Err(DispatchError::PoolExhausted);
        }

        let index = match self
            .cursor
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |cursor| {
                Some((cursor + 1) % len)
            }) {
            Ok(previous) => previous,
            Err(previous) => previous,
        };

        Ok((index, self.credentials[index].clone()))
    }
}
