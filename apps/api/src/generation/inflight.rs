//! In-flight generation guard.
//!
//! Each generation call registers under a request token before it reaches the model. While
//! the entry exists a second submission with the same token, or the same flow and input, is
//! refused. A registered call can be cancelled by token; the guard removes its entry on drop.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::Notify;
use tracing::{debug, info};
use uuid::Uuid;

use crate::generation::GenerationError;

#[derive(Debug)]
struct Entry {
    flow: &'static str,
    fingerprint: u64,
    cancel: Arc<Notify>,
}

#[derive(Debug, Default)]
pub struct InflightRegistry {
    entries: Mutex<HashMap<Uuid, Entry>>,
}

impl InflightRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Entry>> {
        // Entries stay consistent even if a holder panicked.
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Registers a call. `token` is the client's request token; a fresh one is issued when
    /// absent.
    pub fn begin(
        self: &Arc<Self>,
        token: Option<Uuid>,
        flow: &'static str,
        fingerprint: u64,
    ) -> Result<InflightGuard, GenerationError> {
        let mut entries = self.lock();

        let token = token.unwrap_or_else(Uuid::new_v4);
        let duplicate = entries.contains_key(&token)
            || entries
                .values()
                .any(|e| e.flow == flow && e.fingerprint == fingerprint);
        if duplicate {
            info!(flow, %token, "Rejected duplicate generation request");
            return Err(GenerationError::Duplicate);
        }

        let cancel = Arc::new(Notify::new());
        entries.insert(
            token,
            Entry {
                flow,
                fingerprint,
                cancel: cancel.clone(),
            },
        );
        debug!(flow, %token, "Generation request registered");

        Ok(InflightGuard {
            registry: Arc::clone(self),
            token,
            cancel,
        })
    }

    /// Signals the call registered under `token`. Returns false when nothing is in flight
    /// under that token.
    pub fn cancel(&self, token: Uuid) -> bool {
        match self.lock().get(&token) {
            Some(entry) => {
                info!(flow = entry.flow, %token, "Cancelling generation request");
                entry.cancel.notify_one();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn release(&self, token: Uuid) {
        self.lock().remove(&token);
    }
}

/// Held for the duration of one generation call.
#[derive(Debug)]
pub struct InflightGuard {
    registry: Arc<InflightRegistry>,
    token: Uuid,
    cancel: Arc<Notify>,
}

impl InflightGuard {
    pub fn token(&self) -> Uuid {
        self.token
    }

    /// Drives `call` to completion unless the token is cancelled first. A cancel issued
    /// before `run` starts still wins.
    pub async fn run<T, F>(&self, call: F) -> Result<T, GenerationError>
    where
        F: Future<Output = Result<T, GenerationError>>,
    {
        tokio::select! {
            biased;
            _ = self.cancel.notified() => Err(GenerationError::Cancelled),
            result = call => result,
        }
    }
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        self.registry.release(self.token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_same_token_is_duplicate() {
        let registry = InflightRegistry::new();
        let token = Uuid::new_v4();
        let _guard = registry.begin(Some(token), "a", 1).unwrap();
        let err = registry.begin(Some(token), "b", 2).unwrap_err();
        assert!(matches!(err, GenerationError::Duplicate));
    }

    #[test]
    fn test_same_flow_and_input_is_duplicate() {
        let registry = InflightRegistry::new();
        let _guard = registry.begin(None, "suggest_skills", 42).unwrap();
        assert!(registry.begin(None, "suggest_skills", 42).is_err());
        assert!(registry.begin(None, "suggest_skills", 43).is_ok());
        assert!(registry.begin(None, "generate_job_description", 42).is_ok());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let registry = InflightRegistry::new();
        let token = Uuid::new_v4();
        {
            let guard = registry.begin(Some(token), "a", 1).unwrap();
            assert_eq!(guard.token(), token);
            assert_eq!(registry.len(), 1);
        }
        assert!(registry.is_empty());
        assert!(registry.begin(Some(token), "a", 1).is_ok());
    }

    #[test]
    fn test_cancel_unknown_token() {
        let registry = InflightRegistry::new();
        assert!(!registry.cancel(Uuid::new_v4()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_running_call() {
        let registry = InflightRegistry::new();
        let guard = registry.begin(None, "a", 1).unwrap();
        let token = guard.token();

        let canceller = {
            let registry = registry.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                registry.cancel(token)
            })
        };

        let result: Result<(), _> = guard
            .run(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(GenerationError::Cancelled)));
        assert!(canceller.await.unwrap());
    }

    #[tokio::test]
    async fn test_cancel_before_run_still_cancels() {
        let registry = InflightRegistry::new();
        let guard = registry.begin(None, "a", 1).unwrap();
        assert!(registry.cancel(guard.token()));
        let result: Result<u8, _> = guard.run(async { Ok(7) }).await;
        assert!(matches!(result, Err(GenerationError::Cancelled)));
    }

    #[tokio::test]
    async fn test_uncancelled_call_completes() {
        let registry = InflightRegistry::new();
        let guard = registry.begin(None, "a", 1).unwrap();
        let result: Result<u8, GenerationError> = guard.run(async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }
}
