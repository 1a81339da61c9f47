//! Observable current-language state.
//!
//! The page has exactly one active language at a time. Instead of an ambient
//! global read from every component, the value lives in one observable cell:
//! interested parties subscribe to changes, and every asynchronous completion
//! carries the epoch captured when it was issued so it can tell whether it
//! has been superseded by a later switch.
//!
//! The cell starts unset so that applying the default language at page load
//! is a real transition through the same code path as every user switch.

use crate::i18n::Language;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Monotonic marker of one language transition. Captured when asynchronous
/// work is issued and checked again when it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEpoch(u64);

type Listener = Box<dyn Fn(Language) + Send + Sync>;

/// Single source of truth for the active language.
pub struct LanguageState {
    current: RwLock<Option<Language>>,
    epoch: AtomicU64,
    listeners: RwLock<Vec<Listener>>,
}

impl LanguageState {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            epoch: AtomicU64::new(0),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// The active language, or `None` before the first switch.
    pub fn current(&self) -> Option<Language> {
        *self.current.read().unwrap()
    }

    /// The epoch of the most recent transition.
    pub fn epoch(&self) -> LanguageEpoch {
        LanguageEpoch(self.epoch.load(Ordering::SeqCst))
    }

    /// Whether a captured epoch still describes the present.
    pub fn is_current(&self, epoch: LanguageEpoch) -> bool {
        self.epoch() == epoch
    }

    /// Register a change listener, invoked on every real transition.
    pub fn subscribe(&self, listener: impl Fn(Language) + Send + Sync + 'static) {
        self.listeners.write().unwrap().push(Box::new(listener));
    }

    /// Transition to `lang`. Returns the new epoch, or `None` when `lang` is
    /// already active (no transition, no notification).
    pub fn set(&self, lang: Language) -> Option<LanguageEpoch> {
        let epoch = {
            let mut current = self.current.write().unwrap();
            if *current == Some(lang) {
                return None;
            }
            *current = Some(lang);
            LanguageEpoch(self.epoch.fetch_add(1, Ordering::SeqCst) + 1)
        };

        for listener in self.listeners.read().unwrap().iter() {
            listener(lang);
        }
        Some(epoch)
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new()
    }
}
