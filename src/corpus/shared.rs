//! A corpus handle that can be swapped while readers hold snapshots.

use std::sync::{Arc, RwLock};

use super::Corpus;
use crate::domain::EducationalContent;

/// Shared, atomically replaceable corpus.
///
/// Readers take an `Arc` snapshot with [`SharedCorpus::load`]; a reload
/// builds a complete new corpus and swaps the pointer, so no reader ever
/// sees a partially rebuilt corpus.
#[derive(Debug)]
pub struct SharedCorpus<E = EducationalContent> {
    current: RwLock<Arc<Corpus<E>>>,
}

impl<E> SharedCorpus<E> {
    pub fn new(corpus: Corpus<E>) -> Self {
        Self {
            current: RwLock::new(Arc::new(corpus)),
        }
    }

    /// Snapshot of the current corpus
    pub fn load(&self) -> Arc<Corpus<E>> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a new corpus, returning the previous one
    pub fn replace(&self, corpus: Corpus<E>) -> Arc<Corpus<E>> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, Arc::new(corpus))
    }
}

impl<E> Default for SharedCorpus<E> {
    fn default() -> Self {
        Self::new(Corpus::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocalizedText, ProcedureSummary, SurgicalCategory};

    fn procedure(id: &str) -> ProcedureSummary {
        ProcedureSummary {
            id: id.to_string(),
            name: LocalizedText::en(id),
            category: SurgicalCategory::Burn,
            description: String::new(),
            indications: Vec::new(),
            technique: Vec::new(),
            complications: Vec::new(),
            recovery: String::new(),
            key_pearl: String::new(),
        }
    }

    #[test]
    fn test_old_snapshot_survives_replace() {
        let shared = SharedCorpus::new(Corpus::build(vec![procedure("a")]).unwrap());
        let before = shared.load();

        let previous = shared.replace(Corpus::build(vec![procedure("b"), procedure("c")]).unwrap());

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.count(), 1);
        assert!(before.get("a").is_some());

        let after = shared.load();
        assert_eq!(after.count(), 2);
        assert!(after.get("a").is_none());
    }

    #[test]
    fn test_readers_across_threads() {
        let shared = Arc::new(SharedCorpus::new(
            Corpus::build(vec![procedure("a")]).unwrap(),
        ));

        let reader = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || shared.load().count())
        };

        shared.replace(Corpus::build(vec![procedure("a"), procedure("b")]).unwrap());

        let seen = reader.join().unwrap();
        assert!(seen == 1 || seen == 2);
    }
}
