use crate::stats::GLOBAL_STATS;
use ahash::AHashMap;
use lazy_static::lazy_static;
use regex::Regex;
use slotmap::{new_key_type, SlotMap};
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// A compiled shape pattern shared by every validator built from the same pattern.
#[derive(Debug, Clone)]
pub struct SharedRegex {
    regex: Arc<Regex>,
}

impl Deref for SharedRegex {
    type Target = Regex;

    fn deref(&self) -> &Self::Target {
        self.regex.deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PatternKey {
    pattern: String,
    case_sensitive: bool,
}

pub fn get_memoized_regex<T>(
    pattern: &str,
    case_sensitive: bool,
    regex_factory: impl FnOnce(&str, bool) -> Result<Regex, T>,
) -> Result<SharedRegex, T> {
    get_memoized_regex_with_custom_store(pattern, case_sensitive, regex_factory, &REGEX_STORE)
}

fn get_memoized_regex_with_custom_store<T>(
    pattern: &str,
    case_sensitive: bool,
    regex_factory: impl FnOnce(&str, bool) -> Result<Regex, T>,
    store: &Mutex<RegexStore>,
) -> Result<SharedRegex, T> {
    let key = PatternKey {
        pattern: pattern.to_owned(),
        case_sensitive,
    };
    if let Some(existing_regex) = lock(store).get(&key) {
        return Ok(existing_regex);
    }

    // Compile after the lock is released, since this can be slow
    let regex = regex_factory(pattern, case_sensitive)?;
    GLOBAL_STATS.pattern_compilations.increment(1);

    Ok(lock(store).insert(key, regex))
}

/// The store only holds weak references, so a panic while it was locked cannot leave it in a
/// state worth refusing to read.
fn lock(store: &Mutex<RegexStore>) -> MutexGuard<'_, RegexStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

// A GC of the store happens every N insertions, clearing out dropped weak references
const GC_FREQUENCY: u64 = 1_000;

lazy_static! {
    static ref REGEX_STORE: Mutex<RegexStore> = Mutex::new(RegexStore::new());
}
new_key_type! { struct RegexCacheKey; }

struct RegexStore {
    pattern_index: AHashMap<PatternKey, RegexCacheKey>,
    key_map: SlotMap<RegexCacheKey, Weak<Regex>>,
    // Counts up to `GC_FREQUENCY` and is reset to 0 when a GC happens
    gc_counter: u64,
}

impl RegexStore {
    fn new() -> Self {
        Self {
            pattern_index: AHashMap::new(),
            key_map: SlotMap::with_key(),
            gc_counter: 0,
        }
    }

    /// Removes every pattern that no validator uses anymore.
    fn gc(&mut self) {
        self.gc_counter = 0;
        let key_map = &mut self.key_map;
        self.pattern_index.retain(|_, cache_key| {
            let alive = key_map
                .get(*cache_key)
                .map(|regex| regex.strong_count() > 0)
                .unwrap_or(false);
            if !alive {
                key_map.remove(*cache_key);
            }
            alive
        });
        GLOBAL_STATS.set_total_patterns(self.key_map.len());
    }

    fn get(&self, key: &PatternKey) -> Option<SharedRegex> {
        self.pattern_index
            .get(key)
            .and_then(|cache_key| self.key_map.get(*cache_key))
            .and_then(Weak::upgrade)
            .map(|regex| SharedRegex { regex })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        debug_assert_eq!(self.pattern_index.len(), self.key_map.len());
        self.key_map.len()
    }

    /// Returns the memoized regex, which should be used instead of the one passed in. If two
    /// threads compiled the same pattern at once, only the first one inserted is kept.
    fn insert(&mut self, key: PatternKey, regex: Regex) -> SharedRegex {
        self.gc_counter += 1;
        if self.gc_counter >= GC_FREQUENCY {
            self.gc();
        }
        if let Some(existing_regex) = self.get(&key) {
            return existing_regex;
        }
        let shared_regex = Arc::new(regex);
        let cache_key = self.key_map.insert(Arc::downgrade(&shared_regex));
        if let Some(old_cache_key) = self.pattern_index.insert(key, cache_key) {
            // `get` returned None, so the old entry is a dead reference
            self.key_map.remove(old_cache_key);
        }
        GLOBAL_STATS.set_total_patterns(self.key_map.len());

        SharedRegex {
            regex: shared_regex,
        }
    }
}
