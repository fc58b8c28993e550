use log::{debug, warn};

use crate::codec;
use crate::error::Result;
use crate::option_list::OptionList;

/// Where the encoded token lives. In the browser this is the `data` query
/// parameter of the current location.
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&mut self, token: &str) -> Result<()>;
}

/// Keeps the stored token a pure function of the option list.
pub struct UrlSynchronizer<S: TokenStore> {
    store: S,
    committed: Option<String>,
}

impl<S: TokenStore> UrlSynchronizer<S> {
    pub fn new(store: S) -> Self {
        Self { store, committed: None }
    }

    /// Decode whatever the store holds. Bad tokens are logged and yield an
    /// empty list; a tampered link is not worth an error dialog.
    pub fn load(&mut self) -> OptionList {
        let Some(token) = self.store.read() else {
            debug!("no saved roulette state in location");
            return OptionList::new();
        };

        match codec::decode(&token) {
            Ok(list) => {
                debug!("restored {} options from location", list.len());
                self.committed = Some(token);
                list
            }
            Err(e) => {
                warn!("ignoring saved roulette state: {}", e);
                OptionList::new()
            }
        }
    }

    /// Encode the full list and write it. Nothing is written if the token is
    /// over the size limit.
    pub fn commit(&mut self, list: &OptionList) -> Result<String> {
        let token = codec::encode_checked(list)?;
        self.store.write(&token)?;
        debug!("committed roulette state ({} chars)", token.len());
        self.committed = Some(token.clone());
        Ok(token)
    }

    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Token store backed by a plain string, for tests and non-browser hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub token: Option<String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            writes: 0,
        }
    }
}

impl TokenStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.token.clone()
    }

    fn write(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouletteError;
    use crate::option_list::{list_of, WheelOption};

    #[test]
    fn test_load_valid_token() {
        let token = codec::encode(&list_of(&["A", "B"]));
        let mut sync = UrlSynchronizer::new(MemoryStore::with_token(token.clone()));
        assert_eq!(sync.load(), list_of(&["A", "B"]));
        assert_eq!(sync.committed(), Some(token.as_str()));
    }

    #[test]
    fn test_load_missing_or_malformed_is_empty() {
        let mut sync = UrlSynchronizer::new(MemoryStore::default());
        assert!(sync.load().is_empty());

        let mut sync = UrlSynchronizer::new(MemoryStore::with_token("%%%"));
        assert!(sync.load().is_empty());
        assert_eq!(sync.committed(), None);
        assert_eq!(sync.store().writes, 0);
    }

    #[test]
    fn test_commit_writes_full_snapshot() {
        let mut sync = UrlSynchronizer::new(MemoryStore::default());
        let list = list_of(&["X", "Y"]);
        let token = sync.commit(&list).unwrap();
        assert_eq!(sync.store().token.as_deref(), Some(token.as_str()));
        assert_eq!(codec::decode(&token).unwrap(), list);
    }

    #[test]
    fn test_oversize_commit_leaves_store_alone() {
        let mut sync = UrlSynchronizer::new(MemoryStore::default());
        let before = sync.commit(&list_of(&["keep me"])).unwrap();

        let big: OptionList = (0..500)
            .map(|i| WheelOption::new(format!("entry {}", i)).unwrap())
            .collect();
        let err = sync.commit(&big).unwrap_err();
        assert!(matches!(err, RouletteError::OversizeEncoding { .. }));
        assert_eq!(sync.store().token.as_deref(), Some(before.as_str()));
        assert_eq!(sync.committed(), Some(before.as_str()));
        assert_eq!(sync.store().writes, 1);
    }
}
