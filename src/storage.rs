//! Persistence for review documents: one JSON blob under one storage key,
//! read and written whole on every operation. The document shape (per-item
//! map vs flat list) is a type parameter of the store rather than a second
//! code path, and the backing key-value store is a trait so native tests can
//! run against an in-memory map instead of `window.localStorage`.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;
use std::rc::Rc;

use leptos::logging;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::review::Review;

/// Storage key for the per-item review document.
pub const STORAGE_KEY: &str = "coffee-reviews-by-item";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("persisted review document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Shape of the persisted document. `Keyed` groups reviews by item id,
/// `Flat` keeps a single list with the unit key.
pub trait Document: Default + Clone + Serialize + DeserializeOwned + 'static {
    type Key: ?Sized;

    fn reviews_for(&self, key: &Self::Key) -> &[Review];

    /// Insert at the front so the list stays newest-first, creating the list
    /// for `key` if it does not exist yet.
    fn prepend(&mut self, key: &Self::Key, review: Review);
}

/// Mapping from item id to review list; serializes as `{"<itemId>": [..]}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Keyed(pub BTreeMap<String, Vec<Review>>);

impl Document for Keyed {
    type Key = str;

    fn reviews_for(&self, key: &str) -> &[Review] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn prepend(&mut self, key: &str, review: Review) {
        self.0.entry(key.to_string()).or_default().insert(0, review);
    }
}

/// Single review list; serializes as a bare JSON array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Flat(pub Vec<Review>);

impl Document for Flat {
    type Key = ();

    fn reviews_for(&self, _key: &()) -> &[Review] {
        &self.0
    }

    fn prepend(&mut self, _key: &(), review: Review) {
        self.0.insert(0, review);
    }
}

/// String key-value backend the store persists through.
pub trait StringStore: Clone + 'static {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// `window.localStorage`. Reads return `None` when the window or storage is
/// unavailable; failed writes are logged and dropped.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl StringStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(key, value).is_err() {
                logging::warn!("[STORE] local storage write failed for key {key}");
            }
        }
    }
}

/// In-memory backend for native tests. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// The review store. Every mutating call is a full read-modify-write round
/// trip against the backend; there is no cache and no partial update.
#[derive(Clone)]
pub struct ReviewStore<D: Document, S: StringStore> {
    backend: S,
    storage_key: String,
    _shape: PhantomData<D>,
}

/// The store configuration the app mounts with: per-item document in
/// browser local storage.
pub type ItemReviewStore = ReviewStore<Keyed, BrowserStorage>;

impl ItemReviewStore {
    pub fn browser() -> Self {
        ReviewStore::new(BrowserStorage, STORAGE_KEY)
    }
}

impl<D: Document, S: StringStore> ReviewStore<D, S> {
    pub fn new(backend: S, storage_key: &str) -> Self {
        ReviewStore {
            backend,
            storage_key: storage_key.to_string(),
            _shape: PhantomData,
        }
    }

    /// Deserializes the persisted blob. A missing key is an empty document;
    /// malformed content is an error for the caller to map.
    pub fn try_load(&self) -> Result<D, StoreError> {
        match self.backend.read(&self.storage_key) {
            None => Ok(D::default()),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }

    /// The one place parse failure is recovered: malformed content is
    /// discarded (not migrated) and replaced with the empty document.
    pub fn load_all(&self) -> D {
        self.try_load().unwrap_or_else(|err| {
            logging::warn!("[STORE] discarding malformed document under {}: {err}", self.storage_key);
            D::default()
        })
    }

    /// Serializes and overwrites the persisted blob unconditionally.
    pub fn save(&self, doc: &D) {
        match serde_json::to_string(doc) {
            Ok(raw) => self.backend.write(&self.storage_key, &raw),
            Err(err) => logging::error!("[STORE] failed to serialize review document: {err}"),
        }
    }

    /// Reviews for `key`, newest first; empty if the key is absent.
    pub fn reviews_for(&self, key: &D::Key) -> Vec<Review> {
        self.load_all().reviews_for(key).to_vec()
    }

    /// Prepends `review` under `key` and persists the whole document.
    pub fn add_review(&self, key: &D::Key, review: Review) {
        let mut doc = self.load_all();
        doc.prepend(key, review);
        self.save(&doc);
    }
}
