//! Durable append-only collections
//!
//! Each collection (requests, bookings) is one JSON document rewritten whole
//! under an exclusive per-collection lock: read, parse, append in memory,
//! serialize, write back. Records are never mutated or deleted after the
//! append.
//!
//! The rewrite is not crash-atomic. A process crash between the read and the
//! write can lose the in-flight record; this is a known limitation of the
//! persisted document contract, not something the store papers over.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{Error, Result};

/// A validated consultation request, persisted under the `requests` key.
///
/// Wire field names (`clientName`, ...) are a stable contract with export
/// tooling; renaming them is a breaking change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSubmission {
    pub client_name: String,
    pub client_phone: String,
    pub client_goal: String,
    pub client_hours: String,
}

/// A validated lesson booking, persisted under the `bookings` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub client_name: String,
    pub client_phone: String,
    /// Weekday code from the business-day table (`mon`, ...)
    pub client_weekday: String,
    /// Normalized `HH:MM`
    pub client_time: String,
    /// Tutor id, resolved against the roster at submission time
    pub client_teacher: u32,
}

/// A whole backing document: one top-level key holding a record sequence.
pub trait Document: Serialize + DeserializeOwned + Default + Send {
    type Record: Serialize + Send;

    fn push(&mut self, record: Self::Record);
    fn len(&self) -> usize;
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RequestDocument {
    pub requests: Vec<RequestSubmission>,
}

impl Document for RequestDocument {
    type Record = RequestSubmission;

    fn push(&mut self, record: RequestSubmission) {
        self.requests.push(record);
    }

    fn len(&self) -> usize {
        self.requests.len()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BookingDocument {
    pub bookings: Vec<BookingSubmission>,
}

impl Document for BookingDocument {
    type Record = BookingSubmission;

    fn push(&mut self, record: BookingSubmission) {
        self.bookings.push(record);
    }

    fn len(&self) -> usize {
        self.bookings.len()
    }
}

/// One durable collection backed by a single JSON file.
///
/// The mutex serializes every reader and writer of the file: the write path
/// replaces the whole document, so a concurrent read could otherwise observe
/// a torn file. Collections are independent; each carries its own lock.
pub struct Collection<D: Document> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<D>,
}

impl<D: Document> Collection<D> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the end of the collection.
    ///
    /// Either the whole updated document is written back or nothing is: a
    /// parse failure or I/O error leaves the file untouched and the record
    /// unacknowledged. The lock is held for the full read-modify-write and
    /// released on every exit path.
    pub async fn append(&self, record: D::Record) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load_locked().await?;
        doc.push(record);
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| Error::Internal(format!("Failed to serialize collection: {e}")))?;
        tokio::fs::write(&self.path, json).await?;
        debug!("appended record to {} ({} total)", self.path.display(), doc.len());
        Ok(())
    }

    /// Read the full collection document.
    pub async fn read(&self) -> Result<D> {
        let _guard = self.lock.lock().await;
        self.load_locked().await
    }

    /// Load the document; the caller must hold the lock. A missing file is
    /// an empty collection (fresh deploy), anything unparseable is corrupt.
    async fn load_locked(&self) -> Result<D> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| Error::Corrupt {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(D::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn request(name: &str) -> RequestSubmission {
        RequestSubmission {
            client_name: name.to_string(),
            client_phone: "+7 900 000-00-00".to_string(),
            client_goal: "travel".to_string(),
            client_hours: "hour5_7".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store: Collection<RequestDocument> = Collection::new(dir.path().join("requests.json"));
        let doc = store.read().await.unwrap();
        assert!(doc.requests.is_empty());
    }

    #[tokio::test]
    async fn append_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store: Collection<RequestDocument> = Collection::new(dir.path().join("requests.json"));

        store.append(request("Anna")).await.unwrap();
        store.append(request("Boris")).await.unwrap();

        let doc = store.read().await.unwrap();
        assert_eq!(doc.requests.len(), 2);
        assert_eq!(doc.requests[0].client_name, "Anna");
        assert_eq!(doc.requests[1].client_name, "Boris");
    }

    #[tokio::test]
    async fn prior_records_survive_later_appends() {
        let dir = tempfile::tempdir().unwrap();
        let store: Collection<RequestDocument> = Collection::new(dir.path().join("requests.json"));

        store.append(request("Anna")).await.unwrap();
        let before = store.read().await.unwrap().requests;
        store.append(request("Boris")).await.unwrap();
        let after = store.read().await.unwrap().requests;

        assert_eq!(&after[..before.len()], &before[..]);
        assert!(after.len() > before.len());
    }

    #[tokio::test]
    async fn identical_records_are_not_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let store: Collection<RequestDocument> = Collection::new(dir.path().join("requests.json"));

        store.append(request("Anna")).await.unwrap();
        store.append(request("Anna")).await.unwrap();

        let doc = store.read().await.unwrap();
        assert_eq!(doc.requests.len(), 2);
    }

    #[tokio::test]
    async fn corrupt_document_rejects_append_and_stays_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.json");
        std::fs::write(&path, "{\"requests\": oops").unwrap();

        let store: Collection<RequestDocument> = Collection::new(path.clone());
        let err = store.append(request("Anna")).await.unwrap_err();
        assert!(matches!(err, Error::Corrupt { .. }));

        // Nothing was written over the corrupt file.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"requests\": oops");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_appends_lose_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store: Arc<Collection<RequestDocument>> =
            Arc::new(Collection::new(dir.path().join("requests.json")));

        let handles: Vec<_> = ["Anna", "Boris", "Vera"]
            .iter()
            .map(|name| {
                let store = Arc::clone(&store);
                let record = request(name);
                tokio::spawn(async move { store.append(record).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let doc = store.read().await.unwrap();
        assert_eq!(doc.requests.len(), 3);
        let mut names: Vec<&str> =
            doc.requests.iter().map(|r| r.client_name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Anna", "Boris", "Vera"]);
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let requests: Collection<RequestDocument> =
            Collection::new(dir.path().join("requests.json"));
        let bookings: Collection<BookingDocument> =
            Collection::new(dir.path().join("bookings.json"));

        // A corrupt booking document must not affect the request collection.
        std::fs::write(bookings.path(), "not json").unwrap();

        requests.append(request("Anna")).await.unwrap();
        assert_eq!(requests.read().await.unwrap().requests.len(), 1);
        assert!(matches!(
            bookings.read().await.unwrap_err(),
            Error::Corrupt { .. }
        ));
    }
}
