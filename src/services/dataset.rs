use crate::models::{Attraction, AttractionId, Booking, UserId};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the datasets at startup
///
/// Any of these prevents the service from serving requests.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate attraction id: {0}")]
    DuplicateAttraction(AttractionId),
}

/// Read-only in-memory tables of attractions and bookings
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards, so concurrent readers need no locking.
#[derive(Debug, Default)]
pub struct DatasetStore {
    attractions: Vec<Attraction>,
    attraction_index: HashMap<AttractionId, usize>,
    bookings_by_user: HashMap<UserId, Vec<Booking>>,
    booking_count: usize,
    dangling_bookings: usize,
}

impl DatasetStore {
    /// Load both tables from JSON array files
    pub fn load(
        attractions_path: impl AsRef<Path>,
        bookings_path: impl AsRef<Path>,
    ) -> Result<Self, DatasetError> {
        let attractions: Vec<Attraction> = read_json_records(attractions_path.as_ref())?;
        let bookings: Vec<Booking> = read_json_records(bookings_path.as_ref())?;

        Self::from_records(attractions, bookings)
    }

    /// Build the store from already deserialized records
    ///
    /// Attraction ids must be unique. Bookings pointing at unknown attractions
    /// are kept and counted, but never match anything.
    pub fn from_records(
        attractions: Vec<Attraction>,
        bookings: Vec<Booking>,
    ) -> Result<Self, DatasetError> {
        let mut attraction_index = HashMap::with_capacity(attractions.len());
        for (position, attraction) in attractions.iter().enumerate() {
            if attraction_index.insert(attraction.id, position).is_some() {
                return Err(DatasetError::DuplicateAttraction(attraction.id));
            }
        }

        let booking_count = bookings.len();
        let mut dangling_bookings = 0;
        let mut bookings_by_user: HashMap<UserId, Vec<Booking>> = HashMap::new();

        for booking in bookings {
            if !attraction_index.contains_key(&booking.attraction_id) {
                dangling_bookings += 1;
            }
            bookings_by_user
                .entry(booking.user_id)
                .or_default()
                .push(booking);
        }

        if dangling_bookings > 0 {
            tracing::warn!(
                "{} booking(s) reference attractions that are not loaded",
                dangling_bookings
            );
        }

        Ok(Self {
            attractions,
            attraction_index,
            bookings_by_user,
            booking_count,
            dangling_bookings,
        })
    }

    /// All attractions, in source order
    pub fn all_attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Bookings of a user in insertion order; empty for unknown users
    pub fn bookings_for_user(&self, user_id: UserId) -> &[Booking] {
        self.bookings_by_user
            .get(&user_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get_attraction(&self, id: AttractionId) -> Option<&Attraction> {
        self.attraction_index
            .get(&id)
            .map(|&position| &self.attractions[position])
    }

    pub fn attraction_count(&self) -> usize {
        self.attractions.len()
    }

    pub fn booking_count(&self) -> usize {
        self.booking_count
    }

    pub fn user_count(&self) -> usize {
        self.bookings_by_user.len()
    }

    /// Number of bookings whose attraction is missing from the attraction table
    pub fn dangling_bookings(&self) -> usize {
        self.dangling_bookings
    }
}

fn read_json_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DatasetError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let records: Vec<T> = serde_json::from_str(&raw).map_err(|e| DatasetError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Read {} records from {}", records.len(), path.display());

    Ok(records)
}
