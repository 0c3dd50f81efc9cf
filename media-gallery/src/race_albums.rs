//! Fallback race albums kept in the local store when the backend has none

use std::rc::Rc;

use crate::error::GalleryError;
use crate::links::{is_allowed_album_link, normalize_cover};
use crate::models::RaceAlbumRecord;
use crate::store::LocalStore;

pub const RACE_ALBUMS_KEY: &str = "raceAlbums";
pub const LAST_DRIVE_FOLDER_KEY: &str = "lastDriveFolder";
pub const LAST_ALBUM_LINK_KEY: &str = "lastAlbumLink";

/// Raw input of the "add race album" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaceAlbumForm {
    pub name: String,
    pub link: String,
    /// Direct URL, Drive link or bare Drive file ID
    pub cover: String,
}

/// Last values typed into the fallback form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RememberedInputs {
    pub drive_folder: Option<String>,
    pub album_link: Option<String>,
}

/// Ordered album list (most recent first) stored as one JSON value
#[derive(Clone)]
pub struct RaceAlbumRepository {
    store: Rc<dyn LocalStore>,
}

impl RaceAlbumRepository {
    pub fn new(store: Rc<dyn LocalStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<RaceAlbumRecord>, GalleryError> {
        match self.store.get(RACE_ALBUMS_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| GalleryError::Storage(e.into())),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, albums: &[RaceAlbumRecord]) -> Result<(), GalleryError> {
        let json = serde_json::to_string(albums)
            .map_err(|e| GalleryError::Storage(e.into()))?;
        self.store.set(RACE_ALBUMS_KEY, &json)?;
        Ok(())
    }

    /// Validates the form and inserts the album at the front of the list
    pub fn add(&self, form: &RaceAlbumForm) -> Result<RaceAlbumRecord, GalleryError> {
        let name = form.name.trim();
        let link = form.link.trim();

        if name.is_empty() || link.is_empty() {
            return Err(GalleryError::Validation(
                "Por favor, preencha o nome e o link do álbum".to_string(),
            ));
        }
        if !is_allowed_album_link(link) {
            return Err(GalleryError::Validation(
                "Por favor, use um link válido do Google Photos".to_string(),
            ));
        }

        let mut albums = self.list()?;

        // Millisecond ids, bumped past the newest one so quick adds stay unique
        let now = chrono::Utc::now();
        let newest = albums
            .iter()
            .filter_map(|album| album.id.parse::<i64>().ok())
            .max()
            .unwrap_or(i64::MIN);
        let id = now.timestamp_millis().max(newest.saturating_add(1));

        let record = RaceAlbumRecord {
            id: id.to_string(),
            name: name.to_string(),
            link: link.to_string(),
            cover_url: normalize_cover(&form.cover),
            created_at: now.to_rfc3339(),
        };

        albums.insert(0, record.clone());
        self.save(&albums)?;
        if let Err(e) = self.store.set(LAST_ALBUM_LINK_KEY, link) {
            log::warn!("Failed to remember album link: {}", e);
        }

        log::info!("Stored race album '{}' ({})", record.name, record.id);
        Ok(record)
    }

    /// Removes the album with `id`; returns whether one was found
    pub fn remove(&self, id: &str) -> Result<bool, GalleryError> {
        let mut albums = self.list()?;
        let before = albums.len();
        albums.retain(|album| album.id != id);

        if albums.len() == before {
            return Ok(false);
        }

        self.save(&albums)?;
        log::info!("Removed race album {}", id);
        Ok(true)
    }

    pub fn remembered_inputs(&self) -> Result<RememberedInputs, GalleryError> {
        Ok(RememberedInputs {
            drive_folder: self.store.get(LAST_DRIVE_FOLDER_KEY)?,
            album_link: self.store.get(LAST_ALBUM_LINK_KEY)?,
        })
    }

    pub fn remember_drive_folder(&self, folder: &str) -> Result<(), GalleryError> {
        self.store.set(LAST_DRIVE_FOLDER_KEY, folder.trim())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SqliteStore, StoreError};

    fn form(name: &str, link: &str) -> RaceAlbumForm {
        RaceAlbumForm {
            name: name.to_string(),
            link: link.to_string(),
            cover: String::new(),
        }
    }

    #[test]
    fn test_add_inserts_at_front() {
        let repo = RaceAlbumRepository::new(Rc::new(MemoryStore::new()));

        let first = repo
            .add(&form("Track X", "https://photos.app.goo.gl/xyz"))
            .unwrap();
        let albums = repo.list().unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].name, "Track X");

        let second = repo
            .add(&form("Track Y", "https://photos.google.com/share/abc"))
            .unwrap();
        let albums = repo.list().unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0], second);
        assert_eq!(albums[1], first);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_add_rejects_foreign_domain() {
        let repo = RaceAlbumRepository::new(Rc::new(MemoryStore::new()));
        repo.add(&form("Track X", "https://photos.app.goo.gl/xyz"))
            .unwrap();

        let result = repo.add(&form("Track Z", "https://www.dropbox.com/sh/abc"));
        assert!(matches!(result, Err(GalleryError::Validation(_))));

        let albums = repo.list().unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].name, "Track X");
    }

    #[test]
    fn test_add_requires_name_and_link() {
        let repo = RaceAlbumRepository::new(Rc::new(MemoryStore::new()));
        assert!(matches!(
            repo.add(&form("  ", "https://photos.app.goo.gl/xyz")),
            Err(GalleryError::Validation(_))
        ));
        assert!(matches!(
            repo.add(&form("Track X", "")),
            Err(GalleryError::Validation(_))
        ));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_normalizes_cover_and_remembers_link() {
        let repo = RaceAlbumRepository::new(Rc::new(SqliteStore::open_in_memory().unwrap()));
        let record = repo
            .add(&RaceAlbumForm {
                name: "Velopark".to_string(),
                link: "https://photos.app.goo.gl/xyz".to_string(),
                cover: "https://drive.google.com/file/d/1AbCdEfGhIjK/view".to_string(),
            })
            .unwrap();

        assert_eq!(
            record.cover_url.as_deref(),
            Some("https://drive.google.com/uc?export=view&id=1AbCdEfGhIjK")
        );
        assert_eq!(
            repo.remembered_inputs().unwrap().album_link.as_deref(),
            Some("https://photos.app.goo.gl/xyz")
        );
    }

    /// Memory store that refuses to write one key
    struct FailingKeyStore {
        inner: MemoryStore,
        failing_key: &'static str,
    }

    impl LocalStore for FailingKeyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.failing_key {
                return Err(StoreError::Serialization("disk full".to_string()));
            }
            self.inner.set(key, value)
        }

        fn list(&self) -> Result<Vec<String>, StoreError> {
            self.inner.list()
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_add_succeeds_when_link_cannot_be_remembered() {
        let repo = RaceAlbumRepository::new(Rc::new(FailingKeyStore {
            inner: MemoryStore::new(),
            failing_key: LAST_ALBUM_LINK_KEY,
        }));

        let record = repo
            .add(&form("Track X", "https://photos.app.goo.gl/xyz"))
            .unwrap();

        assert_eq!(repo.list().unwrap(), vec![record]);
        assert_eq!(repo.remembered_inputs().unwrap().album_link, None);
    }

    #[test]
    fn test_remove_by_id() {
        let repo = RaceAlbumRepository::new(Rc::new(MemoryStore::new()));
        let kept = RaceAlbumRecord {
            id: "1".to_string(),
            name: "A".to_string(),
            link: "https://photos.app.goo.gl/a".to_string(),
            cover_url: None,
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
        };
        let removed = RaceAlbumRecord {
            id: "2".to_string(),
            name: "B".to_string(),
            ..kept.clone()
        };
        repo.save(&[removed.clone(), kept.clone()]).unwrap();

        assert!(repo.remove("2").unwrap());
        assert_eq!(repo.list().unwrap(), vec![kept]);
        assert!(!repo.remove("does-not-exist").unwrap());
    }

    #[test]
    fn test_remember_drive_folder() {
        let repo = RaceAlbumRepository::new(Rc::new(MemoryStore::new()));
        assert_eq!(repo.remembered_inputs().unwrap(), RememberedInputs::default());

        repo.remember_drive_folder(" 1FolderId ").unwrap();
        assert_eq!(
            repo.remembered_inputs().unwrap().drive_folder.as_deref(),
            Some("1FolderId")
        );
    }
}
