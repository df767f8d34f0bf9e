//! Image cache keyed by name
//!
//! States register the images they need in `preload`; gameplay only ever
//! asks for intrinsic sizes (paddle width, ball width, brick size).

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Intrinsic pixel size of an image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageInfo {
    pub width: f32,
    pub height: f32,
}

impl ImageInfo {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Bundled images and their sizes
pub const BUNDLED_IMAGES: &[(&str, ImageInfo)] = &[
    ("assets/images/ball.png", ImageInfo::new(16.0, 16.0)),
    ("assets/images/brick.png", ImageInfo::new(32.0, 16.0)),
    ("assets/images/paddle.png", ImageInfo::new(64.0, 16.0)),
    ("assets/images/live.png", ImageInfo::new(40.0, 40.0)),
    ("assets/images/bg.png", ImageInfo::new(1600.0, 1200.0)),
];

#[derive(Debug, Clone)]
struct CachedImage {
    path: String,
    info: ImageInfo,
}

#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    images: HashMap<String, CachedImage>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` for the image at `path`.
    ///
    /// Loading a key twice keeps the first entry. Unknown paths are skipped
    /// with a warning and leave the key unregistered.
    pub fn load_image(&mut self, key: &str, path: &str) -> Option<ImageInfo> {
        if let Some(cached) = self.images.get(key) {
            return Some(cached.info);
        }

        let info = BUNDLED_IMAGES
            .iter()
            .find(|(bundled, _)| *bundled == path)
            .map(|(_, info)| *info);

        match info {
            Some(info) => {
                log::debug!("Loaded image '{}' from {} ({}x{})", key, path, info.width, info.height);
                self.insert(key, path, info);
                Some(info)
            }
            None => {
                log::warn!("No image at {} for '{}'", path, key);
                None
            }
        }
    }

    /// Register an image directly
    pub fn insert(&mut self, key: &str, path: &str, info: ImageInfo) {
        self.images.insert(
            key.to_string(),
            CachedImage {
                path: path.to_string(),
                info,
            },
        );
    }

    pub fn image(&self, key: &str) -> Option<ImageInfo> {
        self.images.get(key).map(|c| c.info)
    }

    pub fn path(&self, key: &str) -> Option<&str> {
        self.images.get(key).map(|c| c.path.as_str())
    }

    /// Size of `key`, or zero with a warning if it was never loaded
    pub fn image_or_empty(&self, key: &str) -> ImageInfo {
        self.image(key).unwrap_or_else(|| {
            log::warn!("Image '{}' requested before it was loaded", key);
            ImageInfo::default()
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.images.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
