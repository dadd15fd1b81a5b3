//! Image catalog - manifest loading and orientation-paired ordering

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Orientation derived from pixel dimensions (square counts as landscape)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// One photograph in the gallery, as described by the manifest.
/// Read-only to the engine; decoding is the renderer's problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    /// Asset path of the image file
    pub source: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub title: Option<String>,
}

impl GalleryImage {
    pub fn orientation(&self) -> Orientation {
        if self.width >= self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Manifest loading failures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The ordered image list consumed by the assignment pass
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageCatalog {
    pub images: Vec<GalleryImage>,
}

impl ImageCatalog {
    pub fn load_from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the manifest, falling back to an empty catalog on any failure.
    /// An all-empty gallery is valid (every frame stays bare).
    pub fn load_or_empty(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(catalog) => {
                info!("Loaded {} gallery images from {}", catalog.len(), path);
                catalog
            }
            Err(e) => {
                warn!("Failed to load manifest {}: {}, gallery stays empty", path, e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }
}

/// Reorder images into alternating same-orientation pairs: two landscape,
/// two portrait, repeating, with relative order preserved inside each group.
/// Frames hang two consecutive images front/back, so pairing keeps both
/// sides of a frame the same shape.
pub fn orientation_paired(images: Vec<GalleryImage>) -> Vec<GalleryImage> {
    let (landscape, portrait): (Vec<_>, Vec<_>) = images
        .into_iter()
        .partition(|img| img.orientation() == Orientation::Landscape);

    let mut ordered = Vec::with_capacity(landscape.len() + portrait.len());
    let mut landscape = landscape.into_iter().peekable();
    let mut portrait = portrait.into_iter().peekable();
    while landscape.peek().is_some() || portrait.peek().is_some() {
        for _ in 0..2 {
            if let Some(img) = landscape.next() {
                ordered.push(img);
            }
        }
        for _ in 0..2 {
            if let Some(img) = portrait.next() {
                ordered.push(img);
            }
        }
    }
    ordered
}
