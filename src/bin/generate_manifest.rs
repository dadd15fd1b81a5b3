//! Gallery manifest generator
//!
//! Scans an image directory, reads pixel dimensions, orders the images into
//! alternating same-orientation pairs (front/back of one frame share a
//! shape) and writes the JSON manifest the gallery loads at startup.
//! When the directory holds no images, a set of gradient placeholder
//! photographs is generated first so the gallery always has something to hang.
//!
//! Run with: `cargo run --bin generate_manifest [-- <image-dir> [<manifest>]]`

use image::{Rgba, RgbaImage};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

use framewalk::images::{GalleryImage, ImageCatalog, orientation_paired};

const DEFAULT_IMAGE_DIR: &str = "assets/images";
const DEFAULT_MANIFEST: &str = "assets/gallery.json";
const PLACEHOLDER_COUNT: usize = 16;
const EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let image_dir = args.get(1).map(String::as_str).unwrap_or(DEFAULT_IMAGE_DIR);
    let manifest_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_MANIFEST);

    fs::create_dir_all(image_dir).unwrap_or_else(|e| {
        panic!("\n\nERROR: Could not create image directory '{image_dir}': {e}\n")
    });

    let mut files = scan_images(image_dir);
    if files.is_empty() {
        println!("No images in {image_dir}, generating {PLACEHOLDER_COUNT} placeholders");
        generate_placeholders(image_dir);
        files = scan_images(image_dir);
    }

    let mut images = Vec::new();
    for path in &files {
        let (width, height) = match image::image_dimensions(path) {
            Ok(dims) => dims,
            Err(e) => {
                eprintln!("Skipping {}: {e}", path.display());
                continue;
            }
        };
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string();
        // Manifest sources are asset paths, relative to assets/
        let source = path
            .strip_prefix("assets/")
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();
        images.push(GalleryImage {
            id: stem.clone(),
            source,
            width,
            height,
            title: Some(stem.replace(['_', '-'], " ")),
        });
    }

    let catalog = ImageCatalog {
        images: orientation_paired(images),
    };
    let json = serde_json::to_string_pretty(&catalog)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not serialize manifest: {e}\n"));
    fs::write(manifest_path, json)
        .unwrap_or_else(|e| panic!("\n\nERROR: Could not write '{manifest_path}': {e}\n"));

    println!(
        "Wrote {} with {} images from {}",
        manifest_path,
        catalog.len(),
        image_dir
    );
}

/// Image files in the directory, sorted by name for a stable manifest order
fn scan_images(dir: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        })
        .collect();
    files.sort();
    files
}

/// Write gradient placeholder photographs, alternating landscape/portrait
fn generate_placeholders(dir: &str) {
    let mut rng = rand::thread_rng();
    for index in 0..PLACEHOLDER_COUNT {
        let (width, height) = if (index / 2) % 2 == 0 {
            (960, 640)
        } else {
            (640, 960)
        };
        let top = [
            rng.gen_range(40..220) as u8,
            rng.gen_range(40..220) as u8,
            rng.gen_range(40..220) as u8,
        ];
        let bottom = [
            rng.gen_range(40..220) as u8,
            rng.gen_range(40..220) as u8,
            rng.gen_range(40..220) as u8,
        ];

        let img = RgbaImage::from_fn(width, height, |_, y| {
            let blend = y as f32 / height as f32;
            Rgba([
                lerp_channel(top[0], bottom[0], blend),
                lerp_channel(top[1], bottom[1], blend),
                lerp_channel(top[2], bottom[2], blend),
                255,
            ])
        });

        let path = Path::new(dir).join(format!("placeholder_{:02}.png", index + 1));
        img.save(&path)
            .unwrap_or_else(|e| panic!("\n\nERROR: Could not write '{}': {e}\n", path.display()));
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
