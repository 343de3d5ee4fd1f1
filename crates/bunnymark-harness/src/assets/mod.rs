//! Asset preload.
//!
//! The bundled workloads draw from a fixed manifest: twelve bunny images,
//! one sprite atlas (image + JSON descriptor) and one bitmap font (image +
//! XML descriptor). Preloading is all-or-nothing with a single combined
//! completion; a missing entry fails the whole preload and, with it, the
//! session. Descriptor files are carried as opaque bytes — interpreting
//! asset formats is the engine's job, not the harness's.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::TextureSource;

/// Atlas entry: backing image plus its JSON descriptor.
#[derive(Debug, Clone)]
pub struct AtlasEntry {
    pub image: String,
    pub descriptor: String,
}

/// Bitmap-font entry: font name, backing image, XML descriptor.
#[derive(Debug, Clone)]
pub struct FontEntry {
    pub name: String,
    pub image: String,
    pub descriptor: String,
}

/// The fixed set of assets the bundled workloads require.
#[derive(Debug, Clone)]
pub struct AssetManifest {
    pub images: Vec<String>,
    pub atlas: AtlasEntry,
    pub bitmap_font: FontEntry,
}

impl AssetManifest {
    /// The standard bunnymark manifest.
    pub fn standard() -> Self {
        Self {
            images: (1..=12).map(|i| format!("images/bunny{i}.png")).collect(),
            atlas: AtlasEntry {
                image: "spritesheets/bunnies.png".into(),
                descriptor: "spritesheets/bunnies.json".into(),
            },
            bitmap_font: FontEntry {
                name: "Desyrel".into(),
                image: "bitmap-fonts/desyrel.png".into(),
                descriptor: "bitmap-fonts/desyrel.xml".into(),
            },
        }
    }
}

/// Everything the preload fetched, keyed by manifest path.
#[derive(Debug, Default)]
pub struct AssetBundle {
    textures: HashMap<String, TextureSource>,
    descriptors: HashMap<String, Vec<u8>>,
    font_name: String,
}

impl AssetBundle {
    /// Empty bundle for tests that never touch assets.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn texture(&self, key: &str) -> Option<&TextureSource> {
        self.textures.get(key)
    }

    pub fn textures(&self) -> impl Iterator<Item = (&str, &TextureSource)> {
        self.textures.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn descriptor(&self, key: &str) -> Option<&[u8]> {
        self.descriptors.get(key).map(Vec::as_slice)
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }
}

/// Fetches every manifest entry under `root`. Resolves only once all of
/// them are in; the first failure aborts the preload.
pub fn preload(root: &Path, manifest: &AssetManifest) -> Result<AssetBundle> {
    let mut bundle = AssetBundle { font_name: manifest.bitmap_font.name.clone(), ..Default::default() };

    for key in manifest
        .images
        .iter()
        .chain([&manifest.atlas.image, &manifest.bitmap_font.image])
    {
        bundle.textures.insert(key.clone(), load_texture(root, key)?);
    }

    for key in [&manifest.atlas.descriptor, &manifest.bitmap_font.descriptor] {
        let bytes = fs::read(root.join(key))
            .with_context(|| format!("reading asset descriptor {key}"))?;
        bundle.descriptors.insert(key.clone(), bytes);
    }

    log::info!(
        "preloaded {} textures and {} descriptors from {}",
        bundle.textures.len(),
        bundle.descriptors.len(),
        root.display()
    );

    Ok(bundle)
}

fn load_texture(root: &Path, key: &str) -> Result<TextureSource> {
    let bytes = fs::read(root.join(key)).with_context(|| format!("reading asset image {key}"))?;

    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("decoding asset image {key}"))?
        .into_rgba8();

    Ok(TextureSource {
        width: decoded.width(),
        height: decoded.height(),
        rgba: decoded.into_raw(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Cursor;
    use std::path::Path;

    /// Writes a 2x2 PNG at `path`, creating parent directories.
    pub fn write_png(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();

        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png).unwrap();
        std::fs::write(path, bytes).unwrap();
    }

    /// Populates `root` with every entry of the standard manifest.
    pub fn write_standard_assets(root: &Path) {
        let manifest = super::AssetManifest::standard();

        for key in &manifest.images {
            write_png(&root.join(key));
        }
        write_png(&root.join(&manifest.atlas.image));
        write_png(&root.join(&manifest.bitmap_font.image));

        std::fs::write(root.join(&manifest.atlas.descriptor), b"{\"frames\":{}}").unwrap();
        std::fs::write(root.join(&manifest.bitmap_font.descriptor), b"<font/>").unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_manifest_preloads() {
        let dir = tempfile::tempdir().unwrap();
        test_support::write_standard_assets(dir.path());

        let bundle = preload(dir.path(), &AssetManifest::standard()).unwrap();

        assert!(bundle.texture("images/bunny1.png").is_some());
        assert!(bundle.texture("spritesheets/bunnies.png").is_some());
        assert!(bundle.descriptor("bitmap-fonts/desyrel.xml").is_some());
        assert_eq!(bundle.font_name(), "Desyrel");
        assert_eq!(bundle.textures().count(), 14);
    }

    #[test]
    fn one_missing_entry_fails_the_combined_completion() {
        let dir = tempfile::tempdir().unwrap();
        test_support::write_standard_assets(dir.path());
        std::fs::remove_file(dir.path().join("images/bunny7.png")).unwrap();

        assert!(preload(dir.path(), &AssetManifest::standard()).is_err());
    }
}
