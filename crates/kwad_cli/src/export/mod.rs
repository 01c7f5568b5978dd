/// Animation bundle export: sprites, `build.xml` and `anim.xml`.
pub mod anims;
/// Verbatim blob export.
pub mod blobs;
/// DXT5 block decompression backed by `texpresso`.
pub mod dxt;
/// Sprite canvas composition and name allocation.
pub mod sprite;
/// Surface decoding and per-texture PNG export.
pub mod textures;
/// Serde models for the build and animation XML documents.
pub mod xml;
