//! Artifact verification
//!
//! Checksums of placed artifacts and the optional manifest written next to them.

pub mod checksum;
pub mod manifest;

pub use checksum::{calculate_checksum_bytes, checksum_file};
pub use manifest::{ArtifactManifest, ManifestEntry, MANIFEST_FILE};
