//! Core types and shared logic for the dossier services.
//!
//! This crate provides:
//! - The [`Entity`] tagged union describing a selectable catalog item
//!   (an Earth sighting event or a celestial origin)
//! - The fixed curated catalog served by the warm-up and generation tools
//! - Cache-key derivation used to deduplicate narrative generation
//! - Prompt templates for the text-generation provider
//! - Literal fallback texts shared with the presentation layer

mod entity;

pub mod catalog;
pub mod prompt;

pub use self::entity::{CelestialOrigin, EarthEvent, Entity, EventKind, OriginKind};

/// Substituted when the provider returns an empty or missing text field.
pub const EMPTY_RESPONSE_TEXT: &str = "无法获取情报数据。";

/// Markdown shown by clients when the backend (or a static narrative file)
/// cannot be reached. Exported here so the presentation layer and the
/// services agree on the exact literal.
pub const CONNECTION_LOST_TEXT: &str =
    "## 连接丢失\n\n无法从档案中检索机密数据。请确保后端服务器正在运行。";

/// Substituted by the static-file generator when the provider returns no text.
pub const NO_DATA_GENERATED_TEXT: &str = "No data generated.";
