//! Assets — files and folders, plus their transfer paths.

pub mod client;
pub mod wire;

pub use client::Assets;
pub use wire::{AssetType, CreateAsset, UpdateAsset};
