//! Configuration module for Sikt.
//!
//! Handles loading application settings and the domain registry.

mod domains;
mod settings;

pub use domains::{BilingualName, CategoryConfig, DomainConfig, DomainRegistry};
pub use settings::{
    CurationSettings, DescriptionSettings, GeneralSettings, Settings, SiteSettings,
    StoreSettings, YoutubeSettings,
};
