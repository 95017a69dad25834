/// Network adapters for npm registry access
mod caching_metadata_provider;
mod npm_registry_client;

pub use caching_metadata_provider::CachingMetadataProvider;
pub use npm_registry_client::{
    NpmRegistryClient, RegistrySettings, DEFAULT_MAX_RETRIES, DEFAULT_REGISTRY_URL,
    DEFAULT_TIMEOUT_SECS,
};
