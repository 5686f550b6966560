/// Prefix marking a descriptor reference as a published-record identifier
pub const DEFAULT_REGISTRY_PREFIX: &str = "zenodo.";
/// Directory under `$HOME` holding cached registry records
pub const DEFAULT_CACHE_SUBDIR: &str = ".cache/descriptor-query";
/// Environment variable overriding the registry cache directory
pub const CACHE_DIR_ENV: &str = "DESCRIPTOR_QUERY_CACHE";
