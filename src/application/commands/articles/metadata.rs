use crate::domain::{
    article::{ArticleMetadata, MetadataKey},
    errors::DomainResult,
};

pub(super) fn parse_entries(
    entries: Vec<(String, String)>,
) -> DomainResult<Vec<(MetadataKey, String)>> {
    entries
        .into_iter()
        .map(|(key, value)| MetadataKey::new(key).map(|key| (key, value)))
        .collect()
}

pub(super) fn parse_keys(keys: Vec<String>) -> DomainResult<Vec<MetadataKey>> {
    keys.into_iter().map(MetadataKey::new).collect()
}

/// Later entries for the same key win.
pub(super) fn into_metadata(entries: Vec<(MetadataKey, String)>) -> ArticleMetadata {
    entries.into_iter().collect()
}
