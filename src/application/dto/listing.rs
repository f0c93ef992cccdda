use serde::{Deserialize, Serialize};

use super::ArticleDto;

/// One page of `list` output; `total` counts matches before the limit was applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleListing {
    pub items: Vec<ArticleDto>,
    pub total: usize,
    pub truncated: bool,
}

impl ArticleListing {
    pub fn new(items: Vec<ArticleDto>, total: usize) -> Self {
        let truncated = items.len() < total;
        Self {
            items,
            total,
            truncated,
        }
    }
}
