use bevy::prelude::*;
use constants::copy::{DEFAULT_LEAD, DEFAULT_PARAGRAPHS, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};

/// Marketing copy displayed in the scrollable panel over the canvas.
/// Registered as a JSON asset; the built-in default is shown until it loads.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCopy {
    pub title: String,
    #[serde(default)]
    pub lead: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl Default for ProductCopy {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            lead: DEFAULT_LEAD.to_string(),
            paragraphs: DEFAULT_PARAGRAPHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}
