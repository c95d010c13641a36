use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::render::RenderConfig;
use crate::scoring::ScoringConfig;

/// Top-level config file. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub render: Option<RenderConfig>,

    /// Tip message overrides keyed by criterion key
    #[serde(default)]
    pub tips: Option<BTreeMap<String, String>>,
}
