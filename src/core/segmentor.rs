use serde::Deserialize;

use crate::core::cluster::Clusters;
use crate::core::lexeme::Lexeme;
use crate::core::longest_match::LongestMatchSegmenter;
use crate::core::maximum_match::MaximumMatchSegmenter;
use crate::dict::dictionary::DictionaryPort;

/// Splits the clusters of one thai run into lexemes.
///
/// Implementations must cover the run exactly: the returned lexemes,
/// concatenated, are the run text.
pub trait MatchSegmenter {
    fn segment<'a>(&self, clusters: &Clusters<'a>, dict: &dyn DictionaryPort) -> Vec<Lexeme<'a>>;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    #[default]
    LongestMatch,
    /// Not implemented yet: runs are returned unsplit.
    MaximumMatch,
}

impl MatchStrategy {
    pub fn segmenter(self) -> &'static dyn MatchSegmenter {
        match self {
            MatchStrategy::LongestMatch => &LongestMatchSegmenter,
            MatchStrategy::MaximumMatch => &MaximumMatchSegmenter,
        }
    }
}
