use log::debug;

use crate::core::cluster::Clusters;
use crate::core::lexeme::{Lexeme, LexemeType};
use crate::core::segmentor::MatchSegmenter;
use crate::dict::dictionary::DictionaryPort;

const SEGMENTER_NAME: &str = "MAXIMUM_MATCH_SEGMENTER";

/// Placeholder for maximum matching. It does not split anything yet: every
/// run comes back as a single `Unknown` lexeme.
// TODO: pick the segmentation with the fewest words over all dictionary paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaximumMatchSegmenter;

impl MatchSegmenter for MaximumMatchSegmenter {
    fn segment<'a>(&self, clusters: &Clusters<'a>, _dict: &dyn DictionaryPort) -> Vec<Lexeme<'a>> {
        debug!("{} is not implemented, run left unsplit", SEGMENTER_NAME);
        match clusters.len().checked_sub(1) {
            Some(last) => vec![clusters.span(0, last, LexemeType::Unknown)],
            None => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        SEGMENTER_NAME
    }
}
