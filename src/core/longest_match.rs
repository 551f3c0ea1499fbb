use log::debug;

use crate::core::cluster::Clusters;
use crate::core::lexeme::{Lexeme, LexemeType};
use crate::core::segmentor::MatchSegmenter;
use crate::dict::dictionary::DictionaryPort;

const SEGMENTER_NAME: &str = "LONGEST_MATCH_SEGMENTER";

/// Greedy longest prefix matching over clusters.
///
/// From each token start the longest dictionary entry made of whole clusters
/// is taken; the next token starts right after it. When no entry matches at a
/// token start, the rest of the run becomes one `Unknown` lexeme.
#[derive(Debug, Default, Clone, Copy)]
pub struct LongestMatchSegmenter;

impl MatchSegmenter for LongestMatchSegmenter {
    fn segment<'a>(&self, clusters: &Clusters<'a>, dict: &dyn DictionaryPort) -> Vec<Lexeme<'a>> {
        let mut lexemes = Vec::new();
        let Some(last) = clusters.len().checked_sub(1) else {
            return lexemes;
        };
        let depth = dict.max_key_length();
        let mut token_start = 0;
        while token_start <= last {
            match self.checkpoint(clusters, token_start, depth, dict) {
                Some(checkpoint) => {
                    lexemes.push(clusters.span(token_start, checkpoint, LexemeType::Word));
                    token_start = checkpoint + 1;
                }
                None => {
                    lexemes.push(clusters.span(token_start, last, LexemeType::Unknown));
                    token_start = last + 1;
                }
            }
        }
        debug!(
            "{}: {} clusters -> {} lexemes",
            SEGMENTER_NAME,
            clusters.len(),
            lexemes.len()
        );
        lexemes
    }

    fn name(&self) -> &str {
        SEGMENTER_NAME
    }
}

impl LongestMatchSegmenter {
    /// Index of the last cluster of the longest entry starting at `token_start`.
    ///
    /// Prefixes longer than `depth` code points are never looked up.
    pub fn checkpoint(
        &self,
        clusters: &Clusters<'_>,
        token_start: usize,
        depth: usize,
        dict: &dyn DictionaryPort,
    ) -> Option<usize> {
        let mut checkpoint = None;
        let mut prefix_len = 0;
        for (cursor, cluster) in clusters.iter().enumerate().skip(token_start) {
            prefix_len += cluster.char_len;
            if prefix_len > depth {
                break;
            }
            if dict.contains(clusters.span_text(token_start, cursor)) {
                checkpoint = Some(cursor);
            }
        }
        checkpoint
    }
}
