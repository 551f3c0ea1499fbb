use std::ops::Range;

use crate::core::char_util::{is_backward_attaching, is_forward_attaching};
use crate::core::lexeme::{Lexeme, LexemeType};
use crate::core::run_grouper::Run;

/// Byte range of one orthographic unit inside its run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub bytes: Range<usize>,
    /// code points in the cluster
    pub char_len: usize,
}

/// The clusters of a thai run, in order, covering the run exactly.
#[derive(Debug)]
pub struct Clusters<'a> {
    run: Run<'a>,
    clusters: Vec<Cluster>,
}

impl<'a> Clusters<'a> {
    /// Groups the run into clusters: leading vowels join the following code
    /// point, combining and trailing marks join the preceding one.
    pub fn build(run: Run<'a>) -> Self {
        let mut clusters: Vec<Cluster> = Vec::new();
        let mut pending = false;
        for (offset, c) in run.text.char_indices() {
            let end = offset + c.len_utf8();
            let attach = pending || is_backward_attaching(c);
            match clusters.last_mut() {
                Some(open) if attach => {
                    open.bytes.end = end;
                    open.char_len += 1;
                }
                _ => clusters.push(Cluster {
                    bytes: offset..end,
                    char_len: 1,
                }),
            }
            pending = is_forward_attaching(c);
        }
        Clusters { run, clusters }
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    pub fn text(&self, index: usize) -> &'a str {
        self.span_text(index, index)
    }

    /// Text of the clusters `begin..=end`.
    pub fn span_text(&self, begin: usize, end: usize) -> &'a str {
        let run_text: &'a str = self.run.text;
        &run_text[self.clusters[begin].bytes.start..self.clusters[end].bytes.end]
    }

    pub fn span(&self, begin: usize, end: usize, lexeme_type: LexemeType) -> Lexeme<'a> {
        Lexeme::new(
            self.span_text(begin, end),
            self.run.offset + self.clusters[begin].bytes.start,
            lexeme_type,
        )
    }
}
