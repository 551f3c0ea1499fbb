use std::path::Path;

use log::{debug, info};

use crate::config::configuration::Configuration;
use crate::core::cluster::Clusters;
use crate::core::lexeme::{Lexeme, LexemeType};
use crate::core::run_grouper::group_runs;
use crate::core::segmentor::MatchStrategy;
use crate::dict::dictionary::{Dictionary, DictionaryPort};
use crate::error::Result;

/// Thai word segmenter.
///
/// Thai runs are split into dictionary words; text in any other script is
/// passed through with surrounding whitespace trimmed.
#[derive(Debug, Default)]
pub struct Segmenter<D: DictionaryPort = Dictionary> {
    dict: D,
    strategy: MatchStrategy,
}

impl Segmenter<Dictionary> {
    /// Segmenter over an empty dictionary.
    pub fn new() -> Self {
        Self::with_dictionary(Dictionary::new())
    }

    /// Loads the main and extension dictionaries named by `cfg`.
    pub fn from_config(cfg: &dyn Configuration) -> Result<Self> {
        let mut dict = Dictionary::new();
        if let Some(main_dict) = cfg.get_main_dictionary() {
            dict.load_file(main_dict)?;
        }
        for ext_dict in cfg.get_ext_dictionaries() {
            dict.load_file(ext_dict)?;
        }
        info!(
            "segmenter ready, {} entries, strategy {:?}",
            dict.len(),
            cfg.get_strategy()
        );
        Ok(Self::with_dictionary(dict).with_strategy(cfg.get_strategy()))
    }
}

impl<D: DictionaryPort> Segmenter<D> {
    pub fn with_dictionary(dict: D) -> Self {
        Segmenter {
            dict,
            strategy: MatchStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    pub fn use_dict_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.dict.load_file(path.as_ref())
    }

    pub fn use_dict_data(&mut self, words: &[&str]) {
        self.dict.load_words(words)
    }

    pub fn clear(&mut self) {
        self.dict.clear()
    }

    /// Segments `text` into tokens.
    pub fn segment_text(&self, text: &str) -> Vec<String> {
        self.segment(text)
            .iter()
            .map(|lexeme| lexeme.text().to_string())
            .collect()
    }

    pub fn segment<'a>(&self, text: &'a str) -> Vec<Lexeme<'a>> {
        self.segment_with(text, self.strategy)
    }

    pub fn segment_with<'a>(&self, text: &'a str, strategy: MatchStrategy) -> Vec<Lexeme<'a>> {
        let segmenter = strategy.segmenter();
        let depth = self.dict.max_key_length();
        let mut lexemes = Vec::new();
        for run in group_runs(text) {
            if !run.is_thai() {
                let trimmed = run.text.trim();
                if !trimmed.is_empty() {
                    let leading = run.text.len() - run.text.trim_start().len();
                    lexemes.push(Lexeme::new(
                        trimmed,
                        run.offset + leading,
                        LexemeType::Foreign,
                    ));
                }
            } else if depth == 0 {
                lexemes.push(Lexeme::new(run.text, run.offset, LexemeType::Unknown));
            } else {
                lexemes.extend(segmenter.segment(&Clusters::build(run), &self.dict));
            }
        }
        debug!(
            "{}: {} bytes -> {} lexemes",
            segmenter.name(),
            text.len(),
            lexemes.len()
        );
        lexemes
    }
}
