pub mod config;
pub mod core;
pub mod dict;
pub mod error;

use std::sync::{Arc, PoisonError, RwLock};

use log::error;
use once_cell::sync::Lazy;
use tantivy::tokenizer::{BoxTokenStream, Token, TokenStream, Tokenizer};

use crate::config::configuration::YamlConfiguration;
pub use crate::core::lexeme::{Lexeme, LexemeType};
pub use crate::core::segmentor::MatchStrategy;
pub use crate::core::word_segmenter::Segmenter;
pub use crate::dict::dictionary::{Dictionary, DictionaryPort};
pub use crate::error::{Result, WordsegError};

/// Segmenter configured from `WORDSEG_CONFIG`. Falls back to an empty
/// dictionary when the configuration or a dictionary cannot be loaded.
pub static GLOBAL_SEGMENTER: Lazy<RwLock<Segmenter>> = Lazy::new(|| {
    let segmenter = YamlConfiguration::from_env()
        .and_then(|cfg| Segmenter::from_config(&cfg))
        .unwrap_or_else(|e| {
            error!("{}, segmenting with an empty dictionary", e);
            Segmenter::new()
        });
    RwLock::new(segmenter)
});

/// Tantivy tokenizer over a thai segmenter.
#[derive(Clone)]
pub struct WordsegTokenizer {
    mode: MatchStrategy,
    segmenter: Option<Arc<Segmenter>>,
}

pub struct WordsegTokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream for WordsegTokenStream {
    fn advance(&mut self) -> bool {
        if self.index < self.tokens.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn token(&self) -> &Token {
        &self.tokens[self.index - 1]
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.tokens[self.index - 1]
    }
}

impl WordsegTokenizer {
    /// Tokenizes with [`GLOBAL_SEGMENTER`].
    pub fn new(mode: MatchStrategy) -> Self {
        Self {
            mode,
            segmenter: None,
        }
    }

    pub fn with_segmenter(segmenter: Arc<Segmenter>, mode: MatchStrategy) -> Self {
        Self {
            mode,
            segmenter: Some(segmenter),
        }
    }
}

impl Tokenizer for WordsegTokenizer {
    fn token_stream<'a>(&self, text: &'a str) -> BoxTokenStream<'a> {
        let lexemes = match &self.segmenter {
            Some(segmenter) => segmenter.segment_with(text, self.mode),
            None => GLOBAL_SEGMENTER
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .segment_with(text, self.mode),
        };
        let tokens = lexemes
            .iter()
            .enumerate()
            .map(|(position, lexeme)| Token {
                offset_from: lexeme.get_begin_position(),
                offset_to: lexeme.get_end_position(),
                position,
                text: lexeme.text().to_string(),
                position_length: 1,
            })
            .collect();
        BoxTokenStream::from(WordsegTokenStream { tokens, index: 0 })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, PoisonError};

    use crate::{MatchStrategy, Segmenter, WordsegTokenizer, GLOBAL_SEGMENTER};

    fn test_once(
        tokenizer: &WordsegTokenizer,
        text: &str,
        expect_tokens: Vec<(&str, usize, usize)>,
    ) {
        use tantivy::tokenizer::*;
        let mut token_stream = tokenizer.token_stream(text);
        let mut tokens = Vec::new();
        while let Some(token) = token_stream.next() {
            assert_eq!(tokens.len(), token.position);
            tokens.push((token.text.clone(), token.offset_from, token.offset_to));
        }
        let expect_tokens: Vec<(String, usize, usize)> = expect_tokens
            .into_iter()
            .map(|(t, from, to)| (t.to_string(), from, to))
            .collect();
        assert_eq!(expect_tokens, tokens);
    }

    fn shared_segmenter() -> Arc<Segmenter> {
        let mut segmenter = Segmenter::new();
        segmenter.use_dict_data(&["ว่า", "ยังไง", "ทดสอบ"]);
        Arc::new(segmenter)
    }

    #[test]
    fn tantivy_wordseg_works() {
        let tokenizer =
            WordsegTokenizer::with_segmenter(shared_segmenter(), MatchStrategy::LongestMatch);
        // each thai character is 3 bytes
        test_once(
            &tokenizer,
            "abc ว่ายังไง ทดสอบ",
            vec![("abc", 0, 3), ("ว่า", 4, 13), ("ยังไง", 13, 28), ("ทดสอบ", 29, 44)],
        );
    }

    #[test]
    fn tantivy_maximum_match_mode() {
        let tokenizer =
            WordsegTokenizer::with_segmenter(shared_segmenter(), MatchStrategy::MaximumMatch);
        test_once(&tokenizer, "ว่ายังไง", vec![("ว่ายังไง", 0, 24)]);
    }

    // empties the global dictionary when the test ends, even on failure
    struct ClearGlobal;

    impl Drop for ClearGlobal {
        fn drop(&mut self) {
            GLOBAL_SEGMENTER
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
    }

    #[test]
    fn tantivy_global_segmenter() {
        let _clear = ClearGlobal;
        GLOBAL_SEGMENTER
            .write()
            .unwrap()
            .use_dict_data(&["สวัสดี", "ครับ"]);
        let tokenizer = WordsegTokenizer::new(MatchStrategy::LongestMatch);
        test_once(&tokenizer, "สวัสดีครับ", vec![("สวัสดี", 0, 18), ("ครับ", 18, 30)]);
        drop(_clear);
        assert_eq!(0, GLOBAL_SEGMENTER.read().unwrap().dictionary().len());
    }
}
