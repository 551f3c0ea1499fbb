pub mod char_util;
pub mod cluster;
pub mod lexeme;
pub mod longest_match;
pub mod maximum_match;
pub mod run_grouper;
pub mod segmentor;
pub mod word_segmenter;
