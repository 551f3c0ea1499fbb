#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeType {
    /// dictionary entry
    Word,
    /// thai text no entry matched, or a run left unsplit
    Unknown,
    /// trimmed text outside the thai script
    Foreign,
}

/// One output token, borrowing from the segmented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    text: &'a str,
    // byte offset in the segmented text
    offset: usize,
    pub lexeme_type: LexemeType,
}

impl<'a> Lexeme<'a> {
    pub fn new(text: &'a str, offset: usize, lexeme_type: LexemeType) -> Self {
        Lexeme {
            text,
            offset,
            lexeme_type,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn get_begin_position(&self) -> usize {
        self.offset
    }

    pub fn get_end_position(&self) -> usize {
        self.offset + self.text.len()
    }
}
