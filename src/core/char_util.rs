use phf::{phf_set, Set};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Script {
    Thai,
    Other,
}

impl From<char> for Script {
    fn from(c: char) -> Self {
        if is_thai(c) {
            Script::Thai
        } else {
            Script::Other
        }
    }
}

/// Leading vowels, written before the consonant they are pronounced after.
/// A cluster never ends right after one of them.
static FORWARD_ATTACHING: Set<char> = phf_set! {
    '\u{0E40}', // เ
    '\u{0E41}', // แ
    '\u{0E42}', // โ
    '\u{0E43}', // ใ
    '\u{0E44}', // ไ
};

/// Above/below vowels, trailing vowels, tone marks and other combining signs.
/// A cluster never starts with one of them unless it opens the run.
static BACKWARD_ATTACHING: Set<char> = phf_set! {
    '\u{0E30}', // ะ
    '\u{0E31}', // ั
    '\u{0E32}', // า
    '\u{0E33}', // ำ
    '\u{0E34}', // ิ
    '\u{0E35}', // ี
    '\u{0E36}', // ึ
    '\u{0E37}', // ื
    '\u{0E38}', // ุ
    '\u{0E39}', // ู
    '\u{0E3A}', // ฺ
    '\u{0E45}', // ๅ
    '\u{0E47}', // ็
    '\u{0E48}', // ่
    '\u{0E49}', // ้
    '\u{0E4A}', // ๊
    '\u{0E4B}', // ๋
    '\u{0E4C}', // ์
    '\u{0E4D}', // ํ
    '\u{0E4E}', // ๎
};

/// Thai script code points. The baht sign and the unassigned points of the
/// Thai block are not part of the script.
pub fn is_thai(input: char) -> bool {
    matches!(input, '\u{0E01}'..='\u{0E3A}' | '\u{0E40}'..='\u{0E5B}')
}

pub fn is_forward_attaching(input: char) -> bool {
    FORWARD_ATTACHING.contains(&input)
}

pub fn is_backward_attaching(input: char) -> bool {
    BACKWARD_ATTACHING.contains(&input)
}

pub fn utf8_len(s: &str) -> usize {
    s.chars().count()
}
