//! # Telugu Text Normalizer

use std::sync::LazyLock;

use regex::Regex;

/// The first codepoint of the Telugu Unicode block.
pub const TELUGU_BLOCK_START: char = '\u{0C00}';

/// The last codepoint of the Telugu Unicode block.
pub const TELUGU_BLOCK_END: char = '\u{0C7F}';

/// Sentence marks spaced apart by steps 4 and 5.
///
/// The Devanagari danda and double danda are the Telugu full stops. None of these are in
/// the Telugu block, so after step 1 both steps match nothing.
pub const SENTENCE_MARKS: [char; 5] = ['।', '॥', ',', '?', '!'];

/// The range of dependent vowel signs split off their consonant.
pub const VOWEL_SIGN_RANGE: core::ops::RangeInclusive<char> = '\u{0C3E}'..='\u{0C4C}';

/// Compile a fixed pattern.
///
/// ## Panics
/// If `pattern` is not a valid regex; every caller passes a literal.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("regex pattern compilation failed")
}

static FOREIGN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[^\x{0C00}-\x{0C7F}\s0-9]"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"([0-9\x{0C66}-\x{0C6F}]+)"));
static SENTENCE_MARK: LazyLock<Regex> = LazyLock::new(|| compile(r"([।॥,?!])"));
static FULL_STOP: LazyLock<Regex> = LazyLock::new(|| compile(r"([।॥])"));
static VOWEL_SIGN: LazyLock<Regex> = LazyLock::new(|| compile(r"([\x{0C3E}-\x{0C4C}])"));

/// Is `c` a codepoint of the Telugu block?
pub fn is_telugu(c: char) -> bool {
    (TELUGU_BLOCK_START..=TELUGU_BLOCK_END).contains(&c)
}

/// Normalize raw text into the canonical Telugu token stream.
///
/// Applied in order, each as a full-text substitution:
/// 1. delete everything but Telugu, whitespace, and ASCII digits; punctuation goes too;
/// 2. collapse whitespace runs to a single space;
/// 3. surround digit runs (ASCII and Telugu digits) with spaces;
/// 4. surround each of [`SENTENCE_MARKS`] with spaces;
/// 5. append a space after each full stop;
/// 6. insert a space before each vowel sign in [`VOWEL_SIGN_RANGE`];
/// 7. trim.
///
/// Steps 3-6 can leave interior double spaces; consumers split on whitespace runs.
///
/// ## Arguments
/// * `text` - the raw text.
///
/// ## Returns
/// The normalized text; empty when nothing survives step 1.
pub fn preprocess<S: AsRef<str>>(text: S) -> String {
    let text = FOREIGN_CHARS.replace_all(text.as_ref(), "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = DIGIT_RUN.replace_all(&text, " ${1} ");
    let text = SENTENCE_MARK.replace_all(&text, " ${1} ");
    let text = FULL_STOP.replace_all(&text, "${1} ");
    let text = VOWEL_SIGN.replace_all(&text, " ${1}");
    text.trim().to_string()
}

/// Is `c` allowed in [`preprocess`] output?
pub fn is_normalized_char(c: char) -> bool {
    is_telugu(c) || c == ' ' || c.is_ascii_digit()
}
