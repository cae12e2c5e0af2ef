//! Fuzzy subsequence scorer.
//!
//! Scores how well a query matches a piece of text, in the style of
//! fzf-like finders. A score greater than zero means every query
//! character appears in the text in order (a subsequence match, not a
//! substring match); zero means no match.
//!
//! # Algorithm
//!
//! The text is scanned left to right once. For each query character, the
//! cursor advances until a case-insensitive match is found. Each matched
//! character contributes:
//!
//! 1. **Position base**: `text_len - match_index` — earlier matches score
//!    higher.
//! 2. **Consecutive run**: `run_length * 10` when the match immediately
//!    follows the previous one; the run resets on a gap.
//! 3. **Word boundary**: flat `+15` when the match starts the text or
//!    follows a separator (space, `-`, `_`, `.`, `/`, `\`).
//! 4. **Case transition**: flat `+10` when a lowercase character in the
//!    original text is followed by the matched uppercase character
//!    (camelCase / PascalCase starts).
//!
//! Once the whole query has matched, texts shorter than 50 characters
//! gain `(50 - text_len) * 2`, preferring concise entries over long
//! documents that happen to contain the same subsequence.
//!
//! Positions and lengths are measured in Unicode codepoints. Case folding
//! is per-codepoint (`char::to_lowercase`, first codepoint of the
//! mapping), which keeps indices one-to-one with the original text.

/// Per-character weight of a consecutive match run.
const CONSECUTIVE_RUN_WEIGHT: i64 = 10;
/// Flat bonus for matching at a word boundary.
const WORD_BOUNDARY_BONUS: i64 = 15;
/// Flat bonus for matching an uppercase character after a lowercase one.
const CASE_TRANSITION_BONUS: i64 = 10;
/// Texts shorter than this many codepoints receive a brevity bonus.
const SHORT_TEXT_LIMIT: i64 = 50;
/// Per-codepoint weight of the brevity bonus.
const SHORT_TEXT_WEIGHT: i64 = 2;

/// Score `query` against `text`.
///
/// Returns a positive score when the query matches `text` as a
/// case-insensitive subsequence, and `0` when it does not. An empty
/// query trivially matches with a fixed minimal score; an empty text
/// matches nothing. Pure and deterministic for fixed inputs.
pub fn fuzzy_score(text: &str, query: &str) -> i64 {
    if query.is_empty() {
        return 1;
    }
    if text.is_empty() {
        return 0;
    }

    let original: Vec<char> = text.chars().collect();
    let folded: Vec<char> = original.iter().map(|c| fold_char(*c)).collect();
    let text_len = original.len() as i64;

    let mut score: i64 = 0;
    let mut text_idx: usize = 0;
    let mut last_match: i64 = -1;
    let mut consecutive: i64 = 0;

    for query_char in query.chars().map(fold_char) {
        let mut found = false;

        while text_idx < folded.len() {
            if folded[text_idx] == query_char {
                found = true;

                let mut position_score = text_len - text_idx as i64;

                if text_idx as i64 == last_match + 1 {
                    consecutive += 1;
                    position_score += consecutive * CONSECUTIVE_RUN_WEIGHT;
                } else {
                    consecutive = 0;
                }

                if text_idx == 0 || is_word_boundary(original[text_idx - 1]) {
                    position_score += WORD_BOUNDARY_BONUS;
                }

                if text_idx > 0
                    && original[text_idx - 1].is_lowercase()
                    && original[text_idx].is_uppercase()
                {
                    position_score += CASE_TRANSITION_BONUS;
                }

                score += position_score;
                last_match = text_idx as i64;
                text_idx += 1;
                break;
            }
            text_idx += 1;
        }

        if !found {
            return 0;
        }
    }

    if text_len < SHORT_TEXT_LIMIT {
        score += (SHORT_TEXT_LIMIT - text_len) * SHORT_TEXT_WEIGHT;
    }

    score
}

/// Fold a character to lowercase for comparison.
///
/// Takes the first codepoint of the full lowercase mapping so folding
/// stays one-to-one with text positions.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Separator characters that mark the start of a word.
fn is_word_boundary(c: char) -> bool {
    matches!(c, ' ' | '-' | '_' | '.' | '/' | '\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsequence_matches() {
        assert!(fuzzy_score("abcdef", "ace") > 0);
        assert!(fuzzy_score("hello world", "hlo") > 0);
    }

    #[test]
    fn out_of_order_does_not_match() {
        assert_eq!(fuzzy_score("abc", "acb"), 0);
        assert_eq!(fuzzy_score("hello", "oleh"), 0);
    }

    #[test]
    fn missing_characters_do_not_match() {
        assert_eq!(fuzzy_score("hello world", "xyz"), 0);
        assert_eq!(fuzzy_score("abc", "abcd"), 0);
    }

    #[test]
    fn case_insensitive() {
        assert!(fuzzy_score("Hello World", "hello") > 0);
        assert!(fuzzy_score("hello world", "HELLO") > 0);
    }

    #[test]
    fn empty_query_trivially_matches() {
        assert_eq!(fuzzy_score("anything", ""), 1);
        assert_eq!(fuzzy_score("", ""), 1);
    }

    #[test]
    fn empty_text_never_matches() {
        assert_eq!(fuzzy_score("", "a"), 0);
    }

    #[test]
    fn deterministic() {
        let a = fuzzy_score("some clipboard content", "scc");
        let b = fuzzy_score("some clipboard content", "scc");
        assert_eq!(a, b);
        assert!(a > 0);
    }

    #[test]
    fn earlier_match_scores_higher() {
        // Same length, same characters; only the match position differs.
        assert!(fuzzy_score("abcxxxxx", "abc") > fuzzy_score("xxxxxabc", "abc"));
    }

    #[test]
    fn consecutive_run_beats_scattered() {
        assert!(fuzzy_score("abcdefgh", "abc") > fuzzy_score("axbxcxdx", "abc"));
    }

    #[test]
    fn word_boundary_beats_mid_word() {
        // "w" at the start of a word vs buried inside one.
        assert!(fuzzy_score("say world", "w") > fuzzy_score("sayworldx", "w"));
    }

    #[test]
    fn camel_case_transition_rewarded() {
        // "W" after a lowercase letter vs the same letter after uppercase.
        assert!(fuzzy_score("helloWorld", "w") > fuzzy_score("HELLOWORLD", "w"));
    }

    #[test]
    fn shorter_text_preferred() {
        assert!(fuzzy_score("log", "log") > fuzzy_score("a long line mentioning log files", "log"));
    }

    #[test]
    fn brevity_bonus_only_below_limit() {
        let long: String = "x".repeat(60) + "abc";
        let score = fuzzy_score(&long, "abc");
        assert!(score > 0);
    }

    #[test]
    fn unicode_content_does_not_panic() {
        assert!(fuzzy_score("héllo wörld", "hw") > 0);
        assert!(fuzzy_score("日本語のテキスト", "日本") > 0);
        assert_eq!(fuzzy_score("日本語", "q"), 0);
        assert!(fuzzy_score("ÜBER straße", "über") > 0);
    }

    #[test]
    fn separator_characters_match_literally() {
        assert!(fuzzy_score("path/to/file.txt", "p/t") > 0);
        assert!(fuzzy_score("snake_case_name", "s_c") > 0);
    }
}
