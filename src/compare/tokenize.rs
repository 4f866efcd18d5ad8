/// Split text into alternating runs of whitespace and non-whitespace.
///
/// Whitespace runs are kept as tokens so that concatenating the result
/// reproduces the input exactly.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut in_whitespace: Option<bool> = None;

    for (pos, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match in_whitespace {
            Some(prev) if prev != is_ws => {
                tokens.push(&text[start..pos]);
                start = pos;
            }
            _ => {}
        }
        in_whitespace = Some(is_ws);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

pub fn is_whitespace_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_whitespace_runs() {
        assert_eq!(tokenize("a  b"), vec!["a", "  ", "b"]);
        assert_eq!(tokenize("hello world"), vec!["hello", " ", "world"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn leading_and_trailing_whitespace() {
        assert_eq!(tokenize("  hi\n"), vec!["  ", "hi", "\n"]);
        assert_eq!(tokenize("\t \n"), vec!["\t \n"]);
    }

    #[test]
    fn punctuation_stays_with_word() {
        assert_eq!(tokenize("Hello, world!"), vec!["Hello,", " ", "world!"]);
    }

    #[test]
    fn multibyte_text_round_trips() {
        let text = "我爱你 café\u{00A0}naïve  ok";
        let tokens = tokenize(text);
        assert_eq!(tokens.concat(), text);
        // NBSP is Unicode whitespace
        assert_eq!(tokens, vec!["我爱你", " ", "café", "\u{00A0}", "naïve", "  ", "ok"]);
    }

    #[test]
    fn whitespace_token_detection() {
        assert!(is_whitespace_token("  \n"));
        assert!(!is_whitespace_token("a "));
        assert!(!is_whitespace_token(""));
    }
}
