/// One span produced when splitting a headline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharToken {
    pub text: String,
    /// Whitespace runs are kept as single static tokens so lines still wrap.
    pub animated: bool,
}

/// Split text into per-character tokens, collapsing whitespace runs.
pub fn split_chars(text: &str) -> Vec<CharToken> {
    let mut tokens: Vec<CharToken> = Vec::new();
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            match tokens.last_mut() {
                Some(last) if !last.animated => {}
                _ => tokens.push(CharToken {
                    text: " ".to_owned(),
                    animated: false,
                }),
            }
        } else {
            tokens.push(CharToken {
                text: ch.to_string(),
                animated: true,
            });
        }
    }
    tokens
}

#[inline]
pub fn animated_count(tokens: &[CharToken]) -> usize {
    tokens.iter().filter(|t| t.animated).count()
}
