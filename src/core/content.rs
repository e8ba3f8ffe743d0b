//! Content blocks returned by entry handlers.

/// One block of reply content, tagged with its media kind.
/// Text is the only kind any registered entry produces today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Text(String),
}

impl Block {
    pub fn text(text: impl Into<String>) -> Self {
        Block::Text(text.into())
    }

    pub fn as_text(&self) -> &str {
        match self {
            Block::Text(t) => t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_holds_text_verbatim() {
        let b = Block::text("hello");
        assert_eq!(b.as_text(), "hello");
    }
}
