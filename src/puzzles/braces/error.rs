use derive_more::{Display, Error, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Brace {
    #[display("unclosed '{{'")]
    Unclosed,
    #[display("unopened '}}'")]
    Unopened,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("malformed brace pattern: {brace} at byte {offset}")]
pub struct MalformedPatternError {
    pub offset: usize,
    pub brace: Brace,
}
