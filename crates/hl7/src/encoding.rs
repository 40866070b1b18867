/// The five HL7 v2 encoding characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingCharacters {
    pub field: char,
    pub component: char,
    pub repetition: char,
    pub escape: char,
    pub subcomponent: char,
}

impl EncodingCharacters {
    /// The standard `|^~\&` set
    pub const fn standard() -> Self {
        Self {
            field: '|',
            component: '^',
            repetition: '~',
            escape: '\\',
            subcomponent: '&',
        }
    }

    /// Returns true if `c` is one of the five encoding characters
    pub fn is_delimiter(&self, c: char) -> bool {
        c == self.field
            || c == self.component
            || c == self.repetition
            || c == self.escape
            || c == self.subcomponent
    }
}

impl Default for EncodingCharacters {
    fn default() -> Self {
        Self::standard()
    }
}
