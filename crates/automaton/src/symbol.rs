use std::fmt;

/// A symbol of the binary input alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Zero,
    One,
}

impl Symbol {
    /// The alphabet in its fixed order, zero before one.
    pub const ALPHABET: [Symbol; 2] = [Symbol::Zero, Symbol::One];

    /// Returns the position of the symbol in [Symbol::ALPHABET].
    pub fn index(&self) -> usize {
        match self {
            Symbol::Zero => 0,
            Symbol::One => 1,
        }
    }

    /// Returns the symbol for the given input character, if it is part of the alphabet.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Zero => write!(f, "0"),
            Symbol::One => write!(f, "1"),
        }
    }
}

/// The character used to write down an epsilon label.
pub const EPSILON_MARKER: char = 'λ';

/// The label of a transition, either a symbol of the alphabet or an epsilon
/// (lambda) step that does not consume input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Epsilon,
    Symbol(Symbol),
}

impl Label {
    pub const ZERO: Label = Label::Symbol(Symbol::Zero);
    pub const ONE: Label = Label::Symbol(Symbol::One);

    /// All labels, epsilon first.
    pub const ALL: [Label; 3] = [Label::Epsilon, Label::ZERO, Label::ONE];

    /// Returns a dense index for the label, epsilon being zero.
    pub fn index(&self) -> usize {
        match self {
            Label::Epsilon => 0,
            Label::Symbol(symbol) => symbol.index() + 1,
        }
    }

    /// Returns the symbol of this label, or None for epsilon.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(symbol) => Some(*symbol),
        }
    }

    /// Returns true iff this is the epsilon label.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl From<Symbol> for Label {
    fn from(symbol: Symbol) -> Self {
        Label::Symbol(symbol)
    }
}

impl TryFrom<char> for Label {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c == EPSILON_MARKER {
            Ok(Label::Epsilon)
        } else {
            Symbol::from_char(c).map(Label::Symbol).ok_or(c)
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => write!(f, "{EPSILON_MARKER}"),
            Label::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_char() {
        assert_eq!(Label::try_from('0'), Ok(Label::ZERO));
        assert_eq!(Label::try_from('1'), Ok(Label::ONE));
        assert_eq!(Label::try_from(EPSILON_MARKER), Ok(Label::Epsilon));
        assert_eq!(Label::try_from('2'), Err('2'));
    }

    #[test]
    fn test_label_indices_are_dense() {
        for (i, label) in Label::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }

        assert_eq!(Label::Epsilon.symbol(), None);
        assert_eq!(Label::ONE.symbol(), Some(Symbol::One));
    }
}
