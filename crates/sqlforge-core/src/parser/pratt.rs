//! Binding powers for Pratt expression parsing.
//!
//! From loosest to tightest: OR, AND, NOT, IS, comparison,
//! BETWEEN/IN/LIKE/ILIKE, other operators (`||`, bitwise, JSON), additive,
//! multiplicative, `^`, unary sign, `::`.

use crate::ast::{BinaryOperator, UnaryOperator};
use crate::lexer::{Keyword, Lexeme, LexemeKind};

/// Binding power of the operand of prefix NOT.
pub const NOT_BINDING_POWER: u8 = 5;

/// Binding power of the operand of unary `-`, `+` and `~`.
pub const UNARY_BINDING_POWER: u8 = 21;

/// Left binding power of the postfix `::` cast.
pub const CAST_BINDING_POWER: u8 = 23;

/// Binding power of `NOT IN`, `NOT LIKE`, `NOT ILIKE` and `NOT BETWEEN`.
pub const NEGATED_PREDICATE_BINDING_POWER: (u8, u8) = (11, 12);

/// Returns the infix binding power for a lexeme.
///
/// Returns `(left_bp, right_bp)`; every infix operator is left associative
/// (`left_bp < right_bp`). Returns `None` if the lexeme is not an infix
/// operator.
#[must_use]
pub fn infix_binding_power(lexeme: &Lexeme) -> Option<(u8, u8)> {
    match lexeme.kind {
        LexemeKind::Keyword(Keyword::Or) => Some((1, 2)),
        LexemeKind::Keyword(Keyword::And) => Some((3, 4)),
        LexemeKind::Keyword(Keyword::Is) => Some((7, 8)),
        LexemeKind::Keyword(Keyword::Between | Keyword::In | Keyword::Like | Keyword::Ilike) => {
            Some(NEGATED_PREDICATE_BINDING_POWER)
        }
        LexemeKind::Operator => match lexeme.text.as_str() {
            "=" | "<>" | "!=" | "<" | "<=" | ">" | ">=" => Some((9, 10)),
            "||" | "&" | "|" | "<<" | ">>" | "->" | "->>" => Some((13, 14)),
            "+" | "-" => Some((15, 16)),
            "*" | "/" | "%" => Some((17, 18)),
            "^" => Some((19, 20)),
            _ => None,
        },
        _ => None,
    }
}

/// Converts a lexeme to a plain binary operator.
///
/// IS, IN and BETWEEN need dedicated parsing and are not covered.
#[must_use]
pub fn lexeme_to_binary_op(lexeme: &Lexeme) -> Option<BinaryOperator> {
    match lexeme.kind {
        LexemeKind::Keyword(Keyword::And) => Some(BinaryOperator::And),
        LexemeKind::Keyword(Keyword::Or) => Some(BinaryOperator::Or),
        LexemeKind::Keyword(Keyword::Like) => Some(BinaryOperator::Like),
        LexemeKind::Keyword(Keyword::Ilike) => Some(BinaryOperator::ILike),
        LexemeKind::Operator => match lexeme.text.as_str() {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Sub),
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            "%" => Some(BinaryOperator::Mod),
            "^" => Some(BinaryOperator::Pow),
            "=" => Some(BinaryOperator::Eq),
            "<>" | "!=" => Some(BinaryOperator::NotEq),
            "<" => Some(BinaryOperator::Lt),
            "<=" => Some(BinaryOperator::LtEq),
            ">" => Some(BinaryOperator::Gt),
            ">=" => Some(BinaryOperator::GtEq),
            "||" => Some(BinaryOperator::Concat),
            "&" => Some(BinaryOperator::BitAnd),
            "|" => Some(BinaryOperator::BitOr),
            "<<" => Some(BinaryOperator::LeftShift),
            ">>" => Some(BinaryOperator::RightShift),
            "->" => Some(BinaryOperator::JsonGet),
            "->>" => Some(BinaryOperator::JsonGetText),
            _ => None,
        },
        _ => None,
    }
}

/// Converts a lexeme to a unary operator and its operand binding power.
#[must_use]
pub fn lexeme_to_unary_op(lexeme: &Lexeme) -> Option<(UnaryOperator, u8)> {
    match lexeme.kind {
        LexemeKind::Keyword(Keyword::Not) => Some((UnaryOperator::Not, NOT_BINDING_POWER)),
        LexemeKind::Operator => match lexeme.text.as_str() {
            "-" => Some((UnaryOperator::Neg, UNARY_BINDING_POWER)),
            "+" => Some((UnaryOperator::Plus, UNARY_BINDING_POWER)),
            "~" => Some((UnaryOperator::BitNot, UNARY_BINDING_POWER)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(text: &str) -> Lexeme {
        Lexeme::new(LexemeKind::Operator, text, 0)
    }

    fn kw(keyword: Keyword) -> Lexeme {
        Lexeme::new(LexemeKind::Keyword(keyword), keyword.as_str(), 0)
    }

    #[test]
    fn test_precedence_ordering() {
        // Multiplication should bind tighter than addition
        let add_bp = infix_binding_power(&op("+")).unwrap();
        let mul_bp = infix_binding_power(&op("*")).unwrap();
        assert!(mul_bp.0 > add_bp.0);

        // AND should bind tighter than OR
        let and_bp = infix_binding_power(&kw(Keyword::And)).unwrap();
        let or_bp = infix_binding_power(&kw(Keyword::Or)).unwrap();
        assert!(and_bp.0 > or_bp.0);

        // Comparison binds tighter than NOT, which binds tighter than AND
        let eq_bp = infix_binding_power(&op("=")).unwrap();
        assert!(eq_bp.0 > NOT_BINDING_POWER);
        assert!(NOT_BINDING_POWER > and_bp.1);

        // LIKE binds tighter than comparison, looser than concatenation
        let like_bp = infix_binding_power(&kw(Keyword::Like)).unwrap();
        let concat_bp = infix_binding_power(&op("||")).unwrap();
        assert!(like_bp.0 > eq_bp.0);
        assert!(concat_bp.0 > like_bp.0);
    }

    #[test]
    fn test_left_associativity() {
        for text in ["+", "*", "=", "||", "^"] {
            let (left, right) = infix_binding_power(&op(text)).unwrap();
            assert!(left < right, "{text} should be left associative");
        }
    }

    #[test]
    fn test_cast_binds_tightest() {
        assert!(CAST_BINDING_POWER > UNARY_BINDING_POWER);
        let pow_bp = infix_binding_power(&op("^")).unwrap();
        assert!(UNARY_BINDING_POWER > pow_bp.1);
    }

    #[test]
    fn test_lexeme_to_binary_op() {
        assert_eq!(lexeme_to_binary_op(&op("+")), Some(BinaryOperator::Add));
        assert_eq!(lexeme_to_binary_op(&op("!=")), Some(BinaryOperator::NotEq));
        assert_eq!(lexeme_to_binary_op(&op("->>")), Some(BinaryOperator::JsonGetText));
        assert_eq!(lexeme_to_binary_op(&kw(Keyword::In)), None);
        assert_eq!(lexeme_to_binary_op(&op("::")), None);
    }

    #[test]
    fn test_lexeme_to_unary_op() {
        assert_eq!(
            lexeme_to_unary_op(&op("-")),
            Some((UnaryOperator::Neg, UNARY_BINDING_POWER))
        );
        assert_eq!(
            lexeme_to_unary_op(&kw(Keyword::Not)),
            Some((UnaryOperator::Not, NOT_BINDING_POWER))
        );
        assert_eq!(lexeme_to_unary_op(&op("*")), None);
    }
}
