//! Punctuation splitter
//!
//! Each whitespace-delimited unit of a lowercased line is classified by the
//! first [`SplitRule`] in [`SplitRule::PRECEDENCE`] that matches it, and that
//! rule alone decides how the unit is cut. A unit is inspected once: whatever
//! punctuation is left inside the stem after the cut stays there.
//!
//! All windows are measured in characters. A window wider than the unit never
//! matches, so short or punctuation-only units fall through to later rules
//! instead of failing.

use crate::punctuation::{
    is_opener, is_paired_adjacent, is_possessive, is_quote_adjacent, is_simple,
};
use crate::token::Token;
use tracing::trace;

/// The splitting rules, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitRule {
    /// `((cat))` → `((`, `cat`, `))`
    DoubleWrap,
    /// `(cat)` → `(`, `cat`, `)`
    SingleWrap,
    /// `'cat` → `'`, `cat`
    Leading,
    /// `cat."` → `cat`, `."`
    QuoteSuffix,
    /// `cat).` → `cat`, `).`
    PairedSuffix,
    /// `cat.` → `cat`, `.`
    SimpleSuffix,
    /// `cat's` → `cat`, `'s`
    Possessive,
    /// `cat` → `cat`
    Bare,
}

impl SplitRule {
    /// First match wins.
    pub const PRECEDENCE: [SplitRule; 8] = [
        SplitRule::DoubleWrap,
        SplitRule::SingleWrap,
        SplitRule::Leading,
        SplitRule::QuoteSuffix,
        SplitRule::PairedSuffix,
        SplitRule::SimpleSuffix,
        SplitRule::Possessive,
        SplitRule::Bare,
    ];

    /// Find the rule that governs `unit`.
    pub fn classify(unit: &str) -> SplitRule {
        Self::PRECEDENCE
            .into_iter()
            .find(|rule| rule.matches(unit))
            .unwrap_or(SplitRule::Bare)
    }

    /// Whether this rule's windows match `unit`, ignoring precedence.
    pub fn matches(self, unit: &str) -> bool {
        let len = unit.chars().count();
        match self {
            SplitRule::DoubleWrap => {
                len > 4
                    && head(unit, 2).is_some_and(is_paired_adjacent)
                    && tail(unit, 2).is_some_and(is_paired_adjacent)
            }
            SplitRule::SingleWrap => {
                len > 1
                    && unit.chars().next().is_some_and(is_simple)
                    && unit.chars().next_back().is_some_and(is_simple)
            }
            SplitRule::Leading => len > 1 && unit.chars().next().is_some_and(is_opener),
            SplitRule::QuoteSuffix => tail(unit, 2).is_some_and(is_quote_adjacent),
            SplitRule::PairedSuffix => tail(unit, 2).is_some_and(is_paired_adjacent),
            SplitRule::SimpleSuffix => unit.chars().next_back().is_some_and(is_simple),
            SplitRule::Possessive => tail(unit, 2).is_some_and(is_possessive),
            SplitRule::Bare => true,
        }
    }

    /// Characters cut off the front and back of the unit.
    fn widths(self) -> (usize, usize) {
        match self {
            SplitRule::DoubleWrap => (2, 2),
            SplitRule::SingleWrap => (1, 1),
            SplitRule::Leading => (1, 0),
            SplitRule::QuoteSuffix | SplitRule::PairedSuffix | SplitRule::Possessive => (0, 2),
            SplitRule::SimpleSuffix => (0, 1),
            SplitRule::Bare => (0, 0),
        }
    }

    /// Number of tokens this rule always emits.
    fn token_count(self) -> usize {
        let (lead, trail) = self.widths();
        1 + usize::from(lead > 0) + usize::from(trail > 0)
    }

    /// Cut `unit` according to this rule.
    ///
    /// The stem is always emitted, even when empty (`()` under
    /// [`SplitRule::SingleWrap`]). If the unit is too short for the rule's
    /// windows the unit comes back whole as a single word.
    pub fn apply(self, unit: &str) -> Vec<Token> {
        let (lead_width, trail_width) = self.widths();
        if lead_width + trail_width > unit.chars().count() {
            return vec![Token::word(unit)];
        }
        let (Some(lead), Some(trail)) = (head(unit, lead_width), tail(unit, trail_width)) else {
            return vec![Token::word(unit)];
        };
        let stem = &unit[lead.len()..unit.len() - trail.len()];

        let mut tokens = Vec::with_capacity(self.token_count());
        if lead_width > 0 {
            tokens.push(Token::punctuation(lead));
        }
        tokens.push(Token::word(stem));
        if trail_width > 0 {
            tokens.push(Token::punctuation(trail));
        }
        tokens
    }
}

/// Split one whitespace-delimited, already lowercased unit.
///
/// An empty unit cannot come out of whitespace splitting; if one is passed
/// anyway it becomes a single empty word, which translation later drops.
pub fn split_unit(unit: &str) -> Vec<Token> {
    let rule = SplitRule::classify(unit);
    trace!(unit, ?rule, "split unit");
    rule.apply(unit)
}

/// Lowercase a line, split it on whitespace and split every unit.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    line.to_lowercase()
        .split_whitespace()
        .flat_map(split_unit)
        .collect()
}

/// The first `n` characters, or `None` if the unit is shorter.
fn head(unit: &str, n: usize) -> Option<&str> {
    match unit.char_indices().nth(n) {
        Some((end, _)) => Some(&unit[..end]),
        None if unit.chars().count() == n => Some(unit),
        None => None,
    }
}

/// The last `n` characters, or `None` if the unit is shorter.
fn tail(unit: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some(&unit[unit.len()..]);
    }
    unit.char_indices()
        .rev()
        .nth(n - 1)
        .map(|(start, _)| &unit[start..])
}
