//! Symbol translation from display glyphs to evaluator syntax.
//!
//! The keypad shows typographic glyphs (`×`, `÷`, `π`, `√` and so on). The
//! evaluator only understands ASCII operators and function names, and it has
//! no implicit multiplication, so every expression passes through
//! [`translate`] before evaluation.

/// Literal substituted for `π`, parenthesised so it binds as one operand.
pub const PI_LITERAL: &str = "(3.141592653589793)";

/// Multi-character token typed for the modulo operator.
pub const MOD_TOKEN: &str = "mod";

/// Evaluator spelling of the modulo operator.
pub const MOD_OPERATOR: &str = "%";

/// Glyph substitutions, applied in a single left-to-right pass.
pub const GLYPH_TABLE: &[(char, &str)] = &[
    ('+', "+"),
    ('−', "-"),
    ('×', "*"),
    ('÷', "/"),
    ('π', PI_LITERAL),
    ('%', "*(0.01)"),
    ('√', "sqrt"),
    ('²', "^(2)"),
];

/// Replacement for a single glyph, if it has one.
pub fn glyph_replacement(glyph: char) -> Option<&'static str> {
    GLYPH_TABLE
        .iter()
        .find(|(g, _)| *g == glyph)
        .map(|(_, replacement)| *replacement)
}

/// Explicit operator inserted between juxtaposed operands.
pub const IMPLICIT_PRODUCT: char = '*';

fn ends_operand(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, ')' | 'π' | '²' | '%')
}

fn starts_operand(prev: char, ch: char) -> bool {
    match ch {
        '(' | 'π' | '√' => true,
        // Digits only start a new operand after a closed group, never
        // after another digit.
        c if c.is_ascii_digit() => matches!(prev, ')' | 'π' | '²' | '%'),
        _ => false,
    }
}

/// Write juxtaposed operands as explicit products: `2π` becomes `2*π`,
/// `2√(9)` becomes `2*√(9)` and `(1+2)(3)` becomes `(1+2)*(3)`.
///
/// Whitespace between the two operands is kept and does not prevent the
/// insertion.
pub fn insert_implicit_products(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev: Option<char> = None;
    for ch in raw.chars() {
        if let Some(p) = prev {
            if ends_operand(p) && starts_operand(p, ch) {
                out.push(IMPLICIT_PRODUCT);
            }
        }
        out.push(ch);
        if !ch.is_whitespace() {
            prev = Some(ch);
        }
    }
    out
}

/// Translate a display expression into evaluator syntax.
///
/// Juxtaposed operands are first joined with an explicit `*`. Glyphs are
/// then substituted, and a last pass turns every `mod` into the evaluator's
/// `%`. Because `%` glyphs were already rewritten to `*(0.01)` by then, the
/// two never collide. Whitespace and every other character pass through
/// untouched.
///
/// # Example
///
/// ```rust
/// use calcpad::translate::translate;
///
/// assert_eq!(translate("6×7"), "6*7");
/// assert_eq!(translate("√(9)"), "sqrt(9)");
/// assert_eq!(translate("50%"), "50*(0.01)");
/// assert_eq!(translate("7mod3"), "7%3");
/// assert_eq!(translate("2π"), "2*(3.141592653589793)");
/// ```
pub fn translate(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() * 2);
    for ch in insert_implicit_products(raw).chars() {
        match glyph_replacement(ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out.replace(MOD_TOKEN, MOD_OPERATOR)
}

/// Remove all whitespace, as done to an expression before it is stored in
/// history.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}
