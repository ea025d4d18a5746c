//! Property-based tests for translation, evaluation and history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use calcpad::core::{truncate_preview, History};
use calcpad::evaluation::{format_number, EvaluationResult, ExpressionEvaluator, MevalEvaluator};
use calcpad::input::{InputEvent, Key, KeyCode, ScriptedInput};
use calcpad::translate::{insert_implicit_products, strip_whitespace, translate};
use calcpad::Calculator;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_operator()(variant in 0..4u8) -> (&'static str, &'static str) {
        match variant {
            0 => ("+", "+"),
            1 => ("−", "-"),
            2 => ("×", "*"),
            _ => ("÷", "/"),
        }
    }
}

prop_compose! {
    /// A glyph expression paired with its direct ASCII spelling.
    fn arbitrary_expression()(
        first in 1..1000u32,
        rest in prop::collection::vec((arbitrary_operator(), 1..1000u32), 0..6),
        parenthesise in any::<bool>(),
    ) -> (String, String) {
        let mut glyphs = first.to_string();
        let mut ascii = first.to_string();
        for ((glyph, op), operand) in rest {
            glyphs.push_str(glyph);
            glyphs.push_str(&operand.to_string());
            ascii.push_str(op);
            ascii.push_str(&operand.to_string());
        }
        if parenthesise {
            glyphs = format!("({})", glyphs);
            ascii = format!("({})", ascii);
        }
        (glyphs, ascii)
    }
}

proptest! {
    #[test]
    fn glyph_arithmetic_matches_reference(expr in arbitrary_expression()) {
        let (glyphs, ascii) = expr;
        let mut history = History::new();
        let evaluation = ExpressionEvaluator::new(MevalEvaluator).evaluate(&glyphs, &mut history);
        let reference = meval::eval_str(&ascii).unwrap();

        if reference.is_finite() {
            prop_assert_eq!(evaluation.result, EvaluationResult::NumericValue(reference));
            prop_assert_eq!(evaluation.display, format_number(reference));
        } else {
            prop_assert_eq!(evaluation.result, EvaluationResult::MathError);
        }
    }

    #[test]
    fn translation_is_deterministic(text in "[0-9+−×÷π%√²() .]{0,24}") {
        prop_assert_eq!(translate(&text), translate(&text));
    }

    #[test]
    fn plain_ascii_arithmetic_is_untouched(text in "[0-9+*/\\- .]{0,24}") {
        prop_assert_eq!(translate(&text), text);
    }

    #[test]
    fn implicit_products_only_add_operators(text in "[0-9+−÷()π√² ]{0,24}") {
        let explicit = insert_implicit_products(&text);
        prop_assert_eq!(explicit.replace('*', ""), text);
    }

    #[test]
    fn stripped_text_has_no_whitespace(text in "[0-9+ \t\n]{0,24}") {
        let stripped = strip_whitespace(&text);
        prop_assert!(!stripped.chars().any(char::is_whitespace));
    }

    #[test]
    fn truncation_keeps_a_prefix(text in "[0-9a-z+π]{0,30}", width in 1..15usize) {
        let preview = truncate_preview(&text, width, "...");
        if text.chars().count() > width {
            let prefix: String = text.chars().take(width).collect();
            prop_assert_eq!(preview, format!("{}...", prefix));
        } else {
            prop_assert_eq!(preview, text);
        }
    }

    #[test]
    fn history_restores_full_expressions(values in prop::collection::vec(0..100_000_000u64, 1..8)) {
        let mut history = History::new();
        for value in &values {
            let expression = format!("{}+0", value);
            history.record(&expression, *value as f64);
        }

        prop_assert_eq!(history.len(), values.len());
        for (index, value) in values.iter().rev().enumerate() {
            let expected = format!("{}+0", value);
            prop_assert_eq!(history.restore(index), Some(expected.as_str()));
        }
    }

    #[test]
    fn history_counts_only_successful_evaluations(
        inputs in prop::collection::vec(prop_oneof![Just("1+1"), Just("5÷0"), Just("2+"), Just("3×3")], 0..12)
    ) {
        let mut calc = Calculator::new();
        let mut expected = Vec::new();
        for input in &inputs {
            let mut script = ScriptedInput::new()
                .then(InputEvent::Escape)
                .typed(input)
                .then(InputEvent::KeyPress(KeyCode::Enter));
            calc.run(&mut script);
            if calc.has_valid_result() {
                expected.push(*input);
            }
        }

        prop_assert_eq!(calc.history().len(), expected.len());
        let newest_first: Vec<&str> = calc
            .history()
            .iter()
            .map(|e| e.original_expression.as_str())
            .collect();
        expected.reverse();
        prop_assert_eq!(newest_first, expected);
    }

    #[test]
    fn reevaluating_a_result_is_idempotent(a in 1..10_000u32, b in 1..10_000u32) {
        let evaluator = ExpressionEvaluator::new(MevalEvaluator);
        let mut history = History::new();

        let first = evaluator.evaluate(&format!("{}÷{}", a, b), &mut history);
        let again = evaluator.evaluate(&first.display, &mut history);

        prop_assert_eq!(again.value(), first.value());
        prop_assert_eq!(again.display, first.display);
    }

    #[test]
    fn digit_after_result_starts_fresh(a in 0..10u8, b in 0..10u8) {
        let mut calc = Calculator::new();
        calc.click(Key::Digit(a));
        calc.submit();
        calc.click(Key::Digit(b));
        prop_assert_eq!(calc.buffer(), Key::Digit(b).glyph());
    }
}
