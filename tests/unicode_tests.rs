//! Integration tests for LaTeX → Unicode conversion

use hwpmath::{convert, latex_to_unicode, latex_to_unicode_with_report, symbols_in, SymbolClass};

// ============================================================================
// Literal cases
// ============================================================================

mod literal {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(convert("hello world"), "hello world");
        assert_eq!(convert("a + b = c"), "a + b = c");
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_scripts() {
        assert_eq!(convert("x^2"), "x²");
        assert_eq!(convert("x_1"), "x₁");
        assert_eq!(convert("E = mc^2"), "E = mc²");
        assert_eq!(convert("x^{n+1}"), "xⁿ⁺¹");
    }

    #[test]
    fn test_greek_and_unknown_commands() {
        assert_eq!(convert(r"\alpha"), "α");
        assert_eq!(convert(r"\Gamma"), "Γ");
        assert_eq!(convert(r"\notacommand"), r"\notacommand");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(convert(r"\frac{1}{2}"), "½");
        assert_eq!(convert(r"\frac{a}{b}"), "a/b");
        assert_eq!(convert(r"\frac{x^2 + y^2}{z^2}"), "x² + y²/z²");
    }

    #[test]
    fn test_integral_with_limits() {
        // ∞ has no superscript form and keeps its marker
        assert_eq!(convert(r"\int_{0}^{\infty}"), "∫₀^∞");
    }

    #[test]
    fn test_sum_with_limits() {
        assert_eq!(convert(r"\sum_{i=1}^{n}"), "∑ᵢ₌₁ⁿ");
        assert_eq!(convert(r"\prod_{k=0}^{n} a_k"), "∏ₖ₌₀ⁿ aₖ");
    }

    #[test]
    fn test_mixed_expression() {
        assert_eq!(convert(r"\alpha^2 + \beta_1 \leq \gamma"), "α² + β₁ ≤ γ");
        assert_eq!(convert(r"x \in A \cup B"), "x ∈ A ∪ B");
    }

    #[test]
    fn test_short_name_matches_long_name() {
        assert_eq!(convert(r"\pi r^2"), latex_to_unicode(r"\pi r^2"));
    }
}

// ============================================================================
// Fraction table
// ============================================================================

mod fractions {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expected_glyph(n: u32, d: u32) -> Option<&'static str> {
        let glyph = match (n, d) {
            (1, 2) => "½",
            (1, 3) => "⅓",
            (2, 3) => "⅔",
            (1, 4) => "¼",
            (3, 4) => "¾",
            (1, 5) => "⅕",
            (2, 5) => "⅖",
            (3, 5) => "⅗",
            (4, 5) => "⅘",
            (1, 6) => "⅙",
            (5, 6) => "⅚",
            (1, 7) => "⅐",
            (1, 8) => "⅛",
            (3, 8) => "⅜",
            (5, 8) => "⅝",
            (7, 8) => "⅞",
            _ => return None,
        };
        Some(glyph)
    }

    #[test]
    fn test_digit_fractions() {
        for n in 1..=9 {
            for d in 2..=8 {
                let input = format!(r"\frac{{{}}}{{{}}}", n, d);
                let expected = match expected_glyph(n, d) {
                    Some(glyph) => glyph.to_string(),
                    None => format!("{}/{}", n, d),
                };
                assert_eq!(convert(&input), expected, "input: {}", input);
            }
        }
    }

    #[test]
    fn test_fraction_aliases() {
        assert_eq!(convert(r"\dfrac{3}{4}"), "¾");
        assert_eq!(convert(r"\tfrac{a}{b}"), "a/b");
    }

    #[test]
    fn test_fraction_with_greek() {
        assert_eq!(convert(r"\frac{\pi}{2}"), "π/2");
    }

    #[test]
    fn test_malformed_fraction_kept() {
        assert_eq!(convert(r"\frac{a}{b"), r"\frac{a}{b");
    }
}

// ============================================================================
// Leniency
// ============================================================================

mod lenient {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unmappable_script_keeps_marker() {
        assert_eq!(convert("x^q"), "x^q");
        assert_eq!(convert(r"\sum_i"), "∑_i");
    }

    #[test]
    fn test_unterminated_group() {
        assert_eq!(convert("a^2 b^{3"), "a² b^{3");
    }

    #[test]
    fn test_conversion_is_stable() {
        for input in ["x^q", r"\int_{0}^{\infty}", "a^§", r"\notacommand"] {
            let once = convert(input);
            assert_eq!(convert(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_math_delimiters_stripped() {
        assert_eq!(convert("$x^2$"), "x²");
        assert_eq!(convert(r"\[\alpha\]"), "α");
        assert_eq!(convert("$a$ and $b$"), "$a$ and $b$");
    }
}

// ============================================================================
// Reports and listings
// ============================================================================

mod report {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_matches_plain_conversion() {
        let input = r"\mathbf{v} = x^q + \alpha";
        let converted = latex_to_unicode_with_report(input);
        assert_eq!(converted.content, convert(input));
        assert_eq!(converted.report.source_lang, "latex");
        assert_eq!(converted.report.target_lang, "unicode");
        assert_eq!(converted.report.losses.len(), 2);
    }

    #[test]
    fn test_report_serializes() {
        let converted = latex_to_unicode_with_report(r"\foo");
        let json = serde_json::to_value(&converted.report).unwrap();
        assert_eq!(json["losses"][0]["kind"], "unknown-command");
        assert_eq!(json["losses"][0]["name"], "foo");
    }

    #[test]
    fn test_every_listed_symbol_converts() {
        for class in SymbolClass::ALL {
            for (name, glyph) in symbols_in(class) {
                let input = format!("\\{}", name);
                assert_eq!(convert(&input), glyph, "input: {}", input);
            }
        }
    }
}
