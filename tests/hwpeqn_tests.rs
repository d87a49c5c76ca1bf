//! Integration tests for LaTeX → HwpEqn conversion

use hwpmath::{
    convert_dialect, decode, latex_to_hwpeqn, latex_to_hwpeqn_or_passthrough,
    latex_to_hwpeqn_with_report, parse_expression, tokenize, Dialect, ErrorKind, Expr, LossKind,
    ParseError, MAX_NESTING,
};

fn to_hwpeqn(latex: &str) -> String {
    latex_to_hwpeqn(latex).unwrap()
}

mod encoding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fraction() {
        assert_eq!(to_hwpeqn(r"\frac{a}{b}"), "{a} over {b}");
        assert_eq!(to_hwpeqn(r"\frac12"), "{1} over {2}");
        assert_eq!(to_hwpeqn(r"\dfrac{x+1}{2}"), "{x+1} over {2}");
    }

    #[test]
    fn test_nested_fraction() {
        assert_eq!(
            to_hwpeqn(r"\frac{\frac{a}{b}}{c}"),
            "{{a} over {b}} over {c}"
        );
    }

    #[test]
    fn test_scripts() {
        assert_eq!(to_hwpeqn("x^2 + y^2 = z^2"), "x^{2} + y^{2} = z^{2}");
        assert_eq!(to_hwpeqn("a_{n+1}"), "a_{n+1}");
        assert_eq!(to_hwpeqn(r"\int_0^1 f(x) dx"), "int_{0}^{1} f(x) dx");
    }

    #[test]
    fn test_commands_become_keywords() {
        assert_eq!(to_hwpeqn(r"\alpha + \beta"), "alpha + beta");
        assert_eq!(to_hwpeqn(r"a \times b"), "a times b");
        assert_eq!(to_hwpeqn(r"\sqrt{x+1}"), "sqrt {x+1}");
    }

    #[test]
    fn test_keyword_overrides() {
        assert_eq!(to_hwpeqn(r"x \leq \infty"), "x <= inf");
        assert_eq!(to_hwpeqn(r"a \neq b"), "a != b");
        assert_eq!(to_hwpeqn(r"x \to 0"), "x -> 0");
    }

    #[test]
    fn test_delimiters_and_whitespace() {
        assert_eq!(to_hwpeqn("  $$x^2$$  "), "x^{2}");
        assert_eq!(to_hwpeqn(""), "");
    }
}

mod composition {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matches_pipeline_stages() {
        let source = "x^2 + y^2 = z^2";
        let tree = parse_expression(tokenize(source, Dialect::Latex), Dialect::Latex).unwrap();
        assert_eq!(decode(&tree, Dialect::HwpEqn), to_hwpeqn(source));
    }

    #[test]
    fn test_encoded_output_is_stable() {
        for latex in [
            r"\frac{a}{b}",
            "x^2 + y^2 = z^2",
            r"\alpha + \beta",
            r"\int_0^1 f(x) dx",
            r"\sqrt{x+1}",
            r"\frac{\frac{a}{b}}{c}",
        ] {
            let encoded = to_hwpeqn(latex);
            let again = convert_dialect(&encoded, Dialect::HwpEqn, Dialect::HwpEqn).unwrap();
            assert_eq!(again, encoded, "input: {}", latex);
        }
    }

    #[test]
    fn test_latex_normalisation() {
        assert_eq!(
            convert_dialect(r"\frac ab + \alpha^2", Dialect::Latex, Dialect::Latex).unwrap(),
            r"\frac{a}{b} + \alpha^{2}"
        );
    }

    #[test]
    fn test_tree_shape() {
        let tree = parse_expression(tokenize(r"\frac{a}{b}", Dialect::Latex), Dialect::Latex)
            .unwrap();
        assert_eq!(
            tree,
            Expr::sequence(vec![Expr::fraction(Expr::literal("a"), Expr::literal("b"))])
        );
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unbalanced_braces_are_reported() {
        assert_eq!(
            latex_to_hwpeqn(r"\frac{a}{b").unwrap_err(),
            ParseError::new(ErrorKind::UnbalancedBraces, 8)
        );
        assert_eq!(
            latex_to_hwpeqn("a}b").unwrap_err().kind,
            ErrorKind::UnexpectedClosingBrace
        );
    }

    #[test]
    fn test_passthrough_keeps_original() {
        assert_eq!(latex_to_hwpeqn_or_passthrough(r"\frac{a}{b"), r"\frac{a}{b");
        assert_eq!(latex_to_hwpeqn_or_passthrough("x^"), "x^");
        assert_eq!(latex_to_hwpeqn_or_passthrough(r"\frac{a}{b}"), "{a} over {b}");
    }

    #[test]
    fn test_error_message() {
        let err = latex_to_hwpeqn("x^").unwrap_err();
        assert_eq!(err.to_string(), "missing argument at offset 1");
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let braces = format!("{}x{}", "{".repeat(50_000), "}".repeat(50_000));
        assert_eq!(latex_to_hwpeqn(&braces).unwrap_err().kind, ErrorKind::NestingTooDeep);

        let fractions = format!("{}1 2", r"\frac".repeat(50_000));
        assert_eq!(latex_to_hwpeqn_or_passthrough(&fractions), fractions);

        let chain = format!("x{}", "^2".repeat(50_000));
        assert_eq!(latex_to_hwpeqn(&chain).unwrap_err().kind, ErrorKind::NestingTooDeep);
    }

    #[test]
    fn test_nesting_below_limit_converts() {
        let depth = MAX_NESTING / 4;
        let source = format!("{}a{}", r"\frac{".repeat(depth), "}{b}".repeat(depth));
        let output = to_hwpeqn(&source);
        assert!(output.starts_with("{{"));
        assert!(output.ends_with("over {b}"));
    }

    #[test]
    fn test_report_lists_parse_failure() {
        let converted = latex_to_hwpeqn_with_report(r"\frac{a}{b");
        assert_eq!(converted.content, r"\frac{a}{b");
        assert_eq!(converted.report.losses.len(), 1);
        assert!(matches!(converted.report.losses[0].kind, LossKind::ParseError));
        assert_eq!(converted.report.losses[0].snippet.as_deref(), Some("{b"));
        assert!(!converted.report.warnings.is_empty());
    }
}
