//! LaTeX command names whose HwpEqn spelling differs.
//!
//! HwpEqn borrows most LaTeX names verbatim (`alpha`, `times`, `sum`), so
//! only the exceptions are listed. Names not found here pass through.

use phf::phf_map;

static HWPEQN_OVERRIDES: phf::Map<&'static str, &'static str> = phf_map! {
    // Relations and operators
    "infty" => "inf",
    "leq" => "<=",
    "le" => "<=",
    "geq" => ">=",
    "ge" => ">=",
    "neq" => "!=",
    "ne" => "!=",
    "pm" => "+-",
    "mp" => "-+",
    "dots" => "cdots",
    // Arrows
    "to" => "->",
    "rightarrow" => "->",
    "leftarrow" => "<-",
    "gets" => "<-",
    "leftrightarrow" => "<->",
    "Rightarrow" => "RARROW",
    "implies" => "RARROW",
    "Leftarrow" => "LARROW",
    "Leftrightarrow" => "LRARROW",
    "iff" => "LRARROW",
    // Logic
    "exists" => "exist",
    "neg" => "lnot",
    "land" => "wedge",
    "lor" => "vee",
    // Fonts
    "mathrm" => "rm",
    "text" => "rm",
    "textrm" => "rm",
    "operatorname" => "rm",
    "mathbf" => "bold",
    "textbf" => "bold",
    "mathit" => "it",
    "textit" => "it",
    // Control symbols
    "," => "`",
    ";" => "~",
    ":" => "~",
    " " => "~",
    "quad" => "~~",
    "qquad" => "~~~~",
    "!" => "",
    "\\" => "#",
    "{" => "lbrace",
    "}" => "rbrace",
    "%" => "%",
    "&" => "&",
    "_" => "_",
    "#" => "#",
};

/// The HwpEqn keyword for a LaTeX command name.
pub fn hwpeqn_keyword(name: &str) -> &str {
    HWPEQN_OVERRIDES.get(name).copied().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_names_pass_through() {
        assert_eq!(hwpeqn_keyword("alpha"), "alpha");
        assert_eq!(hwpeqn_keyword("times"), "times");
        assert_eq!(hwpeqn_keyword("sqrt"), "sqrt");
    }

    #[test]
    fn test_overrides() {
        assert_eq!(hwpeqn_keyword("infty"), "inf");
        assert_eq!(hwpeqn_keyword("leq"), "<=");
        assert_eq!(hwpeqn_keyword("mathrm"), "rm");
        assert_eq!(hwpeqn_keyword("\\"), "#");
        assert_eq!(hwpeqn_keyword("!"), "");
    }
}
