//! Static LaTeX command → Unicode symbol table
//!
//! Each semantic class is its own compile-time map. Keys are command names
//! without the leading backslash and are unique across all classes.

use phf::phf_map;

/// Semantic class of a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    GreekLower,
    GreekUpper,
    BinaryOperator,
    Relation,
    SetOperator,
    Arrow,
    Calculus,
    Logic,
    Misc,
}

impl SymbolClass {
    pub const ALL: [SymbolClass; 9] = [
        SymbolClass::GreekLower,
        SymbolClass::GreekUpper,
        SymbolClass::BinaryOperator,
        SymbolClass::Relation,
        SymbolClass::SetOperator,
        SymbolClass::Arrow,
        SymbolClass::Calculus,
        SymbolClass::Logic,
        SymbolClass::Misc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SymbolClass::GreekLower => "Greek letters (lowercase)",
            SymbolClass::GreekUpper => "Greek letters (uppercase)",
            SymbolClass::BinaryOperator => "Math operators",
            SymbolClass::Relation => "Relations",
            SymbolClass::SetOperator => "Sets",
            SymbolClass::Arrow => "Arrows",
            SymbolClass::Calculus => "Calculus",
            SymbolClass::Logic => "Logic",
            SymbolClass::Misc => "Other",
        }
    }

    pub fn is_greek(self) -> bool {
        matches!(self, SymbolClass::GreekLower | SymbolClass::GreekUpper)
    }

    fn table(self) -> &'static phf::Map<&'static str, &'static str> {
        match self {
            SymbolClass::GreekLower => &GREEK_LOWERCASE,
            SymbolClass::GreekUpper => &GREEK_UPPERCASE,
            SymbolClass::BinaryOperator => &BINARY_OPERATORS,
            SymbolClass::Relation => &RELATIONS,
            SymbolClass::SetOperator => &SET_OPERATORS,
            SymbolClass::Arrow => &ARROWS,
            SymbolClass::Calculus => &CALCULUS,
            SymbolClass::Logic => &LOGIC,
            SymbolClass::Misc => &MISC,
        }
    }
}

static GREEK_LOWERCASE: phf::Map<&'static str, &'static str> = phf_map! {
    "alpha" => "α", "beta" => "β", "gamma" => "γ", "delta" => "δ",
    "epsilon" => "ε", "varepsilon" => "ε", "zeta" => "ζ", "eta" => "η",
    "theta" => "θ", "vartheta" => "ϑ", "iota" => "ι", "kappa" => "κ",
    "lambda" => "λ", "mu" => "μ", "nu" => "ν", "xi" => "ξ",
    "omicron" => "ο", "pi" => "π", "varpi" => "ϖ", "rho" => "ρ",
    "varrho" => "ϱ", "sigma" => "σ", "varsigma" => "ς", "tau" => "τ",
    "upsilon" => "υ", "phi" => "φ", "varphi" => "ϕ", "chi" => "χ",
    "psi" => "ψ", "omega" => "ω",
};

static GREEK_UPPERCASE: phf::Map<&'static str, &'static str> = phf_map! {
    "Alpha" => "Α", "Beta" => "Β", "Gamma" => "Γ", "Delta" => "Δ",
    "Epsilon" => "Ε", "Zeta" => "Ζ", "Eta" => "Η", "Theta" => "Θ",
    "Iota" => "Ι", "Kappa" => "Κ", "Lambda" => "Λ", "Mu" => "Μ",
    "Nu" => "Ν", "Xi" => "Ξ", "Omicron" => "Ο", "Pi" => "Π",
    "Rho" => "Ρ", "Sigma" => "Σ", "Tau" => "Τ", "Upsilon" => "Υ",
    "Phi" => "Φ", "Chi" => "Χ", "Psi" => "Ψ", "Omega" => "Ω",
};

static BINARY_OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "times" => "×",
    "div" => "÷",
    "pm" => "±",
    "mp" => "∓",
    "cdot" => "·",
    "ast" => "∗",
    "star" => "⋆",
    "circ" => "∘",
    "bullet" => "•",
    "oplus" => "⊕",
    "ominus" => "⊖",
    "otimes" => "⊗",
    "odot" => "⊙",
};

static RELATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "leq" => "≤",
    "le" => "≤",
    "geq" => "≥",
    "ge" => "≥",
    "neq" => "≠",
    "ne" => "≠",
    "approx" => "≈",
    "equiv" => "≡",
    "sim" => "∼",
    "simeq" => "≃",
    "cong" => "≅",
    "propto" => "∝",
    "ll" => "≪",
    "gg" => "≫",
    "parallel" => "∥",
    "perp" => "⊥",
};

static SET_OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "in" => "∈",
    "notin" => "∉",
    "ni" => "∋",
    "subset" => "⊂",
    "supset" => "⊃",
    "subseteq" => "⊆",
    "supseteq" => "⊇",
    "cup" => "∪",
    "cap" => "∩",
    "setminus" => "∖",
    "emptyset" => "∅",
    "varnothing" => "∅",
};

static ARROWS: phf::Map<&'static str, &'static str> = phf_map! {
    "rightarrow" => "→",
    "to" => "→",
    "leftarrow" => "←",
    "gets" => "←",
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "leftrightarrow" => "↔",
    "Leftrightarrow" => "⇔",
    "uparrow" => "↑",
    "downarrow" => "↓",
    "mapsto" => "↦",
    "implies" => "⟹",
    "iff" => "⟺",
};

static CALCULUS: phf::Map<&'static str, &'static str> = phf_map! {
    "partial" => "∂",
    "nabla" => "∇",
    "infty" => "∞",
    "int" => "∫",
    "iint" => "∬",
    "iiint" => "∭",
    "oint" => "∮",
    "sum" => "∑",
    "prod" => "∏",
    "coprod" => "∐",
    "sqrt" => "√",
};

static LOGIC: phf::Map<&'static str, &'static str> = phf_map! {
    "land" => "∧",
    "wedge" => "∧",
    "lor" => "∨",
    "vee" => "∨",
    "neg" => "¬",
    "lnot" => "¬",
    "forall" => "∀",
    "exists" => "∃",
    "nexists" => "∄",
    "therefore" => "∴",
    "because" => "∵",
};

static MISC: phf::Map<&'static str, &'static str> = phf_map! {
    "angle" => "∠",
    "triangle" => "△",
    "degree" => "°",
    "prime" => "′",
    "hbar" => "ℏ",
    "ell" => "ℓ",
    "aleph" => "ℵ",
    "Re" => "ℜ",
    "Im" => "ℑ",
    "cdots" => "⋯",
    "ldots" => "…",
    "dots" => "…",
    "vdots" => "⋮",
    "ddots" => "⋱",
};

/// Look up a command name (without the backslash). Exact, case-sensitive.
pub fn lookup(name: &str) -> Option<&'static str> {
    lookup_entry(name).map(|(_, glyph)| glyph)
}

/// Look up a command name and report which class it belongs to.
pub fn lookup_entry(name: &str) -> Option<(SymbolClass, &'static str)> {
    SymbolClass::ALL
        .iter()
        .find_map(|class| class.table().get(name).map(|glyph| (*class, *glyph)))
}

/// All entries of one class, sorted by command name.
pub fn symbols_in(class: SymbolClass) -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<_> = class.table().entries().map(|(k, v)| (*k, *v)).collect();
    entries.sort_unstable();
    entries
}
