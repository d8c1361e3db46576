//! Fixed tag to formatting-action table.

/// Fill character and width re-applied after every line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndentSpec {
    pub fill: Option<char>,
    pub width: usize,
}

impl IndentSpec {
    pub const NONE: Self = Self {
        fill: None,
        width: 0,
    };

    /// One tab, used by paragraphs, code and the title block.
    pub const TAB: Self = Self {
        fill: Some('\t'),
        width: 1,
    };

    pub const fn new(fill: char, width: usize) -> Self {
        Self {
            fill: Some(fill),
            width,
        }
    }

    /// The fill character, only when something would actually be emitted.
    pub fn fill_char(&self) -> Option<char> {
        self.fill.filter(|_| self.width > 0)
    }

    pub fn is_noop(&self) -> bool {
        self.fill_char().is_none()
    }
}

/// Formatting action for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleRule {
    /// Written verbatim before the element's children.
    pub prefix: &'static str,
    pub indent: IndentSpec,
}

impl StyleRule {
    const fn prefixed(prefix: &'static str) -> Self {
        Self {
            prefix,
            indent: IndentSpec::NONE,
        }
    }
}

const RULES: &[(&str, StyleRule)] = &[
    (
        "h1",
        StyleRule {
            prefix: "README(7)\n\nNAME\n",
            indent: IndentSpec::TAB,
        },
    ),
    ("h2", StyleRule::prefixed("\n")),
    ("h3", StyleRule::prefixed("\n   ")),
    ("h4", StyleRule::prefixed("\n      SECTION: ")),
    ("h5", StyleRule::prefixed("\n         SUB SECTION: ")),
    ("h6", StyleRule::prefixed("\n            POINT: ")),
    (
        "code",
        StyleRule {
            prefix: "",
            indent: IndentSpec::TAB,
        },
    ),
];

/// Parent tag whose text children are block indented.
const INDENTED_TEXT_PARENT: &str = "p";

/// Immutable style lookup shared by the whole process.
#[derive(Debug, Clone, Copy)]
pub struct StyleTable {
    rules: &'static [(&'static str, StyleRule)],
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl StyleTable {
    pub const STANDARD: Self = Self { rules: RULES };

    /// Rule for an element. Unknown tags get an empty prefix and no indent.
    pub fn resolve(&self, tag: &str) -> StyleRule {
        self.rules
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, rule)| *rule)
            .unwrap_or_default()
    }

    /// Indent for a text run whose parent element is `parent`.
    ///
    /// Only paragraph text is indented; text under any other parent, `code`
    /// and `h1` included, is written flush.
    pub fn text_indent(&self, parent: Option<&str>) -> IndentSpec {
        match parent {
            Some(INDENTED_TEXT_PARENT) => IndentSpec::TAB,
            _ => IndentSpec::NONE,
        }
    }
}
