//!
//! ## Section splitting
//!
//! A grammar file is read line by line and dealt into its
//! four sections, delimited by `%{`, `%}` and `%%` lines
//! (each ended by a newline):
//!
//! ```text
//! %{
//! prologue
//! %}
//! declarations
//! %%
//! rules
//! %%
//! epilogue
//! ```
//!

use std::fmt::Formatter;

use crate::{common::physical_lines, BisonRef};

use super::LexError;

const PROLOGUE_OPEN: &str = "%{";
const PROLOGUE_CLOSE: &str = "%}";
const SECTION_BREAK: &str = "%%";

///
/// One physical line of a section, with its
/// (1-based) line number in the grammar file.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionLine {
    text: String,
    line: usize,
}

impl SectionLine {
    pub fn new(text: impl ToString, line: usize) -> Self {
        Self {
            text: text.to_string(),
            line,
        }
    }

    ///
    /// The line as written, terminator included.
    ///
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

///
/// The four sections of a grammar file.
///
#[BisonRef("Grammar-Outline", "Outline of a Bison Grammar")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Prologue,
    BisonDeclarations,
    GrammarRules,
    Epilogue,
}

///
/// Where the splitter is in the file.
///
/// States are only ever left for the next one, in declaration order.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SplitState {
    ///
    /// Before `%{`: lines are dropped.
    ///
    Initial,
    Prologue,
    BisonDeclarations,
    GrammarRules,

    ///
    /// After the second `%%`: takes every remaining line.
    ///
    Epilogue,
}

impl SplitState {
    pub fn name(&self) -> &'static str {
        match self {
            SplitState::Initial => "Initial",
            SplitState::Prologue => "Prologue",
            SplitState::BisonDeclarations => "BisonDeclarations",
            SplitState::GrammarRules => "GrammarRules",
            SplitState::Epilogue => "Epilogue",
        }
    }

    ///
    /// The state that follows this one.
    ///
    pub fn advance(self) -> Result<Self, LexError> {
        match self {
            SplitState::Initial => Ok(SplitState::Prologue),
            SplitState::Prologue => Ok(SplitState::BisonDeclarations),
            SplitState::BisonDeclarations => Ok(SplitState::GrammarRules),
            SplitState::GrammarRules => Ok(SplitState::Epilogue),
            SplitState::Epilogue => Err(LexError::UnreachableState { state: self.name() }),
        }
    }
}

impl std::fmt::Display for SplitState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

///
/// A grammar file, dealt into sections.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sections {
    pub prologue: Vec<SectionLine>,
    pub bison_declarations: Vec<SectionLine>,
    pub grammar_rules: Vec<SectionLine>,
    pub epilogue: Vec<SectionLine>,
}

impl Sections {
    pub fn get(&self, section: Section) -> &[SectionLine] {
        match section {
            Section::Prologue => &self.prologue,
            Section::BisonDeclarations => &self.bison_declarations,
            Section::GrammarRules => &self.grammar_rules,
            Section::Epilogue => &self.epilogue,
        }
    }
}

///
/// Is this line exactly `delimiter` and its newline?
///
/// A final delimiter with no newline after it is an ordinary line.
///
fn is_delimiter(line: &str, delimiter: &str) -> bool {
    line.strip_suffix('\n') == Some(delimiter)
}

///
/// Deal the lines of `text` into their sections.
///
pub fn split(text: &str) -> Result<Sections, LexError> {
    let mut sections = Sections::default();
    let mut state = SplitState::Initial;

    for (lineno, line) in physical_lines(text) {
        match state {
            SplitState::Initial => {
                if is_delimiter(line, PROLOGUE_OPEN) {
                    state = state.advance()?;
                    sections.prologue.push(SectionLine::new("", lineno));
                }
            }
            SplitState::Prologue => {
                if is_delimiter(line, PROLOGUE_CLOSE) {
                    state = state.advance()?;
                    sections.prologue.push(SectionLine::new("", lineno));
                    continue;
                }

                sections.prologue.push(SectionLine::new(line, lineno));
            }
            SplitState::BisonDeclarations => {
                if is_delimiter(line, SECTION_BREAK) {
                    state = state.advance()?;
                    continue;
                }

                sections.bison_declarations.push(SectionLine::new(line, lineno));
            }
            SplitState::GrammarRules => {
                if is_delimiter(line, SECTION_BREAK) {
                    state = state.advance()?;
                    continue;
                }

                sections.grammar_rules.push(SectionLine::new(line, lineno));
            }
            SplitState::Epilogue => {
                sections.epilogue.push(SectionLine::new(line, lineno));
            }
        }
    }

    tracing::debug!(
        state = %state,
        prologue = sections.prologue.len(),
        bison_declarations = sections.bison_declarations.len(),
        grammar_rules = sections.grammar_rules.len(),
        epilogue = sections.epilogue.len(),
        "split sections"
    );

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::lexing::LexError;

    use super::{split, SectionLine, SplitState};

    fn lines(entries: &[(&str, usize)]) -> Vec<SectionLine> {
        entries
            .iter()
            .map(|&(text, line)| SectionLine::new(text, line))
            .collect()
    }

    #[test]
    fn all_sections() {
        let sections = split("%{\nfoo\n%}\n%token X\n%%\nrule: x;\n%%\nint main;\n").unwrap();

        assert_eq!(sections.prologue, lines(&[("", 1), ("foo\n", 2), ("", 3)]));
        assert_eq!(sections.bison_declarations, lines(&[("%token X\n", 4)]));
        assert_eq!(sections.grammar_rules, lines(&[("rule: x;\n", 6)]));
        assert_eq!(sections.epilogue, lines(&[("int main;\n", 8)]));
    }

    #[test]
    fn lines_before_prologue_are_dropped() {
        let sections = split("junk\n%{\n%}\n%%\n%%\n").unwrap();

        assert_eq!(sections.prologue, lines(&[("", 2), ("", 3)]));
        assert!(sections.bison_declarations.is_empty());
        assert!(sections.grammar_rules.is_empty());
        assert!(sections.epilogue.is_empty());
    }

    #[test]
    fn delimiters_must_be_exact() {
        let sections = split("%{\n %}\n%}\n%% \n%%\n").unwrap();

        assert_eq!(sections.prologue, lines(&[("", 1), (" %}\n", 2), ("", 3)]));
        assert_eq!(sections.bison_declarations, lines(&[("%% \n", 4)]));
    }

    #[test]
    fn later_breaks_belong_to_the_epilogue() {
        let sections = split("%{\n%}\n%%\n%%\n%%\n%}\n").unwrap();
        assert_eq!(sections.epilogue, lines(&[("%%\n", 5), ("%}\n", 6)]));
    }

    #[test]
    fn delimiters_need_their_newline() {
        let sections = split("%{\n%}\n%%\nr: x;\n%%").unwrap();
        assert_eq!(
            sections.grammar_rules,
            lines(&[("r: x;\n", 4), ("%%", 5)])
        );
        assert!(sections.epilogue.is_empty());

        let sections = split("%{").unwrap();
        assert!(sections.prologue.is_empty());
    }

    #[test]
    fn states_only_go_forward() {
        let mut state = SplitState::Initial;
        for _ in 0..4 {
            state = state.advance().unwrap();
        }

        assert_eq!(state, SplitState::Epilogue);
        assert_eq!(
            state.advance(),
            Err(LexError::UnreachableState { state: "Epilogue" })
        );
    }
}
