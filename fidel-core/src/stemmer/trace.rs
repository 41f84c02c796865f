//! Step-by-step record of how one word was stemmed.

use core::fmt;

use fidel_types::Affix;

use crate::morphology::{Applied, InfixRule};
use crate::script::WordForm;

/// One change and the word form it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    /// An affix was cut off.
    Stripped {
        /// Which end.
        affix: Affix,
        /// Affix in Ge'ez.
        morpheme: String,
        /// Affix in Latin.
        latin: String,
        /// Word after the cut.
        form: WordForm,
    },
    /// An infix rule rewrote the word.
    Rewritten {
        /// The rule.
        rule: InfixRule,
        /// Word after the rewrite.
        form: WordForm,
    },
}

impl TraceStep {
    pub(crate) fn new(applied: &Applied<'_>, form: &WordForm) -> Self {
        let form = form.clone();
        match *applied {
            Applied::Suffix(m) => TraceStep::Stripped {
                affix: Affix::Suffix,
                morpheme: m.source().to_string(),
                latin: m.latin().to_string(),
                form,
            },
            Applied::Prefix(m) => TraceStep::Stripped {
                affix: Affix::Prefix,
                morpheme: m.source().to_string(),
                latin: m.latin().to_string(),
                form,
            },
            Applied::Infix(rule) => TraceStep::Rewritten { rule, form },
        }
    }

    /// Word form after this step.
    pub fn form(&self) -> &WordForm {
        match self {
            TraceStep::Stripped { form, .. } | TraceStep::Rewritten { form, .. } => form,
        }
    }
}

/// Full history of one [`Stemmer::trace_word`](super::Stemmer::trace_word) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemTrace {
    /// Input word.
    pub word: String,
    /// `true` if the exception lexicon answered and no rules ran.
    pub lexicon_hit: bool,
    /// Romanized input, before any stripping.
    pub transcribed: WordForm,
    /// Changes in the order they were made.
    pub steps: Vec<TraceStep>,
    /// Final stem.
    pub stem: String,
}

impl fmt::Display for StemTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} -> {}", self.word, self.stem)?;

        if self.lexicon_hit {
            return writeln!(f, "  lexicon   {}", self.stem);
        }

        writeln!(f, "  forward   {}", self.transcribed)?;
        for step in &self.steps {
            match step {
                TraceStep::Stripped {
                    affix,
                    morpheme,
                    latin,
                    form,
                } => writeln!(f, "  {affix:<9} {morpheme} ({latin}) -> {form}")?,
                TraceStep::Rewritten { rule, form } => {
                    writeln!(f, "  infix     {rule} -> {form}")?
                }
            }
        }
        writeln!(f, "  reverse   {}", self.stem)
    }
}
