//! The stemming pipeline.
//!
//! For every token of normalized text:
//!
//! ```text
//! exception lexicon hit? ── yes ──> stored stem
//!        │ no
//!        v
//! forward ─> suffix ─> prefix ─> infix ─> reverse
//! ```
//!
//! [`StemmerTables`] holds the prepared tables and is shared; a [`Stemmer`]
//! adds an [`ExceptionLexicon`] and a [`StemmerConfig`] on top. Nothing in the
//! per-word path can fail: unknown graphemes are skipped and undecodable
//! Latin is dropped, so the worst case is an empty stem.

pub mod exceptions;
pub mod stats;
pub mod tables;
pub mod trace;

pub use exceptions::{ExceptionLexicon, MapLexicon, NoExceptions};
pub use stats::StemStats;
pub use tables::StemmerTables;
pub use trace::{StemTrace, TraceStep};

use std::sync::Arc;

use rayon::prelude::*;
use serde_json::Value;
use tracing::trace;

use fidel_types::{StemmerConfig, TableError};

use crate::analyzer::tokenizer::Tokenizer;
use crate::morphology::{strip_infix, strip_prefix, strip_suffix, Applied};
use crate::script::WordForm;

/// Amharic stemmer.
///
/// Cheap to clone when `L` is; the tables are behind an [`Arc`].
///
/// # Examples
///
/// ```
/// use fidel_core::stemmer::Stemmer;
///
/// let stemmer = Stemmer::standard().unwrap();
/// assert_eq!(stemmer.stem_word("እሰብኦች"), "ሰብ");
/// assert_eq!(stemmer.stem_text("ተማሪዎች እና ቤቶች።"), "ተማሪ ቤት");
/// ```
#[derive(Debug, Clone)]
pub struct Stemmer<L = NoExceptions> {
    tables: Arc<StemmerTables>,
    lexicon: L,
    config: StemmerConfig,
}

impl Stemmer<NoExceptions> {
    /// Stemmer over the built-in tables, with no exception lexicon and the
    /// default configuration.
    ///
    /// # Errors
    ///
    /// See [`StemmerTables::standard`].
    pub fn standard() -> Result<Self, TableError> {
        Ok(Self::new(StemmerTables::standard()?, NoExceptions))
    }
}

impl<L: ExceptionLexicon> Stemmer<L> {
    /// Creates a stemmer with the default configuration.
    pub fn new(tables: Arc<StemmerTables>, lexicon: L) -> Self {
        Self {
            tables,
            lexicon,
            config: StemmerConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: StemmerConfig) -> Self {
        self.config = config;
        self
    }

    /// Swaps the exception lexicon, keeping tables and configuration.
    pub fn with_lexicon<M: ExceptionLexicon>(self, lexicon: M) -> Stemmer<M> {
        Stemmer {
            tables: self.tables,
            lexicon,
            config: self.config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Shared tables.
    pub fn tables(&self) -> &Arc<StemmerTables> {
        &self.tables
    }

    /// Exception lexicon.
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Runs the enabled strippers on `form`, reporting each change.
    fn strip<'s, F>(&'s self, form: &mut WordForm, mut on_applied: F)
    where
        F: FnMut(Applied<'s>, &WordForm),
    {
        let config = &self.config;

        if config.strip_suffixes && form.graphemes() >= config.suffix_min_graphemes {
            if let Some(suffix) = strip_suffix(form, self.tables.suffixes()) {
                trace!(suffix = suffix.latin(), latin = %form.latin, "suffix stripped");
                on_applied(Applied::Suffix(suffix), form);
            }
        }

        if config.strip_prefixes && form.graphemes() >= config.prefix_min_graphemes {
            if let Some(prefix) = strip_prefix(form, self.tables.prefixes()) {
                trace!(prefix = prefix.latin(), latin = %form.latin, "prefix stripped");
                on_applied(Applied::Prefix(prefix), form);
            }
        }

        if config.strip_infixes && form.graphemes() >= config.infix_min_graphemes {
            let placeholder = self.tables.transliteration().placeholder();
            if let Some(rule) = strip_infix(form, placeholder) {
                trace!(%rule, latin = %form.latin, "infix rewritten");
                on_applied(Applied::Infix(rule), form);
            }
        }
    }

    /// Stems one word, reporting lexicon hits and pipeline changes.
    fn stem_word_with<'s, F>(&'s self, word: &str, on_applied: F) -> (String, bool)
    where
        F: FnMut(Applied<'s>, &WordForm),
    {
        if let Some(stem) = self.lexicon.lookup(word).filter(|stem| !stem.is_empty()) {
            return (stem.to_string(), true);
        }

        let table = self.tables.transliteration();
        let mut form = table.forward(word);
        self.strip(&mut form, on_applied);
        (table.reverse(&form), false)
    }

    /// Stems a single word.
    ///
    /// The word is not normalized. A non-empty exception lexicon hit is
    /// returned as stored; otherwise the rules run and the result may be
    /// empty.
    pub fn stem_word(&self, word: &str) -> String {
        self.stem_word_with(word, |_, _| {}).0
    }

    /// Normalizes `text` and stems every word, joining the non-empty stems
    /// with single spaces.
    pub fn stem_text(&self, text: &str) -> String {
        self.stem_text_with_stats(text).0
    }

    /// [`stem_text`](Self::stem_text) plus counters for what happened.
    pub fn stem_text_with_stats(&self, text: &str) -> (String, StemStats) {
        let mut stats = StemStats::default();
        if text.is_empty() {
            return (String::new(), stats);
        }

        let normalized = self.tables.normalizer().normalize(text);
        let mut out = String::with_capacity(normalized.len());

        Tokenizer::new().tokenize(&normalized, |token, _| {
            stats.tokens += 1;
            let (stem, from_lexicon) = self.stem_word_with(token, |applied, _| stats.record(&applied));
            if from_lexicon {
                stats.lexicon_hits += 1;
            }
            if stem.is_empty() {
                stats.empty_stems += 1;
                return;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&stem);
        });

        (out, stats)
    }

    /// Stems the text payload of a request body.
    ///
    /// Anything other than a JSON string (null, numbers, objects) yields an
    /// empty result rather than an error.
    pub fn stem_value(&self, value: &Value) -> String {
        value
            .as_str()
            .map_or_else(String::new, |text| self.stem_text(text))
    }

    /// Stems one word and records every intermediate form.
    pub fn trace_word(&self, word: &str) -> StemTrace {
        let transcribed = self.tables.transliteration().forward(word);
        let mut steps = Vec::new();
        let (stem, lexicon_hit) =
            self.stem_word_with(word, |applied, form| steps.push(TraceStep::new(&applied, form)));

        StemTrace {
            word: word.to_string(),
            lexicon_hit,
            transcribed,
            steps,
            stem,
        }
    }
}

impl<L: ExceptionLexicon + Sync> Stemmer<L> {
    /// Stems many texts in parallel. Output order matches input order.
    pub fn stem_batch(&self, texts: &[&str]) -> Vec<String> {
        texts.par_iter().map(|text| self.stem_text(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::fixtures::{random_word, Lcg};
    use crate::morphology::InfixRule;
    use fidel_types::Affix;
    use serde_json::json;

    fn stemmer() -> Stemmer {
        Stemmer::standard().unwrap()
    }

    #[test]
    fn worked_example() {
        let trace = stemmer().trace_word("እሰብኦች");
        assert_eq!(trace.transcribed, WordForm::new("Iseboc", &[1, 2, 1, 1, 1]));
        assert_eq!(trace.steps.len(), 2);
        assert!(matches!(
            &trace.steps[0],
            TraceStep::Stripped { affix: Affix::Suffix, latin, .. } if latin == "oc"
        ));
        assert_eq!(trace.steps[0].form(), &WordForm::new("Iseb", &[1, 2, 1]));
        assert!(matches!(
            &trace.steps[1],
            TraceStep::Stripped { affix: Affix::Prefix, latin, .. } if latin == "I"
        ));
        assert_eq!(trace.steps[1].form(), &WordForm::new("seb", &[2, 1]));
        assert_eq!(trace.stem, "ሰብ");
        assert!(!trace.lexicon_hit);
    }

    #[test]
    fn plural_and_possessive_suffixes() {
        let s = stemmer();
        assert_eq!(s.stem_word("ልጆች"), "ልጅ");
        assert_eq!(s.stem_word("ቤቶች"), "ቤት");
        assert_eq!(s.stem_word("ተማሪዎች"), "ተማሪ");
        assert_eq!(s.stem_word("መጽሐፎቹን"), "መጽሐፍ");
        assert_eq!(s.stem_word("ወንድሞቻችን"), "ወንድም");
    }

    #[test]
    fn prefix_and_suffix_together() {
        let s = stemmer();
        assert_eq!(s.stem_word("በቤታችን"), "ቤት");
        assert_eq!(s.stem_word("እንደሰበረ"), "ሰበረ");
        assert_eq!(s.stem_word("የኢትዮጵያ"), "ኢትዮጵያ");
    }

    #[test]
    fn reduplicated_stems_collapse() {
        let s = stemmer();
        assert_eq!(s.stem_word("ሰባበረ"), "ሰበረ");
        assert_eq!(s.stem_word("ቆራረጠ"), "ቆረጠ");
        assert_eq!(s.stem_word("ተሰባበረ"), "ተሰበረ");
        assert_eq!(s.stem_word("ሰባበሩ"), "ሰበር");
    }

    #[test]
    fn cluster_separator_round_trips() {
        let trace = stemmer().trace_word("ክበረት");
        assert_eq!(trace.steps.len(), 1);
        assert!(matches!(
            &trace.steps[0],
            TraceStep::Rewritten { rule: InfixRule::ClusterSeparator, form } if form.latin == "kXberet"
        ));
        assert_eq!(trace.stem, "ክበረት");
    }

    #[test]
    fn short_words_pass_through() {
        let s = stemmer();
        assert_eq!(s.stem_word("ቤት"), "ቤት");
        assert_eq!(s.stem_word("የ"), "የ");
        assert_eq!(s.stem_word("ኦች"), "ኦች");
    }

    #[test]
    fn non_ethiopic_input_vanishes() {
        let s = stemmer();
        assert_eq!(s.stem_word(""), "");
        assert_eq!(s.stem_word("hello"), "");
        assert_eq!(s.stem_text("hello world"), "");
    }

    #[test]
    fn stem_text_normalizes_first() {
        let s = stemmer();
        assert_eq!(s.stem_text("ተማሪዎች እና ቤቶች።"), "ተማሪ ቤት");
        assert_eq!(s.stem_text("  ልጆች፣   ወንድሞቻችን! "), "ልጅ ወንድም");
        assert_eq!(s.stem_text("ት/ቤት"), "ትምህርት ቤት");
    }

    #[test]
    fn empty_and_invalid_input() {
        let s = stemmer();
        assert_eq!(s.stem_text(""), "");
        assert_eq!(s.stem_text("።፣"), "");
        assert_eq!(s.stem_value(&Value::Null), "");
        assert_eq!(s.stem_value(&json!(42)), "");
        assert_eq!(s.stem_value(&json!({ "text": "ልጆች" })), "");
        assert_eq!(s.stem_value(&json!("")), "");
        assert_eq!(s.stem_value(&json!("ልጆች")), "ልጅ");
    }

    #[test]
    fn exception_lexicon_overrides_rules() {
        let lexicon: MapLexicon = [("ሰዎች", "ሰው")].into_iter().collect();
        let s = stemmer().with_lexicon(lexicon);

        assert_eq!(s.stem_word("ሰዎች"), "ሰው");
        assert_eq!(s.stem_text("ሰዎች እና ልጆች"), "ሰው ልጅ");

        let trace = s.trace_word("ሰዎች");
        assert!(trace.lexicon_hit);
        assert!(trace.steps.is_empty());
    }

    #[test]
    fn empty_lexicon_entry_falls_through_to_rules() {
        let lexicon: MapLexicon = [("ሰዎች", "")].into_iter().collect();
        let s = stemmer().with_lexicon(lexicon);

        assert_eq!(s.stem_word("ሰዎች"), "ሰ");
        assert!(!s.trace_word("ሰዎች").lexicon_hit);

        let (text, stats) = s.stem_text_with_stats("ሰዎች");
        assert_eq!(text, "ሰ");
        assert_eq!(stats.lexicon_hits, 0);
    }

    #[test]
    fn without_lexicon_rules_apply() {
        assert_eq!(stemmer().stem_word("ሰዎች"), "ሰ");
    }

    #[test]
    fn lexicon_by_reference() {
        let mut lexicon = MapLexicon::new();
        lexicon.insert("ሰዎች", "ሰው");
        let s = stemmer().with_lexicon(&lexicon);
        assert_eq!(s.stem_word("ሰዎች"), "ሰው");
    }

    #[test]
    fn config_disables_stages() {
        let s = stemmer().with_config(StemmerConfig::normalize_only());
        assert_eq!(s.stem_word("እሰብኦች"), "እሰብኦች");
        assert_eq!(s.stem_text("ልጆች እና ቤቶች"), "ልጆች ቤቶች");

        let s = stemmer().with_config(StemmerConfig::affixes_only());
        assert_eq!(s.stem_word("ሰባበረ"), "ሰባበረ");
        assert_eq!(s.stem_word("እሰብኦች"), "ሰብ");
    }

    #[test]
    fn thresholds_are_configurable() {
        let s = stemmer().with_config(StemmerConfig {
            suffix_min_graphemes: 6,
            ..StemmerConfig::default()
        });
        assert_eq!(s.config().suffix_min_graphemes, 6);
        // Five graphemes: below the raised suffix threshold; prefix እ still goes.
        assert_eq!(s.stem_word("እሰብኦች"), "ሰብኦች");
    }

    #[test]
    fn stats_count_each_stage() {
        let lexicon: MapLexicon = [("ሰዎች", "ሰው")].into_iter().collect();
        let s = stemmer().with_lexicon(lexicon);

        let (out, stats) = s.stem_text_with_stats("በቤታችን ተማሪዎች እና ሰዎች ሰባበረ hello");
        assert_eq!(out, "ቤት ተማሪ ሰው ሰበረ");
        assert_eq!(stats.tokens, 5);
        assert_eq!(stats.lexicon_hits, 1);
        assert_eq!(stats.suffixes_stripped, 2);
        assert_eq!(stats.prefixes_stripped, 1);
        assert_eq!(stats.infix_rewrites, 1);
        assert_eq!(stats.empty_stems, 1);
    }

    #[test]
    fn batch_matches_sequential() {
        let s = stemmer();
        let texts = ["ልጆች እና ቤቶች", "", "በቤታችን", "ሰባበረ ተማሪዎች", "hello"];
        let batch = s.stem_batch(&texts);
        let sequential: Vec<String> = texts.iter().map(|t| s.stem_text(t)).collect();
        assert_eq!(batch, sequential);
        assert_eq!(batch[0], "ልጅ ቤት");
    }

    #[test]
    fn stemmer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stemmer>();
        assert_send_sync::<Stemmer<MapLexicon>>();
    }

    #[test]
    fn alignment_survives_every_stage() {
        let s = stemmer();
        let mut rng = Lcg(0x5eed);

        for _ in 0..2_000 {
            let word = random_word(&mut rng);
            let trace = s.trace_word(&word);
            assert!(trace.transcribed.is_aligned(), "{word}: {}", trace.transcribed);
            assert!(trace.steps.len() <= 3, "{word}");

            for step in &trace.steps {
                let form = step.form();
                assert!(form.is_aligned(), "{word}: {form}");
                if let TraceStep::Rewritten { .. } = step {
                    assert!(form.alignment.is_empty(), "{word}: {form}");
                }
            }
            assert_eq!(trace.stem, s.stem_word(&word), "{word}");
        }
    }

    #[test]
    fn stems_are_deterministic() {
        let a = stemmer();
        let b = stemmer();
        for word in ["እሰብኦች", "ሰባበረ", "ክበረት", "የኢትዮጵያ"] {
            assert_eq!(a.stem_word(word), b.stem_word(word));
        }
    }
}
