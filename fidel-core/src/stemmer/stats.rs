//! Stemming statistics.

use crate::morphology::Applied;

/// Counters collected while stemming a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StemStats {
    /// Tokens left after normalization.
    pub tokens: usize,
    /// Tokens answered by the exception lexicon.
    pub lexicon_hits: usize,
    /// Suffixes removed.
    pub suffixes_stripped: usize,
    /// Prefixes removed.
    pub prefixes_stripped: usize,
    /// Infix rules applied.
    pub infix_rewrites: usize,
    /// Tokens whose stem came out empty and were dropped.
    pub empty_stems: usize,
}

impl StemStats {
    /// Counts one pipeline change.
    #[inline]
    pub fn record(&mut self, applied: &Applied<'_>) {
        match applied {
            Applied::Suffix(_) => self.suffixes_stripped += 1,
            Applied::Prefix(_) => self.prefixes_stripped += 1,
            Applied::Infix(_) => self.infix_rewrites += 1,
        }
    }

    /// Adds another set of counters to this one.
    pub fn merge(&mut self, other: &StemStats) {
        self.tokens += other.tokens;
        self.lexicon_hits += other.lexicon_hits;
        self.suffixes_stripped += other.suffixes_stripped;
        self.prefixes_stripped += other.prefixes_stripped;
        self.infix_rewrites += other.infix_rewrites;
        self.empty_stems += other.empty_stems;
    }

    /// Tokens that went through the rules rather than the lexicon.
    pub fn rule_stemmed(&self) -> usize {
        self.tokens - self.lexicon_hits
    }
}

impl core::fmt::Display for StemStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} tokens ({} from lexicon), {} suffixes, {} prefixes, {} infix rewrites",
            self.tokens,
            self.lexicon_hits,
            self.suffixes_stripped,
            self.prefixes_stripped,
            self.infix_rewrites
        )?;

        if self.empty_stems > 0 {
            write!(f, ", {} empty stems dropped", self.empty_stems)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::InfixRule;

    #[test]
    fn record_counts_by_stage() {
        let mut stats = StemStats::default();
        stats.record(&Applied::Infix(InfixRule::ClusterSeparator));
        stats.record(&Applied::Infix(InfixRule::RepeatedSyllable));
        assert_eq!(stats.infix_rewrites, 2);
        assert_eq!(stats.suffixes_stripped, 0);
    }

    #[test]
    fn merge_adds_fields() {
        let mut a = StemStats {
            tokens: 3,
            lexicon_hits: 1,
            suffixes_stripped: 2,
            ..StemStats::default()
        };
        let b = StemStats {
            tokens: 2,
            prefixes_stripped: 1,
            empty_stems: 1,
            ..StemStats::default()
        };
        a.merge(&b);
        assert_eq!(a.tokens, 5);
        assert_eq!(a.rule_stemmed(), 4);
        assert_eq!(a.prefixes_stripped, 1);
        assert_eq!(a.empty_stems, 1);
    }

    #[test]
    fn display() {
        let stats = StemStats {
            tokens: 4,
            lexicon_hits: 1,
            suffixes_stripped: 3,
            prefixes_stripped: 1,
            infix_rewrites: 0,
            empty_stems: 0,
        };
        assert_eq!(
            stats.to_string(),
            "4 tokens (1 from lexicon), 3 suffixes, 1 prefixes, 0 infix rewrites"
        );

        let stats = StemStats {
            empty_stems: 2,
            ..stats
        };
        assert!(stats.to_string().ends_with(", 2 empty stems dropped"));
    }
}
