//! Text-to-sentences translation pipeline.

use clap::ValueEnum;

use super::convert::convert_words;
use super::rewrite::rewrite_sentence;
use super::sentence::split_sentences;
use super::span::{detect_spans, has_numeric_content, NumericSpan, SpanOrigin};
use super::table::NumberWordTable;
use super::tokenizer::tokenize;
use crate::error::{Result, SearchError};

/// What to do when a word-anchored span holds a word missing from the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UnknownWordPolicy {
    /// Fail the whole translation.
    #[default]
    Abort,
    /// Log a warning and leave the sentence out.
    #[value(name = "skip")]
    SkipSentence,
}

/// What to do with sentences that contain no numeral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UnmatchedSentencePolicy {
    /// Leave them out of the output.
    #[default]
    Drop,
    /// Emit them unchanged, in document order.
    #[value(name = "keep")]
    PassThrough,
}

/// Options for [`Translator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub unknown_word: UnknownWordPolicy,
    pub unmatched: UnmatchedSentencePolicy,
}

/// Output of a translation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    /// Rewritten sentences in document order.
    pub sentences: Vec<String>,
    /// Non-fatal problems, one line each.
    pub warnings: Vec<String>,
}

/// Rewrites spelled-out numbers in text as numerals.
///
/// Holds a reference to the process-wide [`NumberWordTable`] (or any other
/// table the caller owns) and the options to translate with.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'t> {
    table: &'t NumberWordTable,
    /// Table for converting word spans. Same as `table` unless overridden.
    conversion: &'t NumberWordTable,
    options: TranslateOptions,
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::new(NumberWordTable::global())
    }
}

impl<'t> Translator<'t> {
    /// Create a translator with default options.
    #[must_use]
    pub fn new(table: &'t NumberWordTable) -> Self {
        Self {
            table,
            conversion: table,
            options: TranslateOptions::default(),
        }
    }

    /// Convert word spans with a different table than the one used to find
    /// them. Words the conversion table lacks then hit the unknown-word policy.
    #[must_use]
    pub fn with_conversion_table(mut self, conversion: &'t NumberWordTable) -> Self {
        self.conversion = conversion;
        self
    }

    /// Set the translation options.
    #[must_use]
    pub fn with_options(mut self, options: TranslateOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this translator uses.
    #[must_use]
    pub fn options(&self) -> TranslateOptions {
        self.options
    }

    /// Translate text and return only the rewritten sentences.
    pub fn translate(&self, text: &str) -> Result<Vec<String>> {
        self.translate_detailed(text)
            .map(|translation| translation.sentences)
    }

    /// Translate text, keeping the warnings raised along the way.
    pub fn translate_detailed(&self, text: &str) -> Result<Translation> {
        let mut translation = Translation::default();

        for (number, sentence) in split_sentences(text).into_iter().enumerate() {
            match self.translate_sentence(&sentence, &mut translation.warnings) {
                Ok(Some(rewritten)) => translation.sentences.push(rewritten),
                Ok(None) => {
                    if self.options.unmatched == UnmatchedSentencePolicy::PassThrough {
                        translation.sentences.push(sentence);
                    }
                }
                Err(err @ SearchError::UnknownNumberWord { .. })
                    if self.options.unknown_word == UnknownWordPolicy::SkipSentence =>
                {
                    tracing::warn!(sentence = number, error = %err, "Skipping sentence");
                    translation
                        .warnings
                        .push(format!("Sentence {number} skipped: {err}"));
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            sentences = translation.sentences.len(),
            warnings = translation.warnings.len(),
            "Translated text"
        );
        Ok(translation)
    }

    /// Translate one sentence.
    ///
    /// Returns `Ok(None)` when the sentence holds no numeral.
    fn translate_sentence(
        &self,
        sentence: &str,
        warnings: &mut Vec<String>,
    ) -> Result<Option<String>> {
        let tokens = tokenize(sentence);
        if !has_numeric_content(&tokens, self.table) {
            return Ok(None);
        }

        let detection = detect_spans(&tokens, self.table);
        if detection.spans.is_empty() {
            return Ok(None);
        }
        warnings.extend(
            detection
                .warnings
                .iter()
                .map(|warning| format!("In \"{}\": {warning}", sentence.trim())),
        );

        let mut resolved: Vec<(NumericSpan, f64)> = Vec::with_capacity(detection.spans.len());
        for span in detection.spans {
            let value = self.span_value(&span, &tokens, sentence)?;
            if !value.is_finite() {
                let text = tokens[span.range()].join(" ");
                tracing::warn!(span = %text, "Number too large to represent, leaving it as written");
                warnings.push(format!(
                    "In \"{}\": '{text}' is too large to represent and was left as written",
                    sentence.trim()
                ));
                continue;
            }
            resolved.push((span, value));
        }

        Ok(Some(rewrite_sentence(&tokens, &resolved)))
    }

    fn span_value(&self, span: &NumericSpan, tokens: &[String], sentence: &str) -> Result<f64> {
        match span.origin {
            SpanOrigin::Digits { value } => Ok(value),
            SpanOrigin::Words => convert_words(&tokens[span.range()], self.conversion)
                .map_err(|err| err.with_sentence(sentence)),
        }
    }
}

/// Translate text with the global table and default options.
///
/// Returns the numeral-bearing sentences, rewritten, in document order.
///
/// # Examples
/// ```
/// use number_search::translate;
///
/// let sentences = translate("He has 1,000 dollars. Nothing here. Two hundred and five birds.").unwrap();
/// assert_eq!(sentences, vec!["he has 1000.0 dollars", "205.0 birds"]);
/// ```
pub fn translate(text: &str) -> Result<Vec<String>> {
    Translator::default().translate(text)
}
