//! Extraction orchestration.
//!
//! Runs the pipeline - narrow scope, preprocess, score, select, assemble,
//! sanitize - in a bounded retry loop. The first pass is "ruthless"
//! (unlikely-candidate removal on); if it yields no candidate or too little
//! text, a single lenient pass follows. Each pass works on a fresh clone of
//! the caller's document, so the input tree is never mutated and the second
//! pass scores a pristine tree rather than one gutted by the first.

use dom_query::{Document, NodeRef};

use crate::assemble::{get_article, select_best_candidate};
use crate::density::text_length;
use crate::dom;
use crate::error::Result;
use crate::options::Options;
use crate::patterns::compile_keyword_pattern;
use crate::preprocess::preprocess;
use crate::sanitize::{clean_attributes, sanitize};
use crate::scoring::{score_paragraphs, KeywordMatchers};

/// Scope-narrowing selectors, tried in priority order. The first match
/// becomes the working root; a document with none is worked on whole.
const SCOPE_SELECTORS: [&str; 3] = [r#"[itemprop="articleBody"]"#, "article", "body"];

/// The extraction engine. Holds compiled keyword matchers and thresholds;
/// one instance serves any number of sequential `extract` calls.
#[derive(Debug)]
pub struct ArticleExtractor {
    keywords: KeywordMatchers,
    min_text_length: usize,
    retry_length: usize,
}

impl ArticleExtractor {
    /// Build an extractor from options, compiling the custom keyword lists
    /// into matchers.
    pub fn new(options: &Options) -> Result<Self> {
        let keywords = KeywordMatchers {
            positive: compile_keyword_pattern(&options.positive_keywords)?,
            negative: compile_keyword_pattern(&options.negative_keywords)?,
        };
        Ok(Self {
            keywords,
            min_text_length: options.min_text_length,
            retry_length: options.retry_length,
        })
    }

    /// Extract the main article from a parsed document.
    ///
    /// With `html_partial` the result is a bare `<div>` fragment; otherwise
    /// it is wrapped in a minimal `<html><body><div>` skeleton. Either way
    /// the markup comes back attribute-free.
    pub fn extract(&self, doc: &Document, html_partial: bool) -> Result<String> {
        let mut ruthless = true;
        loop {
            let working = dom::clone_document(doc);
            let root = narrow_scope(&working);
            preprocess(&root, ruthless);

            let candidates = score_paragraphs(&root, &self.keywords, self.min_text_length);
            let article = match select_best_candidate(&candidates) {
                Some(best) => get_article(&candidates, best, html_partial),
                None if ruthless => {
                    ruthless = false;
                    continue;
                }
                // Lenient pass still found nothing: take the body (or the
                // working root itself) verbatim and let sanitization run.
                None => dom::select_first(&root, "body").unwrap_or(root),
            };

            sanitize(&article, &candidates, &self.keywords, self.min_text_length);

            let cleaned_length = text_length(&article);
            let markup = clean_attributes(&dom::outer_html(&article));

            if ruthless && cleaned_length < self.retry_length {
                ruthless = false;
                continue;
            }
            return Ok(markup);
        }
    }
}

fn narrow_scope(doc: &Document) -> NodeRef<'_> {
    let root = doc.root();
    for css in SCOPE_SELECTORS {
        if let Some(node) = dom::select_first(&root, css) {
            return node;
        }
    }
    root
}
