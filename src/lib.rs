//! # artic
//!
//! Main-article extraction for HTML documents.
//!
//! Given a parsed page, this library finds the element most likely to hold
//! the main article, reassembles it with any qualifying sibling content, and
//! returns minimal, attribute-free markup with navigation, comment threads,
//! and other boilerplate pruned away.
//!
//! ## Quick Start
//!
//! ```rust
//! use artic::extract;
//!
//! let html = r#"<html><body>
//! <div class="sidebar"><a href="/about">About</a></div>
//! <div class="post">
//! <p>The first paragraph of the article, with enough text to matter.</p>
//! <p>A second paragraph, adding more substance, detail, and length.</p>
//! </div>
//! </body></html>"#;
//!
//! let article = extract(html)?;
//! println!("{article}");
//! # Ok::<(), artic::Error>(())
//! ```
//!
//! ## How it works
//!
//! - **Preprocess**: drop scripts and styles, optionally remove unlikely
//!   blocks by class/id keywords, normalize loose `div`s into paragraphs.
//! - **Score**: rate every paragraph container by tag, class/id signals,
//!   punctuation, text length, and link density.
//! - **Assemble**: take the best-scoring container plus qualifying siblings.
//! - **Sanitize**: prune weak headings, forms, and boilerplate-looking
//!   tables, lists, and divs, then strip all attributes.
//!
//! An orchestrating retry loop runs the pipeline aggressively first, then
//! once more leniently if the result comes back empty or too short.

mod error;
mod extract;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Text statistics: whitespace normalization, text length, link density.
pub mod density;

/// Tree preparation before scoring.
pub mod preprocess;

/// Candidate scoring for potential article containers.
pub mod scoring;

/// Best-candidate selection and sibling assembly.
pub mod assemble;

/// Fragment sanitization and attribute stripping.
pub mod sanitize;

// Public API - re-exports
pub use dom_query::Document;
pub use error::{Error, Result};
pub use extract::ArticleExtractor;
pub use options::Options;

/// Extracts the main article from an HTML document using default options.
///
/// The result is wrapped in a minimal `<html><body><div>` skeleton. Empty
/// or whitespace-only input yields an empty string.
///
/// # Example
///
/// ```rust
/// use artic::extract;
///
/// let html = "<html><body><p>Short page.</p></body></html>";
/// let article = extract(html)?;
/// println!("{article}");
/// # Ok::<(), artic::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<String> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main article from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use artic::{extract_with_options, Options};
///
/// let html = "<html><body><p>Short page.</p></body></html>";
/// let options = Options {
///     positive_keywords: vec!["storybody".to_string()],
///     ..Options::default()
/// };
/// let article = extract_with_options(html, &options)?;
/// println!("{article}");
/// # Ok::<(), artic::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<String> {
    if html.trim().is_empty() {
        return Ok(String::new());
    }
    let doc = dom::parse(html);
    ArticleExtractor::new(options)?.extract(&doc, false)
}
