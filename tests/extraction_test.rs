//! End-to-end extraction tests covering candidate selection, boilerplate
//! removal, and the lenient retry pass.

use artic::{extract, ArticleExtractor, Document, Options};

#[test]
fn selects_paragraph_rich_div_and_drops_sidebar() {
    let para = "a ".repeat(15);
    let html = format!(
        "<html><body>\
         <div class=\"sidebar\">links</div>\
         <div><p>{para}</p><p>{para}</p><p>{para}</p></div>\
         </body></html>",
    );

    let article = extract(&html).unwrap();

    assert!(!article.contains("links"));
    assert_eq!(article.matches("<p>").count(), 3);
}

#[test]
fn short_first_pass_triggers_one_lenient_retry() {
    // The comment block holds most of the text. The ruthless pass removes
    // it, leaving under 250 characters, which forces a single lenient
    // rerun whose output keeps the block's text.
    let comment_text = "lengthy words here, ".repeat(35);
    let html = format!(
        "<html><body><div>\
         <p>a short opening paragraph of sixty characters or so, right here</p>\
         <div class=\"comments\"><p>{comment_text}</p></div>\
         </div></body></html>",
    );

    let article = extract(&html).unwrap();

    assert!(article.contains("short opening paragraph"));
    assert!(article.contains("lengthy words here"));
}

#[test]
fn second_pass_result_stands_even_when_still_short() {
    // Nothing here reaches 250 characters on either pass; the lenient
    // result is returned as-is rather than retried a third time.
    let html = "<html><body><div>\
         <p>one modest paragraph, just past the scoring minimum, nothing more</p>\
         </div></body></html>";

    let article = extract(html).unwrap();
    assert!(article.contains("modest paragraph"));
}

#[test]
fn comment_blocks_are_removed_when_article_is_long() {
    let para = "substantial article prose, with commas, filling out the paragraph nicely and at length. ";
    let body_text = para.repeat(5);
    let html = format!(
        "<html><body>\
         <div class=\"comment-thread\"><p>first! great post, really enjoyed it, thanks for sharing</p></div>\
         <div><p>{body_text}</p><p>{body_text}</p></div>\
         </body></html>",
    );

    let article = extract(&html).unwrap();

    assert!(article.contains("substantial article prose"));
    assert!(!article.contains("great post"));
}

#[test]
fn custom_negative_keywords_penalize_matching_containers() {
    // "partnerbox" matches none of the built-in patterns, so without the
    // custom keyword the first div would ride along as a scored sibling.
    let html = "<html><body>\
         <div class=\"partnerbox\"><p>a sponsored aside, long enough to score, with commas, that should not survive</p></div>\
         <div class=\"story\"><p>the genuine article text, with commas, that wins selection and anchors the output</p></div>\
         </body></html>";
    let options = Options {
        negative_keywords: vec!["partnerbox".to_string()],
        ..Options::default()
    };
    let extractor = ArticleExtractor::new(&options).unwrap();
    let doc = Document::from(html);

    let article = extractor.extract(&doc, true).unwrap();
    assert!(article.contains("genuine article text"));
    assert!(!article.contains("sponsored aside"));
}

#[test]
fn output_is_attribute_free() {
    let html = "<html><body><div id=\"post\" class=\"entry\" data-x=\"1\">\
         <p style=\"font-size: 12px\">plenty of article text in this paragraph, with commas, to be selected and kept</p>\
         <p>more article text follows in a second paragraph, equally long and equally plain, for good measure</p>\
         <p>the third paragraph closes out the article with further unremarkable but sufficiently long prose</p>\
         </div></body></html>";

    let article = extract(html).unwrap();

    assert!(!article.contains('='));
    assert!(article.contains("plenty of article text"));
}
