//! End-to-end tests for HTML → Markdown conversion without image download

mod common;

use articlemd::content_saver::markdown_converter::render_markdown;
use articlemd::image_localizer::RemoteImages;
use articlemd::{ConversionError, ConversionOptions, convert_html_to_markdown, convert_html_to_markdown_sync};
use common::{convert, convert_with_title};

#[test]
fn test_plain_text_is_trimmed_but_not_reflowed() {
    assert_eq!(convert("  just some   text  "), "just some   text");
}

#[test]
fn test_empty_input_gives_empty_document() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("   \n\t  "), "");
}

#[test]
fn test_inline_markup_keeps_word_spacing() {
    assert_eq!(convert("<p>Hello <strong>world</strong></p>"), "Hello **world**");
    assert_eq!(
        convert("<p>Some <em>emphasis</em> and <b>bold</b>.</p>"),
        "Some *emphasis* and **bold**."
    );
}

#[test]
fn test_all_heading_levels() {
    for level in 1..=6 {
        let html = format!("<h{level}>  Title  </h{level}>");
        assert_eq!(convert(&html), format!("{} Title", "#".repeat(level)));
    }
}

#[test]
fn test_heading_flattens_inline_markup() {
    assert_eq!(convert("<h1>Hello <em>there</em></h1>"), "# Hello there");
}

#[test]
fn test_whitespace_heading_emits_nothing() {
    assert_eq!(convert("<h2> </h2><p>body</p>"), "body");
}

#[test]
fn test_paragraphs_are_separated_by_blank_line() {
    assert_eq!(convert("<p>first</p>\n\n<p>second</p>"), "first\n\nsecond");
}

#[test]
fn test_line_break_is_hard_break() {
    assert_eq!(convert("<p>line one<br>line two</p>"), "line one  \nline two");
}

#[test]
fn test_spaces_around_line_break_are_dropped() {
    assert_eq!(convert("<p>a <br> b</p>"), "a  \nb");
    assert_eq!(convert("<p>a<br><br>b</p>"), "a  \n  \nb");
}

#[test]
fn test_text_before_block_has_no_trailing_space() {
    assert_eq!(convert("<div>text\n<p>x</p></div>"), "text\nx");
    assert_eq!(convert("<div><p>x</p>\n tail</div>"), "x\ntail");
}

#[test]
fn test_empty_emphasis_is_dropped() {
    assert_eq!(convert("<p>a<b>  </b><i></i>b</p>"), "ab");
}

#[test]
fn test_nested_emphasis_is_flattened() {
    assert_eq!(
        convert("<p><strong>bold <em>nested</em></strong></p>"),
        "**bold nested**"
    );
}

#[test]
fn test_inline_code() {
    assert_eq!(convert("<p>Use <code>cargo</code> now</p>"), "Use `cargo` now");
}

#[test]
fn test_preformatted_code_block() {
    let html = "<pre><code>fn main() {\n    println!(\"hi\");\n}</code></pre>";
    assert_eq!(
        convert(html),
        "```\nfn main() {\n    println!(\"hi\");\n}\n```"
    );
}

#[test]
fn test_links() {
    assert_eq!(
        convert(r#"<p>See <a href="https://x.dev">the docs</a>.</p>"#),
        "See [the docs](https://x.dev)."
    );
    assert_eq!(convert("<p><a>plain</a></p>"), "plain");
    assert_eq!(convert(r#"<p><a href="/x">  </a></p>"#), "");
}

#[test]
fn test_linked_image_emits_image_only() {
    let html = r#"<a href="https://x.dev/big.png"><img src="https://x.dev/small.png" alt="pic"></a>"#;
    let markdown = convert(html);

    assert_eq!(markdown, "![pic](https://x.dev/small.png)");
    assert!(!markdown.contains("[!["));
    assert!(!markdown.contains("big.png"));
}

#[test]
fn test_image_alt_placeholder() {
    assert_eq!(convert(r#"<img src="http://x.dev/y.png">"#), "![图片](http://x.dev/y.png)");
    assert_eq!(
        convert(r#"<img src="http://x.dev/y.png" alt="">"#),
        "![图片](http://x.dev/y.png)"
    );
    assert_eq!(
        convert(r#"<img src="http://x.dev/y.png" alt="Cover">"#),
        "![Cover](http://x.dev/y.png)"
    );
}

#[test]
fn test_custom_default_alt() {
    let options = ConversionOptions::new().with_default_alt("image");
    let markdown = convert_html_to_markdown_sync(r#"<img src="a.png">"#, "", &options).unwrap();
    assert_eq!(markdown, "![image](a.png)");
}

#[test]
fn test_image_without_src_is_dropped() {
    assert_eq!(convert(r#"<p>a</p><img alt="x"><img src="" alt="y"><p>b</p>"#), "a\n\nb");
}

#[test]
fn test_relative_image_reference_kept_without_download() {
    assert_eq!(convert(r#"<img src="/static/a.png" alt="a">"#), "![a](/static/a.png)");
}

#[test]
fn test_unordered_list() {
    assert_eq!(convert("<ul><li>a</li><li>b</li></ul>"), "- a\n- b");
}

#[test]
fn test_pretty_printed_list() {
    let html = "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>";
    assert_eq!(convert(html), "- a\n- b");
}

#[test]
fn test_ordered_list_numbering() {
    assert_eq!(
        convert("<ol><li>one</li><li>two</li><li>three</li></ol>"),
        "1. one\n2. two\n3. three"
    );
}

#[test]
fn test_list_item_paragraph_is_inlined() {
    assert_eq!(convert("<ul><li><p>para</p></li></ul>"), "- para");
}

#[test]
fn test_nested_lists_are_indented_once_each() {
    let html = "<ul><li>a<ul><li>b<ul><li>c</li></ul></li></ul></li><li>d</li></ul>";
    let markdown = convert(html);

    assert_eq!(markdown, "- a\n  - b\n    - c\n- d");
    assert_eq!(markdown.matches('b').count(), 1);
    assert_eq!(markdown.matches('c').count(), 1);
}

#[test]
fn test_list_kinds_mix() {
    let html = "<ol><li>one<ul><li>x</li></ul></li><li>two</li></ol>";
    assert_eq!(convert(html), "1. one\n  - x\n2. two");
}

#[test]
fn test_blockquote_prefixes_every_line() {
    let html = "<blockquote><p>first line</p>\n<p>second line</p></blockquote>";
    assert_eq!(convert(html), "> first line\n> second line");
}

#[test]
fn test_blank_blockquote_is_dropped() {
    assert_eq!(convert("<blockquote>  </blockquote>"), "");
}

#[test]
fn test_table_with_header_row() {
    let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
    assert_eq!(convert(html), "| A | B |\n| --- | --- |\n| 1 | 2 |");
}

#[test]
fn test_table_with_sections_and_markup() {
    let html = r"
        <table>
            <thead><tr><th>Name</th><th>Value</th></tr></thead>
            <tbody>
                <tr><td><b>Item</b> 1</td><td>100</td></tr>
                <tr><td>Item 2</td><td><a href='/x'>200</a></td></tr>
            </tbody>
        </table>";
    assert_eq!(
        convert(html),
        "| Name | Value |\n| --- | --- |\n| Item 1 | 100 |\n| Item 2 | 200 |"
    );
}

#[test]
fn test_table_without_rows() {
    assert_eq!(convert("<table></table>"), "");
    assert_eq!(convert("<p>a</p><table></table><p>b</p>"), "a\n\nb");
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(convert("<p>a</p><hr><p>b</p>"), "a\n\n---\n\nb");
}

#[test]
fn test_unknown_elements_are_transparent() {
    assert_eq!(convert("<custom-tag><p>inside</p></custom-tag>"), "inside");
    assert_eq!(convert("<p><font>red</font> text</p>"), "red text");
    assert_eq!(convert("<section><article><p>deep</p></article></section>"), "deep");
}

#[test]
fn test_comments_are_ignored() {
    assert_eq!(convert("<p>a<!-- hidden -->b</p>"), "ab");
}

#[test]
fn test_no_blank_line_runs() {
    let markdown = convert("<h1>T</h1><hr><ul><li>x</li></ul><p></p><table></table><p>y</p>");
    assert!(!markdown.contains("\n\n\n"));
    assert_eq!(markdown, "# T\n\n---\n\n- x\n\ny");
}

#[test]
fn test_title_becomes_top_heading() {
    assert_eq!(convert_with_title("<p>x</p>", "Title"), "# Title\n\nx");
    assert_eq!(convert_with_title("<p>x</p>", "  Title  "), "# Title\n\nx");
    assert_eq!(convert_with_title("<p>x</p>", "   "), "x");
}

#[test]
fn test_full_article() {
    let html = r#"
        <h2>Getting Started</h2>
        <p>Install with <code>cargo install</code>, then run it.</p>
        <ul>
            <li>Fast</li>
            <li>Small</li>
        </ul>
        <blockquote>Simple is better.</blockquote>
        <p>Visit <a href="https://example.com">our website</a> for more info.</p>
    "#;

    let expected = "# Guide\n\n\
        ## Getting Started\n\n\
        Install with `cargo install`, then run it.\n\n\
        - Fast\n\
        - Small\n\n\
        > Simple is better.\n\n\
        Visit [our website](https://example.com) for more info.";

    assert_eq!(convert_with_title(html, "Guide"), expected);
}

#[test]
fn test_excessive_nesting_falls_back_to_plain_text() {
    let html = "<div><div><div><div><div><h1>Deep</h1><ul><li>item</li></ul></div></div></div></div></div>";
    let options = ConversionOptions::new().with_max_nesting_depth(4);

    let markdown = convert_html_to_markdown_sync(html, "Title", &options).unwrap();
    assert_eq!(markdown, "Deepitem");

    let err = render_markdown(html, "Title", &options, &RemoteImages).unwrap_err();
    assert_eq!(err, ConversionError::NestingTooDeep { limit: 4 });
}

#[test]
fn test_default_depth_handles_deep_documents() {
    let html = "<div>".repeat(200) + "<p>bottom</p>" + &"</div>".repeat(200);
    assert_eq!(convert(&html), "bottom");
}

#[tokio::test]
async fn test_async_matches_sync_without_download() {
    let html = "<h1>x</h1><p>Hello <strong>world</strong></p><img src='a.png'>";
    let options = ConversionOptions::default();

    let async_md = convert_html_to_markdown(html, "T", &options).await;
    let sync_md = convert_html_to_markdown_sync(html, "T", &options).unwrap();
    assert_eq!(async_md, sync_md);
}

#[tokio::test]
async fn test_download_without_save_dir_keeps_remote_references() {
    let options = ConversionOptions::new().with_download_images(true);
    let markdown = convert_html_to_markdown(r#"<img src="https://x.dev/a.png" alt="a">"#, "", &options).await;
    assert_eq!(markdown, "![a](https://x.dev/a.png)");
}
