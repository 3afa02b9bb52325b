use creole::to_html;
use pretty_assertions::assert_eq;

#[test]
fn paragraph() {
    assert_eq!(to_html(""), "", "should support an empty document");

    assert_eq!(
        to_html("now is the time"),
        "<p>now is the time</p>",
        "should wrap plain text in a paragraph"
    );

    assert_eq!(
        to_html("hello\n\nworld"),
        "<p>hello</p><p>world</p>",
        "should split paragraphs at a blank line"
    );

    assert_eq!(
        to_html("hello\nworld"),
        "<p>helloworld</p>",
        "should not split a paragraph at a single line ending"
    );

    assert_eq!(
        to_html("a\n  \nb"),
        "<p>a  </p><p>b</p>",
        "should treat a space-run-only line as blank"
    );

    assert_eq!(
        to_html(" \t\n"),
        " \t",
        "should write whitespace-only input through without a paragraph"
    );

    assert_eq!(
        to_html("first\\\\second"),
        "<p>first<br />second</p>",
        "should support a forced line break inside a paragraph"
    );

    assert_eq!(
        to_html("a\r\n\r\nb"),
        "<p>a</p><p>b</p>",
        "should treat a CRLF pair as one line ending"
    );

    assert_eq!(
        to_html("a\r\nb"),
        "<p>ab</p>",
        "should not split a paragraph at a single CRLF"
    );
}
