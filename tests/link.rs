use creole::{to_html, to_html_with_options, Options};
use pretty_assertions::assert_eq;

#[test]
fn link() {
    assert_eq!(
        to_html("hello-[[blah]]-world"),
        "<p>hello-<a href=\"blah\">blah</a>-world</p>",
        "should support a link in running text"
    );

    assert_eq!(
        to_html("[[http://www.example.com/a?b|click]]"),
        "<a href=\"http://www.example.com/a?b\">click</a>",
        "should split the span on the first pipe"
    );

    assert_eq!(
        to_html("[[somepage]]"),
        "<a href=\"somepage\">somepage</a>",
        "should reuse the destination as text when there is no pipe"
    );

    assert_eq!(
        to_html("a [[broken\nb"),
        "<p>a [[brokenb</p>",
        "should degrade an unclosed span to text"
    );

    assert_eq!(
        to_html("[[a|b|c]]"),
        "<a href=\"a\">b|c</a>",
        "should split on the first pipe only"
    );
}

#[test]
fn formatter() -> Result<(), creole::message::Message> {
    let options = Options {
        wiki_link_formatter: Some(Box::new(|href, text| {
            format!("<a class=\"wiki\" href=\"/w/{}\">{}</a>", href, text)
        })),
        ..Options::default()
    };

    assert_eq!(
        to_html_with_options("[[Home|go home]]", &options)?,
        "<a class=\"wiki\" href=\"/w/Home\">go home</a>",
        "should substitute the wiki link formatter's output verbatim"
    );

    assert_eq!(
        to_html_with_options("[[Home]]", &options)?,
        "<a class=\"wiki\" href=\"/w/Home\">Home</a>",
        "should call the formatter with the destination as text when bare"
    );

    Ok(())
}
