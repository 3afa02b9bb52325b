use creole::{to_html, to_html_with_options, Options};
use pretty_assertions::assert_eq;

#[test]
fn free_link() {
    assert_eq!(
        to_html("hello-http://www.blah.com/whatever?asdf, -world"),
        "<p>hello-<a href=\"http://www.blah.com/whatever?asdf\">http://www.blah.com/whatever?asdf</a>, -world</p>",
        "should trim one trailing punctuation byte back to text"
    );

    assert_eq!(
        to_html("http://example.com/a rest"),
        "<a href=\"http://example.com/a\">http://example.com/a</a> rest",
        "should stop a bare URL at whitespace"
    );

    assert_eq!(
        to_html("go to http://example.com"),
        "<p>go to <a href=\"http://example.com\">http://example.com</a></p>",
        "should support a bare URL at the end of input"
    );

    assert_eq!(
        to_html("http://example.com/x!\nnext"),
        "<a href=\"http://example.com/x\">http://example.com/x</a>!next",
        "should stop a bare URL at a line ending"
    );
}

#[test]
fn formatter() -> Result<(), creole::message::Message> {
    let options = Options {
        free_link_formatter: Some(Box::new(|href, _text| {
            format!("<a rel=\"nofollow\" href=\"{}\">{}</a>", href, href)
        })),
        ..Options::default()
    };

    assert_eq!(
        to_html_with_options("at http://example.com now", &options)?,
        "<p>at <a rel=\"nofollow\" href=\"http://example.com\">http://example.com</a> now</p>",
        "should substitute the free link formatter's output verbatim"
    );

    Ok(())
}
