use creole::to_html;
use pretty_assertions::assert_eq;

#[test]
fn bold() {
    assert_eq!(
        to_html("hello-**blah**-world"),
        "<p>hello-<strong>blah</strong>-world</p>",
        "should support bold in running text"
    );

    assert_eq!(
        to_html("**blah**-world"),
        "<strong>blah</strong>-world",
        "should not open a paragraph when a marker is the first content"
    );

    assert_eq!(
        to_html("a ** b ** c"),
        "<p>a <strong> b </strong> c</p>",
        "should support bold markers with spaces around the span"
    );

    assert_eq!(
        to_html("**unclosed"),
        "<strong>unclosed</strong>",
        "should close an unclosed span at the end of input"
    );

    assert_eq!(
        to_html("**a\n\nb"),
        "<strong>a</strong><p>b</p>",
        "should close an unclosed span at a blank line"
    );

    assert_eq!(
        to_html("a *b* c"),
        "<p>a *b* c</p>",
        "should not support single asterisks"
    );

    assert_eq!(
        to_html("a ***b*** c"),
        "<p>a ***b*** c</p>",
        "should not support triple asterisks in running text"
    );
}

#[test]
fn italics() {
    assert_eq!(
        to_html("hello-//blah//-world"),
        "<p>hello-<em>blah</em>-world</p>",
        "should support italics in running text"
    );

    assert_eq!(
        to_html("//hi//"),
        "<em>hi</em>",
        "should support italics as the only content"
    );

    assert_eq!(
        to_html("//unclosed\n\nrest"),
        "<em>unclosed</em><p>rest</p>",
        "should close unclosed italics at a blank line"
    );
}

#[test]
fn rebalance() {
    assert_eq!(
        to_html("hello-**//blah**//-world"),
        "<p>hello-<strong><em>blah</em></strong>-world</p>",
        "should rebalance overlapping spans into well-formed nesting"
    );

    assert_eq!(
        to_html("**//x**//"),
        "<strong><em>x</em></strong>",
        "should pre-close the inner span and absorb its stray marker"
    );

    assert_eq!(
        to_html("**a //b** c//"),
        "<strong>a <em>b</em></strong> c",
        "should keep text between the force-close and the stray marker"
    );

    assert_eq!(
        to_html("**//x**// and **//y**//"),
        "<strong><em>x</em></strong> and <strong><em>y</em></strong>",
        "should scope absorption to one span group"
    );

    assert_eq!(
        to_html("**//x**\n\n//y//"),
        "<strong><em>x</em></strong><em>y</em>",
        "should forget pre-closed spans at a blank line"
    );
}
