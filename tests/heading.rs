use creole::to_html;
use pretty_assertions::assert_eq;

#[test]
fn heading() {
    assert_eq!(
        to_html("= Level 1 ="),
        "<h1> Level 1 </h1>",
        "should support a closed heading"
    );

    assert_eq!(
        to_html("== Second =="),
        "<h2> Second </h2>",
        "should support rank 2"
    );

    assert_eq!(
        to_html("====== Six ======"),
        "<h6> Six </h6>",
        "should support rank 6"
    );

    assert_eq!(
        to_html("= start heading\n"),
        "<h1> start heading</h1>",
        "should close an open heading at the end of input"
    );

    assert_eq!(
        to_html("== a ==\n\nb"),
        "<h2> a </h2><p>b</p>",
        "should support a paragraph after a heading"
    );

    assert_eq!(
        to_html("======= too many"),
        "<p>======= too many</p>",
        "should not support more than six equals signs as an opener"
    );

    assert_eq!(
        to_html("a=b"),
        "<p>a=b</p>",
        "should not support equals signs inside text"
    );

    assert_eq!(
        to_html("x ==\ny"),
        "<p>x ==y</p>",
        "should write a close run through when no heading is open"
    );

    assert_eq!(
        to_html("x\n== y =="),
        "<p>x<h2> y </h2></p>",
        "should leave an open paragraph alone on a single line ending"
    );
}
