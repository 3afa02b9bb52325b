use creole::to_html;
use pretty_assertions::assert_eq;

#[test]
fn horizontal_rule() {
    assert_eq!(
        to_html("----"),
        "<hr>",
        "should support a rule alone on its line"
    );

    assert_eq!(
        to_html("   ----   "),
        "   <hr>   ",
        "should support a rule surrounded by whitespace"
    );

    assert_eq!(
        to_html("wiki wiki\n----\n break"),
        "<p>wiki wiki<hr> break</p>",
        "should support a rule between lines of text"
    );

    assert_eq!(
        to_html("wiki wiki ---- \n"),
        "<p>wiki wiki ---- </p>",
        "should absorb a rule preceded by text on its line"
    );

    assert_eq!(
        to_html("x----"),
        "<p>x----</p>",
        "should absorb a rule glued to text"
    );

    assert_eq!(
        to_html("---- x"),
        "<p>---- x</p>",
        "should absorb a rule followed by text on its line"
    );

    assert_eq!(
        to_html("-----"),
        "<p>-----</p>",
        "should absorb a run of five hyphens"
    );
}
