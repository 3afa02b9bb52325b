use creole::to_html;
use pretty_assertions::assert_eq;

#[test]
fn image() {
    assert_eq!(
        to_html("{{Red-Flower.jpg|here is a red flower}}"),
        "<img src=\"Red-Flower.jpg\" alt=\"here is a red flower\" />",
        "should support an image with alt text"
    );

    assert_eq!(
        to_html("{{logo.png}}"),
        "<img src=\"logo.png\" alt=\"\" />",
        "should default the alt text to empty"
    );

    assert_eq!(
        to_html("see {{a.png|b}} here"),
        "<p>see <img src=\"a.png\" alt=\"b\" /> here</p>",
        "should support an image in running text"
    );

    assert_eq!(
        to_html("{{broken\nx"),
        "<p>{{brokenx</p>",
        "should degrade an unclosed span to text"
    );

    assert_eq!(
        to_html("{{a}} and {{b}}"),
        "<img src=\"a\" alt=\"\" /> and <img src=\"b\" alt=\"\" />",
        "should support several images on one line"
    );
}
