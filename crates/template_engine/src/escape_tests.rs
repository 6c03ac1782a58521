use super::*;

#[test]
fn test_plain_text_is_borrowed() {
    let escaped = escape_html("Not Found");
    assert!(matches!(escaped, Cow::Borrowed("Not Found")));
}

#[test]
fn test_escapes_markup() {
    assert_eq!(escape_html("<b>oops</b>"), "&lt;b&gt;oops&lt;/b&gt;");
}

#[test]
fn test_escapes_all_special_characters() {
    assert_eq!(
        escape_html(r#"a & b < c > d " e ' f"#),
        "a &amp; b &lt; c &gt; d &quot; e &#39; f"
    );
}

#[test]
fn test_escapes_script_injection() {
    let escaped = escape_html(r#"<script>alert('x' + "y")</script>"#);
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert!(!escaped.contains('\''));
    assert!(!escaped.contains('"'));
    assert_eq!(
        escaped,
        "&lt;script&gt;alert(&#39;x&#39; + &quot;y&quot;)&lt;/script&gt;"
    );
}

#[test]
fn test_existing_entities_are_escaped_again() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}

#[test]
fn test_multibyte_text_is_preserved() {
    assert_eq!(escape_html("größer > kleiner ✓"), "größer &gt; kleiner ✓");
}

#[test]
fn test_empty_input() {
    assert_eq!(escape_html(""), "");
}
