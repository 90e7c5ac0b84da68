use std::sync::LazyLock;

use regex::Regex;

/// Continuation prefix for follow-up lines of a Lua doc comment.
pub const DOC_CONTINUATION: &str = "\n-- ";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<!--.*?-->|<[^>]*>)").expect("valid regex"));

/// Remove HTML tags and comments from authored text.
pub fn strip_html(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Normalize an authored description for embedding in a Lua doc comment:
/// trim, turn `<br>` and newlines into comment continuations, strip any
/// remaining HTML. `<br>` is rewritten before stripping so explicit breaks
/// survive as line breaks instead of vanishing with the other tags.
pub fn normalize_description(text: &str) -> String {
    let trimmed = text.trim();
    let with_breaks = trimmed
        .replace('\n', DOC_CONTINUATION)
        .replace("<br>", DOC_CONTINUATION);
    strip_html(&with_breaks)
}

/// Canonical identifier for a named component: lowercased, hyphens replaced
/// with underscores.
pub fn canonical_ident(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

/// Code-safe operation identifier: hyphens replaced with underscores. The
/// authored casing is kept as-is.
pub fn canonical_op_id(operation_id: &str) -> String {
    operation_id.replace('-', "_")
}

/// Normalize a parameter name: strip the array `[]` suffix and replace
/// hyphens with underscores.
pub fn normalize_param_name(name: &str) -> String {
    name.replace("[]", "").replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_comments() {
        assert_eq!(strip_html("a <b>bold</b> move"), "a bold move");
        assert_eq!(strip_html("keep<!-- not this -->ing"), "keeping");
    }

    #[test]
    fn description_multiline_continuation() {
        assert_eq!(
            normalize_description("First line\nsecond line"),
            "First line\n-- second line"
        );
    }

    #[test]
    fn description_br_becomes_continuation() {
        assert_eq!(
            normalize_description("First<br>second"),
            "First\n-- second"
        );
    }

    #[test]
    fn description_trims_and_strips() {
        assert_eq!(
            normalize_description("  <p>Hello</p> world  "),
            "Hello world"
        );
    }

    #[test]
    fn canonical_component_ident() {
        assert_eq!(canonical_ident("Order-Item"), "order_item");
        assert_eq!(canonical_ident("cart"), "cart");
    }

    #[test]
    fn canonical_operation_id() {
        assert_eq!(canonical_op_id("get-user-cart"), "get_user_cart");
        assert_eq!(canonical_op_id("createOrder"), "createOrder");
    }

    #[test]
    fn param_name_array_suffix() {
        assert_eq!(normalize_param_name("foo[]"), "foo");
        assert_eq!(normalize_param_name("item-sku"), "item_sku");
    }
}
