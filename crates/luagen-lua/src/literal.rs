use luagen_core::ir::ExampleValue;

/// Lua keywords that cannot be used as bare table keys.
const RESERVED: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Render an example value as Lua literal source text.
///
/// Strings are double-quoted (no further escaping, a documented limitation),
/// absence maps to `nil`, sequences and mappings become table constructors in
/// declared order.
pub fn to_lua(value: &ExampleValue) -> String {
    match value {
        ExampleValue::Null => "nil".to_string(),
        ExampleValue::Bool(b) => b.to_string(),
        ExampleValue::Integer(i) => i.to_string(),
        ExampleValue::Number(n) => n.to_string(),
        ExampleValue::String(s) => format!("\"{s}\""),
        ExampleValue::Array(items) => {
            if items.is_empty() {
                return "{}".to_string();
            }
            let rendered: Vec<String> = items.iter().map(to_lua).collect();
            format!("{{ {} }}", rendered.join(", "))
        }
        ExampleValue::Object(entries) => {
            if entries.is_empty() {
                return "{}".to_string();
            }
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{} = {}", lua_key(key), to_lua(value)))
                .collect();
            format!("{{ {} }}", rendered.join(", "))
        }
    }
}

/// Render a table key: bare when it is a valid Lua identifier, bracketed and
/// quoted otherwise.
fn lua_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        format!("[\"{key}\"]")
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED.contains(&key)
}
