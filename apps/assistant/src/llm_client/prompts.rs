// Shared prompt fragments and prompt-building utilities.
// Feature-specific templates live in application::prompts.

use schemars::JsonSchema;
use serde_json::Value;

/// Appended to every structured prompt, after the schema.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Every field in the schema is required; use an empty list when nothing applies.";

/// Renders output instructions for `T` from its JSON Schema.
pub fn format_instructions<T: JsonSchema>() -> String {
    let mut schema: Value = schemars::schema_for!(T).into();
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
    }

    format!(
        "The output must be a JSON instance that conforms to the JSON schema below.\n\
         For the schema {{\"properties\": {{\"tags\": {{\"type\": \"array\", \"items\": {{\"type\": \"string\"}}}}}}, \"required\": [\"tags\"]}}, \
         the object {{\"tags\": [\"a\", \"b\"]}} is well formatted; \
         the object {{\"properties\": {{\"tags\": [\"a\", \"b\"]}}}} is not.\n\n\
         Output schema:\n{schema:#}\n\n{JSON_ONLY_INSTRUCTION}"
    )
}

/// Substitutes `{name}` placeholders in a single pass.
///
/// Values are inserted verbatim and never rescanned, so caller text that
/// happens to contain `{placeholder}` stays literal. Unknown placeholders are
/// left untouched.
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        if let Some(end) = after.find('}') {
            let key = &after[..end];
            if let Some((_, value)) = vars.iter().find(|(name, _)| *name == key) {
                out.push_str(value);
                rest = &after[end + 1..];
                continue;
            }
        }

        out.push('{');
        rest = after;
    }

    out.push_str(rest);
    out
}
