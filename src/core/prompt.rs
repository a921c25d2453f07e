use serde_json::{json, Value};

/// Instructional template sent with every request. The client description is
/// embedded verbatim, quoted.
pub fn build_prompt(description: &str) -> String {
    format!(
        r#"You are an expert video editor and professional stock footage researcher.
Your goal is to help an editor find the perfect B-roll or footage based on a client's possibly vague description.

Analyze the following client request: "{description}"

Provide a structured list of keywords and phrases categorized to help find footage on sites like Shutterstock, Getty Images, Artgrid, or YouTube.

Categories:
1. Literal: What is actually seen in the frame? (e.g., "man typing", "sunrise over mountains").
2. Conceptual: Metaphors and abstract ideas (e.g., "success", "isolation", "connection", "innovation").
3. Emotional: The mood or vibe (e.g., "melancholic", "energetic", "hopeful", "cinematic").
4. Technical: Shot types and styles (e.g., "slow motion", "drone shot", "bokeh", "close up", "4k").
5. Search Phrases: Complete, ready-to-paste search queries that combine these elements for best results.

Return ONLY JSON."#
    )
}

/// Declarative schema for the structured output: an object with five
/// array-of-string properties, all required. Backend-neutral shape; the
/// generator embeds it into the provider request as-is.
pub fn response_schema() -> Value {
    let string_array = json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "literal": string_array,
            "conceptual": string_array,
            "emotional": string_array,
            "technical": string_array,
            "searchPhrases": string_array,
        },
        "required": ["literal", "conceptual", "emotional", "technical", "searchPhrases"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_description_verbatim() {
        let prompt = build_prompt("tired nurse finishing a night shift");
        assert!(prompt.contains(r#""tired nurse finishing a night shift""#));
    }

    #[test]
    fn test_schema_requires_all_five_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec![
                "literal",
                "conceptual",
                "emotional",
                "technical",
                "searchPhrases"
            ]
        );
        for field in required {
            assert_eq!(schema["properties"][field]["type"], "ARRAY");
            assert_eq!(schema["properties"][field]["items"]["type"], "STRING");
        }
    }
}
