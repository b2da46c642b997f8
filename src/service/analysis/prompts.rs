//! Prompt template for text analysis

/// Canonical sentinel returned in `notes` when no fallacies are detected
pub const NO_FALLACIES_SENTINEL: &str = "No obvious argumentative fallacies";

/// Build the analysis prompt, embedding the input text verbatim
///
/// The text goes inside a `'''`-delimited block with no truncation. The model
/// is instructed to return only a JSON object with keys `emotion`,
/// `factuality` and `notes`.
pub fn build_analysis_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text using these three criteria:

1. **Emotionality**: Assess how emotionally charged or expressive the language is. Use a scale from -5 (neutral, analytical) to +5 (strongly emotional, biased, sarcastic).

2. **Factuality vs. Speculativeness**: Evaluate how much the text relies on facts, scientific sources, logical reasoning, or verified data. If it lacks supporting evidence, relies on speculation or conspiracy framing, score closer to +5. If it is well-referenced and evidence-based, score closer to -5.

3. **Notes**: Identify any argumentative fallacies (e.g., ad hominem, strawman, false cause, slippery slope, etc.). If no significant fallacies are found, reply with "{sentinel}"

Example: The claim "scientists are corrupt and follow an agenda" contains both ad hominem and conspiracy framing.

Text to analyze:
'''{text}'''

---

Respond with a valid JSON object in this format:

{{
  "emotion": <number between -5 and +5>,
  "factuality": <number between -5 and +5>,
  "notes": "<list of fallacies or '{sentinel}'>"
}}

Do not write any additional text, comments, intros, or explanations. Return only a valid JSON response."#,
        sentinel = NO_FALLACIES_SENTINEL,
        text = text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_text_verbatim_in_delimited_block() {
        let text = "The sky is blue because of Rayleigh scattering.";
        let prompt = build_analysis_prompt(text);

        assert!(prompt.contains(&format!("'''{}'''", text)));
    }

    #[test]
    fn prompt_does_not_truncate_long_input() {
        let text = "word ".repeat(10_000);
        let prompt = build_analysis_prompt(&text);

        assert!(prompt.contains(&format!("'''{}'''", text)));
    }

    #[test]
    fn prompt_handles_empty_input() {
        let prompt = build_analysis_prompt("");

        assert!(prompt.contains("''''''"));
    }

    #[test]
    fn prompt_uses_single_sentinel_phrasing() {
        let prompt = build_analysis_prompt("anything");

        assert_eq!(prompt.matches(NO_FALLACIES_SENTINEL).count(), 2);
        assert!(!prompt.contains("No apparent logical fallacies"));
    }
}
