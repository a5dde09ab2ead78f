/// Fallback text returned when the completion model yields no usable
/// output. The front-end always receives a non-empty answer.
pub const FALLBACK_ANSWER: &str =
    "Ich konnte dazu gerade keine passende Antwort erzeugen. Formuliere die Frage bitte konkreter.";

/// A tutoring answer ready to hand back to the front-end.
/// Invariant: the text is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    text: String,
}

impl Answer {
    /// Builds an answer from the raw model output, substituting the
    /// fallback text when the model produced nothing usable.
    pub fn from_generated(generated: Option<String>) -> Self {
        match generated {
            Some(text) if !text.trim().is_empty() => Self { text },
            _ => Self {
                text: FALLBACK_ANSWER.to_string(),
            },
        }
    }

    /// Returns the answer text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the answer and returns the owned text.
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_generated_text() {
        let answer = Answer::from_generated(Some("Denk an die Schleifenbedingung.".to_string()));
        assert_eq!(answer.text(), "Denk an die Schleifenbedingung.");
    }

    #[test]
    fn should_substitute_fallback_when_text_is_absent() {
        let answer = Answer::from_generated(None);
        assert_eq!(answer.text(), FALLBACK_ANSWER);
    }

    #[test]
    fn should_substitute_fallback_when_text_is_empty() {
        let answer = Answer::from_generated(Some(String::new()));
        assert_eq!(answer.text(), FALLBACK_ANSWER);
    }

    #[test]
    fn should_substitute_fallback_when_text_is_whitespace_only() {
        let answer = Answer::from_generated(Some("   \n\t".to_string()));
        assert_eq!(answer.text(), FALLBACK_ANSWER);
    }

    #[test]
    fn should_never_produce_an_empty_answer() {
        for generated in [None, Some(String::new()), Some("  ".to_string())] {
            let answer = Answer::from_generated(generated);
            assert!(!answer.text().is_empty());
        }
    }

    #[test]
    fn should_return_owned_text_on_into_text() {
        let answer = Answer::from_generated(Some("Hinweis".to_string()));
        assert_eq!(answer.into_text(), "Hinweis");
    }
}
