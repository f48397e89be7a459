// HTML rendering of the single page
use std::fmt;

const TEMPLATE: &str = include_str!("../templates/index.html");
const RESULT_SLOT: &str = "{{ result }}";

pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers.";

/// A predicted value; always shown with exactly two decimal digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction(pub f64);

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The three things the page can show below the form.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Empty,
    Predicted(Prediction),
    Failed(String),
}

pub fn render(state: &DisplayState) -> String {
    let result = match state {
        DisplayState::Empty => String::new(),
        DisplayState::Predicted(p) => format!(
            r#"<p class="prediction">Predicted energy load: <strong id="prediction">{p}</strong></p>"#
        ),
        DisplayState::Failed(msg) => {
            format!(r#"<p class="error" id="error">{}</p>"#, escape_html(msg))
        }
    };
    TEMPLATE.replace(RESULT_SLOT, &result)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FEATURE_NAMES;

    #[test]
    fn prediction_is_shown_with_two_decimals() {
        assert_eq!(Prediction(15.5).to_string(), "15.50");
        assert_eq!(Prediction(-3.14159).to_string(), "-3.14");
        assert_eq!(Prediction(28.005001).to_string(), "28.01");
    }

    #[test]
    fn empty_state_has_form_only() {
        let page = render(&DisplayState::Empty);
        for name in FEATURE_NAMES {
            assert!(page.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
        assert!(!page.contains(RESULT_SLOT));
        assert!(!page.contains(r#"id="prediction""#));
        assert!(!page.contains(r#"id="error""#));
    }

    #[test]
    fn states_are_mutually_exclusive() {
        let page = render(&DisplayState::Predicted(Prediction(21.337)));
        assert!(page.contains(r#"<strong id="prediction">21.34</strong>"#));
        assert!(!page.contains(r#"id="error""#));

        let page = render(&DisplayState::Failed(INVALID_INPUT_MESSAGE.into()));
        assert!(page.contains(INVALID_INPUT_MESSAGE));
        assert!(!page.contains(r#"id="prediction""#));
    }

    #[test]
    fn error_text_is_escaped() {
        let page = render(&DisplayState::Failed("<script>&'\"".into()));
        assert!(page.contains("&lt;script&gt;&amp;&#x27;&quot;"));
        assert!(!page.contains("<script>"));
    }
}
