use serde::{Deserialize, Serialize};

use super::DISCLAIMER;

/// Fixed-shape advice bundle returned for text and voice inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub summary: String,
    pub detected_issue: String,
    pub risk_level: String,
    pub guidance: String,
    pub nutrition_advice: String,
    pub activity_advice: String,
    pub disclaimer: String,
}

/// Keyword-lookup "analysis": the first matching keyword group, in fixed
/// order, determines the whole bundle. Multiple matches do not combine.
pub fn analyze_text(text: &str) -> TextAnalysis {
    let lower = text.to_lowercase();

    let mut summary = "No specific issues detected.";
    let mut detected_issue = "Normal";
    let mut risk_level = "Low";
    let mut guidance = "Continue monitoring your cycle.";
    let mut nutrition_advice = "Maintain a balanced diet.";
    let mut activity_advice = "Light to moderate exercise is fine.";

    if lower.contains("late") || lower.contains("delay") {
        summary = "Delayed period detected.";
        detected_issue = "Delayed Period";
        risk_level = "Medium";
        guidance = "Stress, diet, and lifestyle can affect your cycle. Consider a pregnancy test if necessary.";
    } else if lower.contains("pain") || lower.contains("cramps") {
        summary = "Menstrual pain reported.";
        detected_issue = "Menstrual Pain";
        risk_level = "Medium";
        guidance = "A warm compress and over-the-counter pain relief can help.";
        nutrition_advice = "Avoid caffeine and salty foods. Drink ginger tea.";
        activity_advice = "Gentle yoga or stretching may alleviate cramps.";
    } else if lower.contains("tired") || lower.contains("fatigue") {
        summary = "Low energy reported.";
        detected_issue = "Low Energy";
        risk_level = "Low";
        guidance = "Ensure you are getting enough sleep.";
        nutrition_advice = "Increase iron and vitamin B intake.";
    } else if lower.contains("irregular") {
        summary = "Irregular cycle detected.";
        detected_issue = "Irregular Cycle";
        risk_level = "Medium";
        guidance = "Track your cycle consistently to identify patterns.";
    } else if lower.contains("mood") {
        summary = "Mood fluctuations reported.";
        detected_issue = "Mood Fluctuation";
        risk_level = "Low";
        guidance = "Practice mindfulness and relaxation techniques.";
    }

    TextAnalysis {
        summary: summary.into(),
        detected_issue: detected_issue.into(),
        risk_level: risk_level.into(),
        guidance: guidance.into(),
        nutrition_advice: nutrition_advice.into(),
        activity_advice: activity_advice.into(),
        disclaimer: DISCLAIMER.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cramps_without_delay_keywords_is_menstrual_pain() {
        let result = analyze_text("I have terrible cramps today");
        assert_eq!(result.detected_issue, "Menstrual Pain");
        assert_eq!(result.risk_level, "Medium");
        assert_eq!(
            result.nutrition_advice,
            "Avoid caffeine and salty foods. Drink ginger tea."
        );
    }

    #[test]
    fn delay_keyword_takes_precedence_over_pain() {
        // "late" and "cramps" both present; the group order decides.
        let result = analyze_text("My period is late and I have cramps");
        assert_eq!(result.detected_issue, "Delayed Period");
        assert_eq!(result.risk_level, "Medium");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = analyze_text("FATIGUE all week");
        assert_eq!(result.detected_issue, "Low Energy");
        assert_eq!(result.risk_level, "Low");
    }

    #[test]
    fn no_keyword_returns_default_bundle() {
        let result = analyze_text("everything feels fine");
        assert_eq!(result.detected_issue, "Normal");
        assert_eq!(result.risk_level, "Low");
        assert_eq!(result.summary, "No specific issues detected.");
    }

    #[test]
    fn disclaimer_present_on_every_branch() {
        for input in ["late", "pain", "tired", "irregular", "mood swings", "ok"] {
            assert_eq!(analyze_text(input).disclaimer, DISCLAIMER);
        }
    }

    #[test]
    fn mood_keyword_is_lowest_priority_group() {
        let result = analyze_text("irregular cycle and mood swings");
        assert_eq!(result.detected_issue, "Irregular Cycle");
    }
}
