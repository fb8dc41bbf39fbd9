//! Reply selection
//!
//! Rules are checked in order and the first whose keywords appear in the
//! lower-cased message wins. With no match a canned response is drawn from
//! the random source.

use super::random::RandomSource;

pub const TOKEN_REPLY: &str = "I can help you convert your health points to INFLAMM tokens. Would you like to proceed with the conversion?";
pub const STEPS_REPLY: &str = "Your step count is looking great today! Keep it up!";
pub const SLEEP_REPLY: &str = "I notice your sleep duration is good, but you could improve sleep quality by maintaining a consistent sleep schedule.";
pub const HEART_REPLY: &str = "Your heart rate is within a healthy range. Regular exercise helps maintain good heart health.";
pub const HYDRATION_REPLY: &str = "You're doing well with hydration. Remember to drink water throughout the day.";

/// Fallback responses when no keyword matches
pub const CANNED_REPLIES: [&str; 5] = [
    "I've analyzed your health data. You're doing great with your step count today!",
    "Based on your sleep pattern, I recommend trying to go to bed 30 minutes earlier.",
    "Your heart rate looks good. Keep up the good work with your exercise routine!",
    "I see you've been consistent with your water intake. Great job!",
    "Would you like me to help you convert your health points to INFLAMM tokens?",
];

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Priority order matters: "heart rate points" is a token question.
const RULES: [Rule; 5] = [
    Rule {
        keywords: &["token", "point"],
        reply: TOKEN_REPLY,
    },
    Rule {
        keywords: &["step", "walk"],
        reply: STEPS_REPLY,
    },
    Rule {
        keywords: &["sleep"],
        reply: SLEEP_REPLY,
    },
    Rule {
        keywords: &["heart", "rate"],
        reply: HEART_REPLY,
    },
    Rule {
        keywords: &["water", "hydrat"],
        reply: HYDRATION_REPLY,
    },
];

/// Pick the assistant's reply to `text`
pub fn generate_reply(text: &str, random: &mut dyn RandomSource) -> &'static str {
    let lower = text.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.reply)
        .unwrap_or_else(|| CANNED_REPLIES[random.next_index(CANNED_REPLIES.len())])
}
