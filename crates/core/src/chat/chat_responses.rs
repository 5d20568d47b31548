//! Scripted assistant replies.

use crate::users::UserRole;

/// A keyword rule: any keyword hit selects `reply`.
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// Checked in order; the first rule with a matching keyword wins.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["price", "cost", "expensive"],
        reply: "Property prices vary based on location, size, and features. What's your budget range?",
    },
    KeywordRule {
        keywords: &["location", "area", "where"],
        reply: "We have properties in various locations. Any particular area you're interested in?",
    },
    KeywordRule {
        keywords: &["mortgage", "loan", "finance"],
        reply: "Our ROI calculator can help estimate mortgage payments and investment returns. Would you like to try it?",
    },
    KeywordRule {
        keywords: &["document", "upload", "file"],
        reply: "You can securely upload and manage your documents in the Documents section. All files are encrypted.",
    },
    KeywordRule {
        keywords: &["sell", "selling", "list"],
        reply: "To list your property, go to the 'Add Property' section and complete the details. Would you like more information?",
    },
];

const BUYER_REPLIES: &[&str] = &[
    "Here are some properties that match your criteria. Would you like to schedule a viewing?",
    "Have you considered looking in neighboring areas? They often offer better value.",
    "I can help you calculate mortgage payments for this property. Would you like to see an estimate?",
    "This property has been on the market for 2 weeks. The seller might be open to negotiation.",
    "Based on your preferences, I recommend exploring properties in the 300K-400K range.",
];

const SELLER_REPLIES: &[&str] = &[
    "Your listing is getting good traction! 15 users have saved it in the last 24 hours.",
    "Professional photography can increase interest in your property by up to 30%.",
    "Based on market trends, your asking price is competitive for your area.",
    "Would you like tips on preparing your home for viewings?",
    "Similar properties in your area are selling within 3 weeks of listing.",
];

const GENERAL_REPLIES: &[&str] = &[
    "How else can I assist you with your real estate needs?",
    "Feel free to ask any questions about our services or the real estate market.",
    "I'm here to help make your real estate journey easier!",
    "Is there anything specific you'd like to know about the real estate process?",
    "Would you like me to connect you with one of our real estate professionals?",
];

/// Reply for the first keyword rule that matches `message`, if any.
pub fn keyword_reply(message: &str) -> Option<&'static str> {
    let lower = message.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.reply)
}

/// Fallback replies for a role.
pub fn reply_pool(role: UserRole) -> &'static [&'static str] {
    match role {
        UserRole::Buyer => BUYER_REPLIES,
        UserRole::Seller => SELLER_REPLIES,
        UserRole::Guest => GENERAL_REPLIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_reply_is_case_insensitive() {
        assert_eq!(keyword_reply("What's the PRICE?"), Some(KEYWORD_RULES[0].reply));
        assert_eq!(keyword_reply("Where is it?"), Some(KEYWORD_RULES[1].reply));
        assert_eq!(keyword_reply("need a loan"), Some(KEYWORD_RULES[2].reply));
        assert_eq!(keyword_reply("upload my deed"), Some(KEYWORD_RULES[3].reply));
        assert_eq!(keyword_reply("I want to sell"), Some(KEYWORD_RULES[4].reply));
    }

    #[test]
    fn test_earlier_rules_win() {
        // "cost" (rule 1) beats "loan" (rule 3)
        assert_eq!(
            keyword_reply("loan cost for this area"),
            Some(KEYWORD_RULES[0].reply)
        );
    }

    #[test]
    fn test_no_keyword_yields_none() {
        assert_eq!(keyword_reply("hello there"), None);
    }

    #[test]
    fn test_each_role_has_a_pool() {
        for role in [UserRole::Buyer, UserRole::Seller, UserRole::Guest] {
            assert_eq!(reply_pool(role).len(), 5);
        }
        assert_ne!(reply_pool(UserRole::Buyer), reply_pool(UserRole::Seller));
    }
}
