//! Tool categories and name-based classification
//!
//! Every tool reported by the gateway lands in exactly one category.
//! `Other` is the catch-all, so classification is total.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display bucket for related tools, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Contact Management")]
    ContactManagement,
    #[serde(rename = "Messaging & Conversations")]
    Messaging,
    #[serde(rename = "Blog Management")]
    BlogManagement,
    #[serde(rename = "Opportunity Management")]
    OpportunityManagement,
    #[serde(rename = "Calendar & Appointments")]
    Calendar,
    #[serde(rename = "Email Marketing")]
    EmailMarketing,
    #[serde(rename = "Location Management")]
    LocationManagement,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Media Library")]
    MediaLibrary,
    #[serde(rename = "Custom Objects")]
    CustomObjects,
    #[serde(rename = "Payments")]
    Payments,
    #[serde(rename = "Invoices")]
    Invoices,
    #[serde(rename = "Other")]
    Other,
}

/// Icon used when a label does not name a known category
pub const DEFAULT_ICON: &str = "fas fa-tools";

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 13] = [
        Category::ContactManagement,
        Category::Messaging,
        Category::BlogManagement,
        Category::OpportunityManagement,
        Category::Calendar,
        Category::EmailMarketing,
        Category::LocationManagement,
        Category::SocialMedia,
        Category::MediaLibrary,
        Category::CustomObjects,
        Category::Payments,
        Category::Invoices,
        Category::Other,
    ];

    /// Classify a tool by name. First matching rule wins.
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        let has = |needle: &str| name.contains(needle);

        if has("contact") {
            Self::ContactManagement
        } else if has("conversation") || has("sms") || (has("email") && !has("template")) {
            Self::Messaging
        } else if has("blog") {
            Self::BlogManagement
        } else if has("opportunity") || has("pipeline") {
            Self::OpportunityManagement
        } else if has("calendar") || has("appointment") {
            Self::Calendar
        } else if has("email") && has("template") {
            Self::EmailMarketing
        } else if has("location") {
            Self::LocationManagement
        } else if has("social") {
            Self::SocialMedia
        } else if has("media") {
            Self::MediaLibrary
        } else if has("object") {
            Self::CustomObjects
        } else if has("payment") || has("order") || has("transaction") {
            Self::Payments
        } else if has("invoice") || has("estimate") {
            Self::Invoices
        } else {
            Self::Other
        }
    }

    /// Position in display order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::ContactManagement => "Contact Management",
            Self::Messaging => "Messaging & Conversations",
            Self::BlogManagement => "Blog Management",
            Self::OpportunityManagement => "Opportunity Management",
            Self::Calendar => "Calendar & Appointments",
            Self::EmailMarketing => "Email Marketing",
            Self::LocationManagement => "Location Management",
            Self::SocialMedia => "Social Media",
            Self::MediaLibrary => "Media Library",
            Self::CustomObjects => "Custom Objects",
            Self::Payments => "Payments",
            Self::Invoices => "Invoices",
            Self::Other => "Other",
        }
    }

    /// Font Awesome icon token, as served to web frontends
    pub fn icon(self) -> &'static str {
        match self {
            Self::ContactManagement => "fas fa-users",
            Self::Messaging => "fas fa-comments",
            Self::BlogManagement => "fas fa-blog",
            Self::OpportunityManagement => "fas fa-chart-line",
            Self::Calendar => "fas fa-calendar",
            Self::EmailMarketing => "fas fa-envelope",
            Self::LocationManagement => "fas fa-map-marker-alt",
            Self::SocialMedia => "fas fa-share-alt",
            Self::MediaLibrary => "fas fa-photo-video",
            Self::CustomObjects => "fas fa-cubes",
            Self::Payments => "fas fa-credit-card",
            Self::Invoices => "fas fa-file-invoice",
            Self::Other => DEFAULT_ICON,
        }
    }

    /// Terminal glyph shown next to the label
    pub fn glyph(self) -> &'static str {
        match self {
            Self::ContactManagement => "👥",
            Self::Messaging => "💬",
            Self::BlogManagement => "📝",
            Self::OpportunityManagement => "📈",
            Self::Calendar => "📅",
            Self::EmailMarketing => "✉️",
            Self::LocationManagement => "📍",
            Self::SocialMedia => "🔗",
            Self::MediaLibrary => "🎞️",
            Self::CustomObjects => "🧊",
            Self::Payments => "💳",
            Self::Invoices => "🧾",
            Self::Other => "🛠️",
        }
    }

    /// Kebab-case slug, e.g. `email-marketing`
    pub fn slug(self) -> String {
        self.label()
            .to_lowercase()
            .replace(" & ", "-")
            .replace(' ', "-")
    }

    /// Parse a label or slug, case-insensitive
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == wanted || c.slug() == wanted)
    }
}

/// Icon for a category label; unknown labels get the default icon
pub fn icon_for_label(label: &str) -> &'static str {
    Category::ALL
        .into_iter()
        .find(|c| c.label() == label)
        .map(Category::icon)
        .unwrap_or(DEFAULT_ICON)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_rule() {
        let cases = [
            ("create_contact", Category::ContactManagement),
            ("conversation_list", Category::Messaging),
            ("send_sms", Category::Messaging),
            ("email_send", Category::Messaging),
            ("create_blog_post", Category::BlogManagement),
            ("search_opportunities", Category::Other),
            ("create_opportunity", Category::OpportunityManagement),
            ("get_pipelines", Category::OpportunityManagement),
            ("get_calendars", Category::Calendar),
            ("create_appointment", Category::Calendar),
            ("email_template_update", Category::EmailMarketing),
            ("get_location", Category::LocationManagement),
            ("social_post_create", Category::SocialMedia),
            ("upload_media_file", Category::MediaLibrary),
            ("get_object_schema", Category::CustomObjects),
            ("list_payment_orders", Category::Payments),
            ("get_transaction", Category::Payments),
            ("create_invoice", Category::Invoices),
            ("create_estimate", Category::Invoices),
            ("xyz_widget", Category::Other),
        ];

        for (name, expected) in cases {
            assert_eq!(Category::classify(name), expected, "classifying {}", name);
        }
    }

    #[test]
    fn test_email_template_never_messaging() {
        for name in ["email_template_x", "list_email_templates", "TEMPLATE_EMAIL"] {
            assert_eq!(Category::classify(name), Category::EmailMarketing);
        }
    }

    #[test]
    fn test_first_match_wins() {
        // contact beats sms
        assert_eq!(Category::classify("send_contact_sms"), Category::ContactManagement);
        // sms beats template-less email exclusion
        assert_eq!(Category::classify("sms_email_template"), Category::Messaging);
        // location beats media
        assert_eq!(Category::classify("location_media"), Category::LocationManagement);
        // "social_media" is social, not media
        assert_eq!(Category::classify("social_media_post"), Category::SocialMedia);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Category::classify("Create_Contact"), Category::ContactManagement);
        assert_eq!(Category::classify("GET_INVOICE"), Category::Invoices);
    }

    #[test]
    fn test_empty_name_is_other() {
        assert_eq!(Category::classify(""), Category::Other);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_from_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
            assert_eq!(Category::from_label(&category.slug()), Some(category));
        }
    }

    #[test]
    fn test_from_label_variants() {
        assert_eq!(Category::from_label("invoices"), Some(Category::Invoices));
        assert_eq!(Category::from_label("  Email Marketing "), Some(Category::EmailMarketing));
        assert_eq!(Category::from_label("messaging-conversations"), Some(Category::Messaging));
        assert_eq!(Category::from_label("calendar-appointments"), Some(Category::Calendar));
        assert_eq!(Category::from_label("widgets"), None);
    }

    #[test]
    fn test_icon_for_label() {
        assert_eq!(icon_for_label("Contact Management"), "fas fa-users");
        assert_eq!(icon_for_label("Invoices"), "fas fa-file-invoice");
        assert_eq!(icon_for_label("Nonexistent"), DEFAULT_ICON);
    }

    #[test]
    fn test_serialize_uses_label() {
        let json = serde_json::to_string(&Category::Calendar).unwrap();
        assert_eq!(json, "\"Calendar & Appointments\"");
        let parsed: Category = serde_json::from_str("\"Media Library\"").unwrap();
        assert_eq!(parsed, Category::MediaLibrary);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Messaging.to_string(), "Messaging & Conversations");
    }
}
