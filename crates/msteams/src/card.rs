//! MessageCard wire types.
//!
//! Field order in these structs is the key order of the serialized JSON, so
//! snapshot output stays stable.

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::events::User;

/// Card type understood by the Teams connector.
pub const CARD_TYPE: &str = "MessageCard";

/// Schema context of the legacy actionable message format.
pub const CARD_CONTEXT: &str = "https://schema.org/extensions";

/// Action type for a plain link button.
pub const ACTION_OPEN_URI: &str = "OpenUri";

/// Label of the link button.
pub const ACTION_LABEL: &str = "View in Gitea";

/// Platform tag of the single link target.
pub const TARGET_OS_DEFAULT: &str = "default";

/// Theme colors used by the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Green,
    GreenLight,
    Yellow,
    Grey,
    Purple,
    Orange,
    OrangeLight,
    Red,
}

impl ThemeColor {
    /// Get the RGB value for this color.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        match self {
            Self::Green => 0x001a_c600,
            Self::GreenLight => 0x00bf_e5bf,
            Self::Yellow => 0x00ff_d930,
            Self::Grey => 0x00c3_c3c3,
            Self::Purple => 0x0072_89da,
            Self::Orange => 0x00eb_6420,
            Self::OrangeLight => 0x00e6_8d60,
            Self::Red => 0x00ff_3232,
        }
    }

    /// Lower-case hex without a leading `#`, always six digits.
    #[must_use]
    pub fn hex(self) -> String {
        format!("{:06x}", self.rgb())
    }
}

/// A labeled value shown in the card section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

impl Fact {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Activity section describing who did what.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub activity_title: String,
    pub activity_subtitle: String,
    pub activity_image: String,
    pub facts: Vec<Fact>,
    pub text: String,
}

/// A button on the card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "@type")]
    pub action_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<ActionTarget>,
}

/// Where a button leads, per platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionTarget {
    pub os: String,
    pub uri: String,
}

/// The payload posted to a Teams incoming webhook.
///
/// `MessageCard::default()` is the empty card returned for event types that
/// have no builder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    pub card_type: String,
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<Section>,
    #[serde(rename = "potentialAction")]
    pub potential_action: Vec<Action>,
}

impl MessageCard {
    /// Assemble a card with one section and one link button.
    ///
    /// The title doubles as the summary shown in notification previews.
    #[must_use]
    pub fn new(
        title: String,
        color: ThemeColor,
        sender: &User,
        text: String,
        facts: Vec<Fact>,
        uri: String,
    ) -> Self {
        Self {
            card_type: CARD_TYPE.to_string(),
            context: CARD_CONTEXT.to_string(),
            theme_color: color.hex(),
            summary: title.clone(),
            title,
            sections: vec![Section {
                activity_title: sender.full_name.clone(),
                activity_subtitle: sender.username.clone(),
                activity_image: sender.avatar_url.clone(),
                facts,
                text,
            }],
            potential_action: vec![Action {
                action_type: ACTION_OPEN_URI.to_string(),
                name: ACTION_LABEL.to_string(),
                targets: vec![ActionTarget {
                    os: TARGET_OS_DEFAULT.to_string(),
                    uri,
                }],
            }],
        }
    }

    /// The single activity section, if this is not the empty card.
    #[must_use]
    pub fn section(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// URI of the link button, if this is not the empty card.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.potential_action
            .first()
            .and_then(|action| action.targets.first())
            .map(|target| target.uri.as_str())
    }
}

/// A webhook body that can be signed and encoded for delivery.
pub trait Payloader {
    /// Attach the hook secret to the payload.
    fn set_secret(&mut self, secret: &str);

    /// Encode the payload as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Json`] if encoding fails.
    fn json_payload(&self) -> Result<Vec<u8>, CardError>;
}

impl Payloader for MessageCard {
    // Teams authenticates by webhook URL; nothing goes into the body.
    fn set_secret(&mut self, _secret: &str) {}

    fn json_payload(&self) -> Result<Vec<u8>, CardError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
