//! Contact Interactions
//!
//! Decides what a click on a member card or a contact link should do.
//! The device is described once per session by [`DeviceContext`]; the
//! browser side only carries out the returned [`ContactAction`].

use crate::config::Config;
use crate::layout::MemberCard;

/// User-agent fragments of handheld devices
const HANDHELD_AGENTS: &[&str] = &["iphone", "ipad", "ipod", "android"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceContext {
    /// User agent looks like a phone or tablet
    pub handheld_agent: bool,
    /// `window.innerWidth` at startup, in CSS pixels
    pub viewport_width: f64,
}

impl Default for DeviceContext {
    fn default() -> Self {
        Self {
            handheld_agent: false,
            viewport_width: 1280.0,
        }
    }
}

impl DeviceContext {
    pub fn from_user_agent(user_agent: &str, viewport_width: f64) -> Self {
        let agent = user_agent.to_lowercase();
        Self {
            handheld_agent: HANDHELD_AGENTS.iter().any(|marker| agent.contains(marker)),
            viewport_width,
        }
    }

    /// Phone-style behavior: dial or mail instead of copying
    pub fn is_handheld(&self, config: &Config) -> bool {
        self.handheld_agent || self.viewport_width <= config.handheld_max_width
    }

    fn is_wide(&self, config: &Config) -> bool {
        self.viewport_width >= config.copy_min_width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
}

impl ContactKind {
    pub fn href(self, value: &str) -> String {
        match self {
            ContactKind::Phone => format!("tel:{}", value),
            ContactKind::Email => format!("mailto:{}", value),
        }
    }

    pub fn copied_notice(self) -> &'static str {
        match self {
            ContactKind::Phone => "전화번호가 복사되었습니다.",
            ContactKind::Email => "이메일이 복사되었습니다.",
        }
    }
}

/// Which view a contact link belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSurface {
    MobileList,
    DesktopTree,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactAction {
    /// Navigate to a `tel:`/`mailto:` URL
    Open(String),
    /// Put `text` on the clipboard, then toast `notice`
    Copy { text: String, notice: String },
    /// Leave the click alone
    Nothing,
}

/// Outcome of clicking anywhere on a member card
pub fn card_action(card: &MemberCard, device: &DeviceContext, config: &Config) -> ContactAction {
    if card.hiring {
        return ContactAction::Nothing;
    }

    if device.is_handheld(config) {
        if let Some(phone) = &card.phone {
            ContactAction::Open(ContactKind::Phone.href(phone))
        } else if let Some(email) = &card.email {
            ContactAction::Open(ContactKind::Email.href(email))
        } else {
            ContactAction::Nothing
        }
    } else {
        match card.preferred_contact() {
            Some(value) => ContactAction::Copy {
                text: value.to_string(),
                notice: format!("클립보드에 복사되었습니다: {}", value),
            },
            None => ContactAction::Nothing,
        }
    }
}

/// Outcome of clicking an inline email/phone link.
///
/// `Nothing` means the browser should follow the link natively.
pub fn link_action(
    kind: ContactKind,
    value: &str,
    surface: LinkSurface,
    device: &DeviceContext,
    config: &Config,
) -> ContactAction {
    let copies = match surface {
        LinkSurface::DesktopTree => device.is_wide(config),
        LinkSurface::MobileList => device.is_wide(config) && !device.handheld_agent,
    };
    if copies {
        ContactAction::Copy {
            text: value.to_string(),
            notice: kind.copied_notice().to_string(),
        }
    } else {
        ContactAction::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0";

    fn card(email: Option<&str>, phone: Option<&str>) -> MemberCard {
        MemberCard {
            display_name: "Kim".into(),
            title: Some("PRO".into()),
            team: None,
            email: email.map(String::from),
            phone: phone.map(String::from),
            photo_url: None,
            avatar: "K".into(),
            hiring: false,
        }
    }

    #[test]
    fn test_device_detection() {
        let config = Config::default();
        assert!(DeviceContext::from_user_agent(IPHONE, 1400.0).is_handheld(&config));
        assert!(DeviceContext::from_user_agent(DESKTOP, 700.0).is_handheld(&config));
        assert!(DeviceContext::from_user_agent(DESKTOP, 768.0).is_handheld(&config));
        assert!(!DeviceContext::from_user_agent(DESKTOP, 1024.0).is_handheld(&config));
    }

    #[test]
    fn test_handheld_prefers_phone() {
        let config = Config::default();
        let phone = DeviceContext::from_user_agent(IPHONE, 390.0);

        assert_eq!(
            card_action(&card(Some("kim@corp.test"), Some("010-1234")), &phone, &config),
            ContactAction::Open("tel:010-1234".into())
        );
        assert_eq!(
            card_action(&card(Some("kim@corp.test"), None), &phone, &config),
            ContactAction::Open("mailto:kim@corp.test".into())
        );
        assert_eq!(card_action(&card(None, None), &phone, &config), ContactAction::Nothing);
    }

    #[test]
    fn test_desktop_copies_email_first() {
        let config = Config::default();
        let desktop = DeviceContext::from_user_agent(DESKTOP, 1440.0);

        match card_action(&card(Some("kim@corp.test"), Some("010-1234")), &desktop, &config) {
            ContactAction::Copy { text, notice } => {
                assert_eq!(text, "kim@corp.test");
                assert!(notice.ends_with("kim@corp.test"));
            }
            other => panic!("expected copy, got {:?}", other),
        }
        assert!(matches!(
            card_action(&card(None, Some("010-1234")), &desktop, &config),
            ContactAction::Copy { ref text, .. } if text == "010-1234"
        ));
        assert_eq!(card_action(&card(None, None), &desktop, &config), ContactAction::Nothing);
    }

    #[test]
    fn test_hiring_card_is_inert() {
        let config = Config::default();
        let mut opening = card(Some("jobs@corp.test"), None);
        opening.hiring = true;
        for device in [
            DeviceContext::from_user_agent(IPHONE, 390.0),
            DeviceContext::from_user_agent(DESKTOP, 1440.0),
        ] {
            assert_eq!(card_action(&opening, &device, &config), ContactAction::Nothing);
        }
    }

    #[test]
    fn test_links_copy_only_on_wide_viewports() {
        let config = Config::default();
        let wide = DeviceContext::from_user_agent(DESKTOP, 1200.0);
        let narrow = DeviceContext::from_user_agent(DESKTOP, 1100.0);
        let wide_tablet = DeviceContext::from_user_agent("Mozilla/5.0 (iPad; CPU OS 17_0)", 1366.0);

        let copy = link_action(ContactKind::Email, "kim@corp.test", LinkSurface::DesktopTree, &wide, &config);
        assert_eq!(
            copy,
            ContactAction::Copy {
                text: "kim@corp.test".into(),
                notice: ContactKind::Email.copied_notice().into(),
            }
        );
        assert_eq!(
            link_action(ContactKind::Phone, "010", LinkSurface::DesktopTree, &narrow, &config),
            ContactAction::Nothing
        );

        // the list view never copies on a handheld agent
        assert_eq!(
            link_action(ContactKind::Phone, "010", LinkSurface::MobileList, &wide_tablet, &config),
            ContactAction::Nothing
        );
        assert!(matches!(
            link_action(ContactKind::Phone, "010", LinkSurface::DesktopTree, &wide_tablet, &config),
            ContactAction::Copy { .. }
        ));
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(ContactKind::Phone.href("010-1234"), "tel:010-1234");
        assert_eq!(ContactKind::Email.href("a@b.test"), "mailto:a@b.test");
    }
}
