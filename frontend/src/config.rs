use log::Level;

pub const BUSINESS_NAME: &str = "Pureskn & Beauty";

/// International format without `+`, as wa.me expects.
pub const WHATSAPP_NUMBER: &str = "447748974103";

/// Embedded into the services dialog when set.
pub const SERVICES_VIDEO_URL: Option<&str> = None;

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Facebook",
        href: "https://www.facebook.com/profile.php?id=100089822972422",
        icon: "/assets/icons/facebook.svg",
    },
    SocialLink {
        name: "Instagram",
        href: "https://instagram.com/puresknandbeauty",
        icon: "/assets/icons/instagram.svg",
    },
];

pub fn whatsapp_link(message: Option<&str>) -> String {
    match message {
        Some(text) if !text.is_empty() => format!(
            "https://wa.me/{}?text={}",
            WHATSAPP_NUMBER,
            urlencoding::encode(text)
        ),
        _ => format!("https://wa.me/{}", WHATSAPP_NUMBER),
    }
}

pub fn treatment_enquiry_link(title: &str) -> String {
    whatsapp_link(Some(&format!("Hi, I'd like to enquire about {}.", title)))
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_whatsapp_link_has_no_query() {
        assert_eq!(whatsapp_link(None), "https://wa.me/447748974103");
        assert_eq!(whatsapp_link(Some("")), "https://wa.me/447748974103");
    }

    #[test]
    fn enquiry_text_is_url_encoded() {
        let link = treatment_enquiry_link("Brow Wax & Shape");
        assert_eq!(
            link,
            "https://wa.me/447748974103?text=Hi%2C%20I%27d%20like%20to%20enquire%20about%20Brow%20Wax%20%26%20Shape."
        );
    }

    #[test]
    fn social_links_are_external() {
        assert!(SOCIAL_LINKS.iter().all(|link| link.href.starts_with("https://")));
    }
}
