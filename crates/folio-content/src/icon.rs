//! Icon identifiers for links and skills.
//!
//! Content files name icons by string (`icon = "github"`). Those names are
//! resolved once, at load time, into the closed [`Icon`] set; unknown names
//! become [`Icon::Link`] so a typo never breaks a page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every icon the site knows how to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    Github,
    Gitlab,
    Twitter,
    Linkedin,
    Discord,
    Youtube,
    Twitch,
    Instagram,
    Spotify,
    Mail,
    Globe,
    Code,
    Music,
    Coffee,
    Store,
    Gift,
    Book,
    Database,
    Terminal,
    #[default]
    Link,
}

impl Icon {
    /// All icons, in declaration order.
    pub const ALL: [Icon; 20] = [
        Icon::Github,
        Icon::Gitlab,
        Icon::Twitter,
        Icon::Linkedin,
        Icon::Discord,
        Icon::Youtube,
        Icon::Twitch,
        Icon::Instagram,
        Icon::Spotify,
        Icon::Mail,
        Icon::Globe,
        Icon::Code,
        Icon::Music,
        Icon::Coffee,
        Icon::Store,
        Icon::Gift,
        Icon::Book,
        Icon::Database,
        Icon::Terminal,
        Icon::Link,
    ];

    /// Resolve an icon name. Matching ignores case, spaces, dashes and
    /// underscores, and accepts a few common aliases.
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "github" => Icon::Github,
            "gitlab" => Icon::Gitlab,
            "twitter" | "x" => Icon::Twitter,
            "linkedin" => Icon::Linkedin,
            "discord" => Icon::Discord,
            "youtube" => Icon::Youtube,
            "twitch" => Icon::Twitch,
            "instagram" => Icon::Instagram,
            "spotify" => Icon::Spotify,
            "mail" | "email" | "envelope" => Icon::Mail,
            "globe" | "website" | "web" => Icon::Globe,
            "code" | "code2" => Icon::Code,
            "music" | "headphones" => Icon::Music,
            "coffee" | "kofi" => Icon::Coffee,
            "store" | "shop" | "shoppingcart" | "tebex" => Icon::Store,
            "gift" => Icon::Gift,
            "book" | "docs" | "bookopen" => Icon::Book,
            "database" | "server" => Icon::Database,
            "terminal" | "cli" => Icon::Terminal,
            _ => Icon::Link,
        }
    }

    /// Canonical lowercase name, as written back to content files.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Github => "github",
            Icon::Gitlab => "gitlab",
            Icon::Twitter => "twitter",
            Icon::Linkedin => "linkedin",
            Icon::Discord => "discord",
            Icon::Youtube => "youtube",
            Icon::Twitch => "twitch",
            Icon::Instagram => "instagram",
            Icon::Spotify => "spotify",
            Icon::Mail => "mail",
            Icon::Globe => "globe",
            Icon::Code => "code",
            Icon::Music => "music",
            Icon::Coffee => "coffee",
            Icon::Store => "store",
            Icon::Gift => "gift",
            Icon::Book => "book",
            Icon::Database => "database",
            Icon::Terminal => "terminal",
            Icon::Link => "link",
        }
    }

    /// Human-readable label for accessibility text.
    pub fn label(self) -> &'static str {
        match self {
            Icon::Github => "GitHub",
            Icon::Gitlab => "GitLab",
            Icon::Twitter => "Twitter / X",
            Icon::Linkedin => "LinkedIn",
            Icon::Discord => "Discord",
            Icon::Youtube => "YouTube",
            Icon::Twitch => "Twitch",
            Icon::Instagram => "Instagram",
            Icon::Spotify => "Spotify",
            Icon::Mail => "Email",
            Icon::Globe => "Website",
            Icon::Code => "Code",
            Icon::Music => "Music",
            Icon::Coffee => "Ko-fi",
            Icon::Store => "Store",
            Icon::Gift => "Gift",
            Icon::Book => "Docs",
            Icon::Database => "Database",
            Icon::Terminal => "Terminal",
            Icon::Link => "Link",
        }
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Icon::from_name(&name)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.name().to_string()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_normalizes() {
        assert_eq!(Icon::from_name("GitHub"), Icon::Github);
        assert_eq!(Icon::from_name("linked-in"), Icon::Linkedin);
        assert_eq!(Icon::from_name("Shopping_Cart"), Icon::Store);
        assert_eq!(Icon::from_name("X"), Icon::Twitter);
    }

    #[test]
    fn test_unknown_name_falls_back_to_link() {
        assert_eq!(Icon::from_name("sparkles"), Icon::Link);
        assert_eq!(Icon::from_name(""), Icon::Link);
    }

    #[test]
    fn test_name_resolves_back_to_same_icon() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_name(icon.name()), icon);
        }
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Row {
            icon: Icon,
        }
        let row: Row = toml::from_str(r#"icon = "Discord""#).unwrap();
        assert_eq!(row.icon, Icon::Discord);

        let row: Row = toml::from_str(r#"icon = "unheard-of""#).unwrap();
        assert_eq!(row.icon, Icon::Link);
    }
}
