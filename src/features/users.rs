//! User records shown on cards
//!
//! Records are read-only to the card. They come from a JSON array on disk or
//! from the built-in sample deck.

use std::path::Path;

use iced::Color;
use serde::{Deserialize, Serialize};

/// Info strip colour used when a record has none (or an unparsable one)
pub const DEFAULT_COLOR: &str = "#57BCBC";

/// A profile rendered by one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Image URL or local path
    pub thumbnail: String,
    pub name: String,
    pub description: String,
    pub likes: Likes,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl User {
    /// Name as printed on the card
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Parsed info strip colour
    pub fn strip_color(&self) -> Color {
        self.color
            .parse::<Color>()
            .ok()
            .or_else(|| DEFAULT_COLOR.parse().ok())
            .unwrap_or(Color::from_rgb(0.34, 0.74, 0.74))
    }
}

/// Like count, numeric or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Likes {
    Count(u64),
    Text(String),
}

impl std::fmt::Display for Likes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Likes::Count(n) => write!(f, "{}", n),
            Likes::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Load a deck from a JSON array of user records
pub fn load_users(path: &Path) -> Result<Vec<User>, UsersError> {
    let content = std::fs::read_to_string(path).map_err(|e| UsersError::Io(e.to_string()))?;
    let users: Vec<User> =
        serde_json::from_str(&content).map_err(|e| UsersError::Parse(e.to_string()))?;
    if users.is_empty() {
        return Err(UsersError::Empty);
    }
    tracing::info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Built-in deck used when no users file is configured
pub fn sample_users() -> Vec<User> {
    let entries: [(&str, &str, &str, u64, &str); 5] = [
        (
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=600",
            "Diego Fernandes",
            "Product engineer. Coffee, climbing and late-night refactors.",
            412,
            "#57BCBC",
        ),
        (
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=600",
            "Ana Ribeiro",
            "Designer who draws interfaces before breakfast.",
            1208,
            "#E75A7C",
        ),
        (
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600",
            "Robson Marques",
            "Backend, queues and the occasional cron job.",
            97,
            "#5A6FE7",
        ),
        (
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=600",
            "Joana Costa",
            "Writes docs people actually read.",
            764,
            "#E7A35A",
        ),
        (
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=600",
            "Lucas Pereira",
            "Mobile developer. Swipes left on flaky tests.",
            33,
            "#6FBF73",
        ),
    ];

    entries
        .into_iter()
        .map(|(thumbnail, name, description, likes, color)| User {
            thumbnail: thumbnail.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            likes: Likes::Count(likes),
            color: color.to_string(),
        })
        .collect()
}

/// Errors that can occur loading users
#[derive(Debug, Clone)]
pub enum UsersError {
    Io(String),
    Parse(String),
    Empty,
}

impl std::fmt::Display for UsersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsersError::Io(e) => write!(f, "IO error: {}", e),
            UsersError::Parse(e) => write!(f, "Parse error: {}", e),
            UsersError::Empty => write!(f, "Users file contains no records"),
        }
    }
}

impl std::error::Error for UsersError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("swipecard-users-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_likes_number_or_text() {
        let json = r##"[
            {"thumbnail": "a.png", "name": "Ana", "description": "d", "likes": 12, "color": "#ff0000"},
            {"thumbnail": "b.png", "name": "Bia", "description": "d", "likes": "1.2k"}
        ]"##;
        let path = write_temp("likes.json", json);
        let users = load_users(&path).unwrap();

        assert_eq!(users[0].likes, Likes::Count(12));
        assert_eq!(users[0].likes.to_string(), "12");
        assert_eq!(users[1].likes.to_string(), "1.2k");
        assert_eq!(users[1].color, DEFAULT_COLOR);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_display_name_is_uppercase() {
        let user = &sample_users()[0];
        assert_eq!(user.display_name(), "DIEGO FERNANDES");
    }

    #[test]
    fn test_strip_color_falls_back() {
        let mut user = sample_users().remove(0);
        user.color = "#ff0000".to_string();
        assert_eq!(user.strip_color(), Color::from_rgb8(0xff, 0x00, 0x00));

        user.color = "definitely not a colour".to_string();
        assert_eq!(user.strip_color(), Color::from_rgb8(0x57, 0xbc, 0xbc));
    }

    #[test]
    fn test_empty_file_is_error() {
        let path = write_temp("empty.json", "[]");
        assert!(matches!(load_users(&path), Err(UsersError::Empty)));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = write_temp("broken.json", r#"[{"name": "no thumbnail"}]"#);
        assert!(matches!(load_users(&path), Err(UsersError::Parse(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_sample_deck_is_complete() {
        let users = sample_users();
        assert_eq!(users.len(), 5);
        assert!(users.iter().all(|u| u.color.parse::<Color>().is_ok()));
    }
}
