use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EnumParsingError {
    #[error("Unknown report category: {0}")]
    Category(String),
    #[error("Unknown report status: {0}")]
    Status(String),
}

/// RGB color used when presenting categories and statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Pothole,
    Streetlight,
    Garbage,
    Flooding,
    Graffiti,
    Traffic,
    WaterLeak,
    /// Also used for categories which this client version does not know.
    #[serde(other)]
    Other,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 8] = [
        Self::Pothole,
        Self::Streetlight,
        Self::Garbage,
        Self::Flooding,
        Self::Graffiti,
        Self::Traffic,
        Self::WaterLeak,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pothole => "pothole",
            Self::Streetlight => "streetlight",
            Self::Garbage => "garbage",
            Self::Flooding => "flooding",
            Self::Graffiti => "graffiti",
            Self::Traffic => "traffic",
            Self::WaterLeak => "water_leak",
            Self::Other => "other",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Pothole => "road-variant",
            Self::Streetlight => "lightbulb-outline",
            Self::Garbage => "trash-can-outline",
            Self::Flooding => "waves",
            Self::Graffiti => "spray",
            Self::Traffic => "traffic-light",
            Self::WaterLeak => "water-pump",
            Self::Other => "alert-circle-outline",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Pothole => Color::rgb(0x8D, 0x6E, 0x63),
            Self::Streetlight => Color::rgb(0xFB, 0xC0, 0x2D),
            Self::Garbage => Color::rgb(0x43, 0xA0, 0x47),
            Self::Flooding => Color::rgb(0x1E, 0x88, 0xE5),
            Self::Graffiti => Color::rgb(0x8E, 0x24, 0xAA),
            Self::Traffic => Color::rgb(0xE5, 0x39, 0x35),
            Self::WaterLeak => Color::rgb(0x00, 0xAC, 0xC1),
            Self::Other => Color::rgb(0x75, 0x75, 0x75),
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportCategory {
    type Err = EnumParsingError;

    /// Strict parsing for user input. Only the server response
    /// deserialization maps unknown values to [ReportCategory::Other].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EnumParsingError::Category(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Resolved,
        Self::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Pending => Color::rgb(0xFF, 0xA0, 0x00),
            Self::InProgress => Color::rgb(0x1E, 0x88, 0xE5),
            Self::Resolved => Color::rgb(0x43, 0xA0, 0x47),
            Self::Rejected => Color::rgb(0xE5, 0x39, 0x35),
        }
    }

    /// Voting is possible only for reports which are not closed.
    pub fn is_votable(&self) -> bool {
        match self {
            Self::Pending | Self::InProgress => true,
            Self::Resolved | Self::Rejected => false,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = EnumParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EnumParsingError::Status(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_from_server_is_other() {
        let category: ReportCategory = serde_json::from_str("\"volcano\"").unwrap();
        assert_eq!(category, ReportCategory::Other);
        let category: ReportCategory = serde_json::from_str("\"water_leak\"").unwrap();
        assert_eq!(category, ReportCategory::WaterLeak);
    }

    #[test]
    fn unknown_category_from_user_is_error() {
        assert_eq!(
            "volcano".parse::<ReportCategory>(),
            Err(EnumParsingError::Category("volcano".to_string()))
        );
    }

    #[test]
    fn as_str_matches_serde_representation() {
        for category in ReportCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse(), Ok(category));
        }
        for status in ReportStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_deserialization_error() {
        assert!(serde_json::from_str::<ReportStatus>("\"archived\"").is_err());
    }

    #[test]
    fn closed_reports_are_not_votable() {
        assert!(ReportStatus::Pending.is_votable());
        assert!(ReportStatus::InProgress.is_votable());
        assert!(!ReportStatus::Resolved.is_votable());
        assert!(!ReportStatus::Rejected.is_votable());
    }

    #[test]
    fn color_formats_as_hex() {
        assert_eq!(Color::rgb(0x00, 0xAC, 0xC1).to_string(), "#00ACC1");
    }
}
