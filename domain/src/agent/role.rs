//! Agent roles
//!
//! Each role is one prompt/response exchange with a hosted model. Text roles
//! produce Markdown, image roles produce a single generated image.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role answered by the chat completion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    Architect,
    Furniture,
    Colorist,
    Summarizer,
}

impl TextRole {
    /// The specialists consulted before the summary, in issue order.
    pub const SPECIALISTS: [TextRole; 3] =
        [TextRole::Architect, TextRole::Furniture, TextRole::Colorist];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextRole::Architect => "architect",
            TextRole::Furniture => "furniture",
            TextRole::Colorist => "colorist",
            TextRole::Summarizer => "summarizer",
        }
    }

    /// Who the model is asked to be for this role.
    pub fn expertise(&self) -> &'static str {
        match self {
            TextRole::Architect => "an architect and layout expert",
            TextRole::Furniture => "a furniture selection and sourcing expert",
            TextRole::Colorist => "a color palette and materials specialist",
            TextRole::Summarizer => "a senior interior designer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TextRole::Architect => "Architect Plan",
            TextRole::Furniture => "Furniture Plan",
            TextRole::Colorist => "Color Palette",
            TextRole::Summarizer => "Overview",
        }
    }
}

/// Role answered by the image generation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRole {
    FurnitureBoard,
    ColorBoard,
    LightingBoard,
    Render,
}

impl ImageRole {
    /// Moodboard facets in display order.
    pub const MOODBOARD: [ImageRole; 3] = [
        ImageRole::FurnitureBoard,
        ImageRole::ColorBoard,
        ImageRole::LightingBoard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageRole::FurnitureBoard => "furniture_board",
            ImageRole::ColorBoard => "color_board",
            ImageRole::LightingBoard => "lighting_board",
            ImageRole::Render => "render",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ImageRole::FurnitureBoard => "Furniture Pieces",
            ImageRole::ColorBoard => "Color Palette & Materials",
            ImageRole::LightingBoard => "Lighting Mood",
            ImageRole::Render => "3D Render",
        }
    }

    /// Whether a user reference photo is sent along with this request.
    ///
    /// Only the full render depicts the room itself; the boards show
    /// isolated items on a neutral background.
    pub fn uses_reference_photo(&self) -> bool {
        matches!(self, ImageRole::Render)
    }
}

/// Any agent role (text or image).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    Text(TextRole),
    Image(ImageRole),
}

impl AgentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Text(role) => role.as_str(),
            AgentRole::Image(role) => role.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AgentRole::Text(role) => role.display_name(),
            AgentRole::Image(role) => role.display_name(),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, AgentRole::Image(_))
    }
}

impl From<TextRole> for AgentRole {
    fn from(role: TextRole) -> Self {
        AgentRole::Text(role)
    }
}

impl From<ImageRole> for AgentRole {
    fn from(role: ImageRole) -> Self {
        AgentRole::Image(role)
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "architect" => TextRole::Architect.into(),
            "furniture" => TextRole::Furniture.into(),
            "colorist" => TextRole::Colorist.into(),
            "summarizer" => TextRole::Summarizer.into(),
            "furniture_board" => ImageRole::FurnitureBoard.into(),
            "color_board" => ImageRole::ColorBoard.into(),
            "lighting_board" => ImageRole::LightingBoard.into(),
            "render" => ImageRole::Render.into(),
            other => return Err(format!("unknown agent role: {}", other)),
        })
    }
}

impl Serialize for AgentRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AgentRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        let roles: Vec<AgentRole> = TextRole::SPECIALISTS
            .iter()
            .map(|r| AgentRole::from(*r))
            .chain(ImageRole::MOODBOARD.iter().map(|r| AgentRole::from(*r)))
            .chain([TextRole::Summarizer.into(), ImageRole::Render.into()])
            .collect();
        for role in roles {
            let parsed: AgentRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_unknown_role() {
        assert!("plumber".parse::<AgentRole>().is_err());
    }

    #[test]
    fn test_only_render_uses_photo() {
        assert!(ImageRole::Render.uses_reference_photo());
        assert!(ImageRole::MOODBOARD.iter().all(|r| !r.uses_reference_photo()));
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&AgentRole::from(ImageRole::ColorBoard)).unwrap();
        assert_eq!(json, "\"color_board\"");
    }
}
