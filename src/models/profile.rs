use serde::{Deserialize, Serialize};

/// User profile collected before plan generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub programming_experience: ExperienceLevel,
    pub python_experience: Option<String>,
    pub learning_goal: String,
    pub learning_style: LearningStyle,
}

/// General programming experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Preferred way of learning new material
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LearningStyle {
    HandsOn,
    Theoretical,
    Balanced,
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceLevel::Beginner => write!(f, "Beginner"),
            ExperienceLevel::Intermediate => write!(f, "Intermediate"),
            ExperienceLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(anyhow::anyhow!("Invalid experience level: {}", s)),
        }
    }
}

impl std::fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LearningStyle::HandsOn => write!(f, "Hands-on"),
            LearningStyle::Theoretical => write!(f, "Theoretical"),
            LearningStyle::Balanced => write!(f, "Balanced"),
        }
    }
}

impl std::str::FromStr for LearningStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hands-on" | "hands_on" | "handson" => Ok(LearningStyle::HandsOn),
            "theoretical" => Ok(LearningStyle::Theoretical),
            "balanced" => Ok(LearningStyle::Balanced),
            _ => Err(anyhow::anyhow!("Invalid learning style: {}", s)),
        }
    }
}
