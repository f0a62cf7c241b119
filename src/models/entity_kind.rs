use serde::{Deserialize, Serialize};

/// Where a freshly added record lands in its collection.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Placement {
    Prepend,
    Append,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Events,
    Team,
    Blog,
    Resources,
    Gallery,
    Submissions,
    Partners,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        Self::Events,
        Self::Team,
        Self::Blog,
        Self::Resources,
        Self::Gallery,
        Self::Submissions,
        Self::Partners,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Team => "team",
            Self::Blog => "blog",
            Self::Resources => "resources",
            Self::Gallery => "gallery",
            Self::Submissions => "submissions",
            Self::Partners => "partners",
        }
    }

    /// Team members keep roster order; everything else is newest-first.
    pub fn placement(&self) -> Placement {
        match self {
            Self::Team => Placement::Append,
            _ => Placement::Prepend,
        }
    }

    /// Kinds the public site may read without a session.
    pub fn is_public(&self) -> bool {
        !matches!(self, Self::Submissions)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "events" => Ok(Self::Events),
            "team" => Ok(Self::Team),
            "blog" => Ok(Self::Blog),
            "resources" => Ok(Self::Resources),
            "gallery" => Ok(Self::Gallery),
            "submissions" => Ok(Self::Submissions),
            "partners" => Ok(Self::Partners),
            _ => Err(format!("invalid entity kind: {}", s)),
        }
    }
}
