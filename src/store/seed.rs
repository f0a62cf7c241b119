use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::SeedError;
use crate::models::{
    BlogPost, Event, GalleryImage, MembershipSubmission, Partner, Resource, TeamMember,
};

const DEMO_SEED: &str = include_str!("../../seed/demo.json");

/// Initial contents of every collection. Missing collections load as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub events: Vec<Event>,
    pub team_members: Vec<TeamMember>,
    pub blog_posts: Vec<BlogPost>,
    pub resources: Vec<Resource>,
    pub gallery_images: Vec<GalleryImage>,
    pub submissions: Vec<MembershipSubmission>,
    pub partners: Vec<Partner>,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Sample content bundled with the binary.
    pub fn demo() -> Result<Self, SeedError> {
        Self::from_json(DEMO_SEED)
    }
}
