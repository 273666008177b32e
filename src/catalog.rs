//! The project store.
//!
//! A catalog is an ordered, read-only list of [`Project`]s established once
//! at startup. Records are normalised on the way in: legacy entries that
//! carry a single `category` instead of `tags` get a one-element tag list,
//! so everything downstream sees a single canonical shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Media, Project};

/// A project as written in a catalog file, before normalisation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique identifier, must be non-zero
    pub id: u32,
    /// Display title
    pub title: String,
    /// Category labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Legacy single category, used when `tags` is absent or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Media asset paths
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProjectRecord {
    fn into_project(self) -> Result<Project, CatalogError> {
        if self.id == 0 {
            return Err(CatalogError::ZeroId { title: self.title });
        }

        let tags = match (self.tags, self.category) {
            (Some(tags), _) if !tags.is_empty() => tags,
            (_, Some(category)) => vec![category],
            _ => return Err(CatalogError::Untagged { id: self.id }),
        };

        Ok(Project {
            id: self.id,
            title: self.title,
            tags,
            description: self.description,
            media: self.images.iter().map(|path| Media::new(path)).collect(),
        })
    }
}

/// Errors that can occur when building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error when reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Record uses the reserved id 0
    #[error("Project '{title}' has id 0; ids must be positive")]
    ZeroId {
        /// Title of the offending record
        title: String,
    },

    /// Two records share an id
    #[error("Duplicate project id {id}")]
    DuplicateId {
        /// The repeated id
        id: u32,
    },

    /// Record has neither tags nor a legacy category
    #[error("Project {id} has no tags and no category")]
    Untagged {
        /// Id of the offending record
        id: u32,
    },
}

/// Ordered, immutable collection of projects.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog from raw records, keeping their order.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut projects: Vec<Project> = Vec::with_capacity(records.len());
        for record in records {
            let project = record.into_project()?;
            if projects.iter().any(|existing| existing.id == project.id) {
                return Err(CatalogError::DuplicateId { id: project.id });
            }
            projects.push(project);
        }
        log::debug!("Catalog loaded with {} projects", projects.len());
        Ok(Self { projects })
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read a JSON catalog file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::info!("Loaded catalog from {:?}", path);
        Ok(catalog)
    }

    /// The portfolio shipped with the page.
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects(),
        }
    }

    /// Look up a project by id.
    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Projects in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog has no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "Hormoni",
            &["Full-Stack Development", "Product Design", "Data Visualization"],
            "Building a PCOS wellness app with one partner. I personally designed and engineered the core cycle prediction engine and symptom tracking flow, focusing on turning complex health data into clear, actionable insights.",
            &["images/hormonisite.mp4"],
        ),
        Project::new(
            2,
            "MatrixMindz",
            &["Data Analytics", "Growth Marketing", "Brand Identity"],
            "I led a top-to-bottom brand evolution for a financial consulting firm, standardizing their visual identity across all digital and sales assets. Pairing this with optimizing their content architecture and outreach funnels, I drove a 250% increase in engagement and a 35% lift in qualified leads.",
            &[
                "images/mmf1.png",
                "images/mmf2.png",
                "images/mmf3.mp4",
                "images/mmf4.png",
                "images/mmf5.mp4",
                "images/mmf6.jpg",
                "images/mmf7.jpg",
            ],
        ),
        Project::new(
            3,
            "SIFT",
            &["Product Design", "UX Design", "User Research"],
            "I led design for an underground streetwear marketplace, working with one engineer to ship a scrolling feed web app and weekly email catalog. Our focus was spotlighting microbrands and independent designers before they hit the mainstream.",
            &["images/SIFT-inbox.png", "images/sift_feed1.png", "images/siftsocial.mp4"],
        ),
        Project::new(
            4,
            "OAKE",
            &["Product Design", "Interaction Design", "Prototyping"],
            "I designed the MVP for an interactive hang tag experience, working with 2 engineers and another product designer. I designed the item onboarding flow and the post-scan interface that allowed shoppers to learn more about the history of a garment.",
            &["images/OAKEPrototype.mp4"],
        ),
        Project::new(
            5,
            "Ask Why I Run",
            &["Brand Identity", "Social Design", "Graphic Design"],
            "I worked directly with the founders to execute a complete rebrand from scratch. I built the new visual identity and social media system to help scale their fundraising efforts.",
            &["images/awir1.png", "images/awir2.png", "images/awir3.jpg", "images/awir4.png"],
        ),
        Project::new(
            6,
            "Dodo Compositions",
            &["Brand Identity", "Art Direction", "Social Design"],
            "I co-founded and designed a wellness brand for students, creating both physical goods (apparel, comfort objects) and the visual identity. I focused on art direction and graphic design to ensure a cohesive brand system.",
            &[
                "images/dodo1.png",
                "images/dodo2.png",
                "images/dodo3.png",
                "images/dodo4.png",
                "images/dodo5.jpg",
                "images/dodo6.jpg",
                "images/dodo7.png",
                "images/dodo8.jpg",
            ],
        ),
    ]
}
