//! Work index catalog and filters.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum WorkCategory {
    ProductUi,
    MotionSystems,
    Prototyping,
}

impl WorkCategory {
    pub fn label(&self) -> &'static str {
        match self {
            WorkCategory::ProductUi => "Product UI",
            WorkCategory::MotionSystems => "Motion Systems",
            WorkCategory::Prototyping => "Prototyping",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            WorkCategory::ProductUi => "product-ui",
            WorkCategory::MotionSystems => "motion-systems",
            WorkCategory::Prototyping => "prototyping",
        }
    }
}

/// Filter pills above the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum WorkFilter {
    #[default]
    All,
    Category(WorkCategory),
}

impl WorkFilter {
    pub const ALL: [WorkFilter; 4] = [
        WorkFilter::All,
        WorkFilter::Category(WorkCategory::ProductUi),
        WorkFilter::Category(WorkCategory::MotionSystems),
        WorkFilter::Category(WorkCategory::Prototyping),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkFilter::All => "All",
            WorkFilter::Category(category) => category.label(),
        }
    }

    pub fn matches(&self, project: &WorkProject) -> bool {
        match self {
            WorkFilter::All => true,
            WorkFilter::Category(category) => project.categories.contains(category),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct WorkProject {
    pub id: &'static str,
    pub title: &'static str,
    pub year: &'static str,
    pub role: &'static str,
    pub tags: &'static [&'static str],
    pub summary: &'static str,
    pub categories: &'static [WorkCategory],
    pub poster: &'static str,
}

use WorkCategory::*;

pub const PROJECTS: &[WorkProject] = &[
    WorkProject {
        id: "nebula-horizon",
        title: "Nebula Horizon",
        year: "2024",
        role: "Motion + Systems Lead",
        tags: &["Kinetic UI", "Telemetry", "Spatial Audio"],
        summary: "Commanding orbital data flows into an adaptive control tier for mixed crews.",
        categories: &[ProductUi, MotionSystems],
        poster: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1200&q=70",
    },
    WorkProject {
        id: "ionia-array",
        title: "Ionia Array",
        year: "2023",
        role: "Interface Systems",
        tags: &["Design Ops", "Realtime", "Elastic Tokens"],
        summary: "Scaling a product UI kit that syncs motion curves with manufacturing telemetry.",
        categories: &[ProductUi],
        poster: "https://images.unsplash.com/photo-1553877522-43269d4ea984?auto=format&fit=crop&w=1200&q=70",
    },
    WorkProject {
        id: "tempo-channels",
        title: "Tempo Channels",
        year: "2024",
        role: "Motion Strategy",
        tags: &["Behavioral", "Crossfade", "A11y"],
        summary: "Layering voice, touch, and gesture feedback into one responsive choreography.",
        categories: &[MotionSystems],
        poster: "https://images.unsplash.com/photo-1545239351-1141bd82e8a6?auto=format&fit=crop&w=1200&q=70",
    },
    WorkProject {
        id: "flux-vanguard",
        title: "Flux Vanguard",
        year: "2022",
        role: "Prototype Director",
        tags: &["Research Lab", "Hardware", "XR"],
        summary: "Immersive prototyping rig translating haptics into cinematic motion cues.",
        categories: &[Prototyping, MotionSystems],
        poster: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?auto=format&fit=crop&w=1200&q=70",
    },
    WorkProject {
        id: "lyra-signal",
        title: "Lyra Signal",
        year: "2023",
        role: "Principal Prototype Engineer",
        tags: &["Figma Tokens", "Native", "Hand-Off"],
        summary: "Bridging design ops and firmware teams with physics-ready interaction specs.",
        categories: &[Prototyping, ProductUi],
        poster: "https://images.unsplash.com/photo-1531297484001-80022131f5a1?auto=format&fit=crop&w=1200&q=70",
    },
    WorkProject {
        id: "selene-grid",
        title: "Selene Grid",
        year: "2022",
        role: "Prototype Systems",
        tags: &["Sandbox", "Realtime", "Hardware Handoff"],
        summary: "A prototyping playground letting teams co-simulate robotics and UI states in sync.",
        categories: &[Prototyping],
        poster: "https://images.unsplash.com/photo-1545239351-1141bd82e8a6?auto=format&fit=crop&w=1200&q=70",
    },
];

/// Projects visible under a filter, in catalog order.
pub fn filter_projects(filter: WorkFilter) -> Vec<&'static WorkProject> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}
