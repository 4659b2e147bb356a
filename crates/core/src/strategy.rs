//! Content strategy generation for the ai-strategy function.
//!
//! Produces a lightly-templated strategy document: a weekly calendar, a set
//! of phase-tagged captions woven around the project's name and materials,
//! a content-format mix, and recurring themes. No model is called; the
//! point of the demo is the shape of the output, not its provenance.

use serde::{Deserialize, Serialize};

use crate::phase::ProjectPhase;

/// Project fields the generator templates into the strategy.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectBrief {
    pub name: String,
    pub location: String,
    pub concept: String,
    pub materials: String,
    pub project_type: String,
}

/// One weekday slot in the content calendar. Rest days carry no content.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarSlot {
    pub day: &'static str,
    pub content: Option<&'static str>,
    #[serde(rename = "type")]
    pub post_type: Option<&'static str>,
    pub phase: Option<ProjectPhase>,
}

/// A suggested caption for one lifecycle phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caption {
    pub phase: ProjectPhase,
    pub caption: String,
}

/// Recommended share of each content format, in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FormatMix {
    pub carousels: u32,
    pub images: u32,
    pub videos: u32,
}

/// The full generated strategy document.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyDocument {
    pub calendar: Vec<CalendarSlot>,
    pub captions: Vec<Caption>,
    pub formats: FormatMix,
    pub themes: Vec<&'static str>,
}

/// Materials palette used when the brief leaves materials empty.
const DEFAULT_MATERIALS: &str = "concrete, reclaimed wood, and steel";

/// Project name used when the brief leaves the name empty.
const DEFAULT_PROJECT_NAME: &str = "Urban Loft Conversion";

/// Generate the strategy document for a project brief.
pub fn generate_strategy(brief: &ProjectBrief) -> StrategyDocument {
    let name = non_empty(&brief.name, DEFAULT_PROJECT_NAME);
    let materials = non_empty(&brief.materials, DEFAULT_MATERIALS);

    let captions = vec![
        Caption {
            phase: ProjectPhase::Concept,
            caption: format!(
                "The journey of our {name} project began with these initial concept \
                 sketches. We wanted to preserve the character of the site while \
                 bringing in natural light through strategic openings. \
                 #architecture #concept #design"
            ),
        },
        Caption {
            phase: ProjectPhase::Construction,
            caption: format!(
                "Materials tell the story of a space. For this project, we chose a \
                 palette of {materials} to honor the building's history while \
                 creating a warm, livable environment. Swipe to see the material \
                 evolution. #architecture #materiality"
            ),
        },
        Caption {
            phase: ProjectPhase::Final,
            caption: format!(
                "Light transforms space. The final photographs of our {name} project \
                 capture how natural light interacts with the materials throughout \
                 the day, creating a constantly evolving atmosphere. \
                 #architecture #interiordesign #naturallighting"
            ),
        },
    ];

    StrategyDocument {
        calendar: weekly_calendar(),
        captions,
        formats: FormatMix {
            carousels: 60,
            images: 30,
            videos: 10,
        },
        themes: vec![
            "Process Storytelling",
            "Technical Thursdays",
            "Material Narratives",
            "Studio Culture",
        ],
    }
}

/// The fixed weekly posting calendar: five content slots, two rest days.
fn weekly_calendar() -> Vec<CalendarSlot> {
    vec![
        slot("Monday", Some(("Concept Sketches", "carousel", ProjectPhase::Concept))),
        slot("Tuesday", None),
        slot("Wednesday", Some(("Design Evolution", "image", ProjectPhase::Drawings))),
        slot("Thursday", Some(("Material Studies", "carousel", ProjectPhase::Construction))),
        slot("Friday", Some(("Final Photography", "image", ProjectPhase::Final))),
        slot("Saturday", None),
        slot("Sunday", Some(("Weekly Inspiration", "carousel", ProjectPhase::Inspiration))),
    ]
}

fn slot(
    day: &'static str,
    content: Option<(&'static str, &'static str, ProjectPhase)>,
) -> CalendarSlot {
    match content {
        Some((content, post_type, phase)) => CalendarSlot {
            day,
            content: Some(content),
            post_type: Some(post_type),
            phase: Some(phase),
        },
        None => CalendarSlot {
            day,
            content: None,
            post_type: None,
            phase: None,
        },
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
