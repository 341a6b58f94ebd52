use serde::Deserialize;

use super::Question;

/// One card in the "About" view.
#[derive(Clone, Debug, Deserialize)]
pub struct AboutCard {
    pub title: String,
    pub body: String,
}

/// One entry in the gated materials list.
#[derive(Clone, Debug, Deserialize)]
pub struct Material {
    pub title: String,
    pub description: String,
}

/// Everything the application presents: the hero banner, static page
/// content and the quiz definition.
#[derive(Clone, Debug, Deserialize)]
pub struct CourseContent {
    pub title: String,
    pub tagline: String,
    pub about: Vec<AboutCard>,
    pub materials: Vec<Material>,
    pub questions: Vec<Question>,
}
