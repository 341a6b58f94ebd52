use serde::Deserialize;

/// A single multiple-choice question. `correct_index` points into `options`;
/// the content loader guarantees it is in range and that there are at least
/// two options to choose from.
#[derive(Clone, Debug, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}
