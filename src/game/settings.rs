use std::path::PathBuf;

use crate::game::quiz::sample::IdRange;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub quiz_path: PathBuf,
    pub question_count: usize,
    pub id_range: Option<IdRange>,
    pub max_rejections_shown: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            quiz_path: PathBuf::from("quiz.csv"),
            question_count: 10,
            id_range: None,
            max_rejections_shown: 200,
        }
    }
}
