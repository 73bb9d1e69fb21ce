use serde::ser::Serializer;
use serde::Serialize;

use crate::db::{Category, Question};

/// Renders categories as `{"<id>": "<type>"}` keeping id order.
pub fn serialize_category_map<S>(categories: &[Category], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(categories.iter().map(|c| (c.id.to_string(), &c.kind)))
}

// clients expect an empty string, not null, once the quiz runs out of questions
pub fn serialize_question_or_empty<S>(
    question: &Option<Question>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(question) => question.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}
