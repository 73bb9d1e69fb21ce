use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use super::queries::categories::{get_all_categories, import_categories};
use super::queries::questions::{get_all_questions, import_questions};
use super::{Category, Question};

pub const CATEGORIES_FILE: &str = "categories.csv";
pub const QUESTIONS_FILE: &str = "questions.csv";

fn write_to(path: &Path, data: Vec<impl Serialize>) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    let mut wtr = csv::Writer::from_writer(file);
    for line in data {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_from<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut out = Vec::new();
    for record in rdr.deserialize() {
        let record: T = record.with_context(|| format!("Malformed record in {}", path.display()))?;
        out.push(record);
    }
    Ok(out)
}

pub async fn export_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<()> {
    let categories = get_all_categories(pool).await?;
    let questions = get_all_questions(pool).await?;
    if !dir.exists() {
        std::fs::create_dir_all(dir)?
    }
    write_to(&dir.join(CATEGORIES_FILE), categories)?;
    write_to(&dir.join(QUESTIONS_FILE), questions)?;
    Ok(())
}

pub async fn import_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<()> {
    let categories: Vec<Category> = read_from(&dir.join(CATEGORIES_FILE))?;
    let questions: Vec<Question> = read_from(&dir.join(QUESTIONS_FILE))?;
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Importing data from {}",
        dir.display()
    );
    import_categories(pool, categories).await?;
    import_questions(pool, questions).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{empty_pool, seed_dir, seeded_pool};

    #[tokio::test]
    async fn import_seed_data() {
        let pool = empty_pool().await;
        import_data(&pool, &seed_dir()).await.unwrap();
        assert_eq!(get_all_categories(&pool).await.unwrap().len(), 6);
        assert_eq!(get_all_questions(&pool).await.unwrap().len(), 19);
    }

    #[tokio::test]
    async fn export_then_import_into_empty_db() {
        let pool = seeded_pool().await;
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("dump");
        export_data(&pool, &target).await.unwrap();
        assert!(target.join(CATEGORIES_FILE).is_file());
        assert!(target.join(QUESTIONS_FILE).is_file());

        let other = empty_pool().await;
        import_data(&other, &target).await.unwrap();
        assert_eq!(
            get_all_questions(&other).await.unwrap(),
            get_all_questions(&pool).await.unwrap()
        );
        assert_eq!(
            get_all_categories(&other).await.unwrap(),
            get_all_categories(&pool).await.unwrap()
        );
    }

    #[tokio::test]
    async fn import_from_missing_dir_fails() {
        let pool = empty_pool().await;
        let dir = tempfile::tempdir().unwrap();
        assert!(import_data(&pool, &dir.path().join("nope")).await.is_err());
    }
}
