use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_SECTION: &str = "articles_section_id_fkey";
const CNT_ARTICLE_PUBLICATION_PAIR: &str = "articles_publication_pair_chk";
const CNT_SECTION_SLUG: &str = "sections_slug_key";
const CNT_COMMENT_ARTICLE: &str = "review_comments_article_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_SECTION_SLUG => {
                        DomainError::Conflict("section slug already exists".into())
                    }
                    CNT_ARTICLE_SECTION => DomainError::NotFound("section not found".into()),
                    CNT_COMMENT_ARTICLE => DomainError::NotFound("article not found".into()),
                    CNT_ARTICLE_PUBLICATION_PAIR => DomainError::Validation(
                        "issue date and publication time must be set together".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // unique_violation, serialization_failure, deadlock_detected
                    "23505" | "40001" | "40P01" => {
                        return DomainError::Conflict("concurrent write detected".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
