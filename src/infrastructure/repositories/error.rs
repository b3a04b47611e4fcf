use crate::domain::errors::DomainError;

const CNT_ARTICLE_TITLE_NOT_BLANK: &str = "articles_title_not_blank_chk";
const CNT_ARTICLE_CONTENT_NOT_BLANK: &str = "articles_content_not_blank_chk";
const CNT_ARTICLE_WRITER_NOT_BLANK: &str = "articles_writer_not_blank_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TITLE_NOT_BLANK => {
                        DomainError::Validation("title cannot be empty".into())
                    }
                    CNT_ARTICLE_CONTENT_NOT_BLANK => {
                        DomainError::Validation("content cannot be empty".into())
                    }
                    CNT_ARTICLE_WRITER_NOT_BLANK => {
                        DomainError::Validation("writer cannot be empty".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // not_null_violation, check_violation
                    "23502" | "23514" => {
                        return DomainError::Validation(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
