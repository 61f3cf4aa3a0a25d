use actix_web::{
    web::{block, Data, Form, Json},
    Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{get_conn, models::Question, PgPool};
use errors::Error;

use crate::validate::validate;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = "1"))]
    question: String,
}

pub async fn create(
    pool: Data<PgPool>,
    params: Form<CreateQuestionRequest>,
) -> Result<Json<Question>, Error> {
    validate(&params)?;

    // length(min = 1) passes for whitespace-only bodies, reject those too
    let content = params.question.trim().to_string();
    if content.is_empty() {
        return Err(Error::ValidationError(vec![
            "question is required".to_string()
        ]));
    }

    let res = block(move || {
        let conn = get_conn(&pool)?;
        Question::create(&conn, content)
    })
    .await?;

    let question = res?;

    Ok(Json(question))
}
