use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

#[derive(Deserialize, Serialize)]
pub struct PracticeResponse {
    pub question: Option<Question>,
}

/// Serves one randomly chosen question. An empty bank is not an error,
/// the response carries `null` and the client decides what to show.
pub async fn show(pool: Data<PgPool>) -> Result<Json<PracticeResponse>, Error> {
    let res = block(move || {
        let conn = get_conn(&pool)?;
        Question::pick_random(&conn)
    })
    .await?;

    let question = res?;

    Ok(Json(PracticeResponse { question }))
}
