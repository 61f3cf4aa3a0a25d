use actix_web::{
    web::{block, Data, Json},
    Result,
};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

pub async fn get_all(pool: Data<PgPool>) -> Result<Json<Vec<Question>>, Error> {
    let res = block(move || {
        let conn = get_conn(&pool)?;
        Question::get_all(&conn)
    })
    .await?;

    let questions = res?;

    Ok(Json(questions))
}
