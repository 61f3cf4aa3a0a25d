use chrono::{DateTime, Utc};
use diesel::{
    self, sql_types, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

no_arg_sql_function!(
    random,
    sql_types::Double,
    "Represents the SQL RANDOM() function"
);

#[derive(Debug, Deserialize, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub content: String,
}

impl Question {
    /// Inserts a single question. Callers are expected to have rejected
    /// blank content before reaching this point.
    pub fn create(conn: &PgConnection, content: String) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion { content })
            .get_result(conn)?;

        Ok(question)
    }

    pub fn get_all(conn: &PgConnection) -> Result<Vec<Question>, Error> {
        use questions::dsl::{created_at, questions as questions_table};

        let all_questions = questions_table
            .order(created_at.asc())
            .load::<Question>(conn)?;

        Ok(all_questions)
    }

    /// Uniform pick via `ORDER BY random() LIMIT 1`. This scans the whole
    /// table, which is a deliberate ceiling at question-bank scale.
    pub fn pick_random(conn: &PgConnection) -> Result<Option<Question>, Error> {
        use questions::dsl::questions as questions_table;

        let question = questions_table
            .order(random)
            .first::<Question>(conn)
            .optional()?;

        Ok(question)
    }
}
