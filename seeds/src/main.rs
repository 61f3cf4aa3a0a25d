use diesel::{self, ExpressionMethods, RunQueryDsl};
use dotenv::dotenv;

use db::{get_conn, new_pool, schema::questions};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    for content in &[
        "What is 2 + 2?",
        "What is the capital of France?",
        "Who wrote The Art of War?",
        "In what year did the Berlin Wall fall?",
    ] {
        diesel::insert_into(questions::table)
            .values(questions::dsl::content.eq(content))
            .execute(&conn)
            .unwrap();
    }
}
