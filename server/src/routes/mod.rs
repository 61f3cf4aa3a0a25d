use actix_web::web;

pub mod practice;
pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .service(
                web::scope("/questions")
                    .route("", web::get().to(questions::get_all))
                    .route("", web::post().to(questions::create)),
            )
            .service(web::scope("/practice").route("", web::get().to(practice::show))),
    );
}
