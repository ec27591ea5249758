use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use actix_cors::Cors;
use bookwise_core::{Error, DEFAULT_RECOMMENDATIONS, MAX_POPULAR};
use bookwise_store::Library;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
struct RecommendRequest {
    title: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct RecommendationResult {
    title: String,
    author: String,
    image_url: String,
    score: f32,
}

#[derive(Deserialize)]
struct PopularQuery {
    limit: Option<usize>,
}

#[derive(Serialize)]
struct BookCard {
    title: String,
    author: String,
    image_url: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        library: Arc<Library>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(library.clone()))
                .route("/titles", web::get().to(list_titles))
                .route("/books/popular", web::get().to(popular_books))
                .route("/recommendations", web::post().to(recommend))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn list_titles(
    library: web::Data<Arc<Library>>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": library.titles()
    })))
}

async fn popular_books(
    library: web::Data<Arc<Library>>,
    query: web::Query<PopularQuery>,
) -> ActixResult<HttpResponse> {
    let limit = query.limit.unwrap_or(MAX_POPULAR);

    let cards: Vec<BookCard> = library
        .popular()
        .top(limit)
        .iter()
        .map(|entry| BookCard {
            title: entry.title.clone(),
            author: entry.author.clone(),
            image_url: entry.image_url.clone(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": cards
    })))
}

async fn recommend(
    library: web::Data<Arc<Library>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);

    match library.recommender().recommend_limit(&req.title, limit) {
        Ok(results) => {
            let results: Vec<RecommendationResult> = results
                .into_iter()
                .map(|r| RecommendationResult {
                    title: r.title,
                    author: r.author,
                    image_url: r.image_url,
                    score: r.score,
                })
                .collect();

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "result": results
            })))
        }
        Err(Error::TitleNotFound(title)) => {
            Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Title not found: {}", title)
            })))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}
