mod config;

use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use graph_poet_core::io::list_corpora;
use graph_poet_core::{BridgeTextGenerator, PoetError};

use config::ServerConfig;

/// Number of random words used as input when `/v1/poem` gets none.
const DEFAULT_RANDOM_WORDS: usize = 4;

/// Struct representing query parameters for the `/v1/poem` endpoint
#[derive(Deserialize)]
struct PoemParams {
	input: Option<String>,
	words: Option<usize> // size of the random input phrase when `input` is missing
}

#[derive(Deserialize)]
struct CorpusQuery {
	name: Option<String>
}

#[derive(Default)]
struct SharedData {
	corpus: Option<String>,
	generator: Option<BridgeTextGenerator>
}

/// Builds a generator from the corpus `<data_dir>/<name>.txt`.
fn load_generator(config: &ServerConfig, name: &str) -> Result<BridgeTextGenerator, PoetError> {
	let path = config.corpus_path(name);
	let generator = BridgeTextGenerator::new(&path)?;
	log::info!(
		"Loaded corpus '{}' from {} ({} words, {} adjacencies)",
		name,
		path.display(),
		generator.graph().vertex_count(),
		generator.graph().edge_count()
	);
	Ok(generator)
}

/// HTTP GET endpoint `/v1/poem`
///
/// Generates a poem from the `input` query parameter, or from a random
/// phrase of `words` corpus words when no input is given.
#[get("/v1/poem")]
async fn get_poem(data: web::Data<Mutex<SharedData>>, query: web::Query<PoemParams>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let generator = match &shared_data.generator {
		Some(g) => g,
		None => return HttpResponse::Conflict().body("No corpus loaded")
	};

	let input = match &query.input {
		Some(s) => s.clone(),
		None => generator.random_phrase(query.words.unwrap_or(DEFAULT_RANDOM_WORDS))
	};

	HttpResponse::Ok().body(generator.poem(&input))
}

#[get("/v1/corpora")]
async fn get_corpora(config: web::Data<ServerConfig>) -> impl Responder {
	match list_corpora(&config.data_dir, "txt") {
		Ok(names) => HttpResponse::Ok().body(names.join("\n")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora")
	}
}

#[get("/v1/loaded_corpus")]
async fn get_loaded_corpus(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	HttpResponse::Ok().body(shared_data.corpus.clone().unwrap_or_default())
}

/// HTTP GET endpoint `/v1/graph`
///
/// Returns the affinity graph of the loaded corpus as JSON.
#[get("/v1/graph")]
async fn get_graph(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	match &shared_data.generator {
		Some(g) => HttpResponse::Ok().json(g.graph()),
		None => HttpResponse::Conflict().body("No corpus loaded")
	}
}

/// HTTP PUT endpoint `/v1/load_corpus`
///
/// Replaces the loaded generator with one built from `<data_dir>/<name>.txt`.
/// On failure the previous generator is kept.
#[put("/v1/load_corpus")]
async fn put_corpus(
	data: web::Data<Mutex<SharedData>>,
	config: web::Data<ServerConfig>,
	query: web::Query<CorpusQuery>
) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};
	if name.contains(['/', '\\']) || name.starts_with('.') {
		return HttpResponse::BadRequest().body("Corpus name must be a plain file name");
	}

	// Built on the blocking pool and before locking, the graph construction can take a while
	let name = name.to_owned();
	let load_config = config.clone();
	let load_name = name.clone();
	let generator = match web::block(move || load_generator(&load_config, &load_name)).await {
		Ok(Ok(g)) => g,
		Ok(Err(e)) => {
			log::warn!("Failed to load corpus '{}': {}", name, e);
			return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}"))
		}
		Err(_) => return HttpResponse::InternalServerError().body("Corpus loading task failed"),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	shared_data.corpus = Some(name);
	shared_data.generator = Some(generator);

	HttpResponse::Ok().body("Corpus loaded successfully")
}

/// Registers every endpoint.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_poem)
		.service(get_corpora)
		.service(get_loaded_corpus)
		.service(get_graph)
		.service(put_corpus);
}

/// Main entry point for the server.
///
/// Reads the configuration from the environment, optionally loads the
/// start-up corpus, wraps the generator in a `Mutex` and starts an
/// Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let config = ServerConfig::from_env()?;

	let mut shared_data = SharedData::default();
	if let Some(name) = &config.corpus {
		let generator = load_generator(&config, name).map_err(std::io::Error::other)?;
		shared_data.corpus = Some(name.clone());
		shared_data.generator = Some(generator);
	}

	let shared_generator = web::Data::new(Mutex::new(shared_data));
	let shared_config = web::Data::new(config.clone());

	log::info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_generator.clone())
			.app_data(shared_config.clone())
			.configure(routes)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
