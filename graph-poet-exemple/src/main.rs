use graph_poet_core::{BridgeTextGenerator, PoetError};

const CORPUS: &[&str] = &[
    "To explore strange new worlds",
    "To seek out new life and new civilizations",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows the graph construction statistics
    env_logger::init();

    // Build from a file given as first argument, or from the inline corpus
    let poet = match std::env::args().nth(1) {
        Some(path) => match BridgeTextGenerator::new(&path) {
            Ok(poet) => poet,
            Err(PoetError::IoFailure(e)) => {
                println!("Cannot read corpus '{}': {}", path, e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        },
        None => BridgeTextGenerator::from_lines(CORPUS)?,
    };

    // The affinity graph, one vertex per line
    println!("{}\n", poet);

    // Bridges are lower-case, input words keep their casing
    for input in ["Seek to explore new and exciting synergies!", "New LIFE", "Hello world", ""] {
        println!("'{}' -> '{}'", input, poet.poem(input));
    }

    // Single bridge lookup
    match poet.bridge("explore", "new") {
        Some(bridge) => println!("explore -> {} -> new", bridge),
        None => println!("No bridge between 'explore' and 'new'"),
    }

    // Random input phrase, drawn from the corpus words
    let phrase = poet.random_phrase(5);
    println!("'{}' -> '{}'", phrase, poet.poem(&phrase));

    Ok(())
}
