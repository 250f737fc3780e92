//! Candidate preflight harness.
//!
//! Exercises every category's full candidate list independently of fallback
//! ordering, so a candidate list change can be verified against live
//! upstreams before it ships. Run with real credentials in the environment:
//!
//! ```text
//! cargo run --bin preflight
//! ```

use muse_backends::{BackendRegistry, Credentials};
use muse_core::{BackendCall, Category};
use muse_gateway::CandidateConfig;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

/// 1x1 transparent PNG used to probe image-conditioned candidates.
const PROBE_PNG: [u8; 67] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x62, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

fn probe_call(category: Category) -> BackendCall {
    if category.is_conversational() {
        BackendCall::Chat {
            system: None,
            user: "Reply with the single word: pong".to_string(),
            max_tokens: Some(16),
            temperature: Some(0.0),
        }
    } else if category.is_image_conditioned() {
        BackendCall::Conditioned {
            prompt: "enhance".to_string(),
            image: PROBE_PNG.to_vec(),
        }
    } else {
        BackendCall::Generate {
            prompt: "a small gray square, minimal detail".to_string(),
            negative_prompt: None,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let registry = BackendRegistry::new(Credentials::from_env());
    let config = CandidateConfig::current();

    let mut failures = 0usize;
    for category in Category::iter() {
        println!("{}", category);
        let call = probe_call(category);
        for candidate in config.for_category(category) {
            let backend = registry.resolve(candidate, category);
            match backend.invoke(&call).await {
                Ok(_) => println!("  ok    {}", candidate),
                Err(err) => {
                    failures += 1;
                    println!("  FAIL  {}: {}", candidate, err.message);
                }
            }
        }
    }

    if failures > 0 {
        println!("{} candidate(s) failing", failures);
        std::process::exit(1);
    }
    println!("all candidates healthy");
}
