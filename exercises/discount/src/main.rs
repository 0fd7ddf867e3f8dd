//! Prints discounted prices for the catalog, then the bad-input cases.

use discount::{BAD_INPUT_HEADER, CATALOG_HEADER, bad_input_cases, catalog, render_section};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discount=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let lines = render_section(CATALOG_HEADER, &catalog())
        .into_iter()
        .chain(render_section(BAD_INPUT_HEADER, &bad_input_cases()));

    for line in lines {
        println!("{line}");
    }
}
