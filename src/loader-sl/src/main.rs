use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use loader_sl::{DocsLoader, Document, DocumentLoader, LoadOptions, SiteLoader, setup_logging};

#[derive(Parser)]
#[command(name = "loader-sl")]
#[command(about = "Load documentation pages as markdown documents", long_about = None)]
struct LoaderCli {
    /// Which loader to run
    #[arg(short, long, value_enum, default_value_t = Site::Docs)]
    site: Site,

    /// Locale passed through to each page request
    #[arg(short, long, default_value = "en-US")]
    locale: String,

    /// Resource path URLs must match (e.g. "connect" or "get-started/account")
    #[arg(short, long)]
    resource: Option<String>,

    /// Resource path to exclude; may be given multiple times
    #[arg(short = 'x', long = "exclude")]
    exclude_resources: Vec<String>,

    /// Explicit page URL to load, bypassing sitemap discovery; may be given
    /// multiple times
    #[arg(short, long = "url", value_parser = validate_url)]
    urls: Vec<String>,

    /// Emit documents as a JSON array instead of markdown
    #[arg(long)]
    json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Site {
    /// The docs site (article-extraction cascade)
    Docs,
    /// The main site (whole-body extraction)
    Site,
}

fn validate_url(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

#[tokio::main]
async fn main() {
    setup_logging("info");
    let cli = LoaderCli::parse();

    let mut builder = LoadOptions::builder().locale(cli.locale);
    if let Some(resource) = cli.resource {
        builder = builder.resource(resource);
    }
    builder = builder.exclude_resources(cli.exclude_resources);
    if !cli.urls.is_empty() {
        builder = builder.urls(cli.urls);
    }
    let options = builder.build();

    let documents = match cli.site {
        Site::Docs => DocsLoader::new().load(options).await,
        Site::Site => SiteLoader::new().load(options).await,
    };

    let documents = match documents {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!("ERROR: loading documents failed: {e}");
            std::process::exit(1)
        }
    };

    let rendered = if cli.json {
        match serde_json::to_string_pretty(&documents) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("ERROR: cannot serialize documents: {e}");
                std::process::exit(1)
            }
        }
    } else {
        render_markdown(&documents)
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &rendered) {
                eprintln!("ERROR: cannot write {}: {e}", path.display());
                std::process::exit(1)
            }
        }
        None => println!("{rendered}"),
    }
}

fn render_markdown(documents: &[Document]) -> String {
    let mut out = String::new();
    for doc in documents {
        // writing to a String cannot fail
        let _ = writeln!(out, "---");
        let _ = writeln!(out, "# {}", doc.metadata.title);
        let _ = writeln!(out, "[{}]({})", doc.metadata.source, doc.metadata.source);
        let _ = writeln!(out, "> {}\n", doc.metadata.description);
        let _ = writeln!(out, "{}", doc.page_content);
    }
    out
}
