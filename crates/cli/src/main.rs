use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use sitemap_core::{
    ChangeFrequency, DocumentFormat, Entry, HtmlConfig, Index, IndexConfig, IndexEntry, JsonConfig, Sitemap,
    SitemapOptions, XmlConfig, XmlFlavor, convert_index_to_xml, convert_to_html, convert_to_json, convert_to_text,
    convert_to_xml,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render a sitemap or sitemap index from a manifest
#[derive(Parser, Debug)]
#[command(name = "sitemap")]
#[command(author = "Sitemap Contributors")]
#[command(version)]
#[command(about = "Render sitemaps and sitemap indexes from a manifest", long_about = None)]
struct Args {
    /// Manifest file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (xml, news, mobile, text, html, json)
    #[arg(short, long, default_value = "xml", value_name = "FORMAT")]
    format: DocumentFormat,

    /// Treat the manifest as a sitemap index (XML output only)
    #[arg(long)]
    index: bool,

    /// Read one URL per line instead of a JSON manifest
    #[arg(long)]
    lines: bool,

    /// Priority for URLs read with --lines
    #[arg(long, default_value = "0.5", value_name = "NUM")]
    priority: f64,

    /// Change frequency for URLs read with --lines
    #[arg(long, default_value = "weekly", value_name = "FREQ")]
    changefreq: ChangeFrequency,

    /// RFC 3339 timestamp applied to entries without one
    #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
    lastmod: Option<OffsetDateTime>,

    /// Maximum number of URLs accepted
    #[arg(long, default_value = "50000", value_name = "NUM")]
    max_urls: usize,

    /// Base URL recorded in the sitemap options
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Page title for HTML output
    #[arg(long, default_value = "Sitemap", value_name = "TITLE")]
    title: String,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,

    /// Write XML without indentation
    #[arg(long)]
    compact: bool,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, String> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| format!("Invalid RFC 3339 timestamp '{}': {}", value, e))
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read manifest: {}", input))
    }
}

fn options(args: &Args) -> SitemapOptions {
    let builder = SitemapOptions::builder().max_urls(args.max_urls).pre_allocate(true);
    match &args.base_url {
        Some(base_url) => builder.base_url(base_url).build(),
        None => builder.build(),
    }
}

fn line_entries(manifest: &str, args: &Args) -> Vec<Entry> {
    manifest
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|url| Entry::new(url, args.priority, args.changefreq))
        .collect()
}

fn build_sitemap(manifest: &str, args: &Args) -> anyhow::Result<Sitemap> {
    let mut entries = if args.lines {
        line_entries(manifest, args)
    } else {
        serde_json::from_str::<Vec<Entry>>(manifest).context("Failed to parse JSON manifest")?
    };

    if let Some(lastmod) = args.lastmod {
        for entry in entries.iter_mut().filter(|e| e.last_modified.is_none()) {
            entry.last_modified = Some(lastmod);
        }
    }

    let mut sitemap = Sitemap::with_options(options(args));
    for (position, entry) in entries.into_iter().enumerate() {
        let url = entry.url.clone();
        sitemap
            .add_item(entry)
            .with_context(|| format!("Entry {} ({}) was rejected", position + 1, url))?;
    }
    Ok(sitemap)
}

fn build_index(manifest: &str, args: &Args) -> anyhow::Result<Index> {
    let entries = if args.lines {
        manifest
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|url| IndexEntry::new(url, args.lastmod))
            .collect()
    } else {
        let mut entries =
            serde_json::from_str::<Vec<IndexEntry>>(manifest).context("Failed to parse JSON index manifest")?;
        if let Some(lastmod) = args.lastmod {
            for entry in entries.iter_mut().filter(|e| e.last_modified.is_none()) {
                entry.last_modified = Some(lastmod);
            }
        }
        entries
    };

    let mut index = Index::with_options(options(args));
    for (position, entry) in entries.into_iter().enumerate() {
        let url = entry.url.clone();
        index
            .add_item(entry)
            .with_context(|| format!("Sitemap reference {} ({}) was rejected", position + 1, url))?;
    }
    Ok(index)
}

fn render_sitemap(sitemap: &Sitemap, args: &Args) -> anyhow::Result<Vec<u8>> {
    let entries = sitemap.items();
    let xml = |flavor| XmlConfig { flavor, pretty: !args.compact };

    let rendered = match args.format {
        DocumentFormat::Xml => convert_to_xml(entries, &xml(XmlFlavor::Standard)),
        DocumentFormat::GoogleNews => convert_to_xml(entries, &xml(XmlFlavor::GoogleNews)),
        DocumentFormat::Mobile => convert_to_xml(entries, &xml(XmlFlavor::Mobile)),
        DocumentFormat::Text => Ok(convert_to_text(entries)),
        DocumentFormat::Html => convert_to_html(entries, &HtmlConfig { page_title: args.title.clone() }),
        DocumentFormat::Json => convert_to_json(entries, &JsonConfig { pretty: args.pretty }),
    };

    rendered.with_context(|| format!("Failed to render {} output", args.format))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "sitemap", &mut io::stdout());
        return Ok(());
    }

    let Some(input) = args.input.as_deref() else {
        bail!("No input given");
    };

    if args.index && args.format != DocumentFormat::Xml {
        bail!("A sitemap index can only be rendered as xml (got {})", args.format);
    }

    if args.verbose {
        echo::print_banner();
        let source = if input == "-" { "stdin" } else { input };
        echo::print_step(1, 3, &format!("Reading manifest from {}", source.bright_white()));
    }

    let manifest = read_input(input)?;

    if args.verbose {
        echo::print_detail("Size", &echo::format_size(manifest.len()));
        echo::print_step(2, 3, if args.index { "Building sitemap index" } else { "Building sitemap" });
    }

    let (output, count) = if args.index {
        let index = build_index(&manifest, &args)?;
        let xml = convert_index_to_xml(index.items(), &IndexConfig { pretty: !args.compact })
            .context("Failed to render sitemap index")?;
        (xml, index.count())
    } else {
        let sitemap = build_sitemap(&manifest, &args)?;
        (render_sitemap(&sitemap, &args)?, sitemap.count())
    };

    if args.verbose {
        echo::print_detail("URLs", &count.to_string());
        if count == 0 {
            echo::print_warning("Manifest contained no URLs");
        }
        echo::print_step(3, 3, &format!("Writing {} output", args.format));
        echo::print_detail("Size", &echo::format_size(output.len()));
    }

    match args.output {
        Some(path) => {
            fs::write(&path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            io::stdout().write_all(&output).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
