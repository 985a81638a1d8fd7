use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("sitemap")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Sitemap Contributors")
        .about("Render sitemaps and sitemap indexes from a manifest")
        .arg(clap::arg!([INPUT] "Manifest file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (xml, news, mobile, text, html, json)")
                .value_name("FORMAT")
                .default_value("xml")
                .value_parser(["xml", "news", "mobile", "text", "html", "json"]),
        )
        .arg(clap::arg!(--index "Treat the manifest as a sitemap index (XML output only)"))
        .arg(clap::arg!(--lines "Read one URL per line instead of a JSON manifest"))
        .arg(clap::arg!(--priority <NUM> "Priority for URLs read with --lines").default_value("0.5"))
        .arg(
            clap::arg!(--changefreq <FREQ> "Change frequency for URLs read with --lines")
                .default_value("weekly")
                .value_parser(["always", "hourly", "daily", "weekly", "monthly", "yearly", "never"]),
        )
        .arg(clap::arg!(--lastmod <TIMESTAMP> "RFC 3339 timestamp applied to entries without one"))
        .arg(clap::arg!(--max_urls <NUM> "Maximum number of URLs accepted").default_value("50000"))
        .arg(clap::arg!(--base_url <URL> "Base URL recorded in the sitemap options").value_name("URL"))
        .arg(clap::arg!(--title <TITLE> "Page title for HTML output").default_value("Sitemap"))
        .arg(clap::arg!(--pretty "Pretty print JSON output"))
        .arg(clap::arg!(--compact "Write XML without indentation"))
        .arg(clap::arg!(-v --verbose "Print progress to stderr"))
        .arg(
            clap::arg!(--completions <SHELL> "Print a shell completion script and exit")
                .value_name("SHELL")
                .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "sitemap", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "sitemap", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "sitemap", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "sitemap", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
