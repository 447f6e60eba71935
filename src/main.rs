use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::Path;
use treesite::build::build_site;
use treesite::config::Site;
use treesite::template::PageTemplate;

const DEFAULT_CONFIG_FILE: &str = "config.json";
const DEFAULT_STYLE_FILE: &str = "style.css";

fn main() {
    let matches = App::new("treesite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mirrors a directory of Markdown documents into a static HTML site")
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .default_value(DEFAULT_CONFIG_FILE)
                .help("The site config file (JSON or YAML)"),
        )
        .arg(
            Arg::with_name("style")
                .long("style")
                .value_name("FILE")
                .takes_value(true)
                .default_value(DEFAULT_STYLE_FILE)
                .help("The CSS file embedded into every page"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Logs every rendered page and copied file"),
        )
        .arg(
            Arg::with_name("INDIR")
                .required(true)
                .index(1)
                .help("The source directory"),
        )
        .arg(
            Arg::with_name("OUTDIR")
                .required(true)
                .index(2)
                .help("The output directory"),
        )
        .get_matches();

    let _ = SimpleLogger::new()
        .with_level(match matches.is_present("verbose") {
            true => LevelFilter::Debug,
            false => LevelFilter::Info,
        })
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let site = Site::load(
        Path::new(matches.value_of("config").unwrap_or(DEFAULT_CONFIG_FILE)),
        Path::new(matches.value_of("style").unwrap_or(DEFAULT_STYLE_FILE)),
    )
    .map_err(|e| format!("configuration error: {}", e))?;
    let template = PageTemplate::new()?;

    // INDIR and OUTDIR are required, so clap exits before we get here without
    // them.
    let source_directory = Path::new(matches.value_of("INDIR").unwrap_or_default());
    let output_directory = Path::new(matches.value_of("OUTDIR").unwrap_or_default());

    build_site(&site, &template, source_directory, output_directory)
        .map_err(|e| format!("build error: {}", e))?;
    Ok(())
}
