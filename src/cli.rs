//! Command-line driver. Collects `.tg` files, runs them through the front
//! end, and writes the generated sources next to their inputs.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use crate::{
    ast::TypeDecl,
    diag,
    generate::{self, Options},
    lexer::Lexer,
    parser,
    type_checker,
};

pub const EXTENSION: &str = ".tg";

#[derive(Debug, clap::Parser)]
#[command(version, about = "Generates source definitions from .tg schemas")]
pub struct Cli {
    /// A `.tg` file, or a directory scanned for `.tg` files.
    pub path: PathBuf,
    /// The language to generate definitions in.
    pub language: Language,
    /// Code indentation width.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..))]
    pub indent: u8,
    /// Dump the token stream of each input instead of generating code.
    #[arg(long)]
    pub tokens: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    #[value(alias = "golang")]
    Go,
    #[value(alias = "js")]
    Javascript,
    Java,
    #[value(alias = "kt")]
    Kotlin,
    #[value(alias = "rs")]
    Rust,
}

impl Language {
    pub fn extension(self) -> &'static str {
        match self {
            Language::Go => ".go",
            Language::Javascript => ".js",
            Language::Java => ".java",
            Language::Kotlin => ".kt",
            Language::Rust => ".rs",
        }
    }
}

pub fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let files = collect_files(&cli.path)?;
    if files.is_empty() {
        return Err(format!("Nothing to do. Ensure your files end with {EXTENSION}").into());
    }

    let options = Options {
        indent: usize::from(cli.indent),
        ..Options::default()
    };

    let start = Instant::now();
    println!("Processing {} files", files.len());
    for file in &files {
        println!("  {}", file.display());
        process_file(file, cli, &options)?;
    }
    println!("Time elapsed processing: {:?}", start.elapsed());
    Ok(())
}

fn process_file(file: &Path, cli: &Cli, options: &Options) -> Result<(), Box<dyn Error>> {
    let path = file.display().to_string();
    let data = fs::read(file)
        .map_err(|error| format!("Failed to open file at '{path}' because {error}"))?;

    if cli.tokens {
        dump_tokens(&data);
        return Ok(());
    }

    let mut types = parser::parse_file(&path, &data)?;
    type_checker::check_file(&path, &mut types)?;
    let code = generate_code(&mut types, cli.language, options, &path)?;

    let output = change_extension(&path, cli.language.extension());
    fs::write(&output, code)
        .map_err(|error| format!("ERROR writing contents to file: {error}"))?;
    Ok(())
}

fn generate_code(
    types: &mut [TypeDecl],
    language: Language,
    options: &Options,
    path: &str,
) -> diag::Result<String> {
    match language {
        Language::Go => generate::go::generate(types, options, path),
        Language::Javascript => Ok(generate::javascript::generate(types, options)),
        Language::Java => generate::java::generate(types, options, path),
        Language::Kotlin => generate::kotlin::generate(types, options, path),
        Language::Rust => generate::rust::generate(types, options, path),
    }
}

fn collect_files(path: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("the file/directory at '{}' does not exist", path.display()).into());
    }

    let has_extension =
        |p: &Path| p.to_str().is_some_and(|name| name.ends_with(EXTENSION));

    let mut files = Vec::new();
    if path.is_dir() {
        for entry in fs::read_dir(path).map_err(|_| "Failed to open directory.")? {
            let entry = entry.map_err(|_| "Failed to open directory.")?;
            if has_extension(&entry.path()) {
                files.push(entry.path());
            }
        }
        files.sort();
    } else if has_extension(path) {
        files.push(path.to_path_buf());
    }
    Ok(files)
}

fn dump_tokens(data: &[u8]) {
    let mut lexer = Lexer::new(data);
    loop {
        let token = lexer.next_token();
        println!("{token}");
        if token.is_eof() || token.is_error() {
            break;
        }
    }
}

/// `cat.tg` becomes e.g. `cat.js`. Inputs without an extension get the new
/// one appended.
fn change_extension(file: &str, new_extension: &str) -> String {
    match Path::new(file).extension() {
        None => format!("{file}{new_extension}"),
        Some(old) => {
            let old = format!(".{}", old.to_string_lossy());
            file.replacen(&old, new_extension, 1)
        }
    }
}
