//! Minimal CLI: form schema → (html | json tree)
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use crate::error::FormError;
use crate::sink::{HtmlPage, Workbench};
use crate::source::{Preprocess, SchemaSource};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// compile declarative JSON form schemas into an HTML form tree
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// compile and emit each form
    Render(RenderOut),
    /// compile each form and report errors only
    Check(CheckOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select the form inside each document (e.g. /forms/0)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; the first output is used.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

#[derive(clap::Parser, Debug)]
struct RenderOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// emit only the form root (no <html> document shell)
    #[arg(long)]
    fragment: bool,

    /// spaces per indentation level in HTML output
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// write `<stem>.html` / `<stem>.json` per input here (stdout if omitted)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct CheckOut {
    #[command(flatten)]
    input_settings: InputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn preprocess(&self) -> Preprocess {
        Preprocess { json_pointer: self.json_pointer.clone(), jq_expr: self.jq_expr.clone() }
    }
    fn sources(&self) -> anyhow::Result<Vec<SchemaSource>> {
        let mut sources = Vec::new();
        let mut paths = Vec::new();
        for raw in &self.input {
            if raw == "-" {
                sources.push(SchemaSource::Stdin);
            } else {
                paths.push(raw.as_str());
            }
        }
        let resolved = resolve_file_path_patterns(paths)
            .map_err(|error| anyhow::anyhow!("failed to resolve input file paths: {error}"))?;
        sources.extend(resolved.into_iter().map(SchemaSource::File));
        Ok(sources)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> ExitCode {
        let result = match &self.cmd {
            Command::Render(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return ExitCode::SUCCESS;
                }
                target.run()
            }
            Command::Check(target) => target.run(),
        };
        match result {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(error) => {
                eprintln!("{} {error:#}", "error:".red().bold());
                ExitCode::FAILURE
            }
        }
    }
}

impl RenderOut {
    /// `Ok(false)` when at least one input failed.
    fn run(&self) -> anyhow::Result<bool> {
        let sources = self.input_settings.sources()?;
        let mut bench = Workbench::new(HtmlPage::new(self.fragment, Some(self.indent)));
        bench.preprocess = self.input_settings.preprocess();

        for source in &sources {
            if bench.load(source).is_err() {
                continue;
            }
            let Some(tree) = bench.sink.tree() else { continue };
            let (text, ext) = match self.format {
                Format::Html => (bench.sink.render(&Default::default()), "html"),
                Format::Json => (serde_json::to_string_pretty(tree)?, "json"),
            };
            match self.out_dir.as_ref() {
                Some(dir) => {
                    let path = dir.join(format!("{}.{ext}", source.fallback_name()));
                    if let Err(error) = write_output(&path, &text) {
                        bench.errors.push(error.to_string());
                    }
                }
                None => println!("{text}"),
            }
        }
        Ok(report(&bench.errors))
    }
}

impl CheckOut {
    fn run(&self) -> anyhow::Result<bool> {
        let sources = self.input_settings.sources()?;
        let mut bench = Workbench::new(HtmlPage::default());
        bench.preprocess = self.input_settings.preprocess();
        for source in &sources {
            if bench.load(source).is_ok() {
                eprintln!("{} {}", "ok".green().bold(), source.display_name());
            }
        }
        Ok(report(&bench.errors))
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Print the accumulated error area; true when it is empty.
fn report(errors: &crate::sink::ErrorArea) -> bool {
    for message in errors.messages() {
        eprintln!("{} {message}", "error:".red().bold());
    }
    errors.is_empty()
}

fn write_output(path: &Path, text: &str) -> Result<(), FormError> {
    let output_error = |error| FormError::Output { path: path.to_path_buf(), error };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(output_error)?;
    }
    std::fs::write(path, text).map_err(output_error)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                matched_any = true;
                out.push(entry?);
            }
            if !matched_any {
                return Err(format!("glob pattern matched no files: {pattern}").into());
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_flags() {
        let cli = CommandLineInterface::try_parse_from([
            "json-form", "render", "-i", "a.json", "b.json", "--format", "json", "--fragment",
        ])
        .unwrap();
        let Command::Render(render) = cli.cmd else { panic!("expected render") };
        assert_eq!(render.input_settings.input, ["a.json", "b.json"]);
        assert_eq!(render.format, Format::Json);
        assert!(render.fragment);
        assert_eq!(render.indent, 2);
    }

    #[test]
    fn input_is_required() {
        assert!(CommandLineInterface::try_parse_from(["json-form", "check"]).is_err());
    }

    #[test]
    fn dash_means_stdin() {
        let settings = InputSettings { json_pointer: None, jq_expr: None, input: vec!["-".into()] };
        let sources = settings.sources().unwrap();
        assert!(matches!(sources.as_slice(), [SchemaSource::Stdin]));
    }

    #[test]
    fn unmatched_glob_is_an_error() {
        assert!(resolve_file_path_patterns(["/no/such/dir/*.json"]).is_err());
    }
}
