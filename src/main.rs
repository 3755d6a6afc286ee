use anyhow::{bail, Context, Result};
use mdtable::logging::{self, Logger};
use mdtable::{MemoryEditor, Options, TableEditor};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: mdtable [OPTIONS] [FILE...]

Formats every Markdown table in the given files (or stdin).

Options:
  -i, --in-place       rewrite the files instead of printing
      --check          exit with status 1 if any file would change
  -c, --config FILE    load options from a JSON file
  -h, --help           print this help";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    in_place: bool,
    check: bool,
    help: bool,
    config: Option<PathBuf>,
    files: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // 二重登録のエラーは無視する
    let _ = logging::init(Logger::from_env());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    }
    let options = load_options(cli.config.as_deref())?;

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let output = format_text(&input, &options)?;
        if cli.check {
            return Ok(exit_code(output != input));
        }
        io::stdout().write_all(output.as_bytes())?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut changed = false;
    for path in &cli.files {
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let output = format_text(&input, &options)
            .with_context(|| format!("failed to format {}", path.display()))?;

        if output != input {
            changed = true;
            log::info!("{} needs formatting", path.display());
        }
        if cli.check {
            if output != input {
                eprintln!("would reformat {}", path.display());
            }
        } else if cli.in_place {
            if output != input {
                fs::write(path, &output)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        } else {
            io::stdout().write_all(output.as_bytes())?;
        }
    }

    Ok(exit_code(cli.check && changed))
}

fn exit_code(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-i" | "--in-place" => cli.in_place = true,
            "--check" => cli.check = true,
            "-h" | "--help" => cli.help = true,
            "-c" | "--config" => {
                let Some(path) = iter.next() else {
                    bail!("{} requires a file argument", arg);
                };
                cli.config = Some(expand_path(path));
            }
            other if other.starts_with('-') && other != "-" => {
                bail!("unknown option: {}\n\n{}", other, USAGE);
            }
            file => cli.files.push(PathBuf::from(file)),
        }
    }
    if cli.in_place && cli.files.is_empty() {
        bail!("--in-place requires at least one file");
    }
    Ok(cli)
}

/// `~` をホームディレクトリに展開する
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn load_options(config: Option<&Path>) -> Result<Options> {
    match config {
        Some(path) => Options::from_file(path)
            .with_context(|| format!("failed to load options from {}", path.display())),
        None => Options::load_default().context("failed to load default options"),
    }
}

/// 文書中のすべてのテーブルを整形したテキスト
fn format_text(text: &str, options: &Options) -> mdtable::Result<String> {
    let mut editor = TableEditor::new(MemoryEditor::from_markdown(text));
    editor.format_all(options)?;
    Ok(editor.into_inner().text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(&args(&["--check", "-c", "opts.json", "a.md", "b.md"])).unwrap();
        assert!(cli.check);
        assert_eq!(cli.config, Some(PathBuf::from("opts.json")));
        assert_eq!(cli.files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--unknown"])).is_err());
        assert!(parse_args(&args(&["--in-place"])).is_err());
    }

    #[test]
    fn test_format_text() {
        let input = "# Title\n\n| a | b |\n|-|-|\n| 1 | 22 |\n\n```\n| x |\n```\n";
        let output = format_text(input, &Options::default()).unwrap();
        assert_eq!(
            output,
            "# Title\n\n| a   | b   |\n| --- | --- |\n| 1   | 22  |\n\n```\n| x |\n```\n"
        );
    }
}
