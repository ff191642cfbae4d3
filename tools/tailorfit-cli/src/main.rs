//! Tailorfit command-line tool
//!
//! Reads job descriptions and resumes from files or stdin, prints
//! requirement profiles and tailoring suggestions, and walks through
//! applying them to a JSON resume.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tailorfit_core::prompts::{general_prompt, section_prompt};
use tailorfit_core::{
    Analyzer, AnalyzerConfig, Lexicon, RequirementProfile, ResumeDocument, ResumeSection,
    RuleTagger,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "tailorfit")]
#[command(about = "Analyze job descriptions and tailor resumes to them")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON lexicon extending the built-in tagger word lists
    #[arg(short = 'L', long, env = "TAILORFIT_LEXICON", global = true)]
    lexicon: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tailorfit_core=trace`
    #[arg(long, env = "TAILORFIT_LOG", default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the requirement profile of a job description as JSON
    Analyze {
        /// Job description file, or `-` for stdin
        #[arg(short, long)]
        job: PathBuf,
    },
    /// List suggestions for tailoring a resume to a job description
    Suggest {
        /// Job description file, or `-` for stdin
        #[arg(short, long)]
        job: PathBuf,
        /// Plain-text resume file
        #[arg(short, long, required_unless_present = "resume_json", conflicts_with = "resume_json")]
        resume: Option<PathBuf>,
        /// JSON resume document
        #[arg(long)]
        resume_json: Option<PathBuf>,
        /// Print suggestions as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Rewrite text with nouns and verbs capitalized for ATS parsers
    Optimize {
        /// Input file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },
    /// Apply suggestions to a JSON resume interactively
    Tailor {
        /// Job description file
        #[arg(short, long)]
        job: PathBuf,
        /// JSON resume document
        #[arg(long)]
        resume_json: PathBuf,
        /// Answer yes to every question
        #[arg(short, long)]
        yes: bool,
        /// Write the updated resume here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build an assistant prompt for one resume section
    Prompt {
        /// personal_info, summary, experience, education or skills
        #[arg(short, long)]
        section: ResumeSection,
        /// Role the resume targets; without it a general drafting prompt is built
        #[arg(short, long)]
        role: Option<String>,
        /// Context file, or `-` for stdin
        #[arg(short, long, required_unless_present = "resume_json", conflicts_with = "resume_json")]
        context: Option<PathBuf>,
        /// Take the section context from a JSON resume document
        #[arg(long)]
        resume_json: Option<PathBuf>,
        /// Job description file
        #[arg(short, long)]
        job: Option<PathBuf>,
    },
    /// Analyze one job description per stdin line, emitting JSON lines
    Batch,
}

/// One line of `batch` output.
#[derive(Debug, Serialize)]
struct BatchOutput {
    input: String,
    profile: Option<RequirementProfile>,
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("Invalid log filter: {}", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let analyzer = build_analyzer(cli.lexicon.as_deref())?;

    match cli.command {
        Commands::Analyze { job } => {
            let profile = analyzer.analyze_job_description(&read_input(&job)?);
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Commands::Suggest {
            job,
            resume,
            resume_json,
            json,
        } => {
            let job = read_input(&job)?;
            let resume_text = match (resume, resume_json) {
                (_, Some(path)) => load_resume(&path)?.to_plain_text(),
                (Some(path), None) => read_input(&path)?,
                (None, None) => anyhow::bail!("Either --resume or --resume-json is required"),
            };

            let suggestions = analyzer.get_optimization_suggestions(&resume_text, &job);
            write_suggestions(&mut io::stdout().lock(), &mut io::stderr(), &suggestions, json)?;
        }
        Commands::Optimize { input } => {
            println!("{}", analyzer.optimize_text(&read_input(&input)?));
        }
        Commands::Tailor {
            job,
            resume_json,
            yes,
            output,
        } => {
            let job = read_input(&job)?;
            let mut resume = load_resume(&resume_json)?;
            tailor(&analyzer, &mut resume, &job, yes)?;

            let rendered = serde_json::to_string_pretty(&resume)?;
            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Wrote tailored resume");
                }
                None => println!("{rendered}"),
            }
        }
        Commands::Prompt {
            section,
            role,
            context,
            resume_json,
            job,
        } => {
            let context = match (context, resume_json) {
                (_, Some(path)) => load_resume(&path)?.section_context(section),
                (Some(path), None) => read_input(&path)?,
                (None, None) => anyhow::bail!("Either --context or --resume-json is required"),
            };
            let job = job.map(|path| read_input(&path)).transpose()?;

            let prompt = match role {
                Some(role) => section_prompt(section, &role, &context, job.as_deref())?,
                None => general_prompt(section, &context, job.as_deref())?,
            };
            println!("{prompt}");
        }
        Commands::Batch => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            for line in stdin.lock().lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let output = batch_line(&analyzer, line);
                writeln!(stdout, "{}", serde_json::to_string(&output)?)?;
            }
        }
    }

    Ok(())
}

/// Prints suggestions as a list or JSON array. An empty list is reported
/// on `err` so the user always sees an answer.
fn write_suggestions(
    out: &mut impl Write,
    err: &mut impl Write,
    suggestions: &[String],
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(suggestions)?)?;
    } else if suggestions.is_empty() {
        writeln!(err, "Your resume already covers this job description.")?;
    } else {
        for suggestion in suggestions {
            writeln!(out, "- {suggestion}")?;
        }
    }
    Ok(())
}

/// Builds the analyzer, loading a custom lexicon when one is given.
fn build_analyzer(lexicon: Option<&Path>) -> Result<Analyzer> {
    let tagger = match lexicon {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read lexicon {}", path.display()))?;
            let lexicon = Lexicon::from_json(&json)?;
            debug!(entries = lexicon.len(), "Loaded lexicon");
            RuleTagger::with_lexicon(lexicon)
        }
        None => RuleTagger::new(),
    };
    Ok(Analyzer::new(AnalyzerConfig::default(), Arc::new(tagger))?)
}

/// Reads a file, or stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn load_resume(path: &Path) -> Result<ResumeDocument> {
    let json = read_input(path)?;
    serde_json::from_str(&json).with_context(|| format!("Invalid resume JSON in {}", path.display()))
}

/// Runs every suggestion through the apply workflow, asking on stderr.
fn tailor(analyzer: &Analyzer, resume: &mut ResumeDocument, job: &str, yes: bool) -> Result<()> {
    let suggestions = analyzer.suggest(&resume.to_plain_text(), job);
    if suggestions.is_empty() {
        eprintln!("Your resume already covers this job description.");
        return Ok(());
    }

    eprintln!("Optimization Suggestions:");
    for suggestion in &suggestions {
        eprintln!("- {suggestion}");
    }

    let stdin = io::stdin();
    let mut answers = stdin.lock().lines();
    let mut confirm = |question: &str| -> bool {
        if yes {
            return true;
        }
        eprint!("{question} [y/N]: ");
        match answers.next() {
            Some(Ok(answer)) => is_yes(&answer),
            Some(Err(e)) => {
                warn!(error = %e, "Failed to read answer, treating as no");
                false
            }
            None => false,
        }
    };

    for suggestion in &suggestions {
        for outcome in resume.apply_suggestion(suggestion, &mut confirm) {
            eprintln!("{outcome}");
        }
    }
    Ok(())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Analyzes one batch line. A line starting with `"` is a JSON string, so
/// multi-line job descriptions can be passed with `\n` escapes.
fn batch_line(analyzer: &Analyzer, line: &str) -> BatchOutput {
    let text = if line.starts_with('"') {
        match serde_json::from_str::<String>(line) {
            Ok(text) => text,
            Err(e) => {
                return BatchOutput {
                    input: line.to_string(),
                    profile: None,
                    error: Some(e.to_string()),
                };
            }
        }
    } else {
        line.to_string()
    };

    BatchOutput {
        profile: Some(analyzer.analyze_job_description(&text)),
        input: text,
        error: None,
    }
}
