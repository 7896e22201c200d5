use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::result::ZipResult;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "translate_pipeline_lambda";
const LAMBDA_BINARIES: &[(&str, &str)] = &[
    ("translate_lambda", "translate.zip"),
    ("media_convert_lambda", "media_convert.zip"),
];

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the translation pipeline workspace",
    long_about = "A unified CLI for CI checks and Lambda packaging in the\n\
                  translation pipeline workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run workspace tests
    Test,
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build and zip the Lambda binaries as `bootstrap` artifacts
    ServerlessPackage {
        /// Compilation target triple for Lambda binaries
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for binaries
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
        /// Directory receiving the zip artifacts
        #[arg(long, env = "LAMBDA_DIST_DIR", default_value = "dist")]
        dist_dir: String,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting and clippy
    Lint,
    /// Formatting, clippy, and tests
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn package_serverless_lambdas(target: &str, profile: BuildProfile, dist_dir: &Path) {
    step("Build lambda binaries");
    let mut cargo_args = vec!["build", "-p", LAMBDA_PACKAGE, "--target", target];
    for (bin, _) in LAMBDA_BINARIES {
        cargo_args.extend(["--bin", *bin]);
    }
    cargo_args.extend(profile.as_cargo_flag());
    run_cargo(&cargo_args);

    step("Package lambda zip artifacts");
    let build_dir = Path::new("target").join(target).join(profile.dir_name());
    for (bin, archive) in LAMBDA_BINARIES {
        let zip_path = dist_dir.join(archive);
        if let Err(error) = write_bootstrap_zip(&build_dir.join(bin), &zip_path) {
            eprintln!("error: packaging `{bin}` failed: {error}");
            exit(1);
        }
        eprintln!("- {}", zip_path.display());
    }
}

/// Lambda's custom runtime executes an archive entry named `bootstrap`.
fn write_bootstrap_zip(binary_path: &Path, zip_path: &Path) -> ZipResult<()> {
    let binary = fs::read(binary_path)?;
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut zip = ZipWriter::new(fs::File::create(zip_path)?);
    zip.start_file(
        "bootstrap",
        FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o755),
    )?;
    zip.write_all(&binary)?;
    zip.finish()?;
    Ok(())
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_lint() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn ci_test() {
    step("Test translate_pipeline_core");
    run_cargo(&["test", "-p", "translate_pipeline_core"]);

    step("Test translate_pipeline_lambda");
    run_cargo(&["test", "-p", LAMBDA_PACKAGE]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Test => ci_test(),
        Commands::Ci { job } => match job {
            CiJob::Lint => ci_lint(),
            CiJob::Check => {
                ci_lint();
                ci_test();
            }
        },
        Commands::ServerlessPackage {
            target,
            profile,
            dist_dir,
        } => package_serverless_lambdas(&target, profile, Path::new(&dist_dir)),
    }
}
