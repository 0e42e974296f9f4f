use clap::Parser;
use std::io;
use texrename::cli::Args;
use texrename::output::{display_config, display_summary};
use texrename::progress::{should_use_colors, Progress};
use texrename::prompt::{program_dir, prompt_target, wait_for_ack};
use texrename::{logging, rename_tree, resolve_config, resolve_root, AppError, ExitCode, Rules};
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    let code = match run(&args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            error!("{}", e);
            eprintln!("\nError: {}", e.detailed_message());
            e.exit_code()
        }
    };

    if args.should_pause() {
        let _ = wait_for_ack(&mut io::stdin().lock(), &mut io::stdout());
    }

    std::process::exit(code.into());
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = args.apply_overrides(resolve_config(args.config.as_deref())?);

    if args.show_config {
        return display_config(&config, &mut io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)));
    }

    // Patterns are compiled before anything is asked of the operator
    let rules = Rules::new(config)?;
    debug!("Naming rules ready");

    let target = match &args.target_dir {
        Some(dir) => dir.clone(),
        None => {
            let default = program_dir()
                .map_err(|e| AppError::Other(format!("Cannot locate program directory: {}", e)))?;
            prompt_target(&mut io::stdin().lock(), &mut io::stdout(), &default)
                .map_err(|e| AppError::Other(format!("Failed to read path: {}", e)))?
        }
    };

    let root = resolve_root(&target)?;
    info!("Target directory: {}", root.display());

    let mut progress = Progress::new_with_ui(args.verbose > 0, should_use_colors());
    progress.walk_start(&root);

    let summary = rename_tree(&root, &rules, &mut progress)?;
    progress.walk_complete(summary.len());

    display_summary(&summary, &mut io::stdout())
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}
