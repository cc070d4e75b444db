use clap::Parser;
use console::style;
use log::error;
use sony_photo_organize::cli::{Cli, Mode};
use sony_photo_organize::component::PhotoWorkflow;
use sony_photo_organize::handlers::{
    load_configuration, run_backup_cleanup, run_create_config, run_rename_only, run_workflow,
};
use sony_photo_organize::init;
use std::process::ExitCode;

fn main() -> ExitCode {
    init::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format_error_chain(&e);
            error!("{message}");
            eprintln!("{} {}", style("Error:").red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let dry_run = cli.dry_run;

    match cli.mode() {
        Mode::CreateConfig => {
            let path = run_create_config()?;
            println!("{} {}", style("Created").green().bold(), path.display());
            Ok(())
        }
        Mode::Workflow => {
            let config = load_configuration(cli.config.as_deref())?;
            run_workflow(&PhotoWorkflow::default(), &config, dry_run)
        }
        Mode::BackupCleanup => {
            let config = load_configuration(cli.config.as_deref())?;
            run_backup_cleanup(&PhotoWorkflow::default(), &config, dry_run)
        }
        Mode::RenameOnly => {
            let config = load_configuration(cli.config.as_deref())?;
            run_rename_only(&config, cli.path.as_deref(), dry_run)?;
            Ok(())
        }
    }
}

/// 串接錯誤鏈，跳過已經包含在上一層訊息中的原因
fn format_error_chain(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        let cause = cause.to_string();
        if !message.contains(&cause) {
            message.push_str(": ");
            message.push_str(&cause);
        }
    }
    message
}
