//! Application entry point — PDF speech round-trip.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load `.env` (if present) so the credential can live next to the PDFs.
//! 3. Load [`AppConfig`] from disk (returns default on first run).
//! 4. Read the [`Credential`] once from the environment.
//! 5. Create a current-thread [`tokio`] runtime.
//! 6. Run the [`PipelineOrchestrator`] against the interactive prompt.
//! 7. Print the transcript; exit non-zero if the pipeline halted.

use std::process::ExitCode;

use pdf_roundtrip::{
    config::{AppConfig, Credential},
    pipeline::{prompt_file_name, PipelineOrchestrator},
};

fn main() -> ExitCode {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. .env
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("ignoring unreadable .env file: {e}"),
    }

    // 3. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 4. Credential
    let credential = Credential::from_env(&config.transcription.credential_env);

    // 5. Runtime (single thread; stages run one at a time)
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    // 6. Pipeline
    let orchestrator = PipelineOrchestrator::from_config(&config);
    let result = rt.block_on(orchestrator.run(credential.as_ref(), || {
        let stdin = std::io::stdin();
        prompt_file_name(&mut stdin.lock(), &mut std::io::stdout())
    }));

    // 7. Output
    match result {
        Ok(report) => {
            if report.transcript.trim().is_empty() {
                log::warn!("the transcription service returned an empty transcript");
            } else {
                println!("Transcription:");
                println!("{}", report.transcript);
            }
            ExitCode::SUCCESS
        }
        // Already logged by the orchestrator.
        Err(_) => ExitCode::FAILURE,
    }
}
