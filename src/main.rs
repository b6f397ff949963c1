use std::path::PathBuf;
use std::process::ExitCode;

use base64::{Engine, engine::general_purpose::STANDARD};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gatelog::journal::{AccessLog, Result};
use gatelog::types::{AccessGrant, ActionCode};

/// Record one granted access in the shared access log.
///
/// Invoked by a dispatching gate daemon as an action hook, with the grant's
/// fields as positional arguments in hook order.
#[derive(Debug, Parser)]
#[command(name = "gatelog", version, about = "Append one granted access to the access log")]
struct Args {
    /// Target log file. Created if absent; its directory must already exist.
    #[arg(long)]
    file: PathBuf,

    /// Source address of the grantee.
    ip: String,

    /// Actor identity.
    user: String,

    /// Free-form comment; normalized before storage.
    comment: String,

    /// Numeric action identifier (accepted, not persisted).
    action_code: u32,

    /// Configured action name (accepted, not persisted).
    action_name: String,

    /// Base64-encoded action payload (accepted, not persisted).
    payload_b64: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatelog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "access not recorded");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let payload = match args.payload_b64.as_deref() {
        Some(encoded) => STANDARD.decode(encoded)?,
        None => Vec::new(),
    };

    let log = AccessLog::new(args.file);
    let grant = AccessGrant::new(
        args.ip,
        args.user,
        args.comment,
        ActionCode(args.action_code),
        args.action_name,
        payload,
    );

    let record = log.record_access(&grant)?;
    tracing::info!(
        user = %record.user,
        ip = %record.ip,
        b64 = record.b64,
        "access recorded"
    );

    Ok(())
}
