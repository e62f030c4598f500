use std::process::ExitCode;

use cipher_toolkit::registry::{self, Direction};
use cipher_toolkit::request::{FORMAT_OPTION, MODE_OPTION};
use cipher_toolkit::CipherRequest;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::util::SubscriberInitExt;

/// Command-line arguments for the cipher toolkit.
#[derive(Parser, Debug)]
#[command(
    name = "cipher",
    version,
    about = "Encrypt or decrypt a file with one of the educational ciphers",
    long_about = "
Runs one cipher from the catalog over the contents of a file.
Use --list to see the available ciphers.

Not suitable for protecting real data."
)]
struct Cli {
    /// Print the available ciphers and exit
    #[arg(long)]
    list: bool,

    /// Cipher name or slug (e.g. 'Vigenère Cipher' or 'vigenere')
    #[arg(short, long, required_unless_present = "list")]
    cipher: Option<String>,

    /// Key for the cipher
    #[arg(short, long, required_unless_present = "list")]
    key: Option<String>,

    /// Path to the input file
    #[arg(short, long, required_unless_present = "list")]
    file: Option<String>,

    /// Path to the output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Mode of operation (encrypt/decrypt)
    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt)]
    mode: OperationMode,

    /// One-Time Pad variant (letters/xor)
    #[arg(long)]
    otp_mode: Option<String>,

    /// Ciphertext encoding for One-Time Pad XOR mode (hex/base64)
    #[arg(long)]
    format: Option<String>,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

impl From<OperationMode> for Direction {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Direction::Encrypt,
            OperationMode::Decrypt => Direction::Decrypt,
        }
    }
}

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `warn`).
fn setup_log() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = SubscriberBuilder::default()
        .with_line_number(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .finish()
        .try_init();
}

fn list_ciphers() {
    for entry in registry::entries() {
        println!("{:<20} {}", entry.slug, entry.name);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let (Some(cipher), Some(key), Some(file)) = (cli.cipher, cli.key, cli.file) else {
        return Err("--cipher, --key and --file are required".to_string());
    };

    let entry = registry::lookup(&cipher)
        .ok_or_else(|| format!("Unknown cipher '{cipher}' (see --list)"))?;

    // Read input file content
    let content = std::fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read input file {file}: {e}"))?;
    // editors leave a trailing newline that is not part of the message
    let content = content.strip_suffix('\n').unwrap_or(&content);
    let content = content.strip_suffix('\r').unwrap_or(content);

    let mut request = CipherRequest::new(content, key);
    if let Some(otp_mode) = cli.otp_mode {
        request = request.with_option(MODE_OPTION, otp_mode);
    }
    if let Some(format) = cli.format {
        request = request.with_option(FORMAT_OPTION, format);
    }

    let direction = Direction::from(cli.mode);
    debug!(cipher = entry.name, %direction, input = %file, "running");
    let result = entry.run(direction, &request).map_err(|e| e.to_string())?;

    match cli.output {
        Some(path) => std::fs::write(&path, result)
            .map_err(|e| format!("Failed to write output file {path}: {e}"))?,
        None => println!("{result}"),
    }
    Ok(())
}

/// Main entry point for the cipher program.
fn main() -> ExitCode {
    setup_log();
    let cli: Cli = Cli::parse();

    if cli.list {
        list_ciphers();
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            debug!(%message, "cipher run failed");
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_needs_no_other_arguments() {
        let cli = Cli::try_parse_from(["cipher", "--list"]).unwrap();
        assert!(cli.list);
    }

    #[test]
    fn test_parse_otp_options() {
        let cli = Cli::try_parse_from([
            "cipher", "-c", "otp", "-k", "secret", "-f", "in.txt", "-m", "decrypt",
            "--otp-mode", "xor", "--format", "base64",
        ])
        .unwrap();
        assert!(matches!(cli.mode, OperationMode::Decrypt));
        assert_eq!(cli.otp_mode.as_deref(), Some("xor"));
        assert_eq!(cli.format.as_deref(), Some("base64"));
    }

    #[test]
    fn test_missing_key_is_rejected() {
        assert!(Cli::try_parse_from(["cipher", "-c", "caesar", "-f", "in.txt"]).is_err());
    }
}
