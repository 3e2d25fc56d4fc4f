//! Hashgate CLI - Command line interface.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::Zeroizing;

use hashgate_crypto::{
    digest, mac, DigestAlgorithm, HmacSha512Output, ProviderConfig, RustCryptoProvider,
};

// ============================================================================
// CLI Structure
// ============================================================================

#[derive(Parser)]
#[command(name = "hashgate")]
#[command(about = "Hashgate CLI - Compute digests and HMAC-SHA512")]
#[command(version)]
struct Cli {
    /// Provider configuration file (JSON)
    #[arg(long, env = "HASHGATE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a digest
    Digest {
        /// Algorithm (sha256, sha512, ripemd160)
        #[arg(short, long, default_value = "sha256")]
        algorithm: DigestAlgorithm,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Compute HMAC-SHA512
    Hmac {
        /// Key as hex
        #[arg(long, env = "HASHGATE_KEY_HEX", hide_env_values = true)]
        key_hex: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Verify an HMAC-SHA512 tag (exits 1 on mismatch)
    Verify {
        /// Key as hex
        #[arg(long, env = "HASHGATE_KEY_HEX", hide_env_values = true)]
        key_hex: String,
        /// Expected tag as hex
        #[arg(long)]
        mac: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// RIPEMD-160 of SHA-256
    Hash160 {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Double SHA-256
    Sha256d {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Read input from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Input text (stdin is read when neither text nor --file is given)
    text: Option<String>,
}

impl InputArgs {
    fn read(&self) -> Result<Vec<u8>> {
        if let Some(path) = &self.file {
            return read_file(path);
        }
        if let Some(text) = &self.text {
            return Ok(text.as_bytes().to_vec());
        }

        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn decode_key(key_hex: &str) -> Result<Zeroizing<Vec<u8>>> {
    let key = hex::decode(key_hex.trim()).context("Key must be hex encoded")?;
    Ok(Zeroizing::new(key))
}

fn load_provider(config: Option<&Path>) -> Result<RustCryptoProvider> {
    let config = match config {
        Some(path) => ProviderConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ProviderConfig::default(),
    };
    tracing::debug!(?config, "provider configured");
    Ok(RustCryptoProvider::with_config(config))
}

// ============================================================================
// Command Handlers
// ============================================================================

fn cmd_digest(
    provider: &RustCryptoProvider,
    algorithm: DigestAlgorithm,
    input: &[u8],
) -> Result<()> {
    let out = digest::digest(provider, algorithm, input)
        .with_context(|| format!("{} failed", algorithm))?;
    println!("{}", hex::encode(out));
    Ok(())
}

fn cmd_hmac(provider: &RustCryptoProvider, key_hex: &str, input: &[u8]) -> Result<()> {
    let key = decode_key(key_hex)?;
    let mut out = HmacSha512Output::zeroed();
    mac::hmac_sha512(provider, input, &key, &mut out).context("HMAC-SHA512 failed")?;
    println!("{}", out.to_hex());
    Ok(())
}

fn cmd_verify(
    provider: &RustCryptoProvider,
    key_hex: &str,
    expected_hex: &str,
    input: &[u8],
) -> Result<bool> {
    let key = decode_key(key_hex)?;
    let expected = hex::decode(expected_hex.trim()).context("MAC must be hex encoded")?;
    if expected.len() != HmacSha512Output::LEN {
        bail!(
            "MAC must be {} bytes, got {}",
            HmacSha512Output::LEN,
            expected.len()
        );
    }

    let ok = mac::verify_hmac_sha512(provider, input, &key, &expected)
        .context("HMAC-SHA512 failed")?;
    println!("{}", if ok { "OK" } else { "MISMATCH" });
    Ok(ok)
}

fn cmd_hash160(provider: &RustCryptoProvider, input: &[u8]) -> Result<()> {
    let out = digest::hash160(provider, input).context("HASH160 failed")?;
    println!("{}", out.to_hex());
    Ok(())
}

fn cmd_sha256d(provider: &RustCryptoProvider, input: &[u8]) -> Result<()> {
    let out = digest::sha256d(provider, input).context("double SHA-256 failed")?;
    println!("{}", out.to_hex());
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn run(cli: Cli) -> Result<ExitCode> {
    let provider = load_provider(cli.config.as_deref())?;

    match cli.command {
        Commands::Digest { algorithm, input } => {
            cmd_digest(&provider, algorithm, &input.read()?)?
        },
        Commands::Hmac { key_hex, input } => cmd_hmac(&provider, &key_hex, &input.read()?)?,
        Commands::Verify {
            key_hex,
            mac: expected,
            input,
        } => {
            if !cmd_verify(&provider, &key_hex, &expected, &input.read()?)? {
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Hash160 { input } => cmd_hash160(&provider, &input.read()?)?,
        Commands::Sha256d { input } => cmd_sha256d(&provider, &input.read()?)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    run(Cli::parse())
}
