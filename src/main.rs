use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
mod auth;
use sealkit::{CostProfile, crypto};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    Interactive,
    Moderate,
    Sensitive,
}

#[derive(Debug, clap::Args)]
struct CostArgs {
    /// Argon2 cost tier (default: interactive)
    #[arg(long, value_enum, env = "SEALKIT_PROFILE")]
    profile: Option<Profile>,

    /// Argon2 memory cost in KiB (overrides the profile)
    #[arg(long = "argon-mem")]
    mem_cost_kib: Option<u32>,

    /// Argon2 time cost / iterations (overrides the profile)
    #[arg(long = "argon-time")]
    time_cost: Option<u32>,

    /// Argon2 parallelism (overrides the profile)
    #[arg(long = "argon-parallelism")]
    parallelism: Option<u32>,
}

impl CostArgs {
    fn to_cost_profile(&self) -> Result<CostProfile> {
        let base = match self.profile {
            Some(Profile::Moderate) => CostProfile::moderate(),
            Some(Profile::Sensitive) => CostProfile::sensitive(),
            Some(Profile::Interactive) | None => CostProfile::interactive(),
        };

        CostProfile::new(
            self.mem_cost_kib.unwrap_or(base.mem_cost_kib()),
            self.time_cost.unwrap_or(base.time_cost()),
            self.parallelism.unwrap_or(base.parallelism()),
        )
    }
}

#[derive(Debug, Parser)]
#[command(name = "sealkit")]
#[command(
    version,
    about = "Passphrase-based sealing, integrity digests and password hashing."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypts a file (or stdin) under a passphrase-derived key
    Seal {
        #[command(flatten)]
        cost: CostArgs,

        /// Write the sealed message here instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Input file (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// Decrypts a sealed file (or stdin)
    Open {
        /// Write the plaintext here instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Input file (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// Prints the integrity digest of a file (or stdin)
    Digest {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// Checks a file (or stdin) against a hex-encoded integrity digest
    #[command(arg_required_else_help = true)]
    CheckDigest {
        digest: String,

        /// Input file (stdin if omitted)
        input: Option<PathBuf>,
    },

    /// Hashes a new password for storage, printing the encoded hash
    HashPassword {
        #[command(flatten)]
        cost: CostArgs,
    },

    /// Verifies a password against a stored encoded hash
    #[command(arg_required_else_help = true)]
    VerifyPassword { hash_file: PathBuf },
}

fn read_input(input: Option<&PathBuf>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(out: Option<&PathBuf>, data: &[u8]) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            io::stdout().write_all(data)?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seal { cost, out, input } => {
            let profile = cost.to_cost_profile()?;
            let passphrase = auth::read_passphrase()?;
            let plaintext = read_input(input.as_ref())?;

            let sealed = sealkit::seal_with_profile(&passphrase, &plaintext, profile)?;
            write_output(out.as_ref(), &sealed)?;
        }

        Commands::Open { out, input } => {
            let passphrase = auth::read_passphrase()?;
            let sealed = read_input(input.as_ref())?;

            let plaintext = sealkit::open(&passphrase, &sealed)?;
            write_output(out.as_ref(), &plaintext)?;
        }

        Commands::Digest { input } => {
            let data = read_input(input.as_ref())?;
            println!("{}", hex::encode(crypto::integrity_hash(&data)));
        }

        Commands::CheckDigest { digest, input } => {
            let expected = hex::decode(&digest).context("digest is not valid hex")?;
            let data = read_input(input.as_ref())?;

            if crypto::integrity_verify(&data, &expected) {
                println!("digest OK");
            } else {
                bail!("digest mismatch");
            }
        }

        Commands::HashPassword { cost } => {
            let profile = cost.to_cost_profile()?;
            let password = auth::read_new_password_with_confirmation()?;

            let hash = crypto::password_hash(password.as_bytes(), profile)?;
            println!("{hash}");
        }

        Commands::VerifyPassword { hash_file } => {
            let hash = fs::read_to_string(&hash_file)
                .with_context(|| format!("failed to read {}", hash_file.display()))?;
            let password = auth::read_passphrase()?;

            if crypto::password_verify(password.as_bytes(), hash.trim_end())? {
                println!("password OK");
            } else {
                bail!("password mismatch");
            }
        }
    }

    Ok(())
}
