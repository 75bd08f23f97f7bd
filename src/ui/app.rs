// Command-line front end
// Every command re-derives n and phi from p and q; nothing is cached between runs

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::error::RsaError;
use crate::rsa::{
    decode_blocks, derive_key, derive_private_exponent, encode, parse_decimal,
    random_public_exponent, suggest_public_exponent, BlockSequence, KeyParams, RsaBigInt,
};
use crate::util::file_ops::{read_text, write_text, Source};

/// Sample used by `demo`: p=61, q=53, e=17 gives n=3233, phi=3120, d=2753
const DEMO_FACTORS: (&str, &str) = ("61", "53");
const DEMO_PUBLIC_EXPONENT: &str = "17";
const DEMO_TEXT: &str = "Hello, RSA! Привіт!";

#[derive(Parser, Debug)]
#[command(name = "textbook_rsa")]
#[command(version)]
#[command(
    about = "Textbook RSA with manually chosen factors",
    long_about = "Textbook RSA with manually chosen factors\n\nEach character is encrypted as its own block with no padding.\nThis is a teaching tool and provides no security."
)]
pub struct Cli {
    /// Suppress status messages on stderr
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute n = p*q and phi = (p-1)(q-1)
    Keys {
        #[command(flatten)]
        factors: FactorArgs,
    },

    /// Compute the private exponent d = e^-1 mod phi
    PrivateExponent {
        #[command(flatten)]
        factors: FactorArgs,

        /// Public exponent
        #[arg(long, short, env = "RSA_E")]
        e: String,
    },

    /// Suggest a public exponent coprime with phi
    PublicExponent {
        #[command(flatten)]
        factors: FactorArgs,

        /// Draw a random exponent instead of the smallest usual one
        #[arg(long)]
        random: bool,
    },

    /// Encrypt text into comma-separated blocks
    Encrypt {
        #[command(flatten)]
        factors: FactorArgs,

        /// Public exponent
        #[arg(long, short, env = "RSA_E")]
        e: String,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Decrypt comma-separated blocks back into text
    Decrypt {
        #[command(flatten)]
        factors: FactorArgs,

        /// Private exponent; derived from --e when omitted
        #[arg(long, short, env = "RSA_D")]
        d: Option<String>,

        /// Public exponent, used only to derive d
        #[arg(long, short, env = "RSA_E")]
        e: Option<String>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Run the textbook example end to end
    Demo,
}

#[derive(Args, Debug, Clone)]
pub struct FactorArgs {
    /// First factor (> 1, primality is not checked)
    #[arg(long, short, env = "RSA_P")]
    pub p: String,

    /// Second factor (> 1, primality is not checked)
    #[arg(long, short, env = "RSA_Q")]
    pub q: String,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false, id = "source")]
pub struct IoSourceArgs {
    /// Text given directly on the command line
    #[arg(long, short)]
    pub text: Option<String>,

    /// Read input from a file, or `-` for stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    #[command(flatten)]
    pub source: IoSourceArgs,

    /// Write the result to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Status lines go to stderr so stdout carries only results
struct Reporter {
    quiet: bool,
}

impl Reporter {
    fn status(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{}", message.as_ref());
        }
    }
}

impl FactorArgs {
    fn derive(&self) -> anyhow::Result<KeyParams> {
        derive_key(&self.p, &self.q).context("Failed to compute n and phi")
    }
}

impl IoArgs {
    fn read(&self) -> anyhow::Result<String> {
        match (&self.source.text, &self.source.input) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read_text(&Source::from_arg(path))
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, None) => Ok(String::new()),
        }
    }

    fn destination(&self) -> Source {
        self.output
            .as_deref()
            .map(Source::from_arg)
            .unwrap_or(Source::Stdio)
    }
}

/// Parse argv and run the selected command
pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let reporter = Reporter { quiet: cli.quiet };
    let (output, dest) = execute(&cli.command, &reporter)?;

    write_text(&dest, &output).context("Failed to write output")?;
    if let Source::File(path) = dest {
        reporter.status(format!("Result written to {}", path.display()));
    }
    Ok(())
}

/// Run one command, returning the text to emit and where it should go
fn execute(command: &Command, reporter: &Reporter) -> anyhow::Result<(String, Source)> {
    match command {
        Command::Keys { factors } => {
            let params = factors.derive()?;
            reporter.status("n and phi computed");
            Ok((format!("n = {}\nphi = {}", params.n, params.phi), Source::Stdio))
        }

        Command::PrivateExponent { factors, e } => {
            let params = factors.derive()?;
            let d = derive_private_exponent(e, &params.phi)
                .context("Failed to compute d")?;
            reporter.status("d computed");
            Ok((d.to_string(), Source::Stdio))
        }

        Command::PublicExponent { factors, random } => {
            let params = factors.derive()?;
            let chosen = if *random {
                random_public_exponent(&params.phi, &mut rand::thread_rng())
            } else {
                suggest_public_exponent(&params.phi)
            };
            let e = chosen.context("Failed to choose e")?;
            reporter.status(format!("e chosen, coprime with phi = {}", params.phi));
            Ok((e.to_string(), Source::Stdio))
        }

        Command::Encrypt { factors, e, io } => {
            let params = factors.derive()?;
            let e = parse_decimal(e).context("Invalid public exponent")?;
            let text = io.read()?;
            let blocks = encode(&text, &e, &params.n).context("Encryption failed")?;
            reporter.status(format!("Encrypted {} characters", blocks.len()));
            Ok((blocks.to_string(), io.destination()))
        }

        Command::Decrypt { factors, d, e, io } => {
            let params = factors.derive()?;
            let d = resolve_private_exponent(&params, d.as_deref(), e.as_deref())?;
            let blocks = BlockSequence::parse(&io.read()?).context("Decryption failed")?;
            let text = decode_blocks(&blocks, &d, &params.n).context("Decryption failed")?;
            reporter.status(format!("Decrypted {} blocks", blocks.len()));
            Ok((text, io.destination()))
        }

        Command::Demo => run_demo(reporter).map(|report| (report, Source::Stdio)),
    }
}

/// Use d as given, or derive it from e; d is never checked against e
fn resolve_private_exponent(
    params: &KeyParams,
    d: Option<&str>,
    e: Option<&str>,
) -> anyhow::Result<RsaBigInt> {
    match (d, e) {
        (Some(d), _) => parse_decimal(d).context("Invalid private exponent"),
        (None, Some(e)) => {
            derive_private_exponent(e, &params.phi).context("Failed to compute d")
        }
        (None, None) => Err(RsaError::MissingExponent.into()),
    }
}

fn run_demo(reporter: &Reporter) -> anyhow::Result<String> {
    let (p, q) = DEMO_FACTORS;
    let params = derive_key(p, q)?;
    let d = derive_private_exponent(DEMO_PUBLIC_EXPONENT, &params.phi)?;
    let e = parse_decimal(DEMO_PUBLIC_EXPONENT)?;

    let blocks = encode(DEMO_TEXT, &e, &params.n)?;
    let decrypted = decode_blocks(&blocks, &d, &params.n)?;
    reporter.status("Demo round trip complete");

    Ok(format!(
        "p = {}, q = {}\nn = {}\nphi = {}\ne = {}\nd = {}\nplaintext  = {}\nciphertext = {}\ndecrypted  = {}",
        params.p, params.q, params.n, params.phi, e, d, DEMO_TEXT, blocks, decrypted
    ))
}
