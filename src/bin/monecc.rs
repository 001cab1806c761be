//! monecc - monECC command line tool
//!
//! Usage: monecc <command> [<key>] [<text>] [switches]

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use log::info;
use monecc::api::{Error, Result, ResultExt};
use monecc::params::traditional::ecies::DEFAULT_SCALAR_RANGE;
use monecc::params::utils::keyfile::{
    DEFAULT_KEY_NAME, PRIVATE_KEY_EXTENSION, PUBLIC_KEY_EXTENSION,
};
use monecc::pke::ecies::generate_keypair_in_range;
use monecc::pke::{decrypt_message, encrypt_message, Domain};
use monecc::utils::{read_private_key, read_public_key, write_private_key, write_public_key};
use rand::rngs::OsRng;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(run(&args))
}

/// Dispatch one command line and return the process exit status
fn run(args: &[String]) -> u8 {
    let command = match args.first() {
        None => {
            print_manual();
            return 0;
        }
        Some(command) => command.as_str(),
    };

    let result = match command {
        "help" | "-h" | "--help" => {
            print_manual();
            Ok(())
        }
        "keygen" => handle_keygen(&args[1..]),
        "crypt" => handle_crypt(&args[1..]),
        "decrypt" => handle_decrypt(&args[1..]),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_manual();
            return 2;
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("monecc: {}", e);
            1
        }
    }
}

fn print_manual() {
    println!("Script monECC");
    println!("Syntax:");
    println!("  monecc <command> [<key>] [<text>] [switches]");
    println!("Commands:");
    println!("  keygen  : Generate a key pair");
    println!("  crypt   : Encrypt <text> for the public key <key>");
    println!("  decrypt : Decrypt <text> with the private key <key>");
    println!("  help    : Show this manual");
    println!("Switches:");
    println!("  keygen        : -f <filename>, -s <size>");
    println!("  crypt         : -s <size>, -i <file> (input), -o <file> (output)");
    println!("  decrypt       : -i <file> (input), -o <file> (output)");
    println!();
    println!("Set RUST_LOG=debug to trace key and ephemeral scalar draws.");
}

/// Switches and positional arguments of one command
#[derive(Debug, Default)]
struct Options {
    positional: Vec<String>,
    filename: Option<String>,
    size: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn usage_error(message: impl Into<String>) -> Error {
    Error::InvalidParameter {
        context: "command line",
        message: message.into(),
    }
}

impl Options {
    /// Split `args` into switches and positionals, accepting only `allowed` switches
    fn parse(args: &[String], allowed: &[&str]) -> Result<Self> {
        let mut options = Options::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let name = match arg.as_str() {
                "-f" | "--filename" => "-f",
                "-s" | "--size" => "-s",
                "-i" | "--input" => "-i",
                "-o" | "--output" => "-o",
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(usage_error(format!("unknown switch '{}'", other)))
                }
                _ => {
                    options.positional.push(arg.clone());
                    continue;
                }
            };
            if !allowed.contains(&name) {
                return Err(usage_error(format!("switch '{}' not accepted here", arg)));
            }
            let value = iter
                .next()
                .ok_or_else(|| usage_error(format!("switch '{}' needs a value", arg)))?
                .clone();
            match name {
                "-f" => options.filename = Some(value),
                "-s" => options.size = Some(value),
                "-i" => options.input = Some(PathBuf::from(value)),
                _ => options.output = Some(PathBuf::from(value)),
            }
        }

        Ok(options)
    }

    /// The scalar range, defaulting to 1000
    fn size(&self) -> Result<u64> {
        match &self.size {
            None => Ok(DEFAULT_SCALAR_RANGE),
            Some(text) => {
                let size: i64 = text
                    .parse()
                    .map_err(|_| usage_error(format!("size '{}' is not an integer", text)))?;
                u64::try_from(size)
                    .map_err(|_| usage_error(format!("size must be at least 2, got {}", size)))
            }
        }
    }

    /// Positional `index`, erroring with `what` when absent
    fn required(&self, index: usize, what: &str) -> Result<&str> {
        self.positional
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| usage_error(format!("missing {}", what)))
    }

    fn check_positional(&self, max: usize) -> Result<()> {
        if self.positional.len() > max {
            return Err(usage_error(format!(
                "unexpected argument '{}'",
                self.positional[max]
            )));
        }
        Ok(())
    }

    /// Text from `-i` when given, else the positional after the key file
    fn text(&self) -> Result<String> {
        if let Some(path) = &self.input {
            return fs::read_to_string(path).with_context("input file");
        }
        self.positional
            .get(1)
            .cloned()
            .ok_or_else(|| usage_error("missing text: give <text> or use -i <file>"))
    }

    fn write_output(&self, data: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, data).with_context("output file")?;
                info!("wrote {} bytes to {}", data.len(), path.display());
            }
            None => println!("{}", data),
        }
        Ok(())
    }
}

fn handle_keygen(args: &[String]) -> Result<()> {
    let options = Options::parse(args, &["-f", "-s"])?;
    options.check_positional(0)?;

    let domain = Domain::monecc()?;
    let upper = domain.scalar_range(options.size()?)?;
    let name = options.filename.as_deref().unwrap_or(DEFAULT_KEY_NAME);
    let priv_path = PathBuf::from(format!("{}.{}", name, PRIVATE_KEY_EXTENSION));
    let pub_path = PathBuf::from(format!("{}.{}", name, PUBLIC_KEY_EXTENSION));

    let (pk, sk) = generate_keypair_in_range(&domain, &upper, &mut OsRng)?;
    write_private_key(&priv_path, sk.scalar())?;
    write_public_key(&pub_path, pk.point())?;

    println!("Private key: {}", priv_path.display());
    println!("Public key: {}", pub_path.display());
    Ok(())
}

fn handle_crypt(args: &[String]) -> Result<()> {
    let options = Options::parse(args, &["-s", "-i", "-o"])?;
    options.check_positional(2)?;
    let key_path = options.required(0, "public key file")?;

    let domain = Domain::monecc()?;
    let max_scalar = domain.scalar_range(options.size()?)?;
    let plaintext = options.text()?;
    let recipient = read_public_key(key_path)?;
    info!("encrypting {} bytes for {}", plaintext.len(), key_path);

    let cryptogram = encrypt_message(
        domain.curve(),
        domain.generator(),
        &recipient,
        &plaintext,
        &max_scalar,
        &mut OsRng,
    )?;
    options.write_output(&cryptogram)
}

fn handle_decrypt(args: &[String]) -> Result<()> {
    let options = Options::parse(args, &["-i", "-o"])?;
    options.check_positional(2)?;
    let key_path = options.required(0, "private key file")?;

    let domain = Domain::monecc()?;
    let cryptogram = options.text()?;
    let k = read_private_key(key_path)?;
    info!("decrypting with {}", key_path);

    let plaintext = decrypt_message(domain.curve(), domain.generator(), &k, &cryptogram)?;
    options.write_output(&plaintext)
}
