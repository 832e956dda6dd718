use clap::{Parser, Subcommand};
use rust_qr_ecc::decoder::blocks::correct_codewords;
use rust_qr_ecc::decoder::poly::Poly;
use rust_qr_ecc::decoder::syndrome::syndrome_polynomial;
use rust_qr_ecc::tools::{format_block, init_tracing, parse_hex_block, parse_positions};
use rust_qr_ecc::{DecoderConfig, ECLevel, ReedSolomonAlgorithm, ReedSolomonDecoder};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR Reed-Solomon tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Correct one codeword block (message bytes followed by EC bytes)
    Decode {
        /// Block as hex
        #[arg(long)]
        hex: String,
        /// Number of EC codewords at the end of the block
        #[arg(long)]
        nsym: usize,
        /// Known-bad block indices, comma separated
        #[arg(long)]
        erasures: Option<String>,
        #[arg(long, default_value = "euclidean")]
        algorithm: ReedSolomonAlgorithm,
        /// Fail instead of correcting
        #[arg(long)]
        strict: bool,
        /// Retry with the other algorithm if the first one fails
        #[arg(long)]
        fallback: bool,
    },
    /// Print the syndrome S_0 .. S_(nsym-1) of a block
    Syndrome {
        #[arg(long)]
        hex: String,
        #[arg(long)]
        nsym: usize,
    },
    /// De-interleave and correct a full symbol's codeword stream
    Blocks {
        #[arg(long)]
        hex: String,
        #[arg(long)]
        version: u8,
        #[arg(long)]
        level: ECLevel,
        #[arg(long, default_value = "euclidean")]
        algorithm: ReedSolomonAlgorithm,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Decode {
            hex,
            nsym,
            erasures,
            algorithm,
            strict,
            fallback,
        } => decode_cmd(&hex, nsym, erasures.as_deref(), algorithm, strict, fallback),
        Command::Syndrome { hex, nsym } => syndrome_cmd(&hex, nsym),
        Command::Blocks {
            hex,
            version,
            level,
            algorithm,
        } => blocks_cmd(&hex, version, level, algorithm),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn decode_cmd(
    hex: &str,
    nsym: usize,
    erasures: Option<&str>,
    algorithm: ReedSolomonAlgorithm,
    strict: bool,
    fallback: bool,
) -> Result<(), String> {
    let mut block = parse_hex_block(hex).map_err(|e| format!("invalid hex: {e}"))?;
    let erasures = erasures.map(parse_positions).transpose()?.unwrap_or_default();

    let mut algorithms = vec![algorithm];
    if fallback {
        algorithms.push(algorithm.alternate());
    }

    let mut last_err = None;
    for alg in algorithms {
        let decoder = ReedSolomonDecoder::new(nsym)
            .with_algorithm(alg)
            .strict(strict);
        let start = Instant::now();
        match decoder.decode_with_erasures(&mut block, &erasures) {
            Ok(correction) => {
                println!("Algorithm: {alg}");
                println!(
                    "Corrected {} symbol(s) ({} erasure(s)) in {:?}",
                    correction.count(),
                    correction.erasures,
                    start.elapsed()
                );
                for (pos, mag) in correction.positions.iter().zip(&correction.magnitudes) {
                    println!("  index {pos:3}: xor {mag:02x}");
                }
                println!("Block: {}", format_block(&block, &correction.positions));
                println!("Hex:   {}", hex::encode(&block));
                return Ok(());
            }
            Err(err) => {
                eprintln!("{alg}: {err}");
                last_err = Some(err);
            }
        }
    }

    Err(last_err.map_or_else(|| "no algorithm ran".to_string(), |e| e.to_string()))
}

fn syndrome_cmd(hex: &str, nsym: usize) -> Result<(), String> {
    let block = parse_hex_block(hex).map_err(|e| format!("invalid hex: {e}"))?;
    let syndrome = syndrome_polynomial(&Poly::from_block(&block), nsym);
    let values: Vec<u8> = (0..nsym).map(|i| syndrome.coeff(i)).collect();
    println!("S: {}", format_block(&values, &[]));
    if syndrome.is_zero() {
        println!("No errors detected");
    } else {
        let nonzero = values.iter().filter(|&&s| s != 0).count();
        println!("{nonzero} of {nsym} syndromes nonzero");
    }
    Ok(())
}

fn blocks_cmd(
    hex: &str,
    version: u8,
    level: ECLevel,
    algorithm: ReedSolomonAlgorithm,
) -> Result<(), String> {
    let codewords = parse_hex_block(hex).map_err(|e| format!("invalid hex: {e}"))?;
    let config = DecoderConfig::from_env().with_algorithm(algorithm);
    let data =
        correct_codewords(&codewords, version, level, &config).map_err(|e| e.to_string())?;
    println!("Version {version}-{level}: {} data codewords", data.len());
    println!("{}", hex::encode(&data));
    Ok(())
}
