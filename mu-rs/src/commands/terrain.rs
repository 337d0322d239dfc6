//! Terrain asset command implementations

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use console::style;
use std::path::{Path, PathBuf};

use mu_terrain::{AssetKind, CipherKind, HEADER_LEN, decrypt_asset, decrypt_legacy};

#[derive(Subcommand)]
pub enum TerrainCommands {
    /// Decrypt an encrypted terrain file
    Decrypt {
        /// Path to the encrypted terrain file
        input: PathBuf,

        /// Path to write the decrypted file (defaults to the input path
        /// with the asset extension)
        output: Option<PathBuf>,

        /// Treat the input as a pre-Season16 file of the given kind
        /// instead of auto-detecting the modern format
        #[arg(long, value_enum, value_name = "KIND")]
        legacy: Option<LegacyKind>,
    },

    /// Display information about an encrypted terrain file
    Info {
        /// Path to the encrypted terrain file
        file: PathBuf,
    },
}

/// Asset kind for legacy files, which carry no magic to detect it from.
#[derive(Clone, Copy, ValueEnum)]
pub enum LegacyKind {
    /// Terrain attribute data
    Att,
    /// Terrain height mapping data
    Map,
}

impl From<LegacyKind> for AssetKind {
    fn from(kind: LegacyKind) -> Self {
        match kind {
            LegacyKind::Att => AssetKind::Att,
            LegacyKind::Map => AssetKind::Map,
        }
    }
}

pub fn execute(command: TerrainCommands) -> Result<()> {
    match command {
        TerrainCommands::Decrypt {
            input,
            output,
            legacy,
        } => execute_decrypt(&input, output, legacy),
        TerrainCommands::Info { file } => execute_info(&file),
    }
}

fn execute_decrypt(
    input: &Path,
    output: Option<PathBuf>,
    legacy: Option<LegacyKind>,
) -> Result<()> {
    let raw = std::fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let (kind, plain) = match legacy {
        Some(legacy_kind) => {
            let kind = AssetKind::from(legacy_kind);
            (kind, decrypt_legacy(kind, &raw))
        }
        None => decrypt_asset(&raw)
            .with_context(|| format!("Failed to decrypt: {}", input.display()))?,
    };

    let output = output.unwrap_or_else(|| input.with_extension(kind.extension()));
    if output == input {
        // Canonically named inputs (EncTerrain1.att) resolve to themselves
        anyhow::bail!(
            "Output path '{}' is the input file; pass a distinct output path",
            output.display()
        );
    }
    std::fs::write(&output, &plain)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    // Status goes to stderr so stdout stays free for piping
    eprintln!(
        "OK {} ({} '{}' to '{}')",
        style(plain.len()).green(),
        style(kind).yellow(),
        style(input.display()).cyan(),
        style(output.display()).cyan()
    );

    Ok(())
}

fn execute_info(path: &Path) -> Result<()> {
    let raw = std::fs::read(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let kind = AssetKind::classify(&raw)
        .with_context(|| format!("Not a recognized terrain file: {}", path.display()))?;
    let body = &raw[4..];
    if body.len() < HEADER_LEN {
        return Err(mu_terrain::Error::TooShort { actual: body.len() })
            .with_context(|| format!("Truncated terrain file: {}", path.display()));
    }

    let cipher2 = CipherKind::from_selector(body[0]);
    let cipher1 = CipherKind::from_selector(body[1]);
    let data_size = body.len() - HEADER_LEN;
    let chunk = 1024 - (1024 % cipher1.block_size());

    println!("{}", style("Terrain File Information").bold());
    println!("  File: {}", style(path.display()).cyan());
    println!("  Kind: {} terrain data", style(kind).yellow());
    println!("  File size: {} bytes", raw.len());
    println!("  Payload size: {} bytes", data_size);
    println!();
    println!("{}", style("Encryption").bold());
    println!(
        "  Stage 1: {} (selector 0x{:02X}, {} byte windows)",
        style(cipher1).yellow(),
        body[1],
        chunk
    );
    let mut windows = Vec::new();
    if data_size > 4 * chunk {
        windows.push("midpoint");
    }
    if data_size > chunk {
        windows.push("tail");
        windows.push("header");
    }
    if windows.is_empty() {
        println!("  Stage 1 windows: none (payload fits in one window)");
    } else {
        println!("  Stage 1 windows: {}", windows.join(", "));
    }
    println!(
        "  Stage 2: {} (selector 0x{:02X}, {} of {} payload bytes)",
        style(cipher2).yellow(),
        body[0],
        data_size - (data_size % cipher2.block_size()),
        data_size
    );
    if kind == AssetKind::Att {
        println!("  Post-processing: repeating 3-byte XOR mask");
    }

    Ok(())
}
