use crate::config::Format;
use std::io::Write;
use tickid::{Identifier, IdentifierGenerator, codec::HEX_LEN};

/// Writes `count` fresh identifiers from `generator`, one per line.
pub fn generate<G, W>(
    generator: &G,
    count: usize,
    format: Format,
    out: &mut W,
) -> anyhow::Result<()>
where
    G: IdentifierGenerator,
    W: Write,
{
    let mut buf = [0_u8; HEX_LEN];
    for _ in 0..count {
        let id = generator.next_id();
        match format {
            Format::Compact => writeln!(out, "{id}")?,
            Format::Hex => writeln!(out, "{}", id.encode_hex_to_buf(&mut buf))?,
            Format::Bytes => writeln!(out, "0x{}", id.encode_hex_to_buf(&mut buf))?,
        }
    }
    tracing::debug!(count, ?format, "generated identifiers");
    Ok(())
}

/// Decodes `input` and writes one `name: value` line per field.
pub fn inspect<W>(input: &str, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let id = Identifier::try_parse(input)?;
    let tick = id.tick();
    writeln!(out, "hex:      {}", id.to_hex())?;
    writeln!(out, "compact:  {}", id.to_compact())?;
    writeln!(out, "tick:     {}", tick.to_raw())?;
    writeln!(out, "instant:  {tick}")?;
    writeln!(out, "kind:     {:?}", tick.kind())?;
    writeln!(out, "region:   {}", id.region())?;
    writeln!(out, "machine:  {}", id.machine())?;
    writeln!(out, "counter:  {}", id.counter())?;
    Ok(())
}

/// Writes `valid` or `invalid` for each input and returns whether all were
/// valid.
pub fn validate<W>(inputs: &[String], out: &mut W) -> anyhow::Result<bool>
where
    W: Write,
{
    let mut all_valid = true;
    for input in inputs {
        let valid = Identifier::is_valid(input);
        if !valid {
            tracing::debug!(%input, "rejected identifier");
        }
        all_valid &= valid;
        writeln!(out, "{input}: {}", if valid { "valid" } else { "invalid" })?;
    }
    Ok(all_valid)
}
