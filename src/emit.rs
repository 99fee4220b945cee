use std::io::{self, Write};

use itertools::Itertools;

use crate::hex;

const INCLUDE: &str = "#include <cstdint>";
const ELEMENT_TYPE: &str = "std::uint8_t";
const PER_LINE: usize = 20;

/// Write `bytes` as a C++ array declaration named `name`.
///
/// ```text
/// #include <cstdint>
/// static const std::uint8_t name[] = {
/// 	0x00, 0x01, ..., 0x13,
/// 	0x14,
/// };
/// ```
///
/// Every element gets a trailing comma, lines hold 20 elements and start with
/// a tab. `name` is used verbatim.
pub fn write_array(mut out: impl Write, name: &str, bytes: &[u8]) -> io::Result<()> {
    writeln!(out, "{INCLUDE}")?;
    writeln!(out, "static const {ELEMENT_TYPE} {name}[] = {{")?;
    for line in &bytes.iter().chunks(PER_LINE) {
        let line = line.map(|&b| format!("{},", hex::byte_literal(b))).join(" ");
        writeln!(out, "\t{line}")?;
    }
    writeln!(out, "}};")?;
    Ok(())
}
