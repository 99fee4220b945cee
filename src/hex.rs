/// C-style hex literal, e.g. `0x0A`. Always two uppercase digits.
pub fn byte_literal(byte: u8) -> String {
    format!("0x{byte:02X}")
}
