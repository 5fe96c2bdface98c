use rand::RngExt;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Length of a generated paragraph identifier.
pub const PARA_ID_LEN: usize = 7;

/// Generate a random RFC4122 v4 GUID as raw 16 bytes
pub fn generate_guid_bytes() -> [u8; 16] {
    let mut bytes = [0u8; 16];
    let mut rng = rand::rng();
    rng.fill(&mut bytes);
    // RFC4122 v4
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Append the uppercase hex form of `bytes` to `out`.
fn hex_encode_upper(bytes: &[u8], out: &mut String) {
    for &b in bytes {
        out.push(HEX_UPPER[(b >> 4) as usize] as char);
        out.push(HEX_UPPER[(b & 0x0f) as usize] as char);
    }
}

/// Format the leading hex digits of a GUID as a paragraph identifier.
///
/// Takes the first [`PARA_ID_LEN`] uppercase hex characters of the GUID's
/// unbraced, undashed form.
pub fn format_para_id(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(8);
    hex_encode_upper(&bytes[0..4], &mut out);
    out.truncate(PARA_ID_LEN);
    out
}

/// Generate a fresh 7-character uppercase hex paragraph identifier.
pub fn generate_para_id() -> String {
    format_para_id(&generate_guid_bytes())
}
