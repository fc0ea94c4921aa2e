use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for EVM contract/account addresses
    /// `0x` followed by exactly 40 hex digits, checksum casing not enforced
    /// - Valid: "0x52908400098527886E0F7030069857D2E4169EE7", "0x0000000000000000000000000000000000000001"
    /// - Invalid: "52908400098527886E0F7030069857D2E4169EE7", "0x1234", "0xZZ908400098527886E0F7030069857D2E4169EE7"
    pub static ref EVM_ADDRESS_REGEX: Regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
}
