//! Identifier cleaning and validation.
//!
//! Turns raw tokens pulled out of report text into canonical identifiers:
//! - IP addresses (defanging, validation, censored-octet reconstruction)
//! - URLs (defanging, validation, extraction, host lookup)
//! - Ports
//!
//! Like the extractors, these functions soft-fail: invalid input yields `""`,
//! `None` or an empty `Vec`.

mod ip;
mod port;
mod url;

pub use ip::{
    censored_octet_hint, defang_ip, extract_all_ips, extract_one_ip, is_ip, normalize_ip,
    reconstruct_censored_ip, split_ip_port,
};
pub use port::parse_port;
pub use self::url::{clean_url, extract_urls, is_url, url_host};
