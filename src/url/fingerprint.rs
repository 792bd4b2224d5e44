//! 64-bit URL fingerprints for the visited set.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a hash of the URL's bytes
///
/// Two distinct URLs can collide; the visited set treats a collision as
/// "already visited".
///
/// ```
/// use ripple_crawl::url::fingerprint;
///
/// assert_eq!(fingerprint(""), 0xcbf29ce484222325);
/// assert_ne!(fingerprint("https://example.test/a"), fingerprint("https://example.test/b"));
/// ```
pub fn fingerprint(url: &str) -> u64 {
    url.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
