use crate::error::{AllocError, ContextError};
use crate::types::{ContextString, EncryptionContext};

pub type Pair<'a> = (&'a ContextString, &'a ContextString);

/// Borrow every entry of `ctx` into a list sorted by key, byte-lexicographic
/// ascending. This is the canonical wire order.
pub fn sorted_pairs(ctx: &EncryptionContext) -> Result<Vec<Pair<'_>>, ContextError> {
    let mut pairs = Vec::new();
    pairs
        .try_reserve_exact(ctx.len())
        .map_err(|_| AllocError::new(ctx.len() * std::mem::size_of::<Pair<'_>>()))?;
    pairs.extend(ctx.iter());

    // Keys are unique, so an unstable sort is deterministic here.
    pairs.sort_unstable_by(|a, b| compare_by_key(a, b));
    Ok(pairs)
}

pub fn compare_by_key(a: &Pair<'_>, b: &Pair<'_>) -> std::cmp::Ordering {
    a.0.as_bytes().cmp(b.0.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_prefix_sorts_first() {
        let ctx: EncryptionContext = [("ab", "1"), ("a", "2"), ("b", "3"), ("", "4")]
            .into_iter()
            .collect();

        let keys: Vec<&[u8]> = sorted_pairs(&ctx)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k.as_bytes())
            .collect();

        let expected: [&[u8]; 4] = [b"", b"a", b"ab", b"b"];
        assert_eq!(keys, expected);
    }

    #[test]
    fn compares_raw_bytes_not_chars() {
        let mut ctx = EncryptionContext::new();
        ctx.insert(vec![0xffu8], "high");
        ctx.insert(vec![0x01u8], "low");
        ctx.insert("Z", "upper");

        let keys: Vec<&[u8]> = sorted_pairs(&ctx)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k.as_bytes())
            .collect();

        let expected: [&[u8]; 3] = [&[0x01], b"Z", &[0xff]];
        assert_eq!(keys, expected);
    }
}
