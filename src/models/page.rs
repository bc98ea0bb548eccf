use serde::Deserialize;

/// The wrapper shapes list endpoints use to carry items plus a total count.
/// The DRF-style endpoints answer `{results, count}`, a few legacy ones
/// answer `{data, total}`, and some unpaged endpoints answer a bare array.
/// Resolved once here, at the service boundary, instead of shape-sniffing
/// per call site.
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paged { results: Vec<T>, count: u64 },
    Plain { data: Vec<T>, total: u64 },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Items plus total. A bare array reports its own length as the total,
    /// so pagination degrades to a single page.
    pub fn into_page(self) -> (Vec<T>, u64) {
        match self {
            ListEnvelope::Paged { results, count } => (results, count),
            ListEnvelope::Plain { data, total } => (data, total),
            ListEnvelope::Bare(items) => {
                let total = items.len() as u64;
                (items, total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drf_envelope_is_recognized() {
        let env: ListEnvelope<u32> =
            serde_json::from_str(r#"{"results": [1, 2, 3], "count": 42}"#).unwrap();
        assert_eq!(env.into_page(), (vec![1, 2, 3], 42));
    }

    #[test]
    fn data_total_envelope_is_recognized() {
        let env: ListEnvelope<u32> =
            serde_json::from_str(r#"{"data": [9], "total": 7}"#).unwrap();
        assert_eq!(env.into_page(), (vec![9], 7));
    }

    #[test]
    fn bare_array_uses_its_length_as_total() {
        let env: ListEnvelope<u32> = serde_json::from_str("[4, 5]").unwrap();
        assert_eq!(env.into_page(), (vec![4, 5], 2));
    }

    #[test]
    fn empty_bare_array_is_a_zero_total_page() {
        let env: ListEnvelope<u32> = serde_json::from_str("[]").unwrap();
        assert_eq!(env.into_page(), (vec![], 0));
    }
}
