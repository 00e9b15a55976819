use strsim::jaro_winkler;

const SIMILARITY_THRESHOLD: f64 = 0.9;

/// Closest candidate to `value`, if any is similar enough to be a likely typo.
pub fn closest_match<'a, I>(value: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let value = value.to_lowercase();
    candidates
        .into_iter()
        .map(|candidate| (jaro_winkler(&value, &candidate.to_lowercase()), candidate))
        .filter(|(score, _)| *score > SIMILARITY_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}
