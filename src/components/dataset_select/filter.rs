use crate::catalog::Label;

/// Options whose label contains `query`, case-insensitively, in their original
/// order. A blank query keeps every option.
pub fn filter_labels(options: &[Label], query: &str) -> Vec<Label> {
	let query = query.trim().to_lowercase();
	if query.is_empty() {
		return options.to_vec();
	}
	options
		.iter()
		.filter(|label| label.as_str().to_lowercase().contains(&query))
		.cloned()
		.collect()
}
