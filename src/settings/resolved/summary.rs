use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Endpoint: {}", config.endpoint),
		format!("  Timeout: {}s", config.timeout.as_secs()),
		format!("  Debounce: {}ms", config.debounce.as_millis()),
	];
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!("  Title: {}", config.title));
	lines.push(format!("  Prompt: {}", config.prompt));
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	lines.push(format!("  Log level: {}", config.log_level));
	match &config.log_file {
		Some(path) => lines.push(format!("  Log file: {}", path.display())),
		None => lines.push("  Log file: (cache directory)".to_string()),
	}
	lines
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::super::sample_config;
	use super::*;

	#[test]
	fn summary_lists_lookup_settings() {
		let lines = summary_lines(&sample_config());
		assert_eq!(lines[0], "Effective configuration:");
		assert!(lines.contains(&"  Endpoint: https://api.adviceslip.com/advice/search".to_string()));
		assert!(lines.contains(&"  Debounce: 500ms".to_string()));
		assert!(!lines.iter().any(|line| line.starts_with("  Initial query")));
	}

	#[test]
	fn summary_includes_optional_values_when_set() {
		let config = ResolvedConfig {
			initial_query: "love".into(),
			theme: Some("light".into()),
			log_file: Some(PathBuf::from("/tmp/sage.log")),
			..sample_config()
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"  Initial query: love".to_string()));
		assert!(lines.contains(&"  UI theme: light".to_string()));
		assert!(lines.contains(&"  Log file: /tmp/sage.log".to_string()));
		print_summary(&config);
	}
}
