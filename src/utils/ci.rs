/// Variables that mark a non-interactive CI run.
pub const CI_VARS: [&str; 2] = ["CI", "GITHUB_ACTIONS"];

/// Presentation settings for the CLI shell, resolved once in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub color: bool,
    pub show_next_steps: bool,
}

impl OutputConfig {
    pub fn new(ci: bool, no_color: bool) -> Self {
        OutputConfig {
            color: !ci && !no_color,
            show_next_steps: !ci,
        }
    }
}

/// True when any CI variable is set to a truthy value.
pub fn is_ci<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    CI_VARS.iter().any(|name| {
        lookup(name).is_some_and(|v| {
            let v = v.trim();
            !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false")
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ci_flags() {
        assert!(is_ci(|k| (k == "CI").then(|| "true".to_string())));
        assert!(is_ci(|k| (k == "GITHUB_ACTIONS").then(|| "1".to_string())));
        assert!(!is_ci(|_| None));
        assert!(!is_ci(|_| Some("false".to_string())));
        assert!(!is_ci(|_| Some(String::new())));
    }

    #[test]
    fn ci_disables_color_and_guidance() {
        assert_eq!(
            OutputConfig::new(true, false),
            OutputConfig {
                color: false,
                show_next_steps: false
            }
        );
        let local = OutputConfig::new(false, false);
        assert!(local.color && local.show_next_steps);
        assert!(!OutputConfig::new(false, true).color);
    }
}
