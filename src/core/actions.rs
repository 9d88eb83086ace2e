//! Quick-action descriptor parsing
//!
//! Actions arrive on the command line as a single comma-separated string of
//! descriptors, each `tooltip:icon:command` or `tooltip:command`. Malformed
//! descriptors are dropped without failing the whole parse.

use tracing::debug;

/// Icon name used when a two-field descriptor omits one.
pub const DEFAULT_ACTION_ICON: &str = "system-run-symbolic";

/// A single quick-action shortcut shown as a header-bar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    /// Hover text shown on the button.
    pub tooltip: String,
    /// Symbolic icon name.
    pub icon: String,
    /// Command text injected verbatim (plus newline) when triggered.
    pub command: String,
}

/// Parse a comma-separated action descriptor string.
///
/// Descriptors with three `:`-separated fields map to
/// `(tooltip, icon, command)`; two fields map to `(tooltip, command)` with
/// the default icon. Any other field count, an empty descriptor, or an
/// empty command discards the descriptor silently. There is no escaping for
/// `:` or `,` inside field text.
pub fn parse_actions(raw: &str) -> Vec<ActionSpec> {
    let mut actions = Vec::new();

    for descriptor in raw.split(',') {
        let descriptor = descriptor.trim();
        if descriptor.is_empty() {
            continue;
        }

        let fields: Vec<&str> = descriptor.split(':').collect();
        let spec = match fields.as_slice() {
            [tooltip, icon, command] => ActionSpec {
                tooltip: tooltip.to_string(),
                icon: icon.to_string(),
                command: command.to_string(),
            },
            [tooltip, command] => ActionSpec {
                tooltip: tooltip.to_string(),
                icon: DEFAULT_ACTION_ICON.to_string(),
                command: command.to_string(),
            },
            _ => {
                debug!("Discarding malformed action descriptor: {:?}", descriptor);
                continue;
            }
        };

        if spec.command.is_empty() {
            debug!("Discarding action with empty command: {:?}", descriptor);
            continue;
        }

        actions.push(spec);
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_and_two_field_descriptors() {
        let actions = parse_actions("Build:system-run-symbolic:make build,Test:make test");
        assert_eq!(
            actions,
            vec![
                ActionSpec {
                    tooltip: "Build".to_string(),
                    icon: "system-run-symbolic".to_string(),
                    command: "make build".to_string(),
                },
                ActionSpec {
                    tooltip: "Test".to_string(),
                    icon: DEFAULT_ACTION_ICON.to_string(),
                    command: "make test".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_malformed_descriptors_are_discarded() {
        let actions = parse_actions("bad::::,Valid:run");
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].tooltip, "Valid");
        assert_eq!(actions[0].icon, DEFAULT_ACTION_ICON);
        assert_eq!(actions[0].command, "run");
    }

    #[test]
    fn test_empty_and_whitespace_descriptors() {
        assert!(parse_actions("").is_empty());
        assert!(parse_actions(" , ,  ").is_empty());
        // Surrounding whitespace on a descriptor is trimmed
        let actions = parse_actions("  Deploy:git push  ");
        assert_eq!(actions[0].tooltip, "Deploy");
        assert_eq!(actions[0].command, "git push");
    }

    #[test]
    fn test_empty_command_is_discarded() {
        assert!(parse_actions("NoCommand:").is_empty());
        assert!(parse_actions("Tip:icon-name:").is_empty());
    }

    #[test]
    fn test_parse_is_idempotent_on_serialized_form() {
        let actions = parse_actions("Build:system-run-symbolic:make build,Run:utilities-terminal:cargo run");
        let serialized: Vec<String> = actions
            .iter()
            .map(|a| format!("{}:{}:{}", a.tooltip, a.icon, a.command))
            .collect();
        let reparsed = parse_actions(&serialized.join(","));
        assert_eq!(reparsed, actions);
    }

    #[test]
    fn test_order_is_preserved() {
        let actions = parse_actions("C:3,A:1,B:2");
        let tooltips: Vec<&str> = actions.iter().map(|a| a.tooltip.as_str()).collect();
        assert_eq!(tooltips, vec!["C", "A", "B"]);
    }
}
