//! Label template rendering
//!
//! Templates contain `{name}` placeholders. Rendering is a single pass over the
//! template: substituted values are copied verbatim and never scanned for
//! placeholders themselves, and unknown placeholders are kept as written.

/// Default label template
pub const DEFAULT_TEMPLATE: &str =
    "[{airport_name}][L{node_level} (*{traffic_times})] {node_location} {node_features}";

/// Render `template`, replacing every known `{name}` with its value
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];

        let value = candidate.find('}').and_then(|end| {
            let name = &candidate[1..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });

        match value {
            Some((value, end)) => {
                output.push_str(value);
                rest = &candidate[end + 1..];
            }
            None => {
                output.push('{');
                rest = &candidate[1..];
            }
        }
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_template() {
        let label = render(
            DEFAULT_TEMPLATE,
            &[
                ("airport_name", "Example0cloud"),
                ("node_level", "0"),
                ("traffic_times", "2.00"),
                ("node_location", "China Hong Kong"),
                ("node_features", "BGP"),
            ],
        );
        assert_eq!(label, "[Example0cloud][L0 (*2.00)] China Hong Kong BGP");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let label = render("{a}-{b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(label, "{b}-x");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        assert_eq!(render("{a} {zzz}", &[("a", "1")]), "1 {zzz}");
        assert_eq!(render("open { brace", &[]), "open { brace");
        assert_eq!(render("{{a}}", &[("a", "1")]), "{1}");
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(render("{a}/{a}", &[("a", "1")]), "1/1");
    }
}
