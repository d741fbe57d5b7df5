// File: src/interpolate.rs
// Purpose: `{placeholder}` substitution for message templates

use crate::resource::MessageSource;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

// `{name}` where name holds no braces
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

// Catalog text may itself reference other keys; stop following after this many hops
const MAX_DEPTH: usize = 4;

/// Named values a constraint exposes to its message template
pub type MessageAttributes = BTreeMap<String, String>;

/// Expands `{name}` placeholders in message templates
///
/// A placeholder is first looked up in the attributes of the constraint that
/// produced the message (`from`, `to`, `allow_same`, ...), then in the
/// message source. Unknown placeholders are left verbatim.
pub struct MessageInterpolator<'a> {
    source: &'a dyn MessageSource,
}

impl<'a> MessageInterpolator<'a> {
    pub fn new(source: &'a dyn MessageSource) -> Self {
        Self { source }
    }

    /// Expand every placeholder in `template`
    pub fn interpolate(&self, template: &str, attributes: &MessageAttributes) -> String {
        self.expand(template, attributes, 0)
    }

    fn expand(&self, template: &str, attributes: &MessageAttributes, depth: usize) -> String {
        PLACEHOLDER_REGEX
            .replace_all(template, |caps: &Captures| {
                let name = &caps[1];
                if let Some(value) = attributes.get(name) {
                    return value.clone();
                }

                match self.source.resolve(name) {
                    Some(text) if depth < MAX_DEPTH => self.expand(&text, attributes, depth + 1),
                    Some(text) => text,
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{MessageCatalog, LESS_THAN_MESSAGE_KEY};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn attributes(pairs: &[(&str, &str)]) -> MessageAttributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let catalog = MessageCatalog::new();
        let interpolator = MessageInterpolator::new(&catalog);
        assert_eq!(
            interpolator.interpolate("nothing to expand", &MessageAttributes::new()),
            "nothing to expand"
        );
    }

    #[test]
    fn test_catalog_placeholder() {
        let catalog = MessageCatalog::new().with(LESS_THAN_MESSAGE_KEY, "小さな値を入力してください。");
        let interpolator = MessageInterpolator::new(&catalog);

        let message = interpolator.interpolate(
            "fromNumber1はtoNumber1よりも{jfw.validation.constraints.LessThan.message}",
            &MessageAttributes::new(),
        );
        assert_eq!(message, "fromNumber1はtoNumber1よりも小さな値を入力してください。");
    }

    #[test]
    fn test_attributes_take_precedence() {
        let catalog = MessageCatalog::new().with("from", "catalog value");
        let interpolator = MessageInterpolator::new(&catalog);

        let message = interpolator.interpolate(
            "{from} must be smaller than {to}",
            &attributes(&[("from", "fromNumber"), ("to", "toNumber")]),
        );
        assert_eq!(message, "fromNumber must be smaller than toNumber");
    }

    #[test]
    fn test_nested_catalog_reference() {
        let catalog = MessageCatalog::new()
            .with("outer", "{to}: {inner}")
            .with("inner", "too large");
        let interpolator = MessageInterpolator::new(&catalog);

        let message = interpolator.interpolate("{outer}", &attributes(&[("to", "toNumber")]));
        assert_eq!(message, "toNumber: too large");
    }

    #[test]
    fn test_self_reference_terminates() {
        let catalog = MessageCatalog::new().with("loop", "again {loop}");
        let interpolator = MessageInterpolator::new(&catalog);

        let message = interpolator.interpolate("{loop}", &MessageAttributes::new());
        assert!(message.starts_with("again again"));
    }

    #[rstest]
    #[case("{from}", "fromNumber")]
    #[case("{to}-{from}", "toNumber-fromNumber")]
    #[case("{{from}}", "{fromNumber}")]
    #[case("{}", "{}")]
    fn test_attribute_table(#[case] template: &str, #[case] expected: &str) {
        let catalog = MessageCatalog::new();
        let interpolator = MessageInterpolator::new(&catalog);
        let attributes = attributes(&[("from", "fromNumber"), ("to", "toNumber")]);

        assert_eq!(interpolator.interpolate(template, &attributes), expected);
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let catalog = MessageCatalog::new();
        let interpolator = MessageInterpolator::new(&catalog);
        assert_eq!(
            interpolator.interpolate("value {unknown.key}", &MessageAttributes::new()),
            "value {unknown.key}"
        );
    }
}
