//! Locale list parsing for behaviour step arguments.

use std::convert::Infallible;
use std::str::FromStr;

use resx_verify::Locale;

/// Comma-separated locale list supplied via behaviour-driven test steps.
///
/// Surrounding quotes and whitespace are dropped, so `"test1, test2"` and
/// `test1,test2` parse alike. An empty value yields an empty list.
#[derive(Clone, Debug, Default)]
pub struct StepLocales {
    locales: Vec<Locale>,
}

impl FromStr for StepLocales {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let locales = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''))
            .split(',')
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
            .map(Locale::from)
            .collect();

        Ok(Self { locales })
    }
}

impl StepLocales {
    /// Consumes the step value, yielding the parsed locales.
    pub fn into_inner(self) -> Vec<Locale> {
        self.locales
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("test1", &["test1"])]
    #[case("\"test1, test2\"", &["test1", "test2"])]
    #[case("'a,b,'", &["a", "b"])]
    #[case("\"\"", &[])]
    fn parses_locale_lists(#[case] input: &str, #[case] expected: &[&str]) {
        let parsed = StepLocales::from_str(input)
            .unwrap_or_default()
            .into_inner();

        assert_eq!(parsed, expected.iter().copied().map(Locale::from).collect::<Vec<_>>());
    }
}
