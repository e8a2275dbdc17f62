#[cfg(test)]
mod tests {
    use panelcut::CutError;
    use panelcut_cli::parse::parse_dimension;
    use test_case::test_case;

    #[test_case("183x366", 183.0, 366.0; "plain")]
    #[test_case(" 60 x 40 ", 60.0, 40.0; "whitespace")]
    #[test_case("60X40", 60.0, 40.0; "upper case separator")]
    #[test_case("60×40", 60.0, 40.0; "multiplication sign")]
    #[test_case("60*40", 60.0, 40.0; "asterisk")]
    #[test_case("12.5x7.25", 12.5, 7.25; "decimals")]
    #[test_case("۱۸۳x۳۶۶", 183.0, 366.0; "persian digits")]
    #[test_case("٦٠x٤٠", 60.0, 40.0; "arabic indic digits")]
    #[test_case("۱۲٫۵x۴", 12.5, 4.0; "arabic decimal separator")]
    fn parses_valid_sizes(text: &str, width: f32, height: f32) {
        let dim = parse_dimension(text).unwrap();
        assert_eq!((dim.width(), dim.height()), (width, height));
    }

    #[test_case(""; "empty")]
    #[test_case("60"; "single number")]
    #[test_case("60x"; "missing height")]
    #[test_case("ax40"; "letters")]
    #[test_case("60x40x10"; "three numbers")]
    #[test_case("60 by 40"; "unknown separator")]
    fn rejects_malformed_text(text: &str) {
        assert!(matches!(
            parse_dimension(text),
            Err(CutError::MalformedInput { .. })
        ));
    }

    #[test_case("0x40"; "zero width")]
    #[test_case("60x0"; "zero height")]
    #[test_case("-60x40"; "negative width")]
    fn rejects_non_positive_sizes(text: &str) {
        assert!(matches!(
            parse_dimension(text),
            Err(CutError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn malformed_error_keeps_original_input() {
        match parse_dimension("۱۸۳ by ۳۶۶") {
            Err(CutError::MalformedInput { input, .. }) => assert_eq!(input, "۱۸۳ by ۳۶۶"),
            other => panic!("expected malformed input, got {other:?}"),
        }
    }
}
