pub type Input<'a> = &'a str;
pub type Result<'a, O> = nom::IResult<Input<'a>, O, nom::error::VerboseError<Input<'a>>>;
pub type Error<'a> = nom::Err<nom::error::VerboseError<Input<'a>>>;

/// Parse the longest floating point prefix of the input, the way a lenient float parser would:
/// `"12.5abc"` yields `12.5` with `"abc"` left over.
pub fn float_prefix(i: Input) -> Result<f64> {
    use nom::{error::context, number::complete::double};
    context("Floating point number", double)(i)
}

/// Like `float_prefix`, but discards the remaining input and any error details. Returns `None`
/// if the input doesn't start with a number.
pub fn lenient_float(i: Input) -> Option<f64> {
    match float_prefix(i) {
        Ok((_, x)) if !x.is_nan() => Some(x),
        _ => None,
    }
}

/// Convert a nom error into a human readable message, with the offending input highlighted.
pub fn pretty_error_message<'a>(i: Input<'a>, e: Error<'a>) -> String {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => nom::error::convert_error(i, e),
        nom::Err::Incomplete(_) => format!("Unexpected end of input: {:?}", i),
    }
}

#[cfg(test)]
mod test {
    use super::lenient_float;

    #[test]
    fn test_lenient_float() {
        assert_eq!(lenient_float("41"), Some(41.));
        assert_eq!(lenient_float("24.2028"), Some(24.2028));
        assert_eq!(lenient_float("12.5abc"), Some(12.5));
        assert_eq!(lenient_float("+3"), Some(3.));
        assert_eq!(lenient_float("abc"), None);
        assert_eq!(lenient_float(""), None);
    }
}
