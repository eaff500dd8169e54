use std::ffi::OsString;

use storefront_catalog::RawParameters;

/// Map positional arguments (`<productId> <couponCode>`) to raw input.
///
/// Missing positionals stay absent so the validator can report them. So do
/// positionals that are not valid UTF-8. Extra arguments are ignored.
pub fn raw_parameters<I, A>(args: I) -> RawParameters
where
    I: IntoIterator<Item = A>,
    A: Into<OsString>,
{
    let mut args = args.into_iter().map(|arg| arg.into().into_string().ok());
    let product_id = args.next().flatten();
    let coupon_code = args.next().flatten();
    RawParameters::new(product_id, coupon_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn takes_the_first_two_positionals() {
        let raw = raw_parameters(args(&["123", "10OFF", "ignored"]));
        assert_eq!(raw.product_id.as_deref(), Some("123"));
        assert_eq!(raw.coupon_code.as_deref(), Some("10OFF"));
    }

    #[test]
    fn missing_positionals_stay_absent() {
        let raw = raw_parameters(args(&["123"]));
        assert_eq!(raw.coupon_code, None);
        assert_eq!(raw_parameters(Vec::<String>::new()), RawParameters::default());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_positional_stays_absent() {
        use std::os::unix::ffi::OsStringExt;

        let raw = raw_parameters(vec![
            OsString::from("123"),
            OsString::from_vec(vec![0xff, 0xfe]),
        ]);
        assert_eq!(raw.product_id.as_deref(), Some("123"));
        assert_eq!(raw.coupon_code, None);

        let err = storefront_catalog::Parameters::validate(raw).unwrap_err();
        assert_eq!(err, storefront_core::PageError::validation("couponCode: required"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_product_id_does_not_shift_the_coupon_code() {
        use std::os::unix::ffi::OsStringExt;

        let raw = raw_parameters(vec![
            OsString::from_vec(vec![0xc3, 0x28]),
            OsString::from("10OFF"),
        ]);
        assert_eq!(raw.product_id, None);
        assert_eq!(raw.coupon_code.as_deref(), Some("10OFF"));
    }
}
